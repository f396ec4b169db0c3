use crate::config::PortfolioConfig;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub fn from_dark(dark: bool) -> Self {
        if dark { Theme::Dark } else { Theme::Light }
    }

    pub fn inverted(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

/// External events the view reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewSignal {
    /// OS color scheme preference changed
    ColorScheme { dark: bool },
    /// User clicked the theme button
    ToggleTheme,
    Scroll { offset: u32 },
    Resize { width: u32 },
    /// Initial profile and first page have settled
    ContentReady,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewFlags {
    pub theme: Theme,
    pub top_button_visible: bool,
    pub wide_layout: bool,
    pub container_visible: bool,
}

/// Flags derived from viewport, scroll and color scheme signals.
#[derive(Debug, Clone)]
pub struct ViewState {
    scroll_threshold: u32,
    wide_layout_threshold: u32,
    flags: ViewFlags,
}

impl ViewState {
    pub fn new(config: &PortfolioConfig) -> Self {
        Self {
            scroll_threshold: config.scroll_threshold,
            wide_layout_threshold: config.wide_layout_threshold,
            flags: ViewFlags {
                theme: Theme::from_dark(config.prefers_dark),
                top_button_visible: false,
                wide_layout: config.initial_width >= config.wide_layout_threshold,
                container_visible: false,
            },
        }
    }

    pub fn flags(&self) -> ViewFlags {
        self.flags
    }

    /// Apply one signal. Returns true when any flag changed.
    pub fn apply(&mut self, signal: ViewSignal) -> bool {
        let before = self.flags;
        let flags = &mut self.flags;

        match signal {
            ViewSignal::ColorScheme { dark } => flags.theme = Theme::from_dark(dark),
            ViewSignal::ToggleTheme => flags.theme = flags.theme.inverted(),
            ViewSignal::Scroll { offset } => {
                flags.top_button_visible = offset >= self.scroll_threshold
            }
            ViewSignal::Resize { width } => flags.wide_layout = width >= self.wide_layout_threshold,
            // one-way
            ViewSignal::ContentReady => flags.container_visible = true,
        }

        self.flags != before
    }
}
