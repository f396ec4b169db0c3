use crate::app::ViewSnapshot;
use crate::config::PortfolioLink;
use crate::notify::Severity;
use crate::types::{DeveloperProfile, RepoSummary};
use crate::view::Theme;
use colored::*;
use std::fmt;

/// Render a snapshot as console text. Pure: same snapshot, same output.
pub fn render(snapshot: &ViewSnapshot) -> String {
    snapshot.to_string()
}

impl fmt::Display for ViewSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.flags.container_visible {
            writeln!(f, "{}", "Loading...".dimmed())?;
            return write_notification(f, self);
        }

        write_header(f, self)?;
        write_profile(f, &self.profile, &self.social_links)?;
        write_links(f, &self.links)?;
        write_repos(f, self)?;

        if self.flags.top_button_visible {
            writeln!(f, "{}", "[↑ top]".dimmed())?;
        }

        write_notification(f, self)
    }
}

fn write_header(f: &mut fmt::Formatter<'_>, snapshot: &ViewSnapshot) -> fmt::Result {
    let theme_icon = match snapshot.flags.theme {
        Theme::Dark => "☾",
        Theme::Light => "☀",
    };
    let nav = match (snapshot.flags.wide_layout, snapshot.links.is_empty()) {
        (false, _) => "≡",
        (true, false) => "Links | Repositories",
        (true, true) => "Repositories",
    };

    let title = if snapshot.profile.is_empty() {
        "portfolio"
    } else {
        snapshot.profile.login.as_str()
    };

    writeln!(f, "{}  {}  {}", title.bold(), nav.dimmed(), theme_icon)?;
    writeln!(f, "{}", "=".repeat(50).dimmed())
}

fn write_profile(
    f: &mut fmt::Formatter<'_>,
    profile: &DeveloperProfile,
    social_links: &[PortfolioLink],
) -> fmt::Result {
    if profile.is_empty() {
        writeln!(f, "{}", "(profile unavailable)".dimmed())?;
    } else {
        writeln!(f, "{}", profile.display_name().bold())?;
        writeln!(f, "{}", format!("@{}", profile.login).dimmed())?;
        if !profile.avatar_url.is_empty() {
            writeln!(f, "avatar: {}", profile.avatar_url.blue())?;
        }
        if let Some(bio) = profile.bio.as_deref().filter(|b| !b.is_empty()) {
            writeln!(f, "{}", bio)?;
        }
        if let (Some(followers), Some(following)) = (profile.followers, profile.following) {
            writeln!(f, "followers: {} | following: {}", followers, following)?;
        }
        if let Some(url) = &profile.html_url {
            writeln!(f, "{}", url.blue())?;
        }
    }

    for link in social_links {
        writeln!(f, "  {} {}", link.label.bold(), link.url.blue())?;
    }
    writeln!(f)
}

fn write_links(f: &mut fmt::Formatter<'_>, links: &[PortfolioLink]) -> fmt::Result {
    if links.is_empty() {
        return Ok(());
    }

    writeln!(f, "{}", "Links".bold())?;
    for link in links {
        writeln!(f, "  {} {}", link.label, link.url.blue())?;
    }
    writeln!(f)
}

fn write_repos(f: &mut fmt::Formatter<'_>, snapshot: &ViewSnapshot) -> fmt::Result {
    writeln!(f, "{} ({})", "Repositories".bold(), snapshot.repos.len())?;

    for (index, repo) in snapshot.repos.iter().enumerate() {
        write_repo(f, repo, index % 2 == 1, snapshot.flags.theme)?;
    }

    let footer = if snapshot.loading {
        "Loading more...".dimmed()
    } else if snapshot.exhausted {
        "No more repositories".dimmed()
    } else {
        "Type `more` to load more".normal()
    };
    writeln!(f, "{}", footer)?;

    if let Some(url) = snapshot.profile.repositories_url() {
        writeln!(f, "View all on GitHub: {}", url.blue())?;
    }
    Ok(())
}

fn write_repo(f: &mut fmt::Formatter<'_>, repo: &RepoSummary, striped: bool, theme: Theme) -> fmt::Result {
    let name = match (striped, theme) {
        (true, Theme::Dark) => repo.name.bright_white().bold(),
        (true, Theme::Light) => repo.name.black().bold(),
        (false, _) => repo.name.cyan().bold(),
    };
    writeln!(f, "  {}", name)?;

    if let Some(description) = repo.description.as_deref().filter(|d| !d.is_empty()) {
        writeln!(f, "    {}", description)?;
    }

    let meta = match &repo.language {
        Some(language) => format!(
            "stars: {} | forks: {} | language: {}",
            repo.stargazers_count, repo.forks_count, language
        ),
        None => format!("stars: {} | forks: {}", repo.stargazers_count, repo.forks_count),
    };
    writeln!(f, "    {}", meta.dimmed())?;

    if let Some(site) = repo.pages_url() {
        writeln!(f, "    {}", site.blue())?;
    }
    writeln!(f, "    {}", repo.html_url.blue())
}

fn write_notification(f: &mut fmt::Formatter<'_>, snapshot: &ViewSnapshot) -> fmt::Result {
    if let Some(n) = &snapshot.notification {
        let text = match n.severity {
            Severity::Error => n.message.red().bold(),
            Severity::Warning => n.message.yellow(),
            Severity::Success => n.message.green(),
            Severity::Info => n.message.normal(),
        };
        writeln!(f, "\n{}", text)?;
    }
    Ok(())
}
