//! Scoped listener tasks and the console command vocabulary.

use crate::view::ViewSignal;
use std::future::Future;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// One line typed at the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    LoadMore,
    Signal(ViewSignal),
    Dismiss,
    Show,
    Quit,
}

impl Command {
    pub fn parse(line: &str) -> Option<Command> {
        let mut words = line.split_whitespace();
        let verb = words.next()?.to_ascii_lowercase();
        let arg = words.next().and_then(|w| w.parse::<u32>().ok());

        let command = match (verb.as_str(), arg) {
            ("more" | "m", _) => Command::LoadMore,
            ("theme" | "t", _) => Command::Signal(ViewSignal::ToggleTheme),
            ("dark", _) => Command::Signal(ViewSignal::ColorScheme { dark: true }),
            ("light", _) => Command::Signal(ViewSignal::ColorScheme { dark: false }),
            ("scroll", Some(offset)) => Command::Signal(ViewSignal::Scroll { offset }),
            ("resize", Some(width)) => Command::Signal(ViewSignal::Resize { width }),
            ("dismiss" | "d", _) => Command::Dismiss,
            ("show" | "s", _) => Command::Show,
            ("quit" | "q" | "exit", _) => Command::Quit,
            _ => return None,
        };
        Some(command)
    }
}

/// Listener tasks acquired on mount. Every task is aborted when the guard
/// is dropped, whichever way the owner exits.
#[derive(Debug, Default)]
pub struct Subscriptions {
    handles: Vec<JoinHandle<()>>,
}

impl Subscriptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, handle: JoinHandle<()>) {
        self.handles.push(handle);
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn release(&mut self) {
        if self.handles.is_empty() {
            return;
        }
        debug!(count = self.handles.len(), "Releasing subscriptions");
        for handle in self.handles.drain(..) {
            handle.abort();
        }
    }
}

impl Drop for Subscriptions {
    fn drop(&mut self) {
        self.release();
    }
}

/// Forward parsed lines from `reader` to `commands`. Ends on EOF or when the
/// receiver is gone; EOF is reported as [`Command::Quit`].
pub fn spawn_line_reader<R>(reader: R, commands: mpsc::Sender<Command>) -> JoinHandle<()>
where
    R: AsyncBufRead + Unpin + Send + 'static,
{
    tokio::spawn(async move {
        let mut lines = reader.lines();
        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    match Command::parse(&line) {
                        Some(command) => {
                            if commands.send(command).await.is_err() {
                                break;
                            }
                        }
                        None => warn!(line = %line.trim(), "Unknown command"),
                    }
                }
                Ok(None) => {
                    let _ = commands.send(Command::Quit).await;
                    break;
                }
                Err(e) => {
                    warn!("Failed to read input: {}", e);
                    let _ = commands.send(Command::Quit).await;
                    break;
                }
            }
        }
        debug!("Line reader ended");
    })
}

/// Turn Ctrl+C into [`Command::Quit`].
pub fn spawn_ctrl_c(commands: mpsc::Sender<Command>) -> JoinHandle<()> {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("🛑 Interrupt received");
            let _ = commands.send(Command::Quit).await;
        }
    })
}

/// Drive `task` to completion unless [`Command::Quit`] arrives first or the
/// command channel closes; either way `task` is dropped and `None` returned.
/// Other commands received meanwhile are discarded.
pub async fn until_quit<F>(task: F, commands: &mut mpsc::Receiver<Command>) -> Option<F::Output>
where
    F: Future,
{
    tokio::pin!(task);

    loop {
        tokio::select! {
            output = &mut task => return Some(output),
            command = commands.recv() => match command {
                Some(Command::Quit) | None => {
                    info!("Quit requested before startup finished");
                    return None;
                }
                Some(command) => debug!(?command, "Ignoring command during startup"),
            },
        }
    }
}
