use anyhow::Context;
use clap::Parser;
use colored::*;
use github_portfolio::app::{Portfolio, ViewSnapshot};
use github_portfolio::cli::Cli;
use github_portfolio::github::GitHubClient;
use github_portfolio::notify::Severity;
use github_portfolio::render::render;
use github_portfolio::signals::{spawn_ctrl_c, spawn_line_reader, until_quit, Command, Subscriptions};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::io::BufReader;
use tokio::sync::{mpsc, watch};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();

    // Logs go to stderr so they stay out of the rendered page
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info"))
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.to_config().context("Invalid configuration")?;

    println!("{}", "GitHub Portfolio".bold().green());
    println!("{}\n", "=".repeat(50).dimmed());

    let client = GitHubClient::new(&config).context("Failed to create GitHub client")?;
    info!(endpoint = %client.endpoint(), per_page = config.per_page, "Starting portfolio");

    let portfolio = Arc::new(Portfolio::new(client, &config));

    if cli.once {
        portfolio.mount().await;
        print!("{}", render(&portfolio.snapshot().await));
        return Ok(());
    }

    let (tx, mut commands) = mpsc::channel(32);

    let mut subscriptions = Subscriptions::new();
    subscriptions.push(spawn_renderer(portfolio.subscribe()));
    subscriptions.push(spawn_line_reader(BufReader::new(tokio::io::stdin()), tx.clone()));
    subscriptions.push(spawn_ctrl_c(tx));

    if until_quit(portfolio.mount(), &mut commands).await.is_none() {
        subscriptions.release();
        portfolio.teardown().await;
        println!("{}", "✅ Bye".green());
        return Ok(());
    }
    println!("{}", "Commands: more, theme, dark, light, scroll <px>, resize <px>, dismiss, show, quit".dimmed());

    let mut expiry = tokio::time::interval(Duration::from_millis(250));

    loop {
        tokio::select! {
            command = commands.recv() => {
                let Some(command) = command else { break };
                match command {
                    Command::LoadMore => {
                        let snapshot = portfolio.snapshot().await;
                        if snapshot.exhausted {
                            portfolio.notify("No more repositories", Severity::Info, None).await;
                        } else if !snapshot.loading {
                            portfolio.spawn_load_more();
                        }
                    }
                    Command::Signal(signal) => {
                        portfolio.handle_signal(signal).await;
                    }
                    Command::Dismiss => {
                        portfolio.dismiss_notification().await;
                    }
                    Command::Show => {
                        print!("{}", render(&portfolio.snapshot().await));
                    }
                    Command::Quit => break,
                }
            }
            _ = expiry.tick() => {
                portfolio.expire_notifications(Instant::now()).await;
            }
        }
    }

    subscriptions.release();
    portfolio.teardown().await;

    println!("{}", "✅ Bye".green());
    Ok(())
}

/// Print the page every time a new snapshot is published.
fn spawn_renderer(mut snapshots: watch::Receiver<ViewSnapshot>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while snapshots.changed().await.is_ok() {
            let snapshot = snapshots.borrow_and_update().clone();
            print!("{}", render(&snapshot));
        }
    })
}
