use clap::Parser;
use client::api::HttpBackend;
use client::config::{Cli, Command};
use client::errors::ClientError;
use client::runtime::EventLoop;
use client::shell;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), ClientError> {
    // Logs go to stderr; stdout carries the rendered screen.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse().map_err(
            |_| ClientError::InvalidConfig("bad log directive".to_string()),
        )?))
        .init();

    let cli = Cli::parse();
    let backend = HttpBackend::new(&cli.backend_url, cli.timeout())?;

    tracing::info!(backend = %backend.base_url(), min_age = cli.min_age, "zk-creds client");

    match cli.command() {
        Command::Shell => {
            let mut ev = EventLoop::new(backend, cli.min_age);
            shell::run_shell(&mut ev, cli.format).await?;
        }
        Command::Demo { passport } => {
            let mut ev = EventLoop::new(backend, cli.min_age);
            let screen = shell::run_demo(&mut ev, &passport, cli.format).await?;
            println!("{screen}");
        }
        Command::Health => {
            let health = backend.health().await?;
            println!("{} ({})", health.status, health.version.as_deref().unwrap_or("unknown version"));
        }
        Command::Root => {
            let root = backend.merkle_root().await?;
            println!("{}", root.root);
        }
    }

    Ok(())
}
