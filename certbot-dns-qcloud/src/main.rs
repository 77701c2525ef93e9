//! certbot manual hook entry point
//!
//! `auth` creates the challenge record and waits for propagation, `cleanup`
//! removes it. Logs go to stderr; the exit status reports success.

mod cli;

use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use certbot_dns_qcloud::ChallengeAuthenticator;
use clap::Parser;
use cli::{Cli, Command};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> ExitCode {
    // certbot forwards hook stdout into its own log, keep ours on stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.config()?;
    let authenticator =
        ChallengeAuthenticator::from_config(&config).context("cannot set up Qcloud DNS client")?;

    match &cli.command {
        Command::Auth(args) => {
            let request = args.to_request();
            authenticator
                .perform_request(&request)
                .await
                .with_context(|| format!("failed to create TXT record {}", request.record_name))?;

            tracing::info!(
                "Waiting {} seconds for DNS changes to propagate",
                config.propagation_seconds
            );
            tokio::time::sleep(Duration::from_secs(config.propagation_seconds)).await;
        }
        Command::Cleanup(args) => {
            let request = args.to_request();
            authenticator
                .cleanup_request(&request)
                .await
                .with_context(|| format!("failed to remove TXT record {}", request.record_name))?;
        }
    }

    Ok(())
}
