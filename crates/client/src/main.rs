//! holidaysync CLI entry point.

use clap::Parser;
use holidaysync_client::cli::Cli;
use holidaysync_client::output::format_report;
use holidaysync_client::{sync_year, ClientError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so stdout only carries the summary or the error.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "holidaysync=info,holidaysync_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = sync_year(&cli.sync_options())
        .await
        .and_then(|report| format_report(&report, cli.format));

    match result {
        Ok(summary) => {
            if !cli.quiet {
                println!("{}", summary);
            }
        }
        Err(e) => fail(e),
    }
}

fn fail(e: ClientError) -> ! {
    tracing::error!(error = %e, "sync failed");
    println!("{}", e);
    std::process::exit(1);
}
