//! CLI entry point for cms-sync

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cms-sync")]
#[command(version)]
#[command(about = "Synchronize local markdown writings with a GraphQL CMS", long_about = None)]
struct Cli {
    /// Files or directories to publish, as paths relative to the content root
    paths: Vec<PathBuf>,

    /// Exit non-zero when any file fails to publish (for CI)
    #[arg(long)]
    strict: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "cms_sync=debug,info"
    } else {
        "cms_sync=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = cms_sync::config::CmsConfig::from_env();
    let client = cms_sync::gql::GqlClient::new(&config);

    let summary = cms_sync::commands::publish::run(&client, &cli.paths);
    tracing::info!(
        "Done: {} published, {} skipped, {} failed",
        summary.published,
        summary.skipped,
        summary.failed
    );

    if cli.strict && summary.failed > 0 {
        anyhow::bail!("{} file(s) failed to publish", summary.failed);
    }

    Ok(())
}
