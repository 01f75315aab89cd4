use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use arogya_actions::api::ApiServer;
use arogya_actions::knowledge::KnowledgeStore;
use arogya_actions::resolver::Resolver;
use arogya_actions::{Config, config};

/// Arogya - bilingual healthcare knowledge action server
#[derive(Parser)]
#[command(name = "arogya-actions", version, about)]
struct Cli {
    /// Directory holding the knowledge base JSON documents
    #[arg(short, long, env = "AROGYA_KNOWLEDGE_DIR", default_value = config::DEFAULT_KNOWLEDGE_DIR)]
    knowledge_dir: PathBuf,

    /// Port to listen on
    #[arg(long, env = "AROGYA_PORT", default_value_t = config::DEFAULT_PORT)]
    port: u16,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 => "info,arogya_actions=info",
        1 => "info,arogya_actions=debug",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("fatal: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config {
        knowledge_dir: cli.knowledge_dir,
        port: cli.port,
    };
    tracing::debug!(?config, "loaded configuration");

    tracing::info!(
        knowledge_dir = %config.knowledge_dir.display(),
        port = config.port,
        "starting arogya action server"
    );

    // A missing directory surfaces as per-turn apologies, not a startup
    // failure; the dialogue framework keeps getting normal responses
    if !config.knowledge_dir.is_dir() {
        tracing::warn!(
            dir = %config.knowledge_dir.display(),
            "knowledge directory not found"
        );
    }

    let resolver = Resolver::new(KnowledgeStore::new(config.knowledge_dir));
    ApiServer::new(resolver, config.port).run().await?;

    Ok(())
}
