//! SiteGenome CLI entry point.

use clap::Parser;

use sitegenome::cli::{commands, handle_error, Cli, Commands};
use sitegenome::infrastructure::config::ConfigLoader;
use sitegenome::infrastructure::logging::{prune_expired_logs, LogConfig, LoggerImpl};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match ConfigLoader::load() {
        Ok(config) => config,
        Err(err) => handle_error(err, cli.json),
    };

    let log_config = LogConfig::from(&config.logging);
    let _logger = match LoggerImpl::init(&log_config) {
        Ok(logger) => Some(logger),
        Err(err) => {
            eprintln!("warning: logging disabled: {err:#}");
            None
        }
    };

    if let Some(ref log_dir) = log_config.log_dir {
        if let Err(err) = prune_expired_logs(log_dir, log_config.retention_days).await {
            tracing::warn!(error = %err, "log retention cleanup failed");
        }
    }

    let result = match cli.command {
        Commands::Init(args) => commands::init::execute(args, cli.json).await,
        Commands::Analysis(args) => commands::analysis::execute(args, &config, cli.json).await,
        Commands::Tasks(args) => commands::tasks::execute(args, &config, cli.json).await,
        Commands::Streak(args) => commands::streak::execute(args, &config, cli.json).await,
        Commands::Badges(args) => commands::badges::execute(args, &config, cli.json).await,
    };

    if let Err(err) = result {
        handle_error(err, cli.json);
    }
}
