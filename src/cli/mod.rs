//! Command-line interface.
//!
//! Each subcommand lives in [`commands`] and renders through
//! [`output::CommandOutput`] so every command supports `--json`.

pub mod commands;
pub mod context;
pub mod display;
pub mod output;

use clap::{Parser, Subcommand};

use commands::{
    analysis::AnalysisArgs, badges::BadgesArgs, init::InitArgs, streak::StreakArgs,
    tasks::TasksArgs,
};

#[derive(Parser, Debug)]
#[command(name = "sitegenome")]
#[command(about = "SiteGenome - website analysis engagement tracker", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the project directory, default config and database
    Init(InitArgs),
    /// Record analysis results and run the engagement pipeline
    Analysis(AnalysisArgs),
    /// Daily improvement tasks
    Tasks(TasksArgs),
    /// Activity streak
    Streak(StreakArgs),
    /// Achievement badges
    Badges(BadgesArgs),
}

/// Print a command failure and exit with status 1.
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    if json_mode {
        let body = serde_json::json!({
            "success": false,
            "error": format!("{err:#}"),
        });
        println!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
    } else {
        eprintln!("{} {err:#}", console::style("Error:").red().bold());
    }
    std::process::exit(1);
}
