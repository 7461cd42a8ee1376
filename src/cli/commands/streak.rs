//! Streak CLI command.

use anyhow::Result;
use clap::{Args, Subcommand};
use uuid::Uuid;

use crate::cli::context::AppContext;
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::Config;
use crate::services::StreakSummary;

#[derive(Args, Debug)]
pub struct StreakArgs {
    #[command(subcommand)]
    pub command: StreakCommands,
}

#[derive(Subcommand, Debug)]
pub enum StreakCommands {
    /// Show the current and longest streak
    Show {
        #[arg(long, short)]
        user: Uuid,
    },
}

#[derive(Debug, serde::Serialize)]
pub struct StreakOutput {
    #[serde(flatten)]
    pub summary: StreakSummary,
}

impl CommandOutput for StreakOutput {
    fn to_human(&self) -> String {
        let s = &self.summary;
        let mut lines = vec![
            format!("Current streak: {} day(s)", s.effective_streak),
            format!("Longest streak: {} day(s)", s.record.longest_streak),
            format!("Active days:    {}", s.record.total_active_days),
        ];
        if let Some(last) = s.record.last_active_date {
            lines.push(format!("Last active:    {last}"));
        }
        if s.active_today {
            lines.push("You've been active today.".to_string());
        } else if s.at_risk {
            lines.push("Run an analysis today to keep your streak going.".to_string());
        }
        lines.join("\n")
    }
}

pub async fn execute(args: StreakArgs, config: &Config, json_mode: bool) -> Result<()> {
    let ctx = AppContext::open(config.clone()).await?;
    let service = ctx.achievement_service();

    match args.command {
        StreakCommands::Show { user } => {
            let summary = service.streak(user).await?;
            output(&StreakOutput { summary }, json_mode);
        }
    }

    ctx.pool.close().await;
    Ok(())
}
