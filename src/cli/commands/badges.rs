//! Badge CLI commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use comfy_table::Cell;
use uuid::Uuid;

use crate::cli::context::AppContext;
use crate::cli::display::{list_table, render_list};
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{BadgeDefinition, Config, BADGE_CATALOG};
use crate::services::BadgeStatus;

#[derive(Args, Debug)]
pub struct BadgesArgs {
    #[command(subcommand)]
    pub command: BadgesCommands,
}

#[derive(Subcommand, Debug)]
pub enum BadgesCommands {
    /// Show every badge and whether the user has unlocked it
    List {
        #[arg(long, short)]
        user: Uuid,
        /// Only show unlocked badges
        #[arg(long)]
        unlocked: bool,
    },
    /// Show the badge catalog with unlock conditions
    Catalog,
}

#[derive(Debug, serde::Serialize)]
pub struct BadgeBoardOutput {
    pub badges: Vec<BadgeStatus>,
    pub unlocked: usize,
    pub total: usize,
}

impl CommandOutput for BadgeBoardOutput {
    fn to_human(&self) -> String {
        let mut table = list_table(&["", "badge", "unlocked", "description"]);
        for status in &self.badges {
            let unlocked = status
                .unlocked_at
                .map_or_else(|| "-".to_string(), |at| at.format("%Y-%m-%d").to_string());
            table.add_row(vec![
                Cell::new(status.glyph),
                Cell::new(status.badge.name),
                Cell::new(unlocked),
                Cell::new(status.badge.description),
            ]);
        }
        format!(
            "{}\n{}/{} unlocked",
            render_list("badge", &table, self.badges.len()),
            self.unlocked,
            self.total
        )
    }
}

#[derive(Debug, serde::Serialize)]
pub struct CatalogOutput {
    pub badges: &'static [BadgeDefinition],
}

impl CommandOutput for CatalogOutput {
    fn to_human(&self) -> String {
        let mut table = list_table(&["", "id", "name", "condition"]);
        for badge in self.badges {
            table.add_row(vec![
                Cell::new(badge.glyph()),
                Cell::new(badge.id),
                Cell::new(badge.name),
                Cell::new(badge.condition),
            ]);
        }
        render_list("badge", &table, self.badges.len())
    }
}

pub async fn execute(args: BadgesArgs, config: &Config, json_mode: bool) -> Result<()> {
    match args.command {
        BadgesCommands::Catalog => {
            output(&CatalogOutput { badges: BADGE_CATALOG }, json_mode);
        }
        BadgesCommands::List { user, unlocked } => {
            let ctx = AppContext::open(config.clone()).await?;
            let board = ctx.achievement_service().badge_board(user).await?;
            ctx.pool.close().await;

            let total = board.len();
            let unlocked_count = board.iter().filter(|s| s.unlocked_at.is_some()).count();
            let badges = if unlocked {
                board.into_iter().filter(|s| s.unlocked_at.is_some()).collect()
            } else {
                board
            };

            output(
                &BadgeBoardOutput {
                    badges,
                    unlocked: unlocked_count,
                    total,
                },
                json_mode,
            );
        }
    }

    Ok(())
}
