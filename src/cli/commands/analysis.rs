//! Analysis CLI commands.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use comfy_table::Cell;
use uuid::Uuid;

use crate::cli::context::AppContext;
use crate::cli::display::{list_table, render_list, step_label};
use crate::cli::output::{output, truncate, CommandOutput};
use crate::domain::models::{CategoryScoreSet, Config, WebsiteProfile};
use crate::services::{StepOutcome, TriggerReport};

const SCORES_EXAMPLE: &str = r#"{"findability":42,"trustProof":80}"#;

#[derive(Args, Debug)]
pub struct AnalysisArgs {
    #[command(subcommand)]
    pub command: AnalysisCommands,
}

#[derive(Subcommand, Debug)]
pub enum AnalysisCommands {
    /// Record a completed analysis and run streak, task and badge updates
    Record {
        /// User the analysis belongs to
        #[arg(long, short)]
        user: Uuid,
        /// Analyzed URL
        #[arg(long)]
        url: String,
        /// Mark as a competitor analysis rather than the user's own site
        #[arg(long)]
        competitor: bool,
        #[arg(
            long,
            default_value = "{}",
            help = format!("Category scores as a JSON object, e.g. '{SCORES_EXAMPLE}'")
        )]
        scores: String,
        /// Overall score (0-100)
        #[arg(long)]
        overall: Option<f64>,
    },
    /// List recorded analyses
    List {
        /// User whose analyses to list
        #[arg(long, short)]
        user: Uuid,
    },
}

#[derive(Debug, serde::Serialize)]
pub struct ProfileOutput {
    pub id: String,
    pub url: String,
    pub primary: bool,
    pub status: String,
    pub overall_score: Option<f64>,
    pub category_scores: CategoryScoreSet,
}

impl From<&WebsiteProfile> for ProfileOutput {
    fn from(profile: &WebsiteProfile) -> Self {
        Self {
            id: profile.id.to_string(),
            url: profile.url.clone(),
            primary: profile.is_primary,
            status: profile.status.as_str().to_string(),
            overall_score: profile.overall_score,
            category_scores: profile.category_scores.clone(),
        }
    }
}

#[derive(Debug, serde::Serialize)]
pub struct RecordOutput {
    pub profile: ProfileOutput,
    pub report: TriggerReport,
}

impl CommandOutput for RecordOutput {
    fn to_human(&self) -> String {
        let report = &self.report;
        let mut lines = vec![
            format!("Recorded analysis {} for {}", &self.profile.id[..8], self.profile.url),
            String::new(),
        ];

        for (name, step) in [
            ("streak", &report.streak_step),
            ("tasks", &report.tasks_step),
            ("stats", &report.stats_step),
            ("badges", &report.badges_step),
        ] {
            let detail = match step {
                StepOutcome::Succeeded => "ok".to_string(),
                StepOutcome::Skipped(reason) => format!("skipped: {reason}"),
                StepOutcome::Failed(reason) => format!("failed: {reason}"),
            };
            let label = step_label(
                &format!("{name:<7}"),
                step.is_failed(),
                matches!(step, StepOutcome::Skipped(_)),
            );
            lines.push(format!("  {label} {detail}"));
        }

        lines.push(String::new());
        lines.push(format!(
            "Streak: {} day(s) (longest {})",
            report.streak.current_streak, report.streak.longest_streak
        ));

        if !report.tasks_created.is_empty() {
            lines.push("\nToday's tasks:".to_string());
            for task in &report.tasks_created {
                lines.push(format!("  - [{}] {}", task.category, task.text));
            }
        }

        if !report.badges_unlocked.is_empty() {
            lines.push("\nBadges unlocked:".to_string());
            for badge in &report.badges_unlocked {
                lines.push(format!("  {} {} - {}", badge.glyph, badge.title, badge.description));
            }
        }

        lines.join("\n")
    }
}

#[derive(Debug, serde::Serialize)]
pub struct ProfileListOutput {
    pub profiles: Vec<ProfileOutput>,
    pub total: usize,
}

impl CommandOutput for ProfileListOutput {
    fn to_human(&self) -> String {
        let mut table = list_table(&["id", "url", "kind", "status", "overall"]);
        for profile in &self.profiles {
            table.add_row(vec![
                Cell::new(&profile.id[..8]),
                Cell::new(truncate(&profile.url, 48)),
                Cell::new(if profile.primary { "own" } else { "competitor" }),
                Cell::new(&profile.status),
                Cell::new(
                    profile
                        .overall_score
                        .map_or_else(|| "-".to_string(), |s| format!("{s:.0}")),
                ),
            ]);
        }
        render_list("profile", &table, self.total)
    }
}

pub async fn execute(args: AnalysisArgs, config: &Config, json_mode: bool) -> Result<()> {
    let ctx = AppContext::open(config.clone()).await?;
    let service = ctx.analysis_service();

    match args.command {
        AnalysisCommands::Record {
            user,
            url,
            competitor,
            scores,
            overall,
        } => {
            let scores = CategoryScoreSet::from_json_str(&scores)
                .context("--scores must be a JSON object of category scores")?;

            let profile = service
                .record_completed(user, url, !competitor, overall, scores)
                .await?;
            let history = service.list_profiles(user).await?;
            let report = ctx.gamification_trigger().run(user, &history).await;

            output(
                &RecordOutput {
                    profile: ProfileOutput::from(&profile),
                    report,
                },
                json_mode,
            );
        }
        AnalysisCommands::List { user } => {
            let profiles = service.list_profiles(user).await?;
            let out = ProfileListOutput {
                total: profiles.len(),
                profiles: profiles.iter().map(ProfileOutput::from).collect(),
            };
            output(&out, json_mode);
        }
    }

    ctx.pool.close().await;
    Ok(())
}
