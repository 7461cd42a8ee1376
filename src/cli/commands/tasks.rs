//! Daily task CLI commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use comfy_table::Cell;
use uuid::Uuid;

use crate::cli::context::AppContext;
use crate::cli::display::{check_mark, list_table, render_list};
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{Config, DailyTask};

#[derive(Args, Debug)]
pub struct TasksArgs {
    #[command(subcommand)]
    pub command: TasksCommands,
}

#[derive(Subcommand, Debug)]
pub enum TasksCommands {
    /// Show today's tasks
    Today {
        #[arg(long, short)]
        user: Uuid,
    },
    /// Mark a task as done
    Complete {
        #[arg(long, short)]
        user: Uuid,
        /// Task ID
        id: Uuid,
    },
    /// Mark a completed task as not done
    Reopen {
        #[arg(long, short)]
        user: Uuid,
        /// Task ID
        id: Uuid,
    },
}

#[derive(Debug, serde::Serialize)]
pub struct TaskListOutput {
    pub tasks: Vec<DailyTask>,
    pub total: usize,
    pub completed: usize,
}

impl CommandOutput for TaskListOutput {
    fn to_human(&self) -> String {
        let mut table = list_table(&["", "id", "category", "task"]);
        for task in &self.tasks {
            table.add_row(vec![
                Cell::new(check_mark(task.completed)),
                Cell::new(task.id),
                Cell::new(&task.category),
                Cell::new(&task.text),
            ]);
        }
        let mut rendered = render_list("task", &table, self.total);
        if self.total > 0 {
            rendered.push_str(&format!("\n{}/{} done", self.completed, self.total));
        }
        rendered
    }
}

#[derive(Debug, serde::Serialize)]
pub struct TaskActionOutput {
    pub success: bool,
    pub message: String,
    pub task: DailyTask,
}

impl CommandOutput for TaskActionOutput {
    fn to_human(&self) -> String {
        self.message.clone()
    }
}

pub async fn execute(args: TasksArgs, config: &Config, json_mode: bool) -> Result<()> {
    let ctx = AppContext::open(config.clone()).await?;
    let service = ctx.task_service();

    match args.command {
        TasksCommands::Today { user } => {
            let tasks = service.today_tasks(user).await?;
            let out = TaskListOutput {
                total: tasks.len(),
                completed: tasks.iter().filter(|t| t.completed).count(),
                tasks,
            };
            output(&out, json_mode);
        }
        TasksCommands::Complete { user, id } => {
            let task = service.complete_task(user, id).await?;
            let out = TaskActionOutput {
                success: true,
                message: format!("Completed: {}", task.text),
                task,
            };
            output(&out, json_mode);
        }
        TasksCommands::Reopen { user, id } => {
            let task = service.reopen_task(user, id).await?;
            let out = TaskActionOutput {
                success: true,
                message: format!("Reopened: {}", task.text),
                task,
            };
            output(&out, json_mode);
        }
    }

    ctx.pool.close().await;
    Ok(())
}
