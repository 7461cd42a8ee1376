//! Implementation of the `sitegenome init` command.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use tokio::fs;

use crate::adapters::sqlite::{initialize_database, PoolConfig};
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{Config, DatabaseConfig};
use crate::infrastructure::config::{ConfigLoader, CONFIG_DIR};

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing config file
    #[arg(long, short)]
    pub force: bool,

    /// Target directory (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,
}

#[derive(Debug, serde::Serialize)]
pub struct InitOutput {
    pub success: bool,
    pub message: String,
    pub initialized_path: PathBuf,
    pub config_written: bool,
    pub database_path: PathBuf,
}

impl CommandOutput for InitOutput {
    fn to_human(&self) -> String {
        let mut lines = vec![self.message.clone()];
        if self.config_written {
            lines.push(format!("Wrote default config to {CONFIG_DIR}/config.yaml"));
        }
        if self.success {
            lines.push(format!("Database ready at {}", self.database_path.display()));
        }
        lines.join("\n")
    }
}

pub async fn execute(args: InitArgs, json_mode: bool) -> Result<()> {
    let target_path = if args.path.is_absolute() {
        args.path.clone()
    } else {
        std::env::current_dir()
            .context("Failed to get current directory")?
            .join(&args.path)
    };

    let project_dir = target_path.join(CONFIG_DIR);
    fs::create_dir_all(project_dir.join("logs"))
        .await
        .with_context(|| format!("Failed to create {}", project_dir.display()))?;

    let config_path = project_dir.join("config.yaml");
    let config_written = args.force || !config_path.exists();
    let config = if config_written {
        let config = Config::default();
        let yaml = serde_yaml::to_string(&config).context("Failed to serialize default config")?;
        fs::write(&config_path, yaml)
            .await
            .with_context(|| format!("Failed to write {}", config_path.display()))?;
        config
    } else {
        ConfigLoader::load_from_file(&config_path)?
    };

    // Relative database paths resolve against the project root.
    let database_path = target_path.join(&config.database.path);
    let database = DatabaseConfig {
        path: database_path.display().to_string(),
        ..config.database
    };
    let pool = initialize_database(&database.url(), Some(PoolConfig::from(&database)))
        .await
        .context("Failed to initialize database")?;
    pool.close().await;

    let message = if config_written {
        "Project initialized."
    } else {
        "Project already initialized; existing config kept (use --force to overwrite)."
    };

    output(
        &InitOutput {
            success: true,
            message: message.to_string(),
            initialized_path: target_path,
            config_written,
            database_path,
        },
        json_mode,
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_init_creates_layout_and_keeps_existing_config() {
        let dir = TempDir::new().unwrap();
        let args = InitArgs {
            force: false,
            path: dir.path().to_path_buf(),
        };
        execute(args, true).await.unwrap();

        let config_path = dir.path().join(CONFIG_DIR).join("config.yaml");
        assert!(config_path.exists());
        assert!(dir.path().join(CONFIG_DIR).join("sitegenome.db").exists());
        ConfigLoader::load_from_file(&config_path).unwrap();

        std::fs::write(&config_path, "logging:\n  level: warn\n").unwrap();
        let again = InitArgs {
            force: false,
            path: dir.path().to_path_buf(),
        };
        execute(again, true).await.unwrap();
        let kept = std::fs::read_to_string(&config_path).unwrap();
        assert!(kept.contains("warn"));
    }

    #[tokio::test]
    async fn test_init_creates_database_at_configured_path() {
        let dir = TempDir::new().unwrap();
        let project_dir = dir.path().join(CONFIG_DIR);
        std::fs::create_dir_all(&project_dir).unwrap();
        std::fs::write(
            project_dir.join("config.yaml"),
            "database:\n  path: data/engagement.db\n",
        )
        .unwrap();

        let args = InitArgs {
            force: false,
            path: dir.path().to_path_buf(),
        };
        execute(args, true).await.unwrap();

        assert!(dir.path().join("data").join("engagement.db").exists());
        assert!(!project_dir.join("sitegenome.db").exists());
    }

    #[test]
    fn test_default_database_lives_in_config_dir() {
        let default_path = std::path::Path::new(&Config::default().database.path).to_path_buf();
        assert_eq!(default_path, std::path::Path::new(CONFIG_DIR).join("sitegenome.db"));
    }
}
