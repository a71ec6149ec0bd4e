use crate::config::{Config, StorageKind};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::net::SocketAddr;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<()> {
        println!("📄 Current configuration ({}):\n", Config::config_file().display());
        println!("{}", serde_yaml::to_string(cfg)?);
        Ok(())
    }

    /// Validate the loaded configuration; returns the list of problems found.
    pub fn check(cfg: &Config) -> Vec<String> {
        let mut problems = Vec::new();

        if let Err(e) = cfg.schema() {
            problems.push(e.to_string());
        }

        if cfg.bind.parse::<SocketAddr>().is_err() {
            problems.push(format!("bind address '{}' is not HOST:PORT", cfg.bind));
        }

        if cfg.storage == StorageKind::File && cfg.data_file.trim().is_empty() {
            problems.push("data_file is empty".to_string());
        }

        if tracing_subscriber::EnvFilter::try_new(&cfg.log_level).is_err() {
            problems.push(format!("log_level '{}' is not a valid filter", cfg.log_level));
        }

        problems
    }

    pub fn check_and_report(cfg: &Config) -> AppResult<()> {
        let problems = Self::check(cfg);

        if problems.is_empty() {
            success("Configuration is valid.");
            return Ok(());
        }

        for p in &problems {
            warning(p);
        }
        Err(AppError::Config(format!("{} problem(s) found", problems.len())))
    }

    pub fn edit(editor: &Option<String>) -> AppResult<()> {
        let path = Config::config_file();
        if !path.exists() {
            Config::default().save()?;
        }

        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

        match Command::new(&editor_to_use).arg(&path).status() {
            Ok(s) if s.success() => {
                success(format!(
                    "Configuration file edited successfully using '{editor_to_use}'"
                ));
                Ok(())
            }
            _ if editor_to_use != default_editor => {
                warning(format!(
                    "Editor '{editor_to_use}' not available, falling back to '{default_editor}'"
                ));
                let status = Command::new(&default_editor)
                    .arg(&path)
                    .status()
                    .map_err(|e| AppError::Config(e.to_string()))?;
                if status.success() {
                    success(format!(
                        "Configuration file edited successfully using fallback '{default_editor}'"
                    ));
                    Ok(())
                } else {
                    Err(AppError::Config(format!(
                        "editor '{default_editor}' exited with {status}"
                    )))
                }
            }
            Ok(s) => Err(AppError::Config(format!(
                "editor '{editor_to_use}' exited with {s}"
            ))),
            Err(e) => Err(AppError::Config(e.to_string())),
        }
    }
}
