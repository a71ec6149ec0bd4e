use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::kv::parse_assignments;

/// Update fields of an existing log entry.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit { id, fields } = cmd {
        let patch = parse_assignments(fields)?;

        let mut store = cfg.open_store()?;

        // fields outside the schema are never merged; say so instead of
        // silently dropping them
        let ignored: Vec<&str> = patch
            .keys()
            .filter(|k| store.schema().field(k).is_none())
            .map(String::as_str)
            .collect();
        if !ignored.is_empty() {
            warning(format!("Ignoring unknown field(s): {}", ignored.join(", ")));
        }

        if ignored.len() == patch.len() {
            return Err(AppError::InvalidArgument(
                "no editable field given".to_string(),
            ));
        }

        let log = store.update(*id, &patch)?;

        success(format!("Log {} updated.", log.id));
        super::warn_if_memory(cfg);
        println!("{}", serde_json::to_string_pretty(&log)?);
    }

    Ok(())
}
