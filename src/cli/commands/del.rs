use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::fs::ask_confirmation;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let mut store = cfg.open_store()?;

        // fail on a missing id before asking anything
        store.get(*id)?;

        let prompt = format!("Delete log {id}? This action is irreversible.");
        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        store.delete(*id)?;
        success(format!("Log {id} has been deleted."));
        super::warn_if_memory(cfg);
    }

    Ok(())
}
