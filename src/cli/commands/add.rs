use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::kv::parse_assignments;

/// Create a log entry from `FIELD=VALUE` arguments.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { fields } = cmd {
        let input = parse_assignments(fields)?;

        let mut store = cfg.open_store()?;
        let log = store.create(&input)?;

        success(format!("Log {} created.", log.id));
        super::warn_if_memory(cfg);
        println!("{}", serde_json::to_string_pretty(&log)?);
    }

    Ok(())
}
