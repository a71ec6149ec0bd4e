use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { id } = cmd {
        let store = cfg.open_store()?;
        let log = store.get(*id)?;
        println!("{}", serde_json::to_string_pretty(log)?);
    }

    Ok(())
}
