use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        let store = cfg.open_store()?;
        let path = ExportLogic::export(&store, *format, file, *force)?;
        success(format!(
            "{} export completed: {} ({} log(s))",
            format.as_str().to_uppercase(),
            path.display(),
            store.len()
        ));
    }
    Ok(())
}
