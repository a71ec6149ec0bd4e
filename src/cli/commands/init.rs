use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This creates:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - an empty JSON data file (if missing)
pub fn handle(cli: &Cli) -> AppResult<()> {
    if let Commands::Init { preset } = &cli.command {
        println!("⚙️  Initializing rTimesheet…");

        let cfg = Config::init_all(cli.data.clone(), *preset, cli.test)?;

        if !cli.test {
            println!("📄 Config file : {}", Config::config_file().display());
        }
        println!("🗄️  Data file   : {}", cfg.data_file);
        println!(
            "🧾 Required    : {}",
            cfg.schema()?.required_names().join(", ")
        );

        println!("🎉 rTimesheet initialization completed!");
    }

    Ok(())
}
