use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::store::LogStore;
use crate::errors::AppResult;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { json } = cmd {
        let store = cfg.open_store()?;

        if *json {
            println!("{}", serde_json::to_string_pretty(store.list())?);
            return Ok(());
        }

        if store.is_empty() {
            println!("No logs recorded in {}", store.location());
            return Ok(());
        }

        print!("{}", render(&store));
        println!("\n{} log(s)", store.len());
    }

    Ok(())
}

fn render(store: &LogStore) -> String {
    let names: Vec<&str> = store
        .schema()
        .fields()
        .iter()
        .map(|f| f.name.as_str())
        .collect();

    let mut headers = vec!["id"];
    headers.extend(names.iter().copied());
    headers.push("created");
    headers.push("updated");

    let mut table = Table::new(headers);
    for log in store.list() {
        let mut row = vec![log.id.to_string()];
        row.extend(names.iter().map(|n| log.field_text(n)));
        row.push(log.created_str());
        row.push(log.updated_str());
        table.add_row(row);
    }

    table.render()
}
