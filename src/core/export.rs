use crate::core::store::LogStore;
use crate::errors::{AppError, AppResult};
use crate::models::LogRecord;
use crate::utils::fs::ensure_writable;
use clap::ValueEnum;
use csv::Writer;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

pub struct ExportLogic;

impl ExportLogic {
    /// Export every record of the store.
    ///
    /// - `file` must be an absolute path
    /// - an existing file is only replaced with `force` or after confirmation
    pub fn export(
        store: &LogStore,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<PathBuf> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        match format {
            ExportFormat::Json => write_json(path, store.list())?,
            ExportFormat::Csv => {
                let columns = csv_columns(store);
                write_csv(path, &columns, store.list())?
            }
        }

        Ok(path.to_path_buf())
    }
}

fn write_json(path: &Path, records: &[LogRecord]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(records)?;
    fs::write(path, json)?;
    Ok(())
}

/// Schema fields first, then any extra keys found in older records.
fn csv_columns(store: &LogStore) -> Vec<String> {
    let mut columns: Vec<String> = store
        .schema()
        .fields()
        .iter()
        .map(|f| f.name.clone())
        .collect();

    for r in store.list() {
        for key in r.fields.keys() {
            if !columns.contains(key) {
                columns.push(key.clone());
            }
        }
    }

    columns
}

fn write_csv(path: &Path, columns: &[String], records: &[LogRecord]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    let mut header = vec!["id".to_string()];
    header.extend(columns.iter().cloned());
    header.push("createdAt".to_string());
    header.push("updatedAt".to_string());
    wtr.write_record(&header)?;

    for r in records {
        let mut row = vec![r.id.to_string()];
        row.extend(columns.iter().map(|c| r.field_text(c)));
        row.push(r.created_at.to_rfc3339());
        row.push(r.updated_at.map(|t| t.to_rfc3339()).unwrap_or_default());
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}
