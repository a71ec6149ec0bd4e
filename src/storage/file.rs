//! Single JSON file backend.

use super::Backend;
use crate::errors::{AppError, AppResult};
use crate::models::LogRecord;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

pub struct JsonFile {
    path: PathBuf,
}

impl JsonFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Sibling file the new content is written to before the rename.
    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "logs.json".to_string());
        self.path.with_file_name(format!(".{name}.tmp"))
    }

    fn write_atomically(&self, content: &[u8]) -> io::Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let tmp = self.temp_path();
        {
            let mut f = fs::File::create(&tmp)?;
            f.write_all(content)?;
            f.sync_all()?;
        }

        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(e);
        }

        self.sync_parent()
    }

    /// Flush the directory entry so the rename itself survives a crash.
    #[cfg(unix)]
    fn sync_parent(&self) -> io::Result<()> {
        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => std::path::Path::new("."),
        };
        fs::File::open(parent)?.sync_all()
    }

    #[cfg(not(unix))]
    fn sync_parent(&self) -> io::Result<()> {
        Ok(())
    }
}

impl Backend for JsonFile {
    fn load(&self) -> AppResult<Vec<LogRecord>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "data file not found, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(AppError::Load {
                    target: self.describe(),
                    source: e,
                });
            }
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&content).map_err(|e| AppError::CorruptData {
            path: self.describe(),
            reason: e.to_string(),
        })
    }

    fn save(&mut self, records: &[LogRecord]) -> AppResult<()> {
        let json = serde_json::to_string_pretty(records)?;

        self.write_atomically(json.as_bytes())
            .map_err(|e| AppError::Persistence {
                target: self.describe(),
                source: e,
            })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
