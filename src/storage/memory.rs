use super::Backend;
use crate::errors::AppResult;
use crate::models::LogRecord;

/// Process-memory backend. Nothing survives a restart.
#[derive(Default)]
pub struct MemoryBackend {
    snapshot: Vec<LogRecord>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Backend for MemoryBackend {
    fn load(&self) -> AppResult<Vec<LogRecord>> {
        Ok(self.snapshot.clone())
    }

    fn save(&mut self, records: &[LogRecord]) -> AppResult<()> {
        self.snapshot = records.to_vec();
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
