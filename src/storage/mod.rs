//! Durable storage backends for the log store.
//!
//! A backend only knows how to load and save the full ordered sequence of
//! records; ordering, id allocation and validation live in the store.

pub mod file;
pub mod memory;

pub use file::JsonFile;
pub use memory::MemoryBackend;

use crate::errors::AppResult;
use crate::models::LogRecord;

pub trait Backend: Send {
    /// Read the last durable state. An absent medium is an empty store.
    fn load(&self) -> AppResult<Vec<LogRecord>>;

    /// Replace the durable state with `records`.
    fn save(&mut self, records: &[LogRecord]) -> AppResult<()>;

    /// Human-readable location, used in log lines and messages.
    fn describe(&self) -> String;
}
