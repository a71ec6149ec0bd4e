pub mod add;
pub mod backup;
pub mod config;
pub mod del;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod serve;
pub mod show;

use crate::config::{Config, StorageKind};
use crate::ui::messages::warning;

/// Record commands against `storage: memory` only live as long as the process.
fn warn_if_memory(cfg: &Config) {
    if cfg.storage == StorageKind::Memory {
        warning("Storage is 'memory': this change is discarded when the command exits.");
    }
}
