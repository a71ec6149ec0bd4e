pub mod backup;
pub mod config;
pub mod export;
pub mod store;

pub use store::LogStore;
