pub mod record;
pub mod schema;

pub use record::LogRecord;
pub use schema::{FieldKind, FieldSpec, Preset, Schema};
