pub mod fs;
pub mod kv;
pub mod path;
pub mod table;
