//! `FIELD=VALUE` argument parsing for the `add` and `edit` commands.

use crate::errors::{AppError, AppResult};
use serde_json::{Map, Value};

/// Turn `["user=alice", "hubstaffTime=8"]` into a JSON object.
///
/// Values stay strings; the schema coerces numeric fields. An empty value
/// (`remarks=`) is passed through and treated as "not supplied".
pub fn parse_assignments(args: &[String]) -> AppResult<Map<String, Value>> {
    let mut out = Map::new();

    for arg in args {
        let (key, value) = arg.split_once('=').ok_or_else(|| {
            AppError::InvalidArgument(format!("expected FIELD=VALUE, got '{arg}'"))
        })?;

        let key = key.trim();
        if key.is_empty() {
            return Err(AppError::InvalidArgument(format!(
                "missing field name in '{arg}'"
            )));
        }

        out.insert(key.to_string(), Value::String(value.to_string()));
    }

    Ok(out)
}
