use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One persisted time-log entry.
///
/// Serialized flat: `id`, the domain fields in schema order, `createdAt`
/// and, once the record has been edited, `updatedAt`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "StoredRecord")]
pub struct LogRecord {
    pub id: u64,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
    pub created_at: DateTime<Local>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Local>>,
}

/// On-disk shape. Older data files stamped records with `timestamp`;
/// when both keys are present `createdAt` wins.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredRecord {
    id: u64,
    #[serde(default)]
    created_at: Option<DateTime<Local>>,
    #[serde(default)]
    timestamp: Option<DateTime<Local>>,
    #[serde(default)]
    updated_at: Option<DateTime<Local>>,
    #[serde(flatten)]
    fields: Map<String, Value>,
}

impl TryFrom<StoredRecord> for LogRecord {
    type Error = String;

    fn try_from(raw: StoredRecord) -> Result<Self, Self::Error> {
        let created_at = raw
            .created_at
            .or(raw.timestamp)
            .ok_or_else(|| format!("record {} has no `createdAt`", raw.id))?;

        Ok(Self {
            id: raw.id,
            fields: raw.fields,
            created_at,
            updated_at: raw.updated_at,
        })
    }
}

impl LogRecord {
    pub fn new(id: u64, fields: Map<String, Value>) -> Self {
        Self {
            id,
            fields,
            created_at: Local::now(),
            updated_at: None,
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Plain-text rendering of a field, used by tables and CSV export.
    pub fn field_text(&self, name: &str) -> String {
        match self.fields.get(name) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }

    pub fn created_str(&self) -> String {
        self.created_at.format("%Y-%m-%d %H:%M").to_string()
    }

    pub fn updated_str(&self) -> String {
        self.updated_at
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_default()
    }
}
