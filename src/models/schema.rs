//! Field schema: which attributes a log record carries, which of them are
//! required on create, how they are coerced and what they default to.

use crate::errors::{AppError, AppResult};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::collections::HashSet;

/// Keys owned by the store itself; a schema may never declare them.
pub const RESERVED_FIELDS: &[&str] = &["id", "createdAt", "updatedAt", "timestamp"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    #[default]
    Text,
    Number,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub kind: FieldKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl FieldSpec {
    pub fn required(name: &str, kind: FieldKind) -> Self {
        Self {
            name: name.to_string(),
            required: true,
            kind,
            default: None,
        }
    }

    pub fn optional(name: &str, default: Value) -> Self {
        Self {
            name: name.to_string(),
            required: false,
            kind: FieldKind::Text,
            default: Some(default),
        }
    }

    /// Coerce a raw input value to the declared kind.
    fn coerce(&self, value: &Value) -> AppResult<Value> {
        match self.kind {
            FieldKind::Text => Ok(value.clone()),
            FieldKind::Number => match value {
                Value::Number(_) => Ok(value.clone()),
                Value::String(s) => parse_number(s.trim()).ok_or_else(|| AppError::InvalidField {
                    field: self.name.clone(),
                    reason: format!("'{s}' is not a number"),
                }),
                other => Err(AppError::InvalidField {
                    field: self.name.clone(),
                    reason: format!("expected a number, got {other}"),
                }),
            },
        }
    }
}

/// Built-in field sets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// user, timeIn, timeOut, hubstaffTime, remarks
    Timesheet,
    /// taskName, duration, date
    Tasks,
}

impl Preset {
    pub fn fields(&self) -> Vec<FieldSpec> {
        match self {
            Preset::Timesheet => vec![
                FieldSpec::required("user", FieldKind::Text),
                FieldSpec::required("timeIn", FieldKind::Text),
                FieldSpec::optional("timeOut", Value::from("N/A")),
                FieldSpec::required("hubstaffTime", FieldKind::Number),
                FieldSpec::optional("remarks", Value::from("")),
            ],
            Preset::Tasks => vec![
                FieldSpec::required("taskName", FieldKind::Text),
                FieldSpec::required("duration", FieldKind::Number),
                FieldSpec::required("date", FieldKind::Text),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    fields: Vec<FieldSpec>,
}

impl Default for Schema {
    fn default() -> Self {
        Self::preset(Preset::Timesheet)
    }
}

impl Schema {
    /// Build a schema from a list of field specs, rejecting inconsistent ones.
    pub fn new(fields: Vec<FieldSpec>) -> AppResult<Self> {
        if fields.is_empty() {
            return Err(AppError::Config("field schema is empty".into()));
        }

        let mut seen = HashSet::new();
        for f in &fields {
            let name = f.name.trim();
            if name.is_empty() {
                return Err(AppError::Config("field with an empty name".into()));
            }
            if RESERVED_FIELDS.contains(&name) {
                return Err(AppError::Config(format!(
                    "field name '{name}' is reserved"
                )));
            }
            if !seen.insert(name.to_string()) {
                return Err(AppError::Config(format!("duplicate field '{name}'")));
            }
            if f.required && f.default.is_some() {
                return Err(AppError::Config(format!(
                    "required field '{name}' cannot have a default"
                )));
            }
            if f.kind == FieldKind::Number
                && let Some(d) = &f.default
                && !d.is_number()
            {
                return Err(AppError::Config(format!(
                    "default of numeric field '{name}' must be a number"
                )));
            }
        }

        if !fields.iter().any(|f| f.required) {
            return Err(AppError::Config(
                "field schema must declare at least one required field".into(),
            ));
        }

        Ok(Self { fields })
    }

    pub fn preset(preset: Preset) -> Self {
        Self {
            fields: preset.fields(),
        }
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn required_names(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name.as_str())
            .collect()
    }

    /// Build the field map of a new record from raw input.
    ///
    /// Keys not declared by the schema are dropped. Fields come out in
    /// schema order.
    pub fn build(&self, input: &Map<String, Value>) -> AppResult<Map<String, Value>> {
        let missing: Vec<String> = self
            .fields
            .iter()
            .filter(|f| f.required && input.get(&f.name).is_none_or(is_missing))
            .map(|f| f.name.clone())
            .collect();

        if !missing.is_empty() {
            return Err(AppError::MissingFields(missing));
        }

        let mut out = Map::new();
        for f in &self.fields {
            match input.get(&f.name) {
                Some(v) if !is_missing(v) => {
                    out.insert(f.name.clone(), f.coerce(v)?);
                }
                _ => {
                    if let Some(d) = &f.default {
                        out.insert(f.name.clone(), d.clone());
                    }
                }
            }
        }

        Ok(out)
    }

    /// Merge a partial update over `current`.
    ///
    /// Only schema fields are taken from the patch. A blank value resets an
    /// optional field to its default and is rejected for a required one.
    pub fn merge(
        &self,
        current: &Map<String, Value>,
        patch: &Map<String, Value>,
    ) -> AppResult<Map<String, Value>> {
        let mut merged = current.clone();

        for f in &self.fields {
            let Some(v) = patch.get(&f.name) else {
                continue;
            };

            if is_missing(v) {
                if f.required {
                    return Err(AppError::MissingFields(vec![f.name.clone()]));
                }
                match &f.default {
                    Some(d) => merged.insert(f.name.clone(), d.clone()),
                    None => merged.shift_remove(&f.name),
                };
                continue;
            }

            merged.insert(f.name.clone(), f.coerce(v)?);
        }

        Ok(merged)
    }
}

/// Absent, null and blank strings all count as "not supplied".
fn is_missing(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

fn parse_number(s: &str) -> Option<Value> {
    if let Ok(i) = s.parse::<i64>() {
        return Some(Value::from(i));
    }
    s.parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
}
