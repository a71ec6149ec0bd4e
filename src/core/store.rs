//! The log store: an insertion-ordered sequence of records plus the
//! backend that makes it durable.
//!
//! Every mutating operation validates first, then mutates memory, then
//! saves the whole sequence. A failed save restores the previous in-memory
//! state, so memory and the backend never diverge.

use crate::errors::{AppError, AppResult};
use crate::models::{LogRecord, Schema};
use crate::storage::Backend;
use chrono::Local;
use serde_json::{Map, Value};
use std::collections::HashSet;

pub struct LogStore {
    schema: Schema,
    backend: Box<dyn Backend>,
    records: Vec<LogRecord>,
}

impl LogStore {
    /// Rehydrate a store from its backend.
    pub fn open(schema: Schema, backend: Box<dyn Backend>) -> AppResult<Self> {
        let records = backend.load()?;

        let mut ids = HashSet::with_capacity(records.len());
        for r in &records {
            if !ids.insert(r.id) {
                return Err(AppError::CorruptData {
                    path: backend.describe(),
                    reason: format!("duplicate log id {}", r.id),
                });
            }
        }

        tracing::debug!(
            records = records.len(),
            backend = %backend.describe(),
            "log store rehydrated"
        );

        Ok(Self {
            schema,
            backend,
            records,
        })
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn location(&self) -> String {
        self.backend.describe()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in insertion order.
    pub fn list(&self) -> &[LogRecord] {
        &self.records
    }

    pub fn get(&self, id: u64) -> AppResult<&LogRecord> {
        self.records
            .iter()
            .find(|r| r.id == id)
            .ok_or(AppError::NotFound(id))
    }

    /// Validate `input`, assign the next id and append the new record.
    pub fn create(&mut self, input: &Map<String, Value>) -> AppResult<LogRecord> {
        let fields = self.schema.build(input)?;
        let record = LogRecord::new(self.next_id()?, fields);

        self.records.push(record.clone());
        if let Err(e) = self.persist() {
            self.records.pop();
            return Err(e);
        }

        Ok(record)
    }

    /// Merge the schema fields of `patch` over record `id`.
    pub fn update(&mut self, id: u64, patch: &Map<String, Value>) -> AppResult<LogRecord> {
        let idx = self.index_of(id)?;
        let previous = &self.records[idx];

        let updated = LogRecord {
            id: previous.id,
            fields: self.schema.merge(&previous.fields, patch)?,
            created_at: previous.created_at,
            updated_at: Some(Local::now()),
        };

        let previous = std::mem::replace(&mut self.records[idx], updated.clone());
        if let Err(e) = self.persist() {
            self.records[idx] = previous;
            return Err(e);
        }

        Ok(updated)
    }

    pub fn delete(&mut self, id: u64) -> AppResult<LogRecord> {
        let idx = self.index_of(id)?;

        let removed = self.records.remove(idx);
        if let Err(e) = self.persist() {
            self.records.insert(idx, removed);
            return Err(e);
        }

        Ok(removed)
    }

    /// Highest id in the store plus one; 1 for an empty store.
    fn next_id(&self) -> AppResult<u64> {
        match self.records.iter().map(|r| r.id).max() {
            None => Ok(1),
            Some(max) => max
                .checked_add(1)
                .ok_or_else(|| AppError::Other("log id space exhausted".into())),
        }
    }

    fn index_of(&self, id: u64) -> AppResult<usize> {
        self.records
            .iter()
            .position(|r| r.id == id)
            .ok_or(AppError::NotFound(id))
    }

    fn persist(&mut self) -> AppResult<()> {
        self.backend.save(&self.records)
    }
}
