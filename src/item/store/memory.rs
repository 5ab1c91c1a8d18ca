//! In-memory item store.
//!
//! Records sit in an insertion-ordered map keyed by id; the map order is the
//! display order and repositioning moves entries within it.

use async_trait::async_trait;
use indexmap::IndexMap;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::item::core::crud::{ItemStore, Record};
use crate::item::core::error::ItemError;
use crate::item::core::id::ItemId;
use crate::item::core::order::destination_index;

struct Ledger<R> {
    /// Keyed by id; iteration order is display order
    records: IndexMap<u64, R>,
    /// Highest id ever handed out; ids are never reused
    last_id: u64,
}

/// In-memory item store.
///
/// Lives for the lifetime of the process and starts empty unless seeded. Every
/// operation runs to completion under the mutex, so requests never interleave
/// inside the store.
pub struct MemoryStore<R: Record> {
    ledger: Mutex<Ledger<R>>,
}

impl<R: Record> MemoryStore<R> {
    #[must_use]
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Start from existing records, in the given order. The id counter continues
    /// after the highest seeded id.
    #[must_use]
    pub fn with_records(records: Vec<R>) -> Self {
        let last_id = records.iter().map(Record::id).max().unwrap_or(0);
        let records = records.into_iter().map(|r| (r.id(), r)).collect();
        Self {
            ledger: Mutex::new(Ledger { records, last_id }),
        }
    }

    /// Number of records currently held.
    pub async fn len(&self) -> usize {
        self.ledger.lock().await.records.len()
    }

    /// Whether the store holds no records.
    pub async fn is_empty(&self) -> bool {
        self.ledger.lock().await.records.is_empty()
    }
}

impl<R: Record> Default for MemoryStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<R: Record> ItemStore<R> for MemoryStore<R> {
    async fn list(&self) -> Result<Vec<R>, ItemError> {
        let ledger = self.ledger.lock().await;
        Ok(ledger.records.values().cloned().collect())
    }

    async fn create(&self, fields: R::Create) -> Result<R, ItemError> {
        let mut ledger = self.ledger.lock().await;
        let id = ledger
            .last_id
            .checked_add(1)
            .ok_or_else(|| ItemError::persistence("id space exhausted"))?;
        ledger.last_id = id;
        let record = R::from_create(id, fields);
        ledger.records.insert(id, record.clone());
        debug!(noun = R::NOUN, id, "Created record");
        Ok(record)
    }

    async fn update(&self, id: &ItemId, fields: R::Update) -> Result<R, ItemError> {
        let mut ledger = self.ledger.lock().await;
        let key = id
            .value()
            .ok_or_else(|| ItemError::not_found(id.to_string()))?;
        let from = ledger
            .records
            .get_index_of(&key)
            .ok_or_else(|| ItemError::not_found(id.to_string()))?;

        let updated = match ledger.records.get_mut(&key) {
            Some(record) => {
                record.apply_update(&fields);
                record.clone()
            }
            None => return Err(ItemError::not_found(id.to_string())),
        };

        if let Some(target) = R::reposition_target(&fields) {
            match ledger.records.get_index_of(&target) {
                Some(target_index) if target_index != from => {
                    ledger
                        .records
                        .move_index(from, destination_index(from, target_index));
                    debug!(noun = R::NOUN, id = key, target, "Repositioned record");
                }
                Some(_) => {}
                None => warn!(
                    noun = R::NOUN,
                    id = key,
                    target,
                    "Reposition target not found; order unchanged"
                ),
            }
        }

        Ok(updated)
    }

    async fn delete(&self, id: &ItemId) -> Result<(), ItemError> {
        let mut ledger = self.ledger.lock().await;
        let key = id
            .value()
            .ok_or_else(|| ItemError::not_found(id.to_string()))?;
        match ledger.records.shift_remove(&key) {
            Some(_) => {
                debug!(noun = R::NOUN, id = key, "Deleted record");
                Ok(())
            }
            None => Err(ItemError::not_found(id.to_string())),
        }
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
