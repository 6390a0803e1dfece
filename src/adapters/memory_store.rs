use crate::core::leaderboard;
use crate::core::{Boxer, BoxerRecord, BoxerStore, FightOutcome, LeaderboardEntry, NewBoxer, SortBy};
use crate::utils::error::{RingError, Result};
use std::collections::BTreeMap;

/// Catalog held in memory. Ids start at 1 and are never reused.
#[derive(Debug, Clone)]
pub struct InMemoryStore {
    records: BTreeMap<u64, BoxerRecord>,
    next_id: u64,
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            records: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Rebuilds a catalog from existing records. `next_id` is raised past the
    /// highest id present.
    pub fn from_records(records: Vec<BoxerRecord>, next_id: u64) -> Result<Self> {
        let mut store = Self::new();
        for record in records {
            let boxer = &record.boxer;
            if store.find_by_name(boxer.name()).is_some() {
                return Err(RingError::DuplicateBoxerError {
                    name: boxer.name().to_string(),
                });
            }
            if store.records.contains_key(&boxer.id()) {
                return Err(RingError::ConfigError {
                    message: format!("Boxer id {} appears more than once in the catalog", boxer.id()),
                });
            }
            store.next_id = store.next_id.max(id_after(boxer.id())?);
            store.records.insert(boxer.id(), record);
        }
        store.next_id = store.next_id.max(next_id);
        Ok(store)
    }

    pub fn records(&self) -> impl Iterator<Item = &BoxerRecord> {
        self.records.values()
    }

    pub fn record(&self, id: u64) -> Result<&BoxerRecord> {
        self.records.get(&id).ok_or(RingError::BoxerNotFound { id })
    }

    pub fn next_id(&self) -> u64 {
        self.next_id
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn find_by_name(&self, name: &str) -> Option<&BoxerRecord> {
        self.records.values().find(|r| r.boxer.name() == name)
    }
}

fn id_after(id: u64) -> Result<u64> {
    id.checked_add(1).ok_or_else(|| {
        RingError::validation("id", id, "No boxer ids remain after this one.")
    })
}

impl BoxerStore for InMemoryStore {
    fn create_boxer(&mut self, boxer: NewBoxer) -> Result<Boxer> {
        let boxer = Boxer::from_new(self.next_id, boxer)?;
        if self.find_by_name(boxer.name()).is_some() {
            return Err(RingError::DuplicateBoxerError {
                name: boxer.name().to_string(),
            });
        }

        self.next_id = id_after(self.next_id)?;
        self.records.insert(boxer.id(), BoxerRecord::new(boxer.clone()));
        tracing::info!(boxer_id = boxer.id(), "Created boxer {}", boxer.name());
        Ok(boxer)
    }

    fn get_boxer_by_id(&self, id: u64) -> Result<Boxer> {
        self.record(id).map(|r| r.boxer.clone())
    }

    fn get_boxer_by_name(&self, name: &str) -> Result<Boxer> {
        self.find_by_name(name)
            .map(|r| r.boxer.clone())
            .ok_or_else(|| RingError::BoxerNameNotFound {
                name: name.to_string(),
            })
    }

    fn delete_boxer(&mut self, id: u64) -> Result<()> {
        let removed = self.records.remove(&id).ok_or(RingError::BoxerNotFound { id })?;
        tracing::info!(boxer_id = id, "Deleted boxer {}", removed.boxer.name());
        Ok(())
    }

    fn update_boxer_stats(&mut self, id: u64, outcome: FightOutcome) -> Result<()> {
        let record = self
            .records
            .get_mut(&id)
            .ok_or(RingError::BoxerNotFound { id })?;
        record.apply(outcome);
        tracing::debug!(
            boxer_id = id,
            fights = record.fights,
            wins = record.wins,
            "Recorded {} for {}",
            outcome,
            record.boxer.name()
        );
        Ok(())
    }

    fn get_leaderboard(&self, sort_by: SortBy) -> Result<Vec<LeaderboardEntry>> {
        let entries = leaderboard::rank(self.records.values(), sort_by);
        tracing::info!("Fetched leaderboard with {} entries", entries.len());
        Ok(entries)
    }
}
