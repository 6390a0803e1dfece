use crate::adapters::memory_store::InMemoryStore;
use crate::core::{Boxer, BoxerRecord, BoxerStore, FightOutcome, LeaderboardEntry, NewBoxer, SortBy};
use crate::utils::error::{RingError, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Serialize)]
struct CatalogFile<'a> {
    next_id: u64,
    boxers: Vec<&'a BoxerRecord>,
}

/// Catalog persisted as a JSON document. Every mutation rewrites the file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    inner: InMemoryStore,
}

impl JsonFileStore {
    /// Opens the catalog at `path`, starting empty when the file does not
    /// exist yet.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let inner = if path.exists() {
            let content = fs::read_to_string(&path)?;
            let document: Value = serde_json::from_str(&content)?;
            parse_catalog(&document)?
        } else {
            tracing::debug!("No catalog at {}, starting empty", path.display());
            InMemoryStore::new()
        };

        tracing::info!("Loaded {} boxers from {}", inner.len(), path.display());
        Ok(Self { path, inner })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn records(&self) -> impl Iterator<Item = &BoxerRecord> {
        self.inner.records()
    }

    /// Applies `change` to a copy of the catalog and keeps it only once the
    /// copy has been written to disk.
    fn commit<T>(&mut self, change: impl FnOnce(&mut InMemoryStore) -> Result<T>) -> Result<T> {
        let mut staged = self.inner.clone();
        let value = change(&mut staged)?;
        save(&self.path, &staged)?;
        self.inner = staged;
        Ok(value)
    }
}

fn save(path: &Path, catalog: &InMemoryStore) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = CatalogFile {
        next_id: catalog.next_id(),
        boxers: catalog.records().collect(),
    };
    fs::write(path, serde_json::to_vec_pretty(&file)?)?;
    tracing::debug!("Saved catalog to {}", path.display());
    Ok(())
}

fn parse_catalog(document: &Value) -> Result<InMemoryStore> {
    let mismatch = |found: &str| RingError::TypeMismatchError {
        expected: "boxer catalog".to_string(),
        found: found.to_string(),
    };

    let obj = document
        .as_object()
        .ok_or_else(|| mismatch("a document that is not an object"))?;
    let next_id = match obj.get("next_id") {
        None => 1,
        Some(v) => v
            .as_u64()
            .ok_or_else(|| mismatch("non-integer 'next_id'"))?,
    };
    let entries = obj
        .get("boxers")
        .and_then(|v| v.as_array())
        .ok_or_else(|| mismatch("missing 'boxers' array"))?;

    let records = entries
        .iter()
        .map(parse_record)
        .collect::<Result<Vec<_>>>()?;
    InMemoryStore::from_records(records, next_id)
}

fn parse_record(entry: &Value) -> Result<BoxerRecord> {
    let boxer = Boxer::try_from(entry)?;
    let counter = |field: &str| -> Result<u32> {
        match entry.get(field) {
            None => Ok(0),
            Some(v) => v
                .as_u64()
                .and_then(|n| u32::try_from(n).ok())
                .ok_or_else(|| RingError::TypeMismatchError {
                    expected: "Boxer".to_string(),
                    found: format!("object with invalid field '{}'", field),
                }),
        }
    };

    let fights = counter("fights")?;
    let wins = counter("wins")?;
    if wins > fights {
        return Err(RingError::validation(
            "wins",
            wins,
            format!("Wins cannot exceed fights ({}).", fights),
        ));
    }
    Ok(BoxerRecord {
        boxer,
        fights,
        wins,
    })
}

impl BoxerStore for JsonFileStore {
    fn create_boxer(&mut self, boxer: NewBoxer) -> Result<Boxer> {
        self.commit(|catalog| catalog.create_boxer(boxer))
    }

    fn get_boxer_by_id(&self, id: u64) -> Result<Boxer> {
        self.inner.get_boxer_by_id(id)
    }

    fn get_boxer_by_name(&self, name: &str) -> Result<Boxer> {
        self.inner.get_boxer_by_name(name)
    }

    fn delete_boxer(&mut self, id: u64) -> Result<()> {
        self.commit(|catalog| catalog.delete_boxer(id))
    }

    fn update_boxer_stats(&mut self, id: u64, outcome: FightOutcome) -> Result<()> {
        self.commit(|catalog| catalog.update_boxer_stats(id, outcome))
    }

    fn get_leaderboard(&self, sort_by: SortBy) -> Result<Vec<LeaderboardEntry>> {
        self.inner.get_leaderboard(sort_by)
    }
}
