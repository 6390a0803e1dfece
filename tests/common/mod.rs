#![allow(dead_code)]

use boxing_ring::core::LeaderboardEntry;
use boxing_ring::{
    Boxer, BoxerStore, FightOutcome, InMemoryStore, NewBoxer, RandomSource, Result, RingError,
    SortBy,
};
use std::collections::VecDeque;

/// Replays a fixed list of draws; panics when it runs out.
pub struct ScriptedRandom {
    draws: VecDeque<f64>,
}

impl ScriptedRandom {
    pub fn new(draws: &[f64]) -> Self {
        Self {
            draws: draws.iter().copied().collect(),
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn get_random(&mut self) -> f64 {
        self.draws.pop_front().expect("scripted random source exhausted")
    }
}

/// In-memory store that remembers every stats update and can be told to fail
/// them.
#[derive(Default)]
pub struct RecordingStore {
    pub inner: InMemoryStore,
    pub updates: Vec<(u64, FightOutcome)>,
    pub fail_updates: bool,
}

impl RecordingStore {
    pub fn with_boxers(boxers: &[NewBoxer]) -> Self {
        let mut store = Self::default();
        for boxer in boxers {
            store.inner.create_boxer(boxer.clone()).unwrap();
        }
        store
    }
}

impl BoxerStore for RecordingStore {
    fn create_boxer(&mut self, boxer: NewBoxer) -> Result<Boxer> {
        self.inner.create_boxer(boxer)
    }

    fn get_boxer_by_id(&self, id: u64) -> Result<Boxer> {
        self.inner.get_boxer_by_id(id)
    }

    fn get_boxer_by_name(&self, name: &str) -> Result<Boxer> {
        self.inner.get_boxer_by_name(name)
    }

    fn delete_boxer(&mut self, id: u64) -> Result<()> {
        self.inner.delete_boxer(id)
    }

    fn update_boxer_stats(&mut self, id: u64, outcome: FightOutcome) -> Result<()> {
        self.updates.push((id, outcome));
        if self.fail_updates {
            return Err(RingError::IoError(std::io::Error::other("store offline")));
        }
        self.inner.update_boxer_stats(id, outcome)
    }

    fn get_leaderboard(&self, sort_by: SortBy) -> Result<Vec<LeaderboardEntry>> {
        self.inner.get_leaderboard(sort_by)
    }
}

pub fn new_boxer(name: &str, weight: u32, reach: f64, age: u32) -> NewBoxer {
    NewBoxer {
        name: name.to_string(),
        weight,
        height: 70,
        reach,
        age,
    }
}

/// Two boxers with identical skill (equal name length, weight, reach, age band).
pub fn evenly_matched() -> Vec<NewBoxer> {
    vec![
        new_boxer("Boxer 1", 150, 12.5, 30),
        new_boxer("Boxer 2", 150, 12.5, 30),
    ]
}
