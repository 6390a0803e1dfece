use crate::domain::model::{Boxer, FightOutcome, LeaderboardEntry, NewBoxer, SortBy};
use crate::utils::error::Result;

/// Persistent boxer catalog. Owns the canonical boxer records and their
/// win/loss counters.
pub trait BoxerStore {
    fn create_boxer(&mut self, boxer: NewBoxer) -> Result<Boxer>;
    fn get_boxer_by_id(&self, id: u64) -> Result<Boxer>;
    fn get_boxer_by_name(&self, name: &str) -> Result<Boxer>;
    fn delete_boxer(&mut self, id: u64) -> Result<()>;
    fn update_boxer_stats(&mut self, id: u64, outcome: FightOutcome) -> Result<()>;
    fn get_leaderboard(&self, sort_by: SortBy) -> Result<Vec<LeaderboardEntry>>;
}

impl<S: BoxerStore + ?Sized> BoxerStore for &mut S {
    fn create_boxer(&mut self, boxer: NewBoxer) -> Result<Boxer> {
        (**self).create_boxer(boxer)
    }

    fn get_boxer_by_id(&self, id: u64) -> Result<Boxer> {
        (**self).get_boxer_by_id(id)
    }

    fn get_boxer_by_name(&self, name: &str) -> Result<Boxer> {
        (**self).get_boxer_by_name(name)
    }

    fn delete_boxer(&mut self, id: u64) -> Result<()> {
        (**self).delete_boxer(id)
    }

    fn update_boxer_stats(&mut self, id: u64, outcome: FightOutcome) -> Result<()> {
        (**self).update_boxer_stats(id, outcome)
    }

    fn get_leaderboard(&self, sort_by: SortBy) -> Result<Vec<LeaderboardEntry>> {
        (**self).get_leaderboard(sort_by)
    }
}

/// Uniform draws in `[0, 1)`.
pub trait RandomSource {
    fn get_random(&mut self) -> f64;
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn get_random(&mut self) -> f64 {
        (**self).get_random()
    }
}

/// Receives everything the ring does, in order.
pub trait RingObserver {
    fn on_event(&mut self, event: &RingEvent);
}

#[derive(Debug, Clone, PartialEq)]
pub enum RingEvent {
    BoxerEntered { id: u64, name: String, occupancy: usize },
    EntryRejected { id: u64, name: String, reason: String },
    SkillComputed { name: String, skill: f64 },
    FightStarted { boxer_1: String, boxer_2: String },
    FightRejected { occupancy: usize },
    FightResolved {
        winner: String,
        loser: String,
        win_probability: f64,
        roll: f64,
    },
    RingCleared { previous_occupancy: usize },
}
