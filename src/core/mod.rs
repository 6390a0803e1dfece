pub mod leaderboard;
pub mod ring;

pub use crate::domain::model::{
    Boxer, BoxerRecord, FightOutcome, LeaderboardEntry, NewBoxer, SortBy, WeightClass,
};
pub use crate::domain::ports::{BoxerStore, RandomSource, RingEvent, RingObserver};
pub use crate::utils::error::Result;
