pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::{json_store::JsonFileStore, memory_store::InMemoryStore};
pub use config::AppConfig;
pub use core::ring::Ring;
pub use domain::model::{Boxer, FightOutcome, NewBoxer, SortBy, WeightClass};
pub use domain::ports::{BoxerStore, RandomSource, RingEvent, RingObserver};
pub use utils::error::{Result, RingError};
