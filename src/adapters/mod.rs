// Adapters layer: concrete implementations of the domain ports (stores,
// randomness, logging).

pub mod json_store;
pub mod memory_store;
pub mod random;
pub mod tracing_observer;
