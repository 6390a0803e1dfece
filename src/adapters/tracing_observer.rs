use crate::core::{RingEvent, RingObserver};

/// Forwards ring events to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl RingObserver for TracingObserver {
    fn on_event(&mut self, event: &RingEvent) {
        match event {
            RingEvent::BoxerEntered {
                id,
                name,
                occupancy,
            } => {
                tracing::info!(boxer_id = id, occupancy, "Boxer {} entered the ring", name);
            }
            RingEvent::EntryRejected { id, name, reason } => {
                tracing::error!(boxer_id = id, "Could not add boxer {} to the ring: {}", name, reason);
            }
            RingEvent::SkillComputed { name, skill } => {
                tracing::debug!(skill, "Computed fighting skill of {}", name);
            }
            RingEvent::FightStarted { boxer_1, boxer_2 } => {
                tracing::info!("Boxers {} and {} will be fighting", boxer_1, boxer_2);
            }
            RingEvent::FightRejected { occupancy } => {
                tracing::error!(occupancy, "Fewer than two boxers in the ring when starting a fight");
            }
            RingEvent::FightResolved {
                winner,
                loser,
                win_probability,
                roll,
            } => {
                tracing::info!(
                    win_probability,
                    roll,
                    "Match simulated. Winner - {} Loser - {}",
                    winner,
                    loser
                );
            }
            RingEvent::RingCleared { previous_occupancy: 0 } => {
                tracing::warn!("Clearing an empty ring");
            }
            RingEvent::RingCleared { previous_occupancy } => {
                tracing::info!(previous_occupancy, "Ring cleared");
            }
        }
    }
}
