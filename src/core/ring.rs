use crate::adapters::tracing_observer::TracingObserver;
use crate::core::{Boxer, BoxerStore, FightOutcome, RandomSource, RingEvent, RingObserver};
use crate::utils::error::{RingError, Result};

pub const RING_CAPACITY: usize = 2;

/// Skill score used to bias the fight draw:
/// `weight * name length + reach / 10 + age modifier`.
pub fn fighting_skill(boxer: &Boxer) -> f64 {
    let age_modifier = if boxer.age() < 25 {
        -1.0
    } else if boxer.age() > 35 {
        -2.0
    } else {
        0.0
    };
    let name_len = boxer.name().chars().count() as f64;

    f64::from(boxer.weight()) * name_len + boxer.reach() / 10.0 + age_modifier
}

/// Probability that the first boxer wins: the logistic of the absolute skill
/// gap, always in `[0.5, 1]`.
pub fn win_probability(skill_1: f64, skill_2: f64) -> f64 {
    let delta = (skill_1 - skill_2).abs();
    1.0 / (1.0 + (-delta).exp())
}

/// The current match slot. Holds read-only snapshots of at most two boxers
/// and reports fight results back to the store.
pub struct Ring<S: BoxerStore, R: RandomSource, O: RingObserver = TracingObserver> {
    boxers: Vec<Boxer>,
    store: S,
    random: R,
    observer: O,
}

impl<S: BoxerStore, R: RandomSource> Ring<S, R, TracingObserver> {
    pub fn new(store: S, random: R) -> Self {
        Self::with_observer(store, random, TracingObserver)
    }
}

impl<S: BoxerStore, R: RandomSource, O: RingObserver> Ring<S, R, O> {
    pub fn with_observer(store: S, random: R, observer: O) -> Self {
        Self {
            boxers: Vec::with_capacity(RING_CAPACITY),
            store,
            random,
            observer,
        }
    }

    pub fn enter_ring(&mut self, boxer: Boxer) -> Result<()> {
        if self.boxers.len() >= RING_CAPACITY {
            self.reject(&boxer, "ring is full");
            return Err(RingError::CapacityError {
                capacity: RING_CAPACITY,
            });
        }
        if self.boxers.iter().any(|b| b.id() == boxer.id()) {
            self.reject(&boxer, "already in the ring");
            return Err(RingError::DuplicateError { id: boxer.id() });
        }

        self.boxers.push(boxer);
        let entered = &self.boxers[self.boxers.len() - 1];
        self.observer.on_event(&RingEvent::BoxerEntered {
            id: entered.id(),
            name: entered.name().to_string(),
            occupancy: self.boxers.len(),
        });
        Ok(())
    }

    pub fn get_boxers(&self) -> Result<&[Boxer]> {
        if self.boxers.is_empty() {
            return Err(RingError::empty_state("Ring is empty"));
        }
        Ok(&self.boxers)
    }

    pub fn get_fighting_skill(&mut self, boxer: &Boxer) -> f64 {
        let skill = fighting_skill(boxer);
        self.observer.on_event(&RingEvent::SkillComputed {
            name: boxer.name().to_string(),
            skill,
        });
        skill
    }

    /// Simulates one fight between the two occupants and returns the winner's
    /// name. The ring is empty afterwards, even when reporting to the store
    /// fails.
    pub fn fight(&mut self) -> Result<String> {
        let [boxer_1, boxer_2]: [Boxer; RING_CAPACITY] =
            match std::mem::take(&mut self.boxers).try_into() {
                Ok(pair) => pair,
                Err(boxers) => {
                    // put the occupant back
                    self.boxers = boxers;
                    self.observer.on_event(&RingEvent::FightRejected {
                        occupancy: self.boxers.len(),
                    });
                    return Err(RingError::empty_state(
                        "There must be two boxers to start a fight.",
                    ));
                }
            };
        self.observer.on_event(&RingEvent::FightStarted {
            boxer_1: boxer_1.name().to_string(),
            boxer_2: boxer_2.name().to_string(),
        });

        let skill_1 = self.get_fighting_skill(&boxer_1);
        let skill_2 = self.get_fighting_skill(&boxer_2);
        let probability = win_probability(skill_1, skill_2);
        let roll = self.random.get_random();

        let (winner, loser) = if roll < probability {
            (boxer_1, boxer_2)
        } else {
            (boxer_2, boxer_1)
        };
        self.observer.on_event(&RingEvent::FightResolved {
            winner: winner.name().to_string(),
            loser: loser.name().to_string(),
            win_probability: probability,
            roll,
        });

        let reported = self
            .store
            .update_boxer_stats(winner.id(), FightOutcome::Win)
            .and_then(|_| self.store.update_boxer_stats(loser.id(), FightOutcome::Loss));
        self.observer.on_event(&RingEvent::RingCleared {
            previous_occupancy: RING_CAPACITY,
        });
        reported?;

        Ok(winner.name().to_string())
    }

    /// Empties the ring. Never fails; clearing an empty ring is only reported
    /// to the observer.
    pub fn clear_ring(&mut self) {
        let previous_occupancy = self.boxers.len();
        self.boxers.clear();
        self.observer
            .on_event(&RingEvent::RingCleared { previous_occupancy });
    }

    pub fn occupancy(&self) -> usize {
        self.boxers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxers.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    fn reject(&mut self, boxer: &Boxer, reason: &str) {
        self.observer.on_event(&RingEvent::EntryRejected {
            id: boxer.id(),
            name: boxer.name().to_string(),
            reason: reason.to_string(),
        });
    }
}
