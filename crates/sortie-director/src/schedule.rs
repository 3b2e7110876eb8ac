//! Spawn orders and the scheduled-spawn queue.
//!
//! Staggered formations are queued against a future controller tick and
//! released synchronously when that tick is processed, so spawn order is a
//! pure function of the tick sequence.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use sortie_core::enums::{AirArchetype, BossArchetype, GroundArchetype, PickupKind};

/// A request for the simulation to materialize one entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SpawnOrder {
    Air {
        archetype: AirArchetype,
        x: f64,
        y: f64,
        drop: Option<PickupKind>,
    },
    Ground {
        archetype: GroundArchetype,
        x: f64,
        y: f64,
        drop: Option<PickupKind>,
    },
    Boss {
        archetype: BossArchetype,
        area: u8,
    },
}

/// Orders keyed by the tick on which they are due.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpawnQueue {
    pending: BTreeMap<u64, Vec<SpawnOrder>>,
}

impl SpawnQueue {
    pub fn schedule(&mut self, due_tick: u64, order: SpawnOrder) {
        self.pending.entry(due_tick).or_default().push(order);
    }

    /// Remove and return every order due at or before `now`, earliest first,
    /// preserving insertion order within a tick.
    pub fn drain_due(&mut self, now: u64) -> Vec<SpawnOrder> {
        let later = self.pending.split_off(&(now + 1));
        let due = std::mem::replace(&mut self.pending, later);
        due.into_values().flatten().collect()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Number of orders still waiting.
    pub fn len(&self) -> usize {
        self.pending.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
