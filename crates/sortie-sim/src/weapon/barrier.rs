//! Barrier: an arc shield of fixed radius centered on the player.
//!
//! Destroys enemy projectiles inside its sector (including `lead`, which it
//! wears down) and is worn by overlapping air enemies without harming them.
//! Ground enemies never interact with it.

use hecs::World;
use serde::{Deserialize, Serialize};

use sortie_core::components::{Enemy, Projectile};
use sortie_core::constants::*;
use sortie_core::enums::Owner;
use sortie_core::state::BarrierView;
use sortie_core::types::Position;

use crate::geometry::{bearing_deg, bearing_in_arc, circles_overlap};
use crate::projectile::enemy_hit_radius;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Barrier {
    pub level: u32,
    /// Ticks since the last passive decay step.
    pub decay_timer: u32,
}

/// What one barrier tick did to its surroundings.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BarrierOutcome {
    /// Enemy projectiles destroyed this tick.
    pub destroyed: u32,
    /// Durability drained by overlapping enemies.
    pub contact_drain: f64,
}

impl Barrier {
    pub fn new(level: u32) -> Self {
        Self {
            level,
            decay_timer: 0,
        }
    }

    /// (start_deg, end_deg, segments) for the current level.
    pub fn arc(&self) -> (f64, f64, u32) {
        BARRIER_ARCS[self.level.min(SUB_LEVEL_MAX) as usize]
    }

    /// Whether a body of `radius` at `point` touches the sector.
    pub fn covers(&self, center: &Position, point: &Position, radius: f64) -> bool {
        if !circles_overlap(center, BARRIER_RADIUS, point, radius) {
            return false;
        }
        let (start, end, _) = self.arc();
        bearing_in_arc(bearing_deg(center, point), start, end)
    }

    pub fn view(&self, center: Position) -> BarrierView {
        let (start_deg, end_deg, segments) = self.arc();
        BarrierView {
            center,
            radius: BARRIER_RADIUS,
            start_deg,
            end_deg,
            segments,
        }
    }
}

/// Resolve one tick of barrier contact. Durability bookkeeping stays with
/// the weapon controller.
pub fn run(barrier: &Barrier, world: &mut World, center: &Position) -> BarrierOutcome {
    let mut outcome = BarrierOutcome::default();

    for (_entity, (pos, proj)) in world.query_mut::<(&Position, &mut Projectile)>() {
        if proj.owner != Owner::Enemy || proj.spent {
            continue;
        }
        if barrier.covers(center, pos, proj.radius) {
            proj.hit_points = (proj.hit_points - BARRIER_BULLET_DAMAGE).max(0.0);
            if proj.hit_points <= 0.0 {
                proj.spent = true;
                outcome.destroyed += 1;
            }
        }
    }

    for (_entity, (pos, enemy)) in world.query_mut::<(&Position, &Enemy)>() {
        if enemy.destroyed || enemy.kind.is_ground() {
            continue;
        }
        if barrier.covers(center, pos, enemy_hit_radius(enemy)) {
            outcome.contact_drain += BARRIER_CONTACT_DRAIN;
        }
    }

    outcome
}
