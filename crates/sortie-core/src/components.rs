//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.
//!
//! Each entity family is spawned with one fixed bundle:
//! projectiles `(Position, Velocity, Projectile)`, enemies
//! `(Position, Velocity, Enemy)`, pickups `(Position, Velocity, Pickup)`.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Per-kind state payload carried by a projectile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum ProjectileMotion {
    /// Straight flight along its velocity.
    #[default]
    Linear,
    Vibrating {
        phase: VibratePhase,
        /// Center line of the oscillation.
        anchor_x: f64,
        /// Distance covered while advancing.
        traveled: f64,
        /// Ticks spent oscillating.
        ticks: u32,
        amplitude: f64,
        angular_speed: f64,
        durability: f64,
        max_durability: f64,
    },
    Boomerang {
        phase: BoomerangPhase,
        /// Distance covered on the current outbound leg.
        traveled: f64,
        max_range: f64,
        base_speed: f64,
        /// Remaining catches before the boomerang is spent.
        returns_left: u32,
    },
    /// Straight laser; the hitbox extends `length` pixels behind the head.
    Laser { length: f64 },
    Plasma {
        /// Detonate on the spawn tick without travelling.
        instant: bool,
        /// Single-use guard: a plasma detonates at most once.
        has_triggered: bool,
    },
}

/// A moving point entity with damage and ownership.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub owner: Owner,
    pub source: ShotSource,
    pub kind: ProjectileKind,
    pub damage: f64,
    /// Visual radius.
    pub radius: f64,
    /// Dedicated hit radius; collision falls back to `radius` when unset.
    pub hit_radius: Option<f64>,
    /// Only meaningful for enemy-owned projectiles.
    pub hit_points: f64,
    pub max_hit_points: f64,
    /// Weapon level that fired it.
    pub level: u32,
    pub motion: ProjectileMotion,
    /// Serials of enemies already damaged by this (piercing) projectile.
    pub struck: Vec<u32>,
    /// Consumed; removed by cleanup.
    pub spent: bool,
}

/// Air, ground or boss combat entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    /// Stable id, assigned in spawn order.
    pub serial: u32,
    pub kind: EnemyKind,
    pub hit_points: f64,
    pub max_hit_points: f64,
    pub radius: f64,
    pub hit_radius: Option<f64>,
    pub phase: EnemyPhase,
    /// Ticks spent in the current phase.
    pub phase_ticks: u32,
    /// Ticks since spawn.
    pub age: u32,
    /// Horizontal reference line for weaving/swaying movement.
    pub anchor_x: f64,
    /// Ticks until the next volley.
    pub fire_timer: u32,
    /// Boss pattern rotation counter.
    pub volleys: u32,
    /// Item released on destruction.
    pub drop: Option<PickupKind>,
    /// Bosses only: a sub-weapon bounced off this tick, vetoing shot damage.
    pub deflecting: bool,
    /// Kill already credited; removed by cleanup.
    pub destroyed: bool,
}

/// Collectible item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pickup {
    pub kind: PickupKind,
    pub radius: f64,
}
