//! Game state snapshot: everything an external renderer needs, built after
//! each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::GameEvent;
use crate::types::{Position, SimTime, Velocity};

/// Complete observable state after a tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub score: u64,
    pub player: PlayerView,
    pub weapon: WeaponView,
    pub area: AreaView,
    pub difficulty: f64,
    pub projectiles: Vec<ProjectileView>,
    pub enemies: Vec<EnemyView>,
    pub pickups: Vec<PickupView>,
    pub events: Vec<GameEvent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Position,
    pub status: PlayerStatus,
    pub lives: u32,
    pub invulnerable_ticks: u32,
}

/// Weapon levels, resource pools and persistent sub-weapon geometry.
/// Pools that do not apply to the current sub-weapon read -1.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeaponView {
    pub main_level: u32,
    pub sub_type: SubWeaponType,
    pub sub_level: u32,
    pub ammo: i32,
    pub duration_frames: i32,
    pub durability: f64,
    pub barrier: Option<BarrierView>,
    /// Orbiting node centers while the Circular weapon is armed.
    pub orbs: Vec<Position>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BarrierView {
    pub center: Position,
    pub radius: f64,
    /// Degrees, 0 = straight up, clockwise positive.
    pub start_deg: f64,
    pub end_deg: f64,
    pub segments: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AreaView {
    pub area: u8,
    pub state: AreaState,
    pub boss_phase: BossPhase,
    pub intro_phase: Option<BossIntroPhase>,
    pub progress: u32,
    pub length: u32,
    pub scroll_speed: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectileView {
    pub position: Position,
    pub velocity: Velocity,
    pub owner: Owner,
    pub kind: ProjectileKind,
    pub radius: f64,
    pub hit_points: f64,
    pub max_hit_points: f64,
    /// Laser length (0 for other kinds).
    pub length: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub serial: u32,
    pub kind: EnemyKind,
    pub position: Position,
    pub radius: f64,
    pub hit_points: f64,
    pub max_hit_points: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickupView {
    pub kind: PickupKind,
    pub position: Position,
}
