//! Fire-and-forget notifications emitted by the simulation for audio, UI
//! and logging. Nothing in the core depends on them being consumed.

use serde::{Deserialize, Serialize};

use crate::enums::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A new area started (also emitted for the first area).
    AreaEntered { area: u8 },
    /// Area length reached; the boss and its ground formation were spawned.
    BossIntroStarted { area: u8, boss: BossArchetype },
    /// Boss intro deceleration finished; the arena is stationary.
    BossArenaStopped { area: u8 },
    BossDefeated { area: u8 },
    /// The final area's boss delay elapsed.
    GameComplete,
    EnemyDestroyed {
        kind: EnemyKind,
        x: f64,
        y: f64,
        score: u32,
    },
    PlayerHit { lives_left: u32 },
    /// The Lv30 shield absorbed a hit.
    ShieldBreak,
    GameOver,
    WeaponSwitched { sub_type: SubWeaponType },
    SubWeaponLevelUp { sub_type: SubWeaponType, level: u32 },
    /// Resource pool ran dry; back to the base weapon.
    SubWeaponDepleted { sub_type: SubWeaponType },
    MainLevelUp { level: u32 },
    PlasmaDetonated {
        x: f64,
        y: f64,
        bullets_cleared: u32,
        enemies_hit: u32,
    },
    /// Visual burst where a sub-weapon bounced off a boss.
    Deflected { x: f64, y: f64, radius: f64 },
    PickupCollected { kind: PickupKind },
}
