//! Archetype-specific combat profiles.
//!
//! Consolidates per-archetype parameters for the enemy FSM and the enemy
//! fire system.

use sortie_core::constants::*;
use sortie_core::enums::{
    AirArchetype, BossArchetype, EnemyKind, GroundArchetype, ProjectileKind,
};

/// Shape of a single volley.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FirePattern {
    /// One bullet straight at the player.
    Aimed,
    /// `count` bullets fanned over `spread_deg`, centered on the player.
    Spread { count: u32, spread_deg: f64 },
    /// `count` bullets evenly spaced around the full circle.
    Ring { count: u32 },
}

/// How and how often an archetype shoots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FireProfile {
    pub pattern: FirePattern,
    /// Ticks between volleys.
    pub interval: u32,
    pub bullet: ProjectileKind,
    /// Bullet speed (pixels per tick).
    pub speed: f64,
}

/// Movement family driving the FSM.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Movement {
    /// Straight down at profile speed.
    Dive,
    /// Down at profile speed while weaving sideways around the spawn column.
    Weave { amplitude: f64, rate: f64 },
    /// Diagonal pass toward the opposite side of the field.
    Sweep,
    /// Descend to the hover line, hold for `dwell` ticks, then retreat upward.
    Hover { dwell: u32 },
    /// Carried by the scroll.
    Ground,
    /// Descend to the arena line, then sway.
    Boss,
}

/// Behavioral profile for an enemy archetype.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyProfile {
    pub hit_points: f64,
    /// Visual radius.
    pub radius: f64,
    /// Dedicated hit radius, tighter than the visual for large sprites.
    pub hit_radius: Option<f64>,
    pub score: u32,
    /// Pixels per tick.
    pub speed: f64,
    pub movement: Movement,
    /// `None` for archetypes that never shoot. Bosses use [`boss_patterns`].
    pub fire: Option<FireProfile>,
}

/// Get the behavioral profile for a given enemy kind in a given area.
pub fn get_profile(kind: EnemyKind, area: u8) -> EnemyProfile {
    match kind {
        EnemyKind::Air(archetype) => air_profile(archetype),
        EnemyKind::Ground(archetype) => ground_profile(archetype),
        EnemyKind::Boss(archetype) => boss_profile(archetype, area),
    }
}

pub fn air_profile(archetype: AirArchetype) -> EnemyProfile {
    match archetype {
        AirArchetype::Drone => EnemyProfile {
            hit_points: 1.0,
            radius: 10.0,
            hit_radius: None,
            score: 50,
            speed: 2.5,
            movement: Movement::Dive,
            fire: None,
        },
        AirArchetype::Fighter => EnemyProfile {
            hit_points: 3.0,
            radius: 12.0,
            hit_radius: None,
            score: 100,
            speed: 3.0,
            movement: Movement::Weave {
                amplitude: 40.0,
                rate: 0.05,
            },
            fire: Some(FireProfile {
                pattern: FirePattern::Aimed,
                interval: 90,
                bullet: ProjectileKind::Normal,
                speed: 3.0,
            }),
        },
        AirArchetype::Sweeper => EnemyProfile {
            hit_points: 2.0,
            radius: 12.0,
            hit_radius: None,
            score: 80,
            speed: 3.5,
            movement: Movement::Sweep,
            fire: None,
        },
        AirArchetype::Gunship => EnemyProfile {
            hit_points: 8.0,
            radius: 16.0,
            hit_radius: Some(13.0),
            score: 200,
            speed: 1.5,
            movement: Movement::Hover { dwell: 240 },
            fire: Some(FireProfile {
                pattern: FirePattern::Spread {
                    count: 3,
                    spread_deg: 30.0,
                },
                interval: 80,
                bullet: ProjectileKind::Sig,
                speed: 3.0,
            }),
        },
        AirArchetype::Bomber => EnemyProfile {
            hit_points: 12.0,
            radius: 20.0,
            hit_radius: Some(16.0),
            score: 300,
            speed: 1.0,
            movement: Movement::Dive,
            fire: Some(FireProfile {
                pattern: FirePattern::Ring { count: 8 },
                interval: 120,
                bullet: ProjectileKind::Normal,
                speed: 2.5,
            }),
        },
        AirArchetype::Elite => EnemyProfile {
            hit_points: 20.0,
            radius: 18.0,
            hit_radius: Some(14.0),
            score: 500,
            speed: 2.0,
            movement: Movement::Hover { dwell: 360 },
            fire: Some(FireProfile {
                pattern: FirePattern::Aimed,
                interval: 100,
                bullet: ProjectileKind::Lead,
                speed: 3.5,
            }),
        },
        AirArchetype::Special => EnemyProfile {
            hit_points: 40.0,
            radius: 24.0,
            hit_radius: Some(18.0),
            score: 1000,
            speed: 1.2,
            movement: Movement::Hover { dwell: 600 },
            fire: Some(FireProfile {
                pattern: FirePattern::Spread {
                    count: 5,
                    spread_deg: 60.0,
                },
                interval: 60,
                bullet: ProjectileKind::Sig,
                speed: 3.0,
            }),
        },
        AirArchetype::Bonus => EnemyProfile {
            hit_points: 15.0,
            radius: 14.0,
            hit_radius: None,
            score: 2000,
            speed: 1.5,
            movement: Movement::Weave {
                amplitude: 120.0,
                rate: 0.03,
            },
            fire: None,
        },
    }
}

pub fn ground_profile(archetype: GroundArchetype) -> EnemyProfile {
    match archetype {
        GroundArchetype::Turret => EnemyProfile {
            hit_points: 6.0,
            radius: 14.0,
            hit_radius: None,
            score: 150,
            speed: 0.0,
            movement: Movement::Ground,
            fire: Some(FireProfile {
                pattern: FirePattern::Aimed,
                interval: 110,
                bullet: ProjectileKind::Normal,
                speed: 2.5,
            }),
        },
        GroundArchetype::Core => EnemyProfile {
            hit_points: 14.0,
            radius: 18.0,
            hit_radius: None,
            score: 400,
            speed: 0.0,
            movement: Movement::Ground,
            fire: Some(FireProfile {
                pattern: FirePattern::Ring { count: 6 },
                interval: 150,
                bullet: ProjectileKind::Sig,
                speed: 2.0,
            }),
        },
        GroundArchetype::SupportBase => EnemyProfile {
            hit_points: 10.0,
            radius: 16.0,
            hit_radius: None,
            score: 250,
            speed: 0.0,
            movement: Movement::Ground,
            fire: None,
        },
    }
}

/// Boss hit points scale with the area it guards.
pub fn boss_profile(archetype: BossArchetype, area: u8) -> EnemyProfile {
    let (base_hp, radius, score) = match archetype {
        BossArchetype::Warden => (300.0, 40.0, 10_000),
        BossArchetype::Hydra => (380.0, 44.0, 15_000),
        BossArchetype::Leviathan => (460.0, 52.0, 20_000),
        BossArchetype::Seraph => (520.0, 44.0, 25_000),
        BossArchetype::Colossus => (640.0, 60.0, 30_000),
        BossArchetype::Tyrant => (800.0, 56.0, 50_000),
    };
    let area_scale = 1.0 + BOSS_HP_PER_AREA * area.saturating_sub(1) as f64;
    EnemyProfile {
        hit_points: base_hp * area_scale,
        radius,
        hit_radius: Some(radius * 0.75),
        score,
        speed: 1.5,
        movement: Movement::Boss,
        fire: None,
    }
}

/// Fire patterns a boss cycles through, switching every
/// `BOSS_PATTERN_SWITCH_VOLLEYS` volleys.
pub fn boss_patterns(archetype: BossArchetype) -> &'static [FireProfile] {
    match archetype {
        BossArchetype::Warden => &WARDEN_PATTERNS,
        BossArchetype::Hydra => &HYDRA_PATTERNS,
        BossArchetype::Leviathan => &LEVIATHAN_PATTERNS,
        BossArchetype::Seraph => &SERAPH_PATTERNS,
        BossArchetype::Colossus => &COLOSSUS_PATTERNS,
        BossArchetype::Tyrant => &TYRANT_PATTERNS,
    }
}

/// The fire pattern a boss uses for its next volley.
pub fn boss_pattern_for_volley(archetype: BossArchetype, volleys: u32) -> FireProfile {
    let patterns = boss_patterns(archetype);
    let index = (volleys / BOSS_PATTERN_SWITCH_VOLLEYS) as usize % patterns.len();
    patterns[index]
}

const fn pattern(pattern: FirePattern, interval: u32, bullet: ProjectileKind, speed: f64) -> FireProfile {
    FireProfile {
        pattern,
        interval,
        bullet,
        speed,
    }
}

const WARDEN_PATTERNS: [FireProfile; 2] = [
    pattern(FirePattern::Spread { count: 5, spread_deg: 50.0 }, 40, ProjectileKind::Normal, 3.0),
    pattern(FirePattern::Ring { count: 12 }, 70, ProjectileKind::Normal, 2.5),
];

const HYDRA_PATTERNS: [FireProfile; 3] = [
    pattern(FirePattern::Aimed, 20, ProjectileKind::Sig, 4.0),
    pattern(FirePattern::Spread { count: 7, spread_deg: 70.0 }, 45, ProjectileKind::Normal, 3.0),
    pattern(FirePattern::Ring { count: 16 }, 80, ProjectileKind::Normal, 2.5),
];

const LEVIATHAN_PATTERNS: [FireProfile; 2] = [
    pattern(FirePattern::Ring { count: 20 }, 60, ProjectileKind::Sig, 2.2),
    pattern(FirePattern::Aimed, 50, ProjectileKind::Lead, 3.0),
];

const SERAPH_PATTERNS: [FireProfile; 3] = [
    pattern(FirePattern::Spread { count: 9, spread_deg: 90.0 }, 40, ProjectileKind::Sig, 3.2),
    pattern(FirePattern::Aimed, 15, ProjectileKind::Normal, 4.5),
    pattern(FirePattern::Ring { count: 24 }, 70, ProjectileKind::Normal, 2.5),
];

const COLOSSUS_PATTERNS: [FireProfile; 2] = [
    pattern(FirePattern::Spread { count: 3, spread_deg: 20.0 }, 45, ProjectileKind::Lead, 2.8),
    pattern(FirePattern::Ring { count: 18 }, 55, ProjectileKind::Sig, 2.5),
];

const TYRANT_PATTERNS: [FireProfile; 4] = [
    pattern(FirePattern::Spread { count: 11, spread_deg: 110.0 }, 35, ProjectileKind::Sig, 3.2),
    pattern(FirePattern::Aimed, 40, ProjectileKind::Lead, 3.5),
    pattern(FirePattern::Ring { count: 28 }, 50, ProjectileKind::Normal, 2.8),
    pattern(FirePattern::Aimed, 10, ProjectileKind::Normal, 5.0),
];
