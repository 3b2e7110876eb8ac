//! The fixed twelve-area table.

use serde::{Deserialize, Serialize};

use sortie_core::constants::{AREA_BASE_LENGTH, AREA_COUNT, AREA_LENGTH_PER_AREA};
use sortie_core::enums::{BossArchetype, SubWeaponType};

/// Background/terrain palette, consumed only by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Palette {
    Coast,
    Desert,
    Forest,
    City,
    Canyon,
    Glacier,
    Volcano,
    Ocean,
    Fortress,
    Orbit,
    Nebula,
    Hive,
}

/// A support base placed at an exact progress tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScriptedSpawn {
    pub at_progress: u32,
    pub x: f64,
    /// Sub-weapon item released when the base is destroyed.
    pub drop: SubWeaponType,
}

/// Static configuration for one area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AreaSpec {
    pub palette: Palette,
    pub boss: BossArchetype,
    /// Scales the air spawn rate.
    pub difficulty_multiplier: f64,
    /// Chance per ground roll that a ground entity spawns.
    pub ground_frequency: f64,
    /// Starts at high-speed scroll and downshifts at the midpoint.
    pub high_speed: bool,
    pub special_enemy: bool,
    pub bonus_enemy: bool,
    pub mass_formation: bool,
    pub scripted: &'static [ScriptedSpawn],
}

/// Number of progress ticks before the boss is summoned.
pub fn area_length(area: u8) -> u32 {
    AREA_BASE_LENGTH + AREA_LENGTH_PER_AREA * area as u32
}

/// Look up an area (1-based). Values outside 1..=12 clamp to the nearest area.
pub fn area_spec(area: u8) -> &'static AreaSpec {
    let index = area.clamp(1, AREA_COUNT) as usize - 1;
    &AREAS[index]
}

const fn scripted(at_progress: u32, x: f64, drop: SubWeaponType) -> ScriptedSpawn {
    ScriptedSpawn {
        at_progress,
        x,
        drop,
    }
}

const AREA_1_SCRIPTED: [ScriptedSpawn; 2] = [
    scripted(600, 120.0, SubWeaponType::Crusher),
    scripted(1800, 360.0, SubWeaponType::Barrier),
];
const AREA_2_SCRIPTED: [ScriptedSpawn; 2] = [
    scripted(500, 360.0, SubWeaponType::Circular),
    scripted(2000, 120.0, SubWeaponType::Crusher),
];
const AREA_3_SCRIPTED: [ScriptedSpawn; 2] = [
    scripted(700, 240.0, SubWeaponType::Vibrator),
    scripted(2200, 100.0, SubWeaponType::Rewinder),
];
const AREA_4_SCRIPTED: [ScriptedSpawn; 3] = [
    scripted(400, 380.0, SubWeaponType::Plasma),
    scripted(1600, 140.0, SubWeaponType::Barrier),
    scripted(2800, 240.0, SubWeaponType::HiSpeed),
];
const AREA_5_SCRIPTED: [ScriptedSpawn; 2] = [
    scripted(900, 200.0, SubWeaponType::Rewinder),
    scripted(2400, 300.0, SubWeaponType::Circular),
];
const AREA_6_SCRIPTED: [ScriptedSpawn; 3] = [
    scripted(500, 100.0, SubWeaponType::Crusher),
    scripted(1500, 380.0, SubWeaponType::Vibrator),
    scripted(2700, 240.0, SubWeaponType::Plasma),
];
const AREA_7_SCRIPTED: [ScriptedSpawn; 2] = [
    scripted(800, 320.0, SubWeaponType::HiSpeed),
    scripted(2100, 160.0, SubWeaponType::Barrier),
];
const AREA_8_SCRIPTED: [ScriptedSpawn; 3] = [
    scripted(600, 240.0, SubWeaponType::Rewinder),
    scripted(1700, 120.0, SubWeaponType::Plasma),
    scripted(3000, 360.0, SubWeaponType::Crusher),
];
const AREA_9_SCRIPTED: [ScriptedSpawn; 2] = [
    scripted(1000, 140.0, SubWeaponType::Circular),
    scripted(2600, 340.0, SubWeaponType::Vibrator),
];
const AREA_10_SCRIPTED: [ScriptedSpawn; 3] = [
    scripted(700, 360.0, SubWeaponType::Barrier),
    scripted(1900, 120.0, SubWeaponType::HiSpeed),
    scripted(3100, 240.0, SubWeaponType::Rewinder),
];
const AREA_11_SCRIPTED: [ScriptedSpawn; 3] = [
    scripted(500, 200.0, SubWeaponType::Plasma),
    scripted(1600, 280.0, SubWeaponType::Crusher),
    scripted(2900, 120.0, SubWeaponType::Circular),
];
const AREA_12_SCRIPTED: [ScriptedSpawn; 4] = [
    scripted(400, 240.0, SubWeaponType::Barrier),
    scripted(1400, 100.0, SubWeaponType::Plasma),
    scripted(2400, 380.0, SubWeaponType::Rewinder),
    scripted(3300, 240.0, SubWeaponType::Vibrator),
];

const fn area(
    palette: Palette,
    boss: BossArchetype,
    difficulty_multiplier: f64,
    ground_frequency: f64,
    flags: (bool, bool, bool, bool),
    scripted: &'static [ScriptedSpawn],
) -> AreaSpec {
    let (high_speed, special_enemy, bonus_enemy, mass_formation) = flags;
    AreaSpec {
        palette,
        boss,
        difficulty_multiplier,
        ground_frequency,
        high_speed,
        special_enemy,
        bonus_enemy,
        mass_formation,
        scripted,
    }
}

// flags: (high_speed, special_enemy, bonus_enemy, mass_formation)
static AREAS: [AreaSpec; AREA_COUNT as usize] = [
    area(Palette::Coast, BossArchetype::Warden, 1.0, 0.20, (false, false, false, false), &AREA_1_SCRIPTED),
    area(Palette::Desert, BossArchetype::Hydra, 1.05, 0.25, (true, false, false, false), &AREA_2_SCRIPTED),
    area(Palette::Forest, BossArchetype::Leviathan, 1.1, 0.30, (false, false, true, false), &AREA_3_SCRIPTED),
    area(Palette::City, BossArchetype::Seraph, 1.15, 0.35, (false, false, false, true), &AREA_4_SCRIPTED),
    area(Palette::Canyon, BossArchetype::Colossus, 1.2, 0.35, (true, false, false, false), &AREA_5_SCRIPTED),
    area(Palette::Glacier, BossArchetype::Tyrant, 1.25, 0.40, (false, true, false, false), &AREA_6_SCRIPTED),
    area(Palette::Volcano, BossArchetype::Warden, 1.3, 0.40, (false, false, true, false), &AREA_7_SCRIPTED),
    area(Palette::Ocean, BossArchetype::Hydra, 1.35, 0.45, (false, false, false, true), &AREA_8_SCRIPTED),
    area(Palette::Fortress, BossArchetype::Leviathan, 1.4, 0.50, (true, false, false, false), &AREA_9_SCRIPTED),
    area(Palette::Orbit, BossArchetype::Seraph, 1.45, 0.50, (false, true, false, false), &AREA_10_SCRIPTED),
    area(Palette::Nebula, BossArchetype::Colossus, 1.5, 0.55, (false, false, true, false), &AREA_11_SCRIPTED),
    area(Palette::Hive, BossArchetype::Tyrant, 1.6, 0.60, (false, true, false, true), &AREA_12_SCRIPTED),
];
