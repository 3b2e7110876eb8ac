//! ALG: the adaptive difficulty feedback loop.
//!
//! Five additive signals plus a periodic baseline step are folded into one
//! scalar every tick, then clamped to `[DIFFICULTY_MIN, DIFFICULTY_MAX]`.
//! The scalar drives the air spawn interval and the archetype mix.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use sortie_core::constants::*;
use sortie_core::enums::AirArchetype;

use crate::schedule::SpawnOrder;

/// Combat outcomes of one tick, fed back into the controller.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CombatTelemetry {
    /// Enemies destroyed this tick.
    pub kills: u32,
    /// Hits the player took this tick (lives lost or shield breaks).
    pub player_hits: u32,
    /// Running score total.
    pub score: u64,
    pub main_level: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifficultyController {
    level: f64,
    /// Kills since the last counter reset.
    kills: u32,
    /// Ticks since the last counter reset.
    elapsed_ticks: u64,
    /// Ticks since the player was last hit.
    survival_ticks: u64,
    /// Decaying hit pressure.
    recent_hits: f64,
    last_score: u64,
    score_timer: u64,
    baseline_timer: u64,
    spawn_timer: u32,
}

impl Default for DifficultyController {
    fn default() -> Self {
        Self {
            level: DIFFICULTY_INITIAL,
            kills: 0,
            elapsed_ticks: 0,
            survival_ticks: 0,
            recent_hits: 0.0,
            last_score: 0,
            score_timer: 0,
            baseline_timer: 0,
            spawn_timer: 0,
        }
    }
}

impl DifficultyController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(&self) -> f64 {
        self.level
    }

    /// Fold one tick of telemetry into the difficulty level and return it.
    pub fn update(&mut self, telemetry: &CombatTelemetry) -> f64 {
        self.elapsed_ticks += 1;
        self.survival_ticks += 1;
        self.kills += telemetry.kills;
        if telemetry.player_hits > 0 {
            self.recent_hits += telemetry.player_hits as f64;
            self.survival_ticks = 0;
        }

        let mut delta = 0.0;

        // 1. Destruction rate
        if self.kills >= ALG_MIN_KILLS {
            let secs = self.elapsed_ticks as f64 * DT;
            let rate = self.kills as f64 / secs;
            if rate > ALG_HIGH_KILL_RATE {
                delta += ALG_KILL_STEP;
            } else if rate < ALG_LOW_KILL_RATE {
                delta -= ALG_KILL_STEP;
            }
        }

        // 2. Score rate
        self.score_timer += 1;
        if self.score_timer >= ALG_SCORE_SAMPLE_TICKS {
            let gained = telemetry.score.saturating_sub(self.last_score);
            self.last_score = telemetry.score;
            self.score_timer = 0;
            if gained > ALG_SCORE_HIGH {
                delta += ALG_SCORE_STEP;
            } else if gained < ALG_SCORE_LOW {
                delta -= ALG_SCORE_STEP;
            }
        }

        // 3. Hit pressure
        if self.recent_hits > 0.0 {
            delta -= ALG_HIT_PENALTY * self.recent_hits;
            self.recent_hits = (self.recent_hits - ALG_HIT_DECAY).max(0.0);
        }

        // 4. Main weapon strength
        if telemetry.main_level >= ALG_HIGH_MAIN_LEVEL {
            delta += ALG_MAIN_LEVEL_BIAS;
        }

        // 5. Survival time
        if self.survival_ticks >= ALG_SURVIVAL_TICKS {
            delta += ALG_SURVIVAL_BIAS;
        }

        self.baseline_timer += 1;
        if self.baseline_timer >= ALG_BASELINE_TICKS {
            self.baseline_timer = 0;
            delta += ALG_BASELINE_STEP;
        }

        self.level = (self.level + delta).clamp(DIFFICULTY_MIN, DIFFICULTY_MAX);
        self.level
    }

    /// Restart the kill-rate window (on area entry).
    pub fn reset_counters(&mut self) {
        self.kills = 0;
        self.elapsed_ticks = 0;
    }

    /// Ticks between ambient air spawns at the current level.
    pub fn spawn_interval_ticks(&self, area_multiplier: f64) -> u32 {
        let pressure = 0.5 + 0.5 * self.level * area_multiplier;
        let interval = (AIR_SPAWN_BASE_INTERVAL / pressure).round() as u32;
        interval.max(AIR_SPAWN_MIN_INTERVAL)
    }

    /// Tick the ambient spawner; returns an order when one is due.
    pub fn air_spawn(&mut self, area_multiplier: f64, rng: &mut ChaCha8Rng) -> Option<SpawnOrder> {
        self.spawn_timer += 1;
        if self.spawn_timer < self.spawn_interval_ticks(area_multiplier) {
            return None;
        }
        self.spawn_timer = 0;
        let archetype = self.select_archetype(rng);
        let x = rng.gen_range(SPAWN_MARGIN_X..FIELD_WIDTH - SPAWN_MARGIN_X);
        log::trace!("air spawn {:?} at x={:.0} (difficulty {:.2})", archetype, x, self.level);
        Some(SpawnOrder::Air {
            archetype,
            x,
            y: AIR_SPAWN_Y,
            drop: None,
        })
    }

    /// Roll the next ambient archetype from the current band's table.
    pub fn select_archetype(&self, rng: &mut ChaCha8Rng) -> AirArchetype {
        let table = band_table(self.level);
        let roll: f64 = rng.gen();
        table
            .iter()
            .find(|(_, cumulative)| roll < *cumulative)
            .or(table.last())
            .map(|(archetype, _)| *archetype)
            .unwrap_or(AirArchetype::Drone)
    }
}

/// Cumulative-probability table for a difficulty level.
pub fn band_table(level: f64) -> &'static [(AirArchetype, f64)] {
    if level < 3.0 {
        &BAND_0
    } else if level < 5.0 {
        &BAND_1
    } else if level < 7.0 {
        &BAND_2
    } else if level < 9.0 {
        &BAND_3
    } else {
        &BAND_4
    }
}

static BAND_0: [(AirArchetype, f64); 3] = [
    (AirArchetype::Drone, 0.5),
    (AirArchetype::Fighter, 0.8),
    (AirArchetype::Sweeper, 1.0),
];
static BAND_1: [(AirArchetype, f64); 4] = [
    (AirArchetype::Fighter, 0.4),
    (AirArchetype::Sweeper, 0.7),
    (AirArchetype::Gunship, 0.95),
    (AirArchetype::Bomber, 1.0),
];
static BAND_2: [(AirArchetype, f64); 4] = [
    (AirArchetype::Fighter, 0.3),
    (AirArchetype::Sweeper, 0.5),
    (AirArchetype::Gunship, 0.75),
    (AirArchetype::Bomber, 1.0),
];
static BAND_3: [(AirArchetype, f64); 4] = [
    (AirArchetype::Fighter, 0.2),
    (AirArchetype::Sweeper, 0.4),
    (AirArchetype::Gunship, 0.7),
    (AirArchetype::Bomber, 1.0),
];
static BAND_4: [(AirArchetype, f64); 4] = [
    (AirArchetype::Fighter, 0.15),
    (AirArchetype::Gunship, 0.4),
    (AirArchetype::Bomber, 0.65),
    (AirArchetype::Elite, 1.0),
];
