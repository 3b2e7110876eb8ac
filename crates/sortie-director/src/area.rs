//! Per-area timeline: scripted spawns, scroll speed, boss intro and
//! area transitions.
//!
//! The controller owns the authoritative scroll speed. Everything it wants
//! spawned is returned as [`SpawnOrder`]s; it never touches the world.

use std::collections::BTreeSet;

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use sortie_core::constants::*;
use sortie_core::enums::{
    AirArchetype, AreaState, BossIntroPhase, BossPhase, GroundArchetype, PickupKind,
    SubWeaponType,
};
use sortie_core::events::GameEvent;

use crate::areas::{area_length, area_spec, AreaSpec};
use crate::schedule::{SpawnOrder, SpawnQueue};

/// What one controller tick produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AreaUpdate {
    pub orders: Vec<SpawnOrder>,
    pub events: Vec<GameEvent>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AreaProgressionController {
    area: u8,
    /// Frame counter within the area, 0..=length.
    progress: u32,
    /// Ticks processed since construction; keys the spawn queue.
    clock: u64,
    state: AreaState,
    intro_phase: BossIntroPhase,
    /// Ticks spent in the current intro sub-phase.
    intro_ticks: u32,
    delay_ticks: u32,
    scroll_speed: f64,

    // --- Per-area one-shot flags ---
    special_spawned: bool,
    bonus_spawned: bool,
    mass_spawned: bool,
    downshifted: bool,
    scripted_spawned: BTreeSet<usize>,

    queue: SpawnQueue,
    /// Events raised outside `update` (area entry), flushed on the next update.
    pending_events: Vec<GameEvent>,
}

impl AreaProgressionController {
    /// Start at `area` (1-based, clamped to 1..=12) with progress 0.
    pub fn new(area: u8) -> Self {
        let area = area.clamp(1, AREA_COUNT);
        Self {
            area,
            progress: 0,
            clock: 0,
            state: AreaState::NormalProgress,
            intro_phase: BossIntroPhase::default(),
            intro_ticks: 0,
            delay_ticks: 0,
            scroll_speed: entry_scroll_speed(area_spec(area)),
            special_spawned: false,
            bonus_spawned: false,
            mass_spawned: false,
            downshifted: false,
            scripted_spawned: BTreeSet::new(),
            queue: SpawnQueue::default(),
            pending_events: vec![GameEvent::AreaEntered { area }],
        }
    }

    /// Advance the timeline by one tick.
    pub fn update(&mut self, rng: &mut ChaCha8Rng) -> AreaUpdate {
        let mut out = AreaUpdate {
            orders: Vec::new(),
            events: std::mem::take(&mut self.pending_events),
        };

        match self.state {
            AreaState::NormalProgress => self.update_progress(rng, &mut out),
            AreaState::BossActive => self.update_boss_intro(&mut out),
            AreaState::BossDefeatedDelay => self.update_defeat_delay(&mut out),
            AreaState::Complete => {}
        }

        out.orders.extend(self.queue.drain_due(self.clock));
        self.clock += 1;
        out
    }

    /// External signal: the active boss reached zero hit-points.
    /// Returns false (and changes nothing) when no boss is active.
    pub fn on_boss_defeated(&mut self) -> bool {
        if self.state != AreaState::BossActive {
            return false;
        }
        log::info!("area {}: boss defeated", self.area);
        self.state = AreaState::BossDefeatedDelay;
        self.delay_ticks = 0;
        self.scroll_speed = 0.0;
        true
    }

    pub fn area(&self) -> u8 {
        self.area
    }

    pub fn progress(&self) -> u32 {
        self.progress
    }

    pub fn length(&self) -> u32 {
        area_length(self.area)
    }

    pub fn state(&self) -> AreaState {
        self.state
    }

    pub fn boss_phase(&self) -> BossPhase {
        self.state.boss_phase()
    }

    /// Intro sub-phase, only meaningful while the boss is active.
    pub fn intro_phase(&self) -> Option<BossIntroPhase> {
        (self.state == AreaState::BossActive).then_some(self.intro_phase)
    }

    /// Authoritative scroll speed for the tick just processed.
    pub fn scroll_speed(&self) -> f64 {
        self.scroll_speed
    }

    pub fn spec(&self) -> &'static AreaSpec {
        area_spec(self.area)
    }

    /// Ambient air traffic only runs during normal progress.
    pub fn allows_air_spawns(&self) -> bool {
        self.state == AreaState::NormalProgress
    }

    pub fn is_complete(&self) -> bool {
        self.state == AreaState::Complete
    }

    /// Orders still waiting in the formation queue.
    pub fn queued_orders(&self) -> usize {
        self.queue.len()
    }

    fn update_progress(&mut self, rng: &mut ChaCha8Rng, out: &mut AreaUpdate) {
        self.progress += 1;
        let spec = area_spec(self.area);
        let length = area_length(self.area);
        let midpoint = length / 2;

        if self.progress >= length {
            self.enter_boss(rng, out);
            return;
        }

        if spec.high_speed && !self.downshifted && self.progress >= midpoint {
            self.downshifted = true;
            self.scroll_speed = BASE_SCROLL_SPEED;
            log::debug!("area {}: scroll downshift at {}", self.area, self.progress);
        }

        for (index, event) in spec.scripted.iter().enumerate() {
            if event.at_progress == self.progress && self.scripted_spawned.insert(index) {
                out.orders.push(SpawnOrder::Ground {
                    archetype: GroundArchetype::SupportBase,
                    x: event.x,
                    y: AIR_SPAWN_Y,
                    drop: Some(PickupKind::SubWeapon(event.drop)),
                });
            }
        }

        if self.progress == midpoint {
            if spec.special_enemy && !self.special_spawned {
                self.special_spawned = true;
                out.orders.push(SpawnOrder::Air {
                    archetype: AirArchetype::Special,
                    x: FIELD_WIDTH / 2.0,
                    y: AIR_SPAWN_Y,
                    drop: None,
                });
            }
            if spec.bonus_enemy && !self.bonus_spawned {
                self.bonus_spawned = true;
                out.orders.push(SpawnOrder::Air {
                    archetype: AirArchetype::Bonus,
                    x: random_x(rng),
                    y: AIR_SPAWN_Y,
                    drop: Some(PickupKind::Power),
                });
            }
        }

        if self.progress % FORMATION_ROLL_INTERVAL == 0 && rng.gen::<f64>() < FORMATION_CHANCE {
            let x = random_x(rng);
            log::debug!("area {}: sweeper formation at x={:.0}", self.area, x);
            for i in 0..FORMATION_SIZE as u64 {
                self.queue.schedule(
                    self.clock + i * FORMATION_STAGGER_TICKS,
                    SpawnOrder::Air {
                        archetype: AirArchetype::Sweeper,
                        x,
                        y: AIR_SPAWN_Y,
                        drop: None,
                    },
                );
            }
        }

        let mass_tick = (length as f64 * MASS_FORMATION_PROGRESS).round() as u32;
        if spec.mass_formation && !self.mass_spawned && self.progress == mass_tick {
            self.mass_spawned = true;
            log::debug!("area {}: mass formation", self.area);
            let span = FIELD_WIDTH - 2.0 * SPAWN_MARGIN_X;
            let gap = span / (MASS_FORMATION_SIZE - 1) as f64;
            for i in 0..MASS_FORMATION_SIZE {
                self.queue.schedule(
                    self.clock + i as u64 * MASS_FORMATION_STAGGER_TICKS,
                    SpawnOrder::Air {
                        archetype: AirArchetype::Fighter,
                        x: SPAWN_MARGIN_X + gap * i as f64,
                        y: AIR_SPAWN_Y,
                        drop: None,
                    },
                );
            }
        }

        if self.progress % GROUND_ROLL_INTERVAL == 0 && rng.gen::<f64>() < spec.ground_frequency {
            let archetype = if rng.gen_range(0..4) == 0 {
                GroundArchetype::Core
            } else {
                GroundArchetype::Turret
            };
            out.orders.push(SpawnOrder::Ground {
                archetype,
                x: random_x(rng),
                y: AIR_SPAWN_Y,
                drop: None,
            });
        }
    }

    fn enter_boss(&mut self, rng: &mut ChaCha8Rng, out: &mut AreaUpdate) {
        let spec = area_spec(self.area);
        self.state = AreaState::BossActive;
        self.intro_phase = BossIntroPhase::ScrollingIn;
        self.intro_ticks = 0;
        self.scroll_speed = BOSS_INTRO_SCROLL_SPEED;
        log::info!("area {}: boss {:?} summoned", self.area, spec.boss);

        out.orders.push(SpawnOrder::Boss {
            archetype: spec.boss,
            area: self.area,
        });

        let enemy_count = 5 + self.area as u32;
        for i in 0..enemy_count {
            let archetype = if i % 3 == 2 {
                GroundArchetype::Core
            } else {
                GroundArchetype::Turret
            };
            out.orders.push(SpawnOrder::Ground {
                archetype,
                x: random_x(rng),
                y: rng.gen_range(BOSS_FORMATION_Y_TOP..BOSS_FORMATION_Y_BOTTOM),
                drop: None,
            });
        }

        let base_count = (2 + self.area as u32 / 2).clamp(2, 6);
        for _ in 0..base_count {
            let drop = SubWeaponType::from_index(rng.gen_range(1..8)).unwrap_or_default();
            out.orders.push(SpawnOrder::Ground {
                archetype: GroundArchetype::SupportBase,
                x: random_x(rng),
                y: rng.gen_range(BOSS_FORMATION_Y_TOP..BOSS_FORMATION_Y_BOTTOM),
                drop: Some(PickupKind::SubWeapon(drop)),
            });
        }

        out.events.push(GameEvent::BossIntroStarted {
            area: self.area,
            boss: spec.boss,
        });
    }

    fn update_boss_intro(&mut self, out: &mut AreaUpdate) {
        self.intro_ticks += 1;
        match self.intro_phase {
            BossIntroPhase::ScrollingIn => {
                self.scroll_speed = BOSS_INTRO_SCROLL_SPEED;
                if self.intro_ticks >= BOSS_INTRO_SCROLL_TICKS {
                    self.intro_phase = BossIntroPhase::Decelerating;
                    self.intro_ticks = 0;
                }
            }
            BossIntroPhase::Decelerating => {
                let t = (self.intro_ticks as f64 / BOSS_DECEL_TICKS as f64).min(1.0);
                self.scroll_speed = BOSS_INTRO_SCROLL_SPEED * (1.0 - ease_out_cubic(t));
                if self.intro_ticks >= BOSS_DECEL_TICKS {
                    self.intro_phase = BossIntroPhase::Stopped;
                    self.intro_ticks = 0;
                    self.scroll_speed = 0.0;
                    log::debug!("area {}: boss arena stopped", self.area);
                    out.events.push(GameEvent::BossArenaStopped { area: self.area });
                }
            }
            BossIntroPhase::Stopped => {
                self.scroll_speed = 0.0;
            }
        }
    }

    fn update_defeat_delay(&mut self, out: &mut AreaUpdate) {
        self.delay_ticks += 1;
        if self.delay_ticks < BOSS_DEFEAT_DELAY_TICKS {
            return;
        }
        if self.area >= AREA_COUNT {
            log::info!("final area cleared");
            self.state = AreaState::Complete;
            out.events.push(GameEvent::GameComplete);
        } else {
            self.advance_area();
            out.events.push(GameEvent::AreaEntered { area: self.area });
        }
    }

    fn advance_area(&mut self) {
        self.area += 1;
        self.progress = 0;
        self.state = AreaState::NormalProgress;
        self.intro_phase = BossIntroPhase::default();
        self.intro_ticks = 0;
        self.delay_ticks = 0;
        self.special_spawned = false;
        self.bonus_spawned = false;
        self.mass_spawned = false;
        self.downshifted = false;
        self.scripted_spawned.clear();
        self.queue.clear();
        self.scroll_speed = entry_scroll_speed(area_spec(self.area));
        log::info!("entering area {}", self.area);
    }
}

fn entry_scroll_speed(spec: &AreaSpec) -> f64 {
    if spec.high_speed {
        HIGH_SPEED_SCROLL
    } else {
        BASE_SCROLL_SPEED
    }
}

fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}

fn random_x(rng: &mut ChaCha8Rng) -> f64 {
    rng.gen_range(SPAWN_MARGIN_X..FIELD_WIDTH - SPAWN_MARGIN_X)
}
