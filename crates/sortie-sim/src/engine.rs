//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, the player, the weapon
//! controller, the area and difficulty controllers and the seeded RNG. It
//! consumes one `InputFrame` per tick, runs all systems in a fixed order and
//! produces a `GameStateSnapshot`. Completely headless, enabling
//! deterministic testing.

use hecs::{Entity, World};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use sortie_core::commands::InputFrame;
use sortie_core::components::{Enemy, Pickup, Projectile};
use sortie_core::config::SimConfig;
use sortie_core::constants::*;
use sortie_core::enums::{GamePhase, PickupKind, SubWeaponType};
use sortie_core::error::SimResult;
use sortie_core::events::GameEvent;
use sortie_core::state::GameStateSnapshot;
use sortie_core::types::{Position, SimTime, Velocity};

use sortie_director::{AreaProgressionController, CombatTelemetry, DifficultyController, SpawnOrder};

use crate::player::Player;
use crate::save::SaveState;
use crate::score::ScoreState;
use crate::systems;
use crate::systems::snapshot::SnapshotSources;
use crate::weapon::WeaponController;
use crate::world_setup;

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    rng: ChaCha8Rng,
    player: Player,
    weapons: WeaponController,
    area: AreaProgressionController,
    difficulty: DifficultyController,
    score: ScoreState,
    next_serial: u32,
    despawn_buffer: Vec<Entity>,
    events: Vec<GameEvent>,
}

impl SimulationEngine {
    /// Create a new engine. The config is used as given; see
    /// [`SimulationEngine::try_new`] for validation.
    pub fn new(config: SimConfig) -> Self {
        log::info!(
            "new run: seed {}, area {}, {} lives",
            config.seed,
            config.starting_area,
            config.starting_lives
        );
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::Playing,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            player: Player::new(config.starting_lives),
            weapons: WeaponController::new(config.starting_main_level),
            area: AreaProgressionController::new(config.starting_area),
            difficulty: DifficultyController::new(),
            score: ScoreState::default(),
            next_serial: 0,
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Validate the config, then create the engine.
    pub fn try_new(config: SimConfig) -> SimResult<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    ///
    /// A frame with `pause` held freezes everything; terminal phases never
    /// advance again.
    pub fn tick(&mut self, input: &InputFrame) -> GameStateSnapshot {
        match self.phase {
            GamePhase::GameOver | GamePhase::Complete => {}
            _ if input.pause => self.phase = GamePhase::Paused,
            _ => {
                self.phase = GamePhase::Playing;
                self.run_systems(input);
                self.time.advance();
            }
        }
        self.snapshot()
    }

    fn snapshot(&mut self) -> GameStateSnapshot {
        let events = std::mem::take(&mut self.events);
        let sources = SnapshotSources {
            time: &self.time,
            phase: self.phase,
            player: &self.player,
            weapons: &self.weapons,
            area: &self.area,
            difficulty: &self.difficulty,
            score: &self.score,
        };
        systems::snapshot::build_snapshot(&self.world, &sources, events)
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable world access for scenario setup.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn weapons(&self) -> &WeaponController {
        &self.weapons
    }

    pub fn weapons_mut(&mut self) -> &mut WeaponController {
        &mut self.weapons
    }

    /// Hand the player a sub-weapon as if its pickup had been collected.
    pub fn give_sub_weapon(&mut self, sub: SubWeaponType) {
        self.weapons
            .collect_sub_weapon(sub, &mut self.world, &mut self.events);
    }

    pub fn area(&self) -> &AreaProgressionController {
        &self.area
    }

    pub fn difficulty(&self) -> &DifficultyController {
        &self.difficulty
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    /// Spawn an enemy outside the area schedule.
    pub fn spawn_enemy(&mut self, order: &SpawnOrder) -> Entity {
        let entity = world_setup::spawn_enemy(&mut self.world, order, self.next_serial);
        self.next_serial += 1;
        entity
    }

    /// Capture the complete simulation state.
    pub fn save_state(&self) -> SaveState {
        let mut projectiles = Vec::new();
        let mut query = self.world.query::<(&Position, &Velocity, &Projectile)>();
        for (_, (pos, vel, proj)) in query.iter() {
            projectiles.push((*pos, *vel, proj.clone()));
        }
        drop(query);

        let mut enemies = Vec::new();
        let mut query = self.world.query::<(&Position, &Velocity, &Enemy)>();
        for (_, (pos, vel, enemy)) in query.iter() {
            enemies.push((*pos, *vel, enemy.clone()));
        }
        drop(query);

        let mut pickups = Vec::new();
        let mut query = self.world.query::<(&Position, &Velocity, &Pickup)>();
        for (_, (pos, vel, pickup)) in query.iter() {
            pickups.push((*pos, *vel, *pickup));
        }
        drop(query);

        SaveState {
            time: self.time,
            phase: self.phase,
            rng: self.rng.clone(),
            player: self.player.clone(),
            weapons: self.weapons.clone(),
            area: self.area.clone(),
            difficulty: self.difficulty.clone(),
            score: self.score.clone(),
            next_serial: self.next_serial,
            projectiles,
            enemies,
            pickups,
        }
    }

    /// Rebuild an engine from a saved state. Entities are respawned in
    /// their saved iteration order.
    pub fn restore(state: SaveState) -> Self {
        let mut world = World::new();
        for bundle in state.projectiles {
            world.spawn(bundle);
        }
        for bundle in state.enemies {
            world.spawn(bundle);
        }
        for bundle in state.pickups {
            world.spawn(bundle);
        }
        log::debug!("restored run at tick {}", state.time.tick);

        Self {
            world,
            time: state.time,
            phase: state.phase,
            rng: state.rng,
            player: state.player,
            weapons: state.weapons,
            area: state.area,
            difficulty: state.difficulty,
            score: state.score,
            next_serial: state.next_serial,
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, input: &InputFrame) {
        // 1. Player movement
        self.player.update(input, self.weapons.move_speed_factor());

        // 2. Area progression and spawning
        let update = self.area.update(&mut self.rng);
        if update
            .events
            .iter()
            .any(|event| matches!(event, GameEvent::AreaEntered { .. }))
        {
            self.difficulty.reset_counters();
        }
        self.events.extend(update.events);
        let mut orders = update.orders;
        if self.area.allows_air_spawns() {
            let multiplier = self.area.spec().difficulty_multiplier;
            orders.extend(self.difficulty.air_spawn(multiplier, &mut self.rng));
        }
        for order in &orders {
            self.spawn_enemy(order);
        }

        // 3. Weapons: timers, firing, then persistent sub-weapons
        systems::enemies::clear_deflection(&mut self.world);
        self.weapons.tick_timers(&mut self.world, &mut self.events);
        if self.player.can_fire() {
            let muzzle = self.player.position;
            if input.main_fire {
                self.weapons.shoot_main(&mut self.world, &muzzle);
            }
            if input.sub_fire {
                self.weapons
                    .shoot_sub(&mut self.world, &muzzle, &mut self.events);
            }
        }
        self.weapons
            .update_persistent(&mut self.world, &self.player.position, &mut self.events);

        // 4. Projectile motion (instant plasma detonates here)
        systems::projectiles::run(&mut self.world, &self.player.position, &mut self.events);

        // 5. Pickup drift
        systems::pickups::run(&mut self.world);

        // 6. Enemy FSM and volleys
        systems::enemies::run(
            &mut self.world,
            self.area.area(),
            self.area.scroll_speed(),
            &self.player.position,
        );

        // 7. Collision resolution
        let outcome = systems::collision::run(
            &mut self.world,
            &self.player,
            self.area.area(),
            &mut self.rng,
            &mut self.score,
            &mut self.events,
        );

        // 8. Apply outcomes
        for kind in &outcome.collected {
            self.collect_pickup(*kind);
        }
        if outcome.player_hit {
            self.on_player_hit();
        }
        if outcome.boss_defeated && self.area.on_boss_defeated() {
            self.events.push(GameEvent::BossDefeated {
                area: self.area.area(),
            });
        }

        // 9. Difficulty feedback
        self.difficulty.update(&CombatTelemetry {
            kills: outcome.kills,
            player_hits: u32::from(outcome.player_hit),
            score: self.score.score,
            main_level: self.weapons.main_level(),
        });

        // 10. Cleanup (spent, destroyed, offscreen)
        systems::cleanup::run(&mut self.world, &mut self.despawn_buffer);

        if self.area.is_complete() && self.phase == GamePhase::Playing {
            log::info!("all areas cleared, score {}", self.score.score);
            self.phase = GamePhase::Complete;
        }
    }

    fn collect_pickup(&mut self, kind: PickupKind) {
        match kind {
            PickupKind::Power => {
                self.weapons.collect_power(&mut self.events);
                self.player.grant_invulnerability(POWER_PICKUP_INVULN_TICKS);
            }
            PickupKind::SubWeapon(sub) => {
                self.weapons
                    .collect_sub_weapon(sub, &mut self.world, &mut self.events);
            }
        }
        self.events.push(GameEvent::PickupCollected { kind });
    }

    fn on_player_hit(&mut self) {
        self.score.player_hits += 1;

        if self.weapons.is_shield_active() {
            self.weapons.absorb_hit(&mut self.events);
            self.player.grant_invulnerability(SHIELD_BREAK_INVULN_TICKS);
            return;
        }

        self.player.lives = self.player.lives.saturating_sub(1);
        log::info!("player hit, {} lives left", self.player.lives);
        self.events.push(GameEvent::PlayerHit {
            lives_left: self.player.lives,
        });

        if self.player.lives == 0 {
            log::info!("game over at tick {}, score {}", self.time.tick, self.score.score);
            self.phase = GamePhase::GameOver;
            self.events.push(GameEvent::GameOver);
            return;
        }

        self.weapons.on_death(&mut self.world);
        self.player.begin_respawn();
    }
}
