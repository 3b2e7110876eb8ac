//! Tests for the engine, weapon controller, projectile behaviors and the
//! collision pass.

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use sortie_core::commands::InputFrame;
use sortie_core::components::{Enemy, Pickup, Projectile, ProjectileMotion};
use sortie_core::config::SimConfig;
use sortie_core::constants::*;
use sortie_core::enums::*;
use sortie_core::events::GameEvent;
use sortie_core::types::{Position, Velocity};

use sortie_director::SpawnOrder;
use sortie_enemy_ai::profiles::{air_profile, boss_profile};

use crate::engine::SimulationEngine;
use crate::geometry::{bearing_deg, bearing_in_arc, circles_overlap, segment_distance};
use crate::player::Player;
use crate::projectile::{advance, collides_with, hit_radius, is_offscreen};
use crate::score::ScoreState;
use crate::systems::{cleanup, collision};
use crate::weapon::barrier::Barrier;
use crate::weapon::{ResourcePool, WeaponController};
use crate::world_setup::{
    player_projectile, spawn_enemy, spawn_enemy_bullet, spawn_pickup, spawn_projectile,
};

fn engine() -> SimulationEngine {
    SimulationEngine::new(SimConfig::default())
}

fn player_pos() -> Position {
    Position::new(PLAYER_START_X, PLAYER_STANDING_Y)
}

fn air(archetype: AirArchetype, x: f64, y: f64) -> SpawnOrder {
    SpawnOrder::Air {
        archetype,
        x,
        y,
        drop: None,
    }
}

fn projectiles(world: &World) -> Vec<(Position, Velocity, Projectile)> {
    let mut query = world.query::<(&Position, &Velocity, &Projectile)>();
    query
        .iter()
        .map(|(_, (pos, vel, proj))| (*pos, *vel, proj.clone()))
        .collect()
}

fn enemy(world: &World, entity: hecs::Entity) -> Enemy {
    world
        .get::<&Enemy>(entity)
        .map(|enemy| (*enemy).clone())
        .expect("enemy should exist")
}

fn normal_shot(damage: f64) -> Projectile {
    player_projectile(
        ShotSource::Main,
        ProjectileKind::Normal,
        damage,
        MAIN_SHOT_RADIUS,
        0,
        ProjectileMotion::Linear,
    )
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let mut engine_a = engine();
    let mut engine_b = engine();

    for tick in 0..900u32 {
        let input = InputFrame {
            left: tick % 120 < 60,
            right: tick % 120 >= 60,
            ..InputFrame::firing()
        };
        let json_a = serde_json::to_string(&engine_a.tick(&input)).unwrap();
        let json_b = serde_json::to_string(&engine_b.tick(&input)).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with same seed at tick {}", tick);
    }
}

#[test]
fn test_determinism_different_seeds() {
    let mut engine_a = SimulationEngine::new(SimConfig {
        seed: 111,
        ..Default::default()
    });
    let mut engine_b = SimulationEngine::new(SimConfig {
        seed: 222,
        ..Default::default()
    });

    let mut diverged = false;
    for _ in 0..600 {
        let json_a = serde_json::to_string(&engine_a.tick(&InputFrame::idle())).unwrap();
        let json_b = serde_json::to_string(&engine_b.tick(&InputFrame::idle())).unwrap();
        if json_a != json_b {
            diverged = true;
            break;
        }
    }
    assert!(diverged, "Different seeds should produce divergent output");
}

// ---- Tick timing and phases ----

#[test]
fn test_tick_advances_time() {
    let mut engine = engine();
    for _ in 0..60 {
        engine.tick(&InputFrame::idle());
    }
    assert_eq!(engine.time().tick, 60);
    assert!((engine.time().elapsed_secs - 1.0).abs() < 1e-9);
}

#[test]
fn test_first_tick_announces_area() {
    let mut engine = engine();
    let snap = engine.tick(&InputFrame::idle());
    assert!(
        snap.events.contains(&GameEvent::AreaEntered { area: 1 }),
        "First tick should announce area 1"
    );
    assert_eq!(snap.area.area, 1);
    assert_eq!(snap.phase, GamePhase::Playing);
}

#[test]
fn test_pause_freezes_simulation() {
    let mut engine = engine();
    engine.tick(&InputFrame::idle());
    let before = engine.time().tick;

    let paused = InputFrame {
        pause: true,
        right: true,
        ..InputFrame::idle()
    };
    for _ in 0..10 {
        let snap = engine.tick(&paused);
        assert_eq!(snap.phase, GamePhase::Paused);
    }
    assert_eq!(engine.time().tick, before, "Paused ticks must not advance time");
    assert_eq!(engine.player().position, player_pos(), "Paused player must not move");

    let snap = engine.tick(&InputFrame::idle());
    assert_eq!(snap.phase, GamePhase::Playing);
    assert_eq!(engine.time().tick, before + 1);
}

#[test]
fn test_try_new_rejects_invalid_config() {
    let result = SimulationEngine::try_new(SimConfig {
        starting_lives: 0,
        ..Default::default()
    });
    assert!(result.is_err(), "Zero lives should be rejected");
}

// ---- Player ----

#[test]
fn test_player_clamped_to_field() {
    let mut player = Player::new(3);
    let left = InputFrame {
        left: true,
        up: true,
        ..InputFrame::idle()
    };
    for _ in 0..200 {
        player.update(&left, 1.0);
    }
    assert_eq!(player.position.x, PLAYER_SIZE);
    assert_eq!(player.position.y, PLAYER_SIZE);
}

#[test]
fn test_player_hi_speed_factor() {
    let mut player = Player::new(3);
    let right = InputFrame {
        right: true,
        ..InputFrame::idle()
    };
    player.update(&right, HI_SPEED_MOVE_FACTOR);
    assert!((player.position.x - (PLAYER_START_X + 6.0)).abs() < 1e-9);
}

#[test]
fn test_player_respawn_climb() {
    let mut player = Player::new(3);
    player.begin_respawn();
    assert!(!player.can_fire());
    assert!(!player.can_be_hit());

    for _ in 0..59 {
        player.update(&InputFrame::idle(), 1.0);
    }
    assert_eq!(player.status, PlayerStatus::Respawning);

    player.update(&InputFrame::idle(), 1.0);
    assert_eq!(player.status, PlayerStatus::Standing);
    assert_eq!(player.position.y, PLAYER_STANDING_Y);
    assert_eq!(player.invulnerable_ticks, RESPAWN_INVULN_TICKS);
    assert!(player.can_fire());
    assert!(!player.can_be_hit(), "Fresh respawn should be invulnerable");
}

// ---- Geometry ----

#[test]
fn test_bearing_convention() {
    let center = Position::new(0.0, 0.0);
    assert!(bearing_deg(&center, &Position::new(0.0, -10.0)).abs() < 1e-9);
    assert!((bearing_deg(&center, &Position::new(10.0, 0.0)) - 90.0).abs() < 1e-9);
    assert!((bearing_deg(&center, &Position::new(-10.0, 0.0)) + 90.0).abs() < 1e-9);
    assert!(bearing_in_arc(170.0, -180.0, 180.0));
    assert!(!bearing_in_arc(31.0, -30.0, 30.0));
}

#[test]
fn test_circle_and_segment_distance() {
    let a = Position::new(0.0, 0.0);
    assert!(circles_overlap(&a, 2.0, &Position::new(4.0, 0.0), 2.0), "Touching counts");
    assert!(!circles_overlap(&a, 2.0, &Position::new(4.1, 0.0), 2.0));
    let d = segment_distance(&Position::new(5.0, 3.0), &a, &Position::new(10.0, 0.0));
    assert!((d - 3.0).abs() < 1e-9);
}

// ---- Spawning ----

#[test]
fn test_boss_spawn_scales_with_its_area() {
    let mut world = World::new();
    let early = spawn_enemy(
        &mut world,
        &SpawnOrder::Boss {
            archetype: BossArchetype::Warden,
            area: 1,
        },
        0,
    );
    let late = spawn_enemy(
        &mut world,
        &SpawnOrder::Boss {
            archetype: BossArchetype::Warden,
            area: 9,
        },
        1,
    );
    let late_hp = enemy(&world, late).max_hit_points;
    assert_eq!(late_hp, boss_profile(BossArchetype::Warden, 9).hit_points);
    assert!(late_hp > enemy(&world, early).max_hit_points);

    let drone = spawn_enemy(&mut world, &air(AirArchetype::Drone, 100.0, 50.0), 2);
    assert_eq!(
        enemy(&world, drone).hit_points,
        air_profile(AirArchetype::Drone).hit_points
    );
}

// ---- Projectile behavior ----

#[test]
fn test_offscreen_margin_per_kind() {
    let just_inside = Position::new(FIELD_WIDTH / 2.0, -OFFSCREEN_MARGIN_DEFAULT);
    let just_outside = Position::new(FIELD_WIDTH / 2.0, -OFFSCREEN_MARGIN_DEFAULT - 0.1);
    assert!(!is_offscreen(&just_inside, ProjectileKind::Normal));
    assert!(is_offscreen(&just_outside, ProjectileKind::Normal));
    assert!(
        !is_offscreen(&just_outside, ProjectileKind::Boomerang),
        "Boomerangs get a wider margin"
    );
}

#[test]
fn test_vibrator_starts_oscillating_after_advance_distance() {
    let mut proj = player_projectile(
        ShotSource::Sub(SubWeaponType::Vibrator),
        ProjectileKind::Vibrating,
        VIBRATOR_DAMAGE[0],
        VIBRATOR_RADIUS,
        0,
        ProjectileMotion::Vibrating {
            phase: VibratePhase::Advancing,
            anchor_x: 240.0,
            traveled: 0.0,
            ticks: 0,
            amplitude: VIBRATOR_AMPLITUDE[0],
            angular_speed: VIBRATOR_ANGULAR_SPEED[0],
            durability: VIBRATOR_DURABILITY[0],
            max_durability: VIBRATOR_DURABILITY[0],
        },
    );
    let mut pos = Position::new(240.0, 500.0);
    let mut vel = Velocity::new(0.0, -VIBRATOR_SPEED);

    // 26 * 6 = 156 < 160
    for _ in 0..26 {
        advance(&mut pos, &mut vel, &mut proj, &player_pos());
    }
    assert!(matches!(
        proj.motion,
        ProjectileMotion::Vibrating {
            phase: VibratePhase::Advancing,
            ..
        }
    ));

    advance(&mut pos, &mut vel, &mut proj, &player_pos());
    assert!(matches!(
        proj.motion,
        ProjectileMotion::Vibrating {
            phase: VibratePhase::Oscillating,
            ..
        }
    ));

    let anchor = pos.x;
    let y = pos.y;
    advance(&mut pos, &mut vel, &mut proj, &player_pos());
    assert!(pos.x != anchor, "Oscillation should move sideways");
    assert!((pos.y - (y - VIBRATOR_DRIFT_SPEED)).abs() < 1e-9);
}

#[test]
fn test_vibrator_shrinks_with_wear() {
    let mut proj = player_projectile(
        ShotSource::Sub(SubWeaponType::Vibrator),
        ProjectileKind::Vibrating,
        1.0,
        10.0,
        0,
        ProjectileMotion::Vibrating {
            phase: VibratePhase::Oscillating,
            anchor_x: 0.0,
            traveled: 0.0,
            ticks: 0,
            amplitude: 0.0,
            angular_speed: 0.0,
            durability: 5.0,
            max_durability: 10.0,
        },
    );
    assert!((hit_radius(&proj) - 5.0).abs() < 1e-9);

    if let ProjectileMotion::Vibrating { durability, .. } = &mut proj.motion {
        *durability = 1.0;
    }
    assert!(
        (hit_radius(&proj) - 10.0 * VIBRATOR_MIN_SIZE_RATIO).abs() < 1e-9,
        "Size floors at 30%"
    );
}

fn boomerang(returns_left: u32) -> Projectile {
    player_projectile(
        ShotSource::Sub(SubWeaponType::Rewinder),
        ProjectileKind::Boomerang,
        2.0,
        BOOMERANG_RADIUS,
        0,
        ProjectileMotion::Boomerang {
            phase: BoomerangPhase::Forward,
            traveled: 0.0,
            max_range: 100.0,
            base_speed: BOOMERANG_SPEED,
            returns_left,
        },
    )
}

#[test]
fn test_boomerang_decelerates_then_returns() {
    let mut proj = boomerang(1);
    let mut pos = Position::new(240.0, 500.0);
    let mut vel = Velocity::new(0.0, -BOOMERANG_SPEED);
    proj.struck.push(7);

    advance(&mut pos, &mut vel, &mut proj, &player_pos());
    let first_speed = vel.speed();
    assert!((first_speed - BOOMERANG_SPEED).abs() < 1e-9);
    advance(&mut pos, &mut vel, &mut proj, &player_pos());
    assert!(vel.speed() < first_speed, "Forward speed decays with distance");

    for _ in 0..200 {
        advance(&mut pos, &mut vel, &mut proj, &player_pos());
        if matches!(
            proj.motion,
            ProjectileMotion::Boomerang {
                phase: BoomerangPhase::Returning,
                ..
            }
        ) {
            break;
        }
    }
    assert!(matches!(
        proj.motion,
        ProjectileMotion::Boomerang {
            phase: BoomerangPhase::Returning,
            ..
        }
    ));
    assert!(proj.struck.is_empty(), "A new leg may strike the same enemies again");
}

#[test]
fn test_boomerang_catch_recycles_then_spends() {
    let mut proj = boomerang(1);
    if let ProjectileMotion::Boomerang { phase, .. } = &mut proj.motion {
        *phase = BoomerangPhase::Returning;
    }
    let mut pos = Position::new(PLAYER_START_X, PLAYER_STANDING_Y - 10.0);
    let mut vel = Velocity::default();

    advance(&mut pos, &mut vel, &mut proj, &player_pos());
    match proj.motion {
        ProjectileMotion::Boomerang {
            phase, returns_left, ..
        } => {
            assert_eq!(phase, BoomerangPhase::Forward);
            assert_eq!(returns_left, 0);
        }
        _ => panic!("Expected a boomerang"),
    }
    assert!(!proj.spent);

    if let ProjectileMotion::Boomerang { phase, .. } = &mut proj.motion {
        *phase = BoomerangPhase::Returning;
    }
    advance(&mut pos, &mut vel, &mut proj, &player_pos());
    assert!(proj.spent, "Out of returns: caught for good");
}

#[test]
fn test_laser_hits_along_its_length() {
    let laser = player_projectile(
        ShotSource::Main,
        ProjectileKind::Laser,
        MAIN_LASER_DAMAGE,
        MAIN_LASER_RADIUS,
        30,
        ProjectileMotion::Laser {
            length: MAIN_LASER_LENGTH,
        },
    );
    let head = Position::new(100.0, 100.0);
    let vel = Velocity::new(0.0, -MAIN_LASER_SPEED);
    assert!(collides_with(&head, &vel, &laser, &Position::new(100.0, 180.0), 1.0));
    assert!(!collides_with(&head, &vel, &laser, &Position::new(100.0, 220.0), 1.0));
}

// ---- Weapon controller ----

#[test]
fn test_resource_pool_tables() {
    assert_eq!(ResourcePool::full(SubWeaponType::AllRange, 3), ResourcePool::Unlimited);
    assert_eq!(ResourcePool::full(SubWeaponType::Crusher, 0), ResourcePool::Ammo(50));
    assert_eq!(ResourcePool::full(SubWeaponType::Crusher, 5), ResourcePool::Ammo(100));
    assert_eq!(ResourcePool::full(SubWeaponType::Barrier, 2), ResourcePool::Durability(18.0));
    assert_eq!(ResourcePool::full(SubWeaponType::Circular, 1), ResourcePool::Duration(720));
    assert_eq!(ResourcePool::full(SubWeaponType::Vibrator, 4), ResourcePool::Ammo(9));
    assert_eq!(ResourcePool::full(SubWeaponType::Rewinder, 1), ResourcePool::Ammo(24));
    assert_eq!(ResourcePool::full(SubWeaponType::Plasma, 2), ResourcePool::Ammo(4));
    assert_eq!(ResourcePool::full(SubWeaponType::HiSpeed, 0), ResourcePool::Duration(480));
}

#[test]
fn test_main_pattern_counts() {
    for (level, expected) in [(0, 1), (1, 2), (2, 2), (3, 3), (4, 3), (5, 3), (29, 3)] {
        let mut world = World::new();
        let mut weapons = WeaponController::new(level);
        assert!(weapons.shoot_main(&mut world, &player_pos()));
        assert_eq!(
            projectiles(&world).len(),
            expected,
            "Main level {} should fire {} shots",
            level,
            expected
        );
    }
}

#[test]
fn test_main_cooldown() {
    let mut world = World::new();
    let mut events = Vec::new();
    let mut weapons = WeaponController::new(0);
    assert!(weapons.shoot_main(&mut world, &player_pos()));
    assert!(!weapons.shoot_main(&mut world, &player_pos()), "Cooldown should gate");
    for _ in 0..MAIN_COOLDOWN_TICKS {
        weapons.tick_timers(&mut world, &mut events);
    }
    assert!(weapons.shoot_main(&mut world, &player_pos()));
}

#[test]
fn test_lv30_laser_only_with_base_sub_weapon() {
    let mut world = World::new();
    let mut events = Vec::new();
    let mut weapons = WeaponController::new(MAIN_LEVEL_MAX);
    weapons.shoot_main(&mut world, &player_pos());
    let shots = projectiles(&world);
    assert_eq!(shots.len(), 1);
    assert_eq!(shots[0].2.kind, ProjectileKind::Laser);

    let mut world = World::new();
    weapons.collect_sub_weapon(SubWeaponType::Crusher, &mut world, &mut events);
    for _ in 0..MAIN_COOLDOWN_TICKS {
        weapons.tick_timers(&mut world, &mut events);
    }
    weapons.shoot_main(&mut world, &player_pos());
    let shots = projectiles(&world);
    assert_eq!(shots.len(), 3);
    assert!(shots.iter().all(|(_, _, p)| p.kind == ProjectileKind::Normal));
}

#[test]
fn test_same_type_pickup_levels_up_and_refills() {
    let mut world = World::new();
    let mut events = Vec::new();
    let mut weapons = WeaponController::new(0);
    weapons.collect_sub_weapon(SubWeaponType::Crusher, &mut world, &mut events);
    assert!(weapons.shoot_sub(&mut world, &player_pos(), &mut events));
    assert_eq!(weapons.ammo(), 49);

    weapons.collect_sub_weapon(SubWeaponType::Crusher, &mut world, &mut events);
    assert_eq!(weapons.sub_level(), 1);
    assert_eq!(weapons.ammo(), 60, "Level up refills to the new level's pool");
    assert!(events.contains(&GameEvent::SubWeaponLevelUp {
        sub_type: SubWeaponType::Crusher,
        level: 1
    }));

    for _ in 0..10 {
        weapons.collect_sub_weapon(SubWeaponType::Crusher, &mut world, &mut events);
    }
    assert_eq!(weapons.sub_level(), SUB_LEVEL_MAX, "Sub level caps at 5");
}

#[test]
fn test_power_pickup_caps_at_30() {
    let mut events = Vec::new();
    let mut weapons = WeaponController::new(29);
    weapons.collect_power(&mut events);
    weapons.collect_power(&mut events);
    assert_eq!(weapons.main_level(), MAIN_LEVEL_MAX);
}

#[test]
fn test_duration_pool_expires() {
    let mut world = World::new();
    let mut events = Vec::new();
    let mut weapons = WeaponController::new(0);
    weapons.collect_sub_weapon(SubWeaponType::HiSpeed, &mut world, &mut events);
    assert_eq!(weapons.move_speed_factor(), HI_SPEED_MOVE_FACTOR);

    for _ in 0..HI_SPEED_DURATION[0] - 1 {
        weapons.tick_timers(&mut world, &mut events);
    }
    assert_eq!(weapons.sub_type(), SubWeaponType::HiSpeed);
    assert_eq!(weapons.duration_frames(), 1);

    weapons.tick_timers(&mut world, &mut events);
    assert_eq!(weapons.sub_type(), SubWeaponType::AllRange);
    assert_eq!(weapons.pool(), ResourcePool::Unlimited);
    assert!(events.contains(&GameEvent::SubWeaponDepleted {
        sub_type: SubWeaponType::HiSpeed
    }));
}

#[test]
fn test_barrier_passive_decay_floors_at_one() {
    let mut world = World::new();
    let mut events = Vec::new();
    let mut weapons = WeaponController::new(0);
    weapons.collect_sub_weapon(SubWeaponType::Barrier, &mut world, &mut events);
    assert!(weapons.barrier().is_some(), "Barrier is up as soon as it is selected");
    assert_eq!(weapons.durability(), BARRIER_DURABILITY[0]);

    for _ in 0..BARRIER_DECAY_INTERVAL_TICKS {
        weapons.update_persistent(&mut world, &player_pos(), &mut events);
    }
    assert_eq!(weapons.durability(), BARRIER_DURABILITY[0] - 1.0);

    let mut last = weapons.durability();
    for _ in 0..BARRIER_DECAY_INTERVAL_TICKS * 20 {
        weapons.update_persistent(&mut world, &player_pos(), &mut events);
        assert!(weapons.durability() <= last, "Durability never increases");
        last = weapons.durability();
    }
    assert_eq!(weapons.durability(), BARRIER_DECAY_FLOOR);
    assert_eq!(weapons.sub_type(), SubWeaponType::Barrier);
}

#[test]
fn test_barrier_sector_coverage() {
    let center = Position::new(200.0, 400.0);
    let narrow = Barrier::new(0);
    assert!(narrow.covers(&center, &Position::new(200.0, 370.0), 2.0));
    assert!(!narrow.covers(&center, &Position::new(230.0, 400.0), 2.0));
    assert!(!narrow.covers(&center, &Position::new(200.0, 300.0), 2.0), "Outside the radius");

    let ring = Barrier::new(5);
    assert!(ring.covers(&center, &Position::new(230.0, 400.0), 2.0));
    assert!(ring.covers(&center, &Position::new(200.0, 430.0), 2.0));
}

#[test]
fn test_barrier_contact_drains_without_damage() {
    let mut world = World::new();
    let mut events = Vec::new();
    let mut weapons = WeaponController::new(0);
    weapons.collect_sub_weapon(SubWeaponType::Barrier, &mut world, &mut events);
    let center = player_pos();
    let drone = spawn_enemy(
        &mut world,
        &air(AirArchetype::Drone, center.x, center.y - 30.0),
        0,
    );

    weapons.update_persistent(&mut world, &center, &mut events);
    assert!((weapons.durability() - (BARRIER_DURABILITY[0] - BARRIER_CONTACT_DRAIN)).abs() < 1e-9);
    assert_eq!(enemy(&world, drone).hit_points, 1.0, "Barrier contact deals no damage");
}

#[test]
fn test_circular_arms_once() {
    let mut world = World::new();
    let mut events = Vec::new();
    let mut weapons = WeaponController::new(0);
    weapons.collect_sub_weapon(SubWeaponType::Circular, &mut world, &mut events);
    assert!(weapons.rotating().is_none());

    assert!(weapons.shoot_sub(&mut world, &player_pos(), &mut events));
    assert!(weapons.rotating().is_some());
    for _ in 0..CIRCULAR_ARM_COOLDOWN_TICKS {
        weapons.tick_timers(&mut world, &mut events);
    }
    assert!(!weapons.shoot_sub(&mut world, &player_pos(), &mut events), "Already armed");
}

#[test]
fn test_rotating_deflects_off_boss() {
    let mut world = World::new();
    let mut events = Vec::new();
    let mut weapons = WeaponController::new(0);
    weapons.collect_sub_weapon(SubWeaponType::Circular, &mut world, &mut events);
    weapons.shoot_sub(&mut world, &player_pos(), &mut events);

    let boss = spawn_enemy(
        &mut world,
        &SpawnOrder::Boss {
            archetype: BossArchetype::Warden,
            area: 1,
        },
        0,
    );
    // Park the boss on top of the player so a node must touch it.
    if let Ok(mut pos) = world.get::<&mut Position>(boss) {
        *pos = player_pos();
    }
    let hp = enemy(&world, boss).hit_points;

    weapons.update_persistent(&mut world, &player_pos(), &mut events);
    assert!(weapons.rotating().is_none(), "Boss contact deactivates the nodes");
    assert_eq!(weapons.sub_cooldown(), 0);
    assert!(enemy(&world, boss).deflecting);
    assert_eq!(enemy(&world, boss).hit_points, hp);
    assert!(events
        .iter()
        .any(|e| matches!(e, GameEvent::Deflected { radius, .. } if *radius == DEFLECT_BURST_RADIUS)));
}

#[test]
fn test_vibrator_is_exclusive() {
    let mut world = World::new();
    let mut events = Vec::new();
    let mut weapons = WeaponController::new(0);
    weapons.collect_sub_weapon(SubWeaponType::Vibrator, &mut world, &mut events);

    assert!(weapons.shoot_sub(&mut world, &player_pos(), &mut events));
    for _ in 0..VIBRATOR_COOLDOWN_TICKS {
        weapons.tick_timers(&mut world, &mut events);
    }
    assert!(
        !weapons.shoot_sub(&mut world, &player_pos(), &mut events),
        "One live vibrating shot at a time"
    );
    assert_eq!(weapons.ammo(), VIBRATOR_AMMO[0] as i32 - 1, "Refusal spends no ammo");
}

#[test]
fn test_rewinder_mutates_to_laser() {
    let mut world = World::new();
    let mut events = Vec::new();
    let mut weapons = WeaponController::new(0);
    for _ in 0..REWINDER_LASER_LEVEL {
        weapons.collect_sub_weapon(SubWeaponType::Rewinder, &mut world, &mut events);
    }
    assert_eq!(weapons.sub_level(), REWINDER_LASER_LEVEL - 1);
    weapons.shoot_sub(&mut world, &player_pos(), &mut events);
    assert_eq!(projectiles(&world)[0].2.kind, ProjectileKind::Boomerang);

    let mut world = World::new();
    weapons.collect_sub_weapon(SubWeaponType::Rewinder, &mut world, &mut events);
    for _ in 0..REWINDER_COOLDOWN_TICKS {
        weapons.tick_timers(&mut world, &mut events);
    }
    weapons.shoot_sub(&mut world, &player_pos(), &mut events);
    assert_eq!(projectiles(&world)[0].2.kind, ProjectileKind::Laser);
}

#[test]
fn test_shield_absorbs_hit() {
    let mut world = World::new();
    let mut events = Vec::new();
    let mut weapons = WeaponController::new(MAIN_LEVEL_MAX);
    assert!(!weapons.is_shield_active(), "Base sub-weapon gives no shield");
    weapons.collect_sub_weapon(SubWeaponType::Crusher, &mut world, &mut events);
    assert!(weapons.is_shield_active());

    weapons.absorb_hit(&mut events);
    assert_eq!(weapons.main_level(), SHIELD_BREAK_MAIN_LEVEL);
    assert!(events.contains(&GameEvent::ShieldBreak));
}

// ---- Collision ----

#[test]
fn test_normal_shot_destroys_drone() {
    let mut world = World::new();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut score = ScoreState::default();
    let mut events = Vec::new();
    let drone = spawn_enemy(&mut world, &air(AirArchetype::Drone, 240.0, 300.0), 0);
    spawn_projectile(
        &mut world,
        Position::new(240.0, 300.0),
        Velocity::new(0.0, -MAIN_SHOT_SPEED),
        normal_shot(1.0),
    );

    let outcome = collision::run(&mut world, &Player::new(3), 1, &mut rng, &mut score, &mut events);
    assert_eq!(outcome.kills, 1);
    assert_eq!(score.score, 50);
    assert!(enemy(&world, drone).destroyed);
    assert!(projectiles(&world)[0].2.spent, "Normal shots are consumed on hit");
    assert!(events
        .iter()
        .any(|e| matches!(e, GameEvent::EnemyDestroyed { score: 50, .. })));
}

#[test]
fn test_penetrating_damages_each_enemy_once() {
    let mut world = World::new();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut score = ScoreState::default();
    let mut events = Vec::new();
    let gunship = spawn_enemy(&mut world, &air(AirArchetype::Gunship, 240.0, 300.0), 0);
    let shot = player_projectile(
        ShotSource::Sub(SubWeaponType::Crusher),
        ProjectileKind::Penetrating,
        2.0,
        5.0,
        0,
        ProjectileMotion::Linear,
    );
    spawn_projectile(&mut world, Position::new(240.0, 300.0), Velocity::default(), shot);

    let player = Player::new(3);
    collision::run(&mut world, &player, 1, &mut rng, &mut score, &mut events);
    collision::run(&mut world, &player, 1, &mut rng, &mut score, &mut events);
    assert_eq!(enemy(&world, gunship).hit_points, 6.0);
    assert!(!projectiles(&world)[0].2.spent, "Penetrating shots fly on");
}

#[test]
fn test_vibrator_deflects_off_boss() {
    let mut world = World::new();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut score = ScoreState::default();
    let mut events = Vec::new();
    let boss = spawn_enemy(
        &mut world,
        &SpawnOrder::Boss {
            archetype: BossArchetype::Hydra,
            area: 2,
        },
        0,
    );
    let boss_pos = *world.get::<&Position>(boss).unwrap();
    let hp = enemy(&world, boss).hit_points;
    let shot = player_projectile(
        ShotSource::Sub(SubWeaponType::Vibrator),
        ProjectileKind::Vibrating,
        1.0,
        VIBRATOR_RADIUS,
        0,
        ProjectileMotion::Vibrating {
            phase: VibratePhase::Oscillating,
            anchor_x: boss_pos.x,
            traveled: 200.0,
            ticks: 0,
            amplitude: 30.0,
            angular_speed: 0.15,
            durability: 6.0,
            max_durability: 6.0,
        },
    );
    spawn_projectile(&mut world, boss_pos, Velocity::default(), shot);

    collision::run(&mut world, &Player::new(3), 2, &mut rng, &mut score, &mut events);
    let (_, vel, proj) = projectiles(&world).remove(0);
    assert!(matches!(
        proj.motion,
        ProjectileMotion::Vibrating {
            phase: VibratePhase::Deflected,
            ..
        }
    ));
    assert!((vel.speed() - DEFLECT_SPEED).abs() < 1e-9);
    assert!(enemy(&world, boss).deflecting);
    assert_eq!(enemy(&world, boss).hit_points, hp, "Deflection deals no damage");
}

#[test]
fn test_player_hit_by_bullet() {
    let mut world = World::new();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut score = ScoreState::default();
    let mut events = Vec::new();
    spawn_enemy_bullet(&mut world, player_pos(), Velocity::default(), ProjectileKind::Normal);

    let mut player = Player::new(3);
    player.grant_invulnerability(10);
    let outcome = collision::run(&mut world, &player, 1, &mut rng, &mut score, &mut events);
    assert!(!outcome.player_hit, "Invulnerable players cannot be hit");

    player.invulnerable_ticks = 0;
    let outcome = collision::run(&mut world, &player, 1, &mut rng, &mut score, &mut events);
    assert!(outcome.player_hit);
    assert!(projectiles(&world)[0].2.spent, "The bullet that lands is consumed");
}

#[test]
fn test_ground_enemy_does_not_ram_player() {
    let mut world = World::new();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut score = ScoreState::default();
    let mut events = Vec::new();
    spawn_enemy(
        &mut world,
        &SpawnOrder::Ground {
            archetype: GroundArchetype::Turret,
            x: PLAYER_START_X,
            y: PLAYER_STANDING_Y,
            drop: None,
        },
        0,
    );
    let outcome = collision::run(&mut world, &Player::new(3), 1, &mut rng, &mut score, &mut events);
    assert!(!outcome.player_hit);

    spawn_enemy(&mut world, &air(AirArchetype::Drone, PLAYER_START_X, PLAYER_STANDING_Y), 1);
    let outcome = collision::run(&mut world, &Player::new(3), 1, &mut rng, &mut score, &mut events);
    assert!(outcome.player_hit, "Air bodies do hit the player");
}

#[test]
fn test_support_base_drops_its_sub_weapon() {
    let mut world = World::new();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut score = ScoreState::default();
    let mut events = Vec::new();
    let base = spawn_enemy(
        &mut world,
        &SpawnOrder::Ground {
            archetype: GroundArchetype::SupportBase,
            x: 100.0,
            y: 200.0,
            drop: Some(PickupKind::SubWeapon(SubWeaponType::Plasma)),
        },
        0,
    );
    if let Ok(mut e) = world.get::<&mut Enemy>(base) {
        e.hit_points = 0.0;
    }

    collision::run(&mut world, &Player::new(3), 1, &mut rng, &mut score, &mut events);
    let mut query = world.query::<&Pickup>();
    let drops: Vec<PickupKind> = query.iter().map(|(_, p)| p.kind).collect();
    assert_eq!(drops, vec![PickupKind::SubWeapon(SubWeaponType::Plasma)]);
}

#[test]
fn test_pickup_collected_in_reach() {
    let mut world = World::new();
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let mut score = ScoreState::default();
    let mut events = Vec::new();
    let near = Position::new(PLAYER_START_X + 15.0, PLAYER_STANDING_Y);
    spawn_pickup(&mut world, near, PickupKind::Power);
    spawn_pickup(&mut world, Position::new(20.0, 20.0), PickupKind::Power);

    let outcome = collision::run(&mut world, &Player::new(3), 1, &mut rng, &mut score, &mut events);
    assert_eq!(outcome.collected, vec![PickupKind::Power]);
    assert_eq!(world.query::<&Pickup>().iter().count(), 1);
}

// ---- Cleanup ----

#[test]
fn test_cleanup_prunes_offscreen_and_spent() {
    let mut world = World::new();
    let mut buffer = Vec::new();
    spawn_projectile(&mut world, Position::new(240.0, -30.0), Velocity::default(), normal_shot(1.0));
    spawn_projectile(&mut world, Position::new(240.0, 300.0), Velocity::default(), normal_shot(1.0));
    let mut spent = normal_shot(1.0);
    spent.spent = true;
    spawn_projectile(&mut world, Position::new(240.0, 300.0), Velocity::default(), spent);
    // Entering enemies above the field are kept.
    spawn_enemy(&mut world, &air(AirArchetype::Drone, 240.0, -200.0), 0);

    cleanup::run(&mut world, &mut buffer);
    assert_eq!(projectiles(&world).len(), 1);
    assert_eq!(world.query::<&Enemy>().iter().count(), 1);
}

// ---- Engine outcomes ----

#[test]
fn test_player_hit_costs_life_and_resets_weapons() {
    let mut engine = engine();
    engine.give_sub_weapon(SubWeaponType::Crusher);
    engine.weapons_mut().set_main_level(4);
    spawn_enemy_bullet(engine.world_mut(), player_pos(), Velocity::default(), ProjectileKind::Normal);

    let snap = engine.tick(&InputFrame::idle());
    assert_eq!(snap.player.lives, DEFAULT_LIVES - 1);
    assert_eq!(snap.player.status, PlayerStatus::Respawning);
    assert_eq!(snap.weapon.main_level, 0);
    assert_eq!(snap.weapon.sub_type, SubWeaponType::AllRange);
    assert!(snap.events.contains(&GameEvent::PlayerHit {
        lives_left: DEFAULT_LIVES - 1
    }));
}

#[test]
fn test_last_life_ends_the_game() {
    let mut engine = SimulationEngine::new(SimConfig {
        starting_lives: 1,
        ..Default::default()
    });
    spawn_enemy_bullet(engine.world_mut(), player_pos(), Velocity::default(), ProjectileKind::Normal);

    let snap = engine.tick(&InputFrame::idle());
    assert_eq!(snap.phase, GamePhase::GameOver);
    assert!(snap.events.contains(&GameEvent::GameOver));

    let tick = engine.time().tick;
    for _ in 0..10 {
        engine.tick(&InputFrame::firing());
    }
    assert_eq!(engine.time().tick, tick, "Game over is terminal");
}

#[test]
fn test_power_pickup_grants_invulnerability() {
    let mut engine = engine();
    spawn_pickup(engine.world_mut(), player_pos(), PickupKind::Power);

    let snap = engine.tick(&InputFrame::idle());
    assert_eq!(snap.weapon.main_level, 1);
    assert_eq!(snap.player.invulnerable_ticks, POWER_PICKUP_INVULN_TICKS);
    assert!(snap.events.contains(&GameEvent::PickupCollected {
        kind: PickupKind::Power
    }));
}

#[test]
fn test_snapshot_exposes_barrier_and_orbs() {
    let mut engine = engine();
    engine.give_sub_weapon(SubWeaponType::Barrier);
    let snap = engine.tick(&InputFrame::idle());
    let barrier = snap.weapon.barrier.expect("barrier view");
    assert_eq!(barrier.segments, BARRIER_ARCS[0].2);
    assert_eq!(snap.weapon.ammo, -1);

    engine.give_sub_weapon(SubWeaponType::Circular);
    let snap = engine.tick(&InputFrame {
        sub_fire: true,
        ..InputFrame::idle()
    });
    assert!(snap.weapon.barrier.is_none());
    assert_eq!(snap.weapon.orbs.len(), ROTATING_NODE_COUNT[0] as usize);
}
