//! Entity spawn factories.
//!
//! Every family is spawned with its one fixed bundle so each lives in a
//! single hecs archetype and iterates in spawn order.

use hecs::{Entity, World};

use sortie_core::components::*;
use sortie_core::constants::*;
use sortie_core::enums::*;
use sortie_core::types::{Position, Velocity};

use sortie_director::SpawnOrder;
use sortie_enemy_ai::profiles::{
    air_profile, boss_pattern_for_volley, boss_profile, ground_profile,
};

/// Materialize a director spawn order. `serial` must be unique per run.
pub fn spawn_enemy(world: &mut World, order: &SpawnOrder, serial: u32) -> Entity {
    let (kind, position, drop, profile) = match *order {
        SpawnOrder::Air {
            archetype,
            x,
            y,
            drop,
        } => (
            EnemyKind::Air(archetype),
            Position::new(x, y),
            drop,
            air_profile(archetype),
        ),
        SpawnOrder::Ground {
            archetype,
            x,
            y,
            drop,
        } => (
            EnemyKind::Ground(archetype),
            Position::new(x, y),
            drop,
            ground_profile(archetype),
        ),
        SpawnOrder::Boss { archetype, area } => (
            EnemyKind::Boss(archetype),
            Position::new(FIELD_WIDTH / 2.0, BOSS_SPAWN_Y),
            None,
            boss_profile(archetype, area),
        ),
    };

    let first_volley = match kind {
        EnemyKind::Boss(boss) => boss_pattern_for_volley(boss, 0).interval,
        _ => profile.fire.map(|f| f.interval / 2).unwrap_or(0),
    };

    let enemy = Enemy {
        serial,
        kind,
        hit_points: profile.hit_points,
        max_hit_points: profile.hit_points,
        radius: profile.radius,
        hit_radius: profile.hit_radius,
        phase: EnemyPhase::Entering,
        phase_ticks: 0,
        age: 0,
        anchor_x: position.x,
        fire_timer: first_volley,
        volleys: 0,
        drop,
        deflecting: false,
        destroyed: false,
    };
    world.spawn((position, Velocity::default(), enemy))
}

/// Spawn an enemy bullet with the hit-points of its tier.
pub fn spawn_enemy_bullet(
    world: &mut World,
    position: Position,
    velocity: Velocity,
    kind: ProjectileKind,
) -> Entity {
    let hit_points = kind.enemy_hit_points();
    let radius = if kind == ProjectileKind::Lead {
        LEAD_BULLET_RADIUS
    } else {
        ENEMY_BULLET_RADIUS
    };
    let projectile = Projectile {
        owner: Owner::Enemy,
        source: ShotSource::Enemy,
        kind,
        damage: 1.0,
        radius,
        hit_radius: None,
        hit_points,
        max_hit_points: hit_points,
        level: 0,
        motion: ProjectileMotion::Linear,
        struck: Vec::new(),
        spent: false,
    };
    world.spawn((position, velocity, projectile))
}

/// Build a player-owned projectile component.
pub fn player_projectile(
    source: ShotSource,
    kind: ProjectileKind,
    damage: f64,
    radius: f64,
    level: u32,
    motion: ProjectileMotion,
) -> Projectile {
    Projectile {
        owner: Owner::Player,
        source,
        kind,
        damage,
        radius,
        hit_radius: None,
        hit_points: 0.0,
        max_hit_points: 0.0,
        level,
        motion,
        struck: Vec::new(),
        spent: false,
    }
}

pub fn spawn_projectile(
    world: &mut World,
    position: Position,
    velocity: Velocity,
    projectile: Projectile,
) -> Entity {
    world.spawn((position, velocity, projectile))
}

/// Drop an item that drifts down the field.
pub fn spawn_pickup(world: &mut World, position: Position, kind: PickupKind) -> Entity {
    world.spawn((
        position,
        Velocity::new(0.0, PICKUP_FALL_SPEED),
        Pickup {
            kind,
            radius: PICKUP_RADIUS,
        },
    ))
}
