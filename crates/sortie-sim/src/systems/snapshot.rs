//! Snapshot system: queries the ECS world and the engine's controllers and
//! builds a complete GameStateSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use sortie_core::components::*;
use sortie_core::enums::GamePhase;
use sortie_core::events::GameEvent;
use sortie_core::state::*;
use sortie_core::types::{Position, SimTime, Velocity};

use sortie_director::{AreaProgressionController, DifficultyController};

use crate::player::Player;
use crate::score::ScoreState;
use crate::weapon::WeaponController;

/// Everything outside the world the snapshot reads from.
pub struct SnapshotSources<'a> {
    pub time: &'a SimTime,
    pub phase: GamePhase,
    pub player: &'a Player,
    pub weapons: &'a WeaponController,
    pub area: &'a AreaProgressionController,
    pub difficulty: &'a DifficultyController,
    pub score: &'a ScoreState,
}

pub fn build_snapshot(
    world: &World,
    sources: &SnapshotSources<'_>,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *sources.time,
        phase: sources.phase,
        score: sources.score.score,
        player: build_player(sources.player),
        weapon: build_weapon(sources.weapons, &sources.player.position),
        area: build_area(sources.area),
        difficulty: sources.difficulty.level(),
        projectiles: build_projectiles(world),
        enemies: build_enemies(world),
        pickups: build_pickups(world),
        events,
    }
}

fn build_player(player: &Player) -> PlayerView {
    PlayerView {
        position: player.position,
        status: player.status,
        lives: player.lives,
        invulnerable_ticks: player.invulnerable_ticks,
    }
}

fn build_weapon(weapons: &WeaponController, center: &Position) -> WeaponView {
    WeaponView {
        main_level: weapons.main_level(),
        sub_type: weapons.sub_type(),
        sub_level: weapons.sub_level(),
        ammo: weapons.ammo(),
        duration_frames: weapons.duration_frames(),
        durability: weapons.durability(),
        barrier: weapons.barrier().map(|barrier| barrier.view(*center)),
        orbs: weapons
            .rotating()
            .map(|rotating| rotating.node_positions(center))
            .unwrap_or_default(),
    }
}

fn build_area(area: &AreaProgressionController) -> AreaView {
    AreaView {
        area: area.area(),
        state: area.state(),
        boss_phase: area.boss_phase(),
        intro_phase: area.intro_phase(),
        progress: area.progress(),
        length: area.length(),
        scroll_speed: area.scroll_speed(),
    }
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut query = world.query::<(&Position, &Velocity, &Projectile)>();
    query
        .iter()
        .filter(|(_, (_, _, proj))| !proj.spent)
        .map(|(_, (pos, vel, proj))| ProjectileView {
            position: *pos,
            velocity: *vel,
            owner: proj.owner,
            kind: proj.kind,
            radius: crate::projectile::hit_radius(proj),
            hit_points: proj.hit_points,
            max_hit_points: proj.max_hit_points,
            length: match proj.motion {
                ProjectileMotion::Laser { length } => length,
                _ => 0.0,
            },
        })
        .collect()
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut query = world.query::<(&Position, &Enemy)>();
    query
        .iter()
        .filter(|(_, (_, enemy))| !enemy.destroyed)
        .map(|(_, (pos, enemy))| EnemyView {
            serial: enemy.serial,
            kind: enemy.kind,
            position: *pos,
            radius: enemy.radius,
            hit_points: enemy.hit_points,
            max_hit_points: enemy.max_hit_points,
        })
        .collect()
}

fn build_pickups(world: &World) -> Vec<PickupView> {
    let mut query = world.query::<(&Position, &Pickup)>();
    query
        .iter()
        .map(|(_, (pos, pickup))| PickupView {
            kind: pickup.kind,
            position: *pos,
        })
        .collect()
}
