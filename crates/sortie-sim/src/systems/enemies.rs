//! Enemy system: movement FSM and volleys.
//!
//! Calls the FSM from sortie-enemy-ai, integrates positions, then spawns the
//! bullets of every enemy whose fire timer elapsed.

use hecs::World;

use sortie_core::components::Enemy;
use sortie_core::enums::{EnemyKind, ProjectileKind};
use sortie_core::types::{Position, Velocity};

use sortie_enemy_ai::fire::{can_fire, volley};
use sortie_enemy_ai::fsm::{evaluate, EnemyContext};
use sortie_enemy_ai::profiles::{boss_pattern_for_volley, get_profile};

use crate::world_setup::spawn_enemy_bullet;

/// Drop last tick's boss deflection flags.
pub fn clear_deflection(world: &mut World) {
    for (_entity, enemy) in world.query_mut::<&mut Enemy>() {
        enemy.deflecting = false;
    }
}

/// Advance every live enemy one tick. `scroll_speed` is the authoritative
/// value from the area controller.
pub fn run(world: &mut World, area: u8, scroll_speed: f64, player: &Position) {
    let mut shots: Vec<(Position, Velocity, ProjectileKind)> = Vec::new();

    for (_entity, (pos, vel, enemy)) in
        world.query_mut::<(&mut Position, &mut Velocity, &mut Enemy)>()
    {
        if enemy.destroyed {
            continue;
        }

        let ctx = EnemyContext {
            kind: enemy.kind,
            area,
            phase: enemy.phase,
            phase_ticks: enemy.phase_ticks,
            age: enemy.age,
            position: *pos,
            velocity: *vel,
            anchor_x: enemy.anchor_x,
            scroll_speed,
        };
        let update = evaluate(&ctx);
        if update.phase_changed {
            enemy.phase = update.new_phase;
            enemy.phase_ticks = 0;
        } else {
            enemy.phase_ticks += 1;
        }
        enemy.age += 1;
        *vel = update.new_velocity;
        pos.step(vel);

        let fire = match enemy.kind {
            EnemyKind::Boss(boss) => Some(boss_pattern_for_volley(boss, enemy.volleys)),
            kind => get_profile(kind, area).fire,
        };
        let Some(fire) = fire else {
            continue;
        };

        enemy.fire_timer = enemy.fire_timer.saturating_sub(1);
        if enemy.fire_timer > 0 || !can_fire(enemy.phase, pos) {
            continue;
        }
        for bullet in volley(fire.pattern, pos, player, fire.speed) {
            shots.push((*pos, bullet, fire.bullet));
        }
        enemy.volleys += 1;
        enemy.fire_timer = match enemy.kind {
            EnemyKind::Boss(boss) => boss_pattern_for_volley(boss, enemy.volleys).interval,
            _ => fire.interval,
        };
    }

    for (position, velocity, kind) in shots {
        spawn_enemy_bullet(world, position, velocity, kind);
    }
}
