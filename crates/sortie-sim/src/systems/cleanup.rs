//! Cleanup system: removes spent, destroyed and offscreen entities.
//!
//! Runs after collision so a shot that both hits and leaves the field in
//! the same tick still lands.

use hecs::{Entity, World};

use sortie_core::components::{Enemy, Pickup, Projectile};
use sortie_core::constants::*;
use sortie_core::enums::EnemyPhase;
use sortie_core::types::Position;

use crate::projectile::{is_offscreen, is_spent};

/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (pos, proj)) in world.query_mut::<(&Position, &Projectile)>() {
        if is_spent(proj) || is_offscreen(pos, proj.kind) {
            despawn_buffer.push(entity);
        }
    }

    for (entity, (pos, enemy)) in world.query_mut::<(&Position, &Enemy)>() {
        if enemy.destroyed || enemy_gone(pos, enemy.phase) {
            despawn_buffer.push(entity);
        }
    }

    for (entity, (pos, _pickup)) in world.query_mut::<(&Position, &Pickup)>() {
        if pos.y > FIELD_HEIGHT + OFFSCREEN_MARGIN_DEFAULT {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

/// Enemies spawn above the field, so the top edge only culls those leaving.
fn enemy_gone(pos: &Position, phase: EnemyPhase) -> bool {
    let margin = ENEMY_OFFSCREEN_MARGIN;
    pos.x < -margin
        || pos.x > FIELD_WIDTH + margin
        || pos.y > FIELD_HEIGHT + margin
        || (phase == EnemyPhase::Leaving && pos.y < -margin)
}
