//! Projectile system: per-kind advance, then instant plasma detonation.

use hecs::{Entity, World};

use sortie_core::components::{Projectile, ProjectileMotion};
use sortie_core::events::GameEvent;
use sortie_core::types::{Position, Velocity};

use crate::projectile::{advance, detonate_plasma};

/// Advance every live projectile. `player` anchors returning boomerangs.
pub fn run(world: &mut World, player: &Position, events: &mut Vec<GameEvent>) {
    let mut instant: Vec<Entity> = Vec::new();

    for (entity, (pos, vel, proj)) in
        world.query_mut::<(&mut Position, &mut Velocity, &mut Projectile)>()
    {
        if proj.spent {
            continue;
        }
        advance(pos, vel, proj, player);

        if let ProjectileMotion::Plasma {
            instant: true,
            has_triggered: false,
        } = proj.motion
        {
            instant.push(entity);
        }
    }

    // High-level plasma goes off on its spawn tick without travelling.
    for entity in instant {
        detonate_plasma(world, entity, events);
    }
}
