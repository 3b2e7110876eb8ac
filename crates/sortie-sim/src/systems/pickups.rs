//! Pickup drift.

use hecs::World;

use sortie_core::components::Pickup;
use sortie_core::types::{Position, Velocity};

pub fn run(world: &mut World) {
    for (_entity, (pos, vel, _pickup)) in world.query_mut::<(&mut Position, &Velocity, &Pickup)>() {
        pos.step(vel);
    }
}
