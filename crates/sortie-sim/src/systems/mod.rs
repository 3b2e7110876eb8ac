//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are free functions that take `&mut World` (or `&World` for
//! read-only). Controller state lives in the engine and is passed in.

pub mod cleanup;
pub mod collision;
pub mod enemies;
pub mod pickups;
pub mod projectiles;
pub mod snapshot;
