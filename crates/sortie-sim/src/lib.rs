//! Simulation engine for SORTIE.
//!
//! Owns the hecs ECS world, runs systems at a fixed tick rate,
//! and produces GameStateSnapshots for an external renderer.

pub mod engine;
pub mod geometry;
pub mod player;
pub mod projectile;
pub mod save;
pub mod score;
pub mod systems;
pub mod weapon;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use sortie_core as core;

#[cfg(test)]
mod tests;
