//! Pacing controllers for SORTIE.
//!
//! The area timeline, the adaptive difficulty loop and the spawn queue.
//! Plain data in, spawn orders and events out; no ECS dependency.

pub mod area;
pub mod areas;
pub mod difficulty;
pub mod schedule;

pub use area::{AreaProgressionController, AreaUpdate};
pub use difficulty::{CombatTelemetry, DifficultyController};
pub use schedule::{SpawnOrder, SpawnQueue};
