//! Enemy AI for SORTIE.
//!
//! Implements enemy movement state machines, volley geometry
//! and archetype-driven combat profiles.

pub mod fire;
pub mod fsm;
pub mod profiles;

pub use sortie_core as core;
