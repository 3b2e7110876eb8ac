//! Core types and definitions for the SORTIE simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, input frames, state snapshots, events, configuration and
//! constants. It has no dependency on any ECS runtime or presentation layer.

pub mod commands;
pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
