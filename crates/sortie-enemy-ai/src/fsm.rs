//! Enemy movement finite state machine.
//!
//! Pure functions that compute phase transitions and velocities for enemy
//! entities from their archetype, current phase and situation.
//! No ECS dependency; operates on plain data.

use sortie_core::constants::*;
use sortie_core::enums::{EnemyKind, EnemyPhase};
use sortie_core::types::{Position, Velocity};

use crate::profiles::{get_profile, EnemyProfile, Movement};

/// Input to the enemy FSM for a single entity.
pub struct EnemyContext {
    pub kind: EnemyKind,
    pub area: u8,
    pub phase: EnemyPhase,
    pub phase_ticks: u32,
    pub age: u32,
    pub position: Position,
    pub velocity: Velocity,
    pub anchor_x: f64,
    /// Authoritative scroll speed for this tick.
    pub scroll_speed: f64,
}

/// Output from the enemy FSM.
pub struct EnemyUpdate {
    pub new_phase: EnemyPhase,
    pub new_velocity: Velocity,
    pub phase_changed: bool,
}

/// Evaluate the FSM for one enemy. Returns the updated phase and velocity.
pub fn evaluate(ctx: &EnemyContext) -> EnemyUpdate {
    let profile = get_profile(ctx.kind, ctx.area);

    match profile.movement {
        Movement::Dive => evaluate_dive(ctx, &profile),
        Movement::Weave { amplitude, rate } => evaluate_weave(ctx, &profile, amplitude, rate),
        Movement::Sweep => evaluate_sweep(ctx, &profile),
        Movement::Hover { dwell } => evaluate_hover(ctx, &profile, dwell),
        Movement::Ground => evaluate_ground(ctx),
        Movement::Boss => evaluate_boss(ctx, &profile),
    }
}

fn transition(ctx: &EnemyContext, new_phase: EnemyPhase, new_velocity: Velocity) -> EnemyUpdate {
    EnemyUpdate {
        new_phase,
        new_velocity,
        phase_changed: new_phase != ctx.phase,
    }
}

/// Entering ends once the entity is inside the top edge.
fn entered_phase(ctx: &EnemyContext) -> EnemyPhase {
    if ctx.phase == EnemyPhase::Entering && ctx.position.y >= 0.0 {
        EnemyPhase::Active
    } else {
        ctx.phase
    }
}

fn evaluate_dive(ctx: &EnemyContext, profile: &EnemyProfile) -> EnemyUpdate {
    transition(ctx, entered_phase(ctx), Velocity::new(0.0, profile.speed))
}

fn evaluate_weave(
    ctx: &EnemyContext,
    profile: &EnemyProfile,
    amplitude: f64,
    rate: f64,
) -> EnemyUpdate {
    // Derivative of anchor_x + amplitude * sin(rate * age).
    let vx = amplitude * rate * (rate * ctx.age as f64).cos();
    transition(ctx, entered_phase(ctx), Velocity::new(vx, profile.speed))
}

fn evaluate_sweep(ctx: &EnemyContext, profile: &EnemyProfile) -> EnemyUpdate {
    let direction = if ctx.anchor_x < FIELD_WIDTH / 2.0 { 1.0 } else { -1.0 };
    let velocity = Velocity::new(direction * profile.speed * 0.6, profile.speed * 0.8);
    transition(ctx, entered_phase(ctx), velocity)
}

fn evaluate_hover(ctx: &EnemyContext, profile: &EnemyProfile, dwell: u32) -> EnemyUpdate {
    match ctx.phase {
        EnemyPhase::Entering => {
            if ctx.position.y >= HOVER_LINE_Y {
                transition(ctx, EnemyPhase::Active, Velocity::default())
            } else {
                transition(ctx, EnemyPhase::Entering, Velocity::new(0.0, profile.speed))
            }
        }
        EnemyPhase::Active => {
            if ctx.phase_ticks >= dwell {
                transition(ctx, EnemyPhase::Leaving, Velocity::new(0.0, -profile.speed))
            } else {
                transition(ctx, EnemyPhase::Active, Velocity::default())
            }
        }
        EnemyPhase::Leaving => {
            transition(ctx, EnemyPhase::Leaving, Velocity::new(0.0, -profile.speed))
        }
    }
}

fn evaluate_ground(ctx: &EnemyContext) -> EnemyUpdate {
    transition(ctx, entered_phase(ctx), Velocity::new(0.0, ctx.scroll_speed))
}

fn evaluate_boss(ctx: &EnemyContext, profile: &EnemyProfile) -> EnemyUpdate {
    match ctx.phase {
        EnemyPhase::Entering => {
            if ctx.position.y >= BOSS_ARENA_Y {
                transition(ctx, EnemyPhase::Active, Velocity::default())
            } else {
                transition(ctx, EnemyPhase::Entering, Velocity::new(0.0, profile.speed))
            }
        }
        // Bosses never leave; sway around the arena center.
        EnemyPhase::Active | EnemyPhase::Leaving => {
            let t = ctx.phase_ticks as f64;
            let vx = BOSS_SWAY_AMPLITUDE * BOSS_SWAY_RATE * (BOSS_SWAY_RATE * t).cos();
            transition(ctx, EnemyPhase::Active, Velocity::new(vx, 0.0))
        }
    }
}
