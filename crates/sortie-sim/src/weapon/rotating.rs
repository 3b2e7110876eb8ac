//! Circular sub-weapon: nodes orbiting the player.

use std::f64::consts::TAU;

use hecs::World;
use serde::{Deserialize, Serialize};

use sortie_core::components::{Enemy, Projectile};
use sortie_core::constants::*;
use sortie_core::enums::{Owner, ProjectileKind};
use sortie_core::types::Position;

use crate::geometry::{circles_overlap, polar_offset};
use crate::projectile::enemy_hit_radius;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rotating {
    pub level: u32,
    /// Orbit phase in radians.
    pub angle: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RotatingOutcome {
    /// Where a node touched a boss; the weapon is spent.
    pub deflected_at: Option<Position>,
}

impl Rotating {
    pub fn new(level: u32) -> Self {
        Self { level, angle: 0.0 }
    }

    fn index(&self) -> usize {
        self.level.min(SUB_LEVEL_MAX) as usize
    }

    /// Current node centers, evenly spaced around the orbit.
    pub fn node_positions(&self, center: &Position) -> Vec<Position> {
        let count = ROTATING_NODE_COUNT[self.index()];
        let radius = ROTATING_ORBIT_RADIUS[self.index()];
        (0..count)
            .map(|i| polar_offset(center, self.angle + TAU * i as f64 / count as f64, radius))
            .collect()
    }

    fn touches(&self, nodes: &[Position], point: &Position, radius: f64) -> bool {
        nodes
            .iter()
            .any(|node| circles_overlap(node, ROTATING_NODE_RADIUS, point, radius))
    }
}

/// Spin the orbit one step and resolve node contact.
pub fn run(rotating: &mut Rotating, world: &mut World, center: &Position) -> RotatingOutcome {
    rotating.angle = (rotating.angle + ROTATING_ANGULAR_SPEED[rotating.index()]).rem_euclid(TAU);
    let nodes = rotating.node_positions(center);

    // Bosses first: contact deflects before anything else is touched.
    for (_entity, (pos, enemy)) in world.query_mut::<(&Position, &mut Enemy)>() {
        if enemy.destroyed || !enemy.kind.is_boss() {
            continue;
        }
        if rotating.touches(&nodes, pos, enemy_hit_radius(enemy)) {
            enemy.deflecting = true;
            return RotatingOutcome {
                deflected_at: Some(*pos),
            };
        }
    }

    for (_entity, (pos, proj)) in world.query_mut::<(&Position, &mut Projectile)>() {
        if proj.owner != Owner::Enemy || proj.spent || proj.kind == ProjectileKind::Lead {
            continue;
        }
        if rotating.touches(&nodes, pos, proj.radius) {
            proj.hit_points = 0.0;
            proj.spent = true;
        }
    }

    for (_entity, (pos, enemy)) in world.query_mut::<(&Position, &mut Enemy)>() {
        if enemy.destroyed || enemy.kind.is_boss() {
            continue;
        }
        if rotating.touches(&nodes, pos, enemy_hit_radius(enemy)) {
            enemy.hit_points = (enemy.hit_points - ROTATING_DAMAGE).max(0.0);
        }
    }

    RotatingOutcome::default()
}
