//! Enemy volley geometry.

use glam::DVec2;
use sortie_core::constants::*;
use sortie_core::enums::EnemyPhase;
use sortie_core::types::{Position, Velocity};

use crate::profiles::FirePattern;

/// Enemies shoot only while fully on screen and not hugging the bottom edge.
pub fn can_fire(phase: EnemyPhase, position: &Position) -> bool {
    phase != EnemyPhase::Entering
        && position.y >= 0.0
        && position.y <= FIELD_HEIGHT - ENEMY_FIRE_BOTTOM_CUTOFF
        && (0.0..=FIELD_WIDTH).contains(&position.x)
}

/// Bullet velocities for one volley fired from `origin` at `target`.
pub fn volley(pattern: FirePattern, origin: &Position, target: &Position, speed: f64) -> Vec<Velocity> {
    let aim = aim_angle(origin, target);

    match pattern {
        FirePattern::Aimed => vec![polar(aim, speed)],
        FirePattern::Spread { count, spread_deg } => {
            if count <= 1 {
                return vec![polar(aim, speed)];
            }
            let spread = spread_deg.to_radians();
            let step = spread / (count - 1) as f64;
            (0..count)
                .map(|i| polar(aim - spread / 2.0 + step * i as f64, speed))
                .collect()
        }
        FirePattern::Ring { count } => {
            let step = std::f64::consts::TAU / count.max(1) as f64;
            (0..count).map(|i| polar(aim + step * i as f64, speed)).collect()
        }
    }
}

/// Angle from `origin` to `target` in radians; straight down when they coincide.
fn aim_angle(origin: &Position, target: &Position) -> f64 {
    let delta = target.to_vec() - origin.to_vec();
    if delta.length_squared() < 1e-12 {
        std::f64::consts::FRAC_PI_2
    } else {
        delta.y.atan2(delta.x)
    }
}

fn polar(angle: f64, speed: f64) -> Velocity {
    Velocity::from_vec(DVec2::from_angle(angle) * speed)
}
