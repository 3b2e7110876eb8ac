//! Per-kind projectile behavior: advance, spent/offscreen predicates and
//! hit tests, dispatched on the projectile's motion payload.

use hecs::{Entity, World};

use sortie_core::components::{Enemy, Projectile, ProjectileMotion};
use sortie_core::constants::*;
use sortie_core::enums::*;
use sortie_core::events::GameEvent;
use sortie_core::types::{Position, Velocity};

use crate::geometry::{circles_overlap, lerp, segment_distance};

/// Advance one tick. `player` is the owner's position, used by returning
/// boomerangs.
pub fn advance(pos: &mut Position, vel: &mut Velocity, proj: &mut Projectile, player: &Position) {
    match &mut proj.motion {
        ProjectileMotion::Linear | ProjectileMotion::Laser { .. } => pos.step(vel),
        ProjectileMotion::Vibrating {
            phase,
            anchor_x,
            traveled,
            ticks,
            amplitude,
            angular_speed,
            durability,
            ..
        } => {
            match phase {
                VibratePhase::Advancing => {
                    pos.step(vel);
                    *traveled += vel.speed();
                    if *traveled >= VIBRATOR_ADVANCE_DISTANCE {
                        *phase = VibratePhase::Oscillating;
                        *anchor_x = pos.x;
                        *ticks = 0;
                    }
                }
                VibratePhase::Oscillating => {
                    *ticks += 1;
                    let t = *ticks as f64;
                    let x = *anchor_x + *amplitude * (*angular_speed * t).sin();
                    *vel = Velocity::new(x - pos.x, -VIBRATOR_DRIFT_SPEED);
                    pos.x = x;
                    pos.y -= VIBRATOR_DRIFT_SPEED;
                }
                VibratePhase::Deflected => pos.step(vel),
            }
            if *durability <= 0.0 {
                proj.spent = true;
            }
        }
        ProjectileMotion::Boomerang {
            phase,
            traveled,
            max_range,
            base_speed,
            returns_left,
        } => match phase {
            BoomerangPhase::Forward => {
                let factor = lerp(1.0, BOOMERANG_MIN_SPEED_FACTOR, *traveled / *max_range);
                let speed = *base_speed * factor;
                *vel = Velocity::new(0.0, -speed);
                pos.step(vel);
                *traveled += speed;
                if *traveled >= *max_range {
                    *phase = BoomerangPhase::Returning;
                    proj.struck.clear();
                }
            }
            BoomerangPhase::Returning => {
                let to_player = player.to_vec() - pos.to_vec();
                let distance = to_player.length();
                if distance <= BOOMERANG_CATCH_RADIUS {
                    if *returns_left > 0 {
                        *returns_left -= 1;
                        *phase = BoomerangPhase::Forward;
                        *traveled = 0.0;
                        *pos = *player;
                        *vel = Velocity::new(0.0, -*base_speed);
                        proj.struck.clear();
                    } else {
                        proj.spent = true;
                    }
                    return;
                }
                let factor = if distance >= BOOMERANG_RETURN_THRESHOLD {
                    BOOMERANG_RETURN_SLOW_FACTOR
                } else {
                    lerp(
                        BOOMERANG_RETURN_FAST_FACTOR,
                        BOOMERANG_RETURN_SLOW_FACTOR,
                        distance / BOOMERANG_RETURN_THRESHOLD,
                    )
                };
                let step = (*base_speed * factor).min(distance);
                *vel = Velocity::from_vec(to_player / distance * step);
                pos.step(vel);
            }
            BoomerangPhase::Deflected => pos.step(vel),
        },
        ProjectileMotion::Plasma { has_triggered, .. } => {
            if !*has_triggered {
                pos.step(vel);
            }
        }
    }
}

/// Past the field edge by more than the kind's margin.
pub fn is_offscreen(pos: &Position, kind: ProjectileKind) -> bool {
    let margin = kind.offscreen_margin();
    pos.x < -margin
        || pos.x > FIELD_WIDTH + margin
        || pos.y < -margin
        || pos.y > FIELD_HEIGHT + margin
}

/// Marked for removal by a collision or by its own behavior.
pub fn is_spent(proj: &Projectile) -> bool {
    proj.spent
}

/// Effective collision radius. Vibrating shots shrink with wear.
pub fn hit_radius(proj: &Projectile) -> f64 {
    let base = proj.hit_radius.unwrap_or(proj.radius);
    match proj.motion {
        ProjectileMotion::Vibrating {
            durability,
            max_durability,
            ..
        } if max_durability > 0.0 => {
            base * (durability / max_durability).max(VIBRATOR_MIN_SIZE_RATIO)
        }
        _ => base,
    }
}

/// Collision radius of an enemy body.
pub fn enemy_hit_radius(enemy: &Enemy) -> f64 {
    enemy.hit_radius.unwrap_or(enemy.radius)
}

/// Circle test against a target; lasers test along their full length.
pub fn collides_with(
    pos: &Position,
    vel: &Velocity,
    proj: &Projectile,
    target: &Position,
    target_radius: f64,
) -> bool {
    match proj.motion {
        ProjectileMotion::Laser { length } => {
            let tail = laser_tail(pos, vel, length);
            segment_distance(target, pos, &tail) <= hit_radius(proj) + target_radius
        }
        _ => circles_overlap(pos, hit_radius(proj), target, target_radius),
    }
}

/// Trailing end of a laser whose head is at `head`.
pub fn laser_tail(head: &Position, vel: &Velocity, length: f64) -> Position {
    let dir = vel.to_vec().try_normalize().unwrap_or(glam::DVec2::new(0.0, -1.0));
    Position::from_vec(head.to_vec() - dir * length)
}

/// Whether the shot is a live, deflectable sub-weapon body.
pub fn is_deflectable(proj: &Projectile) -> bool {
    matches!(
        proj.motion,
        ProjectileMotion::Vibrating {
            phase: VibratePhase::Advancing | VibratePhase::Oscillating,
            ..
        } | ProjectileMotion::Boomerang {
            phase: BoomerangPhase::Forward | BoomerangPhase::Returning,
            ..
        }
    )
}

/// Switch a vibrating/boomerang shot to its harmless deflected state.
pub fn deflect(proj: &mut Projectile) {
    match &mut proj.motion {
        ProjectileMotion::Vibrating { phase, .. } => *phase = VibratePhase::Deflected,
        ProjectileMotion::Boomerang { phase, .. } => *phase = BoomerangPhase::Deflected,
        _ => {}
    }
}

/// Whether a plasma shot is armed for contact detonation.
pub fn is_armed_plasma(proj: &Projectile) -> bool {
    matches!(
        proj.motion,
        ProjectileMotion::Plasma {
            has_triggered: false,
            ..
        }
    ) && !proj.spent
}

/// Detonate a plasma shot: clear every enemy projectile and apply the area
/// damage to non-boss enemies. Returns false if `entity` is not an armed
/// plasma; a plasma detonates at most once.
pub fn detonate_plasma(world: &mut World, entity: Entity, events: &mut Vec<GameEvent>) -> bool {
    let (origin, level) = {
        let Ok(mut query) = world.query_one::<(&Position, &mut Projectile)>(entity) else {
            return false;
        };
        let Some((pos, proj)) = query.get() else {
            return false;
        };
        match &mut proj.motion {
            ProjectileMotion::Plasma { has_triggered, .. } if !*has_triggered => {
                *has_triggered = true;
            }
            _ => return false,
        }
        proj.spent = true;
        (*pos, proj.level)
    };

    let mut bullets_cleared = 0;
    for (_entity, proj) in world.query_mut::<&mut Projectile>() {
        if proj.owner == Owner::Enemy && !proj.spent {
            proj.hit_points = 0.0;
            proj.spent = true;
            bullets_cleared += 1;
        }
    }

    let mut enemies_hit = 0;
    for (_entity, enemy) in world.query_mut::<&mut Enemy>() {
        if enemy.destroyed || enemy.hit_points <= 0.0 {
            continue;
        }
        let affected = match enemy.kind {
            EnemyKind::Air(_) => true,
            EnemyKind::Ground(_) => level >= PLASMA_GROUND_LEVEL,
            EnemyKind::Boss(_) => false,
        };
        if affected {
            enemy.hit_points = (enemy.hit_points - PLASMA_AOE_DAMAGE).max(0.0);
            enemies_hit += 1;
        }
    }

    log::debug!(
        "plasma detonated at ({:.0}, {:.0}): {} bullets, {} enemies",
        origin.x,
        origin.y,
        bullets_cleared,
        enemies_hit
    );
    events.push(GameEvent::PlasmaDetonated {
        x: origin.x,
        y: origin.y,
        bullets_cleared,
        enemies_hit,
    });
    true
}
