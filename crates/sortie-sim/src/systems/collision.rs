//! Collision resolution: player shots against enemy bullets and enemies,
//! enemy bodies and bullets against the player, pickups, then kills.
//!
//! Works on copies of the live entities gathered up front and written back
//! in one batch, so every test in the pass sees the same tick.

use hecs::{Entity, World};
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use sortie_core::components::{Enemy, Pickup, Projectile, ProjectileMotion};
use sortie_core::constants::*;
use sortie_core::enums::*;
use sortie_core::events::GameEvent;
use sortie_core::types::{Position, Velocity};

use sortie_enemy_ai::profiles::get_profile;

use crate::geometry::circles_overlap;
use crate::player::Player;
use crate::projectile::{
    collides_with, deflect, detonate_plasma, enemy_hit_radius, hit_radius, is_armed_plasma,
    is_deflectable,
};
use crate::score::ScoreState;
use crate::world_setup::spawn_pickup;

/// What the pass reports back to the engine.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionOutcome {
    pub kills: u32,
    pub player_hit: bool,
    pub collected: Vec<PickupKind>,
    /// A boss's hit-points reached zero this tick.
    pub boss_defeated: bool,
}

struct Shot {
    entity: Entity,
    pos: Position,
    vel: Velocity,
    proj: Projectile,
}

struct Target {
    entity: Entity,
    pos: Position,
    enemy: Enemy,
}

pub fn run(
    world: &mut World,
    player: &Player,
    area: u8,
    rng: &mut ChaCha8Rng,
    score: &mut ScoreState,
    events: &mut Vec<GameEvent>,
) -> CollisionOutcome {
    let mut outcome = CollisionOutcome::default();

    let mut shots: Vec<Shot> = Vec::new();
    let mut bullets: Vec<Shot> = Vec::new();
    for (entity, (pos, vel, proj)) in world.query_mut::<(&Position, &Velocity, &Projectile)>() {
        if proj.spent {
            continue;
        }
        let shot = Shot {
            entity,
            pos: *pos,
            vel: *vel,
            proj: proj.clone(),
        };
        match proj.owner {
            Owner::Player => shots.push(shot),
            Owner::Enemy => bullets.push(shot),
        }
    }

    let mut targets: Vec<Target> = world
        .query_mut::<(&Position, &Enemy)>()
        .into_iter()
        .filter(|(_, (_, enemy))| !enemy.destroyed)
        .map(|(entity, (pos, enemy))| Target {
            entity,
            pos: *pos,
            enemy: enemy.clone(),
        })
        .collect();

    let mut detonations: Vec<Entity> = Vec::new();

    deflect_off_bosses(&mut shots, &mut targets, events);
    shots_vs_bullets(&mut shots, &mut bullets, &mut detonations);
    shots_vs_enemies(&mut shots, &mut targets, &mut detonations);
    outcome.player_hit = player_vs_enemies(player, &targets, &mut bullets);

    // Pickups
    let mut collected: Vec<Entity> = Vec::new();
    if player.status == PlayerStatus::Standing {
        for (entity, (pos, pickup)) in world.query_mut::<(&Position, &Pickup)>() {
            if pos.range_to(&player.position) <= PICKUP_COLLECT_RADIUS {
                outcome.collected.push(pickup.kind);
                collected.push(entity);
            }
        }
    }
    for entity in collected {
        let _ = world.despawn(entity);
    }

    // Write back
    for shot in shots.into_iter().chain(bullets) {
        if let Ok(mut proj) = world.get::<&mut Projectile>(shot.entity) {
            *proj = shot.proj;
        }
        if let Ok(mut vel) = world.get::<&mut Velocity>(shot.entity) {
            *vel = shot.vel;
        }
    }
    for target in targets {
        if let Ok(mut enemy) = world.get::<&mut Enemy>(target.entity) {
            *enemy = target.enemy;
        }
    }

    for entity in detonations {
        detonate_plasma(world, entity, events);
    }

    resolve_kills(world, area, rng, score, events, &mut outcome);
    outcome
}

/// Vibrating and boomerang shots bounce off bosses; the boss is marked
/// deflecting so no player shot damages it this tick.
fn deflect_off_bosses(shots: &mut [Shot], targets: &mut [Target], events: &mut Vec<GameEvent>) {
    for shot in shots.iter_mut() {
        if !is_deflectable(&shot.proj) {
            continue;
        }
        for target in targets.iter_mut() {
            if !target.enemy.kind.is_boss() || target.enemy.hit_points <= 0.0 {
                continue;
            }
            if !collides_with(
                &shot.pos,
                &shot.vel,
                &shot.proj,
                &target.pos,
                enemy_hit_radius(&target.enemy),
            ) {
                continue;
            }
            deflect(&mut shot.proj);
            target.enemy.deflecting = true;
            let away = (shot.pos.to_vec() - target.pos.to_vec())
                .try_normalize()
                .unwrap_or(glam::DVec2::new(0.0, -1.0));
            shot.vel = Velocity::from_vec(away * DEFLECT_SPEED);
            events.push(GameEvent::Deflected {
                x: shot.pos.x,
                y: shot.pos.y,
                radius: DEFLECT_BURST_RADIUS,
            });
            break;
        }
    }
}

fn shots_vs_bullets(shots: &mut [Shot], bullets: &mut [Shot], detonations: &mut Vec<Entity>) {
    for shot in shots.iter_mut() {
        if shot.proj.spent || is_deflected(&shot.proj) {
            continue;
        }
        for bullet in bullets.iter_mut() {
            if shot.proj.spent {
                break;
            }
            if bullet.proj.spent
                || !collides_with(&shot.pos, &shot.vel, &shot.proj, &bullet.pos, hit_radius(&bullet.proj))
            {
                continue;
            }

            match shot.proj.kind {
                ProjectileKind::Plasma => {
                    if is_armed_plasma(&shot.proj) {
                        detonations.push(shot.entity);
                    }
                    break;
                }
                ProjectileKind::Penetrating => {
                    if bullet.proj.kind == ProjectileKind::Lead
                        && shot.proj.damage < PENETRATING_LEAD_MIN_DAMAGE
                    {
                        continue;
                    }
                    damage_bullet(&mut bullet.proj, shot.proj.damage);
                }
                ProjectileKind::Vibrating => {
                    if bullet.proj.kind == ProjectileKind::Lead {
                        continue;
                    }
                    destroy_bullet(&mut bullet.proj);
                    wear(&mut shot.proj, VIBRATOR_BULLET_WEAR);
                }
                ProjectileKind::Boomerang => {
                    destroy_bullet(&mut bullet.proj);
                }
                // Plain shots and lasers pass through enemy fire.
                _ => {}
            }
        }
    }
}

fn shots_vs_enemies(shots: &mut [Shot], targets: &mut [Target], detonations: &mut Vec<Entity>) {
    for shot in shots.iter_mut() {
        if shot.proj.spent || is_deflected(&shot.proj) {
            continue;
        }
        for target in targets.iter_mut() {
            if shot.proj.spent {
                break;
            }
            if target.enemy.hit_points <= 0.0
                || !collides_with(
                    &shot.pos,
                    &shot.vel,
                    &shot.proj,
                    &target.pos,
                    enemy_hit_radius(&target.enemy),
                )
            {
                continue;
            }

            let vetoed = target.enemy.deflecting;
            let serial = target.enemy.serial;
            let damage = if vetoed { 0.0 } else { shot.proj.damage };

            match shot.proj.kind {
                ProjectileKind::Plasma => {
                    if is_armed_plasma(&shot.proj) {
                        detonations.push(shot.entity);
                    }
                    break;
                }
                ProjectileKind::Normal => {
                    damage_enemy(&mut target.enemy, damage);
                    shot.proj.spent = true;
                }
                ProjectileKind::Penetrating | ProjectileKind::Laser | ProjectileKind::Boomerang => {
                    // Once per enemy (per leg, for boomerangs).
                    if shot.proj.struck.contains(&serial) {
                        continue;
                    }
                    shot.proj.struck.push(serial);
                    damage_enemy(&mut target.enemy, damage);
                }
                ProjectileKind::Vibrating => {
                    damage_enemy(&mut target.enemy, damage);
                    wear(&mut shot.proj, VIBRATOR_CONTACT_WEAR);
                }
                ProjectileKind::Sig | ProjectileKind::Lead => {}
            }
        }
    }
}

/// One hit per tick at most; the bullet that lands is consumed.
fn player_vs_enemies(player: &Player, targets: &[Target], bullets: &mut [Shot]) -> bool {
    if !player.can_be_hit() {
        return false;
    }

    let body_hit = targets.iter().any(|target| {
        !target.enemy.kind.is_ground()
            && target.enemy.hit_points > 0.0
            && circles_overlap(
                &player.position,
                PLAYER_HIT_RADIUS,
                &target.pos,
                enemy_hit_radius(&target.enemy),
            )
    });
    if body_hit {
        return true;
    }

    for bullet in bullets.iter_mut() {
        if bullet.proj.spent {
            continue;
        }
        if circles_overlap(
            &player.position,
            PLAYER_HIT_RADIUS,
            &bullet.pos,
            hit_radius(&bullet.proj),
        ) {
            bullet.proj.spent = true;
            return true;
        }
    }
    false
}

/// Mark enemies whose hit-points reached zero, award score and drop items.
fn resolve_kills(
    world: &mut World,
    area: u8,
    rng: &mut ChaCha8Rng,
    score: &mut ScoreState,
    events: &mut Vec<GameEvent>,
    outcome: &mut CollisionOutcome,
) {
    let mut drops: Vec<(Position, PickupKind)> = Vec::new();

    for (_entity, (pos, enemy)) in world.query_mut::<(&Position, &mut Enemy)>() {
        if enemy.destroyed || enemy.hit_points > 0.0 {
            continue;
        }
        enemy.destroyed = true;

        let points = get_profile(enemy.kind, area).score;
        score.record_kill(points, enemy.kind.is_boss());
        outcome.kills += 1;
        events.push(GameEvent::EnemyDestroyed {
            kind: enemy.kind,
            x: pos.x,
            y: pos.y,
            score: points,
        });

        let drop = match (enemy.drop, enemy.kind) {
            (Some(kind), _) => Some(kind),
            (None, EnemyKind::Air(_)) if rng.gen_bool(POWER_DROP_CHANCE) => Some(PickupKind::Power),
            _ => None,
        };
        if let Some(kind) = drop {
            drops.push((*pos, kind));
        }

        if enemy.kind.is_boss() {
            log::info!("boss {:?} destroyed", enemy.kind);
            outcome.boss_defeated = true;
        }
    }

    for (pos, kind) in drops {
        spawn_pickup(world, pos, kind);
    }
}

fn is_deflected(proj: &Projectile) -> bool {
    matches!(
        proj.motion,
        ProjectileMotion::Vibrating {
            phase: VibratePhase::Deflected,
            ..
        } | ProjectileMotion::Boomerang {
            phase: BoomerangPhase::Deflected,
            ..
        }
    )
}

fn damage_bullet(bullet: &mut Projectile, amount: f64) {
    bullet.hit_points = (bullet.hit_points - amount).max(0.0);
    if bullet.hit_points <= 0.0 {
        bullet.spent = true;
    }
}

fn destroy_bullet(bullet: &mut Projectile) {
    bullet.hit_points = 0.0;
    bullet.spent = true;
}

fn damage_enemy(enemy: &mut Enemy, amount: f64) {
    enemy.hit_points = (enemy.hit_points - amount).max(0.0);
}

/// Wear a vibrating shot down; at zero it is spent.
fn wear(proj: &mut Projectile, amount: f64) {
    if let ProjectileMotion::Vibrating { durability, .. } = &mut proj.motion {
        *durability = (*durability - amount).max(0.0);
        if *durability <= 0.0 {
            proj.spent = true;
        }
    }
}
