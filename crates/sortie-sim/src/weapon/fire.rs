//! Shot factories for the main weapon and each sub-weapon.
//!
//! Each function spawns its projectiles and reports whether anything was
//! actually fired; cooldowns and pools are handled by the controller.

use hecs::World;

use sortie_core::components::{Projectile, ProjectileMotion};
use sortie_core::constants::*;
use sortie_core::enums::*;
use sortie_core::types::{Position, Velocity};

use crate::world_setup::{player_projectile, spawn_projectile};

/// Main weapon fan: (x offset, x velocity, damage) per shot.
const MAIN_PATTERNS: [&[(f64, f64, f64)]; 6] = [
    &[(0.0, 0.0, 1.0)],
    &[(-6.0, 0.0, 1.0), (6.0, 0.0, 1.0)],
    &[(-8.0, -0.4, 1.0), (8.0, 0.4, 1.0)],
    &[(-10.0, 0.0, 1.0), (0.0, 0.0, 1.0), (10.0, 0.0, 1.0)],
    &[(-10.0, -0.8, 1.0), (0.0, 0.0, 1.5), (10.0, 0.8, 1.0)],
    &[(-12.0, -1.2, 1.0), (0.0, 0.0, 2.0), (12.0, 1.2, 1.0)],
];

/// Muzzle point: the nose of the ship.
fn muzzle(player: &Position) -> Position {
    Position::new(player.x, player.y - PLAYER_SIZE)
}

fn idx(level: u32) -> usize {
    level.min(SUB_LEVEL_MAX) as usize
}

/// Whether a live shot of `kind` fired by `sub` is still in the world.
pub fn has_live_shot(world: &World, sub: SubWeaponType, kind: ProjectileKind) -> bool {
    world
        .query::<&Projectile>()
        .iter()
        .any(|(_, p)| !p.spent && p.source == ShotSource::Sub(sub) && p.kind == kind)
}

/// Whether `sub` at `level` has its one exclusive shot still out.
pub fn exclusive_shot_out(world: &World, sub: SubWeaponType, level: u32) -> bool {
    match sub {
        SubWeaponType::Vibrator => has_live_shot(world, sub, ProjectileKind::Vibrating),
        SubWeaponType::Rewinder if level < REWINDER_LASER_LEVEL => {
            has_live_shot(world, sub, ProjectileKind::Boomerang)
        }
        SubWeaponType::Plasma => has_live_shot(world, sub, ProjectileKind::Plasma),
        _ => false,
    }
}

pub fn fire_main(world: &mut World, player: &Position, main_level: u32, sub_type: SubWeaponType) {
    let origin = muzzle(player);

    if main_level >= MAIN_LEVEL_MAX && sub_type == SubWeaponType::AllRange {
        let laser = player_projectile(
            ShotSource::Main,
            ProjectileKind::Laser,
            MAIN_LASER_DAMAGE,
            MAIN_LASER_RADIUS,
            main_level,
            ProjectileMotion::Laser {
                length: MAIN_LASER_LENGTH,
            },
        );
        spawn_projectile(world, origin, Velocity::new(0.0, -MAIN_LASER_SPEED), laser);
        return;
    }

    for &(dx, vx, damage) in MAIN_PATTERNS[idx(main_level)] {
        let shot = player_projectile(
            ShotSource::Main,
            ProjectileKind::Normal,
            damage,
            MAIN_SHOT_RADIUS,
            main_level,
            ProjectileMotion::Linear,
        );
        spawn_projectile(
            world,
            Position::new(origin.x + dx, origin.y),
            Velocity::new(vx, -MAIN_SHOT_SPEED),
            shot,
        );
    }
}

/// Fan of small shots centered straight up.
pub fn fire_all_range(world: &mut World, player: &Position, level: u32) -> bool {
    let origin = muzzle(player);
    let count = ALL_RANGE_BASE_SHOTS + level.min(SUB_LEVEL_MAX) / 2;
    let spread = ALL_RANGE_SPREAD_DEG[idx(level)].to_radians();
    let step = spread / (count - 1) as f64;
    for i in 0..count {
        // 0 = up, clockwise positive
        let angle = -spread / 2.0 + step * i as f64;
        let shot = player_projectile(
            ShotSource::Sub(SubWeaponType::AllRange),
            ProjectileKind::Normal,
            ALL_RANGE_DAMAGE,
            MAIN_SHOT_RADIUS,
            level,
            ProjectileMotion::Linear,
        );
        let velocity = Velocity::new(angle.sin() * ALL_RANGE_SPEED, -angle.cos() * ALL_RANGE_SPEED);
        spawn_projectile(world, origin, velocity, shot);
    }
    true
}

pub fn fire_crusher(world: &mut World, player: &Position, level: u32) -> bool {
    let shot = player_projectile(
        ShotSource::Sub(SubWeaponType::Crusher),
        ProjectileKind::Penetrating,
        CRUSHER_DAMAGE[idx(level)],
        CRUSHER_RADIUS[idx(level)],
        level,
        ProjectileMotion::Linear,
    );
    spawn_projectile(world, muzzle(player), Velocity::new(0.0, -CRUSHER_SPEED), shot);
    true
}

pub fn fire_vibrator(world: &mut World, player: &Position, level: u32) -> bool {
    if has_live_shot(world, SubWeaponType::Vibrator, ProjectileKind::Vibrating) {
        return false;
    }
    let i = idx(level);
    let origin = muzzle(player);
    let shot = player_projectile(
        ShotSource::Sub(SubWeaponType::Vibrator),
        ProjectileKind::Vibrating,
        VIBRATOR_DAMAGE[i],
        VIBRATOR_RADIUS,
        level,
        ProjectileMotion::Vibrating {
            phase: VibratePhase::Advancing,
            anchor_x: origin.x,
            traveled: 0.0,
            ticks: 0,
            amplitude: VIBRATOR_AMPLITUDE[i],
            angular_speed: VIBRATOR_ANGULAR_SPEED[i],
            durability: VIBRATOR_DURABILITY[i],
            max_durability: VIBRATOR_DURABILITY[i],
        },
    );
    spawn_projectile(world, origin, Velocity::new(0.0, -VIBRATOR_SPEED), shot);
    true
}

/// Boomerang below the laser level, straight laser from it on.
pub fn fire_rewinder(world: &mut World, player: &Position, level: u32) -> bool {
    let i = idx(level);
    let origin = muzzle(player);
    let source = ShotSource::Sub(SubWeaponType::Rewinder);

    if level >= REWINDER_LASER_LEVEL {
        let laser = player_projectile(
            source,
            ProjectileKind::Laser,
            REWINDER_LASER_DAMAGE,
            REWINDER_LASER_RADIUS,
            level,
            ProjectileMotion::Laser {
                length: REWINDER_LASER_LENGTH,
            },
        );
        spawn_projectile(world, origin, Velocity::new(0.0, -REWINDER_LASER_SPEED), laser);
        return true;
    }

    if has_live_shot(world, SubWeaponType::Rewinder, ProjectileKind::Boomerang) {
        return false;
    }
    let boomerang = player_projectile(
        source,
        ProjectileKind::Boomerang,
        BOOMERANG_DAMAGE[i],
        BOOMERANG_RADIUS,
        level,
        ProjectileMotion::Boomerang {
            phase: BoomerangPhase::Forward,
            traveled: 0.0,
            max_range: BOOMERANG_RANGE[i],
            base_speed: BOOMERANG_SPEED,
            returns_left: BOOMERANG_RETURNS[i],
        },
    );
    spawn_projectile(world, origin, Velocity::new(0.0, -BOOMERANG_SPEED), boomerang);
    true
}

pub fn fire_plasma(world: &mut World, player: &Position, level: u32) -> bool {
    if has_live_shot(world, SubWeaponType::Plasma, ProjectileKind::Plasma) {
        return false;
    }
    let instant = level >= PLASMA_INSTANT_LEVEL;
    let velocity = if instant {
        Velocity::default()
    } else {
        Velocity::new(0.0, -PLASMA_SPEED)
    };
    let shot = player_projectile(
        ShotSource::Sub(SubWeaponType::Plasma),
        ProjectileKind::Plasma,
        0.0,
        PLASMA_RADIUS,
        level,
        ProjectileMotion::Plasma {
            instant,
            has_triggered: false,
        },
    );
    spawn_projectile(world, muzzle(player), velocity, shot);
    true
}

pub fn fire_hi_speed(world: &mut World, player: &Position, level: u32) -> bool {
    let shot = player_projectile(
        ShotSource::Sub(SubWeaponType::HiSpeed),
        ProjectileKind::Penetrating,
        HI_SPEED_DAMAGE,
        HI_SPEED_RADIUS,
        level,
        ProjectileMotion::Linear,
    );
    spawn_projectile(world, muzzle(player), Velocity::new(0.0, -HI_SPEED_SHOT_SPEED), shot);
    true
}

/// Cooldown after a successful sub-weapon shot.
pub fn sub_cooldown_ticks(sub: SubWeaponType) -> u32 {
    match sub {
        SubWeaponType::AllRange => ALL_RANGE_COOLDOWN_TICKS,
        SubWeaponType::Crusher => CRUSHER_COOLDOWN_TICKS,
        SubWeaponType::Barrier => 0,
        SubWeaponType::Circular => CIRCULAR_ARM_COOLDOWN_TICKS,
        SubWeaponType::Vibrator => VIBRATOR_COOLDOWN_TICKS,
        SubWeaponType::Rewinder => REWINDER_COOLDOWN_TICKS,
        SubWeaponType::Plasma => PLASMA_COOLDOWN_TICKS,
        SubWeaponType::HiSpeed => HI_SPEED_COOLDOWN_TICKS,
    }
}

/// Whether a shot belongs to `sub` and is bound to it.
pub fn is_bound_to(proj: &Projectile, sub: SubWeaponType) -> bool {
    proj.source == ShotSource::Sub(sub) && proj.kind.is_type_bound()
}
