//! Player weapon state: main weapon level, the selected sub-weapon and its
//! resource pool, and the persistent Barrier/Rotating objects.
//!
//! The controller owns no entities; it spawns and cancels projectiles
//! through the world handed to each call.

pub mod barrier;
pub mod fire;
pub mod rotating;

use hecs::{Entity, World};
use serde::{Deserialize, Serialize};

use sortie_core::components::Projectile;
use sortie_core::constants::*;
use sortie_core::enums::{PoolKind, SubWeaponType};
use sortie_core::events::GameEvent;
use sortie_core::types::Position;

use barrier::Barrier;
use rotating::Rotating;

/// Remaining resource for the selected sub-weapon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ResourcePool {
    Unlimited,
    Ammo(u32),
    /// Ticks left.
    Duration(u32),
    Durability(f64),
}

impl ResourcePool {
    /// Full pool for `sub` at `level`.
    pub fn full(sub: SubWeaponType, level: u32) -> Self {
        let i = level.min(SUB_LEVEL_MAX) as usize;
        match (sub.pool_kind(), sub) {
            (PoolKind::Unlimited, _) => ResourcePool::Unlimited,
            (PoolKind::Ammo, SubWeaponType::Crusher) => ResourcePool::Ammo(CRUSHER_AMMO[i]),
            (PoolKind::Ammo, SubWeaponType::Vibrator) => ResourcePool::Ammo(VIBRATOR_AMMO[i]),
            (PoolKind::Ammo, SubWeaponType::Rewinder) => ResourcePool::Ammo(REWINDER_AMMO[i]),
            (PoolKind::Ammo, _) => ResourcePool::Ammo(PLASMA_AMMO[i]),
            (PoolKind::Duration, SubWeaponType::Circular) => {
                ResourcePool::Duration(CIRCULAR_DURATION[i])
            }
            (PoolKind::Duration, _) => ResourcePool::Duration(HI_SPEED_DURATION[i]),
            (PoolKind::Durability, _) => ResourcePool::Durability(BARRIER_DURABILITY[i]),
        }
    }

    pub fn is_exhausted(&self) -> bool {
        match *self {
            ResourcePool::Unlimited => false,
            ResourcePool::Ammo(n) | ResourcePool::Duration(n) => n == 0,
            ResourcePool::Durability(d) => d <= 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponController {
    main_level: u32,
    sub_type: SubWeaponType,
    sub_level: u32,
    pool: ResourcePool,
    main_cooldown: u32,
    sub_cooldown: u32,
    barrier: Option<Barrier>,
    rotating: Option<Rotating>,
}

impl Default for WeaponController {
    fn default() -> Self {
        Self::new(0)
    }
}

impl WeaponController {
    pub fn new(main_level: u32) -> Self {
        Self {
            main_level: main_level.min(MAIN_LEVEL_MAX),
            sub_type: SubWeaponType::AllRange,
            sub_level: 0,
            pool: ResourcePool::Unlimited,
            main_cooldown: 0,
            sub_cooldown: 0,
            barrier: None,
            rotating: None,
        }
    }

    pub fn main_level(&self) -> u32 {
        self.main_level
    }

    pub fn sub_type(&self) -> SubWeaponType {
        self.sub_type
    }

    pub fn sub_level(&self) -> u32 {
        self.sub_level
    }

    pub fn pool(&self) -> ResourcePool {
        self.pool
    }

    pub fn sub_cooldown(&self) -> u32 {
        self.sub_cooldown
    }

    pub fn barrier(&self) -> Option<&Barrier> {
        self.barrier.as_ref()
    }

    pub fn rotating(&self) -> Option<&Rotating> {
        self.rotating.as_ref()
    }

    /// Remaining ammo, or -1 for non-ammo weapons.
    pub fn ammo(&self) -> i32 {
        match self.pool {
            ResourcePool::Ammo(n) => n as i32,
            _ => -1,
        }
    }

    /// Remaining ticks, or -1 for untimed weapons.
    pub fn duration_frames(&self) -> i32 {
        match self.pool {
            ResourcePool::Duration(n) => n as i32,
            _ => -1,
        }
    }

    /// Barrier durability, or -1.0 when the barrier is not selected.
    pub fn durability(&self) -> f64 {
        match self.pool {
            ResourcePool::Durability(d) => d,
            _ => -1.0,
        }
    }

    pub fn set_main_level(&mut self, level: u32) {
        self.main_level = level.min(MAIN_LEVEL_MAX);
    }

    /// Player movement multiplier granted by the selected sub-weapon.
    pub fn move_speed_factor(&self) -> f64 {
        if self.sub_type == SubWeaponType::HiSpeed {
            HI_SPEED_MOVE_FACTOR
        } else {
            1.0
        }
    }

    /// Lv30 shield: a maxed main weapon paired with any sub-weapon but the
    /// base one absorbs a hit instead of a life.
    pub fn is_shield_active(&self) -> bool {
        self.main_level == MAIN_LEVEL_MAX && self.sub_type != SubWeaponType::AllRange
    }

    pub fn absorb_hit(&mut self, events: &mut Vec<GameEvent>) {
        log::info!("lv30 shield absorbed a hit");
        self.main_level = SHIELD_BREAK_MAIN_LEVEL;
        events.push(GameEvent::ShieldBreak);
    }

    pub fn collect_power(&mut self, events: &mut Vec<GameEvent>) {
        if self.main_level < MAIN_LEVEL_MAX {
            self.main_level += 1;
        }
        events.push(GameEvent::MainLevelUp {
            level: self.main_level,
        });
    }

    /// Same type levels up and refills; a different type replaces the
    /// current one at level 0.
    pub fn collect_sub_weapon(
        &mut self,
        sub: SubWeaponType,
        world: &mut World,
        events: &mut Vec<GameEvent>,
    ) {
        if sub == self.sub_type {
            self.sub_level = (self.sub_level + 1).min(SUB_LEVEL_MAX);
            self.pool = ResourcePool::full(sub, self.sub_level);
            if let Some(barrier) = self.barrier.as_mut() {
                barrier.level = self.sub_level;
            }
            if let Some(rotating) = self.rotating.as_mut() {
                rotating.level = self.sub_level;
            }
            log::debug!("{:?} level {}", sub, self.sub_level);
            events.push(GameEvent::SubWeaponLevelUp {
                sub_type: sub,
                level: self.sub_level,
            });
            return;
        }

        log::info!("sub-weapon {:?} -> {:?}", self.sub_type, sub);
        self.switch_to(sub, world);
        events.push(GameEvent::WeaponSwitched { sub_type: sub });
    }

    /// Fall back to the unlimited base weapon.
    pub fn reset_to_weapon0(&mut self, world: &mut World, events: &mut Vec<GameEvent>) {
        let old = self.sub_type;
        self.switch_to(SubWeaponType::AllRange, world);
        if old != SubWeaponType::AllRange {
            log::info!("{:?} depleted", old);
            events.push(GameEvent::SubWeaponDepleted { sub_type: old });
        }
    }

    /// Life lost: both weapons drop back to base.
    pub fn on_death(&mut self, world: &mut World) {
        self.main_level = 0;
        self.switch_to(SubWeaponType::AllRange, world);
    }

    fn switch_to(&mut self, sub: SubWeaponType, world: &mut World) {
        cancel_bound_projectiles(world, self.sub_type);
        self.barrier = None;
        self.rotating = None;
        self.sub_type = sub;
        self.sub_level = 0;
        self.pool = ResourcePool::full(sub, 0);
        self.sub_cooldown = 0;
        if sub == SubWeaponType::Barrier {
            self.barrier = Some(Barrier::new(0));
        }
    }

    /// Cooldowns and timed pools. Runs once per tick before firing.
    pub fn tick_timers(&mut self, world: &mut World, events: &mut Vec<GameEvent>) {
        self.main_cooldown = self.main_cooldown.saturating_sub(1);
        self.sub_cooldown = self.sub_cooldown.saturating_sub(1);

        if let ResourcePool::Duration(left) = self.pool {
            let left = left.saturating_sub(1);
            self.pool = ResourcePool::Duration(left);
            if left == 0 {
                self.reset_to_weapon0(world, events);
            }
        }
    }

    /// Barrier and Rotating contact for this tick.
    pub fn update_persistent(
        &mut self,
        world: &mut World,
        center: &Position,
        events: &mut Vec<GameEvent>,
    ) {
        if let Some(shield) = self.barrier.as_mut() {
            let mut durability = match self.pool {
                ResourcePool::Durability(d) => d,
                _ => 0.0,
            };

            shield.decay_timer += 1;
            if shield.decay_timer >= BARRIER_DECAY_INTERVAL_TICKS {
                shield.decay_timer = 0;
                if durability > BARRIER_DECAY_FLOOR {
                    durability = (durability - 1.0).max(BARRIER_DECAY_FLOOR);
                }
            }

            let outcome = barrier::run(shield, world, center);
            durability = (durability - outcome.destroyed as f64 - outcome.contact_drain).max(0.0);
            self.pool = ResourcePool::Durability(durability);
            if durability <= 0.0 {
                self.reset_to_weapon0(world, events);
            }
        }

        if let Some(orbit) = self.rotating.as_mut() {
            let outcome = rotating::run(orbit, world, center);
            if let Some(at) = outcome.deflected_at {
                log::debug!("rotating nodes deflected at ({:.0}, {:.0})", at.x, at.y);
                self.rotating = None;
                self.sub_cooldown = 0;
                events.push(GameEvent::Deflected {
                    x: at.x,
                    y: at.y,
                    radius: DEFLECT_BURST_RADIUS,
                });
            }
        }
    }

    pub fn shoot_main(&mut self, world: &mut World, player: &Position) -> bool {
        if self.main_cooldown > 0 {
            return false;
        }
        fire::fire_main(world, player, self.main_level, self.sub_type);
        self.main_cooldown = MAIN_COOLDOWN_TICKS;
        true
    }

    /// Fire the selected sub-weapon. Returns whether a shot was consumed;
    /// an exclusive weapon with a live shot out refuses without spending ammo.
    /// An empty pool falls back to weapon 0 once no exclusive shot is out.
    pub fn shoot_sub(
        &mut self,
        world: &mut World,
        player: &Position,
        events: &mut Vec<GameEvent>,
    ) -> bool {
        if self.sub_cooldown > 0 {
            return false;
        }
        if self.pool == ResourcePool::Ammo(0) {
            // The last exclusive shot finishes its flight before the reset.
            if fire::exclusive_shot_out(world, self.sub_type, self.sub_level) {
                return false;
            }
            self.reset_to_weapon0(world, events);
            return false;
        }

        let level = self.sub_level;
        let fired = match self.sub_type {
            SubWeaponType::AllRange => fire::fire_all_range(world, player, level),
            SubWeaponType::Crusher => fire::fire_crusher(world, player, level),
            SubWeaponType::Barrier => false,
            SubWeaponType::Circular => {
                if self.rotating.is_none() {
                    self.rotating = Some(Rotating::new(level));
                    true
                } else {
                    false
                }
            }
            SubWeaponType::Vibrator => fire::fire_vibrator(world, player, level),
            SubWeaponType::Rewinder => fire::fire_rewinder(world, player, level),
            SubWeaponType::Plasma => fire::fire_plasma(world, player, level),
            SubWeaponType::HiSpeed => fire::fire_hi_speed(world, player, level),
        };

        if fired {
            self.sub_cooldown = fire::sub_cooldown_ticks(self.sub_type);
            if let ResourcePool::Ammo(n) = &mut self.pool {
                *n = n.saturating_sub(1);
            }
        }
        fired
    }
}

/// Despawn every outstanding type-bound shot fired by `sub`.
fn cancel_bound_projectiles(world: &mut World, sub: SubWeaponType) {
    let doomed: Vec<Entity> = world
        .query::<&Projectile>()
        .iter()
        .filter(|(_, proj)| fire::is_bound_to(proj, sub))
        .map(|(entity, _)| entity)
        .collect();
    for entity in doomed {
        let _ = world.despawn(entity);
    }
}
