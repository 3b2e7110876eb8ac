//! Enumeration types used throughout the simulation.
//!
//! Every family that the game dispatches on (projectile kinds, sub-weapons,
//! enemy archetypes, controller phases) is a closed enum so that matches
//! stay exhaustive when a variant is added.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Which side fired a projectile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Owner {
    #[default]
    Player,
    Enemy,
}

/// Projectile behavior tag.
///
/// `Normal`, `Sig` and `Lead` are the enemy hit-point tiers (player main
/// shots are also `Normal`). The remaining variants are player sub-weapon
/// shapes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectileKind {
    #[default]
    Normal,
    Sig,
    Lead,
    Penetrating,
    Vibrating,
    Boomerang,
    Laser,
    Plasma,
}

impl ProjectileKind {
    /// How far past the play-field edge this kind may travel before it
    /// counts as offscreen.
    pub fn offscreen_margin(self) -> f64 {
        match self {
            ProjectileKind::Normal
            | ProjectileKind::Sig
            | ProjectileKind::Lead
            | ProjectileKind::Penetrating => OFFSCREEN_MARGIN_DEFAULT,
            ProjectileKind::Vibrating => OFFSCREEN_MARGIN_VIBRATING,
            ProjectileKind::Boomerang => OFFSCREEN_MARGIN_BOOMERANG,
            ProjectileKind::Laser => OFFSCREEN_MARGIN_LASER,
            ProjectileKind::Plasma => OFFSCREEN_MARGIN_PLASMA,
        }
    }

    /// Hit-points an enemy-owned projectile of this kind starts with.
    pub fn enemy_hit_points(self) -> f64 {
        match self {
            ProjectileKind::Sig => SIG_BULLET_HP,
            ProjectileKind::Lead => LEAD_BULLET_HP,
            _ => NORMAL_BULLET_HP,
        }
    }

    /// Kinds that keep flying after they are launched and get cancelled when
    /// the player abandons the sub-weapon that fired them.
    pub fn is_type_bound(self) -> bool {
        matches!(
            self,
            ProjectileKind::Boomerang
                | ProjectileKind::Vibrating
                | ProjectileKind::Laser
                | ProjectileKind::Plasma
        )
    }
}

/// Which resource pool a sub-weapon draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PoolKind {
    Unlimited,
    Ammo,
    Duration,
    Durability,
}

/// The eight player sub-weapons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubWeaponType {
    /// 0: fan of small shots, unlimited.
    #[default]
    AllRange,
    /// 1: penetrating shot.
    Crusher,
    /// 2: arc shield around the player.
    Barrier,
    /// 3: orbiting nodes.
    Circular,
    /// 4: advancing, then oscillating shot.
    Vibrator,
    /// 5: boomerang, mutating into a straight laser at high level.
    Rewinder,
    /// 6: area-clearing detonation.
    Plasma,
    /// 7: rapid high-velocity shots plus faster movement.
    HiSpeed,
}

impl SubWeaponType {
    pub const ALL: [SubWeaponType; 8] = [
        SubWeaponType::AllRange,
        SubWeaponType::Crusher,
        SubWeaponType::Barrier,
        SubWeaponType::Circular,
        SubWeaponType::Vibrator,
        SubWeaponType::Rewinder,
        SubWeaponType::Plasma,
        SubWeaponType::HiSpeed,
    ];

    pub fn index(self) -> u8 {
        match self {
            SubWeaponType::AllRange => 0,
            SubWeaponType::Crusher => 1,
            SubWeaponType::Barrier => 2,
            SubWeaponType::Circular => 3,
            SubWeaponType::Vibrator => 4,
            SubWeaponType::Rewinder => 5,
            SubWeaponType::Plasma => 6,
            SubWeaponType::HiSpeed => 7,
        }
    }

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn pool_kind(self) -> PoolKind {
        match self {
            SubWeaponType::AllRange => PoolKind::Unlimited,
            SubWeaponType::Crusher
            | SubWeaponType::Vibrator
            | SubWeaponType::Rewinder
            | SubWeaponType::Plasma => PoolKind::Ammo,
            SubWeaponType::Circular | SubWeaponType::HiSpeed => PoolKind::Duration,
            SubWeaponType::Barrier => PoolKind::Durability,
        }
    }
}

/// Where a player projectile came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShotSource {
    Main,
    Sub(SubWeaponType),
    Enemy,
}

/// Vibrating projectile state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VibratePhase {
    #[default]
    Advancing,
    Oscillating,
    /// Bounced off a boss; flies away harmlessly.
    Deflected,
}

/// Boomerang projectile state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoomerangPhase {
    #[default]
    Forward,
    Returning,
    Deflected,
}

/// Air enemy archetypes. The first six are drawn by the difficulty mix;
/// `Special` and `Bonus` are scripted one-shots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AirArchetype {
    Drone,
    Fighter,
    Sweeper,
    Gunship,
    Bomber,
    Elite,
    Special,
    Bonus,
}

/// Ground entities carried by the scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GroundArchetype {
    Turret,
    Core,
    /// Non-shooting base that drops a sub-weapon item.
    SupportBase,
}

/// Boss archetypes, assigned per area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BossArchetype {
    Warden,
    Hydra,
    Leviathan,
    Seraph,
    Colossus,
    Tyrant,
}

/// Combat entity category plus archetype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    Air(AirArchetype),
    Ground(GroundArchetype),
    Boss(BossArchetype),
}

impl EnemyKind {
    pub fn is_boss(self) -> bool {
        matches!(self, EnemyKind::Boss(_))
    }

    pub fn is_ground(self) -> bool {
        matches!(self, EnemyKind::Ground(_))
    }
}

/// Enemy movement phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnemyPhase {
    #[default]
    Entering,
    Active,
    Leaving,
}

/// Item kinds the player can collect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickupKind {
    Power,
    SubWeapon(SubWeaponType),
}

/// Boss lifecycle as seen from outside the area controller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BossPhase {
    #[default]
    None,
    Active,
    Defeated,
}

/// Boss intro sub-phase while the boss is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BossIntroPhase {
    #[default]
    ScrollingIn,
    Decelerating,
    Stopped,
}

/// Area progression state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AreaState {
    #[default]
    NormalProgress,
    BossActive,
    BossDefeatedDelay,
    /// Final area cleared.
    Complete,
}

impl AreaState {
    pub fn boss_phase(self) -> BossPhase {
        match self {
            AreaState::NormalProgress => BossPhase::None,
            AreaState::BossActive => BossPhase::Active,
            AreaState::BossDefeatedDelay | AreaState::Complete => BossPhase::Defeated,
        }
    }
}

/// Player standing/respawn state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerStatus {
    #[default]
    Standing,
    /// Rising from below the field after losing a life.
    Respawning,
}

/// Game phase as far as the core is concerned. Title/menu flow lives
/// outside the core.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    Playing,
    Paused,
    GameOver,
    Complete,
}
