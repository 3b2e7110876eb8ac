//! In-memory save state: the full simulation, including the RNG stream, in
//! a serde form. Restoring it and replaying the same inputs reproduces the
//! same snapshots.

use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use sortie_core::components::{Enemy, Pickup, Projectile};
use sortie_core::enums::GamePhase;
use sortie_core::error::{SimError, SimResult};
use sortie_core::types::{Position, SimTime, Velocity};

use sortie_director::{AreaProgressionController, DifficultyController};

use crate::player::Player;
use crate::score::ScoreState;
use crate::weapon::WeaponController;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveState {
    pub time: SimTime,
    pub phase: GamePhase,
    pub rng: ChaCha8Rng,
    pub player: Player,
    pub weapons: WeaponController,
    pub area: AreaProgressionController,
    pub difficulty: DifficultyController,
    pub score: ScoreState,
    pub next_serial: u32,
    /// Entities in world iteration order.
    pub projectiles: Vec<(Position, Velocity, Projectile)>,
    pub enemies: Vec<(Position, Velocity, Enemy)>,
    pub pickups: Vec<(Position, Velocity, Pickup)>,
}

impl SaveState {
    pub fn to_json(&self) -> SimResult<String> {
        serde_json::to_string(self).map_err(SimError::SaveEncode)
    }

    pub fn from_json(json: &str) -> SimResult<Self> {
        serde_json::from_str(json).map_err(SimError::SaveDecode)
    }
}
