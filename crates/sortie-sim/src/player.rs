//! The player ship: movement, lives, invulnerability and the respawn climb.

use serde::{Deserialize, Serialize};

use sortie_core::commands::InputFrame;
use sortie_core::constants::*;
use sortie_core::enums::PlayerStatus;
use sortie_core::types::Position;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub position: Position,
    pub status: PlayerStatus,
    pub lives: u32,
    pub invulnerable_ticks: u32,
}

impl Player {
    pub fn new(lives: u32) -> Self {
        Self {
            position: Position::new(PLAYER_START_X, PLAYER_STANDING_Y),
            status: PlayerStatus::Standing,
            lives,
            invulnerable_ticks: 0,
        }
    }

    /// Apply one tick of input. `speed_factor` comes from the sub-weapon.
    pub fn update(&mut self, input: &InputFrame, speed_factor: f64) {
        match self.status {
            PlayerStatus::Standing => {
                let speed = PLAYER_SPEED * speed_factor;
                self.position.x = (self.position.x + input.axis_x() * speed)
                    .clamp(PLAYER_SIZE, FIELD_WIDTH - PLAYER_SIZE);
                self.position.y = (self.position.y + input.axis_y() * speed)
                    .clamp(PLAYER_SIZE, FIELD_HEIGHT - PLAYER_SIZE);
                self.invulnerable_ticks = self.invulnerable_ticks.saturating_sub(1);
            }
            PlayerStatus::Respawning => {
                self.position.y -= RESPAWN_RISE_SPEED;
                if self.position.y <= PLAYER_STANDING_Y {
                    self.position.y = PLAYER_STANDING_Y;
                    self.status = PlayerStatus::Standing;
                    self.invulnerable_ticks = RESPAWN_INVULN_TICKS;
                    log::debug!("player back on station");
                }
            }
        }
    }

    pub fn can_fire(&self) -> bool {
        self.status == PlayerStatus::Standing
    }

    pub fn can_be_hit(&self) -> bool {
        self.status == PlayerStatus::Standing && self.invulnerable_ticks == 0
    }

    /// Jump below the field and start climbing back.
    pub fn begin_respawn(&mut self) {
        self.status = PlayerStatus::Respawning;
        self.position = Position::new(PLAYER_START_X, RESPAWN_START_Y);
        self.invulnerable_ticks = 0;
    }

    pub fn grant_invulnerability(&mut self, ticks: u32) {
        self.invulnerable_ticks = self.invulnerable_ticks.max(ticks);
    }
}
