use serde::{Deserialize, Serialize};

/// Running score state tracked by the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreState {
    /// Monotonic; fed to the difficulty controller and the high-score keeper.
    pub score: u64,
    pub enemies_destroyed: u32,
    pub bosses_destroyed: u32,
    pub player_hits: u32,
}

impl ScoreState {
    pub fn record_kill(&mut self, points: u32, boss: bool) {
        self.score += u64::from(points);
        self.enemies_destroyed += 1;
        if boss {
            self.bosses_destroyed += 1;
        }
    }
}
