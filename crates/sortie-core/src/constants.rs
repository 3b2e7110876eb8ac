//! Simulation constants and tuning parameters.
//!
//! Per-level tables are indexed by sub-weapon level (0..=5).

/// Simulation tick rate (Hz). One tick per rendered frame.
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Play field ---

pub const FIELD_WIDTH: f64 = 480.0;
pub const FIELD_HEIGHT: f64 = 640.0;

// --- Player ---

pub const PLAYER_START_X: f64 = 240.0;
pub const PLAYER_STANDING_Y: f64 = 560.0;
/// Half-extent of the player ship; main shots leave from `y - PLAYER_SIZE`.
pub const PLAYER_SIZE: f64 = 16.0;
pub const PLAYER_HIT_RADIUS: f64 = 4.0;
/// Movement speed in pixels per tick.
pub const PLAYER_SPEED: f64 = 4.0;
pub const HI_SPEED_MOVE_FACTOR: f64 = 1.5;
pub const DEFAULT_LIVES: u32 = 3;
pub const RESPAWN_START_Y: f64 = FIELD_HEIGHT + 40.0;
pub const RESPAWN_RISE_SPEED: f64 = 2.0;
/// 5 seconds.
pub const RESPAWN_INVULN_TICKS: u32 = 300;
/// 2 seconds.
pub const POWER_PICKUP_INVULN_TICKS: u32 = 120;
/// 5 seconds.
pub const SHIELD_BREAK_INVULN_TICKS: u32 = 300;

// --- Pickups ---

pub const PICKUP_RADIUS: f64 = 10.0;
pub const PICKUP_FALL_SPEED: f64 = 1.5;
pub const PICKUP_COLLECT_RADIUS: f64 = 20.0;
pub const POWER_DROP_CHANCE: f64 = 0.05;

// --- Main weapon ---

pub const MAIN_LEVEL_MAX: u32 = 30;
pub const MAIN_COOLDOWN_TICKS: u32 = 6;
pub const MAIN_SHOT_SPEED: f64 = 8.0;
pub const MAIN_SHOT_RADIUS: f64 = 3.0;
pub const MAIN_LASER_DAMAGE: f64 = 8.0;
pub const MAIN_LASER_LENGTH: f64 = 96.0;
pub const MAIN_LASER_SPEED: f64 = 16.0;
pub const MAIN_LASER_RADIUS: f64 = 6.0;
/// Main level after the Lv30 shield absorbs a hit.
pub const SHIELD_BREAK_MAIN_LEVEL: u32 = 1;

// --- Sub-weapons ---

pub const SUB_LEVEL_MAX: u32 = 5;

pub const ALL_RANGE_BASE_SHOTS: u32 = 3;
pub const ALL_RANGE_SPREAD_DEG: [f64; 6] = [15.0, 20.0, 25.0, 30.0, 35.0, 40.0];
pub const ALL_RANGE_SPEED: f64 = 7.0;
pub const ALL_RANGE_DAMAGE: f64 = 1.0;
pub const ALL_RANGE_COOLDOWN_TICKS: u32 = 12;

pub const CRUSHER_AMMO: [u32; 6] = [50, 60, 70, 80, 90, 100];
pub const CRUSHER_DAMAGE: [f64; 6] = [2.0, 2.0, 2.0, 3.0, 3.0, 4.0];
pub const CRUSHER_RADIUS: [f64; 6] = [5.0, 5.0, 6.0, 6.0, 7.0, 8.0];
pub const CRUSHER_SPEED: f64 = 10.0;
pub const CRUSHER_COOLDOWN_TICKS: u32 = 10;
/// Minimum owner damage for a penetrating shot to wear down `lead`.
pub const PENETRATING_LEAD_MIN_DAMAGE: f64 = 2.0;

pub const BARRIER_DURABILITY: [f64; 6] = [10.0, 14.0, 18.0, 22.0, 26.0, 30.0];
pub const BARRIER_RADIUS: f64 = 40.0;
/// One point of passive decay per ~1.67 s.
pub const BARRIER_DECAY_INTERVAL_TICKS: u32 = 100;
pub const BARRIER_DECAY_FLOOR: f64 = 1.0;
pub const BARRIER_CONTACT_DRAIN: f64 = 0.3;
pub const BARRIER_BULLET_DAMAGE: f64 = 10.0;
/// (start_deg, end_deg, segment_count); 0° points straight up, clockwise positive.
pub const BARRIER_ARCS: [(f64, f64, u32); 6] = [
    (-12.0, 12.0, 3),
    (-30.0, 30.0, 5),
    (-50.0, 50.0, 7),
    (-80.0, 80.0, 9),
    (-120.0, 120.0, 12),
    (-180.0, 180.0, 16),
];

pub const CIRCULAR_DURATION: [u32; 6] = [600, 720, 840, 960, 1080, 1200];
pub const ROTATING_NODE_COUNT: [u32; 6] = [1, 1, 2, 2, 3, 3];
pub const ROTATING_ORBIT_RADIUS: [f64; 6] = [36.0, 40.0, 44.0, 48.0, 52.0, 56.0];
/// Radians per tick.
pub const ROTATING_ANGULAR_SPEED: [f64; 6] = [0.08, 0.09, 0.10, 0.11, 0.12, 0.13];
pub const ROTATING_NODE_RADIUS: f64 = 8.0;
pub const ROTATING_DAMAGE: f64 = 1.0;
pub const CIRCULAR_ARM_COOLDOWN_TICKS: u32 = 30;
pub const DEFLECT_BURST_RADIUS: f64 = 48.0;

pub const VIBRATOR_AMMO: [u32; 6] = [5, 6, 7, 8, 9, 10];
pub const VIBRATOR_DURABILITY: [f64; 6] = [6.0, 7.0, 8.0, 9.0, 10.0, 12.0];
pub const VIBRATOR_AMPLITUDE: [f64; 6] = [30.0, 36.0, 42.0, 48.0, 54.0, 60.0];
/// Radians per tick.
pub const VIBRATOR_ANGULAR_SPEED: [f64; 6] = [0.15, 0.17, 0.19, 0.21, 0.23, 0.25];
pub const VIBRATOR_DAMAGE: [f64; 6] = [0.5, 0.5, 0.75, 0.75, 1.0, 1.0];
pub const VIBRATOR_ADVANCE_DISTANCE: f64 = 160.0;
pub const VIBRATOR_SPEED: f64 = 6.0;
pub const VIBRATOR_DRIFT_SPEED: f64 = 0.5;
pub const VIBRATOR_RADIUS: f64 = 14.0;
pub const VIBRATOR_MIN_SIZE_RATIO: f64 = 0.3;
pub const VIBRATOR_BULLET_WEAR: f64 = 1.0;
pub const VIBRATOR_CONTACT_WEAR: f64 = 0.5;
pub const VIBRATOR_COOLDOWN_TICKS: u32 = 20;

pub const REWINDER_AMMO: [u32; 6] = [20, 24, 28, 32, 36, 40];
/// Rewinder fires a straight laser from this level on.
pub const REWINDER_LASER_LEVEL: u32 = 4;
pub const REWINDER_COOLDOWN_TICKS: u32 = 16;
pub const BOOMERANG_SPEED: f64 = 9.0;
pub const BOOMERANG_RANGE: [f64; 6] = [220.0, 240.0, 260.0, 280.0, 300.0, 320.0];
pub const BOOMERANG_DAMAGE: [f64; 6] = [2.0, 2.0, 3.0, 3.0, 4.0, 4.0];
pub const BOOMERANG_RETURNS: [u32; 6] = [1, 1, 2, 2, 3, 3];
pub const BOOMERANG_RADIUS: f64 = 10.0;
pub const BOOMERANG_MIN_SPEED_FACTOR: f64 = 0.3;
pub const BOOMERANG_RETURN_SLOW_FACTOR: f64 = 0.5;
pub const BOOMERANG_RETURN_FAST_FACTOR: f64 = 1.5;
pub const BOOMERANG_RETURN_THRESHOLD: f64 = 200.0;
pub const BOOMERANG_CATCH_RADIUS: f64 = 16.0;
pub const REWINDER_LASER_DAMAGE: f64 = 3.0;
pub const REWINDER_LASER_LENGTH: f64 = 64.0;
pub const REWINDER_LASER_SPEED: f64 = 14.0;
pub const REWINDER_LASER_RADIUS: f64 = 4.0;
pub const DEFLECT_SPEED: f64 = 10.0;

pub const PLASMA_AMMO: [u32; 6] = [3, 3, 4, 4, 5, 5];
/// From this level the plasma detonates on its spawn tick.
pub const PLASMA_INSTANT_LEVEL: u32 = 5;
/// From this level the detonation also hits ground enemies.
pub const PLASMA_GROUND_LEVEL: u32 = 3;
pub const PLASMA_AOE_DAMAGE: f64 = 20.0;
pub const PLASMA_SPEED: f64 = 5.0;
pub const PLASMA_RADIUS: f64 = 10.0;
pub const PLASMA_COOLDOWN_TICKS: u32 = 30;

pub const HI_SPEED_DURATION: [u32; 6] = [480, 600, 720, 840, 960, 1080];
pub const HI_SPEED_SHOT_SPEED: f64 = 14.0;
pub const HI_SPEED_DAMAGE: f64 = 1.0;
pub const HI_SPEED_RADIUS: f64 = 3.0;
pub const HI_SPEED_COOLDOWN_TICKS: u32 = 4;

// --- Enemy projectiles ---

pub const NORMAL_BULLET_HP: f64 = 1.0;
pub const SIG_BULLET_HP: f64 = 2.0;
pub const LEAD_BULLET_HP: f64 = 30.0;
pub const ENEMY_BULLET_RADIUS: f64 = 4.0;
pub const LEAD_BULLET_RADIUS: f64 = 6.0;
/// Enemies stop firing once they are this close to the bottom edge.
pub const ENEMY_FIRE_BOTTOM_CUTOFF: f64 = 80.0;

// --- Offscreen margins ---

pub const OFFSCREEN_MARGIN_DEFAULT: f64 = 20.0;
pub const OFFSCREEN_MARGIN_VIBRATING: f64 = 60.0;
pub const OFFSCREEN_MARGIN_BOOMERANG: f64 = 120.0;
pub const OFFSCREEN_MARGIN_LASER: f64 = 100.0;
pub const OFFSCREEN_MARGIN_PLASMA: f64 = 40.0;
pub const ENEMY_OFFSCREEN_MARGIN: f64 = 64.0;

// --- Enemies ---

/// Line the boss settles on after its entrance.
pub const BOSS_ARENA_Y: f64 = 120.0;
pub const BOSS_SPAWN_Y: f64 = -80.0;
pub const BOSS_SWAY_AMPLITUDE: f64 = 120.0;
/// Radians per tick.
pub const BOSS_SWAY_RATE: f64 = 0.01;
/// Boss hit-points grow by this fraction per area after the first.
pub const BOSS_HP_PER_AREA: f64 = 0.15;
pub const BOSS_PATTERN_SWITCH_VOLLEYS: u32 = 4;
pub const AIR_SPAWN_Y: f64 = -24.0;
pub const HOVER_LINE_Y: f64 = 140.0;

// --- Area progression ---

pub const AREA_COUNT: u8 = 12;
pub const AREA_BASE_LENGTH: u32 = 3000;
pub const AREA_LENGTH_PER_AREA: u32 = 150;
pub const BASE_SCROLL_SPEED: f64 = 1.0;
pub const HIGH_SPEED_SCROLL: f64 = 3.0;
pub const BOSS_INTRO_SCROLL_TICKS: u32 = 120;
pub const BOSS_INTRO_SCROLL_SPEED: f64 = 4.0;
pub const BOSS_DECEL_TICKS: u32 = 90;
/// 3 seconds.
pub const BOSS_DEFEAT_DELAY_TICKS: u32 = 180;
pub const FORMATION_ROLL_INTERVAL: u32 = 600;
pub const FORMATION_CHANCE: f64 = 0.25;
pub const FORMATION_SIZE: u32 = 5;
pub const FORMATION_STAGGER_TICKS: u64 = 12;
pub const MASS_FORMATION_SIZE: u32 = 12;
pub const MASS_FORMATION_STAGGER_TICKS: u64 = 8;
/// Mass formation fires at this fraction of the area length.
pub const MASS_FORMATION_PROGRESS: f64 = 0.3;
pub const GROUND_ROLL_INTERVAL: u32 = 90;
pub const BOSS_FORMATION_Y_TOP: f64 = -540.0;
pub const BOSS_FORMATION_Y_BOTTOM: f64 = -150.0;
pub const SPAWN_MARGIN_X: f64 = 40.0;

// --- Difficulty (ALG) ---

pub const DIFFICULTY_MIN: f64 = 1.0;
pub const DIFFICULTY_MAX: f64 = 10.0;
pub const DIFFICULTY_INITIAL: f64 = 1.0;
/// Kill-rate signal is ignored until this many kills are counted.
pub const ALG_MIN_KILLS: u32 = 10;
/// Kills per second.
pub const ALG_HIGH_KILL_RATE: f64 = 1.0;
pub const ALG_LOW_KILL_RATE: f64 = 0.3;
pub const ALG_KILL_STEP: f64 = 0.002;
pub const ALG_SCORE_SAMPLE_TICKS: u64 = 60;
pub const ALG_SCORE_HIGH: u64 = 300;
pub const ALG_SCORE_LOW: u64 = 20;
pub const ALG_SCORE_STEP: f64 = 0.01;
pub const ALG_HIT_PENALTY: f64 = 0.005;
pub const ALG_HIT_DECAY: f64 = 1.0 / 300.0;
pub const ALG_HIGH_MAIN_LEVEL: u32 = 20;
pub const ALG_MAIN_LEVEL_BIAS: f64 = 0.0005;
/// 3 minutes.
pub const ALG_SURVIVAL_TICKS: u64 = 10_800;
pub const ALG_SURVIVAL_BIAS: f64 = 0.0005;
/// 30 seconds.
pub const ALG_BASELINE_TICKS: u64 = 1800;
pub const ALG_BASELINE_STEP: f64 = 0.1;
pub const AIR_SPAWN_BASE_INTERVAL: f64 = 90.0;
pub const AIR_SPAWN_MIN_INTERVAL: u32 = 15;
