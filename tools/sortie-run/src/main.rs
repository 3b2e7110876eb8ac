//! sortie-run: headless driver for the SORTIE simulation.
//!
//! Usage:
//!   sortie-run play --seed 7 --ticks 3600
//!   sortie-run play --config run.json --snapshot final.json
//!   sortie-run verify --seed 7 --ticks 1800

use std::path::PathBuf;
use std::process;

use sortie_sim::core::commands::InputFrame;
use sortie_sim::core::config::SimConfig;
use sortie_sim::core::enums::GamePhase;
use sortie_sim::core::events::GameEvent;
use sortie_sim::core::state::GameStateSnapshot;
use sortie_sim::SimulationEngine;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "play" => cmd_play(&args[2..]),
        "verify" => cmd_verify(&args[2..]),
        "help" | "--help" | "-h" => print_usage(),
        other => {
            eprintln!("Unknown command: {other}");
            print_usage();
            process::exit(1);
        }
    }
}

fn print_usage() {
    eprintln!(
        "sortie-run: SORTIE headless simulation driver\n\
         \n\
         Commands:\n\
         \n\
         play      Run the autopilot and log a summary\n\
         \n\
           --seed <N>         RNG seed (overrides the config)\n\
           --ticks <N>        Ticks to run (default: 3600)\n\
           --config <path>    JSON run config (optional)\n\
           --snapshot <path>  Write the final snapshot as JSON (optional)\n\
         \n\
         verify    Run the same seed twice and compare every snapshot\n\
         \n\
           --seed <N>         RNG seed (default: 42)\n\
           --ticks <N>        Ticks to run (default: 3600)\n\
         \n\
         Set RUST_LOG=debug for per-event logging.\n"
    );
}

fn parse_flag<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    for i in 0..args.len() {
        if args[i] == flag && i + 1 < args.len() {
            return Some(&args[i + 1]);
        }
    }
    None
}

fn parse_number<T: std::str::FromStr>(args: &[String], flag: &str, default: T) -> T {
    match parse_flag(args, flag) {
        Some(text) => match text.parse() {
            Ok(n) => n,
            Err(_) => {
                eprintln!("Error: {flag} expects a number, got {text}");
                process::exit(1);
            }
        },
        None => default,
    }
}

fn load_config(args: &[String]) -> SimConfig {
    let mut config = match parse_flag(args, "--config") {
        Some(path) => match SimConfig::from_path(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        },
        None => SimConfig::default(),
    };
    config.seed = parse_number(args, "--seed", config.seed);
    config
}

/// Weave across the field with both triggers held.
fn autopilot(tick: u64) -> InputFrame {
    InputFrame {
        left: tick % 240 < 120,
        right: tick % 240 >= 120,
        ..InputFrame::firing()
    }
}

// --- Play command ---

fn cmd_play(args: &[String]) {
    let config = load_config(args);
    let ticks: u64 = parse_number(args, "--ticks", 3600);
    let snapshot_path = parse_flag(args, "--snapshot").map(PathBuf::from);

    let mut engine = match SimulationEngine::try_new(config) {
        Ok(engine) => engine,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let mut last = GameStateSnapshot::default();
    for tick in 0..ticks {
        last = engine.tick(&autopilot(tick));
        for event in &last.events {
            log_event(event);
        }
        if matches!(last.phase, GamePhase::GameOver | GamePhase::Complete) {
            break;
        }
    }

    log::info!(
        "finished at tick {} ({:.1}s): {:?}, area {}, score {}, lives {}",
        last.time.tick,
        last.time.elapsed_secs,
        last.phase,
        last.area.area,
        last.score,
        last.player.lives
    );
    let score = engine.score();
    log::info!(
        "{} enemies destroyed, {} bosses, {} hits taken, difficulty {:.2}",
        score.enemies_destroyed,
        score.bosses_destroyed,
        score.player_hits,
        last.difficulty
    );

    if let Some(path) = snapshot_path {
        let json = match serde_json::to_string_pretty(&last) {
            Ok(json) => json,
            Err(e) => {
                eprintln!("Error: failed to encode snapshot: {e}");
                process::exit(1);
            }
        };
        if let Err(e) = std::fs::write(&path, json) {
            eprintln!("Error: failed to write {}: {e}", path.display());
            process::exit(1);
        }
        log::info!("snapshot written to {}", path.display());
    }
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::AreaEntered { area } => log::info!("area {area}"),
        GameEvent::BossIntroStarted { area, boss } => log::info!("area {area}: {boss:?} incoming"),
        GameEvent::BossDefeated { area } => log::info!("area {area}: boss down"),
        GameEvent::PlayerHit { lives_left } => log::info!("hit, {lives_left} lives left"),
        GameEvent::GameOver => log::info!("game over"),
        GameEvent::GameComplete => log::info!("all areas cleared"),
        other => log::debug!("{other:?}"),
    }
}

// --- Verify command ---

fn cmd_verify(args: &[String]) {
    let seed: u64 = parse_number(args, "--seed", 42);
    let ticks: u64 = parse_number(args, "--ticks", 3600);
    let config = SimConfig {
        seed,
        ..Default::default()
    };

    let mut first = SimulationEngine::new(config.clone());
    let mut second = SimulationEngine::new(config);
    for tick in 0..ticks {
        let input = autopilot(tick);
        let a = serde_json::to_string(&first.tick(&input));
        let b = serde_json::to_string(&second.tick(&input));
        match (a, b) {
            (Ok(a), Ok(b)) if a == b => {}
            (Ok(_), Ok(_)) => {
                log::error!("seed {seed}: runs diverged at tick {tick}");
                process::exit(2);
            }
            (Err(e), _) | (_, Err(e)) => {
                eprintln!("Error: failed to encode snapshot: {e}");
                process::exit(1);
            }
        }
    }
    log::info!("seed {seed}: {ticks} ticks identical");
}
