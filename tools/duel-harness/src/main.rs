//! duel-harness: headless driver for the wizard duel engine.
//!
//! Stands in for the AR host: feeds a viewer transform, presses and releases
//! the wand on a fixed rhythm, and reports contacts from a toy proximity check.
//!
//! Usage:
//!   duel-harness run --seconds 30 --seed 7 [--config duel.json] [--sway]
//!   duel-harness config

use std::path::PathBuf;
use std::process;

use glam::{Mat4, Quat, Vec3};

use wizard_core::commands::PlayerCommand;
use wizard_core::enums::{ActorTag, ContactOutcome, GamePhase};
use wizard_core::events::{ContactEvent, UiEvent};
use wizard_core::state::{ActorView, GameStateSnapshot};
use wizard_core::types::secs_to_ticks;
use wizard_sim::systems::casting::Wand;
use wizard_sim::{SimConfig, SimulationEngine};

/// Contact radius of the toy proximity check (meters).
const CONTACT_RADIUS: f32 = 0.3;

/// Seconds between casts of the scripted player.
const CAST_PERIOD_SECS: f64 = 1.0;

/// How long each cast is channelled before release.
const CHANNEL_SECS: f64 = 0.3;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        process::exit(1);
    }

    match args[1].as_str() {
        "run" => cmd_run(&args[2..]),
        "config" => cmd_config(),
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
        "duel-harness: headless wizard duel driver\n\
         \n\
         Commands:\n\
         \n\
         run      Play a scripted duel and print a summary\n\
         \n\
           --seconds <N>   Simulated seconds to run (default: 30)\n\
           --seed <N>      RNG seed (overrides the config file)\n\
           --config <path> JSON config override\n\
           --sway          Slowly turn the viewer left and right\n\
         \n\
         config   Print the default config as JSON\n\
         \n\
         Set RUST_LOG=debug for per-actor logging.\n"
    );
}

fn parse_flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn has_flag(args: &[String], flag: &str) -> bool {
    args.iter().any(|a| a == flag)
}

fn load_config(args: &[String]) -> SimConfig {
    let mut config = match parse_flag_value(args, "--config").map(PathBuf::from) {
        Some(path) => {
            let text = std::fs::read_to_string(&path).unwrap_or_else(|e| {
                eprintln!("Failed to read {}: {e}", path.display());
                process::exit(1);
            });
            SimConfig::from_json_str(&text).unwrap_or_else(|e| {
                eprintln!("Bad config {}: {e}", path.display());
                process::exit(1);
            })
        }
        None => SimConfig::default(),
    };

    if let Some(seed) = parse_flag_value(args, "--seed") {
        config.seed = seed.parse().unwrap_or_else(|_| {
            eprintln!("--seed expects an integer, got {seed}");
            process::exit(1);
        });
    }
    config
}

fn cmd_config() {
    match serde_json::to_string_pretty(&SimConfig::default()) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Failed to serialize config: {e}");
            process::exit(1);
        }
    }
}

#[derive(Default)]
struct Summary {
    intercepts: u32,
    deaths: u32,
    final_scores: Vec<u32>,
}

fn cmd_run(args: &[String]) {
    let config = load_config(args);
    let seconds: f64 = match parse_flag_value(args, "--seconds") {
        Some(s) => s.parse().unwrap_or_else(|_| {
            eprintln!("--seconds expects a number, got {s}");
            process::exit(1);
        }),
        None => 30.0,
    };
    let sway = has_flag(args, "--sway");

    let mut engine = SimulationEngine::try_new(config).unwrap_or_else(|e| {
        eprintln!("{e}");
        process::exit(1);
    });

    let total_ticks = secs_to_ticks(seconds);
    let cast_period = secs_to_ticks(CAST_PERIOD_SECS);
    let channel = secs_to_ticks(CHANNEL_SECS);
    let mut summary = Summary::default();

    engine.queue_command(PlayerCommand::StartSession);

    for tick in 0..total_ticks {
        if sway {
            let yaw = (tick as f32 / 240.0).sin() * 0.3;
            let transform = Mat4::from_rotation_translation(
                Quat::from_rotation_y(yaw),
                Vec3::new(0.0, 1.6, 0.0),
            );
            log::trace!("wand at {}", Wand::rig_position(&transform));
            engine.queue_command(PlayerCommand::SetViewerTransform { transform });
        }
        match tick % cast_period {
            0 => engine.queue_command(PlayerCommand::PressStart),
            t if t == channel => engine.queue_command(PlayerCommand::PressEnd),
            _ => {}
        }

        let snapshot = engine.tick();
        record(&snapshot, &mut summary);

        if snapshot.phase == GamePhase::Dead {
            engine.queue_command(PlayerCommand::Restart);
            continue;
        }

        for contact in find_contacts(&snapshot.actors) {
            if engine.handle_contact(contact) == ContactOutcome::ProjectileDestroyed {
                summary.intercepts += 1;
            }
        }
    }

    let last = engine.snapshot();
    record(&last, &mut summary);
    log::info!(
        "run finished at tick {} with {} actors live",
        last.time.tick,
        last.actors.len()
    );

    println!("simulated {:.1}s ({} ticks)", seconds, total_ticks);
    println!("intercepts: {}", summary.intercepts);
    println!("deaths:     {}", summary.deaths);
    println!("scores:     {:?}", summary.final_scores);
    println!("current:    {} (best {})", engine.score(), engine.best_score());
}

fn record(snapshot: &GameStateSnapshot, summary: &mut Summary) {
    for event in &snapshot.ui_events {
        if let UiEvent::PlayerHit { final_score, .. } = event {
            summary.deaths += 1;
            summary.final_scores.push(*final_score);
        }
    }
}

/// Report every pair within `CONTACT_RADIUS` whose tags a physics engine would
/// test against each other. Each actor takes part in at most one contact.
fn find_contacts(actors: &[ActorView]) -> Vec<ContactEvent> {
    let mut contacts = Vec::new();
    let mut used = vec![false; actors.len()];

    for i in 0..actors.len() {
        for j in (i + 1)..actors.len() {
            if used[i] || used[j] {
                continue;
            }
            let (a, b) = (&actors[i], &actors[j]);
            if a.attached && a.tag == ActorTag::Spell || b.attached && b.tag == ActorTag::Spell {
                continue;
            }
            if !a.tag.reports_contact_with(b.tag) {
                continue;
            }
            if a.position.distance(b.position) <= CONTACT_RADIUS {
                contacts.push(ContactEvent {
                    a: a.actor,
                    b: b.actor,
                    point: (a.position + b.position) * 0.5,
                });
                used[i] = true;
                used[j] = true;
            }
        }
    }
    contacts
}
