//! Headless arena demo.
//!
//! Runs a scripted session: the player walks toward a row of targets,
//! shoots, jumps, sprints into a slide, and wall-slides down a wall on
//! the right. Outcomes are logged; pass `--verbose` for per-tick detail.

use std::path::PathBuf;

use clap::Parser;
use glam::Vec3;
use wallrun_engine::ConfigError;
use wallrun_engine::game::{Arena, GameConfig};
use wallrun_engine::input::KeyCode;
use wallrun_engine::logging;
use wallrun_engine::physics::Aabb;
use wallrun_engine::player::{CharacterBody, JumpKind};

/// Scripted first-person arena simulation
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON tuning file (defaults are used for anything it omits)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of ticks to simulate
    #[arg(short, long, default_value_t = 600)]
    ticks: u32,

    /// Seconds per tick
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,

    /// Print the default config as JSON and exit
    #[arg(long)]
    dump_config: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Key presses and releases for one tick of the script.
fn scripted_keys(tick: u32) -> Vec<(KeyCode, bool)> {
    match tick {
        0 => vec![(KeyCode::W, true)],
        30 | 60 | 90 => vec![(KeyCode::MouseLeft, true)],
        31 | 61 | 91 => vec![(KeyCode::MouseLeft, false)],
        120 => vec![(KeyCode::Space, true)],
        121 => vec![(KeyCode::Space, false)],
        200 => vec![(KeyCode::ShiftLeft, true)],
        210 => vec![(KeyCode::AltLeft, true)],
        211 => vec![(KeyCode::AltLeft, false)],
        300 => vec![(KeyCode::ShiftLeft, false), (KeyCode::W, false), (KeyCode::D, true)],
        330 => vec![(KeyCode::Space, true)],
        331 => vec![(KeyCode::Space, false)],
        400 => vec![(KeyCode::D, false), (KeyCode::ControlLeft, true)],
        450 => vec![(KeyCode::ControlLeft, false)],
        _ => Vec::new(),
    }
}

fn build_arena(config: GameConfig) -> Result<Arena, ConfigError> {
    let mut arena = Arena::new(config)?;

    for (i, x) in [-3.0_f32, 0.0, 3.0].into_iter().enumerate() {
        arena.spawn_enemy(&format!("Target {}", i + 1), Vec3::new(x, 0.0, -12.0))?;
    }
    // Long wall on the player's right
    arena.spawn_wall(Aabb::new(
        Vec3::new(2.5, 0.0, -40.0),
        Vec3::new(3.0, 6.0, 10.0),
    ));

    Ok(arena)
}

fn main() -> Result<(), ConfigError> {
    let args = Args::parse();
    logging::init(args.verbose);

    if args.dump_config {
        println!("{}", GameConfig::default().to_json_string()?);
        return Ok(());
    }

    let config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    let mut arena = build_arena(config)?;
    log::info!(
        "Simulating {} ticks at {:.4}s with {} enemies",
        args.ticks,
        args.dt,
        arena.world().enemy_count()
    );

    let mut jumps = 0;
    let mut slides = 0;
    let mut kills = 0;

    for tick in 0..args.ticks {
        for (key, pressed) in scripted_keys(tick) {
            arena.sampler_mut().handle_key(key, pressed);
        }

        let report = arena.step(args.dt);

        if let Some(kind) = report.locomotion.jump {
            jumps += 1;
            let label = match kind {
                JumpKind::Ground => "ground",
                JumpKind::Coyote => "coyote",
                JumpKind::Wall => "wall",
            };
            log::info!("Tick {tick}: {label} jump");
        }
        if report.locomotion.slide_started {
            slides += 1;
            log::info!("Tick {tick}: slide");
        }
        if let Some(shot) = report.shot {
            match (shot.hit, shot.damage) {
                (Some(hit), Some(damage)) => log::info!(
                    "Tick {tick}: hit {} at {:.1}m for {damage:.1}",
                    hit.entity,
                    hit.distance
                ),
                _ => log::info!("Tick {tick}: miss"),
            }
        }
        kills += report.destroyed;
    }

    let body = arena.body().position();
    log::info!(
        "Done: {jumps} jumps, {slides} slides, {} shots, {kills} kills, {} enemies left",
        arena.weapon().shots_fired(),
        arena.world().enemy_count()
    );
    log::info!(
        "Player at ({:.2}, {:.2}, {:.2}), fov {:.1}",
        body.x,
        body.y,
        body.z,
        arena.camera().field_of_view
    );

    Ok(())
}
