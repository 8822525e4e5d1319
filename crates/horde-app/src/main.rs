use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use horde_app::config::DriverConfig;
use horde_app::driver::Driver;
use horde_app::game_loop;

#[derive(Parser, Debug)]
#[command(author, version, about = "Headless HORDE simulation runner", long_about = None)]
struct Args {
    /// Number of ticks to run.
    #[arg(short, long, default_value_t = 500)]
    ticks: u64,

    /// TOML driver config. Defaults apply for anything it leaves out.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Resolve collisions from physics contact events.
    #[arg(long)]
    physics: bool,

    /// Contact radius for the simplified collision backend.
    #[arg(long)]
    radius: Option<f32>,

    /// Print one JSON tick summary per line.
    #[arg(long)]
    json: bool,

    /// Run on the background loop at the configured tick rate.
    #[arg(long)]
    realtime: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => DriverConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => DriverConfig::default(),
    };
    if args.physics {
        config.sim.collision.use_physics = true;
    }
    if let Some(radius) = args.radius {
        config.sim.collision.simple_radius = radius;
    }

    if args.realtime {
        return run_realtime(config, &args);
    }

    let mut driver = Driver::new(config);
    let mut last = None;
    for _ in 0..args.ticks {
        let summary = driver.step()?;
        if args.json {
            println!("{}", serde_json::to_string(&summary)?);
        }
        last = Some(summary);
    }

    if let Some(summary) = last {
        tracing::info!(
            tick = summary.tick,
            enemies = summary.enemies,
            bullets = summary.bullets,
            player_health = ?summary.player_health,
            "run complete"
        );
    }
    Ok(())
}

fn run_realtime(config: DriverConfig, args: &Args) -> anyhow::Result<()> {
    let run_for = realtime_duration(args.ticks, config.tick_rate);
    let game = game_loop::spawn_game_loop(config).context("starting game loop")?;

    thread::sleep(run_for);

    let summary = game.latest();
    game.shutdown()?;

    if let Some(summary) = summary {
        if args.json {
            println!("{}", serde_json::to_string(&summary)?);
        }
        tracing::info!(tick = summary.tick, "realtime run complete");
    }
    Ok(())
}

/// Wall-clock time `ticks` take at `tick_rate` ticks per second.
fn realtime_duration(ticks: u64, tick_rate: u32) -> Duration {
    Duration::from_millis(ticks.saturating_mul(1000) / tick_rate.max(1) as u64)
}
