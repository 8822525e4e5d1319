//! Game loop thread: runs a [`Driver`] at its fixed tick rate.
//!
//! The driver is created inside the thread. Commands arrive over an `mpsc`
//! channel; the latest tick summary is stored in shared state for polling.

use std::io;
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::{info, warn};

use horde_sim::SimError;

use crate::config::DriverConfig;
use crate::driver::Driver;
use crate::state::{LoopCommand, TickSummary};

/// Handle for talking to a running tick loop.
pub struct GameLoop {
    command_tx: mpsc::Sender<LoopCommand>,
    latest: Arc<Mutex<Option<TickSummary>>>,
    thread: JoinHandle<Result<(), SimError>>,
}

impl GameLoop {
    pub fn send_command(&self, cmd: LoopCommand) {
        self.command_tx.send(cmd).ok();
    }

    /// Summary of the most recent tick, if one has run.
    pub fn latest(&self) -> Option<TickSummary> {
        self.latest.lock().ok().and_then(|summary| summary.clone())
    }

    /// Ask the loop to stop and wait for it. Returns the loop's fault, if any.
    pub fn shutdown(self) -> Result<(), SimError> {
        self.send_command(LoopCommand::Shutdown);
        match self.thread.join() {
            Ok(result) => result,
            Err(_) => {
                warn!("game loop thread panicked");
                Ok(())
            }
        }
    }
}

/// Start the tick loop on a background thread at the configured rate.
pub fn spawn_game_loop(config: DriverConfig) -> io::Result<GameLoop> {
    let (tx, rx) = mpsc::channel();
    let latest = Arc::new(Mutex::new(None));
    let shared = Arc::clone(&latest);

    let thread = thread::Builder::new()
        .name("horde-game-loop".into())
        .spawn(move || run_loop(rx, Driver::new(config), shared))?;

    Ok(GameLoop {
        command_tx: tx,
        latest,
        thread,
    })
}

/// Runs until `Shutdown`, channel disconnect, or a failed tick.
fn run_loop(
    rx: mpsc::Receiver<LoopCommand>,
    mut driver: Driver,
    latest: Arc<Mutex<Option<TickSummary>>>,
) -> Result<(), SimError> {
    let tick_duration = Duration::from_secs_f32(driver.dt());
    let mut next_tick_time = Instant::now();
    info!(?tick_duration, "game loop started");

    loop {
        loop {
            match rx.try_recv() {
                Ok(cmd) => {
                    if !apply_command(&mut driver, cmd) {
                        info!(tick = driver.sim().time().tick, "game loop stopped");
                        return Ok(());
                    }
                }
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return Ok(()),
            }
        }

        if !driver.is_paused() {
            let summary = driver.step().inspect_err(|e| {
                warn!(error = %e, "tick failed, stopping loop");
            })?;
            if let Ok(mut slot) = latest.lock() {
                *slot = Some(summary);
            }
        }

        next_tick_time += tick_duration;
        let now = Instant::now();
        if next_tick_time > now {
            thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > tick_duration * 2 {
            // Too far behind, skip ahead instead of bursting
            next_tick_time = now;
        }
    }
}

/// Returns false once the loop should exit.
fn apply_command(driver: &mut Driver, cmd: LoopCommand) -> bool {
    match cmd {
        LoopCommand::Pause => driver.set_paused(true),
        LoopCommand::Resume => driver.set_paused(false),
        LoopCommand::SetFiring(true) => driver.gun_mut().start_firing(),
        LoopCommand::SetFiring(false) => driver.gun_mut().stop_firing(),
        LoopCommand::AdjustFireRate(magnitude) => driver.gun_mut().adjust_fire_rate(magnitude),
        LoopCommand::AdjustSpread(wheel) => driver.gun_mut().adjust_spread_input(wheel),
        LoopCommand::ToggleShotgun => driver.gun_mut().toggle_shotgun(),
        LoopCommand::Shutdown => return false,
    }
    true
}
