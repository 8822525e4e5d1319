use serde::{Deserialize, Serialize};

/// Commands accepted by the background tick loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoopCommand {
    Pause,
    Resume,
    SetFiring(bool),
    /// Nudge the fire rate by `magnitude * 10` shots per minute.
    AdjustFireRate(f32),
    /// Raw wheel input for the shotgun pellet count, 120 per notch.
    AdjustSpread(f32),
    ToggleShotgun,
    Shutdown,
}

/// Per-tick digest of the simulation, suitable for logging or JSON output.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickSummary {
    pub tick: u64,
    pub elapsed_secs: f64,
    pub enemies: u32,
    pub bullets: u32,
    /// Entities removed at this tick's barrier.
    pub destroyed: u32,
    pub contacts: u32,
    pub target_hits: u32,
    pub living_players: u32,
    /// Health of the primary player, if there is one.
    pub player_health: Option<f32>,
}
