//! Simulation configuration and per-tick tuning.
//!
//! Real-time constants live in `constants` as pixels/seconds; the engine
//! runs on per-tick increments. `Tuning` performs that conversion exactly
//! once, at configuration time, so the tick loop never divides by the
//! tick rate.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed + same input = same simulation.
    pub seed: u64,
    /// Tick rate the clock collaborator will drive the engine at (Hz).
    pub tick_hz: u32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tick_hz: TICK_RATE,
        }
    }
}

/// Per-tick step sizes derived from the real-time rates in `constants`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Tick rate the steps were derived for (Hz).
    pub tick_hz: u32,
    /// Player missile flight distance per tick (pixels).
    pub player_step: f32,
    /// Enemy and plane-payload missile flight distance per tick (pixels).
    pub enemy_step: f32,
    /// Plane travel per tick (pixels).
    pub plane_step: f32,
    /// Blast radius growth/shrink per tick (pixels).
    pub blast_step: f32,
    /// Maximum blast radius (pixels).
    pub blast_max: f32,
    /// Plane respawn delay in plane ticks.
    pub plane_respawn_ticks: u32,
}

impl Tuning {
    /// Derive per-tick steps for the given tick rate.
    pub fn from_tick_rate(tick_hz: u32) -> Self {
        let dt = 1.0 / tick_hz as f32;
        Self {
            tick_hz,
            player_step: PLAYER_MISSILE_SPEED * dt,
            enemy_step: ENEMY_MISSILE_SPEED * dt,
            plane_step: PLANE_SPEED * dt,
            blast_step: BLAST_RADIUS_RATE * dt,
            blast_max: BLAST_MAX_RADIUS,
            plane_respawn_ticks: (PLANE_RESPAWN_DELAY_SECS * tick_hz as f32).round() as u32,
        }
    }

    /// Seconds per tick.
    pub fn dt_secs(&self) -> f64 {
        1.0 / self.tick_hz as f64
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self::from_tick_rate(TICK_RATE)
    }
}
