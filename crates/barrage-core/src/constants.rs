//! Simulation constants and tuning parameters.
//!
//! Real-time rates are expressed in pixels per second; `config::Tuning`
//! converts them to per-tick steps for a given tick rate.

use crate::types::{Color, Vec2};

/// Default simulation tick rate (Hz).
pub const TICK_RATE: u32 = 30;

// --- Screen geometry ---

/// Display width in pixels.
pub const DISPLAY_WIDTH: f32 = 320.0;

/// Display height in pixels.
pub const DISPLAY_HEIGHT: f32 = 240.0;

/// Ground line: a non-player missile reaching this y has impacted.
pub const GROUND_Y: f32 = DISPLAY_HEIGHT;

/// Enemy missiles spawn with a random y in the top fifth of the screen.
pub const ENEMY_SPAWN_BAND: f32 = DISPLAY_HEIGHT / 5.0;

/// The three player launch sites, evenly spaced along the bottom edge.
pub const LAUNCH_SITES: [Vec2; 3] = [
    Vec2::new(DISPLAY_WIDTH / 4.0, DISPLAY_HEIGHT),
    Vec2::new(DISPLAY_WIDTH / 2.0, DISPLAY_HEIGHT),
    Vec2::new(3.0 * DISPLAY_WIDTH / 4.0, DISPLAY_HEIGHT),
];

// --- Pools ---

/// Fixed capacity of the enemy missile pool.
pub const MAX_ENEMY_MISSILES: usize = 7;

/// Fixed capacity of the player missile pool.
pub const MAX_PLAYER_MISSILES: usize = 4;

// --- Missile kinematics (pixels per second) ---

/// Player missile flight speed.
pub const PLAYER_MISSILE_SPEED: f32 = 240.0;

/// Enemy (and plane payload) missile flight speed.
pub const ENEMY_MISSILE_SPEED: f32 = 45.0;

// --- Explosions ---

/// Maximum blast radius in pixels.
pub const BLAST_MAX_RADIUS: f32 = 25.0;

/// Blast radius growth/shrink rate (pixels per second).
pub const BLAST_RADIUS_RATE: f32 = 60.0;

// --- Plane ---

/// Plane cruise speed (pixels per second), right to left.
pub const PLANE_SPEED: f32 = 30.0;

/// Altitude of the plane's flight path.
pub const PLANE_ALTITUDE: f32 = DISPLAY_HEIGHT / 4.0;

/// Total travel before the plane leaves the screen.
pub const PLANE_MAX_TRAVEL: f32 = DISPLAY_WIDTH;

/// Travel at which the plane launches its payload missile.
pub const PLANE_LAUNCH_TRAVEL: f32 = DISPLAY_WIDTH / 2.0;

/// Delay between the plane dying and respawning (seconds).
pub const PLANE_RESPAWN_DELAY_SECS: f32 = 3.0;

/// Rendered plane body width in pixels (triangle, nose to tail).
pub const PLANE_WIDTH: f32 = 20.0;

/// Rendered plane body height in pixels.
pub const PLANE_HEIGHT: f32 = 10.0;

// --- Colors (RGB565) ---

pub const COLOR_BACKGROUND: Color = 0x0000;
pub const COLOR_PLAYER: Color = 0x07E0;
pub const COLOR_ENEMY: Color = 0xF800;
pub const COLOR_PLANE: Color = 0xFFFF;
pub const COLOR_STATS_TEXT: Color = 0xFFFF;

// --- Stats display ---

/// Text size for the stats row.
pub const STATS_TEXT_SIZE: u8 = 1;

/// Cursor y for the stats row.
pub const STATS_CURSOR_Y: i32 = 5;

/// Cursor x for the "Shot:" label and its value.
pub const STATS_SHOT_CURSOR_X: i32 = 10;
pub const STATS_SHOT_VALUE_CURSOR_X: i32 = 50;

/// Cursor x for the "Impacted:" label and its value.
pub const STATS_IMPACTED_CURSOR_X: i32 = 170;
pub const STATS_IMPACTED_VALUE_CURSOR_X: i32 = 236;
