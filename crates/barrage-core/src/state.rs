//! Game state snapshot — the complete observable state emitted each tick.
//!
//! Snapshots exist for frontends and for tests: two engines with the same
//! seed and the same input script must produce byte-identical snapshot
//! JSON streams.

use serde::{Deserialize, Serialize};

use crate::enums::{MissileKind, MissilePhase, PlanePhase};
use crate::types::{SimTime, Vec2};

/// Complete observable simulation state after one tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub time: SimTime,
    /// Player missiles launched so far.
    pub shots_fired: u32,
    /// Ground impacts sustained from non-player missiles.
    pub impacts: u32,
    /// Every missile slot: enemies first, then players, then the payload.
    pub missiles: Vec<MissileView>,
    pub plane: PlaneView,
}

/// One missile slot as seen from outside.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissileView {
    pub kind: MissileKind,
    pub phase: MissilePhase,
    pub position: Vec2,
    pub blast_radius: f32,
}

/// The plane as seen from outside.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaneView {
    pub phase: PlanePhase,
    pub position: Vec2,
    pub traveled: f32,
}
