//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Who launched a missile. Determines color, speed, and whether the
/// missile self-detonates at its destination or only when struck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MissileKind {
    /// Fired from a launch site toward a touched location; self-detonates
    /// on arrival.
    Player,
    /// Spawned near the top of the screen, falling toward the ground line.
    Enemy,
    /// Launched mid-flight by the plane; behaves like an enemy missile.
    Plane,
}

/// Missile lifecycle phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissilePhase {
    /// Freshly (re)initialized; derived state is reset on the first tick.
    Init,
    /// In flight along the origin→destination segment.
    Flying,
    /// Detonated; blast radius growing toward the max.
    ExplodeGrow,
    /// Blast radius shrinking back to zero.
    ExplodeShrink,
    /// Terminal for this life; eligible for reinitialization.
    #[default]
    Dead,
}

/// Plane lifecycle phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanePhase {
    /// About to (re)enter from the right edge.
    #[default]
    Init,
    /// Patrolling right to left.
    Flying,
    /// Destroyed or flown off-screen; waiting out the respawn delay.
    Dead,
}
