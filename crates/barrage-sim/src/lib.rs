//! Simulation engine for BARRAGE.
//!
//! Owns the fixed-capacity missile pools and the plane, runs the
//! collision/scheduling loop at a fixed tick rate, and produces
//! `GameSnapshot`s. Completely headless: the display and touch panel
//! are capability traits implemented by collaborators, enabling
//! deterministic testing.

pub mod collision;
pub mod engine;
pub mod io;
pub mod missile;
pub mod plane;
pub mod snapshot;

pub use barrage_core as core;
pub use engine::GameEngine;
