//! Core types and definitions for the BARRAGE simulation.
//!
//! This crate defines the vocabulary shared across the other crates:
//! geometric types, enums, tuning constants, configuration, and the
//! snapshot views emitted each tick. It has no dependency on any
//! runtime framework or display backend.

pub mod config;
pub mod constants;
pub mod enums;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
