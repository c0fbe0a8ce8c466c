//! Collision resolution: radius-based blast containment.
//!
//! Pure helpers over plain data. The engine gathers the blast set once
//! per tick (before anything moves), then tests every candidate against
//! it, so a detonation triggered this tick takes effect on the victim's
//! next tick.

use barrage_core::types::Vec2;

use crate::missile::Missile;

/// One hazard source: an exploding missile's blast circle, frozen at the
/// moment the collision pass runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Blast {
    pub center: Vec2,
    pub radius: f32,
}

/// Append the blast circles of every exploding missile to `buf`.
/// The buffer is reused across ticks; the caller clears it.
pub fn collect_blasts<'a>(buf: &mut Vec<Blast>, missiles: impl IntoIterator<Item = &'a Missile>) {
    for missile in missiles {
        if missile.is_exploding() {
            buf.push(Blast {
                center: missile.position(),
                radius: missile.blast_radius(),
            });
        }
    }
}

/// True if the position lies within any blast circle (boundary included).
pub fn in_blast_zone(position: Vec2, blasts: &[Blast]) -> bool {
    blasts
        .iter()
        .any(|blast| position.distance(blast.center) <= blast.radius)
}
