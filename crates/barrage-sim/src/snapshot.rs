//! Builds the per-tick `GameSnapshot` from engine state.

use barrage_core::state::{GameSnapshot, MissileView, PlaneView};

use crate::engine::GameEngine;
use crate::missile::Missile;

/// Assemble the observable state: counters, every missile slot (enemies,
/// then players, then the payload), and the plane.
pub fn build_snapshot(engine: &GameEngine) -> GameSnapshot {
    let mut missiles =
        Vec::with_capacity(engine.enemy_missiles.len() + engine.player_missiles.len() + 1);
    missiles.extend(engine.enemy_missiles.iter().map(missile_view));
    missiles.extend(engine.player_missiles.iter().map(missile_view));
    missiles.push(missile_view(&engine.plane_missile));

    GameSnapshot {
        time: engine.time,
        shots_fired: engine.shots_fired,
        impacts: engine.impacts,
        missiles,
        plane: PlaneView {
            phase: engine.plane.phase(),
            position: engine.plane.position(),
            traveled: engine.plane.traveled(),
        },
    }
}

fn missile_view(missile: &Missile) -> MissileView {
    MissileView {
        kind: missile.kind(),
        phase: missile.phase(),
        position: missile.position(),
        blast_radius: missile.blast_radius(),
    }
}
