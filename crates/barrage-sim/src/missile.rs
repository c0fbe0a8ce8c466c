//! Missile state machine.
//!
//! One missile flies from a fixed origin to a fixed destination by linear
//! interpolation, then detonates into a growing/shrinking blast circle.
//! Each tick runs an explicit transition step followed by an action step
//! on the updated phase, so a detonation requested by the collision pass
//! becomes visible on the missile's *next* tick, never the same one.

use log::debug;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use barrage_core::config::Tuning;
use barrage_core::constants::*;
use barrage_core::enums::{MissileKind, MissilePhase};
use barrage_core::types::{px, Color, Vec2};

use crate::io::Display;

/// A single flying/exploding entity: player shot, enemy shot, or the
/// plane's payload.
#[derive(Debug, Clone)]
pub struct Missile {
    pub(crate) kind: MissileKind,
    pub(crate) phase: MissilePhase,
    pub(crate) origin: Vec2,
    pub(crate) dest: Vec2,
    pub(crate) position: Vec2,
    pub(crate) traveled: f32,
    pub(crate) total_distance: f32,
    pub(crate) blast_radius: f32,
    pub(crate) explode_requested: bool,
    pub(crate) impacted: bool,
}

impl Missile {
    /// A dead missile occupying a pool slot before its first launch.
    pub fn new_dead() -> Self {
        Self {
            kind: MissileKind::Plane,
            phase: MissilePhase::Dead,
            origin: Vec2::ZERO,
            dest: Vec2::ZERO,
            position: Vec2::ZERO,
            traveled: 0.0,
            total_distance: 0.0,
            blast_radius: 0.0,
            explode_requested: false,
            impacted: false,
        }
    }

    /// Reinitialize as a dead missile. Used to pre-populate pools so
    /// player and payload slots aren't moving before they should.
    pub fn init_dead(&mut self) {
        self.kind = MissileKind::Plane;
        self.origin = Vec2::ZERO;
        self.dest = Vec2::ZERO;
        self.phase = MissilePhase::Dead;
    }

    /// Reinitialize as an enemy missile: random origin near the top of
    /// the screen, random x destination on the ground line.
    pub fn init_enemy(&mut self, rng: &mut ChaCha8Rng) {
        let origin = Vec2::new(
            rng.gen_range(0.0..DISPLAY_WIDTH),
            rng.gen_range(0.0..ENEMY_SPAWN_BAND),
        );
        let dest = Vec2::new(rng.gen_range(0.0..DISPLAY_WIDTH), DISPLAY_HEIGHT);
        self.init(MissileKind::Enemy, origin, dest);
    }

    /// Reinitialize as a player missile aimed at the touched location.
    /// The origin is the launch site nearest to the destination by
    /// x-distance (ties resolve to the leftmost site).
    pub fn init_player(&mut self, dest: Vec2) {
        let mut site = LAUNCH_SITES[0];
        for candidate in LAUNCH_SITES {
            if (candidate.x - dest.x).abs() < (site.x - dest.x).abs() {
                site = candidate;
            }
        }
        self.init(MissileKind::Player, site, dest);
    }

    /// Reinitialize as the plane's payload, dropped from the plane's
    /// current position toward a random x on the ground line.
    pub fn init_plane(&mut self, origin: Vec2, rng: &mut ChaCha8Rng) {
        let dest = Vec2::new(rng.gen_range(0.0..DISPLAY_WIDTH), DISPLAY_HEIGHT);
        self.init(MissileKind::Plane, origin, dest);
    }

    pub(crate) fn init(&mut self, kind: MissileKind, origin: Vec2, dest: Vec2) {
        self.kind = kind;
        self.origin = origin;
        self.dest = dest;
        self.phase = MissilePhase::Init;
    }

    /// Signal a flying missile to detonate. Consumed by the missile's own
    /// transition logic on its next tick.
    pub fn request_detonation(&mut self) {
        self.explode_requested = true;
    }

    /// Advance the state machine by one tick: transition, then act on the
    /// resulting phase.
    pub fn tick(&mut self, tuning: &Tuning, display: &mut dyn Display) {
        self.transition(tuning, display);
        self.advance(tuning, display);
    }

    fn transition(&mut self, tuning: &Tuning, display: &mut dyn Display) {
        match self.phase {
            MissilePhase::Init => {
                // Mealy-style: reset derived state on the way into Flying
                // so a reinitialized slot is clean even when it starts
                // moving this same tick.
                self.traveled = 0.0;
                self.total_distance = self.origin.distance(self.dest);
                self.position = self.origin;
                self.blast_radius = 0.0;
                self.explode_requested = false;
                self.impacted = false;
                self.phase = MissilePhase::Flying;
            }
            MissilePhase::Flying => {
                let arrived =
                    self.kind == MissileKind::Player && self.traveled >= self.total_distance;
                if self.explode_requested || arrived {
                    self.erase_line(display);
                    self.phase = MissilePhase::ExplodeGrow;
                    debug!("{:?} missile detonating at {}", self.kind, self.position);
                } else if self.kind != MissileKind::Player && self.position.y >= GROUND_Y {
                    self.erase_line(display);
                    self.impacted = true;
                    self.phase = MissilePhase::Dead;
                    debug!("{:?} missile impacted at x={}", self.kind, self.position.x);
                }
            }
            MissilePhase::ExplodeGrow => {
                if self.blast_radius >= tuning.blast_max {
                    self.phase = MissilePhase::ExplodeShrink;
                }
            }
            MissilePhase::ExplodeShrink => {
                if self.blast_radius <= 0.0 {
                    self.phase = MissilePhase::Dead;
                }
            }
            MissilePhase::Dead => {}
        }
    }

    fn advance(&mut self, tuning: &Tuning, display: &mut dyn Display) {
        match self.phase {
            MissilePhase::Init | MissilePhase::Dead => {}
            MissilePhase::Flying => {
                self.erase_line(display);
                self.traveled += self.step(tuning);
                // Zero-length flights (touch on a launch site) resolve to
                // the destination outright.
                let t = if self.total_distance > 0.0 {
                    (self.traveled / self.total_distance).clamp(0.0, 1.0)
                } else {
                    1.0
                };
                self.position = self.origin.lerp(self.dest, t);
                self.draw_line(display, self.color());
            }
            MissilePhase::ExplodeGrow => {
                self.blast_radius = (self.blast_radius + tuning.blast_step).min(tuning.blast_max);
                display.fill_circle(
                    px(self.position.x),
                    px(self.position.y),
                    px(self.blast_radius),
                    self.color(),
                );
            }
            MissilePhase::ExplodeShrink => {
                display.fill_circle(
                    px(self.position.x),
                    px(self.position.y),
                    px(self.blast_radius),
                    COLOR_BACKGROUND,
                );
                self.blast_radius = (self.blast_radius - tuning.blast_step).max(0.0);
                if self.blast_radius > 0.0 {
                    display.fill_circle(
                        px(self.position.x),
                        px(self.position.y),
                        px(self.blast_radius),
                        self.color(),
                    );
                }
            }
        }
    }

    pub fn is_dead(&self) -> bool {
        self.phase == MissilePhase::Dead
    }

    /// True in either explosion sub-phase. The collision resolver treats
    /// any exploding missile as a hazard source.
    pub fn is_exploding(&self) -> bool {
        matches!(
            self.phase,
            MissilePhase::ExplodeGrow | MissilePhase::ExplodeShrink
        )
    }

    pub fn is_flying(&self) -> bool {
        self.phase == MissilePhase::Flying
    }

    pub fn kind(&self) -> MissileKind {
        self.kind
    }

    pub fn phase(&self) -> MissilePhase {
        self.phase
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn blast_radius(&self) -> f32 {
        self.blast_radius
    }

    /// Return the impact flag and clear it, so each ground impact is
    /// counted exactly once.
    pub fn take_impact(&mut self) -> bool {
        std::mem::take(&mut self.impacted)
    }

    fn step(&self, tuning: &Tuning) -> f32 {
        match self.kind {
            MissileKind::Player => tuning.player_step,
            MissileKind::Enemy | MissileKind::Plane => tuning.enemy_step,
        }
    }

    fn color(&self) -> Color {
        match self.kind {
            MissileKind::Player => COLOR_PLAYER,
            MissileKind::Enemy => COLOR_ENEMY,
            MissileKind::Plane => COLOR_PLANE,
        }
    }

    fn draw_line(&self, display: &mut dyn Display, color: Color) {
        display.draw_line(
            px(self.origin.x),
            px(self.origin.y),
            px(self.position.x),
            px(self.position.y),
            color,
        );
    }

    fn erase_line(&self, display: &mut dyn Display) {
        self.draw_line(display, COLOR_BACKGROUND);
    }
}
