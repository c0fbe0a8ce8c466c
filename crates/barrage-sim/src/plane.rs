//! Plane state machine.
//!
//! A single plane patrols right to left at fixed altitude. Halfway across
//! it launches its payload missile (once per life), then either flies off
//! the left edge or is destroyed by a blast; either way it respawns after
//! a fixed delay. The engine owns the payload slot and passes it in each
//! tick.

use log::debug;
use rand_chacha::ChaCha8Rng;

use barrage_core::config::Tuning;
use barrage_core::constants::*;
use barrage_core::enums::PlanePhase;
use barrage_core::types::{px, Color, Vec2};

use crate::io::Display;
use crate::missile::Missile;

#[derive(Debug, Clone)]
pub struct Plane {
    pub(crate) phase: PlanePhase,
    pub(crate) position: Vec2,
    pub(crate) traveled: f32,
    pub(crate) explode_latched: bool,
    pub(crate) launched: bool,
    pub(crate) respawn_cnt: u32,
}

impl Plane {
    pub fn new() -> Self {
        Self {
            phase: PlanePhase::Init,
            position: Vec2::new(DISPLAY_WIDTH, PLANE_ALTITUDE),
            traveled: 0.0,
            explode_latched: false,
            launched: false,
            respawn_cnt: 0,
        }
    }

    /// Advance the plane (and its payload) by one tick.
    pub fn tick(
        &mut self,
        payload: &mut Missile,
        tuning: &Tuning,
        rng: &mut ChaCha8Rng,
        display: &mut dyn Display,
    ) {
        payload.tick(tuning, display);
        self.transition(payload, tuning, rng, display);
        self.advance(tuning, display);
    }

    fn transition(
        &mut self,
        payload: &mut Missile,
        tuning: &Tuning,
        rng: &mut ChaCha8Rng,
        display: &mut dyn Display,
    ) {
        match self.phase {
            PlanePhase::Init => {
                self.traveled = 0.0;
                self.explode_latched = false;
                self.launched = false;
                self.respawn_cnt = 0;
                self.position = Vec2::new(DISPLAY_WIDTH, PLANE_ALTITUDE);
                self.phase = PlanePhase::Flying;
            }
            PlanePhase::Flying => {
                if self.explode_latched || self.traveled >= PLANE_MAX_TRAVEL {
                    self.draw_body(display, COLOR_BACKGROUND);
                    self.phase = PlanePhase::Dead;
                    debug!(
                        "plane down at x={} (exploded: {})",
                        self.position.x, self.explode_latched
                    );
                } else if !self.launched && self.traveled >= PLANE_LAUNCH_TRAVEL {
                    // One payload per life.
                    payload.init_plane(self.position, rng);
                    self.launched = true;
                    debug!("plane payload away at {}", self.position);
                }
            }
            PlanePhase::Dead => {
                if self.respawn_cnt >= tuning.plane_respawn_ticks {
                    self.phase = PlanePhase::Init;
                }
            }
        }
    }

    fn advance(&mut self, tuning: &Tuning, display: &mut dyn Display) {
        match self.phase {
            PlanePhase::Init => {}
            PlanePhase::Flying => {
                self.draw_body(display, COLOR_BACKGROUND);
                self.traveled += tuning.plane_step;
                // Right-to-left only, so position follows travel directly.
                self.position.x = DISPLAY_WIDTH - self.traveled;
                self.draw_body(display, COLOR_PLANE);
            }
            PlanePhase::Dead => {
                self.respawn_cnt += 1;
            }
        }
    }

    /// Latch an explosion signal; consumed on the Flying→Dead transition.
    /// Idempotent within a life, cleared on respawn.
    pub fn trigger_explosion(&mut self) {
        self.explode_latched = true;
    }

    pub fn is_alive(&self) -> bool {
        self.phase == PlanePhase::Flying
    }

    pub fn phase(&self) -> PlanePhase {
        self.phase
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn traveled(&self) -> f32 {
        self.traveled
    }

    /// Nose-forward triangle, pointing in the direction of travel.
    fn draw_body(&self, display: &mut dyn Display, color: Color) {
        display.fill_triangle(
            px(self.position.x),
            px(self.position.y),
            px(self.position.x),
            px(self.position.y + PLANE_HEIGHT),
            px(self.position.x - PLANE_WIDTH),
            px(self.position.y + PLANE_HEIGHT / 2.0),
            color,
        );
    }
}

impl Default for Plane {
    fn default() -> Self {
        Self::new()
    }
}
