//! Game engine — the core of the simulation.
//!
//! `GameEngine` owns the fixed-capacity missile pools, the plane, the
//! counters, and the half-tick polarity bit, and runs the per-tick
//! collision/scheduling loop. Completely headless: collaborators are
//! passed in as capability traits, enabling deterministic testing.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use barrage_core::config::{SimConfig, Tuning};
use barrage_core::constants::*;
use barrage_core::state::GameSnapshot;
use barrage_core::types::SimTime;

use crate::collision::{self, Blast};
use crate::io::{Display, TouchPanel};
use crate::missile::Missile;
use crate::plane::Plane;
use crate::snapshot;

/// The simulation orchestrator. Owns all entity and score state.
pub struct GameEngine {
    pub(crate) tuning: Tuning,
    pub(crate) time: SimTime,
    pub(crate) enemy_missiles: Vec<Missile>,
    pub(crate) player_missiles: Vec<Missile>,
    pub(crate) plane: Plane,
    pub(crate) plane_missile: Missile,
    pub(crate) rng: ChaCha8Rng,
    pub(crate) shots_fired: u32,
    pub(crate) impacts: u32,
    // Stats values currently on screen, for the erase/redraw protocol.
    shots_displayed: u32,
    impacts_displayed: u32,
    /// Which half of the population advances this tick.
    pub(crate) ticking_enemy: bool,
    /// Reused blast scratch list; cleared each tick, never reallocated
    /// past its high-water mark.
    blast_buffer: Vec<Blast>,
}

impl GameEngine {
    /// Create a new engine with the given config. Call `init` before the
    /// first `tick`.
    pub fn new(config: SimConfig) -> Self {
        Self {
            tuning: Tuning::from_tick_rate(config.tick_hz),
            time: SimTime::default(),
            enemy_missiles: vec![Missile::new_dead(); MAX_ENEMY_MISSILES],
            player_missiles: vec![Missile::new_dead(); MAX_PLAYER_MISSILES],
            plane: Plane::new(),
            plane_missile: Missile::new_dead(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            shots_fired: 0,
            impacts: 0,
            shots_displayed: 0,
            impacts_displayed: 0,
            ticking_enemy: true,
            blast_buffer: Vec::with_capacity(
                MAX_ENEMY_MISSILES + MAX_PLAYER_MISSILES + 1,
            ),
        }
    }

    /// Reset all pools and draw the static scenery and stat labels.
    pub fn init(&mut self, display: &mut dyn Display) {
        for missile in &mut self.enemy_missiles {
            missile.init_enemy(&mut self.rng);
        }
        for missile in &mut self.player_missiles {
            missile.init_dead();
        }
        self.plane = Plane::new();
        self.plane_missile.init_dead();

        display.fill_screen(COLOR_BACKGROUND);
        display.set_text_size(STATS_TEXT_SIZE);
        display.set_text_color(COLOR_STATS_TEXT);
        display.set_cursor(STATS_SHOT_CURSOR_X, STATS_CURSOR_Y);
        display.print("Shot: ");
        display.set_cursor(STATS_IMPACTED_CURSOR_X, STATS_CURSOR_Y);
        display.print("Impacted: ");
    }

    /// Run one simulation step.
    pub fn tick(&mut self, touch: &mut dyn TouchPanel, display: &mut dyn Display) {
        // 1. Recycle: enemy missiles are inexhaustible.
        self.recycle_enemies();
        // 2. Input: at most one player launch per tick.
        self.handle_touch(touch);
        // 3. Collision pass over the full population and the plane,
        //    before anything advances (one-tick detonation latency).
        self.resolve_collisions();
        // 4. Impact bookkeeping.
        self.count_impacts();
        // 5. Half-tick advance, alternating polarity.
        self.advance_half(display);
        // 6. Stats redraw.
        self.redraw_stats(display);

        self.ticking_enemy = !self.ticking_enemy;
        self.time.advance(self.tuning.dt_secs());
    }

    /// Build a serializable view of the current state.
    pub fn snapshot(&self) -> GameSnapshot {
        snapshot::build_snapshot(self)
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn shots_fired(&self) -> u32 {
        self.shots_fired
    }

    pub fn impacts(&self) -> u32 {
        self.impacts
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    fn recycle_enemies(&mut self) {
        for missile in &mut self.enemy_missiles {
            if missile.is_dead() {
                missile.init_enemy(&mut self.rng);
            }
        }
    }

    fn handle_touch(&mut self, touch: &mut dyn TouchPanel) {
        if !touch.released() {
            return;
        }
        // Consume the release exactly once, launch or not.
        let target = touch.location();
        touch.acknowledge();

        // A full pool silently drops the request.
        if let Some(slot) = self.player_missiles.iter_mut().find(|m| m.is_dead()) {
            slot.init_player(target);
            self.shots_fired += 1;
        }
    }

    fn resolve_collisions(&mut self) {
        self.blast_buffer.clear();
        collision::collect_blasts(&mut self.blast_buffer, &self.enemy_missiles);
        collision::collect_blasts(&mut self.blast_buffer, &self.player_missiles);
        collision::collect_blasts(&mut self.blast_buffer, [&self.plane_missile]);

        for missile in self
            .enemy_missiles
            .iter_mut()
            .chain(self.player_missiles.iter_mut())
        {
            if missile.is_flying() && collision::in_blast_zone(missile.position(), &self.blast_buffer)
            {
                missile.request_detonation();
            }
        }
        if self.plane_missile.is_flying()
            && collision::in_blast_zone(self.plane_missile.position(), &self.blast_buffer)
        {
            self.plane_missile.request_detonation();
        }

        if self.plane.is_alive()
            && collision::in_blast_zone(self.plane.position(), &self.blast_buffer)
        {
            self.plane.trigger_explosion();
        }
    }

    fn count_impacts(&mut self) {
        for missile in self
            .enemy_missiles
            .iter_mut()
            .chain(self.player_missiles.iter_mut())
        {
            if missile.take_impact() {
                self.impacts += 1;
            }
        }
        if self.plane_missile.take_impact() {
            self.impacts += 1;
        }
    }

    fn advance_half(&mut self, display: &mut dyn Display) {
        if self.ticking_enemy {
            for missile in &mut self.enemy_missiles {
                missile.tick(&self.tuning, display);
            }
        } else {
            for missile in &mut self.player_missiles {
                missile.tick(&self.tuning, display);
            }
            self.plane.tick(
                &mut self.plane_missile,
                &self.tuning,
                &mut self.rng,
                display,
            );
        }
    }

    fn redraw_stats(&mut self, display: &mut dyn Display) {
        display.set_text_size(STATS_TEXT_SIZE);

        // Erase the previously displayed values.
        display.set_text_color(COLOR_BACKGROUND);
        display.set_cursor(STATS_SHOT_VALUE_CURSOR_X, STATS_CURSOR_Y);
        display.print(&self.shots_displayed.to_string());
        display.set_cursor(STATS_IMPACTED_VALUE_CURSOR_X, STATS_CURSOR_Y);
        display.print(&self.impacts_displayed.to_string());

        // Draw the current values.
        display.set_text_color(COLOR_STATS_TEXT);
        display.set_cursor(STATS_SHOT_VALUE_CURSOR_X, STATS_CURSOR_Y);
        display.print(&self.shots_fired.to_string());
        display.set_cursor(STATS_IMPACTED_VALUE_CURSOR_X, STATS_CURSOR_Y);
        display.print(&self.impacts.to_string());

        self.shots_displayed = self.shots_fired;
        self.impacts_displayed = self.impacts;
    }
}
