//! Headless demo runner — drives the engine at the configured tick rate
//! and prints a snapshot once per second.
//!
//! Stands in for the timer-interrupt clock of the real hardware: the
//! engine itself never sleeps, the pacing here owns the wait between
//! ticks.

use std::time::{Duration, Instant};

use log::info;

use barrage_core::config::SimConfig;
use barrage_sim::io::{NullDisplay, NullTouch};
use barrage_sim::GameEngine;

/// Nominal duration of one tick at the default rate.
const TICK_DURATION: Duration =
    Duration::from_nanos(1_000_000_000 / barrage_core::constants::TICK_RATE as u64);

fn main() {
    env_logger::init();

    let ticks: u64 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(300);

    let config = SimConfig::default();
    let mut engine = GameEngine::new(config);
    let mut display = NullDisplay;
    let mut touch = NullTouch;

    engine.init(&mut display);
    info!("running {ticks} ticks at {}Hz", config.tick_hz);

    let snapshot_interval = config.tick_hz as u64;
    let mut next_tick_time = Instant::now();

    for _ in 0..ticks {
        engine.tick(&mut touch, &mut display);

        if engine.time().tick % snapshot_interval == 0 {
            match serde_json::to_string(&engine.snapshot()) {
                Ok(json) => println!("{json}"),
                Err(err) => eprintln!("snapshot serialization failed: {err}"),
            }
        }

        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind; reset to avoid a catch-up spiral.
            next_tick_time = now;
        }
    }

    info!(
        "done: {} shots fired, {} impacts",
        engine.shots_fired(),
        engine.impacts()
    );
}
