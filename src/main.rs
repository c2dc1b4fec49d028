//! Tilt Pong entry point
//!
//! Runs the simulation headless in attract mode: the autopilot drives the
//! human paddle through the same key-state input a player would produce.

use std::path::Path;
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use tilt_pong::sim::{Side, autopilot, tick};
use tilt_pong::{Settings, World};

fn main() {
    env_logger::init();
    log::info!("Tilt Pong (headless) starting...");

    let settings = Settings::load_or_default(Path::new("tilt-pong.json"));
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or(0);

    let mut world = match World::new(&settings, seed) {
        Ok(world) => world,
        Err(err) => {
            log::error!("Invalid settings: {err}");
            std::process::exit(1);
        }
    };
    log::info!(
        "Started new game with seed: {} ({}x{} field)",
        seed,
        world.width,
        world.height
    );

    // Optional frame cap for bounded demo runs
    let frame_cap = std::env::var("TILT_PONG_FRAMES")
        .ok()
        .and_then(|frames| frames.parse::<u64>().ok());
    let frame_budget = Duration::from_secs_f32(1.0 / settings.frame_rate.max(1.0));

    loop {
        let input = autopilot::demo_input(&world);
        let events = tick(&mut world, &input);

        if events.ball_served {
            log::debug!("Serving a new ball");
        }
        if events.bottom_scored || events.top_scored {
            log::info!(
                "Score: human {} - {} computer",
                world.score(Side::Bottom),
                world.score(Side::Top)
            );
        }

        if let Some(cap) = frame_cap {
            if world.frame >= cap {
                break;
            }
        }
        thread::sleep(frame_budget);
    }

    log::info!(
        "Stopped after {} frames: human {} - {} computer",
        world.frame,
        world.score(Side::Bottom),
        world.score(Side::Top)
    );
}
