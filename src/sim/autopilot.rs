//! Heuristic steering for the computer paddle
//!
//! Two regimes, switched on the vertical gap to the incoming ball: chase
//! the ball's x while it is still far away, then commit to a sideways
//! strike once it is close enough that the bounce gradient matters.

use super::state::{Ball, Controller, Paddle, World};
use super::tick::TickInput;
use crate::settings::Settings;

/// Pick this frame's horizontal speed for a computer paddle
///
/// Only the first ball in play is watched, and only while it travels
/// toward the paddle's side. Beyond the tracking threshold (a fraction of
/// the playfield height) the paddle chases the ball's x, moving exactly
/// the remaining distance up to `track_max_speed`. Inside the threshold it
/// holds a fixed `strike_speed` against the ball's horizontal travel, so
/// the gradient subtracted at the bounce steepens the ball's path instead
/// of straightening it.
pub fn steer(paddle: &Paddle, balls: &[Ball], settings: &Settings) -> f32 {
    let Some(ball) = balls.first() else {
        return 0.0;
    };

    let gap = ball.body.y() - paddle.body.y();
    if gap * ball.body.vel.y >= 0.0 {
        // Receding or drifting level; hold position
        return 0.0;
    }

    if gap.abs() > settings.track_distance_frac * settings.height {
        let chase = ball.body.x() - paddle.body.x();
        chase.clamp(-settings.track_max_speed, settings.track_max_speed)
    } else {
        -settings.strike_speed * ball.body.vel.x.signum()
    }
}

/// Synthesize key state that walks the human paddle under the ball
///
/// Lets the runner play unattended; an interactive host samples the real
/// keyboard instead.
pub fn demo_input(world: &World) -> TickInput {
    let Some(ball) = world.balls.first() else {
        return TickInput::default();
    };
    let Some(player) = world
        .players
        .iter()
        .find(|player| player.controller == Controller::Human)
    else {
        return TickInput::default();
    };

    let gap = ball.body.x() - player.paddle.body.x();
    let deadzone = player.paddle.body.width() / 4.0;
    TickInput {
        left: gap < -deadzone,
        right: gap > deadzone,
    }
}
