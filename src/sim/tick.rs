//! Per-frame world update
//!
//! One call advances every entity exactly one frame. Velocities are in
//! pixels per frame; there is no timestep argument, pacing belongs to the
//! host loop. Once a world is constructed the tick cannot fail.

use super::autopilot;
use super::body::Surface;
use super::collision::{bounce_x, bounce_y, touches};
use super::state::{Controller, Side, World};

/// Sampled key state for one frame
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Move-left key held
    pub left: bool,
    /// Move-right key held
    pub right: bool,
}

impl TickInput {
    /// Steering direction: -1 left, +1 right, 0 when idle or cancelled out
    pub fn steer(&self) -> f32 {
        (self.right as i8 - self.left as i8) as f32
    }
}

/// What one frame did, for the host to react to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameEvents {
    /// A fresh ball was served because none were in play
    pub ball_served: bool,
    /// A ball reversed off a side wall
    pub wall_bounce: bool,
    /// A ball reversed off a paddle
    pub paddle_bounce: bool,
    /// The bottom player's shot landed in the top goal
    pub bottom_scored: bool,
    /// The top player's shot landed in the bottom goal
    pub top_scored: bool,
}

/// Advance the world by one frame
pub fn tick(world: &mut World, input: &TickInput) -> FrameEvents {
    let mut events = FrameEvents::default();
    world.frame += 1;

    // Keep at least one ball in play
    if world.balls.is_empty() {
        world.serve_ball();
        events.ball_served = true;
    }

    // Walls redraw their thickness on a fixed cadence
    let refresh = world.settings.wall_refresh_frames;
    if refresh > 0 && world.frame % refresh == 0 {
        world.rebuild_walls();
    }

    let walls: Vec<&dyn Surface> = world.walls.iter().map(|wall| wall as &dyn Surface).collect();

    // Players: steer, bounce off the side walls, advance, then swallow any
    // ball that reached the goal mouth
    for i in 0..world.players.len() {
        let speed = match world.players[i].controller {
            Controller::Human => input.steer() * world.settings.paddle_speed,
            Controller::Computer => {
                autopilot::steer(&world.players[i].paddle, &world.balls, &world.settings)
            }
        };

        let player = &mut world.players[i];
        player.paddle.body.vel.x = speed;
        bounce_x(&mut player.paddle.body, &walls);
        if player.controller == Controller::Computer {
            // Strike impulses must not leak into vertical drift
            player.paddle.body.vel.y = 0.0;
        }
        player.paddle.body.advance();

        let scorer = player.side.opposite();
        let goal = &mut player.goal;
        world.balls.retain(|ball| {
            if touches(&ball.body, &goal.body) {
                goal.captured += 1;
                match scorer {
                    Side::Bottom => events.bottom_scored = true,
                    Side::Top => events.top_scored = true,
                }
                false
            } else {
                true
            }
        });
    }

    // Balls: bounce off walls, then paddles, then travel
    let paddles: [&dyn Surface; 2] = [&world.players[0].paddle, &world.players[1].paddle];
    for ball in &mut world.balls {
        if bounce_x(&mut ball.body, &walls) > 0 {
            events.wall_bounce = true;
        }
        if bounce_y(&mut ball.body, &paddles) > 0 {
            events.paddle_bounce = true;
        }
        ball.body.advance();
    }

    events
}
