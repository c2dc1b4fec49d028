//! World state and the entities that live in it
//!
//! The playfield uses a bottom-left origin with y growing upward. The
//! human defends the bottom edge, the computer the top; randomized walls
//! close the sides. All construction-time validation happens here so the
//! frame loop never has to handle an error.

use std::fmt;

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::body::{Body, BodyError, Surface};
use crate::settings::Settings;

/// Which edge of the playfield a player defends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Bottom,
    Top,
}

impl Side {
    /// The edge this player shoots at
    pub fn opposite(self) -> Side {
        match self {
            Side::Bottom => Side::Top,
            Side::Top => Side::Bottom,
        }
    }
}

/// Who steers a paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controller {
    /// Driven by the sampled key state
    Human,
    /// Driven by the autopilot heuristic
    Computer,
}

/// A ball in flight
#[derive(Debug, Clone)]
pub struct Ball {
    pub body: Body,
}

impl Ball {
    pub fn new(center: Vec2, radius: f32, vel: Vec2) -> Result<Self, BodyError> {
        Ok(Self {
            body: Body::with_vel(center, Vec2::splat(radius * 2.0), vel)?,
        })
    }

    /// Half the ball's extent
    #[inline]
    pub fn radius(&self) -> f32 {
        self.body.width() / 2.0
    }
}

/// A player's bat
#[derive(Debug, Clone)]
pub struct Paddle {
    pub body: Body,
}

impl Surface for Paddle {
    fn body(&self) -> &Body {
        &self.body
    }

    /// A sliding paddle acts like a slope: its own sideways speed is the
    /// gradient the bounce resolver subtracts from the ball.
    fn gradient(&self, _at: f32) -> f32 {
        self.body.vel.x
    }
}

/// A side wall; flat, so it only reverses travel
#[derive(Debug, Clone)]
pub struct Wall {
    pub body: Body,
}

impl Surface for Wall {
    fn body(&self) -> &Body {
        &self.body
    }
}

/// The scoring strip along the top or bottom edge
#[derive(Debug, Clone)]
pub struct Goal {
    pub body: Body,
    /// Balls this goal has swallowed; each one scored for the opponent
    pub captured: u32,
}

/// One participant: a paddle to steer and a goal to defend
#[derive(Debug, Clone)]
pub struct Player {
    pub side: Side,
    pub controller: Controller,
    pub paddle: Paddle,
    pub goal: Goal,
}

impl Player {
    fn new(side: Side, controller: Controller, settings: &Settings) -> Result<Self, BodyError> {
        let mid_x = settings.width / 2.0;
        let paddle_y = match side {
            Side::Bottom => settings.paddle_inset,
            Side::Top => settings.height - settings.paddle_inset,
        };
        let goal_y = match side {
            Side::Bottom => 0.0,
            Side::Top => settings.height,
        };
        Ok(Self {
            side,
            controller,
            paddle: Paddle {
                body: Body::new(Vec2::new(mid_x, paddle_y), settings.paddle_size)?,
            },
            goal: Goal {
                body: Body::new(
                    Vec2::new(mid_x, goal_y),
                    Vec2::new(settings.width, settings.goal_depth),
                )?,
                captured: 0,
            },
        })
    }
}

/// Rejected world configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorldError {
    /// A body failed geometric validation
    Body(BodyError),
    /// The wall thickness range is empty, sub-pixel, or non-finite
    WallRange,
    /// A paddle speed is non-finite, or the chase cap is negative
    Tuning,
}

impl fmt::Display for WorldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorldError::Body(err) => write!(f, "invalid body: {err}"),
            WorldError::WallRange => {
                write!(f, "wall thickness range must be ordered and at least one pixel")
            }
            WorldError::Tuning => {
                write!(f, "paddle speeds must be finite and the chase cap non-negative")
            }
        }
    }
}

impl std::error::Error for WorldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WorldError::Body(err) => Some(err),
            _ => None,
        }
    }
}

impl From<BodyError> for WorldError {
    fn from(err: BodyError) -> Self {
        WorldError::Body(err)
    }
}

/// Complete simulation state
pub struct World {
    /// Playfield width in pixels
    pub width: f32,
    /// Playfield height in pixels
    pub height: f32,
    /// Frames simulated since construction
    pub frame: u64,
    /// Seed the wall layout draws from, kept for reproducibility
    pub seed: u64,
    pub balls: Vec<Ball>,
    pub players: [Player; 2],
    pub walls: Vec<Wall>,
    pub(crate) settings: Settings,
    serve_body: Body,
    wall_min: f32,
    wall_max: f32,
    rng: Pcg32,
}

impl World {
    /// Build a world from validated settings
    ///
    /// Everything the frame loop will ever construct is vetted here: the
    /// serve template, both players' bodies, the full-height wall shape,
    /// and the thickness range later rebuilds draw from.
    pub fn new(settings: &Settings, seed: u64) -> Result<Self, WorldError> {
        let serve_body = Body::with_vel(
            settings.serve_position,
            Vec2::splat(settings.ball_radius * 2.0),
            settings.serve_velocity,
        )?;

        // Steering feeds these straight into clamps and signs every frame
        if !(settings.paddle_speed.is_finite()
            && settings.strike_speed.is_finite()
            && settings.track_max_speed.is_finite()
            && settings.track_max_speed >= 0.0)
        {
            return Err(WorldError::Tuning);
        }

        let wall_min = settings.wall_thickness_min.round();
        let wall_max = settings.wall_thickness_max.round();
        if !(wall_min >= 1.0 && wall_max >= wall_min) || !wall_max.is_finite() {
            return Err(WorldError::WallRange);
        }
        // Every rebuild draws a thickness in [wall_min, wall_max] for this
        // shape, so one probe makes all of them valid.
        Body::new(
            Vec2::new(0.0, settings.height / 2.0),
            Vec2::new(wall_min, settings.height),
        )?;

        let players = [
            Player::new(Side::Bottom, Controller::Human, settings)?,
            Player::new(Side::Top, Controller::Computer, settings)?,
        ];

        let mut world = Self {
            width: settings.width,
            height: settings.height,
            frame: 0,
            seed,
            balls: Vec::new(),
            players,
            walls: Vec::with_capacity(2),
            settings: settings.clone(),
            serve_body,
            wall_min,
            wall_max,
            rng: Pcg32::seed_from_u64(seed),
        };
        world.rebuild_walls();
        world.serve_ball();
        Ok(world)
    }

    /// Replace both side walls with freshly drawn thicknesses
    pub(crate) fn rebuild_walls(&mut self) {
        let left = self.rng.random_range(self.wall_min..=self.wall_max).round();
        let right = self.rng.random_range(self.wall_min..=self.wall_max).round();
        self.walls.clear();
        self.walls.push(Wall {
            body: Body::from_grid(
                Vec2::new(0.0, self.height / 2.0),
                Vec2::new(left, self.height),
                Vec2::ZERO,
            ),
        });
        self.walls.push(Wall {
            body: Body::from_grid(
                Vec2::new(self.width, self.height / 2.0),
                Vec2::new(right, self.height),
                Vec2::ZERO,
            ),
        });
    }

    /// Put a fresh ball in play from the serve template
    pub(crate) fn serve_ball(&mut self) {
        self.balls.push(Ball {
            body: self.serve_body,
        });
    }

    /// Current score for a side
    ///
    /// A goal tallies the balls it swallowed, and those score for the
    /// player attacking it, so a side's score lives on the opposing goal.
    pub fn score(&self, side: Side) -> u32 {
        self.players
            .iter()
            .find(|player| player.side == side.opposite())
            .map(|player| player.goal.captured)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_world_layout_from_defaults() {
        let settings = Settings::default();
        let world = World::new(&settings, 42).unwrap();

        // One ball in play at the serve point
        assert_eq!(world.balls.len(), 1);
        assert_eq!(world.balls[0].body.pos(), settings.serve_position.round());
        assert_eq!(world.balls[0].body.vel, settings.serve_velocity);

        // Human defends the bottom, computer the top
        assert_eq!(world.players[0].side, Side::Bottom);
        assert_eq!(world.players[0].controller, Controller::Human);
        assert_eq!(world.players[1].side, Side::Top);
        assert_eq!(world.players[1].controller, Controller::Computer);

        // Paddles sit inset from their goal edge
        assert_eq!(world.players[0].paddle.body.y(), settings.paddle_inset);
        assert_eq!(
            world.players[1].paddle.body.y(),
            settings.height - settings.paddle_inset
        );

        // Two full-height side walls
        assert_eq!(world.walls.len(), 2);
        for wall in &world.walls {
            assert_eq!(wall.body.height(), settings.height);
        }

        assert_eq!(world.score(Side::Bottom), 0);
        assert_eq!(world.score(Side::Top), 0);
    }

    #[test]
    fn test_rejects_bad_wall_range() {
        let mut settings = Settings::default();
        settings.wall_thickness_min = 20.0;
        settings.wall_thickness_max = 10.0;
        assert!(matches!(
            World::new(&settings, 1),
            Err(WorldError::WallRange)
        ));

        settings.wall_thickness_min = 0.2;
        settings.wall_thickness_max = 10.0;
        assert!(matches!(
            World::new(&settings, 1),
            Err(WorldError::WallRange)
        ));
    }

    #[test]
    fn test_rejects_bad_tuning() {
        let mut settings = Settings::default();
        settings.track_max_speed = -1.0;
        assert!(matches!(World::new(&settings, 1), Err(WorldError::Tuning)));

        let mut settings = Settings::default();
        settings.strike_speed = f32::NAN;
        assert!(matches!(World::new(&settings, 1), Err(WorldError::Tuning)));
    }

    #[test]
    fn test_rejects_degenerate_paddle() {
        let mut settings = Settings::default();
        settings.paddle_size = Vec2::new(100.0, 0.2);
        assert!(matches!(
            World::new(&settings, 1),
            Err(WorldError::Body(BodyError::ExtentTooSmall))
        ));
    }

    #[test]
    fn test_score_reads_opposing_goal() {
        let mut world = World::new(&Settings::default(), 7).unwrap();
        world.players[1].goal.captured = 3;
        world.players[0].goal.captured = 1;
        assert_eq!(world.score(Side::Bottom), 3);
        assert_eq!(world.score(Side::Top), 1);
    }

    #[test]
    fn test_wall_rebuild_stays_in_range() {
        let mut settings = Settings::default();
        settings.wall_thickness_min = 6.0;
        settings.wall_thickness_max = 30.0;
        let mut world = World::new(&settings, 99).unwrap();

        for _ in 0..20 {
            world.rebuild_walls();
            assert_eq!(world.walls.len(), 2);
            for wall in &world.walls {
                assert!(wall.body.width() >= 6.0);
                assert!(wall.body.width() <= 30.0);
            }
        }
    }

    #[test]
    fn test_wall_draws_are_seeded() {
        let settings = Settings::default();
        let mut a = World::new(&settings, 1234).unwrap();
        let mut b = World::new(&settings, 1234).unwrap();

        for _ in 0..5 {
            a.rebuild_walls();
            b.rebuild_walls();
        }
        assert_eq!(a.walls[0].body.size(), b.walls[0].body.size());
        assert_eq!(a.walls[1].body.size(), b.walls[1].body.size());
    }

    #[test]
    fn test_serve_uses_template() {
        let settings = Settings::default();
        let mut world = World::new(&settings, 5).unwrap();
        world.balls.clear();

        world.serve_ball();
        assert_eq!(world.balls.len(), 1);
        assert_eq!(world.balls[0].body.pos(), settings.serve_position.round());
        assert_eq!(world.balls[0].body.vel, settings.serve_velocity);
        assert_eq!(world.balls[0].radius(), settings.ball_radius);
    }
}
