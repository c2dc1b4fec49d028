//! Deterministic game simulation
//!
//! All gameplay logic lives here, with no rendering or platform
//! dependencies. Given the same settings, seed, and per-frame input, two
//! runs produce identical worlds:
//! - Velocities are pixels per frame; integration is one add per tick
//! - The only randomness is the seeded wall redraw
//! - Iteration order over entities is fixed

pub mod autopilot;
pub mod body;
pub mod collision;
pub mod state;
pub mod tick;

pub use body::{Body, BodyError, Surface};
pub use collision::{bounce_x, bounce_y, touches};
pub use state::{Ball, Controller, Goal, Paddle, Player, Side, Wall, World, WorldError};
pub use tick::{FrameEvents, TickInput, tick};
