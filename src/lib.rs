//! Tilt Pong - a vertical Pong variant on an integer grid
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bodies, collisions, world state, autopilot)
//! - `settings`: JSON-backed tuning knobs
//!
//! The human defends the bottom edge, the computer the top. Paddles only
//! slide sideways, but a moving paddle tilts the ball's path on contact,
//! which is the whole game.

pub mod settings;
pub mod sim;

pub use settings::Settings;
pub use sim::{FrameEvents, TickInput, World};
