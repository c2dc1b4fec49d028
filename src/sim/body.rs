//! Axis-aligned bodies on the integer pixel grid
//!
//! Every entity in the world is a rectangle described by:
//! - pos: center position, snapped to whole pixels
//! - size: extents in each axis, whole pixels, at least 1
//! - vel: velocity in pixels per frame, fractional
//!
//! Positions and extents round on every write so derived edges stay on the
//! grid. Velocities keep their fraction, but a component below half a pixel
//! per frame rounds away before it can move a body.

use std::fmt;

use glam::Vec2;

/// Rejected body geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyError {
    /// A position, size, or velocity component was NaN or infinite
    NonFinite,
    /// An extent rounded below one pixel
    ExtentTooSmall,
}

impl fmt::Display for BodyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BodyError::NonFinite => write!(f, "body geometry must be finite"),
            BodyError::ExtentTooSmall => {
                write!(f, "body extents must round to at least one pixel")
            }
        }
    }
}

impl std::error::Error for BodyError {}

/// A rectangle with a velocity, snapped to whole pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pos: Vec2,
    size: Vec2,
    /// Velocity in pixels per frame
    pub vel: Vec2,
}

impl Body {
    /// Create a resting body, validating the geometry
    pub fn new(pos: Vec2, size: Vec2) -> Result<Self, BodyError> {
        if !pos.is_finite() || !size.is_finite() {
            return Err(BodyError::NonFinite);
        }
        let size = size.round();
        if size.x < 1.0 || size.y < 1.0 {
            return Err(BodyError::ExtentTooSmall);
        }
        Ok(Self {
            pos: pos.round(),
            size,
            vel: Vec2::ZERO,
        })
    }

    /// Create a moving body, validating the geometry
    pub fn with_vel(pos: Vec2, size: Vec2, vel: Vec2) -> Result<Self, BodyError> {
        if !vel.is_finite() {
            return Err(BodyError::NonFinite);
        }
        let mut body = Self::new(pos, size)?;
        body.vel = vel;
        Ok(body)
    }

    /// Build a body from values the caller already vetted
    ///
    /// Crate-internal fast path for geometry derived from a validated
    /// configuration (wall rebuilds). Public construction always validates.
    pub(crate) fn from_grid(pos: Vec2, size: Vec2, vel: Vec2) -> Self {
        debug_assert!(pos.is_finite() && size.is_finite() && vel.is_finite());
        let size = size.round();
        debug_assert!(size.x >= 1.0 && size.y >= 1.0);
        Self {
            pos: pos.round(),
            size,
            vel,
        }
    }

    /// Center x
    #[inline]
    pub fn x(&self) -> f32 {
        self.pos.x
    }

    /// Center y
    #[inline]
    pub fn y(&self) -> f32 {
        self.pos.y
    }

    /// Center position
    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    /// Extents in each axis
    #[inline]
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Horizontal extent
    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    /// Vertical extent
    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    /// Left edge (center minus half extent, snapped to the grid)
    #[inline]
    pub fn left(&self) -> f32 {
        (self.pos.x - self.size.x / 2.0).round()
    }

    /// Right edge
    #[inline]
    pub fn right(&self) -> f32 {
        (self.pos.x + self.size.x / 2.0).round()
    }

    /// Bottom edge (y grows upward)
    #[inline]
    pub fn bottom(&self) -> f32 {
        (self.pos.y - self.size.y / 2.0).round()
    }

    /// Top edge
    #[inline]
    pub fn top(&self) -> f32 {
        (self.pos.y + self.size.y / 2.0).round()
    }

    /// Move the center, snapping back to the grid
    pub fn set_pos(&mut self, pos: Vec2) {
        self.pos = pos.round();
    }

    /// Advance one frame along the current velocity
    pub fn advance(&mut self) {
        self.pos = (self.pos + self.vel).round();
    }
}

/// A body that other bodies bounce off
///
/// The bounce resolver tests overlap against `body()` and subtracts
/// `gradient` at the contact coordinate from the tangential velocity of
/// whatever it resolves. Flat surfaces keep the zero default.
pub trait Surface {
    /// The surface's rectangle
    fn body(&self) -> &Body;

    /// Local slope at coordinate `at` along the surface's face
    fn gradient(&self, at: f32) -> f32 {
        let _ = at;
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_construction_rounds_to_grid() {
        let body = Body::new(Vec2::new(10.4, 20.6), Vec2::new(7.6, 3.2)).unwrap();
        assert_eq!(body.pos(), Vec2::new(10.0, 21.0));
        assert_eq!(body.size(), Vec2::new(8.0, 3.0));
    }

    #[test]
    fn test_rejects_non_finite_geometry() {
        assert_eq!(
            Body::new(Vec2::new(f32::NAN, 0.0), Vec2::ONE),
            Err(BodyError::NonFinite)
        );
        assert_eq!(
            Body::new(Vec2::ZERO, Vec2::new(f32::INFINITY, 1.0)),
            Err(BodyError::NonFinite)
        );
        assert_eq!(
            Body::with_vel(Vec2::ZERO, Vec2::ONE, Vec2::new(0.0, f32::NAN)),
            Err(BodyError::NonFinite)
        );
    }

    #[test]
    fn test_rejects_sub_pixel_extent() {
        // 0.4 rounds to zero pixels
        assert_eq!(
            Body::new(Vec2::ZERO, Vec2::new(0.4, 5.0)),
            Err(BodyError::ExtentTooSmall)
        );
        // 0.5 rounds up to one pixel
        assert!(Body::new(Vec2::ZERO, Vec2::new(0.5, 5.0)).is_ok());
    }

    #[test]
    fn test_edges_bracket_center() {
        let body = Body::new(Vec2::new(100.0, 50.0), Vec2::new(9.0, 4.0)).unwrap();
        assert!(body.left() <= body.x() && body.x() <= body.right());
        assert!(body.bottom() <= body.y() && body.y() <= body.top());
    }

    #[test]
    fn test_advance_stays_on_grid() {
        let mut body =
            Body::with_vel(Vec2::new(10.0, 10.0), Vec2::splat(4.0), Vec2::new(2.3, -1.7)).unwrap();
        body.advance();
        assert_eq!(body.pos(), Vec2::new(12.0, 8.0));
        body.advance();
        assert_eq!(body.pos(), Vec2::new(14.0, 6.0));
    }

    proptest! {
        #[test]
        fn prop_edges_bracket_center(
            x in -10_000.0f32..10_000.0,
            y in -10_000.0f32..10_000.0,
            w in 1.0f32..500.0,
            h in 1.0f32..500.0,
        ) {
            let body = Body::new(Vec2::new(x, y), Vec2::new(w, h)).unwrap();
            prop_assert!(body.left() <= body.x());
            prop_assert!(body.x() <= body.right());
            prop_assert!(body.bottom() <= body.y());
            prop_assert!(body.y() <= body.top());
        }

        #[test]
        fn prop_mutation_keeps_integers(
            x in -10_000.0f32..10_000.0,
            y in -10_000.0f32..10_000.0,
            dx in -50.0f32..50.0,
            dy in -50.0f32..50.0,
        ) {
            let mut body =
                Body::with_vel(Vec2::new(x, y), Vec2::splat(8.0), Vec2::new(dx, dy)).unwrap();
            body.advance();
            prop_assert_eq!(body.x(), body.x().round());
            prop_assert_eq!(body.y(), body.y().round());
        }
    }
}
