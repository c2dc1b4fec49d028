//! Overlap tests and bounce resolution
//!
//! An inclusive overlap test on pixel-snapped rectangles, resolved one axis
//! at a time. There is no separation correction and no swept test, so a body
//! crossing more than a surface's thickness in one frame passes straight
//! through it.

use super::body::{Body, Surface};

/// Inclusive overlap test between two rectangles
///
/// Shared edges count as contact. Symmetric in its arguments.
pub fn touches(a: &Body, b: &Body) -> bool {
    a.left() <= b.right()
        && b.left() <= a.right()
        && a.bottom() <= b.top()
        && b.bottom() <= a.top()
}

/// Bounce `body` horizontally off any overlapping surface
///
/// For vertical surfaces (side walls). Surfaces are applied in list order:
/// each contact reverses the horizontal velocity, but only while the body
/// still heads into that surface, so a body that already turned around is
/// not flipped again by lingering overlap. The surface's gradient at the
/// body's height is subtracted from the vertical velocity on every contact.
/// Returns the number of reversals applied.
pub fn bounce_x(body: &mut Body, surfaces: &[&dyn Surface]) -> u32 {
    let mut reversals = 0;
    for surface in surfaces {
        let face = surface.body();
        if !touches(body, face) {
            continue;
        }
        if (body.x() - face.x()) * body.vel.x < 0.0 {
            body.vel.x = -body.vel.x;
            reversals += 1;
        }
        body.vel.y -= surface.gradient(body.y());
    }
    reversals
}

/// Bounce `body` vertically off any overlapping surface
///
/// For horizontal surfaces (paddles). Same contract as [`bounce_x`] with
/// the axes swapped: contacts reverse the vertical velocity while the body
/// heads into the surface, and the gradient at the body's x is subtracted
/// from the horizontal velocity. A paddle sliding sideways thus tilts the
/// ball it strikes.
pub fn bounce_y(body: &mut Body, surfaces: &[&dyn Surface]) -> u32 {
    let mut reversals = 0;
    for surface in surfaces {
        let face = surface.body();
        if !touches(body, face) {
            continue;
        }
        if (body.y() - face.y()) * body.vel.y < 0.0 {
            body.vel.y = -body.vel.y;
            reversals += 1;
        }
        body.vel.x -= surface.gradient(body.x());
    }
    reversals
}
