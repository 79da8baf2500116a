//! Line clipping and back-face culling.
//!
//! Lines are clipped against an axis-aligned integer rectangle with the
//! Cohen-Sutherland algorithm: every endpoint gets a 4-bit outcode recording
//! which boundaries it violates, which lets most lines be accepted or rejected
//! without computing any intersection.
//!
//! ```text
//!   1001 | 1000 | 1010
//!  ------+------+------   y_max
//!   0001 | 0000 | 0010
//!  ------+------+------   y_min
//!   0101 | 0100 | 0110
//!      x_min  x_max
//! ```

use crate::math::vec3::Vec3;

/// Outcode bits.
pub mod outcode {
    pub const INSIDE: u8 = 0;
    pub const LEFT: u8 = 1;
    pub const RIGHT: u8 = 2;
    pub const BOTTOM: u8 = 4;
    pub const TOP: u8 = 8;
}

/// Inclusive clip rectangle in integer pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClipRect {
    pub x_min: i32,
    pub y_min: i32,
    pub x_max: i32,
    pub y_max: i32,
}

impl ClipRect {
    pub fn new(x_min: i32, y_min: i32, x_max: i32, y_max: i32) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    /// The rectangle covering every pixel of a `width` x `height` image.
    pub fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, width as i32 - 1, height as i32 - 1)
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        compute_outcode(x, y, self) == outcode::INSIDE
    }
}

/// Returns the outcode of `(x, y)` relative to `rect`.
pub fn compute_outcode(x: i32, y: i32, rect: &ClipRect) -> u8 {
    let mut code = outcode::INSIDE;

    if x < rect.x_min {
        code |= outcode::LEFT;
    } else if x > rect.x_max {
        code |= outcode::RIGHT;
    }

    if y < rect.y_min {
        code |= outcode::BOTTOM;
    } else if y > rect.y_max {
        code |= outcode::TOP;
    }

    code
}

/// Clips the segment `p0`-`p1` to `rect`.
///
/// Returns the clipped endpoints, or `None` if the segment lies entirely
/// outside. Intersections use integer arithmetic and are resolved against the
/// violated boundary in the order top, bottom, right, left.
pub fn clip_line(
    p0: (i32, i32),
    p1: (i32, i32),
    rect: &ClipRect,
) -> Option<((i32, i32), (i32, i32))> {
    let (mut x0, mut y0) = p0;
    let (mut x1, mut y1) = p1;
    let mut code0 = compute_outcode(x0, y0, rect);
    let mut code1 = compute_outcode(x1, y1, rect);

    loop {
        if code0 | code1 == outcode::INSIDE {
            return Some(((x0, y0), (x1, y1)));
        }
        if code0 & code1 != 0 {
            // Both endpoints violate the same boundary
            return None;
        }

        let code_out = if code0 != outcode::INSIDE { code0 } else { code1 };

        // Widen to avoid overflow in the cross-multiplication
        let (fx0, fy0, fx1, fy1) = (x0 as i64, y0 as i64, x1 as i64, y1 as i64);
        let (x, y) = if code_out & outcode::TOP != 0 {
            let y = rect.y_max as i64;
            (fx0 + (fx1 - fx0) * (y - fy0) / (fy1 - fy0), y)
        } else if code_out & outcode::BOTTOM != 0 {
            let y = rect.y_min as i64;
            (fx0 + (fx1 - fx0) * (y - fy0) / (fy1 - fy0), y)
        } else if code_out & outcode::RIGHT != 0 {
            let x = rect.x_max as i64;
            (x, fy0 + (fy1 - fy0) * (x - fx0) / (fx1 - fx0))
        } else {
            let x = rect.x_min as i64;
            (x, fy0 + (fy1 - fy0) * (x - fx0) / (fx1 - fx0))
        };

        if code_out == code0 {
            x0 = x as i32;
            y0 = y as i32;
            code0 = compute_outcode(x0, y0, rect);
        } else {
            x1 = x as i32;
            y1 = y as i32;
            code1 = compute_outcode(x1, y1, rect);
        }
    }
}

/// Returns true if the triangle faces away from `camera_pos`.
///
/// The face normal is `cross(v1 - v0, v2 - v0)` (counter-clockwise winding is
/// front facing). There is no tolerance band: triangles seen exactly edge-on can
/// flip between culled and visible under floating-point noise.
pub fn is_back_face(v0: Vec3, v1: Vec3, v2: Vec3, camera_pos: Vec3) -> bool {
    let normal = (v1 - v0).cross(v2 - v0);
    normal.dot(camera_pos - v0) < 0.0
}
