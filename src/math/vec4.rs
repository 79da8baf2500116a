//! 4D vector for homogeneous coordinates.

use super::vec3::Vec3;

/// Minimum `|w|` for which a perspective divide is performed.
pub const W_EPSILON: f32 = 1e-4;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vec4 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Vec4 {
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Create a point (w=1) from a Vec3.
    pub const fn point(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z, 1.0)
    }

    /// Create a direction (w=0) from a Vec3. Directions ignore translation.
    pub const fn direction(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z, 0.0)
    }

    /// Convert to Vec3, discarding w.
    pub const fn to_vec3(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Convert to Vec3 with perspective division.
    ///
    /// The divide only happens when `|w| > W_EPSILON`; otherwise the
    /// un-divided components pass through.
    pub fn to_vec3_perspective(self) -> Vec3 {
        if self.w.abs() > W_EPSILON {
            Vec3::new(self.x / self.w, self.y / self.w, self.z / self.w)
        } else {
            self.to_vec3()
        }
    }

    pub fn dot(&self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w
    }
}

impl From<Vec3> for Vec4 {
    /// Convert Vec3 to Vec4 as a point (w=1).
    fn from(v: Vec3) -> Self {
        Self::point(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perspective_divide_skips_tiny_w() {
        let v = Vec4::new(2.0, 4.0, 6.0, 0.00001);
        assert_eq!(v.to_vec3_perspective(), Vec3::new(2.0, 4.0, 6.0));

        let v = Vec4::new(2.0, 4.0, 6.0, 2.0);
        assert_eq!(v.to_vec3_perspective(), Vec3::new(1.0, 2.0, 3.0));
    }
}
