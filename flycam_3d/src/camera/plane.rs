/// Plane — unit normal plus signed distance.

use bytemuck::{Pod, Zeroable};
use glam::{Vec3, Vec4};

/// Plane `normal . p + distance = 0`.
///
/// Points with a positive signed distance lie on the side the normal
/// points to. `#[repr(C)]` so a frustum can be uploaded to the GPU as-is.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Plane {
    /// Unit normal
    pub normal: Vec3,
    /// Signed distance term (D)
    pub distance: f32,
}

impl Plane {
    pub fn new(normal: Vec3, distance: f32) -> Self {
        Self { normal, distance }
    }

    /// Build a plane from raw `(A, B, C, D)` coefficients.
    ///
    /// The normal is `(A, B, C)` normalized; `D` is divided by the length
    /// of `(A, B, C)` measured before normalization, so signed distances
    /// come out in world units. A zero normal yields NaN.
    pub fn from_coefficients(coefficients: Vec4) -> Self {
        let abc = coefficients.truncate();
        let magnitude = abc.length();
        Self {
            normal: abc / magnitude,
            distance: coefficients.w / magnitude,
        }
    }

    /// `(normal, distance)` packed as a Vec4.
    pub fn coefficients(&self) -> Vec4 {
        self.normal.extend(self.distance)
    }

    /// Signed distance from `point` to the plane.
    pub fn signed_distance(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.distance
    }

    pub fn is_finite(&self) -> bool {
        self.normal.is_finite() && self.distance.is_finite()
    }
}

#[cfg(test)]
#[path = "plane_tests.rs"]
mod tests;
