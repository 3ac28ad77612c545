/// Frustum — six clipping planes for visibility culling.
///
/// Planes are extracted from a view-projection matrix with the Gribb &
/// Hartmann row method. Normals point inward: a point P is inside when
/// `plane.signed_distance(P) >= 0` for all six planes.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};
use super::plane::Plane;

/// Result of a 3-way frustum/AABB classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrustumTest {
    /// AABB is entirely outside the frustum
    Outside,
    /// AABB is entirely inside the frustum
    Inside,
    /// AABB straddles at least one plane
    Partial,
}

/// Frustum plane indices
pub const PLANE_LEFT: usize = 0;
pub const PLANE_RIGHT: usize = 1;
pub const PLANE_BOTTOM: usize = 2;
pub const PLANE_TOP: usize = 3;
pub const PLANE_NEAR: usize = 4;
pub const PLANE_FAR: usize = 5;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    /// Minimum corner (x, y, z)
    pub min: Vec3,
    /// Maximum corner (x, y, z)
    pub max: Vec3,
}

impl AABB {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Box centered on `center` reaching `half_extents` along each axis.
    pub fn from_center_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Half size along each axis
    pub fn extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// Corner furthest along `normal`
    fn positive_vertex(&self, normal: Vec3) -> Vec3 {
        Vec3::new(
            if normal.x >= 0.0 { self.max.x } else { self.min.x },
            if normal.y >= 0.0 { self.max.y } else { self.min.y },
            if normal.z >= 0.0 { self.max.z } else { self.min.z },
        )
    }

    /// Corner furthest against `normal`
    fn negative_vertex(&self, normal: Vec3) -> Vec3 {
        Vec3::new(
            if normal.x >= 0.0 { self.min.x } else { self.max.x },
            if normal.y >= 0.0 { self.min.y } else { self.max.y },
            if normal.z >= 0.0 { self.min.z } else { self.max.z },
        )
    }
}

/// Six frustum planes, ordered left, right, bottom, top, near, far.
///
/// The order is part of the contract; index with the `PLANE_*` constants.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Frustum {
    /// Frustum planes: left, right, bottom, top, near, far
    pub planes: [Plane; 6],
}

impl Frustum {
    /// Extract frustum planes from a view-projection matrix.
    ///
    /// With `r0..r3` the rows of `vp`, the raw planes are
    /// `r3+r0, r3-r0, r3+r1, r3-r1, r3+r2, r3-r2`. Each is turned into a
    /// [`Plane`] by [`Plane::from_coefficients`]. Not clamped or special
    /// cased: a degenerate `vp` gives non-finite planes.
    pub fn from_view_projection(vp: &Mat4) -> Self {
        let rows = [vp.row(0), vp.row(1), vp.row(2), vp.row(3)];

        Self {
            planes: [
                Plane::from_coefficients(rows[3] + rows[0]), // left
                Plane::from_coefficients(rows[3] - rows[0]), // right
                Plane::from_coefficients(rows[3] + rows[1]), // bottom
                Plane::from_coefficients(rows[3] - rows[1]), // top
                Plane::from_coefficients(rows[3] + rows[2]), // near
                Plane::from_coefficients(rows[3] - rows[2]), // far
            ],
        }
    }

    /// All six planes, in contract order.
    pub fn planes(&self) -> &[Plane; 6] {
        &self.planes
    }

    /// One plane by `PLANE_*` index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 6`.
    pub fn plane(&self, index: usize) -> Plane {
        self.planes[index]
    }

    /// Whether every plane has finite coefficients.
    pub fn is_finite(&self) -> bool {
        self.planes.iter().all(Plane::is_finite)
    }

    /// Raw bytes of the six planes, for uploading to a culling shader.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }

    /// Test if a point lies inside (or on the boundary of) the frustum.
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.planes.iter().all(|plane| plane.signed_distance(point) >= 0.0)
    }

    /// Test if a sphere intersects the frustum.
    ///
    /// Conservative near the frustum edges: may report spheres that only
    /// touch the extended planes.
    pub fn intersects_sphere(&self, center: Vec3, radius: f32) -> bool {
        self.planes.iter().all(|plane| plane.signed_distance(center) >= -radius)
    }

    /// Test if an AABB intersects this frustum.
    ///
    /// Positive-vertex test: if the corner most aligned with a plane's
    /// normal is outside that plane, the whole box is outside.
    /// May return false positives, never false negatives.
    pub fn intersects_aabb(&self, aabb: &AABB) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.signed_distance(aabb.positive_vertex(plane.normal)) >= 0.0)
    }

    /// Classify an AABB against the frustum (3-way test).
    ///
    /// - p-vertex outside any plane → `Outside` (early out)
    /// - n-vertex outside any plane → at least `Partial`
    /// - otherwise → `Inside`
    pub fn classify_aabb(&self, aabb: &AABB) -> FrustumTest {
        let mut all_inside = true;

        for plane in &self.planes {
            if plane.signed_distance(aabb.positive_vertex(plane.normal)) < 0.0 {
                return FrustumTest::Outside;
            }
            if plane.signed_distance(aabb.negative_vertex(plane.normal)) < 0.0 {
                all_inside = false;
            }
        }

        if all_inside { FrustumTest::Inside } else { FrustumTest::Partial }
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
