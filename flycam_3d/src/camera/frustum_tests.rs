use glam::{Mat4, Vec3, Vec4};
use super::*;

fn perspective_frustum(fov: f32, far: f32) -> Frustum {
    let projection = Mat4::perspective_rh_gl(fov, 1.0, 0.1, far);
    let view = Mat4::look_at_rh(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
    Frustum::from_view_projection(&(projection * view))
}

// ============================================================================
// Frustum::from_view_projection
// ============================================================================

#[test]
fn test_frustum_from_identity_matrix() {
    let frustum = Frustum::from_view_projection(&Mat4::IDENTITY);

    // Identity VP -> NDC cube: x, y, z in [-1, 1]
    let expected = [
        (Vec3::X, 1.0),
        (-Vec3::X, 1.0),
        (Vec3::Y, 1.0),
        (-Vec3::Y, 1.0),
        (Vec3::Z, 1.0),
        (-Vec3::Z, 1.0),
    ];
    for (plane, (normal, distance)) in frustum.planes().iter().zip(expected) {
        assert_eq!(plane.normal, normal);
        assert_eq!(plane.distance, distance);
    }
}

#[test]
fn test_frustum_uses_row_combinations() {
    // Rows chosen so every combination differs
    let vp = Mat4::from_cols_array_2d(&[
        [2.0, 0.0, 0.0, 0.0],
        [0.0, 3.0, 0.0, 0.0],
        [0.0, 0.0, 4.0, 1.0],
        [0.0, 0.0, 5.0, 0.0],
    ])
    .transpose();
    let rows = [vp.row(0), vp.row(1), vp.row(2), vp.row(3)];

    let frustum = Frustum::from_view_projection(&vp);

    let raw = [
        rows[3] + rows[0],
        rows[3] - rows[0],
        rows[3] + rows[1],
        rows[3] - rows[1],
        rows[3] + rows[2],
        rows[3] - rows[2],
    ];
    for (index, coefficients) in raw.into_iter().enumerate() {
        assert_eq!(frustum.plane(index), Plane::from_coefficients(coefficients), "plane {}", index);
    }
}

#[test]
fn test_frustum_distance_scaled_by_raw_normal_length() {
    // Left plane raw = (3, 0, 4, 10): |abc| = 5
    let vp = Mat4::from_cols_array_2d(&[
        [3.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 4.0, 10.0],
    ])
    .transpose();

    let left = Frustum::from_view_projection(&vp).plane(PLANE_LEFT);

    assert!(left.normal.abs_diff_eq(Vec3::new(0.6, 0.0, 0.8), 1e-6));
    assert!((left.distance - 2.0).abs() < 1e-6);
}

#[test]
fn test_frustum_planes_normalized_for_perspective() {
    let frustum = perspective_frustum(std::f32::consts::FRAC_PI_4, 100.0);

    for plane in frustum.planes() {
        assert!((plane.normal.length() - 1.0).abs() < 1e-4, "plane normal should be unit length");
    }
    assert!(frustum.is_finite());
}

#[test]
fn test_frustum_planes_normalized_for_orthographic() {
    let projection = Mat4::orthographic_rh_gl(-10.0, 10.0, -10.0, 10.0, 0.1, 100.0);

    let frustum = Frustum::from_view_projection(&projection);

    for plane in frustum.planes() {
        assert!((plane.normal.length() - 1.0).abs() < 1e-4, "plane normal should be unit length");
    }
    // Side planes of an orthographic box sit 10 units from the axis
    assert!((frustum.plane(PLANE_RIGHT).distance - 10.0).abs() < 1e-4);
}

#[test]
fn test_frustum_degenerate_matrix_is_not_finite() {
    let frustum = Frustum::from_view_projection(&Mat4::ZERO);

    assert!(!frustum.is_finite());
}

#[test]
fn test_frustum_as_bytes() {
    let frustum = Frustum::from_view_projection(&Mat4::IDENTITY);

    let bytes = frustum.as_bytes();

    assert_eq!(bytes.len(), 6 * 4 * std::mem::size_of::<f32>());
    let floats: &[f32] = bytemuck::cast_slice(bytes);
    assert_eq!(&floats[0..4], &[1.0, 0.0, 0.0, 1.0]);
    assert_eq!(&floats[20..24], &[0.0, 0.0, -1.0, 1.0]);
}

// ============================================================================
// Point / sphere queries
// ============================================================================

#[test]
fn test_contains_point() {
    let frustum = perspective_frustum(std::f32::consts::FRAC_PI_2, 100.0);

    assert!(frustum.contains_point(Vec3::ZERO));
    assert!(!frustum.contains_point(Vec3::new(0.0, 0.0, 10.0))); // behind the eye
    assert!(!frustum.contains_point(Vec3::new(0.0, 50.0, 0.0)));
}

#[test]
fn test_intersects_sphere() {
    let frustum = perspective_frustum(std::f32::consts::FRAC_PI_2, 10.0);

    // Center behind the far plane (z = -5) but radius reaches back in
    assert!(frustum.intersects_sphere(Vec3::new(0.0, 0.0, -6.0), 2.0));
    assert!(!frustum.intersects_sphere(Vec3::new(0.0, 0.0, -6.0), 0.5));
}

// ============================================================================
// Frustum::intersects_aabb
// ============================================================================

#[test]
fn test_aabb_inside_frustum() {
    let frustum = perspective_frustum(std::f32::consts::FRAC_PI_2, 100.0);

    let aabb = AABB::new(Vec3::new(-1.0, -1.0, -1.0), Vec3::new(1.0, 1.0, 1.0));

    assert!(frustum.intersects_aabb(&aabb));
    assert_eq!(frustum.classify_aabb(&aabb), FrustumTest::Inside);
}

#[test]
fn test_aabb_outside_frustum() {
    let frustum = perspective_frustum(std::f32::consts::FRAC_PI_4, 100.0);

    let aabb = AABB::new(Vec3::new(100.0, 100.0, 100.0), Vec3::new(101.0, 101.0, 101.0));

    assert!(!frustum.intersects_aabb(&aabb));
    assert_eq!(frustum.classify_aabb(&aabb), FrustumTest::Outside);
}

#[test]
fn test_aabb_behind_camera() {
    let frustum = perspective_frustum(std::f32::consts::FRAC_PI_2, 100.0);

    let aabb = AABB::new(Vec3::new(-1.0, -1.0, 10.0), Vec3::new(1.0, 1.0, 12.0));

    assert!(!frustum.intersects_aabb(&aabb));
}

#[test]
fn test_aabb_beyond_far_plane() {
    let frustum = perspective_frustum(std::f32::consts::FRAC_PI_2, 10.0);

    let aabb = AABB::new(Vec3::new(-1.0, -1.0, -20.0), Vec3::new(1.0, 1.0, -18.0));

    assert!(!frustum.intersects_aabb(&aabb));
}

#[test]
fn test_aabb_straddling_boundary_is_partial() {
    let projection = Mat4::orthographic_rh_gl(-5.0, 5.0, -5.0, 5.0, 0.1, 100.0);
    let frustum = Frustum::from_view_projection(&projection);

    // Straddles the right boundary at x = 5
    let aabb = AABB::new(Vec3::new(4.0, 0.0, -10.0), Vec3::new(6.0, 1.0, -5.0));

    assert!(frustum.intersects_aabb(&aabb));
    assert_eq!(frustum.classify_aabb(&aabb), FrustumTest::Partial);
}

// ============================================================================
// AABB helpers
// ============================================================================

#[test]
fn test_aabb_center_and_extents() {
    let aabb = AABB::from_center_extents(Vec3::new(1.0, 2.0, 3.0), Vec3::new(0.5, 1.0, 2.0));

    assert_eq!(aabb.min, Vec3::new(0.5, 1.0, 1.0));
    assert_eq!(aabb.max, Vec3::new(1.5, 3.0, 5.0));
    assert_eq!(aabb.center(), Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(aabb.extents(), Vec3::new(0.5, 1.0, 2.0));
}

#[test]
fn test_aabb_support_vertices() {
    let aabb = AABB::new(Vec3::new(-1.0, -2.0, -3.0), Vec3::new(1.0, 2.0, 3.0));
    let normal = Vec4::new(1.0, -1.0, 0.0, 0.0).truncate();

    assert_eq!(aabb.positive_vertex(normal), Vec3::new(1.0, -2.0, 3.0));
    assert_eq!(aabb.negative_vertex(normal), Vec3::new(-1.0, 2.0, -3.0));
}

// ============================================================================
// Plane constants
// ============================================================================

#[test]
fn test_plane_constants() {
    assert_eq!(PLANE_LEFT, 0);
    assert_eq!(PLANE_RIGHT, 1);
    assert_eq!(PLANE_BOTTOM, 2);
    assert_eq!(PLANE_TOP, 3);
    assert_eq!(PLANE_NEAR, 4);
    assert_eq!(PLANE_FAR, 5);
}
