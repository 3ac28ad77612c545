/// Basis helpers.
///
/// The camera derives its axes with `right = forward x up` and
/// `up = right x forward`, where `x` is the left-handed product
/// `a x b = b.cross(a)`. Under this product the canonical pose
/// (forward +Z, up +Y) yields right +X.

use glam::Vec3;

/// Cross product in the camera's basis convention.
#[inline]
pub(crate) fn basis_cross(a: Vec3, b: Vec3) -> Vec3 {
    b.cross(a)
}

/// `right` and `up` for a given `forward` and up hint.
///
/// No validation: a zero `forward` or a hint parallel to it gives NaN.
#[inline]
pub(crate) fn derive_right_up(forward: Vec3, up_hint: Vec3) -> (Vec3, Vec3) {
    let right = basis_cross(forward, up_hint).normalize();
    let up = basis_cross(right, forward);
    (right, up)
}

/// Gram–Schmidt: make `up` orthogonal to `forward`, then rebuild `right`.
///
/// `forward` must be unit length. Unlike [`derive_right_up`] there is no
/// pole: `up` only loses its component along `forward`, so the result is
/// stable for any `up` that is not parallel to `forward`.
#[inline]
pub(crate) fn orthonormalize(forward: Vec3, up: Vec3) -> (Vec3, Vec3) {
    let up = (up - forward * forward.dot(up)).normalize();
    let right = basis_cross(forward, up);
    (right, up)
}
