/// Projection sources — the seam to the render backend.
///
/// A backend hands out the active projection as 16 floats in its own
/// layout. The camera never reads ambient backend state: the source is
/// passed in explicitly wherever a projection is needed.

use glam::Mat4;
use crate::error::Result;

/// Memory layout of a raw 4x4 matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatrixLayout {
    /// Consecutive floats walk down columns (OpenGL, glam)
    ColumnMajor,
    /// Consecutive floats walk along rows
    RowMajor,
}

impl MatrixLayout {
    /// Build a matrix from raw floats stored in this layout.
    ///
    /// Getting this wrong does not fail, it silently swaps rows and
    /// columns, so the layout must match what the backend actually writes.
    pub fn to_matrix(self, raw: &[f32; 16]) -> Mat4 {
        match self {
            MatrixLayout::ColumnMajor => Mat4::from_cols_array(raw),
            MatrixLayout::RowMajor => Mat4::from_cols_array(raw).transpose(),
        }
    }

    /// Flatten a matrix into raw floats in this layout.
    pub fn to_raw(self, matrix: &Mat4) -> [f32; 16] {
        match self {
            MatrixLayout::ColumnMajor => matrix.to_cols_array(),
            MatrixLayout::RowMajor => matrix.transpose().to_cols_array(),
        }
    }
}

/// Anything that can report the current projection matrix.
///
/// Implemented by render backends. Queries must happen on the thread that
/// owns the backend state.
pub trait ProjectionSource {
    /// Current projection as 16 floats in [`ProjectionSource::layout`].
    fn raw_projection(&self) -> Result<[f32; 16]>;

    /// Layout of [`ProjectionSource::raw_projection`]. Defaults to column-major.
    fn layout(&self) -> MatrixLayout {
        MatrixLayout::ColumnMajor
    }
}

/// A projection held by value.
///
/// For hosts that compute the projection themselves rather than querying a
/// live backend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StaticProjection {
    raw: [f32; 16],
    layout: MatrixLayout,
}

impl StaticProjection {
    /// Wrap raw floats in the given layout.
    pub fn from_raw(raw: [f32; 16], layout: MatrixLayout) -> Self {
        Self { raw, layout }
    }

    /// Wrap a matrix (stored column-major).
    pub fn from_matrix(matrix: Mat4) -> Self {
        Self::from_raw(matrix.to_cols_array(), MatrixLayout::ColumnMajor)
    }

    /// Right-handed OpenGL perspective (depth in [-1, 1]).
    pub fn perspective_gl(fov_y_radians: f32, aspect_ratio: f32, z_near: f32, z_far: f32) -> Self {
        Self::from_matrix(Mat4::perspective_rh_gl(fov_y_radians, aspect_ratio, z_near, z_far))
    }

    /// Right-handed OpenGL orthographic projection (depth in [-1, 1]).
    pub fn orthographic_gl(left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) -> Self {
        Self::from_matrix(Mat4::orthographic_rh_gl(left, right, bottom, top, near, far))
    }

    /// The stored projection as a matrix.
    pub fn matrix(&self) -> Mat4 {
        self.layout.to_matrix(&self.raw)
    }
}

impl ProjectionSource for StaticProjection {
    fn raw_projection(&self) -> Result<[f32; 16]> {
        Ok(self.raw)
    }

    fn layout(&self) -> MatrixLayout {
        self.layout
    }
}

#[cfg(test)]
#[path = "projection_tests.rs"]
mod tests;
