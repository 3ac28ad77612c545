//! Camera module — free-flying camera, projection seam, frustum.
//!
//! The camera is owned and driven by the caller; this crate keeps no
//! registry of cameras.

mod basis;
mod camera;
mod camera_config;
mod frustum;
mod matrix_cache;
mod plane;
mod projection;

pub use camera::Camera;
pub use camera_config::{AngleUnit, CameraConfig, PivotMode};
pub use frustum::{
    AABB, Frustum, FrustumTest,
    PLANE_LEFT, PLANE_RIGHT, PLANE_BOTTOM, PLANE_TOP, PLANE_NEAR, PLANE_FAR,
};
pub use matrix_cache::CacheStats;
pub use plane::Plane;
pub use projection::{MatrixLayout, ProjectionSource, StaticProjection};
