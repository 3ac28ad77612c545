/// Camera — free-flying camera with lazily derived world/view matrices.
///
/// The camera owns its pose (position plus a right/up/forward basis) and
/// derives the world and view transforms on demand. Each derived matrix
/// has its own dirty-tracked cache; every mutator invalidates both.
///
/// The projection is never read from ambient backend state: callers pass a
/// matrix or a [`ProjectionSource`] to the operations that need one.
///
/// Single-threaded: the caches use `Cell`, so a `Camera` is `Send` but not
/// `Sync`. Wrap it in a `Mutex` to share it across threads.

use glam::{Mat4, Vec3, Vec4};
use crate::error::Result;
use super::basis::{basis_cross, derive_right_up, orthonormalize};
use super::camera_config::{CameraConfig, PivotMode};
use super::frustum::Frustum;
use super::matrix_cache::{CacheStats, CachedMatrix};
use super::projection::ProjectionSource;

const SOURCE: &str = "flycam::Camera";
const FRUSTUM_SOURCE: &str = "flycam::Frustum";

/// Free-flying camera.
///
/// Canonical pose: at the origin, forward +Z, up +Y, right +X.
/// The camera looks down its local -Z axis; the world matrix maps local
/// -Z onto `forward`.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    forward: Vec3,
    right: Vec3,
    up: Vec3,
    world: CachedMatrix,
    view: CachedMatrix,
    config: CameraConfig,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}

impl Camera {
    /// Camera in the canonical pose with the default configuration.
    pub fn new() -> Self {
        Self::with_config(CameraConfig::default())
    }

    /// Camera in the canonical pose with a custom configuration.
    pub fn with_config(config: CameraConfig) -> Self {
        Self {
            position: Vec3::ZERO,
            forward: Vec3::Z,
            right: Vec3::X,
            up: Vec3::Y,
            world: CachedMatrix::new(),
            view: CachedMatrix::new(),
            config,
        }
    }

    /// Camera at `eye` looking at `target` (see [`Camera::look_at`]).
    pub fn looking_at(eye: Vec3, target: Vec3, world_up: Vec3) -> Self {
        let mut camera = Self::new();
        camera.look_at(eye, target, world_up);
        camera
    }

    // ===== POSE =====

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn forward(&self) -> Vec3 {
        self.forward
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn config(&self) -> CameraConfig {
        self.config
    }

    /// Replace the configuration.
    ///
    /// Only affects later controls and checks; the pose and the cached
    /// matrices are kept as they are.
    pub fn set_config(&mut self, config: CameraConfig) {
        if config != self.config {
            crate::flycam_info!(
                SOURCE,
                "Camera config changed: pivot_mode={:?} angle_unit={:?}",
                config.pivot_mode,
                config.angle_unit
            );
        }
        self.config = config;
    }

    // ===== DERIVED MATRICES =====

    /// Identity with column 3 set to the position. Not cached.
    pub fn translation_matrix(&self) -> Mat4 {
        Mat4::from_cols(Vec4::X, Vec4::Y, Vec4::Z, self.position.extend(1.0))
    }

    /// Columns `right`, `up`, `-forward`. Not cached.
    pub fn orientation_matrix(&self) -> Mat4 {
        Mat4::from_cols(
            self.right.extend(0.0),
            self.up.extend(0.0),
            (-self.forward).extend(0.0),
            Vec4::W,
        )
    }

    /// Camera-to-world transform, `translation * orientation`.
    ///
    /// Layout: upper-left 3x3 is the orientation block, column 3 is the
    /// position. Recomputed only after a mutation.
    pub fn world_matrix(&self) -> Mat4 {
        self.world.get_or_recompute(|| {
            crate::flycam_trace!(SOURCE, "Recomputing world matrix");
            self.translation_matrix() * self.orientation_matrix()
        })
    }

    /// World-to-camera transform, the inverse of [`Camera::world_matrix`].
    ///
    /// May clean the world cache as a side effect when that one is dirty
    /// too. A singular world matrix (degenerate basis) yields NaN/Inf.
    pub fn view_matrix(&self) -> Mat4 {
        self.view.get_or_recompute(|| {
            crate::flycam_trace!(SOURCE, "Recomputing view matrix");
            self.world_matrix().inverse()
        })
    }

    /// `projection * view`.
    pub fn view_projection_matrix(&self, projection: &Mat4) -> Mat4 {
        *projection * self.view_matrix()
    }

    /// Pull the current projection from a backend.
    ///
    /// Pure read: camera state is not touched.
    pub fn projection_matrix(&self, source: &dyn ProjectionSource) -> Result<Mat4> {
        let raw = source
            .raw_projection()
            .map_err(|e| crate::flycam_err!(BackendError, SOURCE, "Projection query failed: {}", e))?;
        Ok(source.layout().to_matrix(&raw))
    }

    /// Whether the world matrix will be rebuilt on next read.
    pub fn is_world_dirty(&self) -> bool {
        self.world.is_dirty()
    }

    /// Whether the view matrix will be rebuilt on next read.
    pub fn is_view_dirty(&self) -> bool {
        self.view.is_dirty()
    }

    /// How many times each cached matrix has been rebuilt.
    pub fn cache_stats(&self) -> CacheStats {
        CacheStats {
            world_recomputes: self.world.recomputes(),
            view_recomputes: self.view.recomputes(),
        }
    }

    // ===== FRUSTUM =====

    /// Frustum planes for the current view under `projection`.
    ///
    /// Recomputed on every call since the projection may change between
    /// calls. Planes are ordered left, right, bottom, top, near, far.
    pub fn frustum(&self, projection: &Mat4) -> Frustum {
        let frustum = Frustum::from_view_projection(&self.view_projection_matrix(projection));
        if !frustum.is_finite() {
            crate::flycam_warn!(FRUSTUM_SOURCE, "Frustum has non-finite planes (degenerate basis or projection)");
        }
        frustum
    }

    /// [`Camera::frustum`] with the projection pulled from a backend.
    pub fn frustum_from(&self, source: &dyn ProjectionSource) -> Result<Frustum> {
        let projection = self.projection_matrix(source)?;
        Ok(self.frustum(&projection))
    }

    // ===== CONTROLS =====

    /// Rebuild the whole basis from an eye, a target and an up hint.
    ///
    /// `forward = normalize(target - eye)`, `right = normalize(forward x world_up)`,
    /// `up = right x forward` (not `world_up`, so the basis stays orthogonal).
    /// `target == eye` or `world_up` parallel to the view direction gives a
    /// NaN basis; use [`Camera::try_look_at`] to reject those instead.
    pub fn look_at(&mut self, eye: Vec3, target: Vec3, world_up: Vec3) {
        self.invalidate();

        self.forward = (target - eye).normalize();
        let (right, up) = derive_right_up(self.forward, world_up);
        self.right = right;
        self.up = up;
        self.position = eye;

        crate::flycam_debug!(SOURCE, "look_at eye={:?} target={:?}", eye, target);
    }

    /// [`Camera::look_at`] that refuses degenerate input.
    ///
    /// On error the camera is left untouched.
    pub fn try_look_at(&mut self, eye: Vec3, target: Vec3, world_up: Vec3) -> Result<()> {
        let epsilon = self.config.degenerate_epsilon;

        let direction = target - eye;
        if direction.length() <= epsilon {
            crate::flycam_bail!(DegenerateBasis, SOURCE, "look_at target {:?} coincides with eye {:?}", target, eye);
        }
        if world_up.length() <= epsilon {
            crate::flycam_bail!(DegenerateBasis, SOURCE, "look_at up hint {:?} is zero-length", world_up);
        }
        if basis_cross(direction.normalize(), world_up.normalize()).length() <= epsilon {
            crate::flycam_bail!(DegenerateBasis, SOURCE, "look_at up hint {:?} is parallel to view direction {:?}", world_up, direction);
        }

        self.look_at(eye, target, world_up);
        Ok(())
    }

    /// Move along the world X and Y axes.
    ///
    /// World axes, not the camera's right/up: panning stays on the ground
    /// plane regardless of tilt.
    pub fn pan(&mut self, horizontal: f32, vertical: f32) {
        self.invalidate();
        self.position.x += horizontal;
        self.position.y += vertical;
    }

    /// Move along the world Z axis.
    pub fn zoom(&mut self, delta: f32) {
        self.invalidate();
        self.position.z += delta;
    }

    /// Rotate `forward` by `yaw` around `up`, then by `pitch` around `right`.
    ///
    /// Both rotations use the axes as they were before the call. Angles are
    /// in `config().angle_unit`. What happens to `right`/`up` afterwards
    /// depends on `config().pivot_mode`.
    pub fn pivot(&mut self, yaw: f32, pitch: f32) {
        self.invalidate();

        let unit = self.config.angle_unit;
        let yaw_rotation = Mat4::from_axis_angle(self.up, unit.to_radians(yaw));
        let pitch_rotation = Mat4::from_axis_angle(self.right, unit.to_radians(pitch));
        let rotation = pitch_rotation * yaw_rotation;

        self.forward = rotation.transform_vector3(self.forward).normalize();
        match self.config.pivot_mode {
            PivotMode::Reorthonormalize => {
                // up turns with forward, so there is no pole at +-90 degrees pitch
                let (right, up) = orthonormalize(self.forward, rotation.transform_vector3(self.up));
                self.right = right;
                self.up = up;
            }
            PivotMode::Legacy => {
                self.right = self.right.normalize();
                self.up = self.up.normalize();
            }
        }
    }

    // ===== VALIDATION =====

    /// Check that the basis is finite, unit-length and mutually orthogonal
    /// within `config().orthogonality_tolerance`.
    ///
    /// Diagnostic only; the camera keeps working (with drift or NaN) either way.
    pub fn check_basis(&self) -> Result<()> {
        let tolerance = self.config.orthogonality_tolerance;
        let axes = [("forward", self.forward), ("right", self.right), ("up", self.up)];

        for (name, axis) in axes {
            if !axis.is_finite() {
                crate::flycam_bail!(DegenerateBasis, SOURCE, "{} is not finite: {:?}", name, axis);
            }
            if (axis.length() - 1.0).abs() > tolerance {
                crate::flycam_bail!(DegenerateBasis, SOURCE, "{} is not unit length: {}", name, axis.length());
            }
        }

        let pairs = [
            ("forward", self.forward, "right", self.right),
            ("forward", self.forward, "up", self.up),
            ("right", self.right, "up", self.up),
        ];
        for (a_name, a, b_name, b) in pairs {
            let dot = a.dot(b);
            if dot.abs() > tolerance {
                crate::flycam_bail!(DegenerateBasis, SOURCE, "{} and {} are not orthogonal (dot = {})", a_name, b_name, dot);
            }
        }

        Ok(())
    }

    fn invalidate(&mut self) {
        self.world.invalidate();
        self.view.invalidate();
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
