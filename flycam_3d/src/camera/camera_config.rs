/// Camera configuration.
///
/// Plain data with defaults; passed to `Camera::with_config`.

/// How `Camera::pivot` treats `right`/`up` after rotating `forward`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PivotMode {
    /// Re-derive `right` and `up` from the rotated `forward` and the
    /// pre-rotation `up`. Keeps the basis orthonormal.
    Reorthonormalize,
    /// Only normalize `right` and `up`. Lengths stay unit but the basis
    /// drifts away from orthogonal as soon as `forward` rotates.
    Legacy,
}

/// Unit of the angles handed to `Camera::pivot`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AngleUnit {
    Degrees,
    Radians,
}

impl AngleUnit {
    /// Convert an angle in this unit to radians.
    pub fn to_radians(self, angle: f32) -> f32 {
        match self {
            AngleUnit::Degrees => angle.to_radians(),
            AngleUnit::Radians => angle,
        }
    }
}

/// Camera configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraConfig {
    /// Basis handling after `pivot`
    pub pivot_mode: PivotMode,
    /// Unit of `pivot` yaw/pitch
    pub angle_unit: AngleUnit,
    /// Lengths at or below this are treated as zero by `try_look_at`
    pub degenerate_epsilon: f32,
    /// Max deviation from unit length / orthogonality accepted by `check_basis`
    pub orthogonality_tolerance: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            pivot_mode: PivotMode::Reorthonormalize,
            angle_unit: AngleUnit::Degrees,
            degenerate_epsilon: 1e-6,
            orthogonality_tolerance: 1e-4,
        }
    }
}

impl CameraConfig {
    pub fn with_pivot_mode(mut self, pivot_mode: PivotMode) -> Self {
        self.pivot_mode = pivot_mode;
        self
    }

    pub fn with_angle_unit(mut self, angle_unit: AngleUnit) -> Self {
        self.angle_unit = angle_unit;
        self
    }

    pub fn with_degenerate_epsilon(mut self, epsilon: f32) -> Self {
        self.degenerate_epsilon = epsilon;
        self
    }

    pub fn with_orthogonality_tolerance(mut self, tolerance: f32) -> Self {
        self.orthogonality_tolerance = tolerance;
        self
    }
}
