//! Error types for the Flycam3D camera
//!
//! The camera's lazy matrix path never fails: degenerate input propagates
//! as NaN/Inf. These errors only come out of the checked entry points
//! (`try_look_at`, `check_basis`) and out of projection backends.

use std::fmt;

/// Result type for Flycam3D operations
pub type Result<T> = std::result::Result<T, Error>;

/// Flycam3D errors
#[derive(Debug, Clone)]
pub enum Error {
    /// A zero-length or parallel vector would have been normalized or
    /// crossed, or the camera basis is no longer orthonormal
    DegenerateBasis(String),

    /// The projection backend could not supply a matrix
    BackendError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DegenerateBasis(msg) => write!(f, "Degenerate camera basis: {}", msg),
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Log an ERROR (with file:line) and build the given [`Error`] variant
///
/// # Example
///
/// ```no_run
/// # use flycam_3d::flycam_err;
/// let err = flycam_err!(DegenerateBasis, "flycam::Camera", "forward is zero-length");
/// let err = flycam_err!(BackendError, "flycam::Camera", "no current context");
/// ```
#[macro_export]
macro_rules! flycam_err {
    ($variant:ident, $source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::flycam_error!($source, "{}", message);
        $crate::flycam::Error::$variant(message)
    }};
}

/// Log an ERROR and return early with the given [`Error`] variant
#[macro_export]
macro_rules! flycam_bail {
    ($variant:ident, $source:expr, $($arg:tt)*) => {
        return Err($crate::flycam_err!($variant, $source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
