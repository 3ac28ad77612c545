/*!
# Flycam3D

Free-flying camera for real-time 3D renderers.

The camera tracks a position and an orthonormal right/up/forward basis,
derives its world and view matrices lazily (each behind its own dirty-tracked
cache), offers interactive controls (pan, zoom, pivot, look-at) and extracts
the six view-frustum planes for culling.

## Architecture

- **Camera**: pose, cached world/view matrices, controls, frustum extraction
- **ProjectionSource**: seam to the render backend that owns the projection
- **Frustum** / **Plane**: culling planes and point/sphere/AABB queries
- **Diagnostics**: global logger registry used by the `flycam_*!` macros

Math types come from `glam`, re-exported at the crate root.
*/

// Internal modules
mod diagnostics;
mod error;
pub mod camera;
pub mod log;

// Main flycam namespace module
pub mod flycam {
    // Error types
    pub use crate::error::{Error, Result};

    // Logger registry
    pub use crate::diagnostics::Diagnostics;

    // Camera and culling types
    pub use crate::camera::*;

    // Logging sub-module (types only; macros live at the crate root)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }
}

// Re-export math library at crate root
pub use glam;
