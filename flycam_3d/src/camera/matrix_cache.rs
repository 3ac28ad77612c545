/// Lazily recomputed matrix with an explicit {Clean, Dirty} state.
///
/// The camera keeps one of these per derived matrix (world, view) so the
/// two are invalidated and validated independently. Interior mutability
/// lets the camera's getters take `&self`.

use std::cell::Cell;
use glam::Mat4;

#[derive(Debug, Clone, Copy, PartialEq)]
enum CacheState {
    Dirty,
    Clean(Mat4),
}

/// Recompute counters, the observation hook for cache behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of times the world matrix was rebuilt
    pub world_recomputes: u64,
    /// Number of times the view matrix was rebuilt
    pub view_recomputes: u64,
}

#[derive(Debug, Clone)]
pub(crate) struct CachedMatrix {
    state: Cell<CacheState>,
    recomputes: Cell<u64>,
}

impl CachedMatrix {
    /// A cache that starts dirty.
    pub(crate) fn new() -> Self {
        Self {
            state: Cell::new(CacheState::Dirty),
            recomputes: Cell::new(0),
        }
    }

    pub(crate) fn invalidate(&self) {
        self.state.set(CacheState::Dirty);
    }

    pub(crate) fn is_dirty(&self) -> bool {
        matches!(self.state.get(), CacheState::Dirty)
    }

    pub(crate) fn recomputes(&self) -> u64 {
        self.recomputes.get()
    }

    /// Return the cached value, running `compute` first if dirty.
    ///
    /// `compute` may itself read other caches; only this cache's state is
    /// touched here.
    pub(crate) fn get_or_recompute(&self, compute: impl FnOnce() -> Mat4) -> Mat4 {
        match self.state.get() {
            CacheState::Clean(value) => value,
            CacheState::Dirty => {
                let value = compute();
                self.state.set(CacheState::Clean(value));
                self.recomputes.set(self.recomputes.get() + 1);
                value
            }
        }
    }
}
