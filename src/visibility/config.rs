//! Watcher configuration.

use serde::{Deserialize, Serialize};

/// Identifier for a display target under observation.
///
/// Opaque to the watcher; the platform layer assigns meaning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TargetId(pub u32);

impl TargetId {
    /// Create a new target ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for TargetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Target({})", self.0)
    }
}

/// Identifier for an alternate viewport element used as the clipping root.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RootId(pub u32);

impl RootId {
    /// Create a new root ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Per-edge pixel adjustment applied around the root's bounds.
///
/// Positive values grow the intersection region, negative values shrink it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeInsets {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl EdgeInsets {
    /// Uniform inset on all four edges.
    #[must_use]
    pub const fn uniform(px: i32) -> Self {
        Self {
            top: px,
            right: px,
            bottom: px,
            left: px,
        }
    }
}

/// Configuration for a visibility watcher.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WatchConfig {
    /// Intersection ratio that triggers enter/exit events (default: 0.1).
    /// A target counts as visible once at least this fraction of it
    /// intersects the root.
    pub threshold: f64,

    /// Alternate viewport element to clip against.
    /// `None` uses the platform viewport.
    pub root: Option<RootId>,

    /// Margin adjustment applied around the root's bounds.
    pub root_margin: EdgeInsets,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root: None,
            root_margin: EdgeInsets::default(),
        }
    }
}

impl WatchConfig {
    /// Create a new config with a custom threshold.
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Create a new config clipping against an alternate root.
    #[must_use]
    pub fn with_root(mut self, root: RootId) -> Self {
        self.root = Some(root);
        self
    }

    /// Create a new config with a root margin adjustment.
    #[must_use]
    pub fn with_root_margin(mut self, margin: EdgeInsets) -> Self {
        self.root_margin = margin;
        self
    }
}
