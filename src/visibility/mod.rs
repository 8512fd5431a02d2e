//! Viewport-visibility watcher for lazy rendering.
//!
//! Presentation layers use this module to decide *when* to render a
//! variant list; it never decides *what* the list contains. The watcher is
//! decoupled from any platform visibility API: an adapter observes the
//! real viewport and feeds intersection ratios in.
//!
//! ## Key Types
//!
//! - `TargetId` / `RootId`: Opaque identifiers for the observed target and
//!   an optional alternate viewport root
//! - `WatchConfig`: Threshold, root, and root-margin settings with the
//!   conventional defaults
//! - `VisibilityEvent` / `VisibilityListener`: Enter/exit notifications
//!   and the subscription seam
//! - `VisibilityWatcher`: The observing/released resource handle

pub mod config;
pub mod event;
pub mod watcher;

pub use config::{EdgeInsets, RootId, TargetId, WatchConfig};
pub use event::{VisibilityEvent, VisibilityListener};
pub use watcher::VisibilityWatcher;
