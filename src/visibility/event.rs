//! Visibility events and the listener seam.

use serde::{Deserialize, Serialize};

use super::config::TargetId;

/// Event emitted when a target's visibility crosses the threshold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisibilityEvent {
    /// The target became visible (ratio reached the threshold).
    EnteredView,
    /// The target stopped being visible (ratio fell below the threshold).
    ExitedView,
}

/// Receiver for visibility events.
///
/// Implemented for any `FnMut(TargetId, VisibilityEvent)` closure, so
/// callers can subscribe with either a type or a closure:
///
/// ```
/// use variant_display::visibility::{TargetId, VisibilityEvent, VisibilityWatcher, WatchConfig};
///
/// let mut seen = Vec::new();
/// let mut watcher = VisibilityWatcher::observe(
///     TargetId::new(1),
///     WatchConfig::default(),
///     |target: TargetId, event: VisibilityEvent| seen.push((target, event)),
/// );
/// watcher.deliver(1.0);
/// drop(watcher);
/// assert_eq!(seen, [(TargetId::new(1), VisibilityEvent::EnteredView)]);
/// ```
pub trait VisibilityListener {
    /// Called once per delivered visibility sample.
    fn on_visibility(&mut self, target: TargetId, event: VisibilityEvent);
}

impl<F> VisibilityListener for F
where
    F: FnMut(TargetId, VisibilityEvent),
{
    fn on_visibility(&mut self, target: TargetId, event: VisibilityEvent) {
        self(target, event);
    }
}
