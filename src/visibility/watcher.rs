//! The visibility watcher handle.
//!
//! `VisibilityWatcher` is the platform-decoupled core of a lazy-rendering
//! helper: a platform adapter watches a display target's intersection with
//! a viewport and feeds ratio samples to `deliver` whenever visibility
//! crosses the configured threshold. The watcher classifies each sample
//! and dispatches an enter/exit event to its listener.
//!
//! The handle has exactly two states: observing and released. `destroy`
//! releases it; a released watcher drops all further samples.

use super::config::{TargetId, WatchConfig};
use super::event::{VisibilityEvent, VisibilityListener};

/// Watches one display target and notifies a listener on visibility
/// transitions.
#[derive(Debug)]
pub struct VisibilityWatcher<L> {
    target: TargetId,
    config: WatchConfig,
    listener: L,
    observing: bool,
}

impl<L: VisibilityListener> VisibilityWatcher<L> {
    /// Acquire a watcher for `target`, starting in the observing state.
    #[must_use]
    pub fn observe(target: TargetId, config: WatchConfig, listener: L) -> Self {
        log::trace!(
            "observing {} (threshold {})",
            target,
            config.threshold
        );
        Self {
            target,
            config,
            listener,
            observing: true,
        }
    }

    /// The observed target.
    #[must_use]
    pub fn target(&self) -> TargetId {
        self.target
    }

    /// The configuration in effect.
    #[must_use]
    pub fn config(&self) -> &WatchConfig {
        &self.config
    }

    /// Whether the watcher is still observing its target.
    #[must_use]
    pub fn is_observing(&self) -> bool {
        self.observing
    }

    /// Deliver an intersection ratio sample for the target.
    ///
    /// The platform adapter calls this when the ratio crosses the
    /// configured threshold. A ratio at or above the threshold dispatches
    /// [`VisibilityEvent::EnteredView`], anything below dispatches
    /// [`VisibilityEvent::ExitedView`]. Samples delivered after `destroy`
    /// are dropped.
    pub fn deliver(&mut self, ratio: f64) {
        if !self.observing {
            return;
        }
        let event = if ratio >= self.config.threshold {
            VisibilityEvent::EnteredView
        } else {
            VisibilityEvent::ExitedView
        };
        log::trace!("{}: ratio {} -> {:?}", self.target, ratio, event);
        self.listener.on_visibility(self.target, event);
    }

    /// Re-observe the same target.
    ///
    /// The pending configuration is accepted but not applied; the watcher
    /// keeps the configuration it was acquired with.
    // TODO: apply `_new_config` here once the intended re-configure
    // semantics are confirmed; today re-observing keeps the old settings.
    pub fn update(&mut self, _new_config: WatchConfig) {
        log::debug!("{}: update re-observes with existing config", self.target);
        self.observing = true;
    }

    /// Release the watcher: stop observing and drop future samples.
    pub fn destroy(&mut self) {
        if self.observing {
            log::trace!("releasing {}", self.target);
        }
        self.observing = false;
    }
}
