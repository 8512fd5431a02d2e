//! # variant-display
//!
//! Display selection rules for collectible card variant lists.
//!
//! A card can exist in several variant printings (normal, reverse holo,
//! staff promo, ...). Given an ordered catalog of variants and a display
//! budget, [`select`] decides which ones to show:
//!
//! 1. **Base kinds** (`normal`/`parallel`) are always shown.
//! 2. **Owned specials** (`other` kinds with quantity > 0) are always
//!    shown, even past the budget - owned copies are never hidden.
//! 3. **Unowned specials** fill whatever budget remains, in catalog order.
//!
//! The budget is therefore a soft cap, and selection is a deterministic,
//! side-effect-free transform: stable order, no mutation of the input,
//! safe to call concurrently without coordination.
//!
//! ## Modules
//!
//! - `variants`: Catalog data model and the display selector
//! - `visibility`: Platform-decoupled viewport watcher for lazy rendering
//!   of the selected list

pub mod variants;
pub mod visibility;

// Re-export commonly used types
pub use crate::variants::{select, select_default, Variant, VariantKind, DEFAULT_MAX_LENGTH};

pub use crate::visibility::{
    EdgeInsets, RootId, TargetId, VisibilityEvent, VisibilityListener, VisibilityWatcher,
    WatchConfig,
};
