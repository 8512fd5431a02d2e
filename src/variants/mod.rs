//! Variant catalog model and display selection.
//!
//! ## Key Types
//!
//! - `VariantKind`: Closed printing-kind tag set with a lenient catch-all
//! - `Variant`: One catalog entry (name, owned quantity, kind)
//! - `select`: The display selection rules over an ordered catalog

pub mod record;
pub mod selector;

pub use record::{Variant, VariantKind};
pub use selector::{select, select_default, DEFAULT_MAX_LENGTH};
