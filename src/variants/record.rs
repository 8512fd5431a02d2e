//! Variant records - the catalog entries the selector operates on.
//!
//! A `Variant` describes one printing of a collectible item: its display
//! name, how many copies the user owns, and which kind of printing it is.
//! The kind drives the display rules; the name is carried through untouched.

use serde::{Deserialize, Serialize};

/// Kind of a variant printing.
///
/// `Normal` and `Parallel` are base kinds: they are always displayed.
/// `Other` kinds compete for the remaining display slots.
///
/// Tags outside the known set deserialize to `Unrecognized`, which the
/// selector drops from both partitions. That drop is a deliberate lenient
/// classification policy, not a validation failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantKind {
    /// Standard printing.
    Normal,
    /// Parallel printing (e.g. reverse holo).
    Parallel,
    /// Any special printing (promo, staff, championship, ...).
    Other,
    /// Tag outside the known set; excluded from display selection.
    #[serde(other)]
    Unrecognized,
}

impl VariantKind {
    /// Whether this kind is a base kind, displayed unconditionally.
    #[must_use]
    pub const fn is_base(self) -> bool {
        matches!(self, VariantKind::Normal | VariantKind::Parallel)
    }
}

/// One variant record in a catalog.
///
/// ## Example
///
/// ```
/// use variant_display::{Variant, VariantKind};
///
/// let promo = Variant::new("Staff", 2, VariantKind::Other);
/// assert_eq!(promo.quantity, 2);
/// assert!(!promo.kind.is_base());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    /// Display label. Not consulted by selection.
    pub name: String,

    /// Owned copies of this variant.
    pub quantity: u32,

    /// Printing kind. Serialized as `type` to match the catalog format.
    #[serde(rename = "type")]
    pub kind: VariantKind,
}

impl Variant {
    /// Create a new variant record.
    #[must_use]
    pub fn new(name: impl Into<String>, quantity: u32, kind: VariantKind) -> Self {
        Self {
            name: name.into(),
            quantity,
            kind,
        }
    }

    /// Whether the user owns at least one copy.
    #[must_use]
    pub const fn is_owned(&self) -> bool {
        self.quantity > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_kinds() {
        assert!(VariantKind::Normal.is_base());
        assert!(VariantKind::Parallel.is_base());
        assert!(!VariantKind::Other.is_base());
        assert!(!VariantKind::Unrecognized.is_base());
    }

    #[test]
    fn test_owned() {
        assert!(Variant::new("Holo", 1, VariantKind::Parallel).is_owned());
        assert!(!Variant::new("Holo", 0, VariantKind::Parallel).is_owned());
    }

    #[test]
    fn test_serialization_field_names() {
        let variant = Variant::new("Championship", 2, VariantKind::Other);
        let json = serde_json::to_string(&variant).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Championship","quantity":2,"type":"other"}"#
        );

        let back: Variant = serde_json::from_str(&json).unwrap();
        assert_eq!(back, variant);
    }

    #[test]
    fn test_unknown_tag_deserializes_leniently() {
        let variant: Variant =
            serde_json::from_str(r#"{"name":"Misprint","quantity":1,"type":"foil"}"#).unwrap();
        assert_eq!(variant.kind, VariantKind::Unrecognized);
    }
}
