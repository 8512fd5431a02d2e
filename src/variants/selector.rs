//! Display selection for variant catalogs.
//!
//! `select` takes an ordered catalog of variants and a display budget and
//! returns the variants to show, in stable catalog order:
//!
//! 1. Base kinds (`Normal`/`Parallel`) are always included, budget or not.
//! 2. Owned `Other` variants (quantity > 0) are always included, even when
//!    that pushes the result past the budget. Owned copies are never hidden.
//! 3. Unowned `Other` variants fill whatever budget is left, in catalog
//!    order; the rest are dropped.
//!
//! The function is a pure transform: no mutation of the input, no shared
//! state, deterministic output.

use smallvec::SmallVec;

use super::record::{Variant, VariantKind};

/// Default display budget.
pub const DEFAULT_MAX_LENGTH: usize = 5;

/// Where a variant falls in the display rules.
///
/// The match in `classify` is exhaustive so that dropping unrecognized
/// kinds stays an explicit policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Disposition {
    /// Always displayed.
    Base,
    /// Displayed subject to budget and quantity rules.
    Budgeted,
    /// Not displayed.
    Dropped,
}

const fn classify(kind: VariantKind) -> Disposition {
    match kind {
        VariantKind::Normal | VariantKind::Parallel => Disposition::Base,
        VariantKind::Other => Disposition::Budgeted,
        VariantKind::Unrecognized => Disposition::Dropped,
    }
}

/// Select the variants to display from `variants`, targeting at most
/// `max_length` entries.
///
/// `max_length` is a soft cap: base variants and owned `Other` variants are
/// included even when they alone exceed it. A budget at or below the base
/// count leaves zero slots for unowned `Other` variants.
///
/// Total over its input domain: never panics, never errors.
///
/// ## Example
///
/// ```
/// use variant_display::{select, Variant, VariantKind};
///
/// let catalog = vec![
///     Variant::new("Normal", 0, VariantKind::Normal),
///     Variant::new("Reverse Holo", 0, VariantKind::Parallel),
///     Variant::new("Championship", 2, VariantKind::Other),
///     Variant::new("Staff", 0, VariantKind::Other),
/// ];
///
/// let shown = select(&catalog, 3);
/// let names: Vec<_> = shown.iter().map(|v| v.name.as_str()).collect();
/// assert_eq!(names, ["Normal", "Reverse Holo", "Championship"]);
/// ```
#[must_use]
pub fn select(variants: &[Variant], max_length: usize) -> Vec<Variant> {
    if variants.is_empty() {
        return Vec::new();
    }

    // Stable partition into base and budgeted records, catalog order.
    let mut base: SmallVec<[&Variant; 8]> = SmallVec::new();
    let mut budgeted: SmallVec<[&Variant; 8]> = SmallVec::new();
    for variant in variants {
        match classify(variant.kind) {
            Disposition::Base => base.push(variant),
            Disposition::Budgeted => budgeted.push(variant),
            Disposition::Dropped => {}
        }
    }

    // Slots left for budgeted records after guaranteeing every base record.
    let remaining = max_length.saturating_sub(base.len());
    let positive = budgeted.iter().filter(|v| v.is_owned()).count();

    // More owned variants than slots: exceed the budget rather than hide
    // owned copies. Unowned budgeted records are dropped entirely.
    if positive > remaining {
        return base
            .into_iter()
            .chain(budgeted.into_iter().filter(|v| v.is_owned()))
            .cloned()
            .collect();
    }

    // Owned records never consume the zero-quantity slot budget.
    let mut result: Vec<Variant> = base.into_iter().cloned().collect();
    let mut zero_slots = remaining - positive;
    for variant in budgeted {
        if variant.is_owned() {
            result.push(variant.clone());
        } else if zero_slots > 0 {
            result.push(variant.clone());
            zero_slots -= 1;
        }
    }
    result
}

/// `select` with the default budget of [`DEFAULT_MAX_LENGTH`].
#[must_use]
pub fn select_default(variants: &[Variant]) -> Vec<Variant> {
    select(variants, DEFAULT_MAX_LENGTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variant(name: &str, quantity: u32, kind: VariantKind) -> Variant {
        Variant::new(name, quantity, kind)
    }

    fn names(selected: &[Variant]) -> Vec<&str> {
        selected.iter().map(|v| v.name.as_str()).collect()
    }

    #[test]
    fn test_empty_input_short_circuits() {
        assert!(select(&[], 0).is_empty());
        assert!(select(&[], 5).is_empty());
    }

    #[test]
    fn test_base_kept_at_zero_budget() {
        let catalog = vec![variant("X", 0, VariantKind::Normal)];
        assert_eq!(names(&select(&catalog, 0)), ["X"]);
    }

    #[test]
    fn test_owned_other_fits_budget() {
        let catalog = vec![
            variant("Normal", 0, VariantKind::Normal),
            variant("Holo", 0, VariantKind::Parallel),
            variant("Champ", 2, VariantKind::Other),
            variant("Staff", 0, VariantKind::Other),
        ];
        // remaining = 1, one owned other fills it; Staff has no slot left.
        assert_eq!(names(&select(&catalog, 3)), ["Normal", "Holo", "Champ"]);
    }

    #[test]
    fn test_overflow_keeps_all_owned() {
        let catalog = vec![
            variant("A", 0, VariantKind::Other),
            variant("B", 1, VariantKind::Other),
            variant("C", 1, VariantKind::Other),
            variant("D", 1, VariantKind::Other),
        ];
        // Three owned others against two slots: budget is exceeded and the
        // unowned record is dropped.
        assert_eq!(names(&select(&catalog, 2)), ["B", "C", "D"]);
    }

    #[test]
    fn test_zero_quantity_fill_in_order() {
        let catalog = vec![
            variant("A", 0, VariantKind::Other),
            variant("B", 0, VariantKind::Other),
        ];
        assert_eq!(names(&select(&catalog, 5)), ["A", "B"]);
    }

    #[test]
    fn test_zero_quantity_surplus_dropped() {
        let catalog = vec![
            variant("Normal", 0, VariantKind::Normal),
            variant("A", 0, VariantKind::Other),
            variant("B", 0, VariantKind::Other),
            variant("C", 0, VariantKind::Other),
        ];
        assert_eq!(names(&select(&catalog, 3)), ["Normal", "A", "B"]);
    }

    #[test]
    fn test_budget_below_base_count() {
        let catalog = vec![
            variant("Normal", 0, VariantKind::Normal),
            variant("Holo", 0, VariantKind::Parallel),
            variant("Promo", 0, VariantKind::Other),
        ];
        // remaining clamps to zero; the unowned promo never appears.
        assert_eq!(names(&select(&catalog, 1)), ["Normal", "Holo"]);
    }

    #[test]
    fn test_owned_other_included_at_zero_remaining() {
        let catalog = vec![
            variant("Normal", 0, VariantKind::Normal),
            variant("Promo", 3, VariantKind::Other),
        ];
        assert_eq!(names(&select(&catalog, 1)), ["Normal", "Promo"]);
    }

    #[test]
    fn test_unrecognized_dropped_from_both_partitions() {
        let catalog = vec![
            variant("Normal", 0, VariantKind::Normal),
            variant("Misprint", 4, VariantKind::Unrecognized),
            variant("Promo", 1, VariantKind::Other),
        ];
        assert_eq!(names(&select(&catalog, 5)), ["Normal", "Promo"]);
    }

    #[test]
    fn test_input_not_consumed() {
        let catalog = vec![variant("Normal", 0, VariantKind::Normal)];
        let before = catalog.clone();
        let _ = select(&catalog, 5);
        assert_eq!(catalog, before);
    }

    #[test]
    fn test_default_budget() {
        let catalog: Vec<_> = (0..8)
            .map(|i| variant(&format!("Z{i}"), 0, VariantKind::Other))
            .collect();
        assert_eq!(select_default(&catalog).len(), DEFAULT_MAX_LENGTH);
    }
}
