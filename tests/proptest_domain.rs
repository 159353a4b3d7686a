//! Property-Based Tests — Domain Layer Invariants
//!
//! Uses `proptest` to verify that the order aggregator keeps its
//! quantity bounds and total invariants across random action sequences.

use std::sync::Arc;

use proptest::prelude::*;
use rust_decimal::Decimal;

use menu_order::domain::{
    Catalog, CatalogItem, MAX_LINE_QUANTITY, MenuError, OrderAction, OrderAggregator,
};

/// Items with ids 0..len and prices drawn in cents.
fn catalog_strategy() -> impl Strategy<Value = Arc<Catalog>> {
    prop::collection::vec(0u32..10_000, 1..8).prop_map(|prices| {
        let items = prices
            .into_iter()
            .zip(0u32..)
            .map(|(cents, id)| {
                CatalogItem::new(id, format!("Item {id}"), "🍽", Decimal::new(i64::from(cents), 2), &[])
            })
            .collect();
        Arc::new(Catalog::load(items).unwrap())
    })
}

/// Actions over ids 0..10, so some ids fall outside the catalog.
fn action_strategy() -> impl Strategy<Value = OrderAction> {
    prop_oneof![
        8 => (0u32..10).prop_map(OrderAction::Increment),
        6 => (0u32..10).prop_map(OrderAction::Decrement),
        1 => Just(OrderAction::Reset),
    ]
}

fn expected_total(order: &OrderAggregator) -> Decimal {
    order
        .catalog()
        .all()
        .map(|item| item.price * Decimal::from(order.quantity(item.id).unwrap()))
        .sum()
}

// ── Order Aggregator Properties ─────────────────────────────

proptest! {
    /// Quantities never leave [0, MAX_LINE_QUANTITY].
    #[test]
    fn quantity_stays_in_bounds(
        catalog in catalog_strategy(),
        actions in prop::collection::vec(action_strategy(), 0..200),
    ) {
        let mut order = OrderAggregator::new(catalog);
        for action in actions {
            let _ = order.apply(action);
            for item in order.catalog().all() {
                let qty = order.quantity(item.id).unwrap();
                prop_assert!(qty <= MAX_LINE_QUANTITY, "quantity {qty} above cap");
            }
        }
    }

    /// Grand total equals the sum of price × quantity, and lines match.
    #[test]
    fn grand_total_matches_lines(
        catalog in catalog_strategy(),
        actions in prop::collection::vec(action_strategy(), 0..200),
    ) {
        let mut order = OrderAggregator::new(catalog);
        for action in actions {
            let _ = order.apply(action);
        }

        let snapshot = order.snapshot();
        let line_sum: Decimal = snapshot.lines.iter().map(|l| l.line_total).sum();
        prop_assert_eq!(snapshot.grand_total, line_sum);
        prop_assert_eq!(snapshot.grand_total, expected_total(&order));

        for line in &snapshot.lines {
            prop_assert!(line.quantity > 0);
            prop_assert_eq!(line.line_total, line.unit_price * Decimal::from(line.quantity));
        }
    }

    /// has_any_items agrees with the snapshot having lines.
    #[test]
    fn has_any_items_iff_snapshot_non_empty(
        catalog in catalog_strategy(),
        actions in prop::collection::vec(action_strategy(), 0..100),
    ) {
        let mut order = OrderAggregator::new(catalog);
        for action in actions {
            let _ = order.apply(action);
            prop_assert_eq!(order.has_any_items(), !order.snapshot().is_empty());
        }
    }

    /// Reset always yields an empty snapshot with a zero total.
    #[test]
    fn reset_empties_order(
        catalog in catalog_strategy(),
        actions in prop::collection::vec(action_strategy(), 0..100),
    ) {
        let mut order = OrderAggregator::new(catalog);
        for action in actions {
            let _ = order.apply(action);
        }
        order.reset();

        let snapshot = order.snapshot();
        prop_assert!(snapshot.lines.is_empty());
        prop_assert_eq!(snapshot.grand_total, Decimal::ZERO);
    }

    /// Ids outside the catalog fail with NotFound and change nothing.
    #[test]
    fn unknown_ids_rejected(
        catalog in catalog_strategy(),
        missing in 100u32..1000,
    ) {
        let mut order = OrderAggregator::new(catalog);
        let before = order.snapshot();
        prop_assert_eq!(order.increment(missing), Err(MenuError::NotFound(missing)));
        prop_assert_eq!(order.decrement(missing), Err(MenuError::NotFound(missing)));
        prop_assert_eq!(order.snapshot(), before);
    }

    /// n increments on one item give min(n, cap) units.
    #[test]
    fn repeated_increments_clamp(n in 0usize..60) {
        let catalog = Catalog::load(vec![CatalogItem::new(
            1,
            "Hamburger",
            "🍔",
            Decimal::new(85, 1),
            &[],
        )])
        .unwrap();
        let mut order = OrderAggregator::new(Arc::new(catalog));
        for _ in 0..n {
            order.increment(1).unwrap();
        }

        let expected = u8::try_from(n.min(usize::from(MAX_LINE_QUANTITY))).unwrap();
        prop_assert_eq!(order.quantity(1).unwrap(), expected);
        prop_assert_eq!(
            order.snapshot().grand_total,
            Decimal::new(85, 1) * Decimal::from(expected)
        );
    }
}
