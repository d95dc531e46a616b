//! Shopping cart tests
//!
//! Covers cart line merging, quantity edits, totals, and the grouping of
//! cart contents into one quote request per supplier.

use materiah_client::cart::Cart;
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_add_merges_same_product() {
        let mut cart = Cart::new();
        cart.add(1, 10, "Agarose", Some(dec("120.00")), 2);
        cart.add(1, 10, "Agarose", Some(dec("120.00")), 3);

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].quantity, 5);
    }

    #[test]
    fn test_update_quantity_zero_removes_line() {
        let mut cart = Cart::new();
        cart.add(1, 10, "Agarose", None, 2);
        cart.add(2, 10, "Trizol", None, 1);

        cart.update_quantity(1, 0);
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.items()[0].product, 2);
    }

    #[test]
    fn test_total_skips_unpriced_lines() {
        let mut cart = Cart::new();
        cart.add(1, 10, "Agarose", Some(dec("120.00")), 2);
        cart.add(2, 10, "Trizol", None, 4);
        cart.add(3, 20, "Tips", Some(dec("15.50")), 2);

        assert_eq!(cart.total(), dec("271.00"));
    }

    #[test]
    fn test_quote_requests_group_by_supplier() {
        let mut cart = Cart::new();
        cart.add(1, 10, "Agarose", None, 2);
        cart.add(2, 20, "Tips", None, 1);
        cart.add(3, 10, "Trizol", None, 4);

        let requests = cart.quote_requests();
        assert_eq!(requests.len(), 2);

        // Suppliers in first-insertion order
        assert_eq!(requests[0].supplier, 10);
        assert_eq!(requests[0].items.len(), 2);
        assert_eq!(requests[0].items[0].product, 1);
        assert_eq!(requests[0].items[1].product, 3);

        assert_eq!(requests[1].supplier, 20);
        assert_eq!(requests[1].items.len(), 1);
    }

    #[test]
    fn test_clear_empties_cart() {
        let mut cart = Cart::new();
        cart.add(1, 10, "Agarose", None, 2);
        cart.clear();

        assert!(cart.is_empty());
        assert!(cart.quote_requests().is_empty());
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod property_tests {
    use super::*;

    /// (product, supplier, quantity) triples; small id spaces force merges
    fn entries_strategy() -> impl Strategy<Value = Vec<(i64, i64, u32)>> {
        prop::collection::vec((1i64..6, 1i64..4, 1u32..10), 0..20)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Grouping into quote requests loses no quantity
        #[test]
        fn prop_quote_requests_preserve_quantities(entries in entries_strategy()) {
            let mut cart = Cart::new();
            for (product, supplier, quantity) in &entries {
                cart.add(*product, *supplier, "item", None, *quantity);
            }

            let in_cart: u64 = cart.items().iter().map(|i| i.quantity as u64).sum();
            let in_requests: u64 = cart
                .quote_requests()
                .iter()
                .flat_map(|r| r.items.iter())
                .map(|i| i.quantity as u64)
                .sum();

            prop_assert_eq!(in_cart, in_requests);
        }

        /// The cart never holds two lines for the same product
        #[test]
        fn prop_one_line_per_product(entries in entries_strategy()) {
            let mut cart = Cart::new();
            for (product, supplier, quantity) in &entries {
                cart.add(*product, *supplier, "item", None, *quantity);
            }

            let mut products: Vec<i64> = cart.items().iter().map(|i| i.product).collect();
            products.sort_unstable();
            products.dedup();
            prop_assert_eq!(products.len(), cart.len());
        }

        /// Each supplier appears in at most one quote request
        #[test]
        fn prop_one_request_per_supplier(entries in entries_strategy()) {
            let mut cart = Cart::new();
            for (product, supplier, quantity) in &entries {
                cart.add(*product, *supplier, "item", None, *quantity);
            }

            let requests = cart.quote_requests();
            let mut suppliers: Vec<i64> = requests.iter().map(|r| r.supplier).collect();
            suppliers.sort_unstable();
            suppliers.dedup();
            prop_assert_eq!(suppliers.len(), requests.len());
        }
    }
}
