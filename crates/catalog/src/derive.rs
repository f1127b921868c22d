//! Derivation of the stored product form.

use common::{Inventory, Product, ProductDraft};

/// Builds the stored form of a product from a draft.
///
/// The warehouses are copied in their original order; the total quantity
/// is their sum and the product is marketable iff that sum is positive.
pub fn derive(draft: &ProductDraft) -> Product {
    let quantity = draft
        .warehouses
        .iter()
        .map(|w| u128::from(w.quantity))
        .sum::<u128>();

    Product {
        sku: draft.sku,
        name: draft.name.clone(),
        inventory: Inventory {
            quantity,
            warehouses: draft.warehouses.clone(),
        },
        is_marketable: quantity > 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::{Sku, WarehouseEntry, WarehouseType};

    fn warehouse(locality: &str, quantity: u64) -> WarehouseEntry {
        WarehouseEntry::new(locality, quantity, WarehouseType::PhysicalStore)
    }

    #[test]
    fn sums_warehouse_quantities() {
        let draft = ProductDraft::new(
            Sku::new(1),
            "Item",
            vec![warehouse("SP", 5), warehouse("RJ", 10)],
        );

        let product = derive(&draft);

        assert_eq!(product.inventory.quantity, 15);
        assert!(product.is_marketable);
    }

    #[test]
    fn zero_stock_is_not_marketable() {
        let draft = ProductDraft::new(Sku::new(1), "Item", vec![warehouse("SP", 0)]);

        let product = derive(&draft);

        assert_eq!(product.inventory.quantity, 0);
        assert!(!product.is_marketable);
    }

    #[test]
    fn preserves_identity_and_warehouse_order() {
        let warehouses = vec![
            WarehouseEntry::new("SP", 12, WarehouseType::Ecommerce),
            WarehouseEntry::new("MOEMA", 3, WarehouseType::PhysicalStore),
            WarehouseEntry::new("SP", 0, WarehouseType::PhysicalStore),
        ];
        let draft = ProductDraft::new(Sku::new(43264), "Shampoo", warehouses.clone());

        let product = derive(&draft);

        assert_eq!(product.sku, Sku::new(43264));
        assert_eq!(product.name, "Shampoo");
        assert_eq!(product.inventory.warehouses, warehouses);
    }

    #[test]
    fn stale_derived_fields_are_recomputed() {
        let stale = Product {
            sku: Sku::new(9),
            name: "Item".to_string(),
            inventory: Inventory {
                quantity: 1000,
                warehouses: vec![warehouse("SP", 0)],
            },
            is_marketable: true,
        };

        let product = derive(&ProductDraft::from(stale));

        assert_eq!(product.inventory.quantity, 0);
        assert!(!product.is_marketable);
    }

    #[test]
    fn output_does_not_alias_the_draft() {
        let mut draft = ProductDraft::new(Sku::new(1), "Item", vec![warehouse("SP", 4)]);
        let product = derive(&draft);

        draft.warehouses.push(warehouse("RJ", 6));
        draft.warehouses[0].quantity = 0;
        draft.name.push_str(" (edited)");

        assert_eq!(product.name, "Item");
        assert_eq!(product.inventory.warehouses, vec![warehouse("SP", 4)]);
        assert_eq!(product.inventory.quantity, 4);
    }

    #[test]
    fn large_quantities_do_not_overflow() {
        let draft = ProductDraft::new(
            Sku::new(1),
            "Bulk",
            vec![warehouse("A", u64::MAX), warehouse("B", u64::MAX)],
        );

        let product = derive(&draft);

        assert_eq!(product.inventory.quantity, 2 * u128::from(u64::MAX));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_warehouse() -> impl Strategy<Value = WarehouseEntry> {
            (
                "[A-Z]{2,8}",
                any::<u64>(),
                prop_oneof![
                    Just(WarehouseType::PhysicalStore),
                    Just(WarehouseType::Ecommerce)
                ],
            )
                .prop_map(|(locality, quantity, kind)| {
                    WarehouseEntry::new(locality, quantity, kind)
                })
        }

        proptest! {
            /// Property: total quantity is the exact sum of warehouse quantities.
            #[test]
            fn quantity_is_exact_sum(
                sku in 1u64..=u64::MAX,
                warehouses in prop::collection::vec(arb_warehouse(), 1..16)
            ) {
                let expected: u128 = warehouses.iter().map(|w| u128::from(w.quantity)).sum();
                let product = derive(&ProductDraft::new(Sku::new(sku), "P", warehouses.clone()));

                prop_assert_eq!(product.inventory.quantity, expected);
                prop_assert_eq!(product.is_marketable, expected > 0);
                prop_assert_eq!(product.inventory.warehouses, warehouses);
            }

            /// Property: derivation is deterministic.
            #[test]
            fn derive_is_deterministic(
                warehouses in prop::collection::vec(arb_warehouse(), 1..8)
            ) {
                let draft = ProductDraft::new(Sku::new(1), "P", warehouses);
                prop_assert_eq!(derive(&draft), derive(&draft));
            }
        }
    }
}
