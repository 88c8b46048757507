//! # Cart Store
//!
//! Owns the visitor's reserved items.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Operation            Cart change              Catalog change           │
//! │  ─────────            ───────────              ──────────────           │
//! │                                                                         │
//! │  add(id, size, qty) ─► items.push(snapshot) ──► reserve(id)             │
//! │                                                                         │
//! │  remove(id) ─────────► items.remove(i) ───────► release(id)             │
//! │                        (absent: no-op)          (absent: nothing)       │
//! │                                                                         │
//! │  total() ────────────► (read only)                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The catalog is borrowed per call; the storefront session owns both stores.

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogStore;
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;
use crate::types::{CartItem, ProductId, Size};
use crate::validation::validate_quantity;
use crate::MAX_ITEM_QUANTITY;

/// The shopping cart.
///
/// ## Invariants
/// - At most one item per product id
/// - Every item's product is reserved in the catalog when added
/// - Items keep insertion order and are never edited in place
/// - `total()` fits in `i64` pence: `add` refuses any line that would push it
///   past the limit
#[derive(Debug, Clone)]
pub struct CartStore {
    items: Vec<CartItem>,
    max_quantity: i64,
}

impl CartStore {
    /// Creates an empty cart with the default quantity cap.
    pub fn new() -> Self {
        Self::with_max_quantity(MAX_ITEM_QUANTITY)
    }

    /// Creates an empty cart with a custom quantity cap.
    pub fn with_max_quantity(max_quantity: i64) -> Self {
        CartStore {
            items: Vec::new(),
            max_quantity,
        }
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn max_quantity(&self) -> i64 {
        self.max_quantity
    }

    /// Reserves a product and appends a snapshot of it to the cart.
    ///
    /// ## Guards (checked in order, none of them mutate anything)
    /// 1. quantity within `1..=max_quantity`
    /// 2. product exists in the catalog
    /// 3. no cart item already holds this product
    /// 4. product is available (`in_stock` and `stock >= 1`)
    /// 5. the new line still fits in the cart total
    ///
    /// ## Returns
    /// The newly appended item.
    pub fn add(
        &mut self,
        catalog: &mut CatalogStore,
        id: ProductId,
        size: Size,
        quantity: i64,
    ) -> CoreResult<&CartItem> {
        validate_quantity(quantity, self.max_quantity)?;

        let product = catalog
            .find_by_id(id)
            .ok_or(CoreError::ProductNotFound(id))?;

        if self.contains(id) {
            return Err(CoreError::AlreadyInCart(id));
        }

        if !product.is_available() {
            return Err(CoreError::ProductUnavailable(id));
        }

        let headroom = product.price().quantity_headroom(self.total());
        if quantity > headroom {
            return Err(ValidationError::OutOfRange {
                field: "quantity".to_string(),
                min: 1,
                max: headroom.min(self.max_quantity),
            }
            .into());
        }

        // Snapshot before reserving so the copy records the pre-add state.
        let item = CartItem::from_product(product, size, quantity);
        catalog.reserve(id)?;

        self.items.push(item);
        Ok(&self.items[self.items.len() - 1])
    }

    /// Removes the item for `id` and releases its product.
    ///
    /// ## Returns
    /// - `Ok(Some(item))` when an item was removed
    /// - `Ok(None)` when the cart holds no such item (no release happens)
    pub fn remove(&mut self, catalog: &mut CatalogStore, id: ProductId) -> CoreResult<Option<CartItem>> {
        let Some(index) = self.items.iter().position(|i| i.product_id() == id) else {
            return Ok(None);
        };

        catalog.release(id)?;
        Ok(Some(self.items.remove(index)))
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.items.iter().any(|i| i.product_id() == id)
    }

    pub fn find(&self, id: ProductId) -> Option<&CartItem> {
        self.items.iter().find(|i| i.product_id() == id)
    }

    /// Sum of `price × quantity` over all items.
    pub fn total(&self) -> Money {
        self.items.iter().map(CartItem::line_total).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of items (one per product).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns the total quantity of all items.
    pub fn total_quantity(&self) -> i64 {
        self.items.iter().map(CartItem::quantity).sum()
    }

    /// Cart items whose live catalog record is available again.
    ///
    /// This happens when a reserved product is manually toggled back in
    /// stock: the cart still claims it but the catalog no longer shows it
    /// as reserved.
    pub fn unreserved_items(&self, catalog: &CatalogStore) -> Vec<ProductId> {
        self.items
            .iter()
            .map(CartItem::product_id)
            .filter(|id| catalog.find_by_id(*id).is_some_and(|p| p.in_stock()))
            .collect()
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Cart totals summary for the cart view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    pub item_count: usize,
    pub total_quantity: i64,
    pub total: Money,
}

impl From<&CartStore> for CartTotals {
    fn from(cart: &CartStore) -> Self {
        CartTotals {
            item_count: cart.len(),
            total_quantity: cart.total_quantity(),
            total: cart.total(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Product;
    use proptest::prelude::*;

    fn test_product(id: u32, price_pence: i64) -> Product {
        Product::new(
            ProductId::new(id),
            format!("Product {}", id),
            "",
            Money::from_pence(price_pence),
            vec![format!("/product_{}.png", id)],
        )
        .unwrap()
    }

    fn test_catalog() -> CatalogStore {
        CatalogStore::from_products(vec![
            test_product(1, 2599),
            test_product(2, 5999),
            test_product(3, 2599),
        ])
        .unwrap()
    }

    #[test]
    fn test_cart_add_item_reserves_product() {
        let mut catalog = test_catalog();
        let mut cart = CartStore::new();

        let item = cart.add(&mut catalog, ProductId::new(1), Size::M, 1).unwrap();
        assert_eq!(item.size(), Size::M);

        // The snapshot was taken before the reservation.
        assert!(cart.items()[0].product().in_stock());

        let live = catalog.find_by_id(ProductId::new(1)).unwrap();
        assert_eq!((live.stock(), live.in_stock()), (0, false));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_cart_keeps_insertion_order() {
        let mut catalog = test_catalog();
        let mut cart = CartStore::new();

        cart.add(&mut catalog, ProductId::new(3), Size::S, 1).unwrap();
        cart.add(&mut catalog, ProductId::new(1), Size::S, 1).unwrap();

        let ids: Vec<u32> = cart.items().iter().map(|i| i.product_id().get()).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_cart_total() {
        let mut catalog = test_catalog();
        let mut cart = CartStore::new();

        cart.add(&mut catalog, ProductId::new(1), Size::S, 1).unwrap();
        cart.add(&mut catalog, ProductId::new(2), Size::L, 2).unwrap();

        assert_eq!(cart.total(), Money::from_pence(14597));
        assert_eq!(cart.total().to_string(), "£145.97");

        let totals = CartTotals::from(&cart);
        assert_eq!(totals.item_count, 2);
        assert_eq!(totals.total_quantity, 3);
    }

    #[test]
    fn test_empty_cart() {
        let cart = CartStore::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), Money::zero());
    }

    #[test]
    fn test_add_unavailable_product_is_rejected() {
        let mut catalog = test_catalog();
        let mut cart = CartStore::new();
        let id = ProductId::new(1);
        catalog.toggle_availability(id).unwrap();

        let result = cart.add(&mut catalog, id, Size::M, 1);
        assert_eq!(result.err(), Some(CoreError::ProductUnavailable(id)));
        assert!(cart.is_empty());
        assert_eq!(catalog.find_by_id(id).unwrap().stock(), 0);
    }

    #[test]
    fn test_add_unknown_product() {
        let mut catalog = test_catalog();
        let mut cart = CartStore::new();
        let id = ProductId::new(42);

        assert_eq!(
            cart.add(&mut catalog, id, Size::S, 1).err(),
            Some(CoreError::ProductNotFound(id))
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_invalid_quantity() {
        let mut catalog = test_catalog();
        let mut cart = CartStore::with_max_quantity(3);
        let id = ProductId::new(1);

        let zero = cart.add(&mut catalog, id, Size::S, 0).err();
        assert!(matches!(
            zero,
            Some(CoreError::Validation(ValidationError::MustBePositive { .. }))
        ));
        let too_many = cart.add(&mut catalog, id, Size::S, 4).err();
        assert!(matches!(
            too_many,
            Some(CoreError::Validation(ValidationError::OutOfRange { .. }))
        ));

        assert!(cart.is_empty());
        assert!(catalog.find_by_id(id).unwrap().in_stock());
    }

    #[test]
    fn test_add_rejects_line_that_overflows_total() {
        let mut catalog = test_catalog();
        let mut cart = CartStore::with_max_quantity(i64::MAX);
        let hoodie = ProductId::new(2);

        // 5999p × (i64::MAX / 1000) does not fit in i64 pence.
        let result = cart.add(&mut catalog, hoodie, Size::S, i64::MAX / 1000).err();
        assert_eq!(
            result,
            Some(CoreError::Validation(ValidationError::OutOfRange {
                field: "quantity".to_string(),
                min: 1,
                max: i64::MAX / 5999,
            }))
        );
        assert!(cart.is_empty());
        assert!(catalog.find_by_id(hoodie).unwrap().in_stock());

        // The largest quantity that fits is accepted and totals exactly.
        let fits = i64::MAX / 5999;
        cart.add(&mut catalog, hoodie, Size::S, fits).unwrap();
        assert_eq!(cart.total(), Money::from_pence(5999 * fits));

        // A second large line no longer fits next to it.
        let tee = ProductId::new(1);
        assert!(matches!(
            cart.add(&mut catalog, tee, Size::S, fits),
            Err(CoreError::Validation(ValidationError::OutOfRange { .. }))
        ));
        assert_eq!(cart.len(), 1);
        assert!(catalog.find_by_id(tee).unwrap().in_stock());
        assert_eq!(cart.total(), Money::from_pence(5999 * fits));
    }

    #[test]
    fn test_remove_releases_product() {
        let mut catalog = test_catalog();
        let mut cart = CartStore::new();
        let id = ProductId::new(2);

        cart.add(&mut catalog, id, Size::XL, 1).unwrap();
        let removed = cart.remove(&mut catalog, id).unwrap();

        assert_eq!(removed.map(|i| i.product_id()), Some(id));
        assert!(cart.is_empty());
        let live = catalog.find_by_id(id).unwrap();
        assert_eq!((live.stock(), live.in_stock()), (1, true));
    }

    #[test]
    fn test_remove_twice_does_not_release_again() {
        let mut catalog = test_catalog();
        let mut cart = CartStore::new();
        let id = ProductId::new(1);

        cart.add(&mut catalog, id, Size::S, 1).unwrap();
        cart.remove(&mut catalog, id).unwrap();

        // Withdraw the product manually, then remove again: the second remove
        // must not put it back in stock.
        catalog.toggle_availability(id).unwrap();
        assert_eq!(cart.remove(&mut catalog, id), Ok(None));
        assert!(!catalog.find_by_id(id).unwrap().in_stock());
    }

    #[test]
    fn test_remove_nonexistent_is_noop() {
        let mut catalog = test_catalog();
        let mut cart = CartStore::new();
        catalog.toggle_availability(ProductId::new(3)).unwrap();

        assert_eq!(cart.remove(&mut catalog, ProductId::new(3)), Ok(None));
        assert!(!catalog.find_by_id(ProductId::new(3)).unwrap().in_stock());
    }

    #[test]
    fn test_manual_toggle_divergence() {
        let mut catalog = test_catalog();
        let mut cart = CartStore::new();
        let id = ProductId::new(3);

        cart.add(&mut catalog, id, Size::M, 1).unwrap();
        assert!(cart.unreserved_items(&catalog).is_empty());

        // Manual override puts the reserved product back on sale.
        assert_eq!(catalog.toggle_availability(id), Ok(true));

        // Catalog says in stock, cart still holds the item untouched.
        assert!(catalog.find_by_id(id).unwrap().in_stock());
        assert_eq!(cart.find(id).map(CartItem::quantity), Some(1));
        assert_eq!(cart.unreserved_items(&catalog), vec![id]);

        // The per-product guard still blocks a second item.
        assert_eq!(
            cart.add(&mut catalog, id, Size::L, 1).err(),
            Some(CoreError::AlreadyInCart(id))
        );
        assert_eq!(cart.len(), 1);
    }

    // =========================================================================
    // Property Tests
    // =========================================================================

    #[derive(Debug, Clone)]
    enum Op {
        Add(u32, i64),
        Remove(u32),
        Toggle(u32),
    }

    fn op() -> impl Strategy<Value = Op> {
        prop_oneof![
            (1u32..=4, 1i64..=3).prop_map(|(id, qty)| Op::Add(id, qty)),
            (1u32..=4).prop_map(Op::Remove),
            (1u32..=4).prop_map(Op::Toggle),
        ]
    }

    proptest! {
        #[test]
        fn prop_stock_invariant_and_single_item_per_product(ops in prop::collection::vec(op(), 0..40)) {
            let mut catalog = test_catalog();
            let mut cart = CartStore::new();

            for op in ops {
                match op {
                    Op::Add(id, qty) => { let _ = cart.add(&mut catalog, ProductId::new(id), Size::S, qty); }
                    Op::Remove(id) => { let _ = cart.remove(&mut catalog, ProductId::new(id)); }
                    Op::Toggle(id) => { let _ = catalog.toggle_availability(ProductId::new(id)); }
                }

                for p in catalog.list() {
                    prop_assert_eq!(p.in_stock(), p.stock() >= 1);
                    let held = cart.items().iter().filter(|i| i.product_id() == p.id()).count();
                    prop_assert!(held <= 1);
                }
            }
        }

        #[test]
        fn prop_add_then_remove_restores_stock(id in 1u32..=3, qty in 1i64..=5, withdrawn in any::<bool>()) {
            let mut catalog = test_catalog();
            let mut cart = CartStore::new();
            let id = ProductId::new(id);
            if withdrawn {
                catalog.toggle_availability(id).unwrap();
            }
            let before = catalog.find_by_id(id).map(|p| (p.stock(), p.in_stock()));

            if cart.add(&mut catalog, id, Size::M, qty).is_ok() {
                cart.remove(&mut catalog, id).unwrap();
            }

            let after = catalog.find_by_id(id).map(|p| (p.stock(), p.in_stock()));
            prop_assert_eq!(before, after);
            prop_assert!(cart.is_empty());
        }
    }
}
