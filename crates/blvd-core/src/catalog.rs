//! # Catalog Store
//!
//! Owns the ordered product list and each product's binary stock signal.
//!
//! ## Stock Transitions
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product Availability                                 │
//! │                                                                         │
//! │            reserve (cart add)                                           │
//! │   ┌───────────┐ ──────────────────► ┌───────────┐                       │
//! │   │ stock = 1 │                     │ stock = 0 │                       │
//! │   │ in stock  │ ◄────────────────── │ reserved  │                       │
//! │   └───────────┘  release (cart rm)  └───────────┘                       │
//! │         ▲                                 │                             │
//! │         └────── toggle_availability ──────┘  (manual override, either   │
//! │                                               direction, cart ignored)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashSet;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::{Product, ProductId, ProductSeed};

/// The in-memory product catalog.
///
/// ## Invariants
/// - Product ids are unique
/// - Order is the seed order and never changes
/// - Products are never added or removed after construction
#[derive(Debug, Clone, Default)]
pub struct CatalogStore {
    products: Vec<Product>,
}

impl CatalogStore {
    /// Builds a catalog from already-constructed products.
    ///
    /// ## Errors
    /// `ValidationError::Duplicate` if two products share an id.
    pub fn from_products(products: Vec<Product>) -> CoreResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id()) {
                return Err(ValidationError::Duplicate {
                    field: "product id".to_string(),
                    value: product.id().to_string(),
                }
                .into());
            }
        }

        Ok(CatalogStore { products })
    }

    /// Builds a catalog from seed records. Every product starts in stock.
    pub fn from_seeds(seeds: Vec<ProductSeed>) -> CoreResult<Self> {
        let products = seeds
            .into_iter()
            .map(Product::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_products(products)
    }

    /// All products in catalog order.
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    pub fn find_by_id(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Marks the product's single unit as reserved (stock 0, out of stock).
    ///
    /// ## Errors
    /// - `ProductNotFound` if the id is unknown
    /// - `ProductUnavailable` if the product is already reserved or withdrawn;
    ///   nothing changes in that case
    pub fn reserve(&mut self, id: ProductId) -> CoreResult<()> {
        let product = self.find_mut(id)?;
        if !product.is_available() {
            return Err(CoreError::ProductUnavailable(id));
        }
        product.set_available(false);
        Ok(())
    }

    /// Restores the product to available (stock 1, in stock).
    ///
    /// Releasing an already-available product leaves it available.
    pub fn release(&mut self, id: ProductId) -> CoreResult<()> {
        self.find_mut(id)?.set_available(true);
        Ok(())
    }

    /// Manual override: flips availability regardless of cart contents.
    ///
    /// Returns the new `in_stock` value. A cart item holding this product is
    /// not reconciled; see `CartStore::unreserved_items`.
    pub fn toggle_availability(&mut self, id: ProductId) -> CoreResult<bool> {
        let product = self.find_mut(id)?;
        let now_available = !product.in_stock();
        product.set_available(now_available);
        Ok(now_available)
    }

    fn find_mut(&mut self, id: ProductId) -> CoreResult<&mut Product> {
        self.products
            .iter_mut()
            .find(|p| p.id() == id)
            .ok_or(CoreError::ProductNotFound(id))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn product(id: u32) -> Product {
        Product::new(
            ProductId::new(id),
            format!("Product {}", id),
            "",
            Money::from_pence(2599),
            vec![format!("/product_{}.png", id)],
        )
        .unwrap()
    }

    fn catalog() -> CatalogStore {
        CatalogStore::from_products(vec![product(1), product(2), product(3)]).unwrap()
    }

    fn assert_stock_invariant(catalog: &CatalogStore) {
        for p in catalog.list() {
            assert_eq!(p.in_stock(), p.stock() >= 1, "product {}", p.id());
        }
    }

    #[test]
    fn test_list_keeps_seed_order() {
        let catalog = catalog();
        let ids: Vec<u32> = catalog.list().iter().map(|p| p.id().get()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = CatalogStore::from_products(vec![product(1), product(1)]);
        assert!(matches!(
            result,
            Err(CoreError::Validation(ValidationError::Duplicate { .. }))
        ));
    }

    #[test]
    fn test_find_by_id() {
        let catalog = catalog();
        assert_eq!(catalog.find_by_id(ProductId::new(2)).unwrap().name(), "Product 2");
        assert!(catalog.find_by_id(ProductId::new(42)).is_none());
    }

    #[test]
    fn test_reserve_and_release() {
        let mut catalog = catalog();
        let id = ProductId::new(1);

        catalog.reserve(id).unwrap();
        let p = catalog.find_by_id(id).unwrap();
        assert_eq!((p.stock(), p.in_stock()), (0, false));
        assert_stock_invariant(&catalog);

        catalog.release(id).unwrap();
        let p = catalog.find_by_id(id).unwrap();
        assert_eq!((p.stock(), p.in_stock()), (1, true));
        assert_stock_invariant(&catalog);
    }

    #[test]
    fn test_reserve_twice_is_rejected_without_change() {
        let mut catalog = catalog();
        let id = ProductId::new(1);

        catalog.reserve(id).unwrap();
        assert_eq!(catalog.reserve(id), Err(CoreError::ProductUnavailable(id)));
        assert!(!catalog.find_by_id(id).unwrap().in_stock());
    }

    #[test]
    fn test_unknown_id() {
        let mut catalog = catalog();
        let id = ProductId::new(99);
        assert_eq!(catalog.reserve(id), Err(CoreError::ProductNotFound(id)));
        assert_eq!(catalog.release(id), Err(CoreError::ProductNotFound(id)));
        assert_eq!(
            catalog.toggle_availability(id),
            Err(CoreError::ProductNotFound(id))
        );
    }

    #[test]
    fn test_toggle_flips_in_lockstep() {
        let mut catalog = catalog();
        let id = ProductId::new(3);

        assert_eq!(catalog.toggle_availability(id), Ok(false));
        assert_eq!(catalog.find_by_id(id).unwrap().stock(), 0);
        assert_stock_invariant(&catalog);

        assert_eq!(catalog.toggle_availability(id), Ok(true));
        assert_eq!(catalog.find_by_id(id).unwrap().stock(), 1);
        assert_stock_invariant(&catalog);
    }

    #[test]
    fn test_from_seeds() {
        let seeds = vec![ProductSeed {
            id: ProductId::new(7),
            name: "Duck Tee".to_string(),
            description: "Soft cotton tee.".to_string(),
            price_pence: 2599,
            images: vec!["/duck.png".to_string()],
        }];
        let catalog = CatalogStore::from_seeds(seeds).unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.find_by_id(ProductId::new(7)).unwrap().in_stock());
    }
}
