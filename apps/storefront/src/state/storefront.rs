//! # Storefront Session
//!
//! The single owned aggregate holding all session state: both stores, the
//! active screen, the selection state and the checkout gateway. Every
//! mutation goes through a method here, so a sequence of actions replayed
//! against a fresh session always produces the same state.
//!
//! ## Screen State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   ┌──────────┐  select_product   ┌───────────────┐  add_to_cart (ok)    │
//! │   │ Catalog  │ ────────────────► │ ProductDetail │ ───────────────┐     │
//! │   │ (start)  │ ◄──────────────── │ image/size/qty│                │     │
//! │   └──────────┘       back        └───────────────┘                ▼     │
//! │        ▲                                                    ┌────────┐  │
//! │        └──────────────── open_catalog ───────────────────── │  Cart  │  │
//! │                                                             │checkout│  │
//! │   any screen ───────────── open_cart ─────────────────────► └────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use blvd_core::validation::{validate_image_index, validate_quantity};
use blvd_core::{CartItem, CartStore, CatalogStore, CoreError, Product, ProductId, Size};
use serde::Serialize;
use tracing::{info, warn};

use super::selection::Selection;
use crate::checkout::{CartSnapshot, CheckoutGateway};
use crate::error::StorefrontError;

/// Result type for storefront operations.
pub type StorefrontResult<T> = Result<T, StorefrontError>;

/// The screen currently rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    #[default]
    Catalog,
    ProductDetail,
    Cart,
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Screen::Catalog => "catalog",
            Screen::ProductDetail => "product detail",
            Screen::Cart => "cart",
        })
    }
}

/// One visitor session.
#[derive(Debug)]
pub struct Storefront<G> {
    catalog: CatalogStore,
    cart: CartStore,
    screen: Screen,
    selection: Selection,
    checkout: G,
}

impl<G: CheckoutGateway> Storefront<G> {
    /// Starts a session on the catalog screen.
    pub fn new(catalog: CatalogStore, cart: CartStore, checkout: G) -> Self {
        Storefront {
            catalog,
            cart,
            screen: Screen::Catalog,
            selection: Selection::default(),
            checkout,
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn checkout_gateway(&self) -> &G {
        &self.checkout
    }

    /// The live catalog record of the displayed product.
    pub fn selected_product(&self) -> Option<&Product> {
        self.selection
            .product_id()
            .and_then(|id| self.catalog.find_by_id(id))
    }

    /// Cart items whose product the catalog shows as available again.
    pub fn unreserved_items(&self) -> Vec<ProductId> {
        self.cart.unreserved_items(&self.catalog)
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// `Catalog → ProductDetail`. Resets the selection for the product.
    pub fn select_product(&mut self, id: ProductId) -> StorefrontResult<()> {
        self.require_screen(Screen::Catalog, "view")?;
        if self.catalog.find_by_id(id).is_none() {
            return Err(CoreError::ProductNotFound(id).into());
        }

        self.selection = Selection::for_product(id);
        self.screen = Screen::ProductDetail;
        Ok(())
    }

    /// `ProductDetail → Catalog`.
    pub fn back(&mut self) -> StorefrontResult<()> {
        self.require_screen(Screen::ProductDetail, "back")?;
        self.screen = Screen::Catalog;
        Ok(())
    }

    /// Any screen → `Catalog`.
    pub fn open_catalog(&mut self) {
        self.screen = Screen::Catalog;
    }

    /// Any screen → `Cart`.
    pub fn open_cart(&mut self) {
        self.screen = Screen::Cart;
    }

    // =========================================================================
    // Product Detail Selection
    // =========================================================================

    pub fn select_image(&mut self, index: usize) -> StorefrontResult<()> {
        self.require_screen(Screen::ProductDetail, "image")?;
        let product = self.selected_product().ok_or(StorefrontError::NoProductSelected)?;
        validate_image_index(index, product.images().len())?;

        self.selection.set_active_image(index);
        Ok(())
    }

    pub fn select_size(&mut self, size: Size) -> StorefrontResult<()> {
        self.require_screen(Screen::ProductDetail, "size")?;
        self.selection.set_size(size);
        Ok(())
    }

    pub fn select_quantity(&mut self, quantity: i64) -> StorefrontResult<()> {
        self.require_screen(Screen::ProductDetail, "quantity")?;
        validate_quantity(quantity, self.cart.max_quantity())?;

        self.selection.set_quantity(quantity);
        Ok(())
    }

    // =========================================================================
    // Cart & Stock Actions
    // =========================================================================

    /// Adds the displayed product with the chosen size and quantity, then
    /// shows the cart. On failure nothing changes and the screen stays.
    pub fn add_to_cart(&mut self) -> StorefrontResult<()> {
        self.require_screen(Screen::ProductDetail, "add")?;
        let id = self
            .selection
            .product_id()
            .ok_or(StorefrontError::NoProductSelected)?;

        let item = self
            .cart
            .add(&mut self.catalog, id, self.selection.size(), self.selection.quantity())?;
        info!(
            product_id = %id,
            size = %item.size(),
            quantity = item.quantity(),
            "Product reserved"
        );

        self.screen = Screen::Cart;
        Ok(())
    }

    /// Removes a product's cart item and releases it. Absent ids are a no-op.
    pub fn remove_from_cart(&mut self, id: ProductId) -> StorefrontResult<Option<CartItem>> {
        let removed = self.cart.remove(&mut self.catalog, id)?;
        if removed.is_some() {
            info!(product_id = %id, "Product released");
        }
        Ok(removed)
    }

    /// Manual stock override. `None` targets the displayed product.
    ///
    /// Returns the product's new `in_stock` value. A cart item already
    /// holding the product is left as it is.
    pub fn toggle_availability(&mut self, id: Option<ProductId>) -> StorefrontResult<bool> {
        let id = match id {
            Some(id) => id,
            None if self.screen == Screen::ProductDetail => self
                .selection
                .product_id()
                .ok_or(StorefrontError::NoProductSelected)?,
            None => return Err(StorefrontError::NoProductSelected),
        };

        let in_stock = self.catalog.toggle_availability(id)?;
        info!(product_id = %id, in_stock, "Availability toggled");

        if in_stock && self.cart.contains(id) {
            warn!(product_id = %id, "Product back in stock while still held by the cart");
        }
        Ok(in_stock)
    }

    /// Hands the cart to the checkout gateway. Cart and catalog are untouched.
    pub fn checkout(&mut self) -> StorefrontResult<()> {
        self.require_screen(Screen::Cart, "checkout")?;
        if self.cart.is_empty() {
            return Err(StorefrontError::EmptyCart);
        }

        let snapshot = CartSnapshot::capture(&self.cart);
        self.checkout.initiate_checkout(&snapshot);
        Ok(())
    }

    fn require_screen(&self, expected: Screen, action: &'static str) -> StorefrontResult<()> {
        if self.screen != expected {
            return Err(StorefrontError::InvalidTransition {
                action,
                screen: self.screen,
            });
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
