//! # Catalog Commands
//!
//! Browsing the catalog and choosing what to add on the product detail view.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Catalog                        Product detail                          │
//! │  ┌──────────────┐  view <id>    ┌──────────────────────────────────┐    │
//! │  │ Angel Tee    │ ────────────► │ Angel Tee          £25.99        │    │
//! │  │ £25.99       │               │ [0]* [1]     size S M L XL       │    │
//! │  │ In Stock     │ ◄──────────── │ qty 1        add / toggle        │    │
//! │  └──────────────┘     back      └──────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use blvd_core::{ProductId, Size};
use tracing::debug;

use crate::checkout::CheckoutGateway;
use crate::state::{Storefront, StorefrontResult};

/// Shows the catalog from any screen.
pub fn open_catalog<G: CheckoutGateway>(store: &mut Storefront<G>) {
    debug!("open_catalog command");
    store.open_catalog();
}

/// Opens the detail view for a product, resetting the selection.
pub fn view_product<G: CheckoutGateway>(
    store: &mut Storefront<G>,
    product_id: ProductId,
) -> StorefrontResult<()> {
    debug!(product_id = %product_id, "view_product command");
    store.select_product(product_id)
}

pub fn back<G: CheckoutGateway>(store: &mut Storefront<G>) -> StorefrontResult<()> {
    debug!("back command");
    store.back()
}

pub fn select_image<G: CheckoutGateway>(
    store: &mut Storefront<G>,
    index: usize,
) -> StorefrontResult<()> {
    debug!(index, "select_image command");
    store.select_image(index)
}

pub fn select_size<G: CheckoutGateway>(store: &mut Storefront<G>, size: Size) -> StorefrontResult<()> {
    debug!(size = %size, "select_size command");
    store.select_size(size)
}

pub fn select_quantity<G: CheckoutGateway>(
    store: &mut Storefront<G>,
    quantity: i64,
) -> StorefrontResult<()> {
    debug!(quantity, "select_quantity command");
    store.select_quantity(quantity)
}

/// Manual stock override.
///
/// ## Behavior
/// - `Some(id)`: flips that product
/// - `None`: flips the product on the detail view
/// - A cart item holding the product is not touched
///
/// ## Returns
/// The product's new `in_stock` value
pub fn toggle_stock<G: CheckoutGateway>(
    store: &mut Storefront<G>,
    product_id: Option<ProductId>,
) -> StorefrontResult<bool> {
    debug!(product_id = ?product_id, "toggle_stock command");
    store.toggle_availability(product_id)
}
