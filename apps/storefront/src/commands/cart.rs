//! # Cart Commands
//!
//! Commands for cart manipulation and the checkout hand-off.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐   add    ┌──────────┐  checkout  ┌──────────────────┐    │
//! │  │  Empty   │ ───────► │ In Cart  │ ─────────► │ Payment provider │    │
//! │  │  Cart    │ ◄─────── │ (reserved│            │ (external)       │    │
//! │  └──────────┘  remove  │  stock)  │            └──────────────────┘    │
//! │                        └──────────┘                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use blvd_core::{CartItem, ProductId};
use tracing::debug;

use crate::checkout::CheckoutGateway;
use crate::state::{Storefront, StorefrontResult};

/// Adds the displayed product to the cart.
///
/// ## Behavior
/// - Uses the size and quantity chosen on the detail view
/// - Reserves the product's single unit
/// - Product data is "frozen" into the cart item at this moment
/// - On success the cart is shown; on failure nothing changes
pub fn add_to_cart<G: CheckoutGateway>(store: &mut Storefront<G>) -> StorefrontResult<()> {
    let selection = *store.selection();
    debug!(
        product_id = ?selection.product_id(),
        size = %selection.size(),
        quantity = selection.quantity(),
        "add_to_cart command"
    );
    store.add_to_cart()
}

/// Removes an item from the cart and puts its product back in stock.
///
/// ## Returns
/// The removed item, or `None` if the cart held nothing for this product
pub fn remove_from_cart<G: CheckoutGateway>(
    store: &mut Storefront<G>,
    product_id: ProductId,
) -> StorefrontResult<Option<CartItem>> {
    debug!(product_id = %product_id, "remove_from_cart command");
    store.remove_from_cart(product_id)
}

pub fn open_cart<G: CheckoutGateway>(store: &mut Storefront<G>) {
    debug!("open_cart command");
    store.open_cart();
}

/// Hands the cart to the payment provider.
pub fn checkout<G: CheckoutGateway>(store: &mut Storefront<G>) -> StorefrontResult<()> {
    debug!(items = store.cart().len(), "checkout command");
    store.checkout()
}
