//! # Checkout Hand-off
//!
//! Checkout is owned by an external payment provider. The storefront only
//! captures a snapshot of the cart and passes it to a [`CheckoutGateway`];
//! nothing comes back into the session.
//!
//! ```text
//! ┌──────────────┐  CartSnapshot   ┌─────────────────┐
//! │  Storefront  │ ──────────────► │ CheckoutGateway │ ──► payment provider
//! │ (Cart screen)│                 │  (injected)     │
//! └──────────────┘                 └─────────────────┘
//! ```

use blvd_core::{CartItem, CartStore, Money, CURRENCY_CODE};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};
use uuid::Uuid;

/// Frozen copy of the cart at the moment checkout was requested.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSnapshot {
    /// Reference the payment provider can correlate on.
    pub reference: Uuid,
    pub items: Vec<CartItem>,
    pub total: Money,
    pub currency: &'static str,
    pub created_at: DateTime<Utc>,
}

impl CartSnapshot {
    pub fn capture(cart: &CartStore) -> Self {
        CartSnapshot {
            reference: Uuid::new_v4(),
            items: cart.items().to_vec(),
            total: cart.total(),
            currency: CURRENCY_CODE,
            created_at: Utc::now(),
        }
    }
}

/// Capability to start an external checkout.
pub trait CheckoutGateway {
    fn initiate_checkout(&mut self, snapshot: &CartSnapshot);
}

/// Default gateway: logs the hand-off instead of calling a provider.
#[derive(Debug, Clone)]
pub struct LoggingCheckout {
    provider: String,
}

impl LoggingCheckout {
    pub fn new(provider: impl Into<String>) -> Self {
        LoggingCheckout {
            provider: provider.into(),
        }
    }
}

impl Default for LoggingCheckout {
    fn default() -> Self {
        Self::new("stripe")
    }
}

impl CheckoutGateway for LoggingCheckout {
    fn initiate_checkout(&mut self, snapshot: &CartSnapshot) {
        info!(
            provider = %self.provider,
            reference = %snapshot.reference,
            items = snapshot.items.len(),
            total = %snapshot.total,
            "Checkout handed off"
        );
        if let Ok(payload) = serde_json::to_string(snapshot) {
            debug!(%payload, "Checkout payload");
        }
    }
}

/// Gateway that keeps every snapshot it receives. Useful for tests and for
/// replaying a session without a provider.
#[derive(Debug, Clone, Default)]
pub struct RecordingCheckout {
    received: Vec<CartSnapshot>,
}

impl RecordingCheckout {
    pub fn received(&self) -> &[CartSnapshot] {
        &self.received
    }
}

impl CheckoutGateway for RecordingCheckout {
    fn initiate_checkout(&mut self, snapshot: &CartSnapshot) {
        self.received.push(snapshot.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blvd_core::{CatalogStore, Product, ProductId, Size};

    #[test]
    fn test_snapshot_captures_cart() {
        let product = Product::new(
            ProductId::new(1),
            "Angel Tee",
            "",
            Money::from_pence(2599),
            vec!["/tee.png".to_string()],
        )
        .unwrap();
        let mut catalog = CatalogStore::from_products(vec![product]).unwrap();
        let mut cart = CartStore::new();
        cart.add(&mut catalog, ProductId::new(1), Size::M, 2).unwrap();

        let snapshot = CartSnapshot::capture(&cart);
        assert_eq!(snapshot.items.len(), 1);
        assert_eq!(snapshot.total, Money::from_pence(5198));
        assert_eq!(snapshot.currency, "GBP");

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["total"], 5198);
        assert_eq!(json["items"][0]["size"], "M");
    }

    #[test]
    fn test_recording_gateway() {
        let mut gateway = RecordingCheckout::default();
        let snapshot = CartSnapshot::capture(&CartStore::new());
        gateway.initiate_checkout(&snapshot);
        assert_eq!(gateway.received(), &[snapshot]);
    }
}
