//! # blvd-core: Pure Business Logic for the BLVD Storefront
//!
//! This crate is the **heart** of the storefront. It owns the catalog/cart
//! state model: the rules governing how adding and removing items mutates
//! product availability and cart contents.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     BLVD Storefront Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                Rendering layer (outside this crate)             │   │
//! │  │     Catalog view ──► Product detail ──► Cart view              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              Storefront coordinator (apps/storefront)           │   │
//! │  │     screen, selection state, checkout gateway                   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ blvd-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   money   │  │  catalog  │  │   cart    │  │   │
//! │  │   │  Product  │  │   Money   │  │  reserve  │  │ CartStore │  │   │
//! │  │   │ CartItem  │  │  £X.XX    │  │  release  │  │   total   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • NO PERSISTENCE                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, CartItem, Size, ...)
//! - [`money`] - Money type with integer arithmetic in pence
//! - [`catalog`] - Catalog store (reservation and release of stock)
//! - [`cart`] - Cart store (add, remove, totals)
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Example Usage
//!
//! ```rust
//! use blvd_core::{CartStore, CatalogStore, Money, Product, ProductId, Size};
//!
//! let tee = Product::new(
//!     ProductId::new(1),
//!     "Angel Tee",
//!     "Premium cotton tee.",
//!     Money::from_pence(2599),
//!     vec!["/tee_front.png".to_string()],
//! )
//! .unwrap();
//! let mut catalog = CatalogStore::from_products(vec![tee]).unwrap();
//! let mut cart = CartStore::new();
//!
//! cart.add(&mut catalog, ProductId::new(1), Size::M, 1).unwrap();
//!
//! // Adding reserves the product's single unit
//! assert!(!catalog.find_by_id(ProductId::new(1)).unwrap().in_stock());
//! assert_eq!(cart.total().to_string(), "£25.99");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{CartStore, CartTotals};
pub use catalog::CatalogStore;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::{format_gbp, Money};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// ISO 4217 code of the only currency the storefront sells in.
pub const CURRENCY_CODE: &str = "GBP";

/// Quantity preselected when a product detail view opens.
pub const DEFAULT_QUANTITY: i64 = 1;

/// Default upper bound for the quantity of a single cart item.
///
/// ## Business Reason
/// Stock is a binary reservation signal, so quantity is not checked against
/// stock. The cap only guards against accidental over-ordering and can be
/// overridden by the storefront configuration.
pub const MAX_ITEM_QUANTITY: i64 = 10;
