//! # Error Types
//!
//! Domain-specific error types for blvd-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  blvd-core errors (this file)                                          │
//! │  ├── CoreError        - Catalog/cart rule violations                   │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  storefront errors (app crate)                                         │
//! │  └── StorefrontError  - What the visitor sees (screen + notice)        │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StorefrontError → notice          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every failure here is local: the operation that returns it has left the
//! catalog and cart exactly as they were.

use thiserror::Error;

use crate::types::ProductId;

// =============================================================================
// Core Error
// =============================================================================

/// Catalog and cart rule violations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// No product with this id exists in the catalog.
    ///
    /// ## When This Occurs
    /// - Viewing a product id that was never seeded
    /// - Adding or toggling an unknown id
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// The product's single unit is not available.
    ///
    /// ## When This Occurs
    /// - Adding a product whose stock was reserved by the cart
    /// - Adding a product that was manually marked out of stock
    /// - Reserving a product that is already reserved
    #[error("Product {0} is out of stock")]
    ProductUnavailable(ProductId),

    /// The cart already holds an item for this product.
    ///
    /// ## User Workflow
    /// ```text
    /// Cart holds Duck Tee (reserved)
    ///      │
    ///      ▼
    /// Manual toggle puts Duck Tee back in stock
    ///      │
    ///      ▼
    /// Add Duck Tee again ──► AlreadyInCart(3)
    /// ```
    #[error("Product {0} is already in the cart")]
    AlreadyInCart(ProductId),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// A visitor input or seed record was rejected before anything changed.
///
/// `field` names the offending input as the visitor would know it
/// ("quantity", "size", "image").
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Empty or whitespace-only.
    #[error("{field} cannot be empty")]
    Required { field: String },

    #[error("{field} is longer than {max} characters")]
    TooLong { field: String, max: usize },

    /// Outside an inclusive range (quantity cap, image index, price floor).
    #[error("{field} has to be from {min} to {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    #[error("{field} has to be at least 1")]
    MustBePositive { field: String },

    /// Text that does not parse, such as `view one`.
    #[error("{field} is not valid: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Not one of a fixed set of choices (sizes).
    #[error("{field} has to be one of {}", allowed.join(", "))]
    NotAllowed { field: String, allowed: Vec<String> },

    /// Seed catalog listed the same product id twice.
    #[error("{field} {value} appears more than once")]
    Duplicate { field: String, value: String },
}

pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
