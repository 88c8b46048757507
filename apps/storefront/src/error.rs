//! # Storefront Error Type
//!
//! Unified error type for storefront actions.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Storefront                         │
//! │                                                                         │
//! │  Visitor action ("add")                                                 │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Storefront operation ── Result<T, StorefrontError>                     │
//! │         │                                                               │
//! │         ├── Wrong screen?    → InvalidTransition                       │
//! │         ├── Out of stock?    → CoreError::ProductUnavailable           │
//! │         ├── Already in cart? → CoreError::AlreadyInCart                │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Logged + shown as a one-line notice. State is untouched.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use blvd_core::{CoreError, ValidationError};
use serde::Serialize;
use thiserror::Error;

use crate::state::Screen;

/// Error returned by storefront operations.
///
/// A failed operation never leaves partial changes behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorefrontError {
    /// Catalog or cart rule violation.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The action is not offered on the current screen.
    #[error("'{action}' is not available on the {screen} screen")]
    InvalidTransition { action: &'static str, screen: Screen },

    /// A product-scoped action ran without a displayed product.
    #[error("No product is selected")]
    NoProductSelected,

    /// Checkout was requested with nothing in the cart.
    #[error("Your cart is empty")]
    EmptyCart,

    /// Input did not match any command.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}

impl From<ValidationError> for StorefrontError {
    fn from(err: ValidationError) -> Self {
        StorefrontError::Core(CoreError::Validation(err))
    }
}

/// Machine-readable error codes for the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Unknown product id
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Product's unit is reserved or withdrawn
    InsufficientStock,

    /// Cart rule violation (duplicate item, empty cart)
    CartError,

    /// Action not offered on the current screen
    InvalidTransition,
}

impl ErrorCode {
    /// The wire form, identical to the serialized value.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::InsufficientStock => "INSUFFICIENT_STOCK",
            ErrorCode::CartError => "CART_ERROR",
            ErrorCode::InvalidTransition => "INVALID_TRANSITION",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl StorefrontError {
    pub fn code(&self) -> ErrorCode {
        match self {
            StorefrontError::Core(CoreError::ProductNotFound(_)) => ErrorCode::NotFound,
            StorefrontError::Core(CoreError::ProductUnavailable(_)) => ErrorCode::InsufficientStock,
            StorefrontError::Core(CoreError::AlreadyInCart(_)) | StorefrontError::EmptyCart => {
                ErrorCode::CartError
            }
            StorefrontError::Core(CoreError::Validation(_)) | StorefrontError::UnknownCommand(_) => {
                ErrorCode::ValidationError
            }
            StorefrontError::InvalidTransition { .. } | StorefrontError::NoProductSelected => {
                ErrorCode::InvalidTransition
            }
        }
    }
}

/// Serialized form of a failed action.
///
/// ```json
/// { "code": "INSUFFICIENT_STOCK", "message": "Product 1 is out of stock" }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub code: ErrorCode,
    pub message: String,
}

/// One-line form shown in the terminal: `INSUFFICIENT_STOCK: Product 1 is out of stock`.
impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl From<&StorefrontError> for Notice {
    fn from(err: &StorefrontError) -> Self {
        Notice {
            code: err.code(),
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blvd_core::ProductId;

    #[test]
    fn test_codes() {
        let id = ProductId::new(1);
        assert_eq!(
            StorefrontError::from(CoreError::ProductNotFound(id)).code(),
            ErrorCode::NotFound
        );
        assert_eq!(
            StorefrontError::from(CoreError::ProductUnavailable(id)).code(),
            ErrorCode::InsufficientStock
        );
        assert_eq!(StorefrontError::EmptyCart.code(), ErrorCode::CartError);
        assert_eq!(
            StorefrontError::InvalidTransition {
                action: "back",
                screen: Screen::Cart
            }
            .code(),
            ErrorCode::InvalidTransition
        );
    }

    #[test]
    fn test_notice_serialization() {
        let err = StorefrontError::from(CoreError::ProductUnavailable(ProductId::new(1)));
        let json = serde_json::to_value(Notice::from(&err)).unwrap();
        assert_eq!(json["code"], "INSUFFICIENT_STOCK");
        assert_eq!(json["message"], "Product 1 is out of stock");
    }

    #[test]
    fn test_notice_line_uses_wire_code() {
        let err = StorefrontError::from(CoreError::ProductUnavailable(ProductId::new(1)));
        assert_eq!(
            Notice::from(&err).to_string(),
            "INSUFFICIENT_STOCK: Product 1 is out of stock"
        );

        for code in [
            ErrorCode::NotFound,
            ErrorCode::ValidationError,
            ErrorCode::InsufficientStock,
            ErrorCode::CartError,
            ErrorCode::InvalidTransition,
        ] {
            assert_eq!(serde_json::to_value(code).unwrap(), code.to_string());
        }
    }

    #[test]
    fn test_transition_message() {
        let err = StorefrontError::InvalidTransition {
            action: "checkout",
            screen: Screen::ProductDetail,
        };
        assert_eq!(
            err.to_string(),
            "'checkout' is not available on the product detail screen"
        );
    }
}
