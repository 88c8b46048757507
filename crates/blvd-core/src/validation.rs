//! # Validation Module
//!
//! Input validation utilities for the storefront.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Rendering layer                                              │
//! │  └── Disables "Add to Cart" when the product is out of stock           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Command parsing (apps/storefront)                            │
//! │  └── Product id / size / quantity parsing                              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: THIS MODULE + catalog/cart guards                            │
//! │  ├── Seed data rules (name, price, images)                             │
//! │  └── Quantity bounds                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest product name the catalog accepts.
pub const MAX_NAME_LEN: usize = 200;

// =============================================================================
// Product Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - Must be at most 200 characters
///
/// ## Example
/// ```rust
/// use blvd_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Duck Tee").is_ok());
/// assert!(validate_product_name("").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

/// Validates a price.
///
/// ## Rules
/// - Must be non-negative (zero is allowed for giveaways)
///
/// ## Example
/// ```rust
/// use blvd_core::money::Money;
/// use blvd_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_pence(2599)).is_ok());
/// assert!(validate_price(Money::zero()).is_ok());
/// assert!(validate_price(Money::from_pence(-100)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a product's image references.
///
/// ## Rules
/// - At least one image
/// - No blank references
pub fn validate_images(images: &[String]) -> ValidationResult<()> {
    if images.is_empty() {
        return Err(ValidationError::Required {
            field: "images".to_string(),
        });
    }

    if images.iter().any(|image| image.trim().is_empty()) {
        return Err(ValidationError::InvalidFormat {
            field: "images".to_string(),
            reason: "image references must not be blank".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity value against a cap.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed `max`
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Product detail: choose quantity 12                                     │
/// │       │                                                                 │
/// │       ▼                                                                 │
/// │  validate_quantity(12, 10) ← THIS FUNCTION                              │
/// │       │                                                                 │
/// │       ├── qty <= 0?  → "quantity has to be at least 1"                  │
/// │       ├── qty > max? → "quantity has to be from 1 to 10"                │
/// │       └── OK → selection updated                                        │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn validate_quantity(qty: i64, max: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > max {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max,
        });
    }

    Ok(())
}

/// Validates an image index against the number of images a product has.
pub fn validate_image_index(index: usize, image_count: usize) -> ValidationResult<()> {
    if index >= image_count {
        return Err(ValidationError::OutOfRange {
            field: "image".to_string(),
            min: 0,
            max: image_count.saturating_sub(1) as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
