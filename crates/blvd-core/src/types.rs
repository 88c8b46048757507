//! # Domain Types
//!
//! Core domain types used throughout the storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    CartItem     │   │      Size       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │◄──│  product (copy) │   │  S  M  L  XL    │       │
//! │  │  name, price    │   │  size           │──►│                 │       │
//! │  │  images         │   │  quantity       │   └─────────────────┘       │
//! │  │  stock {0,1}    │   │  added_at       │                              │
//! │  │  in_stock       │   └─────────────────┘                              │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Stock Invariant
//! `in_stock ⇔ stock ≥ 1` holds for every `Product` value. The two fields are
//! private and only change together.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::ValidationError;
use crate::money::Money;
use crate::validation::{validate_images, validate_price, validate_product_name, ValidationResult};

// =============================================================================
// Product Id
// =============================================================================

/// Unique, stable identifier of a catalog product.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct ProductId(u32);

impl ProductId {
    #[inline]
    pub const fn new(id: u32) -> Self {
        ProductId(id)
    }

    #[inline]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ProductId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(ProductId)
            .map_err(|_| ValidationError::InvalidFormat {
                field: "product id".to_string(),
                reason: format!("'{}' is not a whole number", s.trim()),
            })
    }
}

// =============================================================================
// Size
// =============================================================================

/// Garment size chosen when adding a product to the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Size {
    #[default]
    S,
    M,
    L,
    XL,
}

impl Size {
    /// Every size, in the order the detail view offers them.
    pub const ALL: [Size; 4] = [Size::S, Size::M, Size::L, Size::XL];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Size::S => "S",
            Size::M => "M",
            Size::L => "L",
            Size::XL => "XL",
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Size {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Size::ALL
            .into_iter()
            .find(|size| size.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ValidationError::NotAllowed {
                field: "size".to_string(),
                allowed: Size::ALL.iter().map(|s| s.as_str().to_string()).collect(),
            })
    }
}

// =============================================================================
// Product
// =============================================================================

/// A catalog entry.
///
/// Products are created once from the seed list and never destroyed. Only
/// their availability changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    id: ProductId,
    name: String,
    description: String,
    /// Price in pence.
    price: Money,
    /// Opaque image references, resolved by the rendering layer. Never empty.
    images: Vec<String>,
    /// Binary reservation signal: 1 = available, 0 = reserved or withdrawn.
    stock: u8,
    in_stock: bool,
}

impl Product {
    /// Creates an available product (stock 1) after validating its fields.
    ///
    /// ## Example
    /// ```rust
    /// use blvd_core::{Money, Product, ProductId};
    ///
    /// let hoodie = Product::new(
    ///     ProductId::new(2),
    ///     "Where Is My Mind Hoodie",
    ///     "Heavyweight premium hoodie.",
    ///     Money::from_pence(5999),
    ///     vec!["/hoodie_front.png".to_string()],
    /// )
    /// .unwrap();
    /// assert!(hoodie.in_stock());
    /// assert_eq!(hoodie.stock(), 1);
    ///
    /// // A product must have at least one image
    /// assert!(Product::new(ProductId::new(9), "Cap", "", Money::zero(), vec![]).is_err());
    /// ```
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Money,
        images: Vec<String>,
    ) -> ValidationResult<Self> {
        let name = name.into();
        validate_product_name(&name)?;
        validate_price(price)?;
        validate_images(&images)?;

        Ok(Product {
            id,
            name: name.trim().to_string(),
            description: description.into(),
            price,
            images,
            stock: 1,
            in_stock: true,
        })
    }

    #[inline]
    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    /// The image shown on catalog cards.
    pub fn primary_image(&self) -> &str {
        // `images` is validated non-empty at construction.
        self.images.first().map(String::as_str).unwrap_or_default()
    }

    #[inline]
    pub fn stock(&self) -> u8 {
        self.stock
    }

    #[inline]
    pub fn in_stock(&self) -> bool {
        self.in_stock
    }

    /// Checks if the product's unit can be reserved right now.
    #[inline]
    pub fn is_available(&self) -> bool {
        self.in_stock && self.stock >= 1
    }

    /// Sets `stock` and `in_stock` in lockstep.
    pub(crate) fn set_available(&mut self, available: bool) {
        self.stock = u8::from(available);
        self.in_stock = available;
    }
}

// =============================================================================
// Product Seed
// =============================================================================

/// A product record as supplied by the seed catalog.
///
/// Seeds carry no stock fields: every seeded product starts available.
///
/// ## JSON Shape
/// ```json
/// {
///   "id": 1,
///   "name": "Angel Tee",
///   "description": "Premium cotton tee with Angel graphic.",
///   "pricePence": 2599,
///   "images": ["/blvd_saint_product_1.png", "/blvd_saint_product_2.png"]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSeed {
    pub id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price_pence: i64,
    pub images: Vec<String>,
}

impl TryFrom<ProductSeed> for Product {
    type Error = ValidationError;

    fn try_from(seed: ProductSeed) -> Result<Self, Self::Error> {
        Product::new(
            seed.id,
            seed.name,
            seed.description,
            Money::from_pence(seed.price_pence),
            seed.images,
        )
    }
}

// =============================================================================
// Cart Item
// =============================================================================

/// A reservation of one product.
///
/// Uses the snapshot pattern: the product is copied at the moment it is
/// added, before the catalog marks it reserved. Later changes to the live
/// catalog record are not reflected here. Items are never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartItem {
    /// Product data at time of adding (frozen).
    product: Product,
    size: Size,
    quantity: i64,
    #[ts(as = "String")]
    added_at: DateTime<Utc>,
}

impl CartItem {
    pub(crate) fn from_product(product: &Product, size: Size, quantity: i64) -> Self {
        CartItem {
            product: product.clone(),
            size,
            quantity,
            added_at: Utc::now(),
        }
    }

    #[inline]
    pub fn product_id(&self) -> ProductId {
        self.product.id()
    }

    /// The frozen product snapshot.
    pub fn product(&self) -> &Product {
        &self.product
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn added_at(&self) -> DateTime<Utc> {
        self.added_at
    }

    /// Unit price at time of adding.
    #[inline]
    pub fn unit_price(&self) -> Money {
        self.product.price()
    }

    /// Calculates the line total (unit price × quantity).
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn tee() -> Product {
        Product::new(
            ProductId::new(1),
            "Angel Tee",
            "Premium cotton tee with Angel graphic.",
            Money::from_pence(2599),
            vec!["/front.png".to_string(), "/back.png".to_string()],
        )
        .unwrap()
    }

    #[test]
    fn test_new_product_starts_available() {
        let product = tee();
        assert_eq!(product.stock(), 1);
        assert!(product.in_stock());
        assert!(product.is_available());
        assert_eq!(product.primary_image(), "/front.png");
    }

    #[test]
    fn test_set_available_keeps_fields_in_lockstep() {
        let mut product = tee();

        product.set_available(false);
        assert_eq!(product.stock(), 0);
        assert!(!product.in_stock());

        product.set_available(true);
        assert_eq!(product.stock(), 1);
        assert!(product.in_stock());
    }

    #[test]
    fn test_product_validation() {
        let no_name = Product::new(ProductId::new(1), "  ", "", Money::zero(), vec!["/a.png".into()]);
        assert!(matches!(no_name, Err(ValidationError::Required { .. })));

        let negative = Product::new(
            ProductId::new(1),
            "Tee",
            "",
            Money::from_pence(-1),
            vec!["/a.png".into()],
        );
        assert!(matches!(negative, Err(ValidationError::OutOfRange { .. })));
    }

    #[test]
    fn test_size_parsing() {
        assert_eq!("m".parse::<Size>().unwrap(), Size::M);
        assert_eq!(" XL ".parse::<Size>().unwrap(), Size::XL);
        assert_eq!(Size::default(), Size::S);
        assert!(matches!(
            "XXL".parse::<Size>(),
            Err(ValidationError::NotAllowed { .. })
        ));
    }

    #[test]
    fn test_product_id_parsing() {
        assert_eq!("3".parse::<ProductId>().unwrap(), ProductId::new(3));
        assert!("three".parse::<ProductId>().is_err());
        assert!("-1".parse::<ProductId>().is_err());
    }

    #[test]
    fn test_seed_deserializes_and_converts() {
        let json = r#"{
            "id": 2,
            "name": "Where Is My Mind Hoodie",
            "pricePence": 5999,
            "images": ["/hoodie.png"]
        }"#;
        let seed: ProductSeed = serde_json::from_str(json).unwrap();
        let product = Product::try_from(seed).unwrap();

        assert_eq!(product.id(), ProductId::new(2));
        assert_eq!(product.price(), Money::from_pence(5999));
        assert_eq!(product.description(), "");
        assert!(product.in_stock());
    }

    #[test]
    fn test_cart_item_line_total() {
        let item = CartItem::from_product(&tee(), Size::L, 3);
        assert_eq!(item.product_id(), ProductId::new(1));
        assert_eq!(item.line_total(), Money::from_pence(7797));
        assert_eq!(item.size(), Size::L);
    }
}
