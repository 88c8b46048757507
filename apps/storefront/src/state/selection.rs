//! # Selection State
//!
//! Transient, view-only state describing what the visitor is looking at.
//! Never persisted and never read by the catalog/cart rules except as the
//! arguments of an add-to-cart action.

use blvd_core::{ProductId, Size, DEFAULT_QUANTITY};
use serde::Serialize;

/// Displayed product, active image, chosen size and chosen quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    product_id: Option<ProductId>,
    active_image: usize,
    size: Size,
    quantity: i64,
}

impl Default for Selection {
    fn default() -> Self {
        Selection {
            product_id: None,
            active_image: 0,
            size: Size::default(),
            quantity: DEFAULT_QUANTITY,
        }
    }
}

impl Selection {
    /// Fresh selection for a newly displayed product: image 0, size S, quantity 1.
    pub fn for_product(id: ProductId) -> Self {
        Selection {
            product_id: Some(id),
            ..Selection::default()
        }
    }

    pub fn product_id(&self) -> Option<ProductId> {
        self.product_id
    }

    pub fn active_image(&self) -> usize {
        self.active_image
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub(crate) fn set_active_image(&mut self, index: usize) {
        self.active_image = index;
    }

    pub(crate) fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    pub(crate) fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_product_uses_defaults() {
        let selection = Selection::for_product(ProductId::new(2));
        assert_eq!(selection.product_id(), Some(ProductId::new(2)));
        assert_eq!(selection.active_image(), 0);
        assert_eq!(selection.size(), Size::S);
        assert_eq!(selection.quantity(), 1);
    }

    #[test]
    fn test_default_has_no_product() {
        assert_eq!(Selection::default().product_id(), None);
    }
}
