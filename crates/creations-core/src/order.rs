//! Order confirmation for the last finalized design.
//!
//! Prices are fixed placeholders; no payment or fulfilment happens here.

use crate::catalog;
use crate::design::{Design, ProductId};
use crate::notify::Notification;
use std::fmt;

/// Unit price of a customized product, in cents.
pub const UNIT_PRICE_CENTS: u64 = 2599;
/// Flat shipping fee, in cents.
pub const SHIPPING_CENTS: u64 = 500;

/// An amount of money in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Cents(pub u64);

impl fmt::Display for Cents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// What the confirmation page shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderSummary {
    pub product_id: Option<ProductId>,
    pub product_name: String,
    pub quantity: u32,
    pub price: Cents,
    pub shipping: Cents,
    pub total: Cents,
    pub design_elements_count: usize,
}

impl OrderSummary {
    /// Summarize the finalized design, if there is one.
    pub fn from_finalized(design: Option<&Design>) -> Option<Self> {
        let design = design?;
        let product_name = design
            .product_id
            .as_ref()
            .map(|id| product_name(id.as_str()))
            .unwrap_or_else(|| "Custom Product".to_string());
        let quantity = 1;
        let price = Cents(UNIT_PRICE_CENTS);
        let shipping = Cents(SHIPPING_CENTS);

        Some(Self {
            product_id: design.product_id.clone(),
            product_name,
            quantity,
            price,
            shipping,
            total: Cents(price.0 * quantity as u64 + shipping.0),
            design_elements_count: design.len(),
        })
    }

    /// Place the order.
    pub fn confirm(&self) -> Notification {
        log::info!(
            "Order confirmed: {} x{} ({} element(s)), total {}",
            self.product_name,
            self.quantity,
            self.design_elements_count,
            self.total
        );
        Notification::info(
            "Order Placed!",
            "Thank you for your purchase! Your personalized item is on its way.",
        )
    }
}

/// Catalog name, or the id with its first letter capitalized.
fn product_name(id: &str) -> String {
    if let Ok(product) = catalog::lookup(id) {
        return product.name.to_string();
    }
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => "Custom Product".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{HexColor, TextElement};

    #[test]
    fn test_no_finalized_design() {
        assert!(OrderSummary::from_finalized(None).is_none());
    }

    #[test]
    fn test_summary_totals() {
        let mut design = Design::empty("tshirt".into());
        design.add_element(TextElement::new("Hi", HexColor::black(), 24).unwrap().into());

        let summary = OrderSummary::from_finalized(Some(&design)).unwrap();

        assert_eq!(summary.product_name, "T-Shirt");
        assert_eq!(summary.total, Cents(3099));
        assert_eq!(summary.total.to_string(), "$30.99");
        assert_eq!(summary.price.to_string(), "$25.99");
        assert_eq!(summary.shipping.to_string(), "$5.00");
        assert_eq!(summary.design_elements_count, 1);
    }

    #[test]
    fn test_unknown_product_name_capitalized() {
        let design = Design::empty("poster".into());
        let summary = OrderSummary::from_finalized(Some(&design)).unwrap();
        assert_eq!(summary.product_name, "Poster");
    }

    #[test]
    fn test_confirm_notification() {
        let design = Design::empty("mug".into());
        let summary = OrderSummary::from_finalized(Some(&design)).unwrap();
        assert_eq!(summary.confirm().title, "Order Placed!");
    }
}
