//! Static product catalog.
//!
//! Each product has a rectangular design area on its mock-up; element
//! coordinates are offsets from that area's top-left corner.

use crate::design::ProductId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Unknown product: {0}")]
    UnknownProduct(String),
}

/// Customizable region of a product mock-up, in mock-up pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DesignArea {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl DesignArea {
    /// Whether an element offset lies inside the area.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as i64) < self.width as i64 && (y as i64) < self.height as i64
    }

    /// Mock-up coordinates for an element offset.
    pub fn to_mockup(&self, x: i32, y: i32) -> (i32, i32) {
        (self.x + x, self.y + y)
    }
}

/// A product that can be customized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product {
    pub id: &'static str,
    /// Name used in the design tool.
    pub name: &'static str,
    /// Name used on the product listing.
    pub listing_name: &'static str,
    pub description: &'static str,
    pub price_range: &'static str,
    /// Mock-up image path.
    pub mockup: &'static str,
    pub design_area: DesignArea,
}

impl Product {
    pub fn product_id(&self) -> ProductId {
        ProductId::from(self.id)
    }
}

const PRODUCTS: &[Product] = &[
    Product {
        id: "tshirt",
        name: "T-Shirt",
        listing_name: "T-Shirt",
        description: "Classic cotton t-shirt, perfect for any design.",
        price_range: "$15 - $25",
        mockup: "/product-placeholders/tshirt-mockup.png",
        design_area: DesignArea { x: 150, y: 100, width: 200, height: 300 },
    },
    Product {
        id: "mug",
        name: "Mug",
        listing_name: "Coffee Mug",
        description: "Ceramic mug, ideal for vibrant images and text.",
        price_range: "$10 - $20",
        mockup: "/product-placeholders/mug-mockup.png",
        design_area: DesignArea { x: 100, y: 150, width: 300, height: 200 },
    },
    Product {
        id: "hat",
        name: "Hat",
        listing_name: "Cap / Hat",
        description: "Stylish caps and hats, great for logos and slogans.",
        price_range: "$12 - $22",
        mockup: "/product-placeholders/hat-mockup.png",
        design_area: DesignArea { x: 180, y: 80, width: 150, height: 100 },
    },
    Product {
        id: "bag",
        name: "Tote Bag",
        listing_name: "Tote Bag",
        description: "Durable tote bags for everyday use or gifting.",
        price_range: "$18 - $30",
        mockup: "/product-placeholders/bag-mockup.png",
        design_area: DesignArea { x: 120, y: 100, width: 260, height: 250 },
    },
];

/// All products, in listing order.
pub fn products() -> &'static [Product] {
    PRODUCTS
}

/// Find a product by id.
pub fn lookup(id: &str) -> Result<&'static Product, CatalogError> {
    PRODUCTS
        .iter()
        .find(|p| p.id == id)
        .ok_or_else(|| CatalogError::UnknownProduct(id.to_string()))
}
