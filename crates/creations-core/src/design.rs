//! Designs: the ordered element list a user builds for one product.

use crate::element::{DesignElement, ElementId, ElementUpdate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Key identifying the product template a design targets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Every saved design, one per product.
pub type DesignCollection = BTreeMap<ProductId, Design>;

/// The editable state for one product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Design {
    /// Target product. Only `None` for the initial, unloaded design.
    pub product_id: Option<ProductId>,
    /// Elements in insertion order, back to front.
    pub elements: Vec<DesignElement>,
}

impl Design {
    /// Create an empty design for a product.
    pub fn empty(product_id: ProductId) -> Self {
        Self {
            product_id: Some(product_id),
            elements: Vec::new(),
        }
    }

    /// Whether this design targets `product_id`.
    pub fn targets(&self, product_id: &ProductId) -> bool {
        self.product_id.as_ref() == Some(product_id)
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Append an element on top of the others.
    pub fn add_element(&mut self, element: DesignElement) {
        self.elements.push(element);
    }

    /// Get an element by id.
    pub fn element(&self, id: &ElementId) -> Option<&DesignElement> {
        self.elements.iter().find(|e| e.id() == id)
    }

    /// Merge `update` into every element with a matching id.
    /// Returns true if at least one element changed.
    pub fn update_element(&mut self, id: &ElementId, update: &ElementUpdate) -> bool {
        let mut applied = false;
        for element in self.elements.iter_mut().filter(|e| e.id() == id) {
            applied |= element.apply(update);
        }
        applied
    }

    /// Remove every element with a matching id, keeping the others in order.
    /// Returns true if anything was removed.
    pub fn remove_element(&mut self, id: &ElementId) -> bool {
        let before = self.elements.len();
        self.elements.retain(|e| e.id() != id);
        self.elements.len() != before
    }

    /// Element ids in z-order.
    pub fn element_ids(&self) -> impl Iterator<Item = &ElementId> {
        self.elements.iter().map(DesignElement::id)
    }
}
