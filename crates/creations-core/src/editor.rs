//! Design tool session for one product.
//!
//! Wraps a [`DesignStore`] with the editor's rules: input checks, element
//! selection and clamping of sizes to what the design area allows.

use crate::catalog::{self, CatalogError, Product};
use crate::design::{Design, ProductId};
use crate::design_store::DesignStore;
use crate::element::{
    DesignElement, ElementId, ElementUpdate, HexColor, ImageElement, ImageUpdate,
    MAX_FONT_SIZE, MIN_FONT_SIZE, MIN_IMAGE_SIZE, TextElement, TextUpdate,
};
use crate::notify::Notification;
use crate::storage::Storage;
use crate::validation::ValidationError;
use std::num::NonZeroU32;

/// An open design tool for one catalog product.
pub struct EditorSession<'a, S: Storage> {
    store: &'a mut DesignStore<S>,
    product: &'static Product,
    product_id: ProductId,
    selected: Option<ElementId>,
}

impl<'a, S: Storage> EditorSession<'a, S> {
    /// Open the editor for `product_id`, loading its saved design.
    pub fn open(store: &'a mut DesignStore<S>, product_id: &str) -> Result<Self, CatalogError> {
        let product = catalog::lookup(product_id)?;
        let product_id = product.product_id();
        store.load(&product_id);
        log::debug!("Editing {} ({} element(s))", product.name, store.current().len());

        Ok(Self {
            store,
            product,
            product_id,
            selected: None,
        })
    }

    /// Reattach to `product_id` keeping unsaved edits and the selection.
    ///
    /// Falls back to loading the saved design when the store holds some
    /// other product's design.
    pub fn resume(
        store: &'a mut DesignStore<S>,
        product_id: &str,
        selected: Option<ElementId>,
    ) -> Result<Self, CatalogError> {
        let product = catalog::lookup(product_id)?;
        let product_id = product.product_id();
        if !store.current().targets(&product_id) {
            store.load(&product_id);
        }
        let selected = selected.filter(|id| store.current().element(id).is_some());

        Ok(Self {
            store,
            product,
            product_id,
            selected,
        })
    }

    pub fn product(&self) -> &'static Product {
        self.product
    }

    pub fn design(&self) -> &Design {
        self.store.current()
    }

    /// Add a text element and select it.
    pub fn add_text(
        &mut self,
        content: &str,
        color: &str,
        font_size: u32,
    ) -> Result<ElementId, ValidationError> {
        if content.trim().is_empty() {
            return Err(ValidationError::TextRequired);
        }
        let color = HexColor::parse(color)?;
        let text = TextElement::new(content, color, clamp_font_size(font_size))?;
        Ok(self.add(text.into()))
    }

    /// Add an image element and select it.
    pub fn add_image(&mut self, src: &str) -> Result<ElementId, ValidationError> {
        let src = src.trim();
        if src.is_empty() {
            return Err(ValidationError::ImageUrlRequired);
        }
        Ok(self.add(ImageElement::new(src).into()))
    }

    fn add(&mut self, element: DesignElement) -> ElementId {
        let id = element.id().clone();
        self.store.add_element(element);
        self.selected = Some(id.clone());
        id
    }

    /// Select an element. Returns false if it isn't in the design.
    pub fn select(&mut self, id: &ElementId) -> bool {
        if self.store.current().element(id).is_some() {
            self.selected = Some(id.clone());
            true
        } else {
            false
        }
    }

    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// Id of the selected element.
    pub fn selection(&self) -> Option<&ElementId> {
        self.selected.as_ref()
    }

    /// The selected element, if it still exists.
    pub fn selected(&self) -> Option<&DesignElement> {
        self.selected
            .as_ref()
            .and_then(|id| self.store.current().element(id))
    }

    /// Apply `update` to the selected element.
    ///
    /// Font sizes are clamped to the editor's range and image sides to
    /// the product's design area.
    pub fn update_selected(&mut self, update: ElementUpdate) -> bool {
        let Some(id) = self.selected.clone() else {
            return false;
        };
        let update = self.clamp(update);
        self.store.update_element(&id, &update)
    }

    /// Remove the selected element and clear the selection.
    pub fn remove_selected(&mut self) -> bool {
        match self.selected.take() {
            Some(id) => self.store.remove_element(&id),
            None => false,
        }
    }

    /// Discard every element of this product's design.
    pub fn clear(&mut self) {
        self.selected = None;
        self.store.clear(&self.product_id);
    }

    /// Save the design and hand it on to order confirmation.
    pub fn finalize(self) -> Notification {
        self.store.save(&self.product_id);
        Notification::info("Design Saved!", "Your masterpiece is ready for the next step.")
    }

    /// Save the design when leaving the editor.
    pub fn close(self) {
        self.store.save(&self.product_id);
    }

    fn clamp(&self, update: ElementUpdate) -> ElementUpdate {
        let area = self.product.design_area;
        match update {
            ElementUpdate::Text(mut u) => {
                u.font_size = u.font_size.map(|s| nonzero(clamp_font_size(s.get())));
                ElementUpdate::Text(u)
            }
            ElementUpdate::Image(ImageUpdate { src, width, height }) => {
                ElementUpdate::Image(ImageUpdate {
                    src,
                    width: width.map(|w| nonzero(w.get().clamp(MIN_IMAGE_SIZE, area.width))),
                    height: height.map(|h| nonzero(h.get().clamp(MIN_IMAGE_SIZE, area.height))),
                })
            }
            other => other,
        }
    }
}

fn clamp_font_size(size: u32) -> u32 {
    size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE)
}

fn nonzero(value: u32) -> NonZeroU32 {
    NonZeroU32::new(value).unwrap_or(NonZeroU32::MIN)
}

/// Build a text update from optional raw values.
///
/// New content must not be blank.
pub fn text_update(
    content: Option<&str>,
    color: Option<&str>,
    font_size: Option<u32>,
) -> Result<ElementUpdate, ValidationError> {
    if content.is_some_and(|c| c.trim().is_empty()) {
        return Err(ValidationError::TextRequired);
    }
    Ok(ElementUpdate::Text(TextUpdate {
        content: content.map(str::to_string),
        color: color.map(HexColor::parse).transpose()?,
        font_size: font_size.map(nonzero),
    }))
}

/// Build an image update. A new source must not be blank.
pub fn image_update(
    src: Option<&str>,
    width: Option<NonZeroU32>,
    height: Option<NonZeroU32>,
) -> Result<ElementUpdate, ValidationError> {
    let src = src.map(str::trim);
    if src.is_some_and(str::is_empty) {
        return Err(ValidationError::ImageUrlRequired);
    }
    Ok(ElementUpdate::Image(ImageUpdate {
        src: src.map(str::to_string),
        width,
        height,
    }))
}
