//! The design store: the in-progress design plus every saved design.
//!
//! The saved collection is read once when the store is opened and written
//! back as a single JSON document after every `save` and `clear`. Storage
//! failures are logged and never reach the caller; the in-memory state stays
//! authoritative for the session.

use crate::design::{Design, DesignCollection, ProductId};
use crate::element::{DesignElement, ElementId, ElementUpdate};
use crate::storage::{DESIGNS_KEY, Storage, read_json, write_json};
use std::sync::Arc;

/// Owns the current design and the saved design collection.
pub struct DesignStore<S: Storage> {
    /// Storage backend.
    storage: Arc<S>,
    /// Saved designs, one per product.
    designs: DesignCollection,
    /// Design being edited.
    current: Design,
    /// Last design saved with at least one element. Session only.
    last_finalized: Option<Design>,
}

impl<S: Storage> DesignStore<S> {
    /// Open the store, loading saved designs from `storage`.
    ///
    /// A missing or unreadable document yields an empty collection.
    pub fn open(storage: Arc<S>) -> Self {
        let designs = match read_json::<S, DesignCollection>(&*storage, DESIGNS_KEY) {
            Ok(Some(designs)) => designs,
            Ok(None) => DesignCollection::new(),
            Err(e) => {
                log::warn!("Error reading saved designs: {}", e);
                DesignCollection::new()
            }
        };
        log::debug!("Loaded {} saved design(s)", designs.len());

        Self {
            storage,
            designs,
            current: Design::default(),
            last_finalized: None,
        }
    }

    /// The design being edited.
    pub fn current(&self) -> &Design {
        &self.current
    }

    /// The last design saved with at least one element.
    pub fn last_finalized(&self) -> Option<&Design> {
        self.last_finalized.as_ref()
    }

    /// All saved designs.
    pub fn designs(&self) -> &DesignCollection {
        &self.designs
    }

    /// The saved design for a product, if any.
    pub fn saved(&self, product_id: &ProductId) -> Option<&Design> {
        self.designs.get(product_id)
    }

    /// Make the saved design for `product_id` current, or a fresh empty one.
    pub fn load(&mut self, product_id: &ProductId) -> &Design {
        self.current = self
            .designs
            .get(product_id)
            .cloned()
            .unwrap_or_else(|| Design::empty(product_id.clone()));
        &self.current
    }

    /// Store the current design under `product_id`.
    ///
    /// Does nothing unless the current design targets `product_id`, so a
    /// stale edit never lands in another product's slot. Returns whether the
    /// save happened.
    pub fn save(&mut self, product_id: &ProductId) -> bool {
        if !self.current.targets(product_id) {
            log::warn!(
                "Ignoring save for {}: current design targets {:?}",
                product_id,
                self.current.product_id
            );
            return false;
        }

        self.designs.insert(product_id.clone(), self.current.clone());
        self.persist();

        if !self.current.is_empty() {
            self.last_finalized = Some(self.current.clone());
        }
        true
    }

    /// Append an element to the current design.
    pub fn add_element(&mut self, element: DesignElement) {
        self.current.add_element(element);
    }

    /// Merge `update` into the matching element of the current design.
    ///
    /// A missing element is not an error: selection and removal can race.
    pub fn update_element(&mut self, id: &ElementId, update: &ElementUpdate) -> bool {
        self.current.update_element(id, update)
    }

    /// Remove an element from the current design.
    pub fn remove_element(&mut self, id: &ElementId) -> bool {
        self.current.remove_element(id)
    }

    /// Reset both the current design and the saved one for `product_id`.
    pub fn clear(&mut self, product_id: &ProductId) {
        let cleared = Design::empty(product_id.clone());
        self.current = cleared.clone();
        self.designs.insert(product_id.clone(), cleared);
        self.persist();
    }

    /// Get a reference to the storage backend.
    pub fn storage(&self) -> &Arc<S> {
        &self.storage
    }

    fn persist(&self) {
        match write_json(&*self.storage, DESIGNS_KEY, &self.designs) {
            Ok(()) => log::debug!("Saved {} design(s)", self.designs.len()),
            Err(e) => log::warn!("Error writing saved designs: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{HexColor, ImageElement, TextElement, TextUpdate};
    use crate::storage::{MemoryStorage, StorageError, StorageResult};

    /// Storage whose every call fails.
    struct BrokenStorage;

    impl Storage for BrokenStorage {
        fn get(&self, _key: &str) -> StorageResult<Option<String>> {
            Err(StorageError::Io("unavailable".to_string()))
        }
        fn put(&self, _key: &str, _document: &str) -> StorageResult<()> {
            Err(StorageError::Io("unavailable".to_string()))
        }
        fn delete(&self, _key: &str) -> StorageResult<()> {
            Err(StorageError::Io("unavailable".to_string()))
        }
    }

    fn hi_text() -> DesignElement {
        TextElement::new("Hi", HexColor::parse("#000").unwrap(), 24)
            .unwrap()
            .at(50, 50)
            .with_id("1")
            .into()
    }

    fn text(id: &str) -> DesignElement {
        TextElement::new(id, HexColor::black(), 16).unwrap().with_id(id).into()
    }

    fn ids(design: &Design) -> Vec<&str> {
        design.element_ids().map(ElementId::as_str).collect()
    }

    #[test]
    fn test_load_missing_product_gives_empty_design() {
        let mut store = DesignStore::open(Arc::new(MemoryStorage::new()));
        let design = store.load(&"tshirt".into());

        assert_eq!(design, &Design::empty("tshirt".into()));
    }

    #[test]
    fn test_save_scenario() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = DesignStore::open(storage.clone());
        let tshirt = ProductId::from("tshirt");

        store.load(&tshirt);
        store.add_element(hi_text());
        assert!(store.save(&tshirt));

        let expected = Design {
            product_id: Some(tshirt.clone()),
            elements: vec![hi_text()],
        };
        assert_eq!(store.saved(&tshirt), Some(&expected));
        assert_eq!(store.designs().len(), 1);
        assert_eq!(store.last_finalized(), Some(&expected));

        // Persisted as one document keyed by product id
        let persisted: DesignCollection = read_json(&*storage, DESIGNS_KEY).unwrap().unwrap();
        assert_eq!(persisted.get(&tshirt), Some(&expected));
    }

    #[test]
    fn test_save_then_load_roundtrip() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = DesignStore::open(storage.clone());
        let mug = ProductId::from("mug");

        store.load(&mug);
        store.add_element(text("a"));
        store.add_element(ImageElement::new("cat.png").with_id("b").into());
        store.save(&mug);
        let saved = store.current().clone();

        store.load(&"hat".into());
        assert!(store.current().is_empty());
        assert_eq!(store.load(&mug), &saved);

        // A fresh store over the same storage sees it too
        let mut reopened = DesignStore::open(storage);
        assert_eq!(reopened.load(&mug), &saved);
    }

    #[test]
    fn test_save_with_mismatched_product_is_noop() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = DesignStore::open(storage.clone());

        store.load(&"tshirt".into());
        store.add_element(text("a"));

        assert!(!store.save(&"mug".into()));
        assert!(store.designs().is_empty());
        assert!(store.last_finalized().is_none());
        assert!(storage.get(DESIGNS_KEY).unwrap().is_none());
    }

    #[test]
    fn test_save_before_any_load_is_noop() {
        let mut store = DesignStore::open(Arc::new(MemoryStorage::new()));
        assert!(!store.save(&"tshirt".into()));
        assert!(store.designs().is_empty());
    }

    #[test]
    fn test_empty_save_keeps_last_finalized() {
        let mut store = DesignStore::open(Arc::new(MemoryStorage::new()));
        let tshirt = ProductId::from("tshirt");
        let mug = ProductId::from("mug");

        store.load(&tshirt);
        store.add_element(text("a"));
        store.save(&tshirt);
        let finalized = store.current().clone();

        store.load(&mug);
        assert!(store.save(&mug));
        assert_eq!(store.last_finalized(), Some(&finalized));
        assert_eq!(store.saved(&mug), Some(&Design::empty(mug.clone())));

        store.add_element(text("b"));
        store.save(&mug);
        assert_eq!(store.last_finalized().and_then(|d| d.product_id.clone()), Some(mug));
    }

    #[test]
    fn test_add_update_remove_sequence() {
        let mut store = DesignStore::open(Arc::new(MemoryStorage::new()));
        store.load(&"bag".into());

        for id in ["1", "2", "3", "4", "5"] {
            store.add_element(text(id));
        }
        store.remove_element(&"2".into());
        store.update_element(
            &"3".into(),
            &ElementUpdate::Text(TextUpdate {
                content: Some("three".to_string()),
                ..Default::default()
            }),
        );
        store.remove_element(&"5".into());
        store.remove_element(&"missing".into());
        store.add_element(text("6"));

        assert_eq!(ids(store.current()), vec!["1", "3", "4", "6"]);
        let three = store.current().element(&"3".into()).and_then(DesignElement::as_text);
        assert_eq!(three.map(|t| t.content.as_str()), Some("three"));
    }

    #[test]
    fn test_update_missing_element_is_noop() {
        let mut store = DesignStore::open(Arc::new(MemoryStorage::new()));
        store.load(&"tshirt".into());
        store.add_element(hi_text());
        let before = store.current().clone();

        let applied = store.update_element(
            &"missing-id".into(),
            &ElementUpdate::Text(TextUpdate {
                content: Some("x".to_string()),
                ..Default::default()
            }),
        );

        assert!(!applied);
        assert_eq!(store.current(), &before);
    }

    #[test]
    fn test_edits_do_not_touch_collection_until_save() {
        let mut store = DesignStore::open(Arc::new(MemoryStorage::new()));
        let hat = ProductId::from("hat");
        store.load(&hat);
        store.add_element(text("a"));

        assert!(store.saved(&hat).is_none());
    }

    #[test]
    fn test_clear_leaves_other_products() {
        let storage = Arc::new(MemoryStorage::new());
        let mut store = DesignStore::open(storage.clone());
        let tshirt = ProductId::from("tshirt");
        let mug = ProductId::from("mug");

        store.load(&mug);
        store.add_element(text("m"));
        store.save(&mug);
        let mug_design = store.current().clone();

        store.load(&tshirt);
        store.add_element(text("t"));
        store.save(&tshirt);
        let finalized = store.last_finalized().cloned();

        store.clear(&tshirt);

        assert!(store.current().is_empty());
        assert!(store.current().targets(&tshirt));
        assert_eq!(store.saved(&tshirt), Some(&Design::empty(tshirt.clone())));
        assert_eq!(store.saved(&mug), Some(&mug_design));
        assert_eq!(store.last_finalized().cloned(), finalized);

        let persisted: DesignCollection = read_json(&*storage, DESIGNS_KEY).unwrap().unwrap();
        assert!(persisted[&tshirt].is_empty());
        assert_eq!(persisted[&mug], mug_design);
    }

    #[test]
    fn test_corrupt_document_treated_as_empty() {
        let storage = Arc::new(MemoryStorage::new());
        storage.put(DESIGNS_KEY, "{\"tshirt\": [oops").unwrap();

        let store = DesignStore::open(storage);
        assert!(store.designs().is_empty());
    }

    #[test]
    fn test_storage_failure_keeps_memory_state() {
        let mut store = DesignStore::open(Arc::new(BrokenStorage));
        let tshirt = ProductId::from("tshirt");

        store.load(&tshirt);
        store.add_element(text("a"));
        assert!(store.save(&tshirt));

        assert_eq!(store.saved(&tshirt).map(Design::len), Some(1));
        assert!(store.last_finalized().is_some());

        store.clear(&tshirt);
        assert!(store.current().is_empty());
    }
}
