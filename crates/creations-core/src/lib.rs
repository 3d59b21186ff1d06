//! CustomCreations Core Library
//!
//! Platform-agnostic state and logic for the CustomCreations storefront:
//! design and preference stores, persistence, the product catalog and the
//! mock suggestion generator.

pub mod auth;
pub mod blog;
pub mod catalog;
pub mod config;
pub mod design;
pub mod design_store;
pub mod editor;
pub mod element;
pub mod feedback;
pub mod identity;
pub mod notify;
pub mod order;
pub mod preferences;
pub mod storage;
pub mod suggest;
pub mod validation;

pub use catalog::{DesignArea, Product};
pub use config::{AppConfig, ConfigError};
pub use design::{Design, DesignCollection, ProductId};
pub use design_store::DesignStore;
pub use editor::EditorSession;
pub use element::{DesignElement, ElementId, ElementUpdate, HexColor, ImageElement, TextElement};
pub use identity::{HttpIdentityService, IdentityService, MemoryIdentityService};
pub use notify::Notification;
pub use order::OrderSummary;
pub use preferences::{PreferenceUpdate, Preferences, PreferencesStore, ProfileDraft};
pub use storage::{FileStorage, MemoryStorage, PlatformStorage, Storage};
pub use suggest::{Recommendation, Suggester, SuggestionQuery};
pub use validation::ValidationError;
