//! User preferences: favorite colors, preferred styles and recent designs.
//!
//! Every change is written straight back to storage. As with designs,
//! storage failures are logged and otherwise ignored.

use crate::design::Design;
use crate::notify::Notification;
use crate::storage::{PREFERENCES_KEY, Storage, read_json, write_json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// How many recent designs are remembered.
pub const MAX_PREVIOUS_DESIGNS: usize = 5;

/// Colors offered on the profile page.
pub const AVAILABLE_COLORS: &[&str] = &[
    "Red", "Blue", "Green", "Yellow", "Black", "White", "Pink", "Purple", "Orange",
];

/// Styles offered on the profile page.
pub const AVAILABLE_STYLES: &[&str] = &[
    "Modern",
    "Vintage",
    "Minimalist",
    "Bohemian",
    "Sporty",
    "Casual",
    "Formal",
];

/// The persisted preference record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    /// Favorite colors, without duplicates.
    pub favorite_colors: Vec<String>,
    /// Preferred styles, without duplicates.
    pub preferred_styles: Vec<String>,
    /// Most recent first, at most [`MAX_PREVIOUS_DESIGNS`].
    pub previous_designs: Vec<Design>,
}

/// Replacement value for one preference field.
#[derive(Debug, Clone, PartialEq)]
pub enum PreferenceUpdate {
    FavoriteColors(Vec<String>),
    PreferredStyles(Vec<String>),
    PreviousDesigns(Vec<Design>),
}

/// Profile-page picks that are not stored until saved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileDraft {
    pub favorite_colors: Vec<String>,
    pub preferred_styles: Vec<String>,
}

impl ProfileDraft {
    /// Start from the stored picks.
    pub fn new(preferences: &Preferences) -> Self {
        Self {
            favorite_colors: preferences.favorite_colors.clone(),
            preferred_styles: preferences.preferred_styles.clone(),
        }
    }

    /// Add or remove a favorite color. Returns true if it is now picked.
    pub fn toggle_color(&mut self, color: &str) -> bool {
        toggle(&mut self.favorite_colors, color)
    }

    /// Add or remove a preferred style. Returns true if it is now picked.
    pub fn toggle_style(&mut self, style: &str) -> bool {
        toggle(&mut self.preferred_styles, style)
    }

    /// Whether the picks differ from what `preferences` holds.
    pub fn differs_from(&self, preferences: &Preferences) -> bool {
        self.favorite_colors != preferences.favorite_colors
            || self.preferred_styles != preferences.preferred_styles
    }
}

/// Owns the preference record and keeps storage in sync with it.
pub struct PreferencesStore<S: Storage> {
    storage: Arc<S>,
    preferences: Preferences,
}

impl<S: Storage> PreferencesStore<S> {
    /// Open the store, loading preferences from `storage`.
    pub fn open(storage: Arc<S>) -> Self {
        let preferences = match read_json::<S, Preferences>(&*storage, PREFERENCES_KEY) {
            Ok(Some(preferences)) => preferences,
            Ok(None) => Preferences::default(),
            Err(e) => {
                log::warn!("Error reading preferences: {}", e);
                Preferences::default()
            }
        };

        Self {
            storage,
            preferences,
        }
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    /// Replace one field.
    pub fn update(&mut self, update: PreferenceUpdate) {
        match update {
            PreferenceUpdate::FavoriteColors(colors) => {
                self.preferences.favorite_colors = dedup(colors);
            }
            PreferenceUpdate::PreferredStyles(styles) => {
                self.preferences.preferred_styles = dedup(styles);
            }
            PreferenceUpdate::PreviousDesigns(mut designs) => {
                designs.truncate(MAX_PREVIOUS_DESIGNS);
                self.preferences.previous_designs = designs;
            }
        }
        self.persist();
    }

    /// Record a design as the most recent one, dropping the oldest beyond the cap.
    pub fn add_previous_design(&mut self, design: Design) {
        let previous = &mut self.preferences.previous_designs;
        previous.insert(0, design);
        previous.truncate(MAX_PREVIOUS_DESIGNS);
        self.persist();
    }

    /// Store the colors and styles picked on the profile page.
    pub fn save_profile(&mut self, draft: &ProfileDraft) -> Notification {
        self.update(PreferenceUpdate::FavoriteColors(draft.favorite_colors.clone()));
        self.update(PreferenceUpdate::PreferredStyles(draft.preferred_styles.clone()));
        Notification::info("Preferences Saved!", "Your profile has been updated with your choices.")
    }

    /// Reset to empty defaults and remove the persisted record.
    pub fn clear(&mut self) {
        self.preferences = Preferences::default();
        if let Err(e) = self.storage.delete(PREFERENCES_KEY) {
            log::warn!("Error clearing preferences: {}", e);
        }
    }

    fn persist(&self) {
        if let Err(e) = write_json(&*self.storage, PREFERENCES_KEY, &self.preferences) {
            log::warn!("Error writing preferences: {}", e);
        }
    }
}

/// Drop repeated values, keeping first occurrences in order.
fn dedup(values: Vec<String>) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(values.len());
    for value in values {
        if !unique.contains(&value) {
            unique.push(value);
        }
    }
    unique
}

fn toggle(values: &mut Vec<String>, value: &str) -> bool {
    if let Some(pos) = values.iter().position(|v| v == value) {
        values.remove(pos);
        false
    } else {
        values.push(value.to_string());
        true
    }
}
