//! Validation failures for user input.
//!
//! These are recovered locally: the caller shows the matching notification
//! and no state changes.

use crate::element::ElementError;
use crate::notify::Notification;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Suggestion query is empty")]
    EmptySuggestionQuery,
    #[error("Text content is required")]
    TextRequired,
    #[error("Image URL is required")]
    ImageUrlRequired,
    #[error("A rating is required")]
    RatingRequired,
    #[error("Rating must be between 1 and 5, got {0}")]
    RatingOutOfRange(u8),
    #[error("Comments are required")]
    CommentsRequired,
    #[error(transparent)]
    Element(#[from] ElementError),
}

impl ValidationError {
    /// The notification shown for this failure.
    pub fn notification(&self) -> Notification {
        match self {
            ValidationError::MissingField(field) => Notification::error(
                "Missing Information",
                format!("Please fill in the {} field.", field),
            ),
            ValidationError::PasswordMismatch => Notification::error(
                "Passwords Mismatch",
                "Please ensure both password fields match.",
            ),
            ValidationError::EmptySuggestionQuery => Notification::error(
                "Input Needed",
                "Please provide some keywords, select a product, or choose a style.",
            ),
            ValidationError::TextRequired => {
                Notification::error("Text Required", "Please enter some text.")
            }
            ValidationError::ImageUrlRequired => {
                Notification::error("Image URL Required", "Please enter an image URL.")
            }
            ValidationError::RatingRequired => Notification::error(
                "Rating Required",
                "Please select a star rating for your feedback.",
            ),
            ValidationError::RatingOutOfRange(_) => {
                Notification::error("Invalid Rating", "Please choose between 1 and 5 stars.")
            }
            ValidationError::CommentsRequired => Notification::error(
                "Comments Required",
                "Please provide some comments for your feedback.",
            ),
            ValidationError::Element(e) => Notification::error("Invalid Value", e.to_string()),
        }
    }
}

/// Fail with [`ValidationError::MissingField`] if `value` is blank.
pub(crate) fn require(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(())
    }
}
