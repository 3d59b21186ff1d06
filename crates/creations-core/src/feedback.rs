//! Customer feedback submissions.

use crate::notify::Notification;
use crate::storage::{FEEDBACK_KEY, Storage, write_json};
use crate::validation::ValidationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Highest star rating.
pub const MAX_RATING: u8 = 5;

/// What the feedback is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackKind {
    #[default]
    General,
    DesignProcess,
    ProductQuality,
    WebsiteUx,
}

impl FeedbackKind {
    pub const ALL: [FeedbackKind; 4] = [
        FeedbackKind::General,
        FeedbackKind::DesignProcess,
        FeedbackKind::ProductQuality,
        FeedbackKind::WebsiteUx,
    ];

    /// Whether a star rating must accompany this kind of feedback.
    pub fn requires_rating(self) -> bool {
        matches!(self, FeedbackKind::DesignProcess | FeedbackKind::ProductQuality)
    }

    /// Parse the persisted name (`"design_process"`, ...).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            FeedbackKind::General => "general",
            FeedbackKind::DesignProcess => "design_process",
            FeedbackKind::ProductQuality => "product_quality",
            FeedbackKind::WebsiteUx => "website_ux",
        }
    }
}

impl fmt::Display for FeedbackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The feedback form as filled in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedbackForm {
    pub kind: FeedbackKind,
    /// Stars, 0 when unrated.
    pub rating: u8,
    pub comments: String,
    pub email: Option<String>,
}

impl FeedbackForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.rating > MAX_RATING {
            return Err(ValidationError::RatingOutOfRange(self.rating));
        }
        if self.rating == 0 && self.kind.requires_rating() {
            return Err(ValidationError::RatingRequired);
        }
        if self.comments.trim().is_empty() {
            return Err(ValidationError::CommentsRequired);
        }
        Ok(())
    }
}

/// Accepted feedback, as persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackRecord {
    #[serde(rename = "feedbackType")]
    pub kind: FeedbackKind,
    pub rating: u8,
    pub comments: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// When the feedback was sent.
    pub timestamp: DateTime<Utc>,
}

/// Validate and record `form`, replacing any earlier submission.
///
/// A storage failure is logged; the user is still thanked.
pub fn submit<S: Storage + ?Sized>(
    storage: &S,
    form: &FeedbackForm,
) -> Result<(FeedbackRecord, Notification), ValidationError> {
    form.validate()?;

    let record = FeedbackRecord {
        kind: form.kind,
        rating: form.rating,
        comments: form.comments.trim().to_string(),
        email: form
            .email
            .as_deref()
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .map(str::to_string),
        timestamp: Utc::now(),
    };

    match write_json(storage, FEEDBACK_KEY, &record) {
        Ok(()) => log::debug!("Stored {} feedback", record.kind),
        Err(e) => log::warn!("Error saving feedback: {}", e),
    }

    let notification = Notification::info(
        "Feedback Sent!",
        "Thank you for helping us improve CustomCreations!",
    );
    Ok((record, notification))
}
