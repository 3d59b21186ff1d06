//! Mock design suggestions.
//!
//! Recommendations are sampled at random from fixed lists of products,
//! styles and color palettes, mixed with one of the user's keywords. A fixed
//! delay stands in for model latency.

use crate::validation::ValidationError;
use chrono::Utc;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::Serialize;
use std::time::Duration;

/// Delay before suggestions are returned.
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1500);

/// Product types suggestions can target.
pub const PRODUCT_TYPES: &[&str] = &["T-Shirt", "Mug", "Hat", "Tote Bag", "Hoodie", "Phone Case"];

/// Design styles suggestions can use.
pub const DESIGN_STYLES: &[&str] = &[
    "Minimalist",
    "Vintage",
    "Modern",
    "Abstract",
    "Typography",
    "Nature-inspired",
    "Geometric",
];

/// Keywords used when the user gives none.
pub const FALLBACK_KEYWORDS: &[&str] = &["creative", "unique", "personalized"];

/// A named set of colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorPalette {
    pub name: &'static str,
    pub colors: [&'static str; 3],
    pub description: &'static str,
}

pub const COLOR_PALETTES: &[ColorPalette] = &[
    ColorPalette {
        name: "Vibrant Sunset",
        colors: ["#FF6B6B", "#FFA500", "#FFD700"],
        description: "Warm and energetic, perfect for bold statements.",
    },
    ColorPalette {
        name: "Ocean Breeze",
        colors: ["#00BFFF", "#1E90FF", "#ADD8E6"],
        description: "Calm and refreshing, ideal for cool and serene designs.",
    },
    ColorPalette {
        name: "Forest Canopy",
        colors: ["#228B22", "#3CB371", "#90EE90"],
        description: "Earthy and natural, great for organic or eco-themed items.",
    },
    ColorPalette {
        name: "Monochromatic Chic",
        colors: ["#333333", "#808080", "#D3D3D3"],
        description: "Sleek and sophisticated, for a timeless modern look.",
    },
    ColorPalette {
        name: "Pastel Dreams",
        colors: ["#FFB6C1", "#E6E6FA", "#AFEEEE"],
        description: "Soft and gentle, excellent for delicate and whimsical designs.",
    },
];

/// What the user asked for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuggestionQuery {
    /// Free text, comma-separated keywords.
    pub keywords: String,
    /// Product type, `None` for any.
    pub product: Option<String>,
    /// Design style, `None` for any.
    pub style: Option<String>,
}

impl SuggestionQuery {
    /// True when there are no keywords and no product or style was picked.
    pub fn is_empty(&self) -> bool {
        self.keywords.trim().is_empty() && self.product.is_none() && self.style.is_none()
    }

    /// The user's keywords, trimmed, blanks dropped.
    pub fn keywords(&self) -> Vec<&str> {
        self.keywords
            .split(',')
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .collect()
    }
}

/// One suggested design idea.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub product_type: String,
    pub design_style: String,
    pub color_palette: ColorPalette,
    pub user_keywords: String,
}

impl Recommendation {
    /// Route id of the design tool for this product type ("Tote Bag" -> "totebag").
    pub fn design_slug(&self) -> String {
        self.product_type
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect()
    }
}

/// Build 2 to 4 recommendations for `query`.
///
/// `base_id` seeds the record ids (`base_id + index`).
pub fn generate<R: Rng + ?Sized>(query: &SuggestionQuery, rng: &mut R, base_id: u64) -> Vec<Recommendation> {
    let count: usize = rng.random_range(2..=4);
    let mut keywords = query.keywords();
    if keywords.is_empty() {
        keywords = FALLBACK_KEYWORDS.to_vec();
    }

    (0..count)
        .map(|i| {
            let product = pick(query.product.as_deref(), PRODUCT_TYPES, rng);
            let style = pick(query.style.as_deref(), DESIGN_STYLES, rng);
            let palette = COLOR_PALETTES.choose(rng).copied().unwrap_or(COLOR_PALETTES[0]);
            let keyword = keywords.choose(rng).copied().unwrap_or(FALLBACK_KEYWORDS[0]);

            Recommendation {
                id: base_id + i as u64,
                title: format!("Inspired {} Idea #{}", product, i + 1),
                description: format!(
                    "A {} {} featuring {} elements, using the '{}' color palette. {}",
                    style, product, keyword, palette.name, palette.description
                ),
                product_type: product.to_string(),
                design_style: style.to_string(),
                color_palette: palette,
                user_keywords: query.keywords.clone(),
            }
        })
        .collect()
}

fn pick<'a, R: Rng + ?Sized>(chosen: Option<&'a str>, options: &'a [&'a str], rng: &mut R) -> &'a str {
    chosen
        .or_else(|| options.choose(rng).copied())
        .unwrap_or_default()
}

/// Produces recommendations after an artificial delay.
#[derive(Debug, Clone)]
pub struct Suggester {
    latency: Duration,
}

impl Default for Suggester {
    fn default() -> Self {
        Self::new(DEFAULT_LATENCY)
    }
}

impl Suggester {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    /// Validate `query`, wait, then generate recommendations.
    ///
    /// An empty query is rejected immediately, without the delay.
    pub async fn suggest(&self, query: &SuggestionQuery) -> Result<Vec<Recommendation>, ValidationError> {
        if query.is_empty() {
            return Err(ValidationError::EmptySuggestionQuery);
        }

        tokio::time::sleep(self.latency).await;

        let base_id = u64::try_from(Utc::now().timestamp_millis()).unwrap_or_default();
        let recommendations = generate(query, &mut rand::rng(), base_id);
        log::debug!("Generated {} suggestion(s)", recommendations.len());
        Ok(recommendations)
    }
}
