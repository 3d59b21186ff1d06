//! Design elements: text and image overlays placed on a product.
//!
//! Coordinates are pixel offsets from the origin of the product's design
//! area. Elements serialize with an internal `"type"` tag so the persisted
//! JSON reads `{"type":"text","id":..,"content":..,"color":..,"fontSize":..,"x":..,"y":..}`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Default font size for new text, in pixels.
pub const DEFAULT_FONT_SIZE: u32 = 24;
/// Smallest font size the editor offers.
pub const MIN_FONT_SIZE: u32 = 8;
/// Largest font size the editor offers.
pub const MAX_FONT_SIZE: u32 = 72;
/// Where new text lands inside the design area.
pub const DEFAULT_TEXT_POSITION: (i32, i32) = (50, 50);
/// Where new images land inside the design area.
pub const DEFAULT_IMAGE_POSITION: (i32, i32) = (50, 100);
/// Width and height of a freshly added image.
pub const DEFAULT_IMAGE_SIZE: u32 = 100;
/// Smallest image side the editor offers.
pub const MIN_IMAGE_SIZE: u32 = 20;

/// Errors raised when building an element from raw values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ElementError {
    #[error("Invalid hex color: {0}")]
    InvalidColor(String),
    #[error("Font size must be positive")]
    ZeroFontSize,
    #[error("Image {0} must be positive")]
    ZeroDimension(&'static str),
}

/// Unique identifier for a design element.
///
/// Freshly created elements get a UUID; any string read back from storage
/// is accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    /// Generate a new unique id.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ElementId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ElementId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A `#rgb` or `#rrggbb` color string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    /// Parse and validate a hex color.
    pub fn parse(value: &str) -> Result<Self, ElementError> {
        let digits = value
            .strip_prefix('#')
            .ok_or_else(|| ElementError::InvalidColor(value.to_string()))?;
        let valid_len = digits.len() == 3 || digits.len() == 6;
        if !valid_len || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ElementError::InvalidColor(value.to_string()));
        }
        Ok(Self(value.to_string()))
    }

    pub fn black() -> Self {
        Self("#000000".to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for HexColor {
    fn default() -> Self {
        Self::black()
    }
}

impl FromStr for HexColor {
    type Err = ElementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for HexColor {
    type Error = ElementError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A text overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextElement {
    pub(crate) id: ElementId,
    /// The text content.
    pub content: String,
    /// Text color.
    pub color: HexColor,
    /// Font size in pixels.
    pub font_size: NonZeroU32,
    pub x: i32,
    pub y: i32,
}

impl TextElement {
    /// Create a text element at the default position.
    pub fn new(content: impl Into<String>, color: HexColor, font_size: u32) -> Result<Self, ElementError> {
        let font_size = NonZeroU32::new(font_size).ok_or(ElementError::ZeroFontSize)?;
        let (x, y) = DEFAULT_TEXT_POSITION;
        Ok(Self {
            id: ElementId::new(),
            content: content.into(),
            color,
            font_size,
            x,
            y,
        })
    }

    /// Replace the generated id.
    pub fn with_id(mut self, id: impl Into<ElementId>) -> Self {
        self.id = id.into();
        self
    }

    /// Place the element at `(x, y)`.
    pub fn at(mut self, x: i32, y: i32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn id(&self) -> &ElementId {
        &self.id
    }
}

/// An image overlay referenced by URI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageElement {
    pub(crate) id: ElementId,
    /// Image URI.
    pub src: String,
    /// Display width in pixels.
    pub width: NonZeroU32,
    /// Display height in pixels.
    pub height: NonZeroU32,
    pub x: i32,
    pub y: i32,
}

impl ImageElement {
    /// Create an image element with the default size and position.
    pub fn new(src: impl Into<String>) -> Self {
        let (x, y) = DEFAULT_IMAGE_POSITION;
        let side = NonZeroU32::new(DEFAULT_IMAGE_SIZE).unwrap_or(NonZeroU32::MIN);
        Self {
            id: ElementId::new(),
            src: src.into(),
            width: side,
            height: side,
            x,
            y,
        }
    }

    /// Set the display size.
    pub fn with_size(mut self, width: u32, height: u32) -> Result<Self, ElementError> {
        self.width = NonZeroU32::new(width).ok_or(ElementError::ZeroDimension("width"))?;
        self.height = NonZeroU32::new(height).ok_or(ElementError::ZeroDimension("height"))?;
        Ok(self)
    }

    /// Replace the generated id.
    pub fn with_id(mut self, id: impl Into<ElementId>) -> Self {
        self.id = id.into();
        self
    }

    /// Place the element at `(x, y)`.
    pub fn at(mut self, x: i32, y: i32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn id(&self) -> &ElementId {
        &self.id
    }
}

/// Changes to a text element. `None` leaves the attribute untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextUpdate {
    pub content: Option<String>,
    pub color: Option<HexColor>,
    pub font_size: Option<NonZeroU32>,
}

/// Changes to an image element. `None` leaves the attribute untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageUpdate {
    pub src: Option<String>,
    pub width: Option<NonZeroU32>,
    pub height: Option<NonZeroU32>,
}

/// A partial update, tagged by the element kind it applies to.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementUpdate {
    Text(TextUpdate),
    Image(ImageUpdate),
    /// Move an element of either kind.
    Move { x: i32, y: i32 },
}

/// A visual item placed on a product's design area.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DesignElement {
    Text(TextElement),
    Image(ImageElement),
}

impl DesignElement {
    pub fn id(&self) -> &ElementId {
        match self {
            DesignElement::Text(t) => &t.id,
            DesignElement::Image(i) => &i.id,
        }
    }

    /// Offset from the design-area origin.
    pub fn position(&self) -> (i32, i32) {
        match self {
            DesignElement::Text(t) => (t.x, t.y),
            DesignElement::Image(i) => (i.x, i.y),
        }
    }

    /// The `"type"` tag as persisted.
    pub fn kind_name(&self) -> &'static str {
        match self {
            DesignElement::Text(_) => "text",
            DesignElement::Image(_) => "image",
        }
    }

    pub fn as_text(&self) -> Option<&TextElement> {
        match self {
            DesignElement::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_image(&self) -> Option<&ImageElement> {
        match self {
            DesignElement::Image(i) => Some(i),
            _ => None,
        }
    }

    /// Merge `update` into this element.
    ///
    /// Returns false when the update targets the other element kind; the
    /// element is left untouched in that case.
    pub fn apply(&mut self, update: &ElementUpdate) -> bool {
        match (self, update) {
            (DesignElement::Text(t), ElementUpdate::Text(u)) => {
                if let Some(content) = &u.content {
                    t.content = content.clone();
                }
                if let Some(color) = &u.color {
                    t.color = color.clone();
                }
                if let Some(size) = u.font_size {
                    t.font_size = size;
                }
                true
            }
            (DesignElement::Image(i), ElementUpdate::Image(u)) => {
                if let Some(src) = &u.src {
                    i.src = src.clone();
                }
                if let Some(width) = u.width {
                    i.width = width;
                }
                if let Some(height) = u.height {
                    i.height = height;
                }
                true
            }
            (DesignElement::Text(t), ElementUpdate::Move { x, y }) => {
                t.x = *x;
                t.y = *y;
                true
            }
            (DesignElement::Image(i), ElementUpdate::Move { x, y }) => {
                i.x = *x;
                i.y = *y;
                true
            }
            _ => false,
        }
    }
}

impl From<TextElement> for DesignElement {
    fn from(text: TextElement) -> Self {
        DesignElement::Text(text)
    }
}

impl From<ImageElement> for DesignElement {
    fn from(image: ImageElement) -> Self {
        DesignElement::Image(image)
    }
}
