//! Abstract draw commands — the output of the layout planner and the
//! input of the rendering backend.
//!
//! Coordinates are absolute PDF points with the origin at the TOP-LEFT of
//! the page and y growing downward (the layout engine thinks in reading
//! order); the backend flips to PDF's bottom-up space when emitting.

use serde::Serialize;

/// A4 page width in points.
pub const PAGE_WIDTH: f64 = 595.28;
/// A4 page height in points.
pub const PAGE_HEIGHT: f64 = 841.89;

/// RGB color, components in 0.0..=1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
}

/// The builtin Type1 faces the document uses. No embedding needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Font {
    Regular,
    Bold,
    Oblique,
}

impl Font {
    /// PDF resource name in content streams.
    pub(crate) fn resource_name(self) -> &'static str {
        match self {
            Font::Regular => "F1",
            Font::Bold => "F2",
            Font::Oblique => "F3",
        }
    }

    /// PDF BaseFont name.
    pub(crate) fn base_name(self) -> &'static str {
        match self {
            Font::Regular => "Helvetica",
            Font::Bold => "Helvetica-Bold",
            Font::Oblique => "Helvetica-Oblique",
        }
    }
}

/// Bundled image assets referenced by draw commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AssetId {
    Logo,
    PhoneIcon,
    EmailIcon,
    SignatureProprietor,
    SignatureAccountant,
}

/// Stroke parameters for rects and lines.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

/// One positioned drawing primitive.
///
/// `Text` y is the baseline; `Rect` y is the top edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCmd {
    Text {
        x: f64,
        y: f64,
        text: String,
        font: Font,
        size: f64,
        color: Color,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: Option<Color>,
        stroke: Option<Stroke>,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        width: f64,
        color: Color,
    },
    Image {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        asset: AssetId,
    },
}

/// One laid-out page: an ordered list of draw commands.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Page {
    pub commands: Vec<DrawCmd>,
}

/// The finished layout: a deterministic page sequence, pure function of
/// the invoice input.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RenderedDocument {
    pub pages: Vec<Page>,
}

impl RenderedDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// All assets referenced by any page, for resource-dictionary setup.
    pub(crate) fn used_assets(&self) -> Vec<AssetId> {
        let mut used = Vec::new();
        for page in &self.pages {
            for cmd in &page.commands {
                if let DrawCmd::Image { asset, .. } = cmd {
                    if !used.contains(asset) {
                        used.push(*asset);
                    }
                }
            }
        }
        used
    }
}
