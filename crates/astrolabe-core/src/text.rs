//! Text measurement for label sizing.
//!
//! The layout composer needs rendered text extents to size label boxes,
//! but must not depend on a concrete font stack. [`TextMetrics`] is the
//! seam: the composer consumes the trait, and callers pick one of the two
//! implementations (or bring their own):
//!
//! - [`ShapedMetrics`] measures through cosmic-text with real font
//!   shaping, and is what interactive editors want.
//! - [`CellMetrics`] approximates every character as a fixed fraction of
//!   the font size. It is deterministic and font-free, which makes layout
//!   results reproducible in tests and headless environments.

use std::sync::Mutex;

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping};
use log::info;
use serde::Deserialize;

use crate::geometry::Size;

/// Conversion from font points to pixels at standard DPI
const PX_PER_PT: f32 = 1.33;

/// Line height as a fraction of the pixel font size
const LINE_HEIGHT_FACTOR: f32 = 1.15;

/// Approximate advance of one character as a fraction of the pixel font
/// size, used when no shaped glyphs are available
const CELL_WIDTH_FACTOR: f32 = 0.55;

/// A font request: family name and point size.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FontSpec {
    family: String,
    size: u16,
}

impl FontSpec {
    /// Creates a font spec with the given family and point size
    pub fn new(family: &str, size: u16) -> Self {
        Self {
            family: family.to_string(),
            size,
        }
    }

    /// Returns the font family name
    pub fn family(&self) -> &str {
        &self.family
    }

    /// Returns the font size in points
    pub fn size(&self) -> u16 {
        self.size
    }

    /// Returns the font size in pixels
    pub fn size_px(&self) -> f32 {
        f32::from(self.size) * PX_PER_PT
    }

    /// Returns the line height in pixels
    pub fn line_height(&self) -> f32 {
        self.size_px() * LINE_HEIGHT_FACTOR
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self {
            family: "Arial".to_string(),
            size: 15,
        }
    }
}

/// Measures the rendered extent of label text.
///
/// Implementations must report a zero size for empty text and stack line
/// heights for multi-line text.
pub trait TextMetrics {
    /// Returns the rendered width and height of `text` in the given font
    fn measure(&self, text: &str, font: &FontSpec) -> Size;
}

/// Text measurement backed by cosmic-text shaping.
///
/// Holds a reusable [`FontSystem`] behind a mutex; constructing the font
/// system scans installed fonts and is expensive, so create one
/// `ShapedMetrics` and share it for the lifetime of the editor.
pub struct ShapedMetrics {
    font_system: Mutex<FontSystem>,
}

impl ShapedMetrics {
    /// Creates a new instance with a freshly scanned font system
    pub fn new() -> Self {
        info!("Initializing FontSystem");
        Self {
            font_system: Mutex::new(FontSystem::new()),
        }
    }
}

impl Default for ShapedMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMetrics for ShapedMetrics {
    fn measure(&self, text: &str, font: &FontSpec) -> Size {
        if text.is_empty() {
            return Size::default();
        }

        let mut font_system = self.font_system.lock().expect("failed to lock FontSystem");

        let metrics = Metrics::new(font.size_px(), font.line_height());
        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let attrs = Attrs::new().family(Family::Name(font.family()));

        // unlimited buffer so the text flows naturally
        buffer.set_size(None, None);

        // advanced shaping handles ligatures, kerning, etc.
        buffer.set_text(text, &attrs, Shaping::Advanced, None);
        buffer.shape_until_scroll(true);

        // rightmost glyph position per layout run determines the width
        let mut max_width: f32 = 0.0;
        let mut total_height: f32 = 0.0;
        let layout_runs: Vec<_> = buffer.layout_runs().collect();
        if !layout_runs.is_empty() {
            for last in layout_runs.iter().map(|run| run.glyphs.last()) {
                if let Some(last) = last {
                    max_width = max_width.max(last.x + last.w);
                }
                total_height += metrics.line_height;
            }
        } else {
            // no shaped runs available, fall back to the cell estimate
            max_width = text.chars().count() as f32 * font.size_px() * CELL_WIDTH_FACTOR;
            total_height = metrics.line_height;
        }

        Size::new(max_width, total_height)
    }
}

/// Deterministic per-character text measurement.
///
/// Every character advances by the same fixed fraction of the font size.
/// Results are stable across machines and need no installed fonts.
#[derive(Debug, Clone, Copy, Default)]
pub struct CellMetrics;

impl TextMetrics for CellMetrics {
    fn measure(&self, text: &str, font: &FontSpec) -> Size {
        if text.is_empty() {
            return Size::default();
        }
        let widest_line = text
            .lines()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);
        let line_count = text.lines().count().max(1);
        Size::new(
            widest_line as f32 * font.size_px() * CELL_WIDTH_FACTOR,
            line_count as f32 * font.line_height(),
        )
    }
}
