//! Sizing policy for classifier layout.
//!
//! [`SizePolicy`] groups the tunable dimensions the composer consults:
//! minimum symbol sizes, the fixed glyph sizes of iconographic kinds,
//! preferred gaps and line widths. It is a getter-only configuration
//! object; all fields deserialize with defaults so a partial
//! configuration file only overrides what it names.

use serde::Deserialize;

use astrolabe_core::geometry::Size;

use crate::classifier::ClassifierKind;

/// Tunable dimensions for classifier layout.
///
/// # Default Values
///
/// | Property | Default |
/// |----------|---------|
/// | Gap between boxes | `8.0` |
/// | Contour line width | `2.0` |
/// | Minimum symbol size | `48.0 × 32.0` |
/// | Minimum child space | `24.0 × 16.0` |
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SizePolicy {
    gap: f32,
    line_width: f32,
    min_symbol_width: f32,
    min_symbol_height: f32,
    min_space_width: f32,
    min_space_height: f32,
}

impl Default for SizePolicy {
    fn default() -> Self {
        Self {
            gap: 8.0,
            line_width: 2.0,
            min_symbol_width: 48.0,
            min_symbol_height: 32.0,
            min_space_width: 24.0,
            min_space_height: 16.0,
        }
    }
}

impl SizePolicy {
    /// Preferred gap between neighboring layout boxes
    pub fn gap(&self) -> f32 {
        self.gap
    }

    /// Width of a classifier's contour line
    pub fn line_width(&self) -> f32 {
        self.line_width
    }

    /// Minimum child-space extent reserved when children are shown
    pub fn min_space_size(&self) -> Size {
        Size::new(self.min_space_width, self.min_space_height)
    }

    /// Minimum symbol extent for a resizable-contour kind.
    ///
    /// Container-like kinds get extra width so their contour stays
    /// recognizable even when empty.
    pub fn min_symbol_size(&self, kind: ClassifierKind) -> Size {
        debug_assert!(kind.has_resizable_contour());
        let widened = match kind {
            ClassifierKind::Package
            | ClassifierKind::Subsystem
            | ClassifierKind::Boundary
            | ClassifierKind::Activity => 1.5,
            ClassifierKind::UseCase => 1.25,
            ClassifierKind::Comment => 0.75,
            _ => 1.0,
        };
        Size::new(self.min_symbol_width * widened, self.min_symbol_height)
    }

    /// Fixed glyph extent for an iconographic kind.
    ///
    /// These do not scale with the policy minimums; the glyph is drawn at
    /// its native size.
    pub fn icon_size(&self, kind: ClassifierKind) -> Size {
        debug_assert!(!kind.has_resizable_contour());
        match kind {
            ClassifierKind::Actor => Size::new(24.0, 54.0),
            ClassifierKind::InitialNode | ClassifierKind::FinalNode => Size::new(24.0, 24.0),
            ClassifierKind::ShallowHistory | ClassifierKind::DeepHistory => Size::new(24.0, 24.0),
            ClassifierKind::ForkNode | ClassifierKind::JoinNode => Size::new(8.0, 40.0),
            ClassifierKind::DecisionNode => Size::new(32.0, 32.0),
            ClassifierKind::TimeEvent => Size::new(24.0, 32.0),
            ClassifierKind::AcceptEvent | ClassifierKind::SendSignal => Size::new(40.0, 24.0),
            ClassifierKind::InteractionUse => Size::new(48.0, 24.0),
            _ => Size::new(24.0, 24.0),
        }
    }
}
