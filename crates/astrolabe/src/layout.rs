//! Classifier layout results and the operations that produce them.
//!
//! # Overview
//!
//! - [`ClassifierLayout`] - the four output rectangles of one layout pass
//! - [`EnvelopeFit`] - fitted/grown outcome of an envelope-constrained pass
//! - [`ClassifierComposer`] - the two composition operations
//! - [`arrange_row`] - placement of a whole sibling row along an order axis

mod arrange;
mod composer;

pub use arrange::{MAX_ROW_CLASSIFIERS, RowEntry, arrange_row};
pub use composer::ClassifierComposer;

use astrolabe_core::geometry::Rectangle;

use crate::classifier::ClassifierKind;

/// The placement of one classifier: symbol, label and child-space boxes
/// plus the envelope that encloses them.
///
/// Produced by [`ClassifierComposer`]; owned by the caller for the
/// duration of one layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClassifierLayout {
    kind: ClassifierKind,
    symbol_box: Rectangle,
    label_box: Rectangle,
    space_box: Rectangle,
    envelope_box: Rectangle,
}

impl ClassifierLayout {
    pub(crate) fn new(
        kind: ClassifierKind,
        symbol_box: Rectangle,
        label_box: Rectangle,
        space_box: Rectangle,
        envelope_box: Rectangle,
    ) -> Self {
        Self {
            kind,
            symbol_box,
            label_box,
            space_box,
            envelope_box,
        }
    }

    /// The classifier kind this layout was produced for
    pub fn kind(&self) -> ClassifierKind {
        self.kind
    }

    /// The rectangle occupied by the classifier's contour or glyph
    pub fn symbol_box(&self) -> Rectangle {
        self.symbol_box
    }

    /// The rectangle occupied by the classifier's name (and stereotype)
    pub fn label_box(&self) -> Rectangle {
        self.label_box
    }

    /// The rectangle reserved for nested children
    pub fn space_box(&self) -> Rectangle {
        self.space_box
    }

    /// The outer rectangle enclosing symbol, label and space
    pub fn envelope_box(&self) -> Rectangle {
        self.envelope_box
    }
}

/// Outcome of [`ClassifierComposer::fit_envelope`].
///
/// Both variants carry a complete, usable layout; `Grown` additionally
/// signals that the requested envelope was too small and the layout's
/// envelope box had to be enlarged (it always encloses the request).
/// Callers react by re-querying [`ClassifierLayout::envelope_box`] and
/// re-laying-out siblings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EnvelopeFit {
    /// The layout honors the requested envelope exactly.
    Fitted(ClassifierLayout),
    /// The requested envelope was too small; the layout uses a grown one.
    Grown(ClassifierLayout),
}

impl EnvelopeFit {
    /// The produced layout, whether fitted or grown
    pub fn layout(&self) -> &ClassifierLayout {
        match self {
            EnvelopeFit::Fitted(layout) | EnvelopeFit::Grown(layout) => layout,
        }
    }

    /// Consumes the outcome, returning the layout
    pub fn into_layout(self) -> ClassifierLayout {
        match self {
            EnvelopeFit::Fitted(layout) | EnvelopeFit::Grown(layout) => layout,
        }
    }

    /// Returns true when the requested envelope had to be enlarged
    pub fn is_grown(&self) -> bool {
        matches!(self, EnvelopeFit::Grown(_))
    }
}
