//! The classifier box composer.
//!
//! Two composition modes cover the editor's needs:
//!
//! - [`ClassifierComposer::expand_space`] keeps a caller-reserved child
//!   space fixed and grows label and symbol outward around it. It cannot
//!   fail: the result is as large as it needs to be.
//! - [`ClassifierComposer::fit_envelope`] works inside a caller-given
//!   envelope. When the envelope cannot honor the minimum sizes, the
//!   composer grows it instead of producing an invalid layout and reports
//!   that through [`EnvelopeFit::Grown`].

use log::trace;

use astrolabe_core::geometry::{Point, Rectangle, Size};
use astrolabe_core::text::{FontSpec, TextMetrics};

use crate::classifier::ClassifierKind;
use crate::layout::{ClassifierLayout, EnvelopeFit};
use crate::policy::SizePolicy;

/// Composes the symbol/label/space boxes of one classifier.
///
/// The composer borrows its collaborators: the sizing policy and the
/// text metrics implementation used to measure label text.
pub struct ClassifierComposer<'a> {
    policy: &'a SizePolicy,
    metrics: &'a dyn TextMetrics,
    font: FontSpec,
}

impl<'a> ClassifierComposer<'a> {
    /// Creates a composer over the given policy, metrics and label font
    pub fn new(policy: &'a SizePolicy, metrics: &'a dyn TextMetrics, font: FontSpec) -> Self {
        Self {
            policy,
            metrics,
            font,
        }
    }

    /// Measures the label extent: the name, with the guillemet-decorated
    /// stereotype stacked above it when present.
    fn label_size(&self, name: &str, stereotype: Option<&str>) -> Size {
        let name_size = self.metrics.measure(name, &self.font);
        match stereotype {
            Some(text) if !text.is_empty() => {
                let stereotype_size = self.metrics.measure(&format!("\u{ab}{text}\u{bb}"), &self.font);
                stereotype_size.merge_vertical(name_size)
            }
            _ => name_size,
        }
    }

    /// Grows label and symbol outward from the reserved `in_space`.
    ///
    /// The space box of the result is exactly `in_space`. For
    /// resizable-contour kinds the symbol box is the title band sitting
    /// flush above the space, so the two never overlap; fixed-size kinds
    /// place their glyph above the label with no such guarantee. The
    /// envelope box encloses everything.
    pub fn expand_space(
        &self,
        kind: ClassifierKind,
        name: &str,
        stereotype: Option<&str>,
        show_children: bool,
        in_space: Rectangle,
    ) -> ClassifierLayout {
        debug_assert!(in_space.left().is_finite() && in_space.top().is_finite());

        let gap = self.policy.gap();
        let label = self.label_size(name, stereotype);
        let center_x = in_space.center().x();

        let layout = if kind.has_resizable_contour() {
            // children need clearance for their own contour lines
            let clearance = if show_children {
                gap + self.policy.line_width()
            } else {
                gap
            };
            let label_box = Rectangle::from_top_left(
                Point::new(
                    center_x - label.width() / 2.0,
                    in_space.top() - clearance - label.height(),
                ),
                label,
            );

            let band_left = in_space.left().min(label_box.left()) - gap;
            let band_right = in_space.right().max(label_box.right()) + gap;
            let band_top = label_box.top() - gap;
            let mut symbol_box = Rectangle::new(
                band_left,
                band_top,
                band_right - band_left,
                in_space.top() - band_top,
            );
            let min_width = self.policy.min_symbol_size(kind).width();
            if symbol_box.width() < min_width {
                symbol_box = Rectangle::from_center(
                    symbol_box.center(),
                    Size::new(min_width, symbol_box.height()),
                );
            }

            let envelope_box = symbol_box.merge(in_space);
            ClassifierLayout::new(kind, symbol_box, label_box, in_space, envelope_box)
        } else {
            let icon = self.policy.icon_size(kind);
            let label_box = Rectangle::from_top_left(
                Point::new(
                    center_x - label.width() / 2.0,
                    in_space.top() - gap - label.height(),
                ),
                label,
            );
            let symbol_box = Rectangle::from_top_left(
                Point::new(
                    center_x - icon.width() / 2.0,
                    label_box.top() - gap - icon.height(),
                ),
                icon,
            );
            let envelope_box = symbol_box.merge(label_box).merge(in_space);
            ClassifierLayout::new(kind, symbol_box, label_box, in_space, envelope_box)
        };

        trace!(kind = kind.name(), show_children; "space expanded");
        layout
    }

    /// Fits symbol, label and space inside the caller-given envelope.
    ///
    /// Returns [`EnvelopeFit::Fitted`] when the envelope honors the
    /// minimum sizes derived from the policy and the measured label;
    /// otherwise the envelope is grown (anchored at the requested
    /// top-left, always enclosing the request) and the outcome is
    /// [`EnvelopeFit::Grown`]. In the fitted case of a resizable-contour
    /// kind, label and space are fully contained in the symbol box.
    pub fn fit_envelope(
        &self,
        kind: ClassifierKind,
        name: &str,
        stereotype: Option<&str>,
        show_children: bool,
        envelope: Rectangle,
    ) -> EnvelopeFit {
        debug_assert!(envelope.left().is_finite() && envelope.top().is_finite());

        let gap = self.policy.gap();
        let label = self.label_size(name, stereotype);
        let space_min = self.policy.min_space_size();

        let (required, fits, envelope_box);
        if kind.has_resizable_contour() {
            let min_symbol = self.policy.min_symbol_size(kind);
            let mut required_w = min_symbol.width().max(label.width() + 2.0 * gap);
            let mut required_h = min_symbol.height().max(label.height() + 2.0 * gap);
            if show_children {
                required_w = required_w.max(space_min.width() + 2.0 * gap);
                required_h = required_h.max(label.height() + 3.0 * gap + space_min.height());
            }
            required = Size::new(required_w, required_h);
        } else {
            let icon = self.policy.icon_size(kind);
            let mut required_w = icon.width().max(label.width());
            let mut required_h = icon.height() + gap + label.height();
            if show_children {
                required_w = required_w.max(space_min.width());
                required_h += 2.0 * gap + space_min.height();
            }
            required = Size::new(required_w, required_h);
        }

        fits = envelope.width() >= required.width() && envelope.height() >= required.height();
        envelope_box = if fits {
            envelope
        } else {
            // grow rather than violate minimum sizes; callers re-query
            Rectangle::new(
                envelope.left(),
                envelope.top(),
                envelope.width().max(required.width()),
                envelope.height().max(required.height()),
            )
        };

        let center_x = envelope_box.center().x();
        let layout = if kind.has_resizable_contour() {
            let symbol_box = envelope_box;
            let label_box = Rectangle::from_top_left(
                Point::new(center_x - label.width() / 2.0, symbol_box.top() + gap),
                label,
            );
            let space_top = (label_box.bottom() + gap).min(symbol_box.bottom());
            let space_box = Rectangle::new(
                symbol_box.left() + gap,
                space_top,
                (symbol_box.width() - 2.0 * gap).max(0.0),
                (symbol_box.bottom() - gap - space_top).max(0.0),
            );
            ClassifierLayout::new(kind, symbol_box, label_box, space_box, envelope_box)
        } else {
            let icon = self.policy.icon_size(kind);
            let symbol_box = Rectangle::from_top_left(
                Point::new(center_x - icon.width() / 2.0, envelope_box.top()),
                icon,
            );
            let label_box = Rectangle::from_top_left(
                Point::new(center_x - label.width() / 2.0, symbol_box.bottom() + gap),
                label,
            );
            let space_top = (label_box.bottom() + gap).min(envelope_box.bottom());
            let space_box = Rectangle::new(
                envelope_box.left(),
                space_top,
                envelope_box.width(),
                (envelope_box.bottom() - gap - space_top).max(0.0),
            );
            ClassifierLayout::new(kind, symbol_box, label_box, space_box, envelope_box)
        };

        trace!(kind = kind.name(), grown = !fits; "envelope composed");
        if fits {
            EnvelopeFit::Fitted(layout)
        } else {
            EnvelopeFit::Grown(layout)
        }
    }
}
