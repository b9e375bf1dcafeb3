//! Row arrangement along the order axis.
//!
//! Sibling classifiers are sequenced by integer order keys. This module
//! converts those keys into actual placements: the keys go through an
//! [`OrderScale`] spanning the row, each classifier gets an envelope slot
//! centered at its mapped location, and the composer fits every
//! classifier into its slot.

use log::debug;

use astrolabe_core::geometry::{OrderScale, Point, Rectangle, Size};
use astrolabe_core::small_set::{SmallSet, SmallSetError};

use crate::classifier::ClassifierKind;
use crate::error::ArrangeError;
use crate::layout::{ClassifierComposer, ClassifierLayout};

/// Upper bound on the classifiers a single row arrangement supports.
pub const MAX_ROW_CLASSIFIERS: usize = 32;

/// One classifier to be placed in a row.
#[derive(Debug, Clone, Copy)]
pub struct RowEntry<'a> {
    kind: ClassifierKind,
    name: &'a str,
    order: i32,
}

impl<'a> RowEntry<'a> {
    /// Creates a row entry for a classifier with the given order key
    pub fn new(kind: ClassifierKind, name: &'a str, order: i32) -> Self {
        Self { kind, name, order }
    }

    /// The classifier kind
    pub fn kind(&self) -> ClassifierKind {
        self.kind
    }

    /// The classifier display name
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// The order key sequencing this classifier within its row
    pub fn order(&self) -> i32 {
        self.order
    }
}

/// Places a row of sibling classifiers inside the given band.
///
/// The band's horizontal extent becomes the order axis; every entry gets
/// an equally wide envelope slot centered at its order key's mapped
/// location and spanning the band's height. Layouts are returned in entry
/// order.
///
/// # Errors
///
/// [`ArrangeError::DuplicateOrder`] when two entries carry the same order
/// key, [`ArrangeError::TooManyClassifiers`] when the row exceeds
/// [`MAX_ROW_CLASSIFIERS`]. Neither is fatal; the caller fixes the input
/// and retries.
pub fn arrange_row(
    composer: &ClassifierComposer<'_>,
    entries: &[RowEntry<'_>],
    band: Rectangle,
) -> Result<Vec<ClassifierLayout>, ArrangeError> {
    let mut seen: SmallSet<i32, MAX_ROW_CLASSIFIERS> = SmallSet::new();
    let mut scale = OrderScale::new(band.left(), band.right());
    for entry in entries {
        seen.insert(entry.order()).map_err(|err| match err {
            SmallSetError::Duplicate => ArrangeError::DuplicateOrder(entry.order()),
            SmallSetError::CapacityExceeded(capacity) => {
                ArrangeError::TooManyClassifiers(capacity)
            }
        })?;
        scale.add_order(entry.order());
    }

    let slot = Size::new(
        band.width() / entries.len().max(1) as f32,
        band.height(),
    );
    let layouts = entries
        .iter()
        .map(|entry| {
            let center = Point::new(scale.location_of(entry.order()), band.center().y());
            let envelope = Rectangle::from_center(center, slot);
            composer
                .fit_envelope(entry.kind(), entry.name(), None, false, envelope)
                .into_layout()
        })
        .collect();

    debug!(entries_len = entries.len(); "row arranged");
    Ok(layouts)
}
