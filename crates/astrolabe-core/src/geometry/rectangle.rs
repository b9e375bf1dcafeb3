//! Axis-aligned rectangle with set-algebra operations.
//!
//! [`Rectangle`] is the workhorse of the layout engine: classifier boxes,
//! reserved child space and connector bounds are all rectangles, and the
//! composer decides placements through the predicates and set operations
//! defined here.

use super::{Point, Size};

/// An axis-aligned rectangle in diagram space.
///
/// Stored as top-left corner plus extent; `right` and `bottom` are
/// derived. Width and height are never negative: operations that would
/// shrink a rectangle below zero clamp to a zero-size rectangle at a
/// deterministic anchor instead.
///
/// # Examples
///
/// ```
/// # use astrolabe_core::geometry::{Point, Rectangle};
/// let rect = Rectangle::new(10.0, 10.0, 10.0, 10.0);
/// assert_eq!(rect.right(), 20.0);
/// assert_eq!(rect.bottom(), 20.0);
/// assert!(rect.contains(Point::new(19.0, 19.0)));
/// assert!(!rect.contains(Point::new(20.0, 20.0)));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rectangle {
    left: f32,
    top: f32,
    width: f32,
    height: f32,
}

impl Rectangle {
    /// Creates a new rectangle from its top-left corner and extent.
    ///
    /// Width and height must not be negative.
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        debug_assert!(width >= 0.0, "rectangle width must not be negative");
        debug_assert!(height >= 0.0, "rectangle height must not be negative");
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Creates a new rectangle from a top-left point and a size
    pub fn from_top_left(top_left: Point, size: Size) -> Self {
        Self::new(top_left.x(), top_left.y(), size.width(), size.height())
    }

    /// Creates a new rectangle from a center point and a size
    pub fn from_center(center: Point, size: Size) -> Self {
        Self::new(
            center.x() - size.width() / 2.0,
            center.y() - size.height() / 2.0,
            size.width(),
            size.height(),
        )
    }

    /// Creates a zero-size rectangle anchored at the given point
    pub fn zero_at(anchor: Point) -> Self {
        Self::new(anchor.x(), anchor.y(), 0.0, 0.0)
    }

    /// Returns the left edge x-coordinate
    pub fn left(self) -> f32 {
        self.left
    }

    /// Returns the top edge y-coordinate
    pub fn top(self) -> f32 {
        self.top
    }

    /// Returns the width of the rectangle
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height of the rectangle
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns the right edge x-coordinate
    pub fn right(self) -> f32 {
        self.left + self.width
    }

    /// Returns the bottom edge y-coordinate
    pub fn bottom(self) -> f32 {
        self.top + self.height
    }

    /// Returns the top-left corner as a Point
    pub fn top_left(self) -> Point {
        Point::new(self.left, self.top)
    }

    /// Returns the center point of the rectangle
    pub fn center(self) -> Point {
        Point::new(
            self.left + self.width / 2.0,
            self.top + self.height / 2.0,
        )
    }

    /// Converts the rectangle extent to a Size
    pub fn size(self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Returns the area of the rectangle, 0 for degenerate rectangles
    pub fn area(self) -> f32 {
        self.width * self.height
    }

    /// Tests whether a point lies within the rectangle.
    ///
    /// The interval is half-open: a point exactly on the right or bottom
    /// border is NOT contained. This matches pixel-border semantics, where
    /// the right/bottom border belongs to the neighboring cell.
    pub fn contains(self, p: Point) -> bool {
        self.left <= p.x() && p.x() < self.right() && self.top <= p.y() && p.y() < self.bottom()
    }

    /// Tests whether every point of `other` lies within this rectangle
    /// (closed comparison). Equal rectangles enclose each other.
    pub fn encloses(self, other: Rectangle) -> bool {
        self.left <= other.left
            && other.right() <= self.right()
            && self.top <= other.top
            && other.bottom() <= self.bottom()
    }

    /// Tests whether the open interiors of the two rectangles overlap.
    ///
    /// Touching edges do not count; see [`Rectangle::touches`] for the
    /// edge-contact predicate. The two predicates are mutually exclusive.
    pub fn intersects(self, other: Rectangle) -> bool {
        self.left.max(other.left) < self.right().min(other.right())
            && self.top.max(other.top) < self.bottom().min(other.bottom())
    }

    /// Tests whether the rectangles share a border segment of positive
    /// length while their interiors stay disjoint.
    ///
    /// Rectangles meeting only at a corner do not touch (the shared
    /// segment has zero length).
    pub fn touches(self, other: Rectangle) -> bool {
        if self.intersects(other) {
            return false;
        }
        let x_overlap = self.right().min(other.right()) - self.left.max(other.left);
        let y_overlap = self.bottom().min(other.bottom()) - self.top.max(other.top);
        let vertical_edge =
            (self.right() == other.left || other.right() == self.left) && y_overlap > 0.0;
        let horizontal_edge =
            (self.bottom() == other.top || other.bottom() == self.top) && x_overlap > 0.0;
        vertical_edge || horizontal_edge
    }

    /// Returns the overlap rectangle of two rectangles.
    ///
    /// Returns `None` when the rectangles are disjoint or merely touching
    /// (the computed overlap would have non-positive width or height).
    /// Callers that only need a number can use
    /// [`Rectangle::intersect_area`], which never fails.
    pub fn intersection(self, other: Rectangle) -> Option<Rectangle> {
        let left = self.left.max(other.left);
        let top = self.top.max(other.top);
        let width = self.right().min(other.right()) - left;
        let height = self.bottom().min(other.bottom()) - top;
        if width > 0.0 && height > 0.0 {
            Some(Rectangle::new(left, top, width, height))
        } else {
            None
        }
    }

    /// Returns the area of overlap between two rectangles.
    ///
    /// 0 when the rectangles are disjoint or merely touching.
    pub fn intersect_area(self, other: Rectangle) -> f32 {
        let width = self.right().min(other.right()) - self.left.max(other.left);
        let height = self.bottom().min(other.bottom()) - self.top.max(other.top);
        width.max(0.0) * height.max(0.0)
    }

    /// Returns the minimum enclosing rectangle of two rectangles.
    ///
    /// # Examples
    ///
    /// ```
    /// # use astrolabe_core::geometry::Rectangle;
    /// let a = Rectangle::new(10.0, 10.0, 10.0, 10.0);
    /// let b = Rectangle::new(18.0, 12.0, 10.0, 10.0);
    ///
    /// let merged = a.merge(b);
    /// assert_eq!(merged.left(), 10.0);
    /// assert_eq!(merged.top(), 10.0);
    /// assert_eq!(merged.right(), 28.0);
    /// assert_eq!(merged.bottom(), 22.0);
    /// ```
    pub fn merge(self, other: Rectangle) -> Rectangle {
        let left = self.left.min(other.left);
        let top = self.top.min(other.top);
        Rectangle::new(
            left,
            top,
            self.right().max(other.right()) - left,
            self.bottom().max(other.bottom()) - top,
        )
    }

    /// Returns the single largest axis-aligned rectangle that is contained
    /// in `self` and disjoint from `other`.
    ///
    /// Four candidate remainders are evaluated (left of, below, right of
    /// and above `other`, each clipped to `self`, in that fixed order);
    /// candidates with non-positive area or remaining overlap are
    /// discarded and the largest survivor wins, first-found on ties.
    ///
    /// If the rectangles do not overlap the result is `self` unchanged;
    /// if `other` covers `self` entirely the result is the zero-size
    /// rectangle at `self`'s origin.
    pub fn difference(self, other: Rectangle) -> Rectangle {
        if !self.intersects(other) {
            return self;
        }

        let spans = [
            // left of other
            (self.left, self.top, other.left.min(self.right()), self.bottom()),
            // below other
            (self.left, other.bottom().max(self.top), self.right(), self.bottom()),
            // right of other
            (other.right().max(self.left), self.top, self.right(), self.bottom()),
            // above other
            (self.left, self.top, self.right(), other.top.min(self.bottom())),
        ];

        let mut best: Option<Rectangle> = None;
        let mut best_area = 0.0_f32;
        for (left, top, right, bottom) in spans {
            let width = right - left;
            let height = bottom - top;
            if width <= 0.0 || height <= 0.0 {
                continue;
            }
            let candidate = Rectangle::new(left, top, width, height);
            if candidate.intersects(other) {
                continue;
            }
            if candidate.area() > best_area {
                best_area = candidate.area();
                best = Some(candidate);
            }
        }

        best.unwrap_or_else(|| Rectangle::zero_at(self.top_left()))
    }

    /// Grows (or, for negative inputs, shrinks) the rectangle symmetrically
    /// around its center: each side moves outward by `dx` resp. `dy`.
    ///
    /// If either dimension would go negative the rectangle collapses to a
    /// zero-size point at its former center.
    pub fn expand(self, dx: f32, dy: f32) -> Rectangle {
        let width = self.width + 2.0 * dx;
        let height = self.height + 2.0 * dy;
        if width < 0.0 || height < 0.0 {
            return Rectangle::zero_at(self.center());
        }
        Rectangle::new(self.left - dx, self.top - dy, width, height)
    }
}


#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    fn rectangle_strategy() -> impl Strategy<Value = Rectangle> {
        (
            -1000.0f32..1000.0,
            -1000.0f32..1000.0,
            0.0f32..500.0,
            0.0f32..500.0,
        )
            .prop_map(|(left, top, w, h)| Rectangle::new(left, top, w, h))
    }

    fn offset_strategy() -> impl Strategy<Value = f32> {
        -50.0f32..50.0
    }

    /// Closed containment with a tolerance for the 1-ulp drift that
    /// `left + (right - left)` reconstruction can introduce.
    fn encloses_with_tolerance(outer: Rectangle, inner: Rectangle, eps: f32) -> bool {
        outer.left() - eps <= inner.left()
            && inner.right() <= outer.right() + eps
            && outer.top() - eps <= inner.top()
            && inner.bottom() <= outer.bottom() + eps
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Every rectangle encloses itself and has non-negative area.
    fn check_encloses_reflexive_area_non_negative(r: Rectangle) -> Result<(), TestCaseError> {
        prop_assert!(r.encloses(r));
        prop_assert!(r.area() >= 0.0);
        Ok(())
    }

    /// Interior intersection is symmetric.
    fn check_intersects_is_symmetric(a: Rectangle, b: Rectangle) -> Result<(), TestCaseError> {
        prop_assert_eq!(a.intersects(b), b.intersects(a));
        Ok(())
    }

    /// A pair of rectangles cannot both touch and intersect.
    fn check_touches_excludes_intersects(a: Rectangle, b: Rectangle) -> Result<(), TestCaseError> {
        prop_assert!(!(a.touches(b) && a.intersects(b)));
        Ok(())
    }

    /// The merge of two rectangles encloses both inputs.
    fn check_merge_encloses_both(a: Rectangle, b: Rectangle) -> Result<(), TestCaseError> {
        let merged = a.merge(b);
        prop_assert!(encloses_with_tolerance(merged, a, 0.001));
        prop_assert!(encloses_with_tolerance(merged, b, 0.001));
        Ok(())
    }

    /// The difference stays inside `a` and does not overlap `b`.
    fn check_difference_contained_and_disjoint(
        a: Rectangle,
        b: Rectangle,
    ) -> Result<(), TestCaseError> {
        let remainder = a.difference(b);
        prop_assert!(encloses_with_tolerance(a, remainder, 0.001));
        prop_assert!(
            remainder.intersect_area(b) <= 1e-3,
            "remainder {remainder:?} overlaps {b:?}"
        );
        Ok(())
    }

    /// The intersection, when it exists, is enclosed by both inputs and its
    /// area matches `intersect_area`.
    fn check_intersection_consistent(a: Rectangle, b: Rectangle) -> Result<(), TestCaseError> {
        match a.intersection(b) {
            Some(overlap) => {
                prop_assert!(encloses_with_tolerance(a, overlap, 0.001));
                prop_assert!(encloses_with_tolerance(b, overlap, 0.001));
                prop_assert!(approx_eq!(
                    f32,
                    overlap.area(),
                    a.intersect_area(b),
                    epsilon = 0.01
                ));
            }
            None => {
                prop_assert!(approx_eq!(f32, a.intersect_area(b), 0.0));
            }
        }
        Ok(())
    }

    /// Expanding then shrinking restores the rectangle when no clamp occurred.
    fn check_expand_roundtrip(r: Rectangle, dx: f32, dy: f32) -> Result<(), TestCaseError> {
        let grown = r.expand(dx, dy);
        if grown.width() == 0.0 && grown.height() == 0.0 && !(r.width() == 0.0 && r.height() == 0.0)
        {
            // clamped, round trip not applicable
            return Ok(());
        }
        let roundtrip = grown.expand(-dx, -dy);
        if roundtrip.width() == 0.0 && roundtrip.height() == 0.0 && !r.size().is_zero() {
            return Ok(());
        }
        prop_assert!(approx_eq!(f32, roundtrip.left(), r.left(), epsilon = 0.01));
        prop_assert!(approx_eq!(f32, roundtrip.top(), r.top(), epsilon = 0.01));
        prop_assert!(approx_eq!(f32, roundtrip.width(), r.width(), epsilon = 0.01));
        prop_assert!(approx_eq!(f32, roundtrip.height(), r.height(), epsilon = 0.01));
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn encloses_reflexive_area_non_negative(r in rectangle_strategy()) {
            check_encloses_reflexive_area_non_negative(r)?;
        }

        #[test]
        fn intersects_is_symmetric(a in rectangle_strategy(), b in rectangle_strategy()) {
            check_intersects_is_symmetric(a, b)?;
        }

        #[test]
        fn touches_excludes_intersects(a in rectangle_strategy(), b in rectangle_strategy()) {
            check_touches_excludes_intersects(a, b)?;
        }

        #[test]
        fn merge_encloses_both(a in rectangle_strategy(), b in rectangle_strategy()) {
            check_merge_encloses_both(a, b)?;
        }

        #[test]
        fn difference_contained_and_disjoint(a in rectangle_strategy(), b in rectangle_strategy()) {
            check_difference_contained_and_disjoint(a, b)?;
        }

        #[test]
        fn intersection_consistent(a in rectangle_strategy(), b in rectangle_strategy()) {
            check_intersection_consistent(a, b)?;
        }

        #[test]
        fn expand_roundtrip(r in rectangle_strategy(), dx in offset_strategy(), dy in offset_strategy()) {
            check_expand_roundtrip(r, dx, dy)?;
        }
    }
}
