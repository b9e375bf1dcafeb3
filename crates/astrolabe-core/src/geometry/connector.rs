//! Orthogonal connector geometry.
//!
//! A [`Connector`] is the routed line between two classifier anchors. It
//! is always composed of three construction-ordered, axis-aligned
//! segments: two outer segments perpendicular to the main line and a
//! middle segment running along it (a Z or U shape). Any of the three may
//! be degenerate, which yields the straight and single-point special
//! cases.
//!
//! Segment orientation is a property of the construction, not of the
//! coordinates: a zero-length outer segment of a vertical-main connector
//! is still horizontal. The pairwise intersection counting below relies
//! on this classification.

use super::{Point, Rectangle};

/// Which axis the middle (main) segment of a connector runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// The middle segment runs along a vertical line `x = main_line`.
    VerticalMain,
    /// The middle segment runs along a horizontal line `y = main_line`.
    HorizontalMain,
}

/// The axis a single segment is aligned with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// One axis-aligned piece of a connector path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    start: Point,
    end: Point,
    axis: Axis,
}

impl Segment {
    fn new(start: Point, end: Point, axis: Axis) -> Self {
        Self { start, end, axis }
    }

    /// Returns the start point of the segment
    pub fn start(self) -> Point {
        self.start
    }

    /// Returns the end point of the segment
    pub fn end(self) -> Point {
        self.end
    }

    /// Returns the axis this segment is aligned with
    pub fn axis(self) -> Axis {
        self.axis
    }

    /// Returns the length of the segment, 0 for degenerate segments
    pub fn length(self) -> f32 {
        self.end.sub_point(self.start).hypot()
    }

    /// Distance from a point to the nearest point ON the segment (not the
    /// infinite line through it).
    pub fn distance_to_point(self, p: Point) -> f32 {
        let d = self.end.sub_point(self.start);
        let len_sq = d.x() * d.x() + d.y() * d.y();
        if len_sq == 0.0 {
            return p.distance(self.start);
        }
        let t = ((p.x() - self.start.x()) * d.x() + (p.y() - self.start.y()) * d.y()) / len_sq;
        let t = t.clamp(0.0, 1.0);
        let nearest = Point::new(self.start.x() + t * d.x(), self.start.y() + t * d.y());
        p.distance(nearest)
    }

    /// Point at the given fraction (0..=1) along the segment
    fn point_at(self, t: f32) -> Point {
        let d = self.end.sub_point(self.start);
        Point::new(self.start.x() + t * d.x(), self.start.y() + t * d.y())
    }

    fn min_x(self) -> f32 {
        self.start.x().min(self.end.x())
    }

    fn max_x(self) -> f32 {
        self.start.x().max(self.end.x())
    }

    fn min_y(self) -> f32 {
        self.start.y().min(self.end.y())
    }

    fn max_y(self) -> f32 {
        self.start.y().max(self.end.y())
    }
}

/// An orthogonally routed line between two rectangle anchors.
///
/// # Examples
///
/// ```
/// # use astrolabe_core::geometry::{Connector, Point};
/// let connector = Connector::vertical(Point::new(10.0, 10.0), Point::new(30.0, 30.0), 20.0);
/// assert_eq!(connector.length(), 40.0);
/// assert_eq!(connector.waypoint(20.0), Point::new(20.0, 20.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connector {
    source: Point,
    destination: Point,
    main_line: f32,
    orientation: Orientation,
}

impl Connector {
    /// Creates a connector whose middle segment runs along the vertical
    /// line `x = main_line_x`.
    pub fn vertical(source: Point, destination: Point, main_line_x: f32) -> Self {
        debug_assert!(source.x().is_finite() && source.y().is_finite());
        debug_assert!(destination.x().is_finite() && destination.y().is_finite());
        debug_assert!(main_line_x.is_finite());
        Self {
            source,
            destination,
            main_line: main_line_x,
            orientation: Orientation::VerticalMain,
        }
    }

    /// Creates a connector whose middle segment runs along the horizontal
    /// line `y = main_line_y`.
    pub fn horizontal(source: Point, destination: Point, main_line_y: f32) -> Self {
        debug_assert!(source.x().is_finite() && source.y().is_finite());
        debug_assert!(destination.x().is_finite() && destination.y().is_finite());
        debug_assert!(main_line_y.is_finite());
        Self {
            source,
            destination,
            main_line: main_line_y,
            orientation: Orientation::HorizontalMain,
        }
    }

    /// Returns the source end of the connector
    pub fn source(self) -> Point {
        self.source
    }

    /// Returns the destination end of the connector
    pub fn destination(self) -> Point {
        self.destination
    }

    /// Returns the fixed axis position of the middle segment
    pub fn main_line(self) -> f32 {
        self.main_line
    }

    /// Returns the orientation of the middle segment
    pub fn orientation(self) -> Orientation {
        self.orientation
    }

    /// Returns the three construction-ordered segments of the path.
    ///
    /// Degenerate segments are included so that renderers and hit tests
    /// see a uniform shape.
    pub fn segments(self) -> [Segment; 3] {
        match self.orientation {
            Orientation::VerticalMain => {
                let bend_in = Point::new(self.main_line, self.source.y());
                let bend_out = Point::new(self.main_line, self.destination.y());
                [
                    Segment::new(self.source, bend_in, Axis::Horizontal),
                    Segment::new(bend_in, bend_out, Axis::Vertical),
                    Segment::new(bend_out, self.destination, Axis::Horizontal),
                ]
            }
            Orientation::HorizontalMain => {
                let bend_in = Point::new(self.source.x(), self.main_line);
                let bend_out = Point::new(self.destination.x(), self.main_line);
                [
                    Segment::new(self.source, bend_in, Axis::Vertical),
                    Segment::new(bend_in, bend_out, Axis::Horizontal),
                    Segment::new(bend_out, self.destination, Axis::Vertical),
                ]
            }
        }
    }

    /// Total path length: the sum of the three segment lengths.
    pub fn length(self) -> f32 {
        self.segments().iter().map(|s| s.length()).sum()
    }

    /// Tests whether the point lies within `max_distance` of the nearest
    /// segment (point-to-segment distance, not point-to-line).
    pub fn is_close(self, p: Point, max_distance: f32) -> bool {
        self.segments()
            .iter()
            .any(|s| s.distance_to_point(p) <= max_distance)
    }

    /// Minimal axis-aligned rectangle enclosing all segments.
    ///
    /// A straight connector yields a zero-area rectangle (the bounding
    /// box degenerates to a line).
    pub fn bounding_rectangle(self) -> Rectangle {
        let segments = self.segments();
        let left = segments.iter().map(|s| s.min_x()).fold(f32::MAX, f32::min);
        let right = segments.iter().map(|s| s.max_x()).fold(f32::MIN, f32::max);
        let top = segments.iter().map(|s| s.min_y()).fold(f32::MAX, f32::min);
        let bottom = segments.iter().map(|s| s.max_y()).fold(f32::MIN, f32::max);
        Rectangle::new(left, top, right - left, bottom - top)
    }

    /// Tests whether any segment crosses or touches the rectangle's
    /// boundary or lies inside it (closed test).
    pub fn intersects_rectangle(self, rect: Rectangle) -> bool {
        // for an axis-aligned segment, closed span overlap on both axes is
        // exactly segment-rectangle intersection
        self.segments().iter().any(|s| {
            s.max_x() >= rect.left()
                && s.min_x() <= rect.right()
                && s.max_y() >= rect.top()
                && s.min_y() <= rect.bottom()
        })
    }

    /// Counts intersections between every segment pair of the two
    /// connectors (a 3×3 pairwise sweep).
    ///
    /// Coincident parallel overlaps, shared endpoints and degenerate
    /// point-on-point contacts each count one per pair. Two consequences
    /// of this pairwise counting are load-bearing for downstream
    /// tie-breaking and are kept on purpose: a Z-shaped connector counted
    /// against an exact copy of itself reports 7, and two single-point
    /// connectors at the same location report 9.
    pub fn count_intersections(self, other: Connector) -> u32 {
        let mut count = 0;
        for a in self.segments() {
            for b in other.segments() {
                if segments_intersect(a, b) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Returns the point at the given absolute path-length distance from
    /// the source end.
    ///
    /// Distances at or below 0 clamp to the source end; distances at or
    /// above [`Connector::length`] clamp to the destination end. A
    /// zero-length connector returns its (single) end point.
    pub fn waypoint(self, distance: f32) -> Point {
        if distance <= 0.0 {
            return self.source;
        }
        let mut remaining = distance;
        for segment in self.segments() {
            let length = segment.length();
            if length > 0.0 && remaining <= length {
                return segment.point_at(remaining / length);
            }
            remaining -= length;
        }
        self.destination
    }
}

/// Closed intersection test for two axis-aligned segments, honoring the
/// construction axis of degenerate segments.
fn segments_intersect(a: Segment, b: Segment) -> bool {
    match (a.axis(), b.axis()) {
        (Axis::Horizontal, Axis::Horizontal) => {
            a.start().y() == b.start().y() && a.max_x() >= b.min_x() && b.max_x() >= a.min_x()
        }
        (Axis::Vertical, Axis::Vertical) => {
            a.start().x() == b.start().x() && a.max_y() >= b.min_y() && b.max_y() >= a.min_y()
        }
        (Axis::Horizontal, Axis::Vertical) => {
            a.min_x() <= b.start().x()
                && b.start().x() <= a.max_x()
                && b.min_y() <= a.start().y()
                && a.start().y() <= b.max_y()
        }
        (Axis::Vertical, Axis::Horizontal) => segments_intersect(b, a),
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn z_connector() -> Connector {
        Connector::vertical(Point::new(10.0, 10.0), Point::new(30.0, 30.0), 20.0)
    }

    #[test]
    fn test_segments_of_vertical_main() {
        let [first, middle, last] = z_connector().segments();
        assert_eq!(first.axis(), Axis::Horizontal);
        assert_eq!(middle.axis(), Axis::Vertical);
        assert_eq!(last.axis(), Axis::Horizontal);
        assert_eq!(first.end(), Point::new(20.0, 10.0));
        assert_eq!(middle.end(), Point::new(20.0, 30.0));
        assert_eq!(last.end(), Point::new(30.0, 30.0));
    }

    #[test]
    fn test_length_of_z_path() {
        assert_approx_eq!(f32, z_connector().length(), 40.0);
    }

    #[test]
    fn test_length_of_straight_connector_is_endpoint_distance() {
        let source = Point::new(10.0, 10.0);
        let destination = Point::new(30.0, 10.0);
        let straight = Connector::vertical(source, destination, 20.0);
        assert_approx_eq!(f32, straight.length(), source.distance(destination));
    }

    #[test]
    fn test_length_of_point_connector_is_zero() {
        let p = Point::new(5.0, 5.0);
        let point = Connector::horizontal(p, p, 5.0);
        assert_approx_eq!(f32, point.length(), 0.0);
    }

    #[test]
    fn test_is_close_uses_segment_distance() {
        let connector = z_connector();
        // (21, 9) is sqrt(2) away from the first bend at (20, 10)
        assert!(connector.is_close(Point::new(21.0, 9.0), 1.5));
        assert!(!connector.is_close(Point::new(21.0, 9.0), 0.5));
    }

    #[test]
    fn test_is_close_on_the_path() {
        let connector = z_connector();
        assert!(connector.is_close(Point::new(15.0, 10.0), 0.0));
        assert!(connector.is_close(Point::new(20.0, 25.0), 0.0));
    }

    #[test]
    fn test_bounding_rectangle() {
        let bounds = z_connector().bounding_rectangle();
        assert_eq!(bounds, Rectangle::new(10.0, 10.0, 20.0, 20.0));
    }

    #[test]
    fn test_bounding_rectangle_of_straight_connector_is_degenerate() {
        let straight = Connector::vertical(Point::new(10.0, 10.0), Point::new(30.0, 10.0), 20.0);
        let bounds = straight.bounding_rectangle();
        assert_approx_eq!(f32, bounds.area(), 0.0);
        assert_eq!(bounds.width(), 20.0);
    }

    #[test]
    fn test_intersects_rectangle() {
        let connector = z_connector();
        // the middle segment runs through this one
        assert!(connector.intersects_rectangle(Rectangle::new(15.0, 15.0, 10.0, 10.0)));
        // touching the first segment's line at its corner
        assert!(connector.intersects_rectangle(Rectangle::new(0.0, 0.0, 10.0, 10.0)));
        // fully off to the side
        assert!(!connector.intersects_rectangle(Rectangle::new(40.0, 0.0, 5.0, 5.0)));
    }

    #[test]
    fn test_count_intersections_single_crossing() {
        let straight = Connector::vertical(Point::new(0.0, 0.0), Point::new(40.0, 0.0), 20.0);
        let crossing =
            Connector::horizontal(Point::new(10.0, -10.0), Point::new(30.0, 10.0), 5.0);
        assert_eq!(straight.count_intersections(crossing), 1);
        assert_eq!(crossing.count_intersections(straight), 1);
    }

    #[test]
    fn test_count_intersections_disjoint() {
        let a = Connector::vertical(Point::new(0.0, 0.0), Point::new(10.0, 10.0), 5.0);
        let b = Connector::vertical(Point::new(100.0, 100.0), Point::new(110.0, 110.0), 105.0);
        assert_eq!(a.count_intersections(b), 0);
    }

    #[test]
    fn test_count_intersections_self_copy_is_seven() {
        let connector = z_connector();
        let copy = connector;
        assert_eq!(connector.count_intersections(copy), 7);
    }

    #[test]
    fn test_count_intersections_two_empty_is_nine() {
        let p = Point::new(5.0, 5.0);
        let a = Connector::vertical(p, p, 5.0);
        let b = Connector::vertical(p, p, 5.0);
        assert_eq!(a.count_intersections(b), 9);
    }

    #[test]
    fn test_count_intersections_empty_at_distinct_points() {
        let a = Connector::vertical(Point::new(5.0, 5.0), Point::new(5.0, 5.0), 5.0);
        let b = Connector::vertical(Point::new(9.0, 9.0), Point::new(9.0, 9.0), 9.0);
        assert_eq!(a.count_intersections(b), 0);
    }

    #[test]
    fn test_waypoint_traverses_segments_in_order() {
        let connector = z_connector();
        assert_eq!(connector.waypoint(0.0), Point::new(10.0, 10.0));
        assert_eq!(connector.waypoint(5.0), Point::new(15.0, 10.0));
        assert_eq!(connector.waypoint(20.0), Point::new(20.0, 20.0));
        assert_eq!(connector.waypoint(35.0), Point::new(25.0, 30.0));
        assert_eq!(connector.waypoint(40.0), Point::new(30.0, 30.0));
    }

    #[test]
    fn test_waypoint_clamps_to_ends() {
        let connector = z_connector();
        assert_eq!(connector.waypoint(-3.0), connector.source());
        assert_eq!(connector.waypoint(1000.0), connector.destination());
    }

    #[test]
    fn test_waypoint_of_zero_length_connector() {
        let p = Point::new(7.0, 8.0);
        let point = Connector::horizontal(p, p, 8.0);
        assert_eq!(point.waypoint(0.0), p);
        assert_eq!(point.waypoint(10.0), p);
    }
}
