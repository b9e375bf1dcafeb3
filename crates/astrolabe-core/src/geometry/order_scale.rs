//! Non-linear mapping between integer order keys and an axis position.
//!
//! Diagram elements carry integer "order" keys that express their relative
//! sequencing. [`OrderScale`] distributes the known keys fairly over a
//! continuous axis interval: each known key owns one equally wide slot and
//! maps to that slot's center, regardless of how unevenly the key values
//! themselves are spread. Unknown keys interpolate between their known
//! neighbors, and keys beyond the known range extrapolate one slot width
//! per integer step.

use log::trace;

/// Sentinel returned by [`OrderScale::order_for_interval`] when the query
/// range lies entirely below the lowest known mapped location: far below
/// all known orders, with headroom so callers can still step downward.
pub const ORDER_BELOW_ALL: i32 = i32::MIN / 2;

/// A non-linear scale over an ordered, duplicate-free set of order keys.
///
/// # Examples
///
/// ```
/// # use astrolabe_core::geometry::OrderScale;
/// let mut scale = OrderScale::new(0.0, 100.0);
/// scale.add_order(10);
/// scale.add_order(20);
///
/// // two keys split the axis into two slots centered at 25 and 75
/// assert_eq!(scale.location_of(10), 25.0);
/// assert_eq!(scale.location_of(20), 75.0);
/// // an element dropped around 75 belongs at order 20
/// assert_eq!(scale.order_for_interval(70.0, 80.0), 20);
/// ```
#[derive(Debug, Clone)]
pub struct OrderScale {
    low: f32,
    high: f32,
    keys: Vec<i32>,
}

impl OrderScale {
    /// Creates a scale over the continuous interval `[low, high]`.
    ///
    /// The interval fixes where slot centers land and provides the unit
    /// step used to extrapolate beyond the known keys.
    pub fn new(low: f32, high: f32) -> Self {
        debug_assert!(low.is_finite() && high.is_finite());
        debug_assert!(low <= high, "scale interval must not be inverted");
        Self {
            low,
            high,
            keys: Vec::new(),
        }
    }

    /// Inserts an order key, keeping the key sequence strictly increasing.
    ///
    /// Inserting a key that is already known is a no-op.
    pub fn add_order(&mut self, key: i32) {
        if let Err(index) = self.keys.binary_search(&key) {
            trace!(key, index; "order key inserted");
            self.keys.insert(index, key);
        }
    }

    /// Returns the known keys in increasing order
    pub fn known_orders(&self) -> &[i32] {
        &self.keys
    }

    /// Returns true when the key has been added to the scale
    pub fn is_known(&self, key: i32) -> bool {
        self.keys.binary_search(&key).is_ok()
    }

    /// Width of one key slot; the whole interval when no keys are known.
    fn slot_width(&self) -> f32 {
        let width = self.high - self.low;
        if self.keys.is_empty() {
            width
        } else {
            width / self.keys.len() as f32
        }
    }

    /// Center of the slot at the given key index
    fn slot_center(&self, index: usize) -> f32 {
        self.low + (index as f32 + 0.5) * self.slot_width()
    }

    /// Maps an order key to its axis location.
    ///
    /// Known keys map to their slot center. Unknown keys between two known
    /// neighbors interpolate linearly by integer key distance; keys beyond
    /// the first/last known key extrapolate at one slot width per integer
    /// step. An empty scale maps every key to the interval midpoint.
    pub fn location_of(&self, key: i32) -> f32 {
        let count = self.keys.len();
        if count == 0 {
            return (self.low + self.high) / 2.0;
        }
        match self.keys.binary_search(&key) {
            Ok(index) => self.slot_center(index),
            Err(0) => {
                let steps = (self.keys[0] as i64 - key as i64) as f32;
                self.slot_center(0) - steps * self.slot_width()
            }
            Err(index) if index == count => {
                let steps = (key as i64 - self.keys[count - 1] as i64) as f32;
                self.slot_center(count - 1) + steps * self.slot_width()
            }
            Err(index) => {
                let before = self.keys[index - 1];
                let after = self.keys[index];
                let fraction =
                    (key as i64 - before as i64) as f32 / (after as i64 - before as i64) as f32;
                let start = self.slot_center(index - 1);
                start + fraction * (self.slot_center(index) - start)
            }
        }
    }

    /// Inverse query: the order key appropriate for inserting an element
    /// whose occupied location spans `[low_bound, high_bound]`.
    ///
    /// Returns [`ORDER_BELOW_ALL`] when the whole query range lies below
    /// the lowest known mapped location, and 0 on an empty scale. All
    /// other queries map the range midpoint back through the scale,
    /// rounding to the nearest integer order.
    pub fn order_for_interval(&self, low_bound: f32, high_bound: f32) -> i32 {
        debug_assert!(low_bound <= high_bound, "query interval must not be inverted");
        let count = self.keys.len();
        if count == 0 {
            return 0;
        }
        if high_bound < self.slot_center(0) {
            return ORDER_BELOW_ALL;
        }

        let mid = f64::from(low_bound).midpoint(f64::from(high_bound));
        let slot_width = f64::from(self.slot_width());
        let first_center = f64::from(self.slot_center(0));
        let last_center = f64::from(self.slot_center(count - 1));

        if mid <= first_center {
            let steps = ((first_center - mid) / slot_width).round() as i64;
            return saturating_order(self.keys[0], -steps);
        }
        if mid >= last_center {
            let steps = ((mid - last_center) / slot_width).round() as i64;
            return saturating_order(self.keys[count - 1], steps);
        }

        // interior: slots are equally spaced, so the pair of neighboring
        // centers can be found arithmetically
        let t = (mid - f64::from(self.low)) / slot_width - 0.5;
        let index = (t.floor() as usize).min(count - 2);
        let fraction = t - index as f64;
        let before = self.keys[index];
        let after = self.keys[index + 1];
        let delta = (fraction * (after as i64 - before as i64) as f64).round() as i64;
        saturating_order(before, delta)
    }
}

fn saturating_order(base: i32, delta: i64) -> i32 {
    (base as i64 + delta).clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn four_key_scale() -> OrderScale {
        // four keys over [0, 100]: slot width 25, centers 12.5/37.5/62.5/87.5
        let mut scale = OrderScale::new(0.0, 100.0);
        for key in [10, 20, 30, 40] {
            scale.add_order(key);
        }
        scale
    }

    #[test]
    fn test_add_order_keeps_sequence_sorted_and_unique() {
        let mut scale = OrderScale::new(0.0, 10.0);
        scale.add_order(5);
        scale.add_order(3);
        scale.add_order(5);
        scale.add_order(-1);

        assert_eq!(scale.known_orders(), &[-1, 3, 5]);
        assert!(scale.is_known(3));
        assert!(!scale.is_known(4));
    }

    #[test]
    fn test_location_of_known_keys_is_slot_center() {
        let scale = four_key_scale();
        assert_approx_eq!(f32, scale.location_of(10), 12.5);
        assert_approx_eq!(f32, scale.location_of(20), 37.5);
        assert_approx_eq!(f32, scale.location_of(30), 62.5);
        assert_approx_eq!(f32, scale.location_of(40), 87.5);
    }

    #[test]
    fn test_location_of_interpolates_between_neighbors() {
        let scale = four_key_scale();
        // halfway between keys 10 and 20
        assert_approx_eq!(f32, scale.location_of(15), 25.0);
        // 30% of the way from 30 towards 40
        assert_approx_eq!(f32, scale.location_of(33), 62.5 + 0.3 * 25.0);
    }

    #[test]
    fn test_location_of_extrapolates_beyond_known_range() {
        let scale = four_key_scale();
        assert_approx_eq!(f32, scale.location_of(8), 12.5 - 2.0 * 25.0);
        assert_approx_eq!(f32, scale.location_of(42), 87.5 + 2.0 * 25.0);
    }

    #[test]
    fn test_location_of_on_empty_scale_is_midpoint() {
        let scale = OrderScale::new(10.0, 30.0);
        assert_approx_eq!(f32, scale.location_of(123), 20.0);
        assert_approx_eq!(f32, scale.location_of(-7), 20.0);
    }

    #[test]
    fn test_order_for_interval_hits_known_slots() {
        let scale = four_key_scale();
        assert_eq!(scale.order_for_interval(30.0, 45.0), 20);
        assert_eq!(scale.order_for_interval(50.0, 75.0), 30);
        assert_eq!(scale.order_for_interval(12.5, 12.5), 10);
    }

    #[test]
    fn test_order_for_interval_between_slots() {
        let scale = four_key_scale();
        // midpoint 50 sits halfway between the slots of keys 20 and 30
        assert_eq!(scale.order_for_interval(40.0, 60.0), 25);
    }

    #[test]
    fn test_order_for_interval_extrapolates_above() {
        let scale = four_key_scale();
        // midpoint 100 is half a slot above the last center, rounded up
        assert_eq!(scale.order_for_interval(90.0, 110.0), 41);
        assert_eq!(scale.order_for_interval(112.5, 112.5), 41);
    }

    #[test]
    fn test_order_for_interval_below_all_sentinel() {
        let scale = four_key_scale();
        assert_eq!(scale.order_for_interval(0.0, 5.0), ORDER_BELOW_ALL);
        // the sentinel fires only when the whole range is below the first slot
        assert_ne!(scale.order_for_interval(0.0, 13.0), ORDER_BELOW_ALL);
    }

    #[test]
    fn test_order_for_interval_on_empty_scale() {
        let scale = OrderScale::new(0.0, 100.0);
        assert_eq!(scale.order_for_interval(40.0, 60.0), 0);
    }
}
