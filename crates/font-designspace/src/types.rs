//! Axis-region algebra: intervals, discrete stops and region selections.
//!
//! All values here are plain data. Operations never mutate their inputs and
//! never fail; callers are responsible for tracking whether a value lives in
//! user space or design space.

use indexmap::IndexMap;

/// A location in the designspace, keyed by axis name.
///
/// Whether the values are user-space or design-space coordinates depends on
/// where the location came from.
pub type Location = IndexMap<String, f64>;

/// A closed interval on one axis.
///
/// Both ends are inclusive. The ends may be given in either order; every
/// operation sorts them first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub start: f64,
    pub end: f64,
}

impl Range {
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// The interval covering the whole axis.
    pub const fn unbounded() -> Self {
        Self::new(f64::NEG_INFINITY, f64::INFINITY)
    }

    /// Build a range from optional bounds, substituting `-inf`/`+inf` for
    /// missing ends.
    pub fn from_bounds(minimum: Option<f64>, maximum: Option<f64>) -> Self {
        Self::new(
            minimum.unwrap_or(f64::NEG_INFINITY),
            maximum.unwrap_or(f64::INFINITY),
        )
    }

    /// The ends in ascending order.
    pub fn sorted(&self) -> (f64, f64) {
        if self.start <= self.end {
            (self.start, self.end)
        } else {
            (self.end, self.start)
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        let (start, end) = self.sorted();
        start <= value && value <= end
    }

    /// Whether `other` lies entirely within this range.
    pub fn contains_range(&self, other: &Range) -> bool {
        let (start, end) = other.sorted();
        self.contains(start) && self.contains(end)
    }

    /// Whether every stop lies within this range.
    pub fn contains_stops(&self, stops: &Stops) -> bool {
        stops.iter().all(|stop| self.contains(stop))
    }

    /// The overlap of two ranges, or `None` when they are disjoint.
    ///
    /// Ranges touching at a single point intersect in a degenerate range.
    pub fn intersection(&self, other: &Range) -> Option<Range> {
        let (self_start, self_end) = self.sorted();
        let (other_start, other_end) = other.sorted();
        if self_end < other_start || self_start > other_end {
            None
        } else {
            Some(Range::new(self_start.max(other_start), self_end.min(other_end)))
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }
}

/// A set of discrete permissible values on one axis.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Stops {
    stops: Vec<f64>,
}

impl Stops {
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        let mut stops: Vec<f64> = Vec::new();
        for value in values {
            if !stops.contains(&value) {
                stops.push(value);
            }
        }
        Self { stops }
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.stops.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Exact membership.
    pub fn contains(&self, value: f64) -> bool {
        self.stops.contains(&value)
    }

    /// A range is only contained when it collapses to a single stop.
    pub fn contains_range(&self, range: &Range) -> bool {
        range.is_degenerate() && self.contains(range.start)
    }

    pub fn contains_stops(&self, other: &Stops) -> bool {
        other.iter().all(|stop| self.contains(stop))
    }
}

/// The permitted values of one axis inside a [`Region`].
#[derive(Debug, Clone, PartialEq)]
pub enum RegionValue {
    Range(Range),
    Stops(Stops),
}

impl RegionValue {
    pub fn contains(&self, value: f64) -> bool {
        match self {
            RegionValue::Range(range) => range.contains(value),
            RegionValue::Stops(stops) => stops.contains(value),
        }
    }
}

/// A region of the designspace: per-axis ranges or stops.
pub type Region = IndexMap<String, RegionValue>;

/// One axis of a [`RegionSelection`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Selection {
    /// The axis stays a real axis, restricted to this design-space range.
    Range(Range),
    /// The axis is pinned to a single value and disappears from the output.
    Point(f64),
}

impl Selection {
    pub fn contains(&self, value: f64) -> bool {
        match self {
            Selection::Range(range) => range.contains(value),
            Selection::Point(point) => *point == value,
        }
    }
}

/// What a virtual font keeps of the designspace, keyed by axis name.
pub type RegionSelection = IndexMap<String, Selection>;

/// Conditions of one rule conditionset, keyed by axis name.
///
/// Axes without an entry are unconstrained.
pub type ConditionSet = IndexMap<String, Range>;

fn same_axes<V, W>(a: &IndexMap<String, V>, b: &IndexMap<String, W>) -> bool {
    a.len() == b.len() && a.keys().all(|name| b.contains_key(name))
}

/// Whether `location` lies inside `region`.
///
/// The location must name exactly the axes of the region.
pub fn in_region(location: &Location, region: &Region) -> bool {
    same_axes(location, region)
        && location
            .iter()
            .all(|(name, value)| region[name].contains(*value))
}

/// Whether `location` survives into the virtual font described by `selection`.
///
/// Axis sets must match exactly. Pinned axes require equality, kept axes
/// require containment.
pub fn location_in_selection(location: &Location, selection: &RegionSelection) -> bool {
    same_axes(location, selection)
        && location
            .iter()
            .all(|(name, value)| selection[name].contains(*value))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(values: &[(&str, f64)]) -> Location {
        values
            .iter()
            .map(|(name, value)| (name.to_string(), *value))
            .collect()
    }

    #[test]
    fn range_contains_value_in_either_order() {
        assert!(Range::new(100.0, 900.0).contains(400.0));
        assert!(Range::new(900.0, 100.0).contains(400.0));
        assert!(Range::new(100.0, 900.0).contains(100.0));
        assert!(Range::new(100.0, 900.0).contains(900.0));
        assert!(!Range::new(100.0, 900.0).contains(901.0));
    }

    #[test]
    fn range_contains_itself() {
        for range in [
            Range::new(0.0, 1.0),
            Range::new(5.0, -5.0),
            Range::new(3.0, 3.0),
        ] {
            assert!(range.contains_range(&range));
        }
        assert!(Range::unbounded().contains_range(&Range::unbounded()));
    }

    #[test]
    fn range_contains_nested_range() {
        let outer = Range::new(100.0, 900.0);
        assert!(outer.contains_range(&Range::new(700.0, 400.0)));
        assert!(!outer.contains_range(&Range::new(50.0, 400.0)));
        assert!(Range::unbounded().contains_range(&outer));
        assert!(!outer.contains_range(&Range::unbounded()));
    }

    #[test]
    fn range_contains_stops() {
        let range = Range::new(0.0, 1.0);
        assert!(range.contains_stops(&Stops::new([0.0, 1.0])));
        assert!(!range.contains_stops(&Stops::new([0.0, 2.0])));
        assert!(range.contains_stops(&Stops::default()));
    }

    #[test]
    fn intersection_is_symmetric_and_contained() {
        let pairs = [
            (Range::new(0.0, 10.0), Range::new(5.0, 15.0)),
            (Range::new(10.0, 0.0), Range::new(2.0, 3.0)),
            (Range::new(0.0, 5.0), Range::new(5.0, 8.0)),
            (Range::unbounded(), Range::new(-1.0, 1.0)),
        ];
        for (a, b) in pairs {
            let ab = a.intersection(&b).unwrap();
            assert_eq!(Some(ab), b.intersection(&a));
            assert!(a.contains_range(&ab));
            assert!(b.contains_range(&ab));
            assert!(ab.start <= ab.end);
        }
    }

    #[test]
    fn disjoint_ranges_do_not_intersect() {
        let a = Range::new(0.0, 1.0);
        let b = Range::new(2.0, 3.0);
        assert_eq!(a.intersection(&b), None);
        assert_eq!(b.intersection(&a), None);
    }

    #[test]
    fn touching_ranges_intersect_in_a_point() {
        let point = Range::new(0.0, 5.0)
            .intersection(&Range::new(5.0, 8.0))
            .unwrap();
        assert!(point.is_degenerate());
        assert_eq!(point.start, 5.0);
    }

    #[test]
    fn stops_membership() {
        let stops = Stops::new([400.0, 700.0, 900.0, 700.0]);
        assert_eq!(stops.len(), 3);
        assert!(stops.contains(700.0));
        assert!(!stops.contains(500.0));
        assert!(stops.contains_range(&Range::new(900.0, 900.0)));
        assert!(!stops.contains_range(&Range::new(400.0, 700.0)));
        assert!(stops.contains_stops(&Stops::new([400.0, 900.0])));
        assert!(!stops.contains_stops(&Stops::new([400.0, 500.0])));
    }

    #[test]
    fn region_requires_same_axes() {
        let mut region = Region::new();
        region.insert(
            "Weight".into(),
            RegionValue::Range(Range::new(100.0, 900.0)),
        );
        region.insert(
            "Italic".into(),
            RegionValue::Stops(Stops::new([0.0, 1.0])),
        );

        let upright = location(&[("Italic", 1.0), ("Weight", 300.0)]);
        assert!(in_region(&upright, &region));
        let between = location(&[("Weight", 300.0), ("Italic", 0.5)]);
        assert!(!in_region(&between, &region));
        assert!(!in_region(&location(&[("Weight", 300.0)]), &region));
    }

    #[test]
    fn selection_membership() {
        let mut selection = RegionSelection::new();
        selection.insert(
            "Weight".into(),
            Selection::Range(Range::new(84.0, 133.0)),
        );
        selection.insert("Width".into(), Selection::Point(100.0));

        let inside = location(&[("Weight", 100.0), ("Width", 100.0)]);
        assert!(location_in_selection(&inside, &selection));
        let off_point = location(&[("Weight", 100.0), ("Width", 75.0)]);
        assert!(!location_in_selection(&off_point, &selection));
        let off_range = location(&[("Weight", 200.0), ("Width", 100.0)]);
        assert!(!location_in_selection(&off_range, &selection));
        assert!(!location_in_selection(
            &location(&[("Weight", 100.0)]),
            &selection
        ));
        assert!(!location_in_selection(
            &location(&[("Weight", 100.0), ("Width", 100.0), ("Italic", 0.0)]),
            &selection
        ));
    }
}
