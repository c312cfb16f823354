use crate::bounds::{BoundsKey, Endpoint, EndpointKind};
use crate::intervals::Interval;
use itertools::Itertools;
use log::debug;
use std::collections::HashSet;
use std::ops::Index;

/// A set union of intervals, reduced to a sorted sequence of disjoint
/// members.
///
/// The union is built once from an arbitrary collection of possibly
/// overlapping, possibly unordered intervals and is never mutated
/// incrementally afterwards; canonicalizing a different collection means
/// building a new union.
///
/// Overlap is decided on the closed form of the sources, so the openness of
/// the inputs is not carried into the result: every member comes out with
/// default openness (closed finite bounds, open infinite ones).
///
/// ```
/// use real_intervals::{Interval, IntervalUnion};
///
/// let u = IntervalUnion::new([
///     Interval::new(0.0, 3.0),
///     Interval::new(1.0, 2.0),
///     Interval::new(2.0, 4.0),
/// ]);
/// assert_eq!(u.intervals(), &[Interval::new(0.0, 4.0)]);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IntervalUnion {
    intervals: Vec<Interval>,
}

impl IntervalUnion {
    /// Reduce a collection of intervals to its disjoint union.
    ///
    /// Every source is taken in its closed form and duplicates (by bounds
    /// alone) are dropped.  The boundary markers of the survivors are then
    /// swept in ascending order: an infimum marker starts a run when none
    /// is open, and a supremum marker ends the run when no source covers
    /// values beyond it.  At a shared value, infimum markers are processed
    /// before supremum markers, so closed intervals that merely touch are
    /// merged.
    pub fn new<I>(intervals: I) -> Self
    where
        I: IntoIterator<Item = Interval>,
    {
        let mut seen = HashSet::new();
        let mut members: Vec<Interval> = Vec::new();
        for interval in intervals {
            let closed = interval.as_closed();
            // A closed form stays empty only when both bounds are the same
            // infinity; it covers nothing.
            if closed.is_empty() {
                continue;
            }
            if seen.insert(BoundsKey::new(closed.inf(), closed.sup())) {
                members.push(closed);
            }
        }

        let mut endpoints: Vec<Endpoint> =
            members.iter().flat_map(Interval::endpoints).collect();
        endpoints
            .sort_by(|a, b| a.value.total_cmp(&b.value).then(a.kind.cmp(&b.kind)));
        endpoints.dedup();

        // TODO the scan over every member at each supremum marker makes
        // this O(n^2); an interval tree would bring it down to
        // O(n log n).
        let mut reduced = Vec::new();
        let mut start: Option<f64> = None;
        for endpoint in &endpoints {
            match endpoint.kind {
                EndpointKind::Infimum => {
                    if start.is_none() {
                        start = Some(endpoint.value);
                    }
                }
                EndpointKind::Supremum => {
                    let continues = members.iter().any(|m| {
                        m.inf() <= endpoint.value && endpoint.value < m.sup()
                    });
                    if !continues {
                        if let Some(inf) = start.take() {
                            reduced.push(Interval::new(inf, endpoint.value));
                        }
                    }
                }
            }
        }

        debug!(
            "reduced {} source interval(s) to {} disjoint member(s)",
            members.len(),
            reduced.len()
        );
        Self { intervals: reduced }
    }

    /// The disjoint members, sorted by ascending infimum.
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    pub(crate) fn intervals_mut(&mut self) -> &mut [Interval] {
        &mut self.intervals
    }

    /// Number of disjoint members.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    /// True if the union has no members.
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Interval> {
        self.intervals.iter()
    }
}

impl FromIterator<Interval> for IntervalUnion {
    fn from_iter<I: IntoIterator<Item = Interval>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl From<Interval> for IntervalUnion {
    fn from(interval: Interval) -> Self {
        Self::new([interval])
    }
}

impl Index<usize> for IntervalUnion {
    type Output = Interval;

    fn index(&self, index: usize) -> &Interval {
        &self.intervals[index]
    }
}

impl IntoIterator for IntervalUnion {
    type Item = Interval;
    type IntoIter = std::vec::IntoIter<Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.into_iter()
    }
}

impl<'a> IntoIterator for &'a IntervalUnion {
    type Item = &'a Interval;
    type IntoIter = std::slice::Iter<'a, Interval>;

    fn into_iter(self) -> Self::IntoIter {
        self.intervals.iter()
    }
}

impl std::fmt::Display for IntervalUnion {
    /// Members joined by `" ∪ "` in ascending order; an empty union
    /// renders as the empty string.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.intervals.iter().format(" ∪ "))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::bounds::Openness;

    fn init_logs() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn test_overlapping_pair() {
        init_logs();
        let u = IntervalUnion::new([
            Interval::new(-1.0, 2.0),
            Interval::new(1.0, 2.0),
        ]);
        assert_eq!(u.intervals(), &[Interval::new(-1.0, 2.0)]);
    }

    #[test]
    fn test_disjoint_pair() {
        init_logs();
        let u = IntervalUnion::new([
            Interval::new(2.0, 3.0),
            Interval::new(0.0, 1.0),
        ]);
        assert_eq!(
            u.intervals(),
            &[Interval::new(0.0, 1.0), Interval::new(2.0, 3.0)]
        );
        assert_eq!(u.len(), 2);
        assert_eq!(u[0], Interval::new(0.0, 1.0));
    }

    #[test]
    fn test_overlapping_triple() {
        init_logs();
        let u = IntervalUnion::new([
            Interval::new(0.0, 3.0),
            Interval::new(1.0, 2.0),
            Interval::new(2.0, 4.0),
        ]);
        assert_eq!(u.intervals(), &[Interval::new(0.0, 4.0)]);
    }

    #[test]
    fn test_adjacent_closed_intervals_merge() {
        init_logs();
        // A shared boundary value belongs to both closed intervals, so the
        // sweep must not cut the run there.
        let u = IntervalUnion::new([
            Interval::new(0.0, 1.0),
            Interval::new(1.0, 2.0),
        ]);
        assert_eq!(u.intervals(), &[Interval::new(0.0, 2.0)]);
    }

    #[test]
    fn test_nested() {
        init_logs();
        let u = IntervalUnion::new([
            Interval::new(0.0, 10.0),
            Interval::new(2.0, 3.0),
        ]);
        assert_eq!(u.intervals(), &[Interval::new(0.0, 10.0)]);
    }

    #[test]
    fn test_shared_supremum_then_gap() {
        init_logs();
        let u = IntervalUnion::new([
            Interval::new(0.0, 2.0),
            Interval::new(1.0, 2.0),
            Interval::new(3.0, 4.0),
        ]);
        assert_eq!(
            u.intervals(),
            &[Interval::new(0.0, 2.0), Interval::new(3.0, 4.0)]
        );
    }

    #[test]
    fn test_openness_discarded() {
        init_logs();
        // Reduction works on closed point sets; the members come out
        // closed regardless of the inputs.
        let u = IntervalUnion::new([Interval::with_openness(
            0.0,
            5.0,
            Openness::Opened,
        )]);
        assert_eq!(u.intervals(), &[Interval::new(0.0, 5.0)]);
    }

    #[test]
    fn test_dedup_by_bounds() {
        init_logs();
        let u = IntervalUnion::new([
            Interval::new(0.0, 1.0),
            Interval::new(0.0, 1.0),
            Interval::with_openness(0.0, 1.0, Openness::Opened),
        ]);
        assert_eq!(u.intervals(), &[Interval::new(0.0, 1.0)]);
    }

    #[test]
    fn test_idempotent() {
        init_logs();
        let u = IntervalUnion::new([
            Interval::new(0.0, 3.0),
            Interval::new(2.0, 5.0),
            Interval::new(7.0, 8.0),
        ]);
        let again = IntervalUnion::new(u.clone());
        assert_eq!(u, again);
    }

    #[test]
    fn test_unbounded() {
        init_logs();
        let u = IntervalUnion::new([
            Interval::new(f64::NEG_INFINITY, 0.0),
            Interval::new(0.0, f64::INFINITY),
        ]);
        assert_eq!(u.intervals(), &[Interval::REALS]);

        let v = IntervalUnion::new([
            Interval::new(f64::NEG_INFINITY, -1.0),
            Interval::new(1.0, f64::INFINITY),
        ]);
        assert_eq!(
            v.intervals(),
            &[
                Interval::new(f64::NEG_INFINITY, -1.0),
                Interval::new(1.0, f64::INFINITY)
            ]
        );
    }

    #[test]
    fn test_singleton_member() {
        init_logs();
        let u = IntervalUnion::new([
            Interval::singleton(5.0),
            Interval::new(0.0, 1.0),
        ]);
        assert_eq!(
            u.intervals(),
            &[Interval::new(0.0, 1.0), Interval::singleton(5.0)]
        );
    }

    #[test]
    fn test_empty_input_closed_form() {
        init_logs();
        // Reduction sees the closed form of every input, so an empty
        // (3, 3) contributes the singleton {3}, while a degenerate
        // interval at infinity contributes nothing.
        let u = IntervalUnion::new([
            Interval::with_openness(3.0, 3.0, Openness::Opened),
            Interval::new(f64::NEG_INFINITY, f64::NEG_INFINITY),
        ]);
        assert_eq!(u.intervals(), &[Interval::singleton(3.0)]);
    }

    #[test]
    fn test_empty_collection() {
        init_logs();
        let u = IntervalUnion::new([]);
        assert!(u.is_empty());
        assert_eq!(format!("{u}"), "");
    }

    #[test]
    fn test_from_iterator() {
        init_logs();
        let u: IntervalUnion = [Interval::new(0.0, 1.0), Interval::new(0.5, 2.0)]
            .into_iter()
            .collect();
        assert_eq!(u.intervals(), &[Interval::new(0.0, 2.0)]);

        let single = IntervalUnion::from(Interval::new(0.0, 1.0));
        assert_eq!(single.len(), 1);
    }

    #[test]
    fn test_display() {
        init_logs();
        let u = IntervalUnion::new([
            Interval::new(2.0, 3.0),
            Interval::new(0.0, 1.0),
        ]);
        assert_eq!(format!("{u}"), "[0, 1] ∪ [2, 3]");
    }

    #[test]
    fn test_iteration() {
        init_logs();
        let u = IntervalUnion::new([
            Interval::new(0.0, 1.0),
            Interval::new(2.0, 3.0),
        ]);
        let infs: Vec<f64> = (&u).into_iter().map(Interval::inf).collect();
        assert_eq!(infs, vec![0.0, 2.0]);
        let sups: Vec<f64> = u.into_iter().map(|i| i.sup()).collect();
        assert_eq!(sups, vec![1.0, 3.0]);
    }
}
