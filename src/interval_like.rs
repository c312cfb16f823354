use crate::intervals::Interval;
use crate::unions::IntervalUnion;

/// A value made of intervals: one interval, or a union of several.
///
/// The elementary functions of [`crate::functions`] are written once
/// against this trait and rewrite the elements of a copy in place.
/// Writing through [`IntervalLike::as_mut_slice`] does not re-establish a
/// union's disjointness; callers own that reasoning.
pub trait IntervalLike {
    /// The intervals making up the value, in ascending order.
    fn as_slice(&self) -> &[Interval];

    /// Mutable view over the same intervals.
    fn as_mut_slice(&mut self) -> &mut [Interval];
}

impl IntervalLike for Interval {
    /// A single interval is the one-element sequence of itself.
    fn as_slice(&self) -> &[Interval] {
        std::slice::from_ref(self)
    }

    fn as_mut_slice(&mut self) -> &mut [Interval] {
        std::slice::from_mut(self)
    }
}

impl IntervalLike for IntervalUnion {
    fn as_slice(&self) -> &[Interval] {
        self.intervals()
    }

    fn as_mut_slice(&mut self) -> &mut [Interval] {
        self.intervals_mut()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_single_interval_view() {
        let mut i = Interval::new(1.0, 2.0);
        assert_eq!(i.as_slice(), &[Interval::new(1.0, 2.0)]);

        for member in i.as_mut_slice() {
            *member = Interval::new(0.0, 1.0);
        }
        assert_eq!(i, Interval::new(0.0, 1.0));
    }

    #[test]
    fn test_union_view() {
        let mut u = IntervalUnion::new([
            Interval::new(0.0, 1.0),
            Interval::new(2.0, 3.0),
        ]);
        assert_eq!(u.as_slice().len(), 2);

        for member in u.as_mut_slice() {
            *member = *member + Interval::singleton(10.0);
        }
        assert_eq!(
            u.intervals(),
            &[Interval::new(10.0, 11.0), Interval::new(12.0, 13.0)]
        );
    }
}
