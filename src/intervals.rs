use crate::bounds::{Endpoint, Openness};
use crate::errors::Error;
use itertools::Itertools;
use std::cmp::Ordering;
use std::ops::{Add, BitAnd, Div, Mul, Sub};

/// A real-valued interval.
///
/// An interval is an ordered pair of `f64` bounds plus one openness flag per
/// side.  IEEE infinities stand in for unbounded sides and are forced open
/// at every construction path, since an infinite bound is never an attained
/// value.  Values are immutable once constructed; every operation returns a
/// new interval.
///
/// Equality is structural: all four fields must match.  `(0, 0)` and
/// `[1, 1)` both denote the empty set but are not equal.
///
/// ```
/// use real_intervals::Interval;
///
/// let a = Interval::new(1.0, 2.0);
/// let b = Interval::new(3.0, 4.0);
/// assert_eq!(a + b, Interval::new(4.0, 6.0));
/// assert_eq!(a * b, Interval::new(3.0, 8.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    inf: f64,
    sup: f64,
    left_open: bool,
    right_open: bool,
}

impl Interval {
    /// The empty set, canonically `(0, 0)`.
    pub const EMPTY: Interval = Interval {
        inf: 0.0,
        sup: 0.0,
        left_open: true,
        right_open: true,
    };

    /// The whole real line, `(-inf, inf)`.
    pub const REALS: Interval = Interval {
        inf: f64::NEG_INFINITY,
        sup: f64::INFINITY,
        left_open: true,
        right_open: true,
    };

    /// Construct an interval with [`Openness::Auto`]: finite bounds are
    /// closed, infinite bounds open.
    ///
    /// Panics if `inf > sup` (or either bound is NaN).
    ///
    /// ```
    /// use real_intervals::Interval;
    ///
    /// assert!(!Interval::new(f64::NEG_INFINITY, 5.0).contains(f64::NEG_INFINITY));
    /// assert!(Interval::new(f64::NEG_INFINITY, 5.0).contains(5.0));
    /// ```
    pub fn new(inf: f64, sup: f64) -> Self {
        Self::with_openness(inf, sup, Openness::Auto)
    }

    /// Checked variant of [`Interval::new`].
    pub fn try_new(inf: f64, sup: f64) -> Result<Self, Error> {
        Self::try_with_openness(inf, sup, Openness::Auto)
    }

    /// Construct an interval with the given openness selector.
    ///
    /// An infinite bound ends up open on that side no matter what the
    /// selector requested.
    ///
    /// Panics if `inf > sup` (or either bound is NaN).
    pub fn with_openness(inf: f64, sup: f64, openness: Openness) -> Self {
        assert!(
            inf <= sup,
            "infimum {inf} is greater than supremum {sup}"
        );
        let (left_open, right_open) = openness.resolve(inf, sup);
        Self::normalized(inf, sup, left_open, right_open)
    }

    /// Checked variant of [`Interval::with_openness`].
    pub fn try_with_openness(
        inf: f64,
        sup: f64,
        openness: Openness,
    ) -> Result<Self, Error> {
        if !(inf <= sup) {
            return Err(Error::ReversedBounds { inf, sup });
        }
        let (left_open, right_open) = openness.resolve(inf, sup);
        Ok(Self::normalized(inf, sup, left_open, right_open))
    }

    /// Construct an interval with both openness flags given explicitly.
    ///
    /// Panics if `inf > sup` (or either bound is NaN).
    pub fn with_flags(
        inf: f64,
        sup: f64,
        left_open: bool,
        right_open: bool,
    ) -> Self {
        assert!(
            inf <= sup,
            "infimum {inf} is greater than supremum {sup}"
        );
        Self::normalized(inf, sup, left_open, right_open)
    }

    /// Checked variant of [`Interval::with_flags`].
    pub fn try_with_flags(
        inf: f64,
        sup: f64,
        left_open: bool,
        right_open: bool,
    ) -> Result<Self, Error> {
        if !(inf <= sup) {
            return Err(Error::ReversedBounds { inf, sup });
        }
        Ok(Self::normalized(inf, sup, left_open, right_open))
    }

    /// The interval containing a single value, `[value, value]`.
    pub fn singleton(value: f64) -> Self {
        Self::with_openness(value, value, Openness::Closed)
    }

    // An unbounded side is never attained, so it is never closed.
    fn normalized(
        inf: f64,
        sup: f64,
        left_open: bool,
        right_open: bool,
    ) -> Self {
        Self {
            inf,
            sup,
            left_open: left_open || inf == f64::NEG_INFINITY,
            right_open: right_open || sup == f64::INFINITY,
        }
    }

    /// The infimum (lower bound).
    pub fn inf(&self) -> f64 {
        self.inf
    }

    /// The supremum (upper bound).
    pub fn sup(&self) -> f64 {
        self.sup
    }

    /// Both bounds, as `(inf, sup)`.
    pub fn infsup(&self) -> (f64, f64) {
        (self.inf, self.sup)
    }

    /// Both bounds as tagged boundary markers, infimum first.
    pub fn endpoints(&self) -> [Endpoint; 2] {
        [Endpoint::infimum(self.inf), Endpoint::supremum(self.sup)]
    }

    /// Whether the infimum is excluded from the interval.
    pub fn is_left_open(&self) -> bool {
        self.left_open
    }

    /// Whether the supremum is excluded from the interval.
    pub fn is_right_open(&self) -> bool {
        self.right_open
    }

    /// The same bounds with both sides closed (infinite sides stay open).
    pub fn as_closed(&self) -> Self {
        Self::with_openness(self.inf, self.sup, Openness::Closed)
    }

    /// The same bounds with both sides open.
    pub fn as_opened(&self) -> Self {
        Self::with_openness(self.inf, self.sup, Openness::Opened)
    }

    /// True if the interval contains no value: equal bounds with at least
    /// one side open.  A degenerate `[v, v]` is a valid singleton.
    pub fn is_empty(&self) -> bool {
        (self.left_open || self.right_open) && self.inf == self.sup
    }

    /// Whether the interval is bounded from below.  The empty set is
    /// bounded by convention, having no witnessing point.
    pub fn left_bounded(&self) -> bool {
        self.inf > f64::NEG_INFINITY || self.is_empty()
    }

    /// Whether the interval is bounded from above.  The empty set is
    /// bounded by convention.
    pub fn right_bounded(&self) -> bool {
        self.sup < f64::INFINITY || self.is_empty()
    }

    /// Whether the interval is bounded on both sides.
    pub fn bounded(&self) -> bool {
        self.left_bounded() && self.right_bounded()
    }

    /// The length `sup - inf` of the interval.
    pub fn diameter(&self) -> f64 {
        self.sup - self.inf
    }

    /// The midpoint of the interval, NaN when empty.
    pub fn center(&self) -> f64 {
        if self.is_empty() {
            return f64::NAN;
        }
        0.5 * (self.inf + self.sup)
    }

    /// Whether the value lies in the interval, honoring open endpoints.
    ///
    /// ```
    /// use real_intervals::{Interval, Openness};
    ///
    /// let i = Interval::with_openness(0.0, 10.0, Openness::LeftOpen);
    /// assert!(!i.contains(0.0));
    /// assert!(i.contains(10.0));
    /// ```
    pub fn contains(&self, value: f64) -> bool {
        self.inf <= value
            && value <= self.sup
            && !(value == self.inf && self.left_open)
            && !(value == self.sup && self.right_open)
    }

    /// Combine two intervals through a binary operator: the operator is
    /// evaluated over the four endpoint combinations and the result spans
    /// their min and max, with each side open when it is open in either
    /// operand.
    ///
    /// Only correct when `op` is monotonic in each argument over the domain
    /// spanned by the two intervals; this is not checked.  Division through
    /// an interval containing zero is the known offender.
    pub fn binary_op(
        self,
        other: Self,
        op: impl Fn(f64, f64) -> f64,
    ) -> Self {
        let mut lo = f64::INFINITY;
        let mut hi = f64::NEG_INFINITY;
        for (a, b) in [self.inf, self.sup]
            .into_iter()
            .cartesian_product([other.inf, other.sup])
        {
            let v = op(a, b);
            lo = lo.min(v);
            hi = hi.max(v);
        }
        Self::with_flags(
            lo,
            hi,
            self.left_open || other.left_open,
            self.right_open || other.right_open,
        )
    }

    /// Map the interval through a unary function: the function is evaluated
    /// at both bounds and the result spans their min and max, with openness
    /// carried over unchanged.
    ///
    /// Only correct when `f` is monotonic (ideally bijective) on
    /// `[inf, sup]`; this is not checked.
    pub fn apply(self, f: impl Fn(f64) -> f64) -> Self {
        let a = f(self.inf);
        let b = f(self.sup);
        Self::with_flags(a.min(b), a.max(b), self.left_open, self.right_open)
    }

    /// Raise the interval to an integer power.
    ///
    /// ```
    /// use real_intervals::Interval;
    ///
    /// assert_eq!(Interval::new(-2.0, 1.0).powi(2), Interval::new(0.0, 4.0));
    /// assert_eq!(Interval::new(-2.0, 1.0).powi(3), Interval::new(-8.0, 1.0));
    /// ```
    pub fn powi(self, n: i32) -> Self {
        if self.inf < 0.0 && self.sup > 0.0 && n % 2 == 0 {
            // An even power attains its minimum 0 at the straddled zero.
            // The zero bound comes out closed even when the source
            // excluded its own endpoints.
            return Self::new(0.0, self.inf.powi(n).max(self.sup.powi(n)));
        }
        self.apply(|v| v.powi(n))
    }

    /// Natural logarithm of the interval.
    pub fn ln(self) -> Self {
        self.log(std::f64::consts::E)
    }

    /// Logarithm of the interval in the given base.
    ///
    /// A fully non-positive interval has no image and yields
    /// [`Interval::EMPTY`].  An interval reaching zero or below on the left
    /// gets the signed infinity toward which the logarithm diverges at 0+:
    /// -inf for bases above 1, +inf below.
    ///
    /// ```
    /// use real_intervals::Interval;
    ///
    /// let i = Interval::new(-1.0, 4.0).ln();
    /// assert_eq!(i.infsup(), (f64::NEG_INFINITY, 4.0_f64.ln()));
    /// ```
    pub fn log(self, base: f64) -> Self {
        if self.sup <= 0.0 {
            return Self::EMPTY;
        }
        if self.inf <= 0.0 {
            let divergent = f64::copysign(f64::INFINITY, 1.0 - base);
            let at_sup = self.sup.log(base);
            return Self::new(divergent.min(at_sup), divergent.max(at_sup));
        }
        self.apply(|v| v.log(base))
    }

    /// `base` raised to every value of the interval.
    ///
    /// Sound for any positive base on either side of 1, since the endpoint
    /// images are sorted.
    pub fn exp_base(self, base: f64) -> Self {
        self.apply(|v| base.powf(v))
    }

    /// The intersection of two intervals, [`Interval::EMPTY`] when they are
    /// disjoint.  Same as the `&` operator.
    pub fn intersection(self, other: Self) -> Self {
        if self.is_subset(&other) {
            return self;
        }
        if other.is_subset(&self) {
            return other;
        }
        if other.contains(self.sup) {
            return Self::with_flags(
                other.inf,
                self.sup,
                other.left_open,
                self.right_open,
            );
        }
        if other.contains(self.inf) {
            return Self::with_flags(
                self.inf,
                other.sup,
                self.left_open,
                other.right_open,
            );
        }
        Self::EMPTY
    }

    /// Whether every value of `self` belongs to `other`.
    ///
    /// The equality fallbacks cover shared unbounded endpoints: `+inf` is
    /// never contained in any interval, yet `[0, +inf)` is a subset of
    /// `(-inf, +inf)`.
    pub fn is_subset(&self, other: &Self) -> bool {
        let inf_matches =
            self.inf == other.inf && self.left_open == other.left_open;
        let sup_matches =
            self.sup == other.sup && self.right_open == other.right_open;
        (other.contains(self.inf) || inf_matches)
            && (other.contains(self.sup) || sup_matches)
    }
}

impl Default for Interval {
    /// Returns the empty set.
    fn default() -> Self {
        Self::EMPTY
    }
}

impl PartialOrd for Interval {
    /// Subset ordering: `a <= b` holds when `a` is a subset of `b`.  A
    /// partial order; overlapping intervals with neither containing the
    /// other are incomparable.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else if self.is_subset(other) {
            Some(Ordering::Less)
        } else if other.is_subset(self) {
            Some(Ordering::Greater)
        } else {
            None
        }
    }
}

impl Add for Interval {
    type Output = Interval;

    fn add(self, rhs: Interval) -> Interval {
        self.binary_op(rhs, |a, b| a + b)
    }
}

impl Sub for Interval {
    type Output = Interval;

    fn sub(self, rhs: Interval) -> Interval {
        self.binary_op(rhs, |a, b| a - b)
    }
}

impl Mul for Interval {
    type Output = Interval;

    fn mul(self, rhs: Interval) -> Interval {
        self.binary_op(rhs, |a, b| a * b)
    }
}

impl Div for Interval {
    type Output = Interval;

    /// Unsound when `rhs` reaches through zero; see
    /// [`Interval::binary_op`].
    fn div(self, rhs: Interval) -> Interval {
        self.binary_op(rhs, |a, b| a / b)
    }
}

impl BitAnd for Interval {
    type Output = Interval;

    /// Same as [`Interval::intersection`].
    fn bitand(self, rhs: Interval) -> Interval {
        self.intersection(rhs)
    }
}

impl IntoIterator for Interval {
    type Item = Interval;
    type IntoIter = std::iter::Once<Interval>;

    /// An interval iterates as the one-element sequence of itself.
    fn into_iter(self) -> Self::IntoIter {
        std::iter::once(self)
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "∅");
        }
        let lb = if self.left_open { '(' } else { '[' };
        let rb = if self.right_open { ')' } else { ']' };
        write!(f, "{}{}, {}{}", lb, self.inf, self.sup, rb)
    }
}
