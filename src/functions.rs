//! Elementary functions over intervals and unions of intervals.
//!
//! Each function copies its argument and rewrites every contained interval
//! in place, so the same code serves both [`Interval`] and
//! [`crate::IntervalUnion`].  Where pointwise endpoint evaluation is not
//! sound (cosine over more than one monotonic branch, logarithm at or below
//! zero), the per-interval rewrite widens the result to a sound enclosure.

use crate::interval_like::IntervalLike;
use crate::intervals::Interval;
use std::f64::consts::{FRAC_PI_2, PI, TAU};

/// Natural logarithm, element-wise.
///
/// ```
/// use real_intervals::{functions, Interval};
///
/// let i = functions::ln(&Interval::new(-1.0, 4.0));
/// assert_eq!(i.infsup(), (f64::NEG_INFINITY, 4.0_f64.ln()));
/// ```
pub fn ln<T>(x: &T) -> T
where
    T: IntervalLike + Clone,
{
    log(x, std::f64::consts::E)
}

/// Logarithm in the given base, element-wise.
///
/// A fully non-positive element becomes the empty set in place; an element
/// reaching zero or below on the left gets the signed infinity toward which
/// the logarithm diverges at 0+.
pub fn log<T>(x: &T, base: f64) -> T
where
    T: IntervalLike + Clone,
{
    map(x, |interval| interval.log(base))
}

/// Integer power, element-wise.
pub fn powi<T>(x: &T, n: i32) -> T
where
    T: IntervalLike + Clone,
{
    map(x, |interval| interval.powi(n))
}

/// Cosine, element-wise.
///
/// ```
/// use real_intervals::{functions, Interval};
/// use std::f64::consts::TAU;
///
/// assert_eq!(
///     functions::cos(&Interval::new(0.0, TAU)),
///     Interval::new(-1.0, 1.0)
/// );
/// ```
pub fn cos<T>(x: &T) -> T
where
    T: IntervalLike + Clone,
{
    map(x, cos_interval)
}

/// Sine, element-wise, as `cos(pi/2 - x)`.
pub fn sin<T>(x: &T) -> T
where
    T: IntervalLike + Clone,
{
    map(x, |interval| {
        cos_interval(Interval::singleton(FRAC_PI_2) - interval)
    })
}

fn map<T>(x: &T, f: impl Fn(Interval) -> Interval) -> T
where
    T: IntervalLike + Clone,
{
    let mut out = x.clone();
    for interval in out.as_mut_slice() {
        *interval = f(*interval);
    }
    out
}

/// Cosine of the endpoints, widened to a sound enclosure.
///
/// The extrema of cos over an interval occur at an endpoint or at a global
/// critical point, so forcing the bounds to ±1 whenever a critical point
/// lies inside corrects the pointwise approximation for intervals wider
/// than one monotonic branch.
fn cos_interval(interval: Interval) -> Interval {
    if interval.is_empty() {
        return interval;
    }

    let (inf, sup) = interval.infsup();
    let at_inf = inf.cos();
    let at_sup = sup.cos();
    let mut lo = at_inf.min(at_sup);
    let mut hi = at_inf.max(at_sup);
    let mut left_open = interval.is_left_open();
    let mut right_open = interval.is_right_open();

    // cos attains 1 at multiples of 2*pi and -1 halfway between them.
    if contains_critical_point(inf, sup, 0.0) {
        hi = 1.0;
        right_open = false;
    }
    if contains_critical_point(inf, sup, PI) {
        lo = -1.0;
        left_open = false;
    }

    Interval::with_flags(lo, hi, left_open, right_open)
}

// Whether [inf, sup] contains phase + 2*pi*k for some integer k.
fn contains_critical_point(inf: f64, sup: f64, phase: f64) -> bool {
    ((inf - phase) / TAU).ceil() <= ((sup - phase) / TAU).floor()
}
