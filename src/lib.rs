//! Real-valued intervals and their algebra.
//!
//! An [`Interval`] is an ordered pair of `f64` bounds plus one openness
//! flag per side.  Openness is either spelled out at construction or
//! inferred from the bounds, IEEE infinities standing in for unbounded
//! sides:
//!
//!  |Interval |Construction                                      |Description
//!  |---------|--------------------------------------------------|-----------------------
//!  | `[A, B]`|`Interval::new(a, b)`                             |closed (finite bounds)
//!  | `(A, B)`|`Interval::with_openness(a, b, Openness::Opened)` |open
//!  | `(A, B]`|`Interval::with_openness(a, b, Openness::LeftOpen)`|left-open
//!  | `[A, B)`|`Interval::with_openness(a, b, Openness::RightOpen)`|right-open
//!  | `(,B]`  |`Interval::new(f64::NEG_INFINITY, b)`             |left-unbounded
//!  | `[A,)`  |`Interval::new(a, f64::INFINITY)`                 |right-unbounded
//!  | `(,)`   |`Interval::REALS`                                 |the real line
//!  | `∅`     |`Interval::EMPTY`                                 |empty
//!
//! Arithmetic operators combine intervals by evaluating the operation at
//! the endpoint combinations, which is sound for operators monotonic over
//! the operand domains.  [`IntervalUnion`] reduces an arbitrary collection
//! of intervals to the sorted, disjoint cover of the same point set, and
//! the [`functions`] module applies logarithms, powers and trigonometry
//! element-wise to either form through the [`IntervalLike`] trait.
//!
//! ```
//! use real_intervals::{functions, Interval, IntervalUnion};
//!
//! let a = Interval::new(1.0, 2.0);
//! let b = Interval::new(3.0, 4.0);
//! assert_eq!(a + b, Interval::new(4.0, 6.0));
//! assert_eq!(a & Interval::new(0.0, 1.5), Interval::new(1.0, 1.5));
//!
//! let u = IntervalUnion::new([
//!     Interval::new(0.0, 3.0),
//!     Interval::new(2.0, 5.0),
//!     Interval::new(7.0, 8.0),
//! ]);
//! assert_eq!(format!("{u}"), "[0, 5] ∪ [7, 8]");
//!
//! let squared = functions::powi(&u, 2);
//! assert_eq!(squared[0], Interval::new(0.0, 25.0));
//! ```

mod bounds;
mod errors;
pub mod functions;
mod interval_like;
mod intervals;
mod unions;

pub use crate::bounds::{Endpoint, EndpointKind, Openness};
pub use crate::errors::Error;
pub use crate::interval_like::IntervalLike;
pub use crate::intervals::Interval;
pub use crate::unions::IntervalUnion;
