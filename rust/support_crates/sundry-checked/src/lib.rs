//! Overflow-detecting unsigned 64-bit arithmetic with a propagating NaN state.
//!
//! [`CheckedU64`] holds a `u64` magnitude bounded by a per-value ceiling. Instead
//! of wrapping or panicking, additions and multiplications that would exceed the
//! ceiling produce a NaN value, which callers can test for once at the end of an
//! accumulation (e.g. summing sizes or quantities).
//!
//! The wrapper compares against every primitive numeric type through the
//! [`Comparand`] trait, so `checked < -1i32` or `checked == 2.5f64` work without
//! lossy conversions.
//!
//! # Example
//!
//! ```
//! use sundry_checked::CheckedU64;
//!
//! let total = CheckedU64::with_max(40, 100).unwrap() + CheckedU64::new(50);
//! assert_eq!(total.value().unwrap(), 90);
//!
//! let overflow = total + CheckedU64::new(20);
//! assert!(overflow.is_nan());
//! ```

pub mod checked_u64;
pub mod operand;


pub use checked_u64::CheckedU64;
pub use operand::{Comparand, IntegerOperand};
