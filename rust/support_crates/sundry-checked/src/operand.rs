//! Primitive numeric operands accepted by [`CheckedU64`](crate::CheckedU64)
//! comparisons and arithmetic.
//!
//! Every primitive integer and floating point type implements [`Comparand`],
//! which orders an unsigned 64-bit magnitude against the primitive without
//! going through a lossy intermediate type. Integer primitives additionally
//! implement [`IntegerOperand`], the right-hand side of checked arithmetic.

use std::cmp::Ordering;

use sundry_common::{Error, Result};

/// A primitive numeric value that can be ordered against a `u64` magnitude.
pub trait Comparand: Copy {
    /// Returns the ordering of `magnitude` relative to `self`.
    ///
    /// Negative values always order below any magnitude. Returns `None` only
    /// when `self` has no place in the numeric order (a floating point NaN).
    fn order_of(self, magnitude: u64) -> Option<Ordering>;
}

/// An integer primitive that can act as an unsigned operand.
pub trait IntegerOperand: Comparand {
    /// Converts `self` into an unsigned 64-bit magnitude.
    ///
    /// Fails with an out-of-range error for negative values and for values
    /// above `u64::MAX`.
    fn to_magnitude(self) -> Result<u64>;
}

macro_rules! signed_operand {
    ($($t:ty),*) => {$(
        impl Comparand for $t {
            #[inline]
            fn order_of(self, magnitude: u64) -> Option<Ordering> {
                if self < 0 {
                    Some(Ordering::Greater)
                } else {
                    Some((magnitude as u128).cmp(&(self as u128)))
                }
            }
        }

        impl IntegerOperand for $t {
            #[inline]
            fn to_magnitude(self) -> Result<u64> {
                u64::try_from(self).map_err(|_| {
                    Error::out_of_range("value", format!("{self} is negative or exceeds u64::MAX"))
                })
            }
        }
    )*};
}

macro_rules! unsigned_operand {
    ($($t:ty),*) => {$(
        impl Comparand for $t {
            #[inline]
            fn order_of(self, magnitude: u64) -> Option<Ordering> {
                Some((magnitude as u128).cmp(&(self as u128)))
            }
        }

        impl IntegerOperand for $t {
            #[inline]
            fn to_magnitude(self) -> Result<u64> {
                u64::try_from(self).map_err(|_| {
                    Error::out_of_range("value", format!("{self} exceeds u64::MAX"))
                })
            }
        }
    )*};
}

signed_operand!(i8, i16, i32, i64, i128, isize);
unsigned_operand!(u8, u16, u32, u64, u128, usize);

/// 2^64, the first float value above every `u64`.
const TWO_POW_64: f64 = 18_446_744_073_709_551_616.0;

fn order_of_float(value: f64, magnitude: u64) -> Option<Ordering> {
    if value.is_nan() {
        return None;
    }
    if value < 0.0 {
        return Some(Ordering::Greater);
    }
    if value >= TWO_POW_64 {
        return Some(Ordering::Less);
    }
    let whole = value.trunc();
    match magnitude.cmp(&(whole as u64)) {
        Ordering::Equal if value > whole => Some(Ordering::Less),
        ord => Some(ord),
    }
}

impl Comparand for f64 {
    #[inline]
    fn order_of(self, magnitude: u64) -> Option<Ordering> {
        order_of_float(self, magnitude)
    }
}

impl Comparand for f32 {
    #[inline]
    fn order_of(self, magnitude: u64) -> Option<Ordering> {
        order_of_float(f64::from(self), magnitude)
    }
}
