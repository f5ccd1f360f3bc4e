use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul};
use std::str::FromStr;

use num_traits::{Bounded, ToPrimitive, Zero};
use sundry_common::{Error, Result, verify_range};

use crate::operand::{Comparand, IntegerOperand};

/// An unsigned 64-bit quantity bounded by a ceiling, with a NaN state.
///
/// A present value always satisfies `value <= max_value`. The NaN state carries
/// no magnitude and reports a ceiling of 0.
///
/// Arithmetic never wraps: a sum or product exceeding the smaller of the two
/// operands' ceilings yields NaN. Arithmetic *on* a NaN operand is an error,
/// so NaN marks "this accumulation overflowed" rather than silently spreading.
///
/// # Ordering
///
/// Two ordering policies coexist and are kept apart:
///
/// - The comparison operators (`<`, `<=`, `>`, `>=`) treat NaN as incomparable:
///   they return `false` whenever either side is NaN, against another
///   `CheckedU64` or against any primitive. `==` also returns `false` for a
///   NaN against a primitive, but two NaN wrappers are equal to each other.
/// - The `compare_to*` methods return a total [`Ordering`] in which a NaN
///   receiver ranks below everything.
///
/// Because `NaN == NaN` while `NaN.partial_cmp(&NaN)` is `None`, `CheckedU64`
/// deliberately does not satisfy the usual `PartialEq`/`PartialOrd` agreement
/// for the NaN state. `compare_to_checked` is not antisymmetric for two NaNs
/// either, so neither relation is fit for `sort_by` on slices containing NaN.
#[derive(Clone, Copy, Debug)]
pub struct CheckedU64 {
    value: Option<u64>,
    max_value: u64,
}

impl CheckedU64 {
    /// The NaN state.
    pub const NAN: CheckedU64 = CheckedU64 {
        value: None,
        max_value: 0,
    };

    /// Zero with the default `u64::MAX` ceiling.
    pub const ZERO: CheckedU64 = CheckedU64::new(0);

    /// `u64::MAX` with the default ceiling.
    pub const MAX: CheckedU64 = CheckedU64::new(u64::MAX);

    /// Creates a present value with the default `u64::MAX` ceiling.
    pub const fn new(value: u64) -> CheckedU64 {
        CheckedU64 {
            value: Some(value),
            max_value: u64::MAX,
        }
    }

    /// Creates a present value bounded by `max_value`.
    ///
    /// Fails with an out-of-range error when `value > max_value`.
    pub fn with_max(value: u64, max_value: u64) -> Result<CheckedU64> {
        verify_range!(value, value <= max_value);
        Ok(CheckedU64 {
            value: Some(value),
            max_value,
        })
    }

    /// Creates a value from an optional magnitude. `None` yields NaN
    /// regardless of `max_value`.
    pub fn from_option(value: Option<u64>, max_value: u64) -> Result<CheckedU64> {
        match value {
            Some(value) => CheckedU64::with_max(value, max_value),
            None => Ok(CheckedU64::NAN),
        }
    }

    /// Returns NaN when `is_nan` is set, zero otherwise.
    pub const fn from_nan_flag(is_nan: bool) -> CheckedU64 {
        if is_nan {
            CheckedU64::NAN
        } else {
            CheckedU64::ZERO
        }
    }

    #[inline]
    pub const fn is_nan(&self) -> bool {
        self.value.is_none()
    }

    /// Returns the magnitude, or `None` for NaN.
    #[inline]
    pub const fn get(&self) -> Option<u64> {
        self.value
    }

    /// Returns the magnitude. Reading a NaN is an invalid-state error.
    pub fn value(&self) -> Result<u64> {
        self.value
            .ok_or_else(|| Error::invalid_state("cannot read the value of NaN"))
    }

    /// Returns the ceiling; 0 for NaN.
    #[inline]
    pub const fn max_value(&self) -> u64 {
        self.max_value
    }

    /// Adds two values under the smaller of their ceilings.
    ///
    /// Fails with an invalid-state error when either operand is NaN. A sum
    /// above the effective ceiling produces NaN.
    pub fn try_add(self, rhs: CheckedU64) -> Result<CheckedU64> {
        let (left, right, max_value) = self.operands(rhs, "add")?;
        if left <= max_value && max_value - left >= right {
            Ok(CheckedU64 {
                value: Some(left + right),
                max_value,
            })
        } else {
            Ok(CheckedU64::NAN)
        }
    }

    /// Multiplies two values under the smaller of their ceilings.
    ///
    /// Fails with an invalid-state error when either operand is NaN. A product
    /// above the effective ceiling produces NaN.
    pub fn try_mul(self, rhs: CheckedU64) -> Result<CheckedU64> {
        let (left, right, max_value) = self.operands(rhs, "multiply")?;
        if left == 0 || max_value / left >= right {
            Ok(CheckedU64 {
                value: Some(left * right),
                max_value,
            })
        } else {
            Ok(CheckedU64::NAN)
        }
    }

    /// Adds an integer primitive under this value's ceiling.
    ///
    /// Fails with an out-of-range error for a negative `rhs`, before looking
    /// at the NaN state.
    pub fn try_add_int<P: IntegerOperand>(self, rhs: P) -> Result<CheckedU64> {
        let rhs = rhs.to_magnitude()?;
        self.try_add(CheckedU64::new(rhs))
    }

    /// Multiplies by an integer primitive under this value's ceiling.
    ///
    /// Fails with an out-of-range error for a negative `rhs`, before looking
    /// at the NaN state.
    pub fn try_mul_int<P: IntegerOperand>(self, rhs: P) -> Result<CheckedU64> {
        let rhs = rhs.to_magnitude()?;
        self.try_mul(CheckedU64::new(rhs))
    }

    fn operands(self, rhs: CheckedU64, op: &str) -> Result<(u64, u64, u64)> {
        match (self.value, rhs.value) {
            (Some(left), Some(right)) => Ok((left, right, self.max_value.min(rhs.max_value))),
            _ => Err(Error::invalid_state(format!("cannot {op} NaN"))),
        }
    }

    /// Orders `self` against a primitive, or `None` when either side is NaN.
    ///
    /// This is the relation behind the comparison operators.
    #[inline]
    pub fn partial_cmp_to<P: Comparand>(&self, other: P) -> Option<Ordering> {
        other.order_of(self.value?)
    }

    /// Total ordering against a primitive in which NaN ranks lowest.
    ///
    /// A NaN receiver is `Less` than any comparand. A present receiver is
    /// `Greater` than any negative comparand and than a floating point NaN.
    pub fn compare_to<P: Comparand>(&self, other: P) -> Ordering {
        match self.value {
            None => Ordering::Less,
            Some(value) => other.order_of(value).unwrap_or(Ordering::Greater),
        }
    }

    pub fn compare_to_signed(&self, other: i64) -> Ordering {
        self.compare_to(other)
    }

    pub fn compare_to_unsigned(&self, other: u64) -> Ordering {
        self.compare_to(other)
    }

    pub fn compare_to_float(&self, other: f64) -> Ordering {
        self.compare_to(other)
    }

    /// Total ordering against another wrapper in which NaN ranks lowest.
    ///
    /// A NaN receiver is `Less` even when `other` is NaN too.
    pub fn compare_to_checked(&self, other: &CheckedU64) -> Ordering {
        match (self.value, other.value) {
            (None, _) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(left), Some(right)) => left.cmp(&right),
        }
    }
}

impl Default for CheckedU64 {
    fn default() -> Self {
        CheckedU64::ZERO
    }
}

impl PartialEq for CheckedU64 {
    fn eq(&self, other: &CheckedU64) -> bool {
        self.value == other.value
    }
}

impl Eq for CheckedU64 {}

impl Hash for CheckedU64 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl PartialOrd for CheckedU64 {
    fn partial_cmp(&self, other: &CheckedU64) -> Option<Ordering> {
        Some(self.value?.cmp(&other.value?))
    }
}

macro_rules! primitive_cmp {
    ($($t:ty),*) => {$(
        impl PartialEq<$t> for CheckedU64 {
            #[inline]
            fn eq(&self, other: &$t) -> bool {
                self.partial_cmp_to(*other) == Some(Ordering::Equal)
            }
        }

        impl PartialOrd<$t> for CheckedU64 {
            #[inline]
            fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                self.partial_cmp_to(*other)
            }
        }

        impl PartialEq<CheckedU64> for $t {
            #[inline]
            fn eq(&self, other: &CheckedU64) -> bool {
                other == self
            }
        }

        impl PartialOrd<CheckedU64> for $t {
            #[inline]
            fn partial_cmp(&self, other: &CheckedU64) -> Option<Ordering> {
                other.partial_cmp_to(*self).map(Ordering::reverse)
            }
        }
    )*};
}

primitive_cmp!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

impl Add for CheckedU64 {
    type Output = CheckedU64;

    /// # Panics
    ///
    /// Panics if either operand is NaN. Use [`CheckedU64::try_add`] to get an
    /// error instead.
    fn add(self, rhs: CheckedU64) -> CheckedU64 {
        self.try_add(rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl Mul for CheckedU64 {
    type Output = CheckedU64;

    /// # Panics
    ///
    /// Panics if either operand is NaN. Use [`CheckedU64::try_mul`] to get an
    /// error instead.
    fn mul(self, rhs: CheckedU64) -> CheckedU64 {
        self.try_mul(rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

macro_rules! primitive_arith {
    ($($t:ty),*) => {$(
        impl Add<$t> for CheckedU64 {
            type Output = CheckedU64;

            /// Panics if `self` is NaN or `rhs` is negative.
            fn add(self, rhs: $t) -> CheckedU64 {
                self.try_add_int(rhs).unwrap_or_else(|e| panic!("{e}"))
            }
        }

        impl Mul<$t> for CheckedU64 {
            type Output = CheckedU64;

            /// Panics if `self` is NaN or `rhs` is negative.
            fn mul(self, rhs: $t) -> CheckedU64 {
                self.try_mul_int(rhs).unwrap_or_else(|e| panic!("{e}"))
            }
        }
    )*};
}

primitive_arith!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

macro_rules! from_small_unsigned {
    ($($t:ty),*) => {$(
        impl From<$t> for CheckedU64 {
            #[inline]
            fn from(value: $t) -> Self {
                CheckedU64::new(u64::from(value))
            }
        }
    )*};
}

from_small_unsigned!(u8, u16, u32, u64);

macro_rules! try_from_integer {
    ($($t:ty),*) => {$(
        /// Fails with an out-of-range error for negative values and values
        /// above `u64::MAX`.
        impl TryFrom<$t> for CheckedU64 {
            type Error = Error;

            fn try_from(value: $t) -> Result<CheckedU64> {
                value.to_magnitude().map(CheckedU64::new)
            }
        }
    )*};
}

try_from_integer!(i8, i16, i32, i64, i128, isize, u128, usize);

impl From<Option<u64>> for CheckedU64 {
    fn from(value: Option<u64>) -> Self {
        value.map_or(CheckedU64::NAN, CheckedU64::new)
    }
}

macro_rules! try_into_primitive {
    ($($t:ty),*) => {$(
        /// Fails with an invalid-state error for NaN; otherwise converts like
        /// an `as` cast.
        impl TryFrom<CheckedU64> for $t {
            type Error = Error;

            #[inline]
            fn try_from(value: CheckedU64) -> Result<$t> {
                Ok(value.value()? as $t)
            }
        }
    )*};
}

try_into_primitive!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

impl Zero for CheckedU64 {
    fn zero() -> Self {
        CheckedU64::ZERO
    }

    fn is_zero(&self) -> bool {
        self.value == Some(0)
    }
}

impl Bounded for CheckedU64 {
    fn min_value() -> Self {
        CheckedU64::ZERO
    }

    fn max_value() -> Self {
        CheckedU64::MAX
    }
}

impl ToPrimitive for CheckedU64 {
    fn to_i64(&self) -> Option<i64> {
        i64::try_from(self.value?).ok()
    }

    fn to_u64(&self) -> Option<u64> {
        self.value
    }

    fn to_i128(&self) -> Option<i128> {
        self.value.map(i128::from)
    }

    fn to_u128(&self) -> Option<u128> {
        self.value.map(u128::from)
    }

    fn to_f64(&self) -> Option<f64> {
        self.value.map(|v| v as f64)
    }
}

impl fmt::Display for CheckedU64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Some(value) => fmt::Display::fmt(&value, f),
            None => f.write_str("NaN"),
        }
    }
}

/// Parses `NaN` or a decimal `u64` (with the default ceiling).
impl FromStr for CheckedU64 {
    type Err = Error;

    fn from_str(s: &str) -> Result<CheckedU64> {
        if s == "NaN" {
            return Ok(CheckedU64::NAN);
        }
        s.parse::<u64>()
            .map(CheckedU64::new)
            .map_err(|e| Error::invalid_arg("s", format!("'{s}': {e}")))
    }
}

#[cfg(feature = "ord_subset")]
impl ord_subset::OrdSubset for CheckedU64 {
    fn is_outside_order(&self) -> bool {
        self.is_nan()
    }
}

#[cfg(feature = "ord_subset")]
impl From<CheckedU64> for ord_subset::OrdVar<CheckedU64> {
    fn from(val: CheckedU64) -> Self {
        ord_subset::OrdVar::new(val)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct CheckedU64Repr {
    value: Option<u64>,
    max_value: u64,
}

#[cfg(feature = "serde")]
impl serde::ser::Serialize for CheckedU64 {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let repr = CheckedU64Repr {
            value: self.value,
            max_value: self.max_value,
        };
        serde::Serialize::serialize(&repr, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::de::Deserialize<'de> for CheckedU64 {
    fn deserialize<D>(deserializer: D) -> std::result::Result<CheckedU64, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        let repr = <CheckedU64Repr as serde::Deserialize>::deserialize(deserializer)?;
        CheckedU64::from_option(repr.value, repr.max_value).map_err(serde::de::Error::custom)
    }
}
