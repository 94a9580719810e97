//! The `CanAddOne` capability and the generic functions built on it
//!
//! Every primitive integer and float type conforms. Generic callers never
//! name the concrete type: the bound `T: CanAddOne` is enough for the
//! compiler to pick the right implementation at each call site.

/// Produces a value of the implementing type from a value of the same type
pub trait CanAddOne: Sized {
    /// Value plus one, in the implementing type
    fn add_one(self) -> Self;
}

/// Like [`CanAddOne`] but reports overflow instead of panicking
pub trait CheckedAddOne: CanAddOne {
    fn checked_add_one(self) -> Option<Self>;
}

macro_rules! impl_can_add_one_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl CanAddOne for $ty {
                #[inline]
                fn add_one(self) -> $ty {
                    self + 1
                }
            }

            impl CheckedAddOne for $ty {
                #[inline]
                fn checked_add_one(self) -> Option<$ty> {
                    self.checked_add(1)
                }
            }
        )*
    };
}

macro_rules! impl_can_add_one_float {
    ($($ty:ty),* $(,)?) => {
        $(
            impl CanAddOne for $ty {
                #[inline]
                fn add_one(self) -> $ty {
                    self + 1.0
                }
            }
        )*
    };
}

impl_can_add_one_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_can_add_one_float!(f32, f64);

/// Increment any conforming value; the result has the argument's type
#[inline]
pub fn increment<T: CanAddOne>(value: T) -> T {
    value.add_one()
}

/// Apply the capability `n` times
pub fn increment_n<T: CanAddOne>(value: T, n: usize) -> T {
    (0..n).fold(value, |acc, _| acc.add_one())
}

/// Increment, or `None` when the integer type has no room left
#[inline]
pub fn checked_increment<T: CheckedAddOne>(value: T) -> Option<T> {
    value.checked_add_one()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increment_integer_and_float() {
        assert_eq!(increment(1), 2);
        assert_eq!(increment(1.0), 2.0);

        // inferred types survive the generic call
        let i: i32 = increment(1);
        let f: f64 = increment(1.0);
        assert_eq!(i, 2i32);
        assert_eq!(f, 2.0f64);
    }

    #[test]
    fn test_every_integer_width() {
        assert_eq!(increment(41u8), 42u8);
        assert_eq!(increment(-1i8), 0i8);
        assert_eq!(increment(u64::MAX - 1), u64::MAX);
        assert_eq!(increment(i128::MIN), i128::MIN + 1);
        assert_eq!(increment(0usize), 1usize);
        assert_eq!(increment(0.5f32), 1.5f32);
    }

    #[test]
    fn test_increment_n() {
        assert_eq!(increment_n(0u32, 10), 10);
        assert_eq!(increment_n(7i64, 0), 7);
        assert_eq!(increment_n(0.0f64, 4), 4.0);
    }

    #[test]
    fn test_checked_increment() {
        assert_eq!(checked_increment(254u8), Some(255u8));
        assert_eq!(checked_increment(u8::MAX), None);
        assert_eq!(checked_increment(i32::MAX), None);
        assert_eq!(checked_increment(-1i32), Some(0));
    }

    #[test]
    fn test_float_special_values() {
        assert!(increment(f64::NAN).is_nan());
        assert_eq!(increment(f64::INFINITY), f64::INFINITY);
        assert_eq!(increment(-1.0f64), 0.0);
    }
}
