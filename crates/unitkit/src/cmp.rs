//! Comparison contract used by the generic assertions
//!
//! A comparator orders two values of the same type. It must describe a
//! strict total order: `greater` and `greater_or_equal` are derived by
//! negating `less_or_equal` and `less`, so a comparator that cannot order
//! some pair gives meaningless answers for those relations.

use std::cmp::Ordering;
use std::marker::PhantomData;

/// Three-way comparison over values of type `T`
pub trait Comparator<T: ?Sized> {
    /// Order `a` relative to `b`
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Adapter for comparators that return a signed integer
///
/// Negative means `a` orders before `b`, zero means equal, positive means
/// `a` orders after `b`.
pub struct ThreeWay<T: ?Sized, F> {
    f: F,
    _marker: PhantomData<fn(&T)>,
}

/// Wrap a signed-integer comparator so it can be passed to the `*_by` assertions
pub fn three_way<T: ?Sized, F>(f: F) -> ThreeWay<T, F>
where
    F: Fn(&T, &T) -> i32,
{
    ThreeWay {
        f,
        _marker: PhantomData,
    }
}

impl<T: ?Sized, F> Comparator<T> for ThreeWay<T, F>
where
    F: Fn(&T, &T) -> i32,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.f)(a, b).cmp(&0)
    }
}

/// Default comparator for the integer assertions
pub fn int_cmp(a: &i64, b: &i64) -> Ordering {
    a.cmp(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_cmp_extremes() {
        // Subtraction would overflow here
        assert_eq!(int_cmp(&i64::MIN, &i64::MAX), Ordering::Less);
        assert_eq!(int_cmp(&i64::MAX, &i64::MIN), Ordering::Greater);
        assert_eq!(int_cmp(&7, &7), Ordering::Equal);
    }

    #[test]
    fn test_three_way_sign_mapping() {
        let by_len = three_way(|a: &str, b: &str| a.len() as i32 - b.len() as i32);
        assert_eq!(by_len.compare("ab", "abc"), Ordering::Less);
        assert_eq!(by_len.compare("abc", "xyz"), Ordering::Equal);
        assert_eq!(by_len.compare("abcd", "a"), Ordering::Greater);
    }

    #[test]
    fn test_closure_is_comparator() {
        let reversed = |a: &u8, b: &u8| b.cmp(a);
        assert_eq!(reversed.compare(&1, &2), Ordering::Greater);
    }
}
