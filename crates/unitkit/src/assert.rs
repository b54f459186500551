//! Assertion engine: pure predicates over two values
//!
//! Every function here is total and silent: it returns whether the relation
//! held and never prints. The printing integer assertions live on
//! [`Suite`](crate::Suite), which evaluates these predicates and reports a
//! diagnostic when one fails.
//!
//! # API
//!
//! ## Ordering
//! - `equal_by(a, b, cmp)`: comparison is zero
//! - `not_equal_by(a, b, cmp)`: comparison is non-zero
//! - `less_by(a, b, cmp)`: comparison is negative
//! - `less_or_equal_by(a, b, cmp)`: comparison is non-positive
//! - `greater_by(a, b, cmp)`: negation of `less_or_equal_by`
//! - `greater_or_equal_by(a, b, cmp)`: negation of `less_by`
//!
//! ## Presence
//! - `is_null(option)` / `is_not_null(option)`
//! - `is_null_ptr(ptr)` / `is_not_null_ptr(ptr)`

use crate::cmp::Comparator;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/// One of the six ordering relations an assertion can check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Check {
    Equal,
    NotEqual,
    Less,
    LessOrEqual,
    Greater,
    GreaterOrEqual,
}

impl Check {
    /// All relations, in declaration order
    pub const ALL: [Check; 6] = [
        Check::Equal,
        Check::NotEqual,
        Check::Less,
        Check::LessOrEqual,
        Check::Greater,
        Check::GreaterOrEqual,
    ];

    /// Whether the relation holds for a comparison outcome
    pub fn holds(self, ordering: Ordering) -> bool {
        match self {
            Check::Equal => ordering == Ordering::Equal,
            Check::NotEqual => !Check::Equal.holds(ordering),
            Check::Less => ordering == Ordering::Less,
            Check::LessOrEqual => ordering != Ordering::Greater,
            Check::Greater => !Check::LessOrEqual.holds(ordering),
            Check::GreaterOrEqual => !Check::Less.holds(ordering),
        }
    }

    /// Text placed between the two operands when the relation fails
    pub fn failure_phrase(self) -> &'static str {
        match self {
            Check::Equal => "does not equal",
            Check::NotEqual => "equals",
            Check::Less => "not less than",
            Check::LessOrEqual => "not less than or equal to",
            Check::Greater => "not greater than",
            Check::GreaterOrEqual => "not greater or equal to",
        }
    }

    /// Evaluate the relation between `a` and `b` under `cmp`
    pub fn evaluate<T: ?Sized>(self, a: &T, b: &T, cmp: &impl Comparator<T>) -> bool {
        self.holds(cmp.compare(a, b))
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Check::Equal => "equal",
            Check::NotEqual => "not_equal",
            Check::Less => "less",
            Check::LessOrEqual => "less_or_equal",
            Check::Greater => "greater",
            Check::GreaterOrEqual => "greater_or_equal",
        };
        f.write_str(name)
    }
}

// ============================================================================
// Ordering assertions
// ============================================================================

/// True iff `cmp` reports `a` and `b` as equal
pub fn equal_by<T: ?Sized>(a: &T, b: &T, cmp: &impl Comparator<T>) -> bool {
    Check::Equal.evaluate(a, b, cmp)
}

/// True iff `cmp` reports `a` and `b` as different
pub fn not_equal_by<T: ?Sized>(a: &T, b: &T, cmp: &impl Comparator<T>) -> bool {
    !equal_by(a, b, cmp)
}

/// True iff `a` orders strictly before `b`
pub fn less_by<T: ?Sized>(a: &T, b: &T, cmp: &impl Comparator<T>) -> bool {
    Check::Less.evaluate(a, b, cmp)
}

/// True iff `a` does not order after `b`
pub fn less_or_equal_by<T: ?Sized>(a: &T, b: &T, cmp: &impl Comparator<T>) -> bool {
    Check::LessOrEqual.evaluate(a, b, cmp)
}

/// True iff `a` orders strictly after `b`
pub fn greater_by<T: ?Sized>(a: &T, b: &T, cmp: &impl Comparator<T>) -> bool {
    !less_or_equal_by(a, b, cmp)
}

/// True iff `a` does not order before `b`
pub fn greater_or_equal_by<T: ?Sized>(a: &T, b: &T, cmp: &impl Comparator<T>) -> bool {
    !less_by(a, b, cmp)
}

// ============================================================================
// Presence assertions
// ============================================================================

/// True iff the reference is absent
pub fn is_null<T: ?Sized>(value: Option<&T>) -> bool {
    value.is_none()
}

/// True iff the reference is present
pub fn is_not_null<T: ?Sized>(value: Option<&T>) -> bool {
    !is_null(value)
}

/// True iff the raw pointer is null
pub fn is_null_ptr<T>(ptr: *const T) -> bool {
    ptr.is_null()
}

/// True iff the raw pointer is non-null
pub fn is_not_null_ptr<T>(ptr: *const T) -> bool {
    !is_null_ptr(ptr)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cmp::{int_cmp, three_way};
    use std::ptr;

    #[test]
    fn test_holds_table() {
        use Ordering::*;
        let expected = [
            (Check::Equal, [false, true, false]),
            (Check::NotEqual, [true, false, true]),
            (Check::Less, [true, false, false]),
            (Check::LessOrEqual, [true, true, false]),
            (Check::Greater, [false, false, true]),
            (Check::GreaterOrEqual, [false, true, true]),
        ];
        for (check, row) in expected {
            for (ordering, want) in [Less, Equal, Greater].into_iter().zip(row) {
                assert_eq!(check.holds(ordering), want, "{} on {:?}", check, ordering);
            }
        }
    }

    #[test]
    fn test_generic_over_strings() {
        let cmp = |a: &str, b: &str| a.cmp(b);
        assert!(equal_by("abc", "abc", &cmp));
        assert!(less_by("abc", "abd", &cmp));
        assert!(greater_or_equal_by("b", "a", &cmp));
        assert!(!greater_by("a", "a", &cmp));
    }

    #[test]
    fn test_with_three_way_comparator() {
        let cmp = three_way(|a: &i64, b: &i64| (*a - *b) as i32);
        assert!(less_or_equal_by(&4, &4, &cmp));
        assert!(not_equal_by(&4, &5, &cmp));
    }

    #[test]
    fn test_is_null_on_options() {
        let value = 3;
        assert!(is_null::<i32>(None));
        assert!(is_not_null(Some(&value)));
        assert!(!is_null(Some(&value)));
    }

    #[test]
    fn test_is_null_on_pointers() {
        let value = 3u8;
        assert!(is_null_ptr::<u8>(ptr::null()));
        assert!(is_not_null_ptr(&value as *const u8));
    }

    #[test]
    fn test_int_cmp_matches_check() {
        assert!(Check::Greater.evaluate(&5, &3, &int_cmp));
        assert!(!Check::Greater.evaluate(&3, &5, &int_cmp));
    }

    #[test]
    fn test_failure_phrases() {
        assert_eq!(Check::Equal.failure_phrase(), "does not equal");
        assert_eq!(Check::GreaterOrEqual.failure_phrase(), "not greater or equal to");
    }
}
