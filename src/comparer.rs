use std::cmp::Ordering;

use crate::timestamp::Timestamp;

/// A comparison capability over a key type `T`.
///
/// `compare` must implement a strict total order consistent with the
/// sortedness of any sequence the comparer is used against, and must be
/// stateless: the same pair of keys always yields the same ordering.
///
/// A comparer may additionally be *diffable*: [`diff`](KeyComparer::diff)
/// returns a signed linear distance `a - b` whose sign matches `compare` and
/// whose magnitude is usable for linear interpolation between two keys.
/// Interpolation search requires a diffable comparer and fails fast when
/// handed one that is not; an inconsistent `compare`/`diff` pair produces
/// wrong (but memory-safe) interpolation estimates that the binary-search
/// fallback then resolves against `compare` alone.
pub trait KeyComparer<T> {
    /// Total-order comparison of `a` against `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Whether [`diff`](KeyComparer::diff) is meaningful for this comparer.
    #[inline]
    fn is_diffable(&self) -> bool {
        false
    }

    /// Signed linear distance `a - b`.
    ///
    /// Only defined when [`is_diffable`](KeyComparer::is_diffable) returns
    /// `true`; the default implementation panics.
    fn diff(&self, a: &T, b: &T) -> i64 {
        let _ = (a, b);
        panic!("diff() called on a comparer that is not diffable");
    }
}

// Lets a `&dyn KeyComparer<T>` flow into the generic search functions, so the
// dynamic-dispatch path can be differentially tested against the
// monomorphized one.
impl<T, C: KeyComparer<T> + ?Sized> KeyComparer<T> for &C {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (**self).compare(a, b)
    }

    #[inline]
    fn is_diffable(&self) -> bool {
        (**self).is_diffable()
    }

    #[inline]
    fn diff(&self, a: &T, b: &T) -> i64 {
        (**self).diff(a, b)
    }
}

/// Comparer for any `Ord` key. Never diffable, so it works with binary
/// search and lookup but is rejected by interpolation search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OrdComparer;

impl<T: Ord> KeyComparer<T> for OrdComparer {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Diffable comparer for the built-in fixed-width integer keys and
/// [`Timestamp`]. Zero-sized, so the search functions monomorphize into
/// direct comparisons with no indirection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NativeComparer;

macro_rules! native_comparer {
    ($($t:ty => |$a:ident, $b:ident| $diff:expr;)*) => {$(
        impl KeyComparer<$t> for NativeComparer {
            #[inline]
            fn compare(&self, a: &$t, b: &$t) -> Ordering {
                a.cmp(b)
            }

            #[inline]
            fn is_diffable(&self) -> bool {
                true
            }

            #[inline]
            fn diff(&self, $a: &$t, $b: &$t) -> i64 {
                $diff
            }
        }
    )*};
}

// 64-bit diffs wrap at the extreme edges of the key range; the interpolation
// estimate is refined by exact comparisons afterwards, so a wrapped estimate
// costs extra probes, never a wrong result.
native_comparer! {
    i32 => |a, b| i64::from(*a) - i64::from(*b);
    u32 => |a, b| i64::from(*a) - i64::from(*b);
    i64 => |a, b| a.wrapping_sub(*b);
    u64 => |a, b| a.wrapping_sub(*b) as i64;
}

impl KeyComparer<Timestamp> for NativeComparer {
    #[inline]
    fn compare(&self, a: &Timestamp, b: &Timestamp) -> Ordering {
        a.cmp(b)
    }

    #[inline]
    fn is_diffable(&self) -> bool {
        true
    }

    #[inline]
    fn diff(&self, a: &Timestamp, b: &Timestamp) -> i64 {
        a.diff(*b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_native_compare_matches_ord() {
        assert_eq!(NativeComparer.compare(&1i64, &2i64), Ordering::Less);
        assert_eq!(NativeComparer.compare(&2i64, &2i64), Ordering::Equal);
        assert_eq!(NativeComparer.compare(&3i64, &2i64), Ordering::Greater);
    }

    #[test]
    fn test_diff_sign_matches_compare_sign() {
        let pairs: &[(i64, i64)] = &[(1, 5), (5, 1), (7, 7), (-3, 3), (0, -10)];
        for &(a, b) in pairs {
            let cmp = NativeComparer.compare(&a, &b);
            let diff = NativeComparer.diff(&a, &b);
            assert_eq!(diff.signum(), cmp as i64, "a={a} b={b}");
        }
    }

    #[test]
    fn test_u64_diff_is_signed() {
        assert_eq!(NativeComparer.diff(&3u64, &10u64), -7);
        assert_eq!(NativeComparer.diff(&10u64, &3u64), 7);
    }

    #[test]
    fn test_i32_diff_has_no_overflow() {
        assert_eq!(
            NativeComparer.diff(&i32::MAX, &i32::MIN),
            i64::from(i32::MAX) - i64::from(i32::MIN)
        );
    }

    #[test]
    fn test_timestamp_diff() {
        let a = Timestamp::from_nanos(1_000);
        let b = Timestamp::from_nanos(250);
        assert_eq!(NativeComparer.diff(&a, &b), 750);
        assert_eq!(NativeComparer.diff(&b, &a), -750);
    }

    #[test]
    fn test_ord_comparer_is_not_diffable() {
        assert!(!KeyComparer::<i64>::is_diffable(&OrdComparer));
        assert!(KeyComparer::<i64>::is_diffable(&NativeComparer));
    }

    #[test]
    #[should_panic(expected = "not diffable")]
    fn test_non_diffable_diff_panics() {
        OrdComparer.diff(&1i64, &2i64);
    }

    #[test]
    fn test_dyn_comparer_agrees_with_static() {
        let dynamic: &dyn KeyComparer<i64> = &NativeComparer;
        assert_eq!(dynamic.compare(&1, &2), NativeComparer.compare(&1, &2));
        assert_eq!(dynamic.diff(&9, &4), NativeComparer.diff(&9, &4));
        assert!(dynamic.is_diffable());
    }
}
