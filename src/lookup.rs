//! Directional lookup semantics over sorted sequences.
//!
//! A search (see [`crate::search`]) answers "is the value there, and if not,
//! where would it go". A [`Lookup`] direction refines that raw answer into
//! "which element do I actually want relative to the target":
//!
//! | Direction | Returns |
//! |-----------|---------|
//! | `LT`      | greatest element strictly smaller than the target |
//! | `LE`      | the target itself, else the greatest smaller element |
//! | `EQ`      | the target itself, else the encoded miss |
//! | `GE`      | the target itself, else the smallest greater element |
//! | `GT`      | successor position of an exact match, else the smallest greater element |
//!
//! The translation from raw search result to directional index is a single
//! shared algorithm, [`search_to_lookup`].
//!
//! Searches resolve duplicate keys to the leftmost match, which makes `LT`
//! strict (the position before a leftmost match always holds a smaller
//! key). `GT` on an exact match steps one position right, so when the
//! target is duplicated that position may hold an equal key; `GT` is
//! strict only when the target is absent or occurs once.

/// Accepts an exact match (set for `LE`, `EQ`, `GE`).
const EQ_BIT: u8 = 0b001;
/// Accepts an element smaller than the target (set for `LT`, `LE`).
const LT_BIT: u8 = 0b010;
/// Accepts an element greater than the target (set for `GT`, `GE`).
const GT_BIT: u8 = 0b100;

/// Directional search mode: which element to return relative to a target.
///
/// The discriminants compose three orthogonal bits (equality, less, greater);
/// at most one of the less/greater bits is ever set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Lookup {
    /// Exact match only.
    EQ = EQ_BIT,
    /// Greatest element strictly smaller than the target.
    LT = LT_BIT,
    /// Exact match, or the greatest smaller element.
    LE = LT_BIT | EQ_BIT,
    /// Successor position of an exact match (an equal key when the target
    /// is duplicated), else the smallest greater element.
    GT = GT_BIT,
    /// Exact match, or the smallest greater element.
    GE = GT_BIT | EQ_BIT,
}

impl Lookup {
    /// Whether an exact match satisfies this direction (`LE`, `EQ`, `GE`).
    #[inline]
    pub fn is_equality_ok(self) -> bool {
        self as u8 & EQ_BIT != 0
    }

    /// Whether an element smaller than the target satisfies this direction.
    #[inline]
    pub fn accepts_smaller(self) -> bool {
        self as u8 & LT_BIT != 0
    }

    /// Whether an element greater than the target satisfies this direction.
    #[inline]
    pub fn accepts_larger(self) -> bool {
        self as u8 & GT_BIT != 0
    }
}

/// Translates a raw search result into the index satisfying `lookup`.
///
/// `search_result` uses the shared encoding: a found index `i >= 0`, or the
/// one's complement of the insertion point on a miss. The return value is an
/// index in `[0, length - 1]`, or a negative sentinel: `!0` when no element
/// satisfies the direction on the low side (no predecessor), `!length` when
/// none does on the high side (no successor). `EQ` passes a miss through
/// unchanged so the caller still learns the insertion point.
///
/// For an empty sequence every direction yields `!0` (`-1`).
pub fn search_to_lookup(length: usize, lookup: Lookup, search_result: isize) -> isize {
    let length = length as isize;
    if search_result >= 0 {
        // Exact match at `search_result`.
        if lookup.is_equality_ok() {
            return search_result;
        }
        if lookup.accepts_smaller() {
            // LT: step to the predecessor.
            if search_result == 0 {
                !0
            } else {
                search_result - 1
            }
        } else {
            // GT: step to the successor.
            if search_result == length - 1 {
                !length
            } else {
                search_result + 1
            }
        }
    } else {
        if lookup == Lookup::EQ {
            return search_result;
        }
        let ip = !search_result;
        if lookup.accepts_smaller() {
            // LT/LE: predecessor of the insertion point.
            if ip == 0 {
                !0
            } else {
                ip - 1
            }
        } else {
            // GE/GT agree on a miss: no element lies strictly between the
            // target and its successor, so the candidate at `ip` is correct
            // for both.
            if ip == length {
                !length
            } else {
                ip
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Lookup; 5] = [Lookup::LT, Lookup::LE, Lookup::EQ, Lookup::GE, Lookup::GT];

    #[test]
    fn test_bit_composition() {
        assert!(Lookup::EQ.is_equality_ok());
        assert!(Lookup::LE.is_equality_ok());
        assert!(Lookup::GE.is_equality_ok());
        assert!(!Lookup::LT.is_equality_ok());
        assert!(!Lookup::GT.is_equality_ok());

        assert!(Lookup::LT.accepts_smaller() && Lookup::LE.accepts_smaller());
        assert!(Lookup::GT.accepts_larger() && Lookup::GE.accepts_larger());
        for dir in ALL {
            assert!(
                !(dir.accepts_smaller() && dir.accepts_larger()),
                "{dir:?} sets both direction bits"
            );
        }
    }

    #[test]
    fn test_empty_sequence_always_yields_not_zero() {
        for dir in ALL {
            assert_eq!(search_to_lookup(0, dir, !0), !0, "{dir:?}");
        }
    }

    #[test]
    fn test_exact_match_single_element() {
        // Sequence of one element, found at 0.
        assert_eq!(search_to_lookup(1, Lookup::LT, 0), !0);
        assert_eq!(search_to_lookup(1, Lookup::LE, 0), 0);
        assert_eq!(search_to_lookup(1, Lookup::EQ, 0), 0);
        assert_eq!(search_to_lookup(1, Lookup::GE, 0), 0);
        assert_eq!(search_to_lookup(1, Lookup::GT, 0), !1);
    }

    #[test]
    fn test_exact_match_interior() {
        // [1, 2, 4], target 2 found at 1.
        assert_eq!(search_to_lookup(3, Lookup::LT, 1), 0);
        assert_eq!(search_to_lookup(3, Lookup::LE, 1), 1);
        assert_eq!(search_to_lookup(3, Lookup::EQ, 1), 1);
        assert_eq!(search_to_lookup(3, Lookup::GE, 1), 1);
        assert_eq!(search_to_lookup(3, Lookup::GT, 1), 2);
    }

    #[test]
    fn test_exact_match_at_bounds() {
        // Found at the first element: LT has no predecessor.
        assert_eq!(search_to_lookup(4, Lookup::LT, 0), !0);
        // Found at the last element: GT has no successor.
        assert_eq!(search_to_lookup(4, Lookup::GT, 3), !4);
    }

    #[test]
    fn test_miss_interior() {
        // [1, 4], target 2 missed with insertion point 1 (encoded !1 == -2).
        let miss = !1;
        assert_eq!(search_to_lookup(2, Lookup::LT, miss), 0);
        assert_eq!(search_to_lookup(2, Lookup::LE, miss), 0);
        assert_eq!(search_to_lookup(2, Lookup::EQ, miss), !1);
        assert_eq!(search_to_lookup(2, Lookup::GE, miss), 1);
        assert_eq!(search_to_lookup(2, Lookup::GT, miss), 1);
    }

    #[test]
    fn test_miss_before_range() {
        // Insertion point 0: nothing smaller exists.
        assert_eq!(search_to_lookup(3, Lookup::LT, !0), !0);
        assert_eq!(search_to_lookup(3, Lookup::LE, !0), !0);
        assert_eq!(search_to_lookup(3, Lookup::EQ, !0), !0);
        assert_eq!(search_to_lookup(3, Lookup::GE, !0), 0);
        assert_eq!(search_to_lookup(3, Lookup::GT, !0), 0);
    }

    #[test]
    fn test_miss_after_range() {
        // [0, 1], target 2 missed with insertion point 2: nothing greater.
        let miss = !2;
        assert_eq!(search_to_lookup(2, Lookup::LT, miss), 1);
        assert_eq!(search_to_lookup(2, Lookup::LE, miss), 1);
        assert_eq!(search_to_lookup(2, Lookup::EQ, miss), !2);
        assert_eq!(search_to_lookup(2, Lookup::GE, miss), !2);
        assert_eq!(search_to_lookup(2, Lookup::GT, miss), !2);
    }
}
