//! Search algorithms over sorted contiguous sequences.
//!
//! All searches share one result encoding: a found index `i >= 0`, or on a
//! miss the one's complement `!ip` of the insertion point `ip ∈ [0, length]`
//! at which the value would keep the sequence sorted. `!0 == -1`, so every
//! miss is strictly negative.
//!
//! When the value occurs more than once, every variant returns the
//! *leftmost* matching index. That canonical choice is what lets binary
//! search, interpolation search, and their sub-range and raw-memory shapes
//! agree bit-for-bit on every input, duplicates included.
//!
//! Three call shapes are provided for each algorithm:
//!
//! - a safe slice shape ([`binary_search`], [`interpolation_search`], …);
//! - a sub-range shape over any [`Vector`] capability (`*_in`), searching
//!   `[start, start + length)` of a larger buffer without copying; indices
//!   in results are absolute (offset by `start`), so a miss at the sub-range
//!   boundary encodes as `!start` or `!(start + length)`;
//! - an unsafe raw-memory shape (`*_raw`) taking a start pointer and length,
//!   for callers that manage bounds themselves.
//!
//! The `*_lookup` wrappers run a search and then resolve a [`Lookup`]
//! direction via [`search_to_lookup`].

use std::cmp::Ordering;

use crate::comparer::KeyComparer;
use crate::lookup::{search_to_lookup, Lookup};

/// Positional read access to a contiguous run of keys.
///
/// This is the abstract indexable-sequence capability used by the `*_in`
/// call shapes; slices and `Vec`s implement it directly. Implementations
/// return elements by value (keys are small `Copy` types) and may assume
/// `index < count()` — the search algorithms never read outside the
/// sub-range they were given, and the sub-range itself is only validated
/// against `count()` by a debug assertion.
pub trait Vector<T> {
    /// Number of elements accessible through this vector.
    fn count(&self) -> usize;

    /// The element at `index`.
    fn get(&self, index: usize) -> T;
}

impl<T: Copy> Vector<T> for [T] {
    #[inline]
    fn count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn get(&self, index: usize) -> T {
        self[index]
    }
}

impl<T: Copy> Vector<T> for Vec<T> {
    #[inline]
    fn count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn get(&self, index: usize) -> T {
        self[index]
    }
}

// ── binary search ──────────────────────────────────────────────────────

/// Binary search over a sorted slice. Result encoding per the module docs.
///
/// # Example
/// ```
/// use sortsearch::{binary_search, NativeComparer};
///
/// let keys: &[i64] = &[1, 2, 4];
/// assert_eq!(binary_search(keys, &2, &NativeComparer), 1);
/// assert_eq!(binary_search(keys, &3, &NativeComparer), !2); // insert at 2
/// ```
#[inline]
pub fn binary_search<T, C>(data: &[T], value: &T, comparer: &C) -> isize
where
    T: Copy,
    C: KeyComparer<T>,
{
    binary_search_in(data, 0, data.len(), value, comparer)
}

/// Binary search over the sub-range `[start, start + length)` of `v`.
///
/// Returned indices are absolute; a miss encodes the absolute insertion
/// point, so a value belonging before the sub-range yields `!start` and one
/// belonging after it yields `!(start + length)`. Release builds do not
/// bounds-check the sub-range against `v.count()`.
pub fn binary_search_in<T, V, C>(
    v: &V,
    start: usize,
    length: usize,
    value: &T,
    comparer: &C,
) -> isize
where
    V: Vector<T> + ?Sized,
    C: KeyComparer<T>,
{
    debug_assert!(
        start + length <= v.count(),
        "sub-range [{start}, {start} + {length}) exceeds vector count {}",
        v.count()
    );

    let mut lo = start as isize;
    let mut hi = start as isize + length as isize - 1;
    let mut hit: isize = -1;

    // For length == 0 the loop never runs (hi == lo - 1) and the result is
    // the encoded insertion point at `start`.
    while lo <= hi {
        // Unsigned average: `lo + hi` cannot wrap the way a signed sum can.
        let mid = ((lo as usize + hi as usize) >> 1) as isize;
        match comparer.compare(&v.get(mid as usize), value) {
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid - 1,
            Ordering::Equal => {
                // Keep scanning left to land on the leftmost duplicate.
                hit = mid;
                hi = mid - 1;
            }
        }
    }

    if hit >= 0 {
        hit
    } else {
        !lo
    }
}

/// Binary search over raw contiguous memory.
///
/// # Safety
///
/// `start` must be valid for reads of `length` consecutive, initialized
/// elements of `T` for the duration of the call. No bounds are checked;
/// this is the performance-oriented contract for callers that already own
/// the bounds.
#[inline]
pub unsafe fn binary_search_raw<T, C>(
    start: *const T,
    length: usize,
    value: &T,
    comparer: &C,
) -> isize
where
    T: Copy,
    C: KeyComparer<T>,
{
    let data = std::slice::from_raw_parts(start, length);
    binary_search_in(data, 0, length, value, comparer)
}

// ── interpolation search ───────────────────────────────────────────────

/// Interpolation search over a sorted slice of a diffable key type.
///
/// A hybrid of three phases: a linear-interpolation estimate of the target
/// position (exact for uniformly spaced keys such as regular timestamps),
/// exponential doubling-step probing from the estimate toward the target,
/// and a final binary search over the bracketed sub-range. Produces results
/// identical to [`binary_search`] on every input; non-uniform spacing only
/// costs probes, never correctness.
///
/// # Panics
///
/// Panics if `comparer` is not diffable — the interpolation estimate is
/// meaningless without a numeric distance between keys.
#[inline]
pub fn interpolation_search<T, C>(data: &[T], value: &T, comparer: &C) -> isize
where
    T: Copy,
    C: KeyComparer<T>,
{
    interpolation_search_in(data, 0, data.len(), value, comparer)
}

/// Interpolation search over the sub-range `[start, start + length)` of `v`.
///
/// Same absolute-index result encoding as [`binary_search_in`]; same
/// diffable-comparer requirement as [`interpolation_search`].
pub fn interpolation_search_in<T, V, C>(
    v: &V,
    start: usize,
    length: usize,
    value: &T,
    comparer: &C,
) -> isize
where
    V: Vector<T> + ?Sized,
    C: KeyComparer<T>,
{
    assert!(
        comparer.is_diffable(),
        "interpolation search requires a diffable comparer"
    );
    debug_assert!(
        start + length <= v.count(),
        "sub-range [{start}, {start} + {length}) exceeds vector count {}",
        v.count()
    );

    if length <= 1 {
        return binary_search_in(v, start, length, value, comparer);
    }

    let lo = start as isize;
    let hi = (start + length - 1) as isize;
    let vlo = v.get(lo as usize);
    let vhi = v.get(hi as usize);

    let range = comparer.diff(&vhi, &vlo);
    if range <= 0 {
        // The whole bracket holds one repeated key; the interpolation
        // estimate would divide by zero. Resolve by binary search.
        return binary_search_in(v, start, length, value, comparer);
    }

    // Estimated position, assuming near-uniform key spacing. Floating-point
    // division is deliberate: integer division is markedly slower and the
    // estimate is refined by exact comparisons, so rounding error only
    // costs probes.
    let toward = comparer.diff(value, &vlo);
    let estimate = ((hi - lo) as f64 * toward as f64 / range as f64) as isize;
    let mut i = lo + estimate.clamp(0, hi - lo);

    // Exponential probing toward the target with doubling offsets. The
    // probe predicate is lower-bound style: an exact hit keeps probing
    // left, so duplicates resolve to the leftmost index. The loop ends
    // with a bracket [blo, bhi] such that everything left of blo is
    // `< value` and `v[bhi] >= value` (or bhi is the range edge).
    let mut offset: isize = 1;
    let blo: isize;
    let bhi: isize;
    if comparer.compare(&v.get(i as usize), value) == Ordering::Less {
        // Probe right: everything at and left of `i` is smaller.
        loop {
            i += offset;
            if i > hi {
                blo = i - offset + 1;
                bhi = hi;
                break;
            }
            if comparer.compare(&v.get(i as usize), value) == Ordering::Less {
                offset <<= 1;
            } else {
                blo = i - offset + 1;
                bhi = i;
                break;
            }
        }
    } else {
        // Probe left: `v[i]` is already >= value.
        loop {
            i -= offset;
            if i < lo {
                blo = lo;
                bhi = i + offset;
                break;
            }
            if comparer.compare(&v.get(i as usize), value) == Ordering::Less {
                blo = i + 1;
                bhi = i + offset;
                break;
            }
            offset <<= 1;
        }
    }

    // `binary_search_in` already reports absolute indices, which is exactly
    // the bracket-to-absolute translation the hybrid needs.
    binary_search_in(v, blo as usize, (bhi - blo + 1) as usize, value, comparer)
}

/// Interpolation search over raw contiguous memory.
///
/// # Safety
///
/// Same contract as [`binary_search_raw`]: `start` must be valid for reads
/// of `length` consecutive, initialized elements of `T`.
#[inline]
pub unsafe fn interpolation_search_raw<T, C>(
    start: *const T,
    length: usize,
    value: &T,
    comparer: &C,
) -> isize
where
    T: Copy,
    C: KeyComparer<T>,
{
    let data = std::slice::from_raw_parts(start, length);
    interpolation_search_in(data, 0, length, value, comparer)
}

// ── lookup wrappers ────────────────────────────────────────────────────

/// Rebases a sub-range-relative result to absolute indices.
#[inline]
fn absolutize(start: isize, result: isize) -> isize {
    if result >= 0 {
        result + start
    } else {
        !(!result + start)
    }
}

/// Rebases an absolute result to sub-range-relative indices.
#[inline]
fn relativize(start: isize, result: isize) -> isize {
    if result >= 0 {
        result - start
    } else {
        !(!result - start)
    }
}

#[inline]
fn lookup_in_range(start: usize, length: usize, lookup: Lookup, raw: isize) -> isize {
    let start = start as isize;
    absolutize(start, search_to_lookup(length, lookup, relativize(start, raw)))
}

/// Binary search plus directional resolution.
///
/// # Example
/// ```
/// use sortsearch::{binary_lookup, Lookup, NativeComparer};
///
/// let keys: &[i64] = &[1, 4];
/// // No exact 2; LE resolves to the predecessor, GE to the successor.
/// assert_eq!(binary_lookup(keys, &2, Lookup::LE, &NativeComparer), 0);
/// assert_eq!(binary_lookup(keys, &2, Lookup::GE, &NativeComparer), 1);
/// assert_eq!(binary_lookup(keys, &2, Lookup::EQ, &NativeComparer), !1);
/// ```
#[inline]
pub fn binary_lookup<T, C>(data: &[T], value: &T, lookup: Lookup, comparer: &C) -> isize
where
    T: Copy,
    C: KeyComparer<T>,
{
    binary_lookup_in(data, 0, data.len(), value, lookup, comparer)
}

/// [`binary_search_in`] plus directional resolution.
///
/// Sentinels are absolute like the search results: no predecessor within
/// the sub-range encodes as `!start`, no successor as `!(start + length)`.
#[inline]
pub fn binary_lookup_in<T, V, C>(
    v: &V,
    start: usize,
    length: usize,
    value: &T,
    lookup: Lookup,
    comparer: &C,
) -> isize
where
    V: Vector<T> + ?Sized,
    C: KeyComparer<T>,
{
    let raw = binary_search_in(v, start, length, value, comparer);
    lookup_in_range(start, length, lookup, raw)
}

/// Binary search plus directional resolution over raw contiguous memory.
///
/// # Safety
///
/// Same contract as [`binary_search_raw`].
#[inline]
pub unsafe fn binary_lookup_raw<T, C>(
    start: *const T,
    length: usize,
    value: &T,
    lookup: Lookup,
    comparer: &C,
) -> isize
where
    T: Copy,
    C: KeyComparer<T>,
{
    let data = std::slice::from_raw_parts(start, length);
    binary_lookup_in(data, 0, length, value, lookup, comparer)
}

/// Interpolation search plus directional resolution.
#[inline]
pub fn interpolation_lookup<T, C>(data: &[T], value: &T, lookup: Lookup, comparer: &C) -> isize
where
    T: Copy,
    C: KeyComparer<T>,
{
    interpolation_lookup_in(data, 0, data.len(), value, lookup, comparer)
}

/// [`interpolation_search_in`] plus directional resolution; sentinel
/// encoding as in [`binary_lookup_in`].
#[inline]
pub fn interpolation_lookup_in<T, V, C>(
    v: &V,
    start: usize,
    length: usize,
    value: &T,
    lookup: Lookup,
    comparer: &C,
) -> isize
where
    V: Vector<T> + ?Sized,
    C: KeyComparer<T>,
{
    let raw = interpolation_search_in(v, start, length, value, comparer);
    lookup_in_range(start, length, lookup, raw)
}

/// Interpolation search plus directional resolution over raw memory.
///
/// # Safety
///
/// Same contract as [`binary_search_raw`].
#[inline]
pub unsafe fn interpolation_lookup_raw<T, C>(
    start: *const T,
    length: usize,
    value: &T,
    lookup: Lookup,
    comparer: &C,
) -> isize
where
    T: Copy,
    C: KeyComparer<T>,
{
    let data = std::slice::from_raw_parts(start, length);
    interpolation_lookup_in(data, 0, length, value, lookup, comparer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparer::{NativeComparer, OrdComparer};
    use crate::timestamp::Timestamp;

    fn both_searches(data: &[i64], value: i64) -> (isize, isize) {
        (
            binary_search(data, &value, &NativeComparer),
            interpolation_search(data, &value, &NativeComparer),
        )
    }

    #[test]
    fn test_empty() {
        let (b, i) = both_searches(&[], 42);
        assert_eq!(b, !0);
        assert_eq!(i, !0);
    }

    #[test]
    fn test_single_element() {
        assert_eq!(both_searches(&[5], 5), (0, 0));
        assert_eq!(both_searches(&[5], 4), (!0, !0));
        assert_eq!(both_searches(&[5], 6), (!1, !1));
    }

    #[test]
    fn test_found_and_missed() {
        let data = &[1i64, 2, 4];
        assert_eq!(both_searches(data, 1), (0, 0));
        assert_eq!(both_searches(data, 2), (1, 1));
        assert_eq!(both_searches(data, 4), (2, 2));
        assert_eq!(both_searches(data, 0), (!0, !0));
        assert_eq!(both_searches(data, 3), (!2, !2));
        assert_eq!(both_searches(data, 9), (!3, !3));
    }

    #[test]
    fn test_duplicates_resolve_leftmost() {
        let data = &[1i64, 3, 3, 3, 5, 5, 9];
        assert_eq!(both_searches(data, 3), (1, 1));
        assert_eq!(both_searches(data, 5), (4, 4));
        assert_eq!(both_searches(data, 1), (0, 0));
    }

    #[test]
    fn test_all_equal_range_short_circuits() {
        // `range == 0` must not divide; both hit the binary fallback.
        let data = &[7i64; 64];
        assert_eq!(both_searches(data, 7), (0, 0));
        assert_eq!(both_searches(data, 6), (!0, !0));
        assert_eq!(both_searches(data, 8), (!64, !64));
    }

    #[test]
    fn test_clustered_keys() {
        // Wildly non-uniform spacing pushes the estimate far off; the
        // doubling probe must still converge to the exact answer.
        let data = &[0i64, 1, 2, 3, 1_000_000_000, 1_000_000_001];
        for (idx, &k) in data.iter().enumerate() {
            assert_eq!(both_searches(data, k), (idx as isize, idx as isize));
        }
        assert_eq!(both_searches(data, 500), (!4, !4));
        assert_eq!(both_searches(data, 1_000_000_002), (!6, !6));
    }

    #[test]
    fn test_subrange_matches_materialized_copy() {
        let data: Vec<i64> = (0..100).map(|i| i * 10).collect();
        let (start, len) = (25usize, 50usize);
        let copy: Vec<i64> = data[start..start + len].to_vec();

        for target in [-5, 0, 249, 250, 255, 500, 749, 750, 995, 2000] {
            let sub = binary_search_in(data.as_slice(), start, len, &target, &NativeComparer);
            let whole = binary_search(&copy, &target, &NativeComparer);
            let expected = if whole >= 0 {
                whole + start as isize
            } else {
                !(!whole + start as isize)
            };
            assert_eq!(sub, expected, "target {target}");

            let isub =
                interpolation_search_in(data.as_slice(), start, len, &target, &NativeComparer);
            assert_eq!(isub, sub, "target {target}");
        }
    }

    #[test]
    fn test_subrange_boundary_encoding() {
        let data = &[10i64, 20, 30, 40, 50];
        // Searching [1, 4): value before the sub-range inserts at its start.
        assert_eq!(binary_search_in(data.as_slice(), 1, 3, &5, &NativeComparer), !1);
        // Value after the sub-range inserts at its end.
        assert_eq!(binary_search_in(data.as_slice(), 1, 3, &45, &NativeComparer), !4);
    }

    #[test]
    fn test_raw_shape_matches_slice_shape() {
        let data = &[2i64, 3, 5, 8, 13, 21];
        for target in 0..25i64 {
            let safe = binary_search(data, &target, &NativeComparer);
            let raw = unsafe { binary_search_raw(data.as_ptr(), data.len(), &target, &NativeComparer) };
            assert_eq!(safe, raw);
            let iraw = unsafe {
                interpolation_search_raw(data.as_ptr(), data.len(), &target, &NativeComparer)
            };
            assert_eq!(safe, iraw);
        }
    }

    #[test]
    fn test_timestamp_keys() {
        let data: Vec<Timestamp> = (0..1000)
            .map(|i| Timestamp::from_nanos(1_600_000_000_000_000_000 + i * 1_000_000_000))
            .collect();
        let hit = Timestamp::from_nanos(1_600_000_000_000_000_000 + 500 * 1_000_000_000);
        let miss = Timestamp::from_nanos(1_600_000_000_000_000_000 + 500 * 1_000_000_000 + 1);
        assert_eq!(interpolation_search(&data, &hit, &NativeComparer), 500);
        assert_eq!(interpolation_search(&data, &miss, &NativeComparer), !501);
        assert_eq!(binary_search(&data, &miss, &NativeComparer), !501);
    }

    #[test]
    #[should_panic(expected = "diffable")]
    fn test_interpolation_rejects_non_diffable_comparer() {
        interpolation_search(&[1i64, 2, 3], &2, &OrdComparer);
    }

    #[test]
    fn test_binary_search_accepts_non_diffable_comparer() {
        assert_eq!(binary_search(&[1i64, 2, 3], &2, &OrdComparer), 1);
    }

    #[test]
    fn test_lookup_wrappers_concrete() {
        let data = &[1i64, 2, 4];
        let c = &NativeComparer;
        assert_eq!(binary_lookup(data, &2, Lookup::LT, c), 0);
        assert_eq!(binary_lookup(data, &2, Lookup::LE, c), 1);
        assert_eq!(binary_lookup(data, &2, Lookup::EQ, c), 1);
        assert_eq!(binary_lookup(data, &2, Lookup::GE, c), 1);
        assert_eq!(binary_lookup(data, &2, Lookup::GT, c), 2);
        for dir in [Lookup::LT, Lookup::LE, Lookup::EQ, Lookup::GE, Lookup::GT] {
            assert_eq!(
                interpolation_lookup(data, &2, dir, c),
                binary_lookup(data, &2, dir, c)
            );
        }
    }

    #[test]
    fn test_lookup_in_subrange_sentinels() {
        let data = &[10i64, 20, 30, 40, 50];
        let c = &NativeComparer;
        // Within [1, 4): no element smaller than 20 exists in the range.
        assert_eq!(binary_lookup_in(data.as_slice(), 1, 3, &20, Lookup::LT, c), !1);
        // No element greater than 40 exists in the range.
        assert_eq!(binary_lookup_in(data.as_slice(), 1, 3, &40, Lookup::GT, c), !4);
        // Interior steps stay absolute.
        assert_eq!(binary_lookup_in(data.as_slice(), 1, 3, &30, Lookup::GT, c), 3);
        assert_eq!(binary_lookup_in(data.as_slice(), 1, 3, &30, Lookup::LT, c), 1);
    }
}
