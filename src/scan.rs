//! Unordered equality scan with SIMD-batched fast paths.
//!
//! [`index_of_simple`] — a plain scalar scan — is the specification; the
//! batched variants are runtime-dispatched performance paths that must
//! return the same index for every input. Dispatch never executes an
//! unsupported instruction: AVX2 → SSE2 → scalar on x86_64, NEON on
//! aarch64, scalar everywhere else.
//!
//! The batched paths step scalar-wise until the cursor is vector-aligned,
//! compare whole lanes against a broadcast needle, and finish any remainder
//! scalar-wise, so the first matching index is always the one reported.

use crate::timestamp::Timestamp;

/// Scalar linear scan for equality. Works on any sequence, sorted or not.
///
/// Returns the first matching index, or `-1` when the value is absent or
/// the slice is empty.
#[inline]
pub fn index_of_simple<T: PartialEq>(data: &[T], value: &T) -> isize {
    for (i, item) in data.iter().enumerate() {
        if item == value {
            return i as isize;
        }
    }
    -1
}

/// Linear scan for equality over any element type.
///
/// Generic types take the scalar path; use the width-specialized variants
/// ([`index_of_i64`], [`index_of_i32`], …) when the element is a fixed-width
/// integer or [`Timestamp`] and the scan is hot.
#[inline]
pub fn index_of<T: PartialEq>(data: &[T], value: &T) -> isize {
    index_of_simple(data, value)
}

/// Equality scan over 64-bit signed lanes.
#[inline]
pub fn index_of_i64(data: &[i64], value: i64) -> isize {
    #[cfg(target_arch = "x86_64")]
    unsafe {
        if std::is_x86_feature_detected!("avx2") {
            return index_of_i64_avx2(data, value);
        }
        // SSE2 is part of the x86_64 baseline, but keep a defensive check.
        if std::is_x86_feature_detected!("sse2") {
            return index_of_i64_sse2(data, value);
        }
    }

    #[cfg(target_arch = "aarch64")]
    unsafe {
        if std::arch::is_aarch64_feature_detected!("neon") {
            return index_of_i64_neon(data, value);
        }
    }

    index_of_simple(data, &value)
}

/// Equality scan over 64-bit unsigned lanes (bit-identical to the signed scan).
#[inline]
pub fn index_of_u64(data: &[u64], value: u64) -> isize {
    // Equality of u64 is equality of the raw bits.
    let bits = unsafe { std::slice::from_raw_parts(data.as_ptr() as *const i64, data.len()) };
    index_of_i64(bits, value as i64)
}

/// Equality scan over timestamps, read as their raw 64-bit representation.
#[inline]
pub fn index_of_timestamp(data: &[Timestamp], value: Timestamp) -> isize {
    // Timestamp is repr(transparent) over i64, so lane equality is exact.
    let bits = unsafe { std::slice::from_raw_parts(data.as_ptr() as *const i64, data.len()) };
    index_of_i64(bits, value.as_nanos())
}

/// Equality scan over 32-bit signed lanes.
#[inline]
pub fn index_of_i32(data: &[i32], value: i32) -> isize {
    #[cfg(target_arch = "x86_64")]
    unsafe {
        if std::is_x86_feature_detected!("avx2") {
            return index_of_i32_avx2(data, value);
        }
        if std::is_x86_feature_detected!("sse2") {
            return index_of_i32_sse2(data, value);
        }
    }

    #[cfg(target_arch = "aarch64")]
    unsafe {
        if std::arch::is_aarch64_feature_detected!("neon") {
            return index_of_i32_neon(data, value);
        }
    }

    index_of_simple(data, &value)
}

/// Equality scan over 32-bit unsigned lanes.
#[inline]
pub fn index_of_u32(data: &[u32], value: u32) -> isize {
    let bits = unsafe { std::slice::from_raw_parts(data.as_ptr() as *const i32, data.len()) };
    index_of_i32(bits, value as i32)
}

// ── x86_64 ─────────────────────────────────────────────────────────────

#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2")]
unsafe fn index_of_i64_avx2(data: &[i64], value: i64) -> isize {
    use std::arch::x86_64::*;

    let ptr = data.as_ptr();
    let len = data.len();
    let mut i = 0usize;

    // Step to a 32-byte boundary so the batched loads are aligned.
    while i < len && (ptr.add(i) as usize) & 31 != 0 {
        if *ptr.add(i) == value {
            return i as isize;
        }
        i += 1;
    }

    let needle = _mm256_set1_epi64x(value);
    while i + 4 <= len {
        let lanes = _mm256_load_si256(ptr.add(i) as *const __m256i);
        let eq = _mm256_cmpeq_epi64(lanes, needle);
        let mask = _mm256_movemask_epi8(eq);
        if mask != 0 {
            return (i + mask.trailing_zeros() as usize / 8) as isize;
        }
        i += 4;
    }

    while i < len {
        if *ptr.add(i) == value {
            return i as isize;
        }
        i += 1;
    }
    -1
}

#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "sse2")]
unsafe fn index_of_i64_sse2(data: &[i64], value: i64) -> isize {
    use std::arch::x86_64::*;

    let ptr = data.as_ptr();
    let len = data.len();
    let mut i = 0usize;

    while i < len && (ptr.add(i) as usize) & 15 != 0 {
        if *ptr.add(i) == value {
            return i as isize;
        }
        i += 1;
    }

    // SSE2 has no 64-bit compare; a 64-bit lane is equal when both of its
    // 32-bit halves compare equal.
    let needle = _mm_set1_epi64x(value);
    while i + 2 <= len {
        let lanes = _mm_load_si128(ptr.add(i) as *const __m128i);
        let eq32 = _mm_cmpeq_epi32(lanes, needle);
        let mask = _mm_movemask_epi8(eq32) as u32;
        if mask & 0x00FF == 0x00FF {
            return i as isize;
        }
        if mask & 0xFF00 == 0xFF00 {
            return (i + 1) as isize;
        }
        i += 2;
    }

    while i < len {
        if *ptr.add(i) == value {
            return i as isize;
        }
        i += 1;
    }
    -1
}

#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2")]
unsafe fn index_of_i32_avx2(data: &[i32], value: i32) -> isize {
    use std::arch::x86_64::*;

    let ptr = data.as_ptr();
    let len = data.len();
    let mut i = 0usize;

    while i < len && (ptr.add(i) as usize) & 31 != 0 {
        if *ptr.add(i) == value {
            return i as isize;
        }
        i += 1;
    }

    let needle = _mm256_set1_epi32(value);
    while i + 8 <= len {
        let lanes = _mm256_load_si256(ptr.add(i) as *const __m256i);
        let eq = _mm256_cmpeq_epi32(lanes, needle);
        let mask = _mm256_movemask_epi8(eq);
        if mask != 0 {
            return (i + mask.trailing_zeros() as usize / 4) as isize;
        }
        i += 8;
    }

    while i < len {
        if *ptr.add(i) == value {
            return i as isize;
        }
        i += 1;
    }
    -1
}

#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "sse2")]
unsafe fn index_of_i32_sse2(data: &[i32], value: i32) -> isize {
    use std::arch::x86_64::*;

    let ptr = data.as_ptr();
    let len = data.len();
    let mut i = 0usize;

    while i < len && (ptr.add(i) as usize) & 15 != 0 {
        if *ptr.add(i) == value {
            return i as isize;
        }
        i += 1;
    }

    let needle = _mm_set1_epi32(value);
    while i + 4 <= len {
        let lanes = _mm_load_si128(ptr.add(i) as *const __m128i);
        let eq = _mm_cmpeq_epi32(lanes, needle);
        let mask = _mm_movemask_epi8(eq) as u32;
        if mask != 0 {
            return (i + mask.trailing_zeros() as usize / 4) as isize;
        }
        i += 4;
    }

    while i < len {
        if *ptr.add(i) == value {
            return i as isize;
        }
        i += 1;
    }
    -1
}

// ── aarch64 ────────────────────────────────────────────────────────────

#[cfg(target_arch = "aarch64")]
#[target_feature(enable = "neon")]
unsafe fn index_of_i64_neon(data: &[i64], value: i64) -> isize {
    use std::arch::aarch64::*;

    let ptr = data.as_ptr();
    let len = data.len();
    let mut i = 0usize;

    let needle = vdupq_n_s64(value);
    while i + 2 <= len {
        let lanes = vld1q_s64(ptr.add(i));
        let eq = vceqq_s64(lanes, needle);
        if vgetq_lane_u64::<0>(eq) != 0 {
            return i as isize;
        }
        if vgetq_lane_u64::<1>(eq) != 0 {
            return (i + 1) as isize;
        }
        i += 2;
    }

    while i < len {
        if *ptr.add(i) == value {
            return i as isize;
        }
        i += 1;
    }
    -1
}

#[cfg(target_arch = "aarch64")]
#[target_feature(enable = "neon")]
unsafe fn index_of_i32_neon(data: &[i32], value: i32) -> isize {
    use std::arch::aarch64::*;

    let ptr = data.as_ptr();
    let len = data.len();
    let mut i = 0usize;

    let needle = vdupq_n_s32(value);
    while i + 4 <= len {
        let lanes = vld1q_s32(ptr.add(i));
        let eq = vceqq_s32(lanes, needle);
        // Any-lane check first; resolving the exact lane is the rare case.
        if vmaxvq_u32(eq) != 0 {
            if vgetq_lane_u32::<0>(eq) != 0 {
                return i as isize;
            }
            if vgetq_lane_u32::<1>(eq) != 0 {
                return (i + 1) as isize;
            }
            if vgetq_lane_u32::<2>(eq) != 0 {
                return (i + 2) as isize;
            }
            return (i + 3) as isize;
        }
        i += 4;
    }

    while i < len {
        if *ptr.add(i) == value {
            return i as isize;
        }
        i += 1;
    }
    -1
}
