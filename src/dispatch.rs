/*
 * CPU feature dispatch for the intersect engine.
 *
 * Same shape as the teacher's Huffman fast-path check and the rolling-hash
 * forward-match dispatch in the corpus: an `is_x86_feature_detected!` probe
 * memoized behind a `OnceLock`, checked once per process and reused on
 * every call. No global mutable dispatch state.
 */

use std::sync::OnceLock;

/// Whether the AVX2-accelerated intersect probe (`intersect::simd`) should
/// be used on this CPU. `false` on any non-x86_64 target or an x86_64 CPU
/// without AVX2.
#[inline]
pub fn avx2_available() -> bool {
    #[cfg(target_arch = "x86_64")]
    {
        static AVAILABLE: OnceLock<bool> = OnceLock::new();
        return *AVAILABLE.get_or_init(|| is_x86_feature_detected!("avx2"));
    }

    #[allow(unreachable_code)]
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn avx2_available_is_stable_across_calls() {
        assert_eq!(avx2_available(), avx2_available());
    }
}
