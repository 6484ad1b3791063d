/*
 * Case-insensitive UTF-8 search: Rabin-Karp over a stream of case-folded
 * runes rather than raw bytes, so a one-to-many fold (ß -> ss) is
 * transparent to the comparison.
 *
 * The rolling hash update/remove arithmetic (subtract the outgoing term
 * scaled by the highest power, multiply, add the incoming term) mirrors the
 * large-checksum rolling update in the corpus's xdelta3-style hash-rolling
 * module, adapted from a fixed byte window to a variable-width folded-rune
 * window whose width in *source* bytes can change every slide step.
 */

use crate::casefold::fold;
use crate::rune;

const MULTIPLIER: u64 = 257;

/// Pulls folded runes out of a UTF-8 byte span, one at a time, buffering up
/// to the three runes a single source codepoint can expand into. Stops
/// (without error) at the first invalid byte, same policy as
/// [`rune::RuneUnpacker`].
struct FoldedRuneIter<'a> {
    data: &'a [u8],
    pos: usize,
    pending: [u32; 3],
    pending_len: u8,
    pending_idx: u8,
}

impl<'a> FoldedRuneIter<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            pending: [0; 3],
            pending_len: 0,
            pending_idx: 0,
        }
    }

    #[inline(always)]
    fn byte_pos(&self) -> usize {
        self.pos
    }

    /// Decode and fold exactly one source codepoint at the current position,
    /// advancing `pos` past it, and return how many folded runes it
    /// produced (0 if exhausted or invalid). The produced runes become the
    /// new pending buffer, replacing whatever was left of the previous one.
    fn advance_source_codepoint(&mut self) -> u8 {
        match rune::parse(&self.data[self.pos..]) {
            Some((cp, len)) => {
                self.pos += len as usize;
                let n = fold(cp, &mut self.pending);
                self.pending_len = n as u8;
                self.pending_idx = 0;
                n as u8
            }
            None => {
                self.pending_len = 0;
                self.pending_idx = 0;
                0
            }
        }
    }

    /// Pull the next folded rune, decoding a new source codepoint whenever
    /// the pending buffer has been drained.
    fn next_folded(&mut self) -> Option<u32> {
        if self.pending_idx >= self.pending_len {
            if self.advance_source_codepoint() == 0 {
                return None;
            }
        }
        let r = self.pending[self.pending_idx as usize];
        self.pending_idx += 1;
        Some(r)
    }
}

/// Compare two byte spans under full Unicode case folding, rune by folded
/// rune, returning on the first divergence or on exhaustion of either side.
pub fn order_case_insensitive(a: &[u8], b: &[u8]) -> std::cmp::Ordering {
    let mut ia = FoldedRuneIter::new(a);
    let mut ib = FoldedRuneIter::new(b);
    loop {
        match (ia.next_folded(), ib.next_folded()) {
            (Some(x), Some(y)) => match x.cmp(&y) {
                std::cmp::Ordering::Equal => continue,
                other => return other,
            },
            (Some(_), None) => return std::cmp::Ordering::Greater,
            (None, Some(_)) => return std::cmp::Ordering::Less,
            (None, None) => return std::cmp::Ordering::Equal,
        }
    }
}

/// Locate the first case-insensitive occurrence of `needle` in `haystack`.
///
/// Returns `(byte_offset, matched_byte_len)` into `haystack`, or `None` if
/// there is no match. An empty needle matches at offset 0 with length 0.
pub fn find_case_insensitive(haystack: &[u8], needle: &[u8]) -> Option<(usize, usize)> {
    if needle.is_empty() {
        return Some((0, 0));
    }

    // Needle pre-hash: accumulate hash and folded-rune count.
    let mut needle_iter = FoldedRuneIter::new(needle);
    let mut needle_hash = 0u64;
    let mut needle_len = 0usize;
    while let Some(r) = needle_iter.next_folded() {
        needle_hash = needle_hash.wrapping_mul(MULTIPLIER).wrapping_add(r as u64);
        needle_len += 1;
    }
    if needle_len == 0 {
        return None;
    }

    let mut highest_power = 1u64;
    for _ in 0..needle_len - 1 {
        highest_power = highest_power.wrapping_mul(MULTIPLIER);
    }

    let mut hay_iter = FoldedRuneIter::new(haystack);
    let mut window_start = 0usize;
    let mut window_end;
    let mut window_hash = 0u64;
    let mut window_len = 0usize;

    // Fill the initial window to exactly `needle_len` folded runes.
    loop {
        if window_len == needle_len {
            break;
        }
        match hay_iter.next_folded() {
            Some(r) => {
                window_hash = window_hash.wrapping_mul(MULTIPLIER).wrapping_add(r as u64);
                window_len += 1;
            }
            None => return None,
        }
    }
    window_end = hay_iter.byte_pos();

    loop {
        if window_len == needle_len
            && window_hash == needle_hash
            && windows_match(needle, &haystack[window_start..window_end])
        {
            return Some((window_start, window_end - window_start));
        }

        // Slide: drop the folded runes contributed by the source codepoint
        // at `window_start`, then refill from the haystack iterator.
        let mut dropper = FoldedRuneIter::new(&haystack[window_start..]);
        let dropped = dropper.advance_source_codepoint();
        if dropped == 0 {
            return None;
        }
        for k in 0..dropped {
            let old = dropper.pending[k as usize];
            window_hash = window_hash
                .wrapping_sub((old as u64).wrapping_mul(highest_power))
                .wrapping_mul(MULTIPLIER);
        }
        window_start += dropper.byte_pos();
        window_len -= dropped as usize;

        while window_len < needle_len {
            match hay_iter.next_folded() {
                Some(r) => {
                    window_hash = window_hash.wrapping_mul(MULTIPLIER).wrapping_add(r as u64);
                    window_len += 1;
                }
                None => return None,
            }
        }
        window_end = hay_iter.byte_pos();
    }
}

/// Verify a hash-hit by walking folded runes from both sides in lockstep,
/// confirming they exhaust at the same time.
fn windows_match(needle: &[u8], window: &[u8]) -> bool {
    let mut a = FoldedRuneIter::new(needle);
    let mut b = FoldedRuneIter::new(window);
    loop {
        match (a.next_folded(), b.next_folded()) {
            (Some(x), Some(y)) => {
                if x != y {
                    return false;
                }
            }
            (None, None) => return true,
            _ => return false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_needle_matches_at_start() {
        assert_eq!(find_case_insensitive(b"anything", b""), Some((0, 0)));
    }

    #[test]
    fn empty_haystack_with_needle_is_none() {
        assert_eq!(find_case_insensitive(b"", b"x"), None);
    }

    #[test]
    fn plain_ascii_case_insensitive_match() {
        assert_eq!(find_case_insensitive(b"Hello World", b"world"), Some((6, 5)));
    }

    #[test]
    fn no_match_returns_none() {
        assert_eq!(find_case_insensitive(b"hello", b"xyz"), None);
    }

    #[test]
    fn sharp_s_expansion_matches_double_s() {
        let haystack = "straße".as_bytes();
        let needle = "STRASSE".as_bytes();
        let (start, len) = find_case_insensitive(haystack, needle).unwrap();
        assert_eq!(start, 0);
        assert_eq!(len, haystack.len());
    }

    #[test]
    fn greek_final_sigma_matches_medial_sigma_needle() {
        let haystack = "Οδυσσευς".as_bytes();
        let needle = "ΟΔΥΣΣΕΥΣ".as_bytes();
        let (start, len) = find_case_insensitive(haystack, needle).unwrap();
        assert_eq!(start, 0);
        assert_eq!(len, haystack.len());
    }

    #[test]
    fn match_in_the_middle_of_the_haystack() {
        let haystack = "prefix STRASSE suffix".as_bytes();
        let needle = "straße".as_bytes();
        let (start, _len) = find_case_insensitive(haystack, needle).unwrap();
        assert_eq!(start, 7);
    }

    #[test]
    fn order_is_equal_under_expansion() {
        assert_eq!(
            order_case_insensitive("MASSE".as_bytes(), "Maße".as_bytes()),
            std::cmp::Ordering::Equal
        );
    }

    #[test]
    fn order_is_antisymmetric() {
        let a = "apple".as_bytes();
        let b = "banana".as_bytes();
        assert_eq!(order_case_insensitive(a, b), std::cmp::Ordering::Less);
        assert_eq!(order_case_insensitive(b, a), std::cmp::Ordering::Greater);
    }

    #[test]
    fn order_handles_prefix_relationship() {
        assert_eq!(
            order_case_insensitive("ABC".as_bytes(), "abcd".as_bytes()),
            std::cmp::Ordering::Less
        );
    }
}
