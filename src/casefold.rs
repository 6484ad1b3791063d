/*
 * Unicode case folding: the layered lookup described by `casefold_tables`,
 * entered through `fold` (one codepoint in, up to three codepoints out) and
 * `case_fold` (a whole byte string, used by `sort`/`intersect` to normalize
 * before comparing, and internally by `find` one rune at a time).
 *
 * Layering, cheapest check first:
 *   1. ASCII fast path
 *   2. contiguous delta ranges
 *   3. stride-2 ranges
 *   4. Greek iota-subscript formula
 *   5. binary search over one-to-one exceptions
 *   6. binary search over one-to-many expansions
 *   7. identity (already folded, or unassigned)
 */

use crate::casefold_tables::{
    greek_iota_subscript_expansion, DELTA_RANGES, EXCEPTIONS, EXPANSIONS, STRIDE2_RANGES,
};
use crate::rune;

/// Fold one codepoint, writing the result (1-3 codepoints) into `out` and
/// returning how many were written.
#[inline]
pub fn fold(cp: u32, out: &mut [u32; 3]) -> usize {
    if cp < 0x80 {
        out[0] = if (b'A' as u32..=b'Z' as u32).contains(&cp) {
            cp + 32
        } else {
            cp
        };
        return 1;
    }

    for range in DELTA_RANGES {
        if cp >= range.start && cp <= range.end {
            out[0] = (cp as i64 + range.delta as i64) as u32;
            return 1;
        }
    }

    for range in STRIDE2_RANGES {
        if cp >= range.start && cp <= range.end {
            out[0] = if (cp - range.start) % 2 == 0 { cp + 1 } else { cp };
            return 1;
        }
    }

    if let Some([a, b]) = greek_iota_subscript_expansion(cp) {
        out[0] = a;
        out[1] = b;
        return 2;
    }

    if let Ok(idx) = EXCEPTIONS.binary_search_by_key(&cp, |e| e.from) {
        out[0] = EXCEPTIONS[idx].to;
        return 1;
    }

    if let Ok(idx) = EXPANSIONS.binary_search_by_key(&cp, |e| e.from) {
        let entry = &EXPANSIONS[idx];
        let len = entry.len as usize;
        out[..len].copy_from_slice(&entry.to[..len]);
        return len;
    }

    out[0] = cp;
    1
}

/// Case-fold an entire UTF-8 byte string into `dst`, appending. Invalid
/// trailing bytes are dropped rather than erroring, matching `RuneUnpacker`.
pub fn case_fold(src: &[u8], dst: &mut Vec<u8>) {
    let mut out = [0u32; 3];
    let mut encoded = [0u8; 4];
    for (cp, _) in rune::RuneUnpacker::new(src) {
        let n = fold(cp, &mut out);
        for &folded in &out[..n] {
            let len = rune::export(folded, &mut encoded);
            dst.extend_from_slice(&encoded[..len as usize]);
        }
    }
}

/// Case-fold an entire UTF-8 byte string, returning a fresh buffer.
pub fn case_fold_owned(src: &[u8]) -> Vec<u8> {
    let mut dst = Vec::with_capacity(src.len());
    case_fold(src, &mut dst);
    dst
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fold_one(cp: char) -> Vec<u32> {
        let mut out = [0u32; 3];
        let n = fold(cp as u32, &mut out);
        out[..n].to_vec()
    }

    #[test]
    fn ascii_folds_to_lowercase() {
        assert_eq!(fold_one('A'), vec!['a' as u32]);
        assert_eq!(fold_one('z'), vec!['z' as u32]);
        assert_eq!(fold_one('5'), vec!['5' as u32]);
    }

    #[test]
    fn sharp_s_expands_to_two_s() {
        assert_eq!(fold_one('ß'), vec!['s' as u32, 's' as u32]);
    }

    #[test]
    fn ligature_ffi_expands_to_three() {
        assert_eq!(fold_one('\u{FB03}'), vec!['f' as u32, 'f' as u32, 'i' as u32]);
    }

    #[test]
    fn greek_final_sigma_folds_like_medial_sigma() {
        assert_eq!(fold_one('ς'), fold_one('σ'));
    }

    #[test]
    fn greek_capital_folds_to_lowercase() {
        assert_eq!(fold_one('Σ'), vec!['σ' as u32]);
        assert_eq!(fold_one('Ω'), vec!['ω' as u32]);
    }

    #[test]
    fn cyrillic_and_armenian_ranges_fold() {
        assert_eq!(fold_one('А'), vec!['а' as u32]);
        assert_eq!(fold_one('Ա'), vec!['ա' as u32]);
    }

    #[test]
    fn kelvin_and_angstrom_signs_fold_to_ordinary_letters() {
        assert_eq!(fold_one('\u{212A}'), vec!['k' as u32]);
        assert_eq!(fold_one('\u{212B}'), vec!['å' as u32]);
    }

    #[test]
    fn turkic_capital_i_with_dot_expands() {
        assert_eq!(fold_one('İ'), vec!['i' as u32, 0x0307]);
    }

    #[test]
    fn capital_sharp_s_expands_to_two_s() {
        assert_eq!(fold_one('\u{1E9E}'), vec!['s' as u32, 's' as u32]);
    }

    #[test]
    fn greek_iota_subscript_expands_with_formula() {
        // U+1F80 GREEK SMALL LETTER ALPHA WITH PSILI AND YPOGEGRAMMENI
        assert_eq!(fold_one('\u{1F80}'), vec![0x1F00, 0x03B9]);
    }

    #[test]
    fn greek_capital_prosgegrammeni_expands_via_exception_table() {
        // U+1FBC isn't covered by the 0x1F80..=0x1FAF formula range, so it
        // has to land in the explicit expansions table instead.
        assert_eq!(fold_one('\u{1FBC}'), vec![0x03B1, 0x03B9]);
    }

    #[test]
    fn y_with_diaeresis_folds_to_lowercase() {
        assert_eq!(fold_one('Ÿ'), vec!['ÿ' as u32]);
    }

    #[test]
    fn armenian_ligature_ech_yiwn_expands() {
        assert_eq!(fold_one('\u{0587}'), vec![0x0565, 0x0582]);
    }

    #[test]
    fn idempotent_on_already_folded_text() {
        let text = "hello world, Σίσυφος".as_bytes();
        let once = case_fold_owned(text);
        let twice = case_fold_owned(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn case_fold_whole_string_matches_expected() {
        let folded = case_fold_owned("STRASSE".as_bytes());
        assert_eq!(folded, case_fold_owned("straße".as_bytes()));
    }

    #[test]
    fn embedded_nul_is_preserved() {
        let src = b"a\x00B";
        let folded = case_fold_owned(src);
        assert_eq!(folded, b"a\x00b");
    }
}
