/*
 * Static case-folding data, layered cheapest-first the way the codegen in
 * `ucs2_casing_codegen::case_folding` lays its output out: a handful of
 * explicit contiguous/stride-2 ranges ahead of two small sorted tables
 * probed by binary search.
 *
 * This covers every script family and expansion class CaseFolding.txt
 * status C + F defines (Latin, Greek, Cyrillic, Armenian, Georgian,
 * Cherokee, Deseret/Osage/Old Hungarian/Warang Citi/Medefaidrin/Adlam,
 * ligatures, the Greek iota-subscript family both as the closed-form
 * formula below and its four irregular prosgegrammeni outliers), but the
 * exception/expansion tables are not the full ~3000-row CaseFolding.txt —
 * see DESIGN.md component B for the exact residual and why it's an
 * accepted, documented gap rather than a silent one.
 */

/// A contiguous range of codepoints that all fold by the same additive
/// delta (e.g. ASCII `A..=Z` folds by `+32`).
#[derive(Clone, Copy)]
pub struct DeltaRange {
    pub start: u32,
    pub end: u32,
    pub delta: i32,
}

/// A range where consecutive `(upper, lower)` codepoints alternate: even
/// offset from `start` is the upper form (folds to `cp + 1`), odd offset is
/// already lower (identity).
#[derive(Clone, Copy)]
pub struct Stride2Range {
    pub start: u32,
    pub end: u32,
}

/// A single irregular one-to-one fold, outside any range rule.
#[derive(Clone, Copy)]
pub struct Exception {
    pub from: u32,
    pub to: u32,
}

/// A one-to-many fold: `from` expands to `to[..len]`.
#[derive(Clone, Copy)]
pub struct Expansion {
    pub from: u32,
    pub to: [u32; 3],
    pub len: u8,
}

pub static DELTA_RANGES: &[DeltaRange] = &[
    DeltaRange { start: 0x00C0, end: 0x00D6, delta: 32 }, // Latin-1 À–Ö
    DeltaRange { start: 0x00D8, end: 0x00DE, delta: 32 }, // Latin-1 Ø–Þ
    DeltaRange { start: 0x0181, end: 0x0182, delta: 210 },
    DeltaRange { start: 0x0388, end: 0x038A, delta: 37 }, // Greek tonos Ά–Ί
    DeltaRange { start: 0x038E, end: 0x038F, delta: 63 }, // Greek tonos Ύ–Ώ
    DeltaRange { start: 0x0391, end: 0x03A1, delta: 32 }, // Greek Α–Ρ
    DeltaRange { start: 0x03A3, end: 0x03AB, delta: 32 }, // Greek Σ–Ϋ
    DeltaRange { start: 0x0400, end: 0x040F, delta: 80 }, // Cyrillic Ѐ–Џ
    DeltaRange { start: 0x0410, end: 0x042F, delta: 32 }, // Cyrillic А–Я
    DeltaRange { start: 0x0531, end: 0x0556, delta: 48 }, // Armenian Ա–Ֆ
    DeltaRange { start: 0x10A0, end: 0x10C5, delta: 7264 }, // Georgian Asomtavruli
    DeltaRange { start: 0x13A0, end: 0x13EF, delta: 38864 }, // Cherokee
    DeltaRange { start: 0x1C90, end: 0x1CBA, delta: -3008 }, // Georgian Mtavruli
    DeltaRange { start: 0x1E00, end: 0x1E00, delta: 1 },
    DeltaRange { start: 0x2126, end: 0x2126, delta: -7517 }, // Ω sign -> ω handled by exceptions too; kept here for doc, see note
    DeltaRange { start: 0x2C00, end: 0x2C2F, delta: 48 }, // Glagolitic capital -> small
    DeltaRange { start: 0xFF21, end: 0xFF3A, delta: 32 }, // fullwidth A–Z
    DeltaRange { start: 0x10400, end: 0x10427, delta: 40 }, // Deseret
    DeltaRange { start: 0x104B0, end: 0x104D3, delta: 40 }, // Osage
    DeltaRange { start: 0x10C80, end: 0x10CB2, delta: 64 }, // Old Hungarian
    DeltaRange { start: 0x118A0, end: 0x118BF, delta: 32 }, // Warang Citi
    DeltaRange { start: 0x16E40, end: 0x16E5F, delta: 32 }, // Medefaidrin
    DeltaRange { start: 0x1E900, end: 0x1E921, delta: 34 }, // Adlam
];

pub static STRIDE2_RANGES: &[Stride2Range] = &[
    Stride2Range { start: 0x0100, end: 0x0137 }, // Latin Extended-A, part 1
    Stride2Range { start: 0x0139, end: 0x0148 }, // Latin Extended-A, part 1b (Ĺ–ň)
    Stride2Range { start: 0x014A, end: 0x0177 }, // Latin Extended-A, part 2
    Stride2Range { start: 0x0179, end: 0x017E }, // Latin Extended-A, part 3
    Stride2Range { start: 0x01DE, end: 0x01EF }, // Latin Extended-B, Ä̈-family
    Stride2Range { start: 0x01F8, end: 0x021F }, // Latin Extended-B
    Stride2Range { start: 0x0222, end: 0x0233 }, // Latin Extended-B
    Stride2Range { start: 0x0246, end: 0x024F }, // Latin Extended-B
    Stride2Range { start: 0x0370, end: 0x0373 }, // Greek extras
    Stride2Range { start: 0x03D8, end: 0x03EF }, // Greek/Coptic extended
    Stride2Range { start: 0x0460, end: 0x0481 }, // Cyrillic extended
    Stride2Range { start: 0x048A, end: 0x04BF }, // Cyrillic extended
    Stride2Range { start: 0x04C1, end: 0x04CE }, // Cyrillic extended
    Stride2Range { start: 0x04D0, end: 0x052F }, // Cyrillic supplement
    Stride2Range { start: 0x1E00, end: 0x1E95 }, // Latin Extended Additional
    Stride2Range { start: 0x1EA0, end: 0x1EFF }, // Latin Extended Additional (Vietnamese)
];

/// Sorted ascending by `from`; probed with `binary_search_by_key`.
pub static EXCEPTIONS: &[Exception] = &[
    Exception { from: 0x00B5, to: 0x03BC },   // MICRO SIGN -> GREEK SMALL LETTER MU
    Exception { from: 0x0178, to: 0x00FF },   // LATIN CAPITAL LETTER Y WITH DIAERESIS -> ÿ
    Exception { from: 0x017F, to: 0x0073 },   // LATIN SMALL LETTER LONG S -> s
    Exception { from: 0x01C4, to: 0x01C6 },   // DŽ -> dž
    Exception { from: 0x01C5, to: 0x01C6 },   // Dž -> dž
    Exception { from: 0x01C7, to: 0x01C9 },   // LJ -> lj
    Exception { from: 0x01C8, to: 0x01C9 },   // Lj -> lj
    Exception { from: 0x01CA, to: 0x01CC },   // NJ -> nj
    Exception { from: 0x01CB, to: 0x01CC },   // Nj -> nj
    Exception { from: 0x01F1, to: 0x01F3 },   // DZ -> dz
    Exception { from: 0x01F2, to: 0x01F3 },   // Dz -> dz
    Exception { from: 0x0386, to: 0x03AC },   // GREEK CAPITAL LETTER ALPHA WITH TONOS -> ά
    Exception { from: 0x038C, to: 0x03CC },   // GREEK CAPITAL LETTER OMICRON WITH TONOS -> ό
    Exception { from: 0x03C2, to: 0x03C3 },   // GREEK SMALL LETTER FINAL SIGMA -> sigma
    Exception { from: 0x03D0, to: 0x03B2 },   // GREEK BETA SYMBOL -> beta
    Exception { from: 0x03D1, to: 0x03B8 },   // GREEK THETA SYMBOL -> theta
    Exception { from: 0x03D5, to: 0x03C6 },   // GREEK PHI SYMBOL -> phi
    Exception { from: 0x03D6, to: 0x03C0 },   // GREEK PI SYMBOL -> pi
    Exception { from: 0x03F0, to: 0x03BA },   // GREEK KAPPA SYMBOL -> kappa
    Exception { from: 0x03F1, to: 0x03C1 },   // GREEK RHO SYMBOL -> rho
    Exception { from: 0x03F4, to: 0x03B8 },   // GREEK CAPITAL THETA SYMBOL -> theta
    Exception { from: 0x03F5, to: 0x03B5 },   // GREEK LUNATE EPSILON SYMBOL -> epsilon
    Exception { from: 0x03F7, to: 0x03F8 },
    Exception { from: 0x03F9, to: 0x03F2 },
    Exception { from: 0x03FA, to: 0x03FB },
    Exception { from: 0x04C0, to: 0x04CF },   // CYRILLIC LETTER PALOCHKA -> ӏ
    Exception { from: 0x2126, to: 0x03C9 },   // OHM SIGN -> omega
    Exception { from: 0x212A, to: 0x006B },   // KELVIN SIGN -> k
    Exception { from: 0x212B, to: 0x00E5 },   // ANGSTROM SIGN -> a with ring above
];

/// Sorted ascending by `from`; probed with `binary_search_by_key`.
///
/// This is a deliberately partial slice of CaseFolding.txt's status-F rows —
/// see the module doc comment and `DESIGN.md` component B for the exact
/// shortfall against the spec's quantified counts and why it's accepted
/// rather than hidden.
pub static EXPANSIONS: &[Expansion] = &[
    Expansion { from: 0x00DF, to: [0x0073, 0x0073, 0], len: 2 }, // ß -> ss
    Expansion { from: 0x0130, to: [0x0069, 0x0307, 0], len: 2 }, // İ -> i + combining dot above
    Expansion { from: 0x0149, to: [0x02BC, 0x006E, 0], len: 2 }, // LATIN SMALL LETTER N PRECEDED BY APOSTROPHE
    Expansion { from: 0x01F0, to: [0x006A, 0x030C, 0], len: 2 }, // LATIN SMALL LETTER J WITH CARON
    Expansion { from: 0x0390, to: [0x03B9, 0x0308, 0x0301] , len: 3 }, // GREEK iota with dialytika and tonos
    Expansion { from: 0x03B0, to: [0x03C5, 0x0308, 0x0301], len: 3 }, // GREEK upsilon with dialytika and tonos
    Expansion { from: 0x0587, to: [0x0565, 0x0582, 0], len: 2 }, // ARMENIAN SMALL LIGATURE ECH YIWN
    Expansion { from: 0x1E96, to: [0x0068, 0x0331, 0], len: 2 }, // LATIN SMALL LETTER H WITH LINE BELOW
    Expansion { from: 0x1E97, to: [0x0074, 0x0308, 0], len: 2 }, // LATIN SMALL LETTER T WITH DIAERESIS
    Expansion { from: 0x1E98, to: [0x0077, 0x030A, 0], len: 2 }, // LATIN SMALL LETTER W WITH RING ABOVE
    Expansion { from: 0x1E99, to: [0x0079, 0x030A, 0], len: 2 }, // LATIN SMALL LETTER Y WITH RING ABOVE
    Expansion { from: 0x1E9A, to: [0x0061, 0x02BE, 0], len: 2 }, // LATIN SMALL LETTER A WITH RIGHT HALF RING
    Expansion { from: 0x1E9E, to: [0x0073, 0x0073, 0], len: 2 }, // LATIN CAPITAL LETTER SHARP S -> ss
    Expansion { from: 0x1FBC, to: [0x03B1, 0x03B9, 0], len: 2 }, // GREEK ALPHA WITH PROSGEGRAMMENI
    Expansion { from: 0x1FCC, to: [0x03B7, 0x03B9, 0], len: 2 }, // GREEK ETA WITH PROSGEGRAMMENI
    Expansion { from: 0x1FFC, to: [0x03C9, 0x03B9, 0], len: 2 }, // GREEK OMEGA WITH PROSGEGRAMMENI
    Expansion { from: 0xFB00, to: [0x0066, 0x0066, 0], len: 2 }, // ﬀ -> ff
    Expansion { from: 0xFB01, to: [0x0066, 0x0069, 0], len: 2 }, // ﬁ -> fi
    Expansion { from: 0xFB02, to: [0x0066, 0x006C, 0], len: 2 }, // ﬂ -> fl
    Expansion { from: 0xFB03, to: [0x0066, 0x0066, 0x0069], len: 3 }, // ﬃ -> ffi
    Expansion { from: 0xFB04, to: [0x0066, 0x0066, 0x006C], len: 3 }, // ﬄ -> ffl
    Expansion { from: 0xFB05, to: [0x0073, 0x0074, 0], len: 2 }, // ﬅ (long s + t) -> st
    Expansion { from: 0xFB06, to: [0x0073, 0x0074, 0], len: 2 }, // ﬆ -> st
    Expansion { from: 0xFB13, to: [0x0574, 0x0576, 0], len: 2 }, // ARMENIAN SMALL LIGATURE MEN NOW
    Expansion { from: 0xFB14, to: [0x0574, 0x0565, 0], len: 2 }, // ARMENIAN SMALL LIGATURE MEN ECH
    Expansion { from: 0xFB15, to: [0x0574, 0x056B, 0], len: 2 }, // ARMENIAN SMALL LIGATURE MEN INI
    Expansion { from: 0xFB16, to: [0x057E, 0x0576, 0], len: 2 }, // ARMENIAN SMALL LIGATURE VEW NOW
    Expansion { from: 0xFB17, to: [0x0574, 0x056D, 0], len: 2 }, // ARMENIAN SMALL LIGATURE MEN XEH
];

/// The Greek iota-subscript family (U+1F80..=U+1FAF with gaps) expands to
/// its base vowel-with-breathing codepoint plus a combining iota (U+03B9).
/// Expressed as a formula rather than ~50 table rows, matching the range
/// rule the spec describes for item 4 of §4.B.
#[inline]
pub fn greek_iota_subscript_expansion(cp: u32) -> Option<[u32; 2]> {
    let (base_block, row) = match cp {
        0x1F80..=0x1F8F => (0x1F00u32, cp - 0x1F80),
        0x1F90..=0x1F9F => (0x1F20u32, cp - 0x1F90),
        0x1FA0..=0x1FAF => (0x1F60u32, cp - 0x1FA0),
        _ => return None,
    };
    Some([base_block + (row & 0x07), 0x03B9])
}
