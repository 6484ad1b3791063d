/*
 * Error taxonomy for the string-collection kernels.
 *
 * Mirrors LibdeflateError: a plain discriminant-bearing enum, returned by
 * value, never thrown across the crate boundary.
 */

/// Result of a call to [`crate::sort::sort`], [`crate::intersect::intersect`], or any
/// other fallible kernel entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringKernelError {
    /* The scratch allocator could not satisfy a request. Fatal to the
     * operation; no partial output is produced. */
    BadAlloc,

    /* A strict UTF-8 check (`is_valid_utf8`) rejected the input. Not emitted
     * by the folding/finding paths themselves, which silently truncate at
     * the first bad byte instead (see module docs on `rune` and `find`). */
    InvalidUtf8,

    /* Reserved: the intersect engine's dedup precondition was found to be
     * violated. Only emitted by `intersect::intersect_checked`; plain
     * `intersect` never constructs this variant. */
    ContainsDuplicates,

    /* Catch-all for conditions that should be unreachable under the
     * documented contract. */
    Unknown,
}

impl std::fmt::Display for StringKernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            StringKernelError::BadAlloc => "scratch allocation failed",
            StringKernelError::InvalidUtf8 => "input is not valid UTF-8",
            StringKernelError::ContainsDuplicates => "collection contains duplicate strings",
            StringKernelError::Unknown => "unknown error",
        };
        f.write_str(msg)
    }
}

impl std::error::Error for StringKernelError {}
