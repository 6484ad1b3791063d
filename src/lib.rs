// #![cfg_attr(debug_assertions, deny(warnings))]

#[macro_use]
extern crate static_assertions;

pub mod alloc;
pub mod casefold;
mod casefold_tables;
pub mod collection;
pub mod dispatch;
pub mod error;
pub mod find;
pub mod intersect;
pub mod rune;
pub mod sort;
pub mod tape;

pub use alloc::{Allocator, StdAllocator};
pub use collection::StringCollection;
pub use error::StringKernelError;
pub use find::{find_case_insensitive, order_case_insensitive};
pub use intersect::{intersect, intersect_checked};
pub use rune::RuneUnpacker;
pub use sort::sort;
pub use tape::StringTape;

/// Case-fold an entire UTF-8 byte string into `dst`, appending.
#[inline]
pub fn case_fold(src: &[u8], dst: &mut Vec<u8>) {
    casefold::case_fold(src, dst)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_intersect_find_compose_end_to_end() {
        let a = vec!["Apple", "Banana", "cherry"];
        let b = vec!["BANANA", "cherry", "date"];

        let mut order: Vec<usize> = (0..a.len()).collect();
        sort(&a, &StdAllocator, &mut order).unwrap();
        let sorted: Vec<&str> = order.iter().map(|&i| a[i]).collect();
        assert_eq!(sorted, vec!["Apple", "Banana", "cherry"]);

        let mut out_a = vec![0usize; a.len().min(b.len())];
        let mut out_b = vec![0usize; a.len().min(b.len())];
        let n = intersect(&a, &b, &StdAllocator, 1, &mut out_a, &mut out_b).unwrap();
        assert_eq!(n, 1); // exact-byte match: only "cherry" in both.

        assert!(find_case_insensitive(b"Banana split", b"BANANA").is_some());

        let mut folded = Vec::new();
        case_fold(b"STRASSE", &mut folded);
        assert_eq!(folded, b"strasse");
    }
}
