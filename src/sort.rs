/*
 * Lexicographic sort over a `StringCollection`, producing a permutation
 * rather than moving strings around (the collection stays put; the caller
 * owns ordering through an index array, same contract as the original
 * Collection-based sort this module generalizes).
 *
 * The fast path packs each string's first `W` bytes into a big-endian-
 * ordered machine word ("sort window") so that comparing two strings'
 * common prefix is one integer comparison instead of a byte loop.
 * Packing is done by reading up to `W = size_of::<u64>() - 1` content bytes,
 * zero-padding short strings, and writing `min(remaining, W)` into the one
 * byte left over (the "exported length" byte) before byte-reversing the
 * whole word for the `u64::from_le_bytes` load. The reversal moves what
 * would be the first byte (the most significant one lexicographically)
 * into the word's most significant position after a little-endian load, so
 * plain integer `<` matches byte-string `<` for prefixes that don't share
 * all `W` bytes. The length byte lands in the least-significant position
 * after reversal, which is what lets a short string (e.g. `"a"`) compare
 * less than a longer string sharing the same first byte and an otherwise-
 * NUL tail (e.g. `"a\x00"`): both windows have identical content bytes, but
 * `"a"`'s length byte is 1 and `"a\x00"`'s is 2, so the packed words still
 * differ. Strings tied on their first window (content bytes AND length
 * byte both equal, meaning the run wasn't exhausted by either string
 * ending) recurse with the next window, `W` bytes further in, rather than
 * falling back to a byte-by-byte comparator for the whole key.
 */

use crate::alloc::{Allocator, Scratch};
use crate::collection::StringCollection;
use crate::error::StringKernelError;

const W: usize = std::mem::size_of::<u64>() - 1;
const INSERTION_SORT_THRESHOLD: usize = 32;

#[inline(always)]
fn sort_window<C: StringCollection>(collection: &C, index: usize, start_byte: usize) -> u64 {
    let s = collection.get(index);
    let mut buf = [0u8; W + 1];
    let remaining = s.len().saturating_sub(start_byte);
    let avail = remaining.min(W);
    if avail > 0 {
        buf[..avail].copy_from_slice(&s[start_byte..start_byte + avail]);
    }
    buf[W] = avail as u8;
    buf.reverse();
    u64::from_le_bytes(buf)
}

/// The exported-length byte packed into `window` (least-significant byte
/// after `sort_window`'s reversal): `min(remaining, W)` for whichever
/// string produced it.
#[inline(always)]
fn window_length(window: u64) -> u8 {
    (window & 0xff) as u8
}

/// Sort `order` (expected to start as `0..collection.count()`, but any
/// permutation is accepted) so that `collection.get(order[i])` is
/// non-decreasing in byte-lexicographic order.
pub fn sort<C: StringCollection>(
    collection: &C,
    alloc: &dyn Allocator,
    order: &mut [usize],
) -> Result<(), StringKernelError> {
    if order.len() <= 1 {
        return Ok(());
    }

    // Scratch windows, one u64 per entry in `order`, refreshed at each
    // recursion depth for the slice currently being refined.
    let mut windows: Scratch<u64> =
        Scratch::uninit(alloc, order.len()).ok_or(StringKernelError::BadAlloc)?;

    quicksort(collection, order, windows.as_mut_slice(), 0);
    Ok(())
}

fn quicksort<C: StringCollection>(
    collection: &C,
    order: &mut [usize],
    windows: &mut [u64],
    start_byte: usize,
) {
    if order.len() <= 1 {
        return;
    }
    if order.len() <= INSERTION_SORT_THRESHOLD {
        insertion_sort(collection, order, start_byte);
        return;
    }

    for (slot, &idx) in windows.iter_mut().zip(order.iter()) {
        *slot = sort_window(collection, idx, start_byte);
    }

    let pivot = median_of_three(windows, order.len());

    // Dutch national flag 3-way partition against `pivot`.
    let (mut lt, mut i, mut gt) = (0usize, 0usize, order.len());
    while i < gt {
        match windows[i].cmp(&pivot) {
            std::cmp::Ordering::Less => {
                order.swap(lt, i);
                windows.swap(lt, i);
                lt += 1;
                i += 1;
            }
            std::cmp::Ordering::Equal => {
                i += 1;
            }
            std::cmp::Ordering::Greater => {
                gt -= 1;
                order.swap(i, gt);
                windows.swap(i, gt);
            }
        }
    }

    let (left, rest) = order.split_at_mut(lt);
    let (mid, right) = rest.split_at_mut(gt - lt);
    let (wleft, wrest) = windows.split_at_mut(lt);
    let (wmid, wright) = wrest.split_at_mut(gt - lt);

    quicksort(collection, left, wleft, start_byte);
    quicksort(collection, right, wright, start_byte);

    // The tied run shares both its content bytes AND its exported-length
    // byte (all entries collapsed to the same `pivot` word), so every
    // window in `wmid` carries the same length byte; a length byte equal
    // to `W` means the window was full and the comparison didn't see past
    // it, so the run needs refining one window further in. A length byte
    // less than `W` means every string in the run ended inside this window
    // and was already fully ordered by the integer compare (short-string
    // zero-padding plus the length byte itself broke any remaining ties).
    // A run of length 1 is already sorted.
    if mid.len() > 1 && window_length(wmid[0]) == W as u8 {
        quicksort(collection, mid, wmid, start_byte + W);
    }
}

/// Median-of-three pivot selection over the first, middle, and last window
/// in the active slice.
#[inline]
fn median_of_three(windows: &[u64], len: usize) -> u64 {
    let a = windows[0];
    let b = windows[len / 2];
    let c = windows[len - 1];
    if a < b {
        if b < c {
            b
        } else if a < c {
            c
        } else {
            a
        }
    } else if a < c {
        a
    } else if b < c {
        c
    } else {
        b
    }
}

fn insertion_sort<C: StringCollection>(collection: &C, order: &mut [usize], start_byte: usize) {
    for i in 1..order.len() {
        let mut j = i;
        while j > 0
            && byte_cmp_from(collection, order[j - 1], order[j], start_byte)
                == std::cmp::Ordering::Greater
        {
            order.swap(j - 1, j);
            j -= 1;
        }
    }
}

#[inline]
fn byte_cmp_from<C: StringCollection>(
    collection: &C,
    a: usize,
    b: usize,
    start_byte: usize,
) -> std::cmp::Ordering {
    let sa = collection.get(a);
    let sb = collection.get(b);
    let from = start_byte.min(sa.len()).min(sb.len());
    sa[from.min(sa.len())..].cmp(&sb[from.min(sb.len())..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alloc::StdAllocator;

    fn sorted_strings(data: &[&str]) -> Vec<String> {
        let alloc = StdAllocator;
        let mut order: Vec<usize> = (0..data.len()).collect();
        sort(&data.to_vec(), &alloc, &mut order).unwrap();
        order.into_iter().map(|i| data[i].to_string()).collect()
    }

    #[test]
    fn empty_and_singleton_are_no_ops() {
        let alloc = StdAllocator;
        let mut order: Vec<usize> = vec![];
        let data: Vec<&str> = vec![];
        sort(&data, &alloc, &mut order).unwrap();
        assert!(order.is_empty());

        let mut order = vec![0usize];
        let data: &[&str] = &["only"];
        sort(&data, &alloc, &mut order).unwrap();
        assert_eq!(order, vec![0]);
    }

    #[test]
    fn sorts_plain_ascii() {
        let data = ["banana", "apple", "cherry", "apricot"];
        assert_eq!(sorted_strings(&data), vec!["apple", "apricot", "banana", "cherry"]);
    }

    #[test]
    fn sorts_with_many_duplicates() {
        let data = ["b", "a", "b", "a", "c", "a", "b"];
        let got = sorted_strings(&data);
        assert_eq!(got, vec!["a", "a", "a", "b", "b", "b", "c"]);
    }

    #[test]
    fn sorts_strings_with_embedded_nul() {
        let data = vec![
            b"b\x00b".to_vec(),
            b"a\x00z".to_vec(),
            b"a\x00a".to_vec(),
            b"a".to_vec(),
        ];
        let alloc = StdAllocator;
        let mut order: Vec<usize> = (0..data.len()).collect();
        sort(&data, &alloc, &mut order).unwrap();
        let got: Vec<&[u8]> = order.iter().map(|&i| data[i].as_slice()).collect();
        assert_eq!(got, vec![b"a".as_slice(), b"a\x00a", b"a\x00z", b"b\x00b"]);
    }

    #[test]
    fn sorts_strings_longer_than_one_window() {
        let data = [
            "aaaaaaaaaaaaaaaaaaaaaaaaaz",
            "aaaaaaaaaaaaaaaaaaaaaaaaaa",
            "aaaaaaaaaaaaaaaaaaaaaaaaam",
        ];
        assert_eq!(
            sorted_strings(&data),
            vec![
                "aaaaaaaaaaaaaaaaaaaaaaaaaa",
                "aaaaaaaaaaaaaaaaaaaaaaaaam",
                "aaaaaaaaaaaaaaaaaaaaaaaaaz",
            ]
        );
    }

    #[test]
    fn embedded_nul_distinguishes_short_from_long_above_insertion_threshold() {
        // Padding the collection past INSERTION_SORT_THRESHOLD forces the
        // quicksort/window path (rather than insertion_sort's real byte
        // compare) to be the one that has to tell "a" and "a\x00" apart.
        let mut data: Vec<Vec<u8>> = (0..40).map(|i| format!("filler{i}").into_bytes()).collect();
        data.push(b"a".to_vec());
        data.push(b"a\x00".to_vec());
        let a_idx = data.len() - 2;
        let a_nul_idx = data.len() - 1;

        let alloc = StdAllocator;
        let mut order: Vec<usize> = (0..data.len()).collect();
        sort(&data, &alloc, &mut order).unwrap();

        let pos_a = order.iter().position(|&i| i == a_idx).unwrap();
        let pos_a_nul = order.iter().position(|&i| i == a_nul_idx).unwrap();
        assert!(pos_a < pos_a_nul, "\"a\" must sort before \"a\\x00\"");

        let got: Vec<&[u8]> = order.iter().map(|&i| data[i].as_slice()).collect();
        let mut expected: Vec<&[u8]> = data.iter().map(|s| s.as_slice()).collect();
        expected.sort();
        assert_eq!(got, expected);
    }

    #[test]
    fn sorts_large_random_input() {
        use rand::{Rng, SeedableRng};
        use rand::rngs::StdRng;

        let mut rng = StdRng::seed_from_u64(42);
        let data: Vec<String> = (0..500)
            .map(|_| {
                let len = rng.gen_range(0..20);
                (0..len)
                    .map(|_| (b'a' + rng.gen_range(0..4)) as char)
                    .collect()
            })
            .collect();

        let alloc = StdAllocator;
        let mut order: Vec<usize> = (0..data.len()).collect();
        sort(&data, &alloc, &mut order).unwrap();

        let got: Vec<&str> = order.iter().map(|&i| data[i].as_str()).collect();
        let mut expected = data.iter().map(|s| s.as_str()).collect::<Vec<_>>();
        expected.sort();
        assert_eq!(got, expected);
    }
}
