/*
 * The collection abstraction consumed by the sort and intersect engines.
 *
 * Plays the role `DeflateInput`/`DeflateOutput` play for the decompressor:
 * a small capability that parameterizes the hot loop over its data source,
 * monomorphised rather than boxed wherever the call site allows it.
 */

/// A random-access view over `count()` byte strings. Strings may contain
/// embedded NULs; the view is immutable for the duration of any operation
/// the kernels run over it.
pub trait StringCollection {
    /// Number of strings in the collection.
    fn count(&self) -> usize;

    /// Borrow the `i`-th string. `i < self.count()`.
    fn get(&self, i: usize) -> &[u8];

    /// Byte length of the `i`-th string. Default forwards to `get`; override
    /// if the length is cheaper to compute than the full borrow.
    #[inline(always)]
    fn length(&self, i: usize) -> usize {
        self.get(i).len()
    }

    /// Unchecked borrow of the `i`-th string, for hot loops that have
    /// already established `i < self.count()` elsewhere.
    ///
    /// # Safety
    /// `i` must be less than `self.count()`.
    #[inline(always)]
    unsafe fn get_unchecked(&self, i: usize) -> &[u8] {
        self.get(i)
    }
}

impl<T: AsRef<[u8]>> StringCollection for [T] {
    #[inline(always)]
    fn count(&self) -> usize {
        self.len()
    }

    #[inline(always)]
    fn get(&self, i: usize) -> &[u8] {
        self[i].as_ref()
    }

    #[inline(always)]
    unsafe fn get_unchecked(&self, i: usize) -> &[u8] {
        // Safety: forwarded from the caller's contract.
        unsafe { <[T]>::get_unchecked(self, i).as_ref() }
    }
}

impl<T: AsRef<[u8]>> StringCollection for Vec<T> {
    #[inline(always)]
    fn count(&self) -> usize {
        self.len()
    }

    #[inline(always)]
    fn get(&self, i: usize) -> &[u8] {
        self[i].as_ref()
    }

    #[inline(always)]
    unsafe fn get_unchecked(&self, i: usize) -> &[u8] {
        // Safety: forwarded from the caller's contract.
        unsafe { <[T]>::get_unchecked(self.as_slice(), i).as_ref() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slice_of_vecs_is_a_collection() {
        let data: Vec<Vec<u8>> = vec![b"banana".to_vec(), b"apple".to_vec()];
        assert_eq!(StringCollection::count(&data), 2);
        assert_eq!(StringCollection::get(&data, 0), b"banana");
        assert_eq!(StringCollection::length(&data, 1), 5);
    }

    #[test]
    fn slice_of_str_refs_is_a_collection() {
        let data: &[&str] = &["one", "two", "three"];
        assert_eq!(data.count(), 3);
        assert_eq!(data.get(2), b"three");
    }
}
