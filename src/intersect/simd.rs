/*
 * AVX2-accelerated build phase for the intersect engine, gated behind
 * `dispatch::avx2_available()`.
 *
 * Strings are partitioned by length: `<= 16` bytes go through a batched
 * insert that gathers four candidate table slots per AVX2 instruction
 * instead of four separate scalar loads, falling back to the ordinary
 * scalar insert whenever a batch's four target slots collide with each
 * other or land on an already-occupied slot (both cases need the ordering
 * guarantees of sequential linear probing, which a parallel scatter can't
 * give). Strings longer than 16 bytes go through a second, scalar-only
 * pass into a table that's been re-zeroed and reused, rather than paying
 * for a second allocation.
 *
 * `intersect_simd` itself is compiled for every target, but its AVX2 short-
 * string insert is x86_64-only; on any other architecture the short-string
 * pass falls back to the plain scalar insert, matching the
 * `forward_match_fn`/`forward_match_x86_dispatch` shape in the corpus's
 * rolling-hash dispatcher (x86_64 gets the accelerated path, every other
 * target falls through to scalar). `dispatch::avx2_available()` already
 * returns `false` off x86_64, so this function is only reached with a real
 * AVX2 CPU behind it, but it still has to *compile* everywhere.
 */

use super::{hash_string, write_pair, HashTable, SIMD_SHORT_THRESHOLD};
use crate::alloc::Allocator;
use crate::collection::StringCollection;
use crate::error::StringKernelError;

pub(crate) fn intersect_simd(
    build: &dyn StringCollection,
    probe: &dyn StringCollection,
    alloc: &dyn Allocator,
    seed: u64,
    out_a: &mut [usize],
    out_b: &mut [usize],
    swapped: bool,
) -> Result<usize, StringKernelError> {
    let mut short_build = Vec::new();
    let mut long_build = Vec::new();
    for i in 0..build.count() {
        if build.length(i) <= SIMD_SHORT_THRESHOLD {
            short_build.push(i);
        } else {
            long_build.push(i);
        }
    }

    let mut short_probe = Vec::new();
    let mut long_probe = Vec::new();
    for j in 0..probe.count() {
        if probe.length(j) <= SIMD_SHORT_THRESHOLD {
            short_probe.push(j);
        } else {
            long_probe.push(j);
        }
    }

    // Strings of different length never compare equal, so matches never
    // cross the short/long partition: each side can be resolved in
    // isolation against the other side's same-length-class subset.
    if short_build.is_empty() && long_build.is_empty() {
        return Ok(0);
    }

    let mut table =
        HashTable::new(alloc, build.count().max(1)).ok_or(StringKernelError::BadAlloc)?;

    let mut count = 0;

    if !short_build.is_empty() {
        #[cfg(target_arch = "x86_64")]
        {
            // Safety: only reached when `dispatch::avx2_available()` returned true.
            unsafe { batched_insert_avx2(build, &short_build, seed, &mut table) };
        }
        #[cfg(not(target_arch = "x86_64"))]
        {
            for &i in &short_build {
                table.insert(hash_string(seed, build.get(i)), i as u32);
            }
        }
        for &j in &short_probe {
            let needle = probe.get(j);
            let h = hash_string(seed, needle);
            if let Some(i) = table.probe(h, |c| build.get(c as usize) == needle) {
                write_pair(out_a, out_b, count, i as usize, j, swapped);
                count += 1;
            }
        }
    }

    if !long_build.is_empty() {
        table.rezero();
        for &i in &long_build {
            table.insert(hash_string(seed, build.get(i)), i as u32);
        }
        for &j in &long_probe {
            let needle = probe.get(j);
            let h = hash_string(seed, needle);
            if let Some(i) = table.probe(h, |c| build.get(c as usize) == needle) {
                write_pair(out_a, out_b, count, i as usize, j, swapped);
                count += 1;
            }
        }
    }

    Ok(count)
}

#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2")]
unsafe fn batched_insert_avx2(
    build: &dyn StringCollection,
    indices: &[usize],
    seed: u64,
    table: &mut HashTable,
) {
    use std::arch::x86_64::*;

    let mask = (table_capacity(table) - 1) as i32;
    let mut chunk_start = 0;
    while chunk_start < indices.len() {
        let chunk_len = (indices.len() - chunk_start).min(4);
        let mut hashes = [0u64; 4];
        let mut slots = [0i32; 4];
        for k in 0..chunk_len {
            let idx = indices[chunk_start + k];
            let h = hash_string(seed, build.get(idx));
            hashes[k] = h;
            slots[k] = (h as i32) & mask;
        }
        for k in chunk_len..4 {
            // Pad with a harmless repeat so the gather never reads out of
            // range; padded lanes are never written back.
            slots[k] = slots[0];
        }

        let distinct = chunk_len < 2
            || (0..chunk_len).all(|x| (x + 1..chunk_len).all(|y| slots[x] != slots[y]));

        let all_empty = if distinct {
            let idx_vec = _mm_loadu_si128(slots.as_ptr() as *const __m128i);
            let positions_ptr = positions_ptr(table);
            let gathered = _mm_i32gather_epi32(positions_ptr as *const i32, idx_vec, 4);
            let mut gathered_arr = [0i32; 4];
            _mm_storeu_si128(gathered_arr.as_mut_ptr() as *mut __m128i, gathered);
            (0..chunk_len).all(|k| gathered_arr[k] as u32 == super::EMPTY)
        } else {
            false
        };

        if distinct && all_empty {
            for k in 0..chunk_len {
                let idx = indices[chunk_start + k];
                write_slot(table, slots[k] as usize, hashes[k], idx as u32);
            }
        } else {
            for k in 0..chunk_len {
                let idx = indices[chunk_start + k];
                table.insert(hashes[k], idx as u32);
            }
        }

        chunk_start += chunk_len;
    }
}

#[inline(always)]
fn table_capacity(table: &HashTable) -> usize {
    table.capacity
}

#[inline(always)]
fn positions_ptr(table: &HashTable) -> *const u32 {
    table.positions().as_ptr()
}

#[inline(always)]
fn write_slot(table: &mut HashTable, slot: usize, hash: u64, position: u32) {
    table.hashes_mut()[slot] = hash;
    table.positions_mut()[slot] = position;
}
