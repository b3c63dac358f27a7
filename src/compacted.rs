//! Space-efficient sparse array with constant-time membership and lookup.
//!
//! # Layout
//!
//! Logical indices are grouped into blocks of 64. Three parallel buffers
//! describe the whole structure:
//!
//! - `bitmaps`: one `u64` per block; bit `b` of word `w` is set iff logical
//!   index `64*w + b` is present.
//! - `offsets`: one `u32` per block; the number of present elements before
//!   the block begins. Only meaningful for blocks with at least one set bit —
//!   an all-zero block's entry is never read because the bitmap test for any
//!   index inside it fails first.
//! - `elts`: the fixed-width records of all present elements, packed in
//!   ascending logical-index order.
//!
//! An element's position in `elts` is its block's offset plus the in-word
//! rank of its bit, so a lookup is two array reads, one popcount and one
//! decode.

use crate::convert::Converter;
use crate::error::{Error, Result};
use crate::rank::rank_before;

/// A read-only sparse array storing only present elements.
///
/// Built once from a strictly ascending index sequence and a parallel value
/// sequence; immutable thereafter. See the [module docs](self) for the
/// layout.
pub struct CompactedArray<C: Converter> {
    /// One word per 64-index block; bit set iff the index is present.
    bitmaps: Vec<u64>,
    /// Present-element count before each block; valid only for non-empty blocks.
    offsets: Vec<u32>,
    /// Packed fixed-width records in ascending index order.
    elts: Vec<u8>,
    /// Total number of present elements.
    count: u32,
    converter: C,
}

impl<C: Converter> std::fmt::Debug for CompactedArray<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompactedArray")
            .field("count", &self.count)
            .field("capacity", &self.capacity())
            .field("record_size", &self.converter.record_size())
            .finish()
    }
}

impl<C: Converter> CompactedArray<C> {
    /// Build a compacted array from parallel index and element sequences.
    ///
    /// `indices` must be strictly ascending and the same length as
    /// `elements`. On failure nothing is partially built — the error is
    /// returned before any structure escapes.
    ///
    /// # Errors
    ///
    /// - [`Error::IndexLengthMismatch`] if the sequences differ in length.
    /// - [`Error::IndexNotAscending`] if any index is not strictly greater
    ///   than its predecessor (duplicates included).
    ///
    /// # Panics
    ///
    /// Panics if the converter marshals a record whose length differs from
    /// its declared [`record_size`](Converter::record_size). That is a
    /// broken `Converter` implementation, not bad input data.
    pub fn new(converter: C, indices: &[u32], elements: &[C::Item]) -> Result<Self> {
        if indices.len() != elements.len() {
            return Err(Error::IndexLengthMismatch {
                indices: indices.len(),
                elements: elements.len(),
            });
        }

        // Validate strict ascent before touching any buffer, so a bad input
        // never sizes the bitmap from a non-maximal last entry and nothing
        // is partially built on failure.
        for (i, pair) in indices.windows(2).enumerate() {
            if pair[1] <= pair[0] {
                return Err(Error::IndexNotAscending {
                    position: i + 1,
                    index: pair[1],
                });
            }
        }

        // capacity = 1 + max index; ascent holds, so the last entry is the max.
        let capacity = indices.last().map_or(0u64, |&i| u64::from(i) + 1);
        let blocks = capacity.div_ceil(64) as usize;

        let record_size = converter.record_size();
        let mut arr = Self {
            bitmaps: vec![0u64; blocks],
            offsets: vec![0u32; blocks],
            elts: Vec::with_capacity(elements.len() * record_size),
            count: 0,
            converter,
        };

        for (&index, value) in indices.iter().zip(elements) {
            arr.append_elt(index, value);
        }

        Ok(arr)
    }

    /// Set the bit for `index` and append its record, capturing the block's
    /// offset on first touch.
    fn append_elt(&mut self, index: u32, value: &C::Item) {
        let (w, b) = block_bit(index);

        // First touch: a block's offset is the element count at the instant
        // its first bit is set. Indices arrive in ascending order, so this
        // equals the number of present elements before the block.
        if self.bitmaps[w] == 0 {
            self.offsets[w] = self.count;
        }
        self.bitmaps[w] |= 1u64 << b;

        let record = self.converter.marshal(value);
        assert_eq!(
            record.len(),
            self.converter.record_size(),
            "converter marshalled {} bytes but declares record_size {}",
            record.len(),
            self.converter.record_size(),
        );
        self.elts.extend_from_slice(&record);

        self.count += 1;
    }

    /// Return the value at logical index `idx`, or `None` if absent.
    ///
    /// Absence is an expected outcome, not an error; indices past the
    /// highest inserted one also return `None`.
    pub fn get(&self, idx: u32) -> Option<C::Item> {
        let (w, b) = block_bit(idx);

        let word = *self.bitmaps.get(w)?;
        if (word >> b) & 1 == 0 {
            return None;
        }

        let slot = self.offsets[w] + rank_before(word, b);
        let start = slot as usize * self.converter.record_size();

        let (_, value) = self.converter.unmarshal(&self.elts[start..]);
        Some(value)
    }

    /// Return true if logical index `idx` holds a value.
    pub fn has(&self, idx: u32) -> bool {
        let (w, b) = block_bit(idx);
        self.bitmaps.get(w).is_some_and(|&word| (word >> b) & 1 != 0)
    }

    /// Return the number of present elements.
    pub fn len(&self) -> usize {
        self.count as usize
    }

    /// Return true if no elements are present.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Return the logical capacity: the number of indices covered by the
    /// bitmap, always at least one past the highest inserted index.
    pub fn capacity(&self) -> u64 {
        self.bitmaps.len() as u64 * 64
    }

    /// The per-block bitmap words, for external serialization.
    pub fn bitmaps(&self) -> &[u64] {
        &self.bitmaps
    }

    /// The per-block element-count offsets, positionally aligned with
    /// [`bitmaps`](Self::bitmaps), for external serialization.
    pub fn offsets(&self) -> &[u32] {
        &self.offsets
    }

    /// The packed element records, for external serialization.
    pub fn elts(&self) -> &[u8] {
        &self.elts
    }

    /// Approximate heap memory usage in bytes.
    pub fn heap_bytes(&self) -> usize {
        self.bitmaps.capacity() * 8 + self.offsets.capacity() * 4 + self.elts.capacity()
    }
}

/// Split a logical index into its block number and in-block bit position.
#[inline(always)]
fn block_bit(idx: u32) -> (usize, u32) {
    ((idx >> 6) as usize, idx & 63)
}
