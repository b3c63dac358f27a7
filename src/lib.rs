//! # Compacted Array
//!
//! *A sparse array that only pays for what is present.*
//!
//! ## Intuition First
//!
//! Imagine an apartment building with 9 million numbered mailboxes, of which
//! only three ever receive mail. A naive array rents all 9 million boxes.
//! This crate instead keeps a floor plan (one bit per box) and stacks the
//! three actual letters in a single tray, in box-number order. Finding a
//! letter means checking the floor plan bit, then counting how many occupied
//! boxes come before yours — that count is exactly the letter's position in
//! the tray.
//!
//! ## The Problem
//!
//! Sparse keyed data forces a trade-off:
//! - **Dense arrays**: $O(1)$ access but $O(U)$ space for a universe of $U$
//!   indices, even when almost all slots are empty.
//! - **Hash maps**: space proportional to occupancy, but with per-entry
//!   pointer/metadata overhead and no cache-friendly contiguous storage.
//!
//! A compacted array gets both: space proportional to the number of present
//! elements (plus ~12 bytes per 64-index block of bitmap/offset metadata),
//! and constant-time membership and lookup.
//!
//! ## How It Works
//!
//! Logical indices are split into blocks of 64. Each block owns one bitmap
//! word (bit $b$ set iff index $64w + b$ is present) and one offset entry
//! (the number of present elements before the block). A lookup tests the
//! bit, then computes
//!
//! ```text
//! slot = offsets[w] + rank_before(bitmaps[w], b)
//! ```
//!
//! where `rank_before` counts set bits below position $b$ with a branch-free
//! SWAR popcount. The element's bytes live at `slot * record_size` in a
//! contiguous store, decoded through a caller-supplied [`Converter`].
//!
//! ## Complexity Analysis
//!
//! - **Time**: $O(1)$ for `has` and `get` (a fixed sequence of bit
//!   operations plus one fixed-width decode).
//! - **Space**: `count * record_size` bytes of payload plus
//!   $\lceil U/64 \rceil$ words of bitmap and as many `u32` offsets.
//!
//! ## What Could Go Wrong
//!
//! 1. **Static only**: the structure is build-once. Inserting, deleting or
//!    updating after construction would invalidate the offset table; none of
//!    those operations exist here.
//! 2. **Fixed-width records**: the store is addressed as
//!    `slot * record_size`, so a [`Converter`] whose encoding is not a
//!    constant width would silently corrupt lookups. Construction checks
//!    every marshalled record against the declared width.
//!
//! ## Example
//!
//! ```
//! use compacted::{CompactedArray, U32Converter};
//!
//! let arr = CompactedArray::new(U32Converter, &[2, 5, 9], &[10, 20, 30]).unwrap();
//! assert_eq!(arr.get(5), Some(20));
//! assert_eq!(arr.get(3), None);
//! assert!(arr.has(9));
//! assert!(!arr.has(10));
//! ```
//!
//! ## References
//!
//! - Jacobson, G. (1989). "Succinct Static Data Structures."
//! - Knuth, D. E. TAOCP Vol. 4A, §7.1.3 (bitwise tricks; sideways addition).

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod compacted;
pub mod convert;
pub mod error;
pub mod rank;

pub use compacted::CompactedArray;
pub use convert::{ByteArrayConverter, Converter, U16Converter, U32Converter, U64Converter};
pub use error::{Error, Result};
