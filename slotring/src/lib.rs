//! A fixed-capacity ring buffer of fixed-size elements.
//!
//! ## Table of contents
//!
//! 1. [Design](#design)
//! 2. [The ring buffer](ring/index.html)
//! 3. [Logical indices](index/index.html)
//! 4. [Typed elements](element/index.html)
//! 5. [Byte streams](io/index.html) (requires `std`)
//!
//! ## Design
//!
//! Nothing within `slotring` *ever* dynamically allocates memory. The caller passes in the
//! memory region that holds the elements, typically a borrowed byte slice, and the buffer only
//! keeps two counters on top of it: the number of elements ever written and the number of
//! elements ever read. Both are free running `u32` values that are only masked when they are
//! turned into an offset into the region. Since the number of element slots is a power of two
//! the masked offset and the difference of the counters stay correct when the counters wrap
//! around.
//!
//! Writes and reads move batches of elements. When a batch does not fit (or not enough elements
//! are buffered) the operation moves as many as possible and reports the count. This is not an
//! error, the caller compares the count with its request.
//!
//! ```
//! use slotring::RingBuffer;
//!
//! let mut region = [0u8; 8];
//! // Four elements of two bytes each.
//! let mut ring = RingBuffer::new(&mut region[..], 2).unwrap();
//!
//! assert_eq!(ring.put(&[1, 0, 2, 0, 3, 0]), 3);
//! assert_eq!(ring.space(), 1);
//! // Only one element still fits.
//! assert_eq!(ring.put(&[4, 0, 5, 0, 6, 0]), 1);
//!
//! let mut out = [0u8; 4];
//! assert_eq!(ring.get(&mut out), 2);
//! assert_eq!(out, [1, 0, 2, 0]);
//! ```
#![warn(missing_docs)]
#![warn(unreachable_pub)]

// tests should be able to use `std`
#![cfg_attr(all(
    not(feature = "std"),
    not(test)),
no_std)]

#[macro_use] mod macros;
mod copy;
pub mod element;
mod error;
pub mod index;
#[cfg(feature = "std")]
pub mod io;
pub mod ring;

pub use self::element::{Element, Typed};
pub use self::error::{Error, Result};
pub use self::index::Index;
pub use self::ring::RingBuffer;
