//! The ring buffer over a caller provided region.
//!
//! The buffer divides a byte region into slots of a fixed element size. The number of slots must
//! be a power of two, so that a free running counter maps to a slot by masking its lower bits. Two
//! such counters, `head` and `tail`, count the elements ever written and ever read. Their wrapping
//! difference is the number of buffered elements.
//!
//! Writes start at the slot of `head` and reads at the slot of `tail`. A batch of elements that
//! runs over the end of the region continues at its start, the copy is split into those two parts.
//! Neither operation ever fails. If the batch does not fit, or not enough elements are buffered,
//! then as many elements as possible are moved and their count is returned.
//!
//! ## Example
//!
//! ```
//! use slotring::RingBuffer;
//!
//! let mut region = [0u8; 8];
//! let mut ring = RingBuffer::new(&mut region[..], 2).unwrap();
//! assert_eq!(ring.capacity(), 4);
//!
//! for element in 0u8..8 {
//!     let written = ring.put(&[element, 0]);
//!     // Only four elements fit.
//!     assert_eq!(written, if element < 4 { 1 } else { 0 });
//! }
//!
//! let mut element = [0u8; 2];
//! for expected in 0u8..4 {
//!     assert_eq!(ring.get(&mut element), 1);
//!     assert_eq!(element, [expected, 0]);
//! }
//! assert_eq!(ring.get(&mut element), 0);
//! ```
use core::borrow::{Borrow, BorrowMut};

use crate::copy;
use crate::error::{Error, Result};
use crate::index::Index;


/// The largest number of slots.
///
/// The buffered count `head - tail` must be representable in the index width, including the full
/// state, which caps the capacity at half the index modulus.
const MAX_CAPACITY: usize = 1 << 31;

/// A fixed-capacity ring buffer of fixed-size elements.
///
/// The container `C` is the backing memory. Usually it is a mutable borrow of a byte slice, which
/// ties the lifetime of the buffer to that region, but owned arrays or vectors work as well. The
/// buffer never allocates, resizes or frees it and only ever touches the first
/// `capacity() * element_size()` bytes.
///
/// Elements are opaque bytes. See [`Typed`] for a wrapper that encodes integers.
///
/// [`Typed`]: ../element/struct.Typed.html
#[derive(Clone, Debug)]
pub struct RingBuffer<C> {
    /// The caller provided region.
    storage: C,
    /// Number of element slots, a power of two.
    size: u32,
    /// `size - 1`, maps an index to its slot.
    mask: u32,
    /// Bytes per element.
    esize: usize,
    /// Count of elements ever written.
    head: Index,
    /// Count of elements ever read.
    tail: Index,
}

impl<C: Borrow<[u8]>> RingBuffer<C> {
    /// Initialize a ring buffer on a region.
    ///
    /// The region is divided into `len / element_size` slots. Bytes of a trailing partial slot are
    /// not used. Fails with `InvalidCapacity` if the number of slots is not a power of two or is
    /// smaller than two, or if the element size is zero.
    ///
    /// ```
    /// # use slotring::{Error, RingBuffer};
    /// let mut region = [0u8; 12];
    /// // Three slots of four bytes.
    /// assert_eq!(RingBuffer::new(&mut region[..], 4).unwrap_err(), Error::InvalidCapacity);
    /// // Four slots of three bytes.
    /// assert!(RingBuffer::new(&mut region[..], 3).is_ok());
    /// ```
    pub fn new(storage: C, element_size: usize) -> Result<Self> {
        let len = storage.borrow().len();
        let size = match len.checked_div(element_size) {
            Some(size) => size,
            None => {
                ring_debug!("rejected zero sized elements");
                return Err(Error::InvalidCapacity);
            },
        };

        if size < 2 || !size.is_power_of_two() || size > MAX_CAPACITY {
            ring_debug!("rejected {} slots of {} bytes", size, element_size);
            return Err(Error::InvalidCapacity);
        }

        let size = size as u32;
        Ok(RingBuffer {
            storage,
            size,
            mask: size - 1,
            esize: element_size,
            head: Index(0),
            tail: Index(0),
        })
    }

    /// The number of element slots.
    pub fn capacity(&self) -> usize {
        self.size as usize
    }

    /// The size of a single element in bytes.
    pub fn element_size(&self) -> usize {
        self.esize
    }

    /// The number of buffered elements that can be read.
    pub fn used(&self) -> usize {
        self.head - self.tail
    }

    /// The number of free slots that can be written.
    pub fn space(&self) -> usize {
        self.capacity() - self.used()
    }

    /// Check if there are no buffered elements.
    pub fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    /// Check if all slots are occupied.
    pub fn is_full(&self) -> bool {
        self.used() == self.capacity()
    }

    /// The logical index of the next written element.
    pub fn head(&self) -> Index {
        self.head
    }

    /// The logical index of the next read element.
    pub fn tail(&self) -> Index {
        self.tail
    }

    /// Copy buffered elements into `dst` without consuming them.
    ///
    /// Copies at most `dst.len() / element_size()` elements, fewer if not as many are buffered.
    /// Returns the number of elements copied. Bytes of `dst` past the copied elements are not
    /// modified.
    pub fn peek(&self, dst: &mut [u8]) -> usize {
        let len = (dst.len() / self.esize).min(self.used());
        let bytes = len * self.esize;
        copy::read_wrapped(self.region(), self.offset(self.tail), &mut dst[..bytes]);
        len
    }

    /// Read elements into `dst`.
    ///
    /// Reads at most `dst.len() / element_size()` elements, fewer if not as many are buffered, and
    /// returns the number of elements read. Reading from an empty buffer returns `0`. The read
    /// slots become free for writing.
    pub fn get(&mut self, dst: &mut [u8]) -> usize {
        let requested = dst.len() / self.esize;
        let len = self.peek(dst);
        if len < requested {
            ring_trace!("get truncated to {} of {} elements", len, requested);
        }
        self.tail += len;
        len
    }

    /// Discard up to `count` buffered elements without copying them.
    ///
    /// Returns the number of elements discarded.
    pub fn skip(&mut self, count: usize) -> usize {
        let len = count.min(self.used());
        self.tail += len;
        len
    }

    /// The buffered bytes in reading order.
    ///
    /// The first slice starts at the oldest element. The second, possibly empty, slice holds the
    /// elements that wrapped around to the start of the region. Concatenated they contain
    /// `used() * element_size()` bytes.
    pub fn as_slices(&self) -> (&[u8], &[u8]) {
        let offset = self.offset(self.tail);
        let bytes = self.used() * self.esize;
        let region = self.region();
        let first = bytes.min(region.len() - offset);
        (&region[offset..offset + first], &region[..bytes - first])
    }

    /// Discard all buffered elements.
    ///
    /// Both logical indices restart at zero.
    pub fn reset(&mut self) {
        self.reset_at(Index(0));
    }

    /// Discard all buffered elements and restart at a logical index.
    ///
    /// The next written element will have the index `start`. This aligns the indices of the buffer
    /// with an externally numbered stream. Any index is valid, the arithmetic on indices wraps.
    pub fn reset_at(&mut self, start: Index) {
        self.head = start;
        self.tail = start;
    }

    /// Get a reference to the underlying region.
    pub fn get_ref(&self) -> &C {
        &self.storage
    }

    /// Unwrap the underlying region.
    pub fn into_inner(self) -> C {
        self.storage
    }

    /// The part of the region covered by slots.
    fn region(&self) -> &[u8] {
        &self.storage.borrow()[..self.byte_len()]
    }

    fn byte_len(&self) -> usize {
        self.capacity() * self.esize
    }

    /// The byte offset of the slot of an index.
    fn offset(&self, index: Index) -> usize {
        index.slot(self.mask) * self.esize
    }

    /// The bytes of the slot of an index.
    pub(crate) fn slot(&self, index: Index) -> &[u8] {
        let offset = self.offset(index);
        &self.storage.borrow()[offset..offset + self.esize]
    }
}

impl<C: BorrowMut<[u8]>> RingBuffer<C> {
    /// Write elements from `src`.
    ///
    /// Writes at most `src.len() / element_size()` elements, fewer if not as many slots are free,
    /// and returns the number of elements written. Writing to a full buffer returns `0`. Trailing
    /// bytes of `src` that do not form a whole element are ignored.
    pub fn put(&mut self, src: &[u8]) -> usize {
        let requested = src.len() / self.esize;
        let len = requested.min(self.space());
        if len < requested {
            ring_trace!("put truncated to {} of {} elements", len, requested);
        }

        let offset = self.offset(self.head);
        let bytes = len * self.esize;
        copy::write_wrapped(self.region_mut(), offset, &src[..bytes]);
        self.head += len;
        len
    }

    /// Get a mutable reference to the underlying region.
    ///
    /// Modifying the bytes of buffered elements changes what is read later on.
    pub fn get_mut(&mut self) -> &mut C {
        &mut self.storage
    }

    fn region_mut(&mut self) -> &mut [u8] {
        let len = self.byte_len();
        &mut self.storage.borrow_mut()[..len]
    }

    /// The mutable bytes of the slot of an index.
    pub(crate) fn slot_mut(&mut self, index: Index) -> &mut [u8] {
        let offset = self.offset(index);
        let end = offset + self.esize;
        &mut self.storage.borrow_mut()[offset..end]
    }

    /// Mark `count` slots after `head` as written.
    ///
    /// The caller must have checked that there is enough space.
    pub(crate) fn advance_head(&mut self, count: usize) {
        debug_assert!(count <= self.space());
        self.head += count;
    }
}
