//! Typed elements on top of the byte oriented buffer.
//!
//! The ring buffer itself only moves bytes. For the common case of streaming integers the
//! [`Element`] trait fixes their encoding and [`Typed`] picks the element size from it, encoding
//! each value directly into its slot.
//!
//! ```
//! use slotring::Typed;
//!
//! let mut region = [0u8; 16];
//! let mut samples = Typed::<_, u32>::new(&mut region[..]).unwrap();
//! assert_eq!(samples.capacity(), 4);
//!
//! assert_eq!(samples.put(&[10, 20, 30, 40, 50]), 4);
//! let mut out = [0u32; 2];
//! assert_eq!(samples.get(&mut out), 2);
//! assert_eq!(out, [10, 20]);
//! ```
use core::borrow::{Borrow, BorrowMut};
use core::marker::PhantomData;

use byteorder::{ByteOrder, NativeEndian};

use crate::error::Result;
use crate::ring::RingBuffer;

/// A value with a fixed size byte representation.
pub trait Element: Copy {
    /// The number of bytes of the representation.
    const SIZE: usize;

    /// Write the representation into a buffer of exactly `SIZE` bytes.
    fn encode(&self, buf: &mut [u8]);

    /// Read a value from a buffer of exactly `SIZE` bytes.
    fn decode(buf: &[u8]) -> Self;
}

impl Element for u8 {
    const SIZE: usize = 1;

    fn encode(&self, buf: &mut [u8]) {
        buf[0] = *self;
    }

    fn decode(buf: &[u8]) -> Self {
        buf[0]
    }
}

impl Element for i8 {
    const SIZE: usize = 1;

    fn encode(&self, buf: &mut [u8]) {
        buf[0] = *self as u8;
    }

    fn decode(buf: &[u8]) -> Self {
        buf[0] as i8
    }
}

macro_rules! native_element {
    ($($ty:ty: $size:expr, $read:ident, $write:ident;)*) => {
        $(
            impl Element for $ty {
                const SIZE: usize = $size;

                fn encode(&self, buf: &mut [u8]) {
                    NativeEndian::$write(buf, *self)
                }

                fn decode(buf: &[u8]) -> Self {
                    NativeEndian::$read(buf)
                }
            }
        )*
    };
}

native_element! {
    u16: 2, read_u16, write_u16;
    i16: 2, read_i16, write_i16;
    u32: 4, read_u32, write_u32;
    i32: 4, read_i32, write_i32;
    u64: 8, read_u64, write_u64;
    i64: 8, read_i64, write_i64;
}

/// A ring buffer of encoded values.
///
/// This is a thin wrapper around a [`RingBuffer`] whose element size is `E::SIZE`. Writes and reads
/// truncate in the same way, the counts are in values.
///
/// [`RingBuffer`]: ../ring/struct.RingBuffer.html
#[derive(Debug)]
pub struct Typed<C, E> {
    raw: RingBuffer<C>,
    phantom: PhantomData<fn(E) -> E>,
}

impl<C: Borrow<[u8]>, E: Element> Typed<C, E> {
    /// Initialize a typed buffer on a region.
    ///
    /// Fails with `InvalidCapacity` under the same conditions as `RingBuffer::new` with an element
    /// size of `E::SIZE`.
    pub fn new(storage: C) -> Result<Self> {
        Ok(Typed {
            raw: RingBuffer::new(storage, E::SIZE)?,
            phantom: PhantomData,
        })
    }

    /// The number of value slots.
    pub fn capacity(&self) -> usize {
        self.raw.capacity()
    }

    /// The number of buffered values.
    pub fn used(&self) -> usize {
        self.raw.used()
    }

    /// The number of free value slots.
    pub fn space(&self) -> usize {
        self.raw.space()
    }

    /// Check if there are no buffered values.
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Check if all slots are occupied.
    pub fn is_full(&self) -> bool {
        self.raw.is_full()
    }

    /// Decode buffered values into `dst` without consuming them.
    ///
    /// Returns the number of values decoded.
    pub fn peek(&self, dst: &mut [E]) -> usize {
        let len = dst.len().min(self.raw.used());
        let tail = self.raw.tail();
        for (i, value) in dst[..len].iter_mut().enumerate() {
            *value = E::decode(self.raw.slot(tail + i));
        }
        len
    }

    /// Read values into `dst`.
    ///
    /// Returns the number of values read, `0` if the buffer is empty.
    pub fn get(&mut self, dst: &mut [E]) -> usize {
        let len = self.peek(dst);
        self.raw.skip(len)
    }

    /// Get a reference to the byte buffer.
    pub fn as_raw(&self) -> &RingBuffer<C> {
        &self.raw
    }

    /// Unwrap the byte buffer.
    pub fn into_raw(self) -> RingBuffer<C> {
        self.raw
    }

    /// Unwrap the underlying region.
    pub fn into_inner(self) -> C {
        self.raw.into_inner()
    }
}

impl<C: BorrowMut<[u8]>, E: Element> Typed<C, E> {
    /// Write values from `src`.
    ///
    /// Returns the number of values written, `0` if the buffer is full.
    pub fn put(&mut self, src: &[E]) -> usize {
        let len = src.len().min(self.raw.space());
        let head = self.raw.head();
        for (i, value) in src[..len].iter().enumerate() {
            value.encode(self.raw.slot_mut(head + i));
        }
        self.raw.advance_head(len);
        len
    }

    /// Get a mutable reference to the byte buffer.
    ///
    /// The element size is fixed, so this can not be used to break the encoding of slots.
    pub fn as_raw_mut(&mut self) -> &mut RingBuffer<C> {
        &mut self.raw
    }
}
