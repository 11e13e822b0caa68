//! Byte stream access with `std::io`.
//!
//! A ring buffer is a natural staging area between a device and its consumer. Writing puts whole
//! elements and reading gets whole elements, both report the number of *bytes* moved. A full
//! buffer accepts `0` bytes and an empty buffer yields `0` bytes, there is no blocking. Callers
//! that use `write_all` on a full buffer get an error of kind `WriteZero`.
//!
//! Elements are never split. Writing fewer bytes than one element fails with `InvalidInput`, so
//! `write_all` needs a multiple of `element_size()` bytes. Reading into fewer bytes than one
//! element while elements are buffered fails with `InvalidInput` as well, since `Ok(0)` would mean
//! the end of the stream. `read_to_end` and `read_to_string` drain whole elements regardless of
//! their size.
//!
//! ```
//! use std::io::{Read, Write};
//! use slotring::RingBuffer;
//!
//! let mut region = [0u8; 8];
//! let mut ring = RingBuffer::new(&mut region[..], 1).unwrap();
//!
//! assert_eq!(ring.write(b"stream of bytes").unwrap(), 8);
//! let mut out = String::new();
//! ring.read_to_string(&mut out).unwrap();
//! assert_eq!(out, "stream o");
//! ```
use std::borrow::{Borrow, BorrowMut};
use std::io;

use crate::ring::RingBuffer;

impl<C: BorrowMut<[u8]>> io::Write for RingBuffer<C> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if !buf.is_empty() && buf.len() < self.element_size() {
            return Err(partial_element());
        }
        Ok(self.put(buf) * self.element_size())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<C: Borrow<[u8]>> io::Read for RingBuffer<C> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if !buf.is_empty() && buf.len() < self.element_size() && !self.is_empty() {
            return Err(partial_element());
        }
        Ok(self.get(buf) * self.element_size())
    }

    fn read_to_end(&mut self, buf: &mut Vec<u8>) -> io::Result<usize> {
        let start = buf.len();
        let bytes = self.used() * self.element_size();
        buf.resize(start + bytes, 0);
        let read = self.get(&mut buf[start..]) * self.element_size();
        debug_assert_eq!(read, bytes);
        Ok(read)
    }

    fn read_to_string(&mut self, buf: &mut String) -> io::Result<usize> {
        let (front, back) = self.as_slices();
        let mut bytes = Vec::with_capacity(front.len() + back.len());
        bytes.extend_from_slice(front);
        bytes.extend_from_slice(back);
        // Nothing is consumed if the content is not utf-8.
        let text = String::from_utf8(bytes)
            .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
        self.skip(self.used());
        buf.push_str(&text);
        Ok(text.len())
    }
}

fn partial_element() -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, "buffer is smaller than one element")
}
