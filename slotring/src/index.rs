//! Logical element indices.
//!
//! A ring buffer counts the elements it has ever accepted and ever handed out. These counters
//! are never reset during normal operation and are allowed to overflow. All arithmetic on them is
//! modular in `2^32`, which is a multiple of every supported capacity, so that both the distance
//! between two counters and the slot a counter maps to remain correct after an overflow.
use core::{fmt, ops};

/// A free running count of elements.
///
/// Similar to a tcp sequence number, only the distance between two indices is meaningful. The
/// distance is always computed with wrapping arithmetic and is assumed to be no larger than the
/// capacity of the buffer the indices belong to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Index(pub u32);

impl Index {
    /// The physical slot of this index for a buffer with the given mask.
    pub fn slot(self, mask: u32) -> usize {
        (self.0 & mask) as usize
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl ops::Add<usize> for Index {
    type Output = Index;

    /// Advance the index by some count.
    ///
    /// Counts are truncated to the width of the index, which is the same as advancing by their
    /// residue.
    fn add(self, rhs: usize) -> Index {
        Index(self.0.wrapping_add(rhs as u32))
    }
}

impl ops::AddAssign<usize> for Index {
    fn add_assign(&mut self, rhs: usize) {
        *self = *self + rhs;
    }
}

impl ops::Sub for Index {
    type Output = usize;

    /// The number of elements between two indices.
    fn sub(self, rhs: Index) -> usize {
        self.0.wrapping_sub(rhs.0) as usize
    }
}

impl From<u32> for Index {
    fn from(raw: u32) -> Self {
        Index(raw)
    }
}

impl From<Index> for u32 {
    fn from(index: Index) -> Self {
        index.0
    }
}
