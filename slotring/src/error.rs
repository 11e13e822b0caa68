use core::fmt;

/// The error type of ring buffer construction.
///
/// Only setting up a buffer can fail. Once a buffer exists, writing and reading are total and
/// report partial progress through their returned counts instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// The region does not divide into a usable number of element slots.
    ///
    /// The number of slots, the region length divided by the element size, must be a power of two
    /// and at least two. A single slot can not tell a full buffer from an empty one. Zero sized
    /// elements and slot counts beyond the range of the logical index are rejected as well.
    InvalidCapacity,
}

/// The result type of ring buffer construction.
pub type Result<T> = core::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::InvalidCapacity => write!(f, "element count is not a power of two of at least two"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
