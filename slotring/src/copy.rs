//! Copies into and out of a region that wrap around at its end.
//!
//! The run of bytes starting at `offset` is split into the part up to the end of the region and
//! the remainder continuing at its start. Both helpers expect `offset <= region.len()` and a run no
//! longer than the region. An offset past the end panics.

/// Copy `src` into `region` starting at `offset`, continuing at the start of `region`.
pub(crate) fn write_wrapped(region: &mut [u8], offset: usize, src: &[u8]) {
    let first = src.len().min(region.len() - offset);
    let (front, back) = src.split_at(first);
    region[offset..offset + first].copy_from_slice(front);
    region[..back.len()].copy_from_slice(back);
}

/// Fill `dst` from `region` starting at `offset`, continuing at the start of `region`.
pub(crate) fn read_wrapped(region: &[u8], offset: usize, dst: &mut [u8]) {
    let first = dst.len().min(region.len() - offset);
    let (front, back) = dst.split_at_mut(first);
    front.copy_from_slice(&region[offset..offset + first]);
    back.copy_from_slice(&region[..back.len()]);
}
