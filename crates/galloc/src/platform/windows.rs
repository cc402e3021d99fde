//! Windows aligned allocation via _aligned_malloc / _aligned_free.

use crate::sink::DiagSink;

pub(crate) fn aligned_alloc(_sink: &dyn DiagSink, bytes: usize, alignment: usize) -> *mut u8 {
    // _aligned_malloc handles every power-of-two alignment itself.
    unsafe { libc::aligned_malloc(bytes, alignment) }.cast()
}

/// # Safety
///
/// `p` must have been returned by [`aligned_alloc`] and not yet freed.
pub(crate) unsafe fn aligned_free(p: *mut u8) {
    libc::aligned_free(p.cast());
}
