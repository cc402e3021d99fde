//! Unix aligned allocation via malloc / posix_memalign.

use std::mem;
use std::ptr;

use nix::errno::Errno;

use crate::sink::DiagSink;

pub(crate) fn aligned_alloc(sink: &dyn DiagSink, bytes: usize, alignment: usize) -> *mut u8 {
    if alignment <= mem::align_of::<libc::max_align_t>() {
        // malloc already guarantees max_align_t alignment
        return unsafe { libc::malloc(bytes) }.cast();
    }
    // posix_memalign also requires alignment to be a multiple of
    // sizeof(void*); anything above max_align_t satisfies that.
    let mut p: *mut libc::c_void = ptr::null_mut();
    let ret = unsafe { libc::posix_memalign(&mut p, alignment, bytes) };
    if ret != 0 {
        sink.error(format_args!(
            "posix_memalign(alignment = {}, bytes = {}) fails. error = {}",
            alignment,
            bytes,
            Errno::from_raw(ret).desc()
        ));
        return ptr::null_mut();
    }
    p.cast()
}

/// # Safety
///
/// `p` must have been returned by [`aligned_alloc`] and not yet freed.
pub(crate) unsafe fn aligned_free(p: *mut u8) {
    // Both allocation paths are released with free(3).
    libc::free(p.cast());
}
