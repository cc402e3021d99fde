//! Validated aligned allocate/deallocate with a never-fault boundary.
//!
//! Every internal failure — bad arguments, OS allocation errors — is
//! converted into a null return (or a no-op) plus a sink diagnostic. Nothing
//! ever panics across this boundary; callers check the returned pointer.

use std::ptr;

use gresult::{Pointer, Status};

use crate::platform;
use crate::sink::DiagSink;

/// Pointer acquisition reported in the shared status idiom.
pub type AllocStatus = Status<Pointer<u8>>;

/// Check that bytes is not 0 and that the alignment is a power of two.
fn verify_args(sink: &dyn DiagSink, bytes: usize, alignment: usize) -> bool {
    if bytes == 0 {
        return false;
    }
    if !alignment.is_power_of_two() {
        sink.error(format_args!(
            "invalid bytes = {}, alignment = {}",
            bytes, alignment
        ));
        return false;
    }
    true
}

/// Allocates storage of at least `bytes` bytes, aligned to `alignment`.
///
/// `alignment` shall be a power of two. Returns null if storage of the
/// requested size and alignment cannot be obtained; the reason is reported
/// through `sink`.
pub fn allocate(sink: &dyn DiagSink, bytes: usize, alignment: usize) -> *mut u8 {
    if !verify_args(sink, bytes, alignment) {
        return ptr::null_mut();
    }
    platform::aligned_alloc(sink, bytes, alignment)
}

/// Deallocates the storage pointed to by `p`. A null `p` is a no-op, as are
/// arguments that fail validation.
///
/// # Safety
///
/// A non-null `p` must have been returned by a prior [`allocate`] call with
/// the same `bytes` and `alignment`, and must not have been deallocated
/// already.
pub unsafe fn deallocate(sink: &dyn DiagSink, p: *mut u8, bytes: usize, alignment: usize) {
    if p.is_null() {
        return;
    }
    if !verify_args(sink, bytes, alignment) {
        return;
    }
    platform::aligned_free(p);
}

/// [`allocate`], wrapped in the status idiom: a null result becomes
/// `AllocStatus::null()` (code [`gresult::ErrorCode::NO_RESOURCE`]).
pub fn allocate_status(sink: &dyn DiagSink, bytes: usize, alignment: usize) -> AllocStatus {
    let p = allocate(sink, bytes, alignment);
    if p.is_null() {
        AllocStatus::null()
    } else {
        AllocStatus::from_value(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gresult::ErrorCode;
    use std::cell::RefCell;
    use std::fmt;

    struct CaptureSink {
        messages: RefCell<Vec<String>>,
    }

    impl CaptureSink {
        fn new() -> Self {
            Self { messages: RefCell::new(Vec::new()) }
        }

        fn count(&self) -> usize {
            self.messages.borrow().len()
        }
    }

    impl DiagSink for CaptureSink {
        fn error(&self, args: fmt::Arguments<'_>) {
            self.messages.borrow_mut().push(args.to_string());
        }
    }

    #[test]
    fn zero_bytes_returns_null_silently() {
        let sink = CaptureSink::new();
        assert!(allocate(&sink, 0, 8).is_null());
        assert_eq!(sink.count(), 0);
    }

    #[test]
    fn non_power_of_two_alignment_is_rejected_and_logged() {
        let sink = CaptureSink::new();
        assert!(allocate(&sink, 16, 3).is_null());
        assert_eq!(sink.count(), 1);
        assert!(sink.messages.borrow()[0].contains("alignment = 3"));
    }

    #[test]
    fn zero_alignment_is_rejected_and_logged() {
        let sink = CaptureSink::new();
        assert!(allocate(&sink, 16, 0).is_null());
        assert_eq!(sink.count(), 1);
    }

    #[test]
    fn deallocate_null_is_a_noop() {
        let sink = CaptureSink::new();
        unsafe { deallocate(&sink, std::ptr::null_mut(), 16, 8) };
        assert_eq!(sink.count(), 0);
    }

    #[test]
    fn round_trip_produces_no_diagnostic() {
        let sink = CaptureSink::new();
        let p = allocate(&sink, 64, 16);
        assert!(!p.is_null());
        assert_eq!(p as usize % 16, 0);
        unsafe { deallocate(&sink, p, 64, 16) };
        assert_eq!(sink.count(), 0);
    }

    #[test]
    fn small_alignment_uses_plain_allocation() {
        let sink = CaptureSink::new();
        let p = allocate(&sink, 32, 8);
        assert!(!p.is_null());
        assert_eq!(p as usize % 8, 0);
        unsafe { deallocate(&sink, p, 32, 8) };
        assert_eq!(sink.count(), 0);
    }

    #[test]
    fn page_alignment_is_honored() {
        let sink = CaptureSink::new();
        let p = allocate(&sink, 128, 4096);
        assert!(!p.is_null());
        assert_eq!(p as usize % 4096, 0);
        unsafe { deallocate(&sink, p, 128, 4096) };
        assert_eq!(sink.count(), 0);
    }

    #[test]
    fn allocated_memory_is_writable() {
        let sink = CaptureSink::new();
        let p = allocate(&sink, 64, 16);
        assert!(!p.is_null());
        unsafe {
            std::ptr::write_bytes(p, 0xAB, 64);
            assert_eq!(*p, 0xAB);
            assert_eq!(*p.add(63), 0xAB);
            deallocate(&sink, p, 64, 16);
        }
    }

    #[test]
    fn allocate_status_success_carries_pointer() {
        let sink = CaptureSink::new();
        let r = allocate_status(&sink, 64, 16);
        assert!(r.ok());
        assert!(!r.value().is_null());
        unsafe { deallocate(&sink, r.value(), 64, 16) };
    }

    #[test]
    fn allocate_status_failure_is_no_resource() {
        let sink = CaptureSink::new();
        let r = allocate_status(&sink, 0, 8);
        assert!(!r.ok());
        assert!(r.value().is_null());
        assert_eq!(r.error(), ErrorCode::NO_RESOURCE);
    }
}
