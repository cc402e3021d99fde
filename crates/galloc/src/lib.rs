//! # galloc — aligned platform allocator
//!
//! Aligned allocate/deallocate over the OS allocator with a strict
//! never-fault boundary: invalid arguments and internal allocation failures
//! come back as a null pointer (or a no-op) plus a diagnostic on an
//! explicitly supplied sink — never as a panic.
//!
//! ## Quick Start
//!
//! ```rust
//! use galloc::{allocate, deallocate, NoopSink, StderrSink};
//!
//! let sink = StderrSink::from_env();
//! let p = allocate(&sink, 64, 16);
//! if !p.is_null() {
//!     // ... use the storage ...
//!     unsafe { deallocate(&sink, p, 64, 16) };
//! }
//!
//! // Logger-free contexts substitute the no-op sink.
//! assert!(allocate(&NoopSink, 16, 3).is_null());
//! ```
//!
//! Failures can also be consumed in the shared status idiom:
//!
//! ```rust
//! use galloc::{allocate_status, NoopSink};
//! use gresult::ErrorCode;
//!
//! let r = allocate_status(&NoopSink, 0, 8);
//! assert!(!r.ok());
//! assert_eq!(r.error(), ErrorCode::NO_RESOURCE);
//! ```

mod alloc;
mod platform;
mod sink;

// ── Public API ────────────────────────────────────────────────────

pub use alloc::{allocate, allocate_status, deallocate, AllocStatus};
pub use sink::{DiagSink, NoopSink, StderrSink};
