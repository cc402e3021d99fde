//! # gresult — Generic Result
//!
//! A zero-dependency status/result value type: the outcome of an operation
//! together with an optional payload, carried as plain inline storage with
//! no panics, no heap, and no runtime dispatch.
//!
//! ## Design
//!
//! A [`Status`] binds exactly one payload policy as its generic parameter:
//!
//! - [`NoPayload`] — just an [`ErrorCode`].
//! - [`Generic<T>`] — `(value, code)` for arbitrary payloads.
//! - [`Integral<T>`] — integral payloads; adds the `(value, ok)` flag shape
//!   where a failing value is reinterpreted as the error code.
//! - [`Pointer<T>`] — raw-pointer payloads; a bare null implies a generic
//!   acquisition failure.
//!
//! Construction shapes are named factories resolved at compile time; a shape
//! a category does not support does not exist on that type. After
//! construction a `Status` is only ever read: `ok()`, `value()`, `error()`,
//! structural equality, `Display`.
//!
//! ## Quick Start
//!
//! ```rust
//! use gresult::{ErrorCode, NoPayload, Pointer, Status, StatusCode};
//!
//! // Integral: the value doubles as the error code on failure.
//! let r = StatusCode::from_flag(5, false);
//! assert!(!r.ok());
//! assert_eq!(r.error(), ErrorCode::new(5));
//!
//! // Failing with a zero value cannot fabricate "error code 0".
//! let r = StatusCode::from_flag(0, false);
//! assert_eq!(r.error(), ErrorCode::UNINIT);
//!
//! // Status-only operations.
//! let r = Status::<NoPayload>::from_error(ErrorCode::OK);
//! assert!(r.ok());
//!
//! // Pointer acquisition.
//! let r = Status::<Pointer<u8>>::null();
//! assert_eq!(r.error(), ErrorCode::NO_RESOURCE);
//! assert_eq!(format!("{}", r), "fail, value = 0x0, error = -1");
//! ```
//!
//! ## Dependencies
//!
//! Zero. By design.

mod code;
mod policy;
mod status;

// ── Public API ────────────────────────────────────────────────────

pub use code::ErrorCode;
pub use policy::{Generic, IntPayload, Integral, NoPayload, Paired, PayloadPolicy, Pointer, ValuePayload};
pub use status::{Status, StatusCode};
