//! The generic status/result wrapper.

use core::fmt;
use core::ops::Deref;

use crate::code::ErrorCode;
use crate::policy::{IntPayload, Integral, PayloadPolicy, Pointer, ValuePayload};

/// Outcome of an operation: an optional payload plus an [`ErrorCode`].
///
/// A `Status` owns exactly one policy-defined storage record inline. It is
/// built once through a shape-named factory, then only ever read; there are
/// no mutating operations and destruction is trivial. Success is defined
/// purely by the stored code — `ok()` and `error().is_ok()` can never
/// disagree.
///
/// The payload category is selected by binding the policy parameter:
///
/// ```
/// use gresult::{ErrorCode, NoPayload, Status, StatusCode};
///
/// // Integral payload: value doubles as the error code on failure.
/// let r = StatusCode::from_flag(5, false);
/// assert!(!r.ok());
/// assert_eq!(r.value(), 5);
/// assert_eq!(r.error(), ErrorCode::new(5));
///
/// // No payload: just a code.
/// let r = Status::<NoPayload>::from_error(ErrorCode::OK);
/// assert!(r.ok());
///
/// // Shapes a category does not support simply do not exist on the type:
/// // `Status::<NoPayload>::from_value(..)` fails to compile.
/// ```
pub struct Status<P: PayloadPolicy> {
    storage: P::Storage,
}

/// The default code-carrying specialization.
pub type StatusCode = Status<Integral<u64>>;

// ── Constructors ──────────────────────────────────────────────────

impl<P: PayloadPolicy> Status<P> {
    /// An uninitialized status: no information was ever supplied.
    /// `ok()` is `false` and `error()` is [`ErrorCode::UNINIT`].
    #[inline]
    pub fn new() -> Self {
        Self { storage: P::init() }
    }

    /// An explicit code and the category's default payload.
    #[inline]
    pub fn from_error(code: ErrorCode) -> Self {
        Self { storage: P::init_error(code) }
    }
}

impl<P: ValuePayload> Status<P> {
    /// A value with no error: implies success.
    #[inline]
    pub fn from_value(value: P::Value) -> Self {
        Self { storage: P::init_value(value) }
    }

    /// Value and code, stored verbatim.
    #[inline]
    pub fn from_parts(value: P::Value, code: ErrorCode) -> Self {
        Self { storage: P::init_parts(value, code) }
    }

    /// The category's default payload (zero, null, `T::default()`).
    #[inline]
    pub fn default_value() -> P::Value {
        P::default_value()
    }
}

impl<T: IntPayload> Status<Integral<T>> {
    /// Value plus a success flag.
    ///
    /// On failure the value is reinterpreted as the error code, except that
    /// a zero value collapses to [`ErrorCode::UNINIT`] so it cannot be
    /// mistaken for a legitimate "error code 0".
    #[inline]
    pub fn from_flag(value: T, ok: bool) -> Self {
        Self { storage: Integral::init_flag(value, ok) }
    }
}

impl<T> Status<Pointer<T>> {
    /// A null pointer with no explicit code: a generic acquisition failure
    /// carrying [`ErrorCode::NO_RESOURCE`].
    #[inline]
    pub fn null() -> Self {
        Self { storage: Pointer::init_null() }
    }
}

// ── Accessors ─────────────────────────────────────────────────────

impl<P: PayloadPolicy> Status<P> {
    /// Whether the stored code is the no-error code.
    #[inline]
    pub fn ok(&self) -> bool {
        P::get_ok(&self.storage)
    }

    /// The stored code.
    #[inline]
    pub fn error(&self) -> ErrorCode {
        P::get_error(&self.storage)
    }
}

impl<P: ValuePayload> Status<P> {
    /// The stored value, regardless of `ok()`. Callers that care about the
    /// distinction check `ok()` first.
    #[inline]
    pub fn value(&self) -> P::Value {
        P::value_ref(&self.storage).clone()
    }

    /// Borrow the stored value.
    #[inline]
    pub fn value_ref(&self) -> &P::Value {
        P::value_ref(&self.storage)
    }
}

impl<P: ValuePayload> Deref for Status<P> {
    type Target = P::Value;

    #[inline]
    fn deref(&self) -> &P::Value {
        P::value_ref(&self.storage)
    }
}

// ── Value semantics ───────────────────────────────────────────────

impl<P: PayloadPolicy> Clone for Status<P> {
    #[inline]
    fn clone(&self) -> Self {
        Self { storage: self.storage.clone() }
    }
}

impl<P: PayloadPolicy> Copy for Status<P> where P::Storage: Copy {}

impl<P: PayloadPolicy> Default for Status<P> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<P: PayloadPolicy> PartialEq for Status<P> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.storage == other.storage
    }
}

impl<P: PayloadPolicy> Eq for Status<P> where P::Storage: Eq {}

// ── Display / Debug ───────────────────────────────────────────────

impl<P: PayloadPolicy> fmt::Display for Status<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, ", if self.ok() { "succ" } else { "fail" })?;
        if P::CARRIES_VALUE {
            f.write_str("value = ")?;
        }
        P::format(&self.storage, f)
    }
}

impl<P: PayloadPolicy> fmt::Debug for Status<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Status").field("storage", &self.storage).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{Generic, NoPayload};
    use core::ptr;

    #[test]
    fn flag_true_is_ok_for_nonzero() {
        for v in [1u64, 2, 42, u64::MAX] {
            let r = StatusCode::from_flag(v, true);
            assert!(r.ok());
            assert_eq!(r.error(), ErrorCode::OK);
            assert_eq!(r.value(), v);
        }
    }

    #[test]
    fn flag_false_zero_is_uninit_not_code_zero() {
        let r = StatusCode::from_flag(0, false);
        assert!(!r.ok());
        assert_eq!(r.error(), ErrorCode::UNINIT);
        assert_ne!(r.error(), ErrorCode::new(0));
    }

    #[test]
    fn flag_false_nonzero_carries_value_as_code() {
        let r = StatusCode::from_flag(5, false);
        assert!(!r.ok());
        assert_eq!(r.error(), ErrorCode::new(5));
        assert_eq!(r.value(), 5);
    }

    #[test]
    fn void_default_is_uninit() {
        let r = Status::<NoPayload>::new();
        assert!(!r.ok());
        assert_eq!(r.error(), ErrorCode::UNINIT);

        let r = Status::<NoPayload>::from_error(ErrorCode::OK);
        assert!(r.ok());
    }

    #[test]
    fn pointer_null_shapes() {
        let r = Status::<Pointer<u8>>::null();
        assert!(!r.ok());
        assert!(r.value().is_null());
        assert_eq!(r.error(), ErrorCode::NO_RESOURCE);

        let custom = ErrorCode::new(12);
        let r = Status::<Pointer<u8>>::from_parts(ptr::null_mut(), custom);
        assert!(r.value().is_null());
        assert_eq!(r.error(), custom);
    }

    #[test]
    fn pointer_value_implies_success() {
        let mut x = 0u8;
        let r = Status::<Pointer<u8>>::from_value(&mut x);
        assert!(r.ok());
        assert_eq!(r.value(), &mut x as *mut u8);
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(StatusCode::from_flag(5, true), StatusCode::from_flag(5, true));
        assert_ne!(StatusCode::from_flag(5, true), StatusCode::from_flag(5, false));
        // Two ok results with different values are not equal.
        assert_ne!(StatusCode::from_flag(5, true), StatusCode::from_flag(6, true));
    }

    #[test]
    fn ok_agrees_with_error() {
        let cases = [
            StatusCode::new(),
            StatusCode::from_error(ErrorCode::OK),
            StatusCode::from_error(ErrorCode::new(3)),
            StatusCode::from_value(9),
            StatusCode::from_parts(9, ErrorCode::new(4)),
            StatusCode::from_flag(0, false),
            StatusCode::from_flag(1, false),
        ];
        for r in cases {
            assert_eq!(r.ok(), r.error().is_ok());
        }
    }

    #[test]
    fn round_trip_reads_back_arguments() {
        let r = StatusCode::from_parts(7, ErrorCode::new(99));
        assert_eq!(r.value(), 7);
        assert_eq!(r.error(), ErrorCode::new(99));

        let r = StatusCode::from_value(11);
        assert_eq!(r.value(), 11);
        assert_eq!(r.error(), ErrorCode::OK);

        let r = StatusCode::from_error(ErrorCode::new(2));
        assert_eq!(r.value(), 0); // default value
        assert_eq!(r.error(), ErrorCode::new(2));
    }

    #[test]
    fn generic_payload() {
        let r = Status::<Generic<String>>::from_value("done".to_string());
        assert!(r.ok());
        assert_eq!(r.value(), "done");
        assert_eq!(*r, "done"); // deref

        let r = Status::<Generic<String>>::from_error(ErrorCode::new(8));
        assert!(!r.ok());
        assert_eq!(r.value(), "");
    }

    #[test]
    fn deref_reads_the_value() {
        let r = StatusCode::from_flag(5, false);
        assert_eq!(*r, 5); // readable even when not ok
    }

    #[test]
    fn copy_and_clone() {
        let a = StatusCode::from_flag(5, true);
        let b = a; // Copy — Paired<u64> is Copy
        assert_eq!(a, b);

        let a = Status::<Generic<String>>::from_value("x".to_string());
        let b = a.clone();
        assert_eq!(a, b);
    }

    #[test]
    fn default_matches_new() {
        assert_eq!(StatusCode::default(), StatusCode::new());
        assert_eq!(Status::<NoPayload>::default(), Status::<NoPayload>::new());
    }

    #[test]
    fn display_integral() {
        assert_eq!(format!("{}", StatusCode::from_flag(5, true)), "succ, value = 5");
        assert_eq!(format!("{}", StatusCode::from_flag(5, false)), "fail, value = 5");
    }

    #[test]
    fn display_void() {
        assert_eq!(
            format!("{}", Status::<NoPayload>::new()),
            "fail, error = uninitialized"
        );
        assert_eq!(
            format!("{}", Status::<NoPayload>::from_error(ErrorCode::OK)),
            "succ, error = ok"
        );
        assert_eq!(
            format!("{}", Status::<NoPayload>::from_error(ErrorCode::new(110))),
            "fail, error = 110"
        );
    }

    #[test]
    fn display_pointer() {
        let r = Status::<Pointer<u8>>::null();
        assert_eq!(format!("{}", r), "fail, value = 0x0, error = -1");

        let mut x = 0u8;
        let p = &mut x as *mut u8;
        let r = Status::<Pointer<u8>>::from_value(p);
        assert_eq!(format!("{}", r), format!("succ, value = {:p}", p));
    }

    #[test]
    fn send_sync_value_payloads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StatusCode>();
        assert_send_sync::<Status<NoPayload>>();
        assert_send_sync::<Status<Generic<String>>>();
    }
}
