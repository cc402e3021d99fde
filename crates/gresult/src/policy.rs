//! Payload policies for [`Status`](crate::Status).
//!
//! Each payload category — none, generic, integral, pointer — is a
//! zero-sized policy type implementing a small closed capability interface.
//! A `Status` binds exactly one policy as its generic parameter; there is no
//! runtime dispatch anywhere in this module.

use core::fmt;
use core::marker::PhantomData;
use core::ptr;

use crate::code::ErrorCode;

// ── Storage ───────────────────────────────────────────────────────

/// Paired storage record for the value-carrying policies.
///
/// A plain fixed-shape record; equality is field-by-field.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Paired<T> {
    pub value: T,
    pub code: ErrorCode,
}

// ── Capability traits ─────────────────────────────────────────────

/// The capability interface every payload category implements.
///
/// `init` produces the uninitialized storage, `init_error` stores an explicit
/// code, and the `get_*` accessors are pure reads. `format` renders the
/// payload tail for diagnostics; the `"succ"`/`"fail"` prefix and the
/// `"value = "` marker are contributed by the wrapper's `Display` hook.
pub trait PayloadPolicy {
    type Storage: Clone + PartialEq + fmt::Debug;

    /// Whether `Status::Display` prints a `value = ` marker before `format`.
    const CARRIES_VALUE: bool;

    /// Storage for "constructed with no information at all".
    fn init() -> Self::Storage;

    /// Storage for an explicit code and the category's default payload.
    fn init_error(code: ErrorCode) -> Self::Storage;

    fn get_ok(storage: &Self::Storage) -> bool;
    fn get_error(storage: &Self::Storage) -> ErrorCode;

    fn format(storage: &Self::Storage, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// Extra capabilities of the value-carrying categories.
pub trait ValuePayload: PayloadPolicy {
    type Value: Clone;

    /// The category's default payload (zero, null, `T::default()`).
    fn default_value() -> Self::Value;

    /// A value with no error implies success.
    fn init_value(value: Self::Value) -> Self::Storage;

    /// Both parts, stored verbatim.
    fn init_parts(value: Self::Value, code: ErrorCode) -> Self::Storage;

    fn value_ref(storage: &Self::Storage) -> &Self::Value;
}

// ── NoPayload ─────────────────────────────────────────────────────

/// Policy for status-only results: the storage is a bare [`ErrorCode`].
pub struct NoPayload;

impl PayloadPolicy for NoPayload {
    type Storage = ErrorCode;

    const CARRIES_VALUE: bool = false;

    #[inline]
    fn init() -> ErrorCode {
        ErrorCode::UNINIT
    }

    #[inline]
    fn init_error(code: ErrorCode) -> ErrorCode {
        code
    }

    #[inline]
    fn get_ok(storage: &ErrorCode) -> bool {
        storage.is_ok()
    }

    #[inline]
    fn get_error(storage: &ErrorCode) -> ErrorCode {
        *storage
    }

    fn format(storage: &ErrorCode, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error = {}", storage)
    }
}

// ── Generic<T> ────────────────────────────────────────────────────

/// Fallback policy for payloads that are neither integral nor pointers.
pub struct Generic<T>(PhantomData<T>);

impl<T> PayloadPolicy for Generic<T>
where
    T: Clone + Default + PartialEq + fmt::Debug,
{
    type Storage = Paired<T>;

    const CARRIES_VALUE: bool = true;

    #[inline]
    fn init() -> Paired<T> {
        Paired { value: T::default(), code: ErrorCode::UNINIT }
    }

    #[inline]
    fn init_error(code: ErrorCode) -> Paired<T> {
        Paired { value: T::default(), code }
    }

    #[inline]
    fn get_ok(storage: &Paired<T>) -> bool {
        storage.code.is_ok()
    }

    #[inline]
    fn get_error(storage: &Paired<T>) -> ErrorCode {
        storage.code
    }

    fn format(storage: &Paired<T>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", storage.value)
    }
}

impl<T> ValuePayload for Generic<T>
where
    T: Clone + Default + PartialEq + fmt::Debug,
{
    type Value = T;

    #[inline]
    fn default_value() -> T {
        T::default()
    }

    #[inline]
    fn init_value(value: T) -> Paired<T> {
        Paired { value, code: ErrorCode::OK }
    }

    #[inline]
    fn init_parts(value: T, code: ErrorCode) -> Paired<T> {
        Paired { value, code }
    }

    #[inline]
    fn value_ref(storage: &Paired<T>) -> &T {
        &storage.value
    }
}

// ── Integral<T> ───────────────────────────────────────────────────

/// Payloads usable as integral codes.
///
/// `as_code` reinterprets the payload in the error-code space (bit-preserving
/// for the full-width types, widening for the narrower ones).
pub trait IntPayload: Copy + Default + PartialEq + fmt::Display + fmt::Debug {
    fn as_code(self) -> ErrorCode;

    #[inline]
    fn is_zero(self) -> bool {
        self == Self::default()
    }
}

macro_rules! impl_int_payload {
    ($($t:ty),* $(,)?) => {$(
        impl IntPayload for $t {
            #[inline]
            fn as_code(self) -> ErrorCode {
                ErrorCode::new(self as i64)
            }
        }
    )*};
}

impl_int_payload!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

/// Policy for integral payloads. Same shapes as [`Generic`], plus the
/// `(value, ok)` flag shape exposed through `Status::from_flag`.
pub struct Integral<T>(PhantomData<T>);

impl<T: IntPayload> Integral<T> {
    /// Flag-shape initialization.
    ///
    /// On failure a zero value stores `ErrorCode::UNINIT` rather than being
    /// reinterpreted as "error code 0"; any other failing value becomes the
    /// error code itself.
    #[inline]
    pub(crate) fn init_flag(value: T, ok: bool) -> Paired<T> {
        let code = if ok {
            ErrorCode::OK
        } else if value.is_zero() {
            ErrorCode::UNINIT
        } else {
            value.as_code()
        };
        Paired { value, code }
    }
}

impl<T: IntPayload> PayloadPolicy for Integral<T> {
    type Storage = Paired<T>;

    const CARRIES_VALUE: bool = true;

    #[inline]
    fn init() -> Paired<T> {
        Paired { value: T::default(), code: ErrorCode::UNINIT }
    }

    #[inline]
    fn init_error(code: ErrorCode) -> Paired<T> {
        Paired { value: T::default(), code }
    }

    #[inline]
    fn get_ok(storage: &Paired<T>) -> bool {
        storage.code.is_ok()
    }

    #[inline]
    fn get_error(storage: &Paired<T>) -> ErrorCode {
        storage.code
    }

    fn format(storage: &Paired<T>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", storage.value)
    }
}

impl<T: IntPayload> ValuePayload for Integral<T> {
    type Value = T;

    #[inline]
    fn default_value() -> T {
        T::default()
    }

    #[inline]
    fn init_value(value: T) -> Paired<T> {
        Paired { value, code: ErrorCode::OK }
    }

    #[inline]
    fn init_parts(value: T, code: ErrorCode) -> Paired<T> {
        Paired { value, code }
    }

    #[inline]
    fn value_ref(storage: &Paired<T>) -> &T {
        &storage.value
    }
}

// ── Pointer<T> ────────────────────────────────────────────────────

/// Policy for raw-pointer payloads.
///
/// The stored pointer is never dereferenced by this crate; it is carried and
/// compared as a plain address.
pub struct Pointer<T>(PhantomData<T>);

impl<T> Pointer<T> {
    /// A null pointer with no explicit code implies a generic acquisition
    /// failure.
    #[inline]
    pub(crate) fn init_null() -> Paired<*mut T> {
        Paired { value: ptr::null_mut(), code: ErrorCode::NO_RESOURCE }
    }
}

impl<T> PayloadPolicy for Pointer<T> {
    type Storage = Paired<*mut T>;

    const CARRIES_VALUE: bool = true;

    #[inline]
    fn init() -> Paired<*mut T> {
        Paired { value: ptr::null_mut(), code: ErrorCode::UNINIT }
    }

    #[inline]
    fn init_error(code: ErrorCode) -> Paired<*mut T> {
        Paired { value: ptr::null_mut(), code }
    }

    #[inline]
    fn get_ok(storage: &Paired<*mut T>) -> bool {
        storage.code.is_ok()
    }

    #[inline]
    fn get_error(storage: &Paired<*mut T>) -> ErrorCode {
        storage.code
    }

    fn format(storage: &Paired<*mut T>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if storage.code.is_ok() {
            write!(f, "{:p}", storage.value)
        } else {
            write!(f, "{:p}, error = {}", storage.value, storage.code)
        }
    }
}

impl<T> ValuePayload for Pointer<T> {
    type Value = *mut T;

    #[inline]
    fn default_value() -> *mut T {
        ptr::null_mut()
    }

    #[inline]
    fn init_value(value: *mut T) -> Paired<*mut T> {
        Paired { value, code: ErrorCode::OK }
    }

    #[inline]
    fn init_parts(value: *mut T, code: ErrorCode) -> Paired<*mut T> {
        Paired { value, code }
    }

    #[inline]
    fn value_ref(storage: &Paired<*mut T>) -> &*mut T {
        &storage.value
    }
}
