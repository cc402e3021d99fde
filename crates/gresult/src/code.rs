/// A compact operation error code.
///
/// `ErrorCode` is a `Copy` value wrapping a signed 64-bit code. Code `0` is
/// the one and only "no error" value; every other code carries failure
/// information. Two reserved codes sit far outside the range domain errors
/// normally use:
///
/// | Constant      | Code       | Meaning                                   |
/// |---------------|------------|-------------------------------------------|
/// | `OK`          | `0`        | explicit success                          |
/// | `NO_RESOURCE` | `-1`       | generic allocation/acquisition failure    |
/// | `UNINIT`      | `i64::MIN` | constructed with no information at all    |
///
/// Equality, ordering and hashing all follow the raw code.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ErrorCode {
    code: i64,
}

impl ErrorCode {
    /// The "no error" code. The only code for which `is_ok()` holds.
    pub const OK: ErrorCode = ErrorCode::new(0);

    /// Generic "resource could not be acquired" failure. Used when a null
    /// pointer is reported without a more specific code.
    pub const NO_RESOURCE: ErrorCode = ErrorCode::new(-1);

    /// Sentinel for a code that was never supplied.
    ///
    /// Distinct from `OK` and from every ordinary failure code, including
    /// `NO_RESOURCE`.
    pub const UNINIT: ErrorCode = ErrorCode::new(i64::MIN);

    /// Construct an `ErrorCode` from a raw code.
    ///
    /// ```
    /// use gresult::ErrorCode;
    /// const ERR_TIMEOUT: ErrorCode = ErrorCode::new(110);
    /// ```
    #[inline]
    pub const fn new(code: i64) -> Self {
        Self { code }
    }

    /// The raw code.
    #[inline]
    pub const fn code(&self) -> i64 {
        self.code
    }

    /// `true` only for the `OK` code.
    #[inline]
    pub const fn is_ok(&self) -> bool {
        self.code == 0
    }

    /// `true` for every code except `OK`.
    #[inline]
    pub const fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// `true` only for the `UNINIT` sentinel.
    #[inline]
    pub const fn is_uninit(&self) -> bool {
        self.code == i64::MIN
    }
}

/// A default-constructed code carries no error.
impl Default for ErrorCode {
    #[inline]
    fn default() -> Self {
        Self::OK
    }
}

impl From<i64> for ErrorCode {
    #[inline]
    fn from(code: i64) -> Self {
        Self::new(code)
    }
}

// ── Display / Debug ───────────────────────────────────────────────

impl core::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match *self {
            Self::OK => write!(f, "ok"),
            Self::UNINIT => write!(f, "uninitialized"),
            _ => write!(f, "{}", self.code),
        }
    }
}

impl core::fmt::Debug for ErrorCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match *self {
            Self::UNINIT => write!(f, "ErrorCode(uninit)"),
            _ => write!(f, "ErrorCode({})", self.code),
        }
    }
}
