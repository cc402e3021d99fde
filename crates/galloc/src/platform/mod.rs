//! Platform-specific aligned allocation primitives.
//!
//! Argument validation happens in [`crate::alloc`]; these functions assume
//! `bytes > 0` and a power-of-two `alignment`.

cfg_if::cfg_if! {
    if #[cfg(unix)] {
        mod unix;
        pub(crate) use unix::*;
    } else if #[cfg(windows)] {
        mod windows;
        pub(crate) use windows::*;
    }
}
