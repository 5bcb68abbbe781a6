//! Extra accessors for [`Option`].
//!
//! Every pull returns an `Option`, so the engine uses the standard type directly.
//! [`OptionExt`] fills in the strict accessors `std` does not ship: asserting
//! emptiness, and a non-panicking form of `unwrap`.
//!
//! ```rust
//! use pullflow::{Error, OptionExt};
//!
//! let missing: Option<i32> = None;
//! assert_eq!(missing.try_unwrap(), Err(Error::EmptyUnwrap));
//! assert_eq!(missing.unwrap_or(7), 7);
//! missing.unwrap_none();
//! ```

use crate::error::{Error, Result};

/// Strict accessors over [`Option`] that complement `unwrap` and `expect`.
pub trait OptionExt<T> {
    /// Returns the contained value, or [`Error::EmptyUnwrap`] if there is none.
    fn try_unwrap(self) -> Result<T>;

    /// Asserts the option is empty.
    ///
    /// # Panics
    ///
    /// Panics if the value is a `Some`.
    fn unwrap_none(self);

    /// Asserts the option is empty.
    ///
    /// # Panics
    ///
    /// Panics with `msg` if the value is a `Some`.
    fn expect_none(self, msg: &str);
}

impl<T> OptionExt<T> for Option<T> {
    #[inline]
    fn try_unwrap(self) -> Result<T> {
        self.ok_or(Error::EmptyUnwrap)
    }

    #[inline]
    fn unwrap_none(self) {
        if self.is_some() {
            panic!("called `Option::unwrap_none()` on a `Some` value");
        }
    }

    #[inline]
    fn expect_none(self, msg: &str) {
        if self.is_some() {
            panic!("{}", msg);
        }
    }
}
