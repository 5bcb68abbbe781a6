//! Stateful adapters built on top of [`Iter`](crate::Iter).
//!
//! Each adapter wraps one or two upstream handles and is itself a
//! [`Pull`](crate::Pull) source. Adapters that can stop before their upstream
//! does track that with a [`Phase`] that never leaves `Exhausted` once entered.

mod chain;
mod enumerate;
mod filter;
mod map;
mod take;
mod take_while;
mod zip;

pub use chain::Chain;
pub use enumerate::{Enumerate, Enumeration};
pub use filter::Filter;
pub use map::Map;
pub use take::Take;
pub use take_while::TakeWhile;
pub use zip::Zip;

/// Two-state lifecycle of an adapter that can stop on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Phase {
    Active,
    Exhausted,
}

impl Phase {
    #[inline]
    pub(crate) fn is_exhausted(self) -> bool {
        self == Phase::Exhausted
    }

    /// Move to `Exhausted`. There is no way back.
    pub(crate) fn latch(&mut self, adapter: &'static str) {
        if *self == Phase::Active {
            log::trace!("{adapter}: exhausted");
        }
        *self = Phase::Exhausted;
    }
}
