//! Leaf sources.
//!
//! These produce items without wrapping another handle. Each constructor returns
//! a ready-to-use [`Iter`](crate::Iter).

mod func;
mod range;
mod vector;

pub use func::{Bridge, Empty, FromFn, Once, empty, from_fn, from_iterator, once};
pub use range::{Range, range};
pub use vector::{Slice, Vector, slice, vector};
