//! # Pullflow: Lazy Pull-Based Sequence Processing
//!
//! Build lazy pipelines over pull sources and drive them with folds that can
//! stop early.
//!
//! ## Core Types
//!
//! - **[`Pull`]**: The one capability every source and adapter implements
//! - **[`Iter<P>`]**: Handle over a source exposing every operation
//! - **[`ControlFlow<A>`]**: `Continue`/`Break` signal for short-circuiting folds
//! - **[`OptionExt`]**: Strict accessors missing from [`Option`]
//!
//! ## Key Features
//!
//! - **Lazy**: Adapters pull nothing until the pipeline is driven
//! - **Two primitives**: Every terminal is a [`Iter::fold`] or an [`Iter::try_fold`]
//! - **Fused**: Once a source reports exhaustion, every adapter on it stays exhausted
//!
//! ## Example
//!
//! ```
//! use pullflow::prelude::*;
//!
//! let pairs = vector(vec![-1, -6])
//!     .zip(vector(vec![0, 1, 2, 3]))
//!     .collect();
//! assert_eq!(pairs, vec![(-1, 0), (-6, 1)]);
//!
//! let mut it = range(0, 10, 1);
//! assert!(it.any(|x| x == 3));
//! assert_eq!(it.next(), Some(4));
//! ```
//!
//! ## Common Functions
//!
//! **Sources:**
//! - [`range(start, end, step)`](sources::range) - Arithmetic progression, `end` excluded
//! - [`vector(items)`](sources::vector) - Owned in-memory sequence
//! - [`slice(items)`](sources::slice) - Borrowed in-memory sequence
//! - [`from_fn(f)`](sources::from_fn) - Closure-backed source
//!
//! **Adapters:** `map`, `filter`, `chain`, `zip`, `enumerate`, `take_while`, `take`
//!
//! **Terminals:** `fold`, `try_fold`, `fold_first`, `count`, `last`, `for_each`,
//! `collect`, `all`, `any`, `find`, `position`, `skip_while`, `skip`,
//! `advance_by`, `nth`

pub mod adapters;
mod error;
mod flow;
mod iter;
mod option;
pub mod prelude;
mod pull;
pub mod sources;

pub use error::{Error, Result};
pub use flow::ControlFlow;
pub use iter::{IntoIter, Iter};
pub use option::OptionExt;
pub use pull::Pull;
