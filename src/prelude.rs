//! Commonly used imports
//!
//! Use `use pullflow::prelude::*;` for quick access to the most common types and functions.

// Core types
pub use crate::{ControlFlow, Error, Iter, OptionExt, Pull};

// Sources
pub use crate::sources::{empty, from_fn, from_iterator, once, range, slice, vector};

// Adapter output
pub use crate::adapters::Enumeration;
