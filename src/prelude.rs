//! Prelude module for datepicker_helpers crate.
//!
//! Re-exports commonly used derive macros from derive_more.

pub use derive_more::{Display, From, Into};
