#![doc = include_str!("../README.md")]

pub mod blank;
pub mod error;
pub mod extensions;
pub mod iter;
pub mod maybe;
pub mod outcome;

#[cfg(feature = "serde")]
mod serde_impl;

/// Useful exports to get started quickly
pub mod prelude {
    pub use crate::blank::Blank;
    pub use crate::error::{CapturedPanic, Error, Errors, IntoErrors};
    pub use crate::extensions::Wrap;
    pub use crate::maybe::{maybe, none, some, Maybe};
    pub use crate::outcome::{failure, success, Outcome};
}
