//! Common functionality for preparse data.
//!
//! This crate exposes a set of key types:
//!
//!  - [`ScriptData`]: Exclusively owns a finalized, word-aligned preparse data buffer.
//!  - [`LanguageMode`]: The language mode a function was scanned in.
//!  - [`ParseErrorType`]: The kind of error raised for a logged syntax error.
//!  - [`MessageTemplate`]: The id of the diagnostic message describing a logged error.
//!
//! # Features
//!
//! - `serde` (optional): Implements `serde::Deserialize` and `serde::Serialize` for the plain
//!   data types in this crate.

#![warn(missing_docs)]

mod script_data;
mod types;

pub use crate::script_data::*;
pub use crate::types::*;
