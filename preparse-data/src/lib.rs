//! Provides preparse data support.
//!
//! A preliminary scan over a script records just enough about every function it skips over (its
//! boundaries, parameter shape and a few language mode facts) for the full parse to skip those
//! functions later. If the preliminary scan hits a syntax error, it records that error instead, so
//! the full parse can report it right away.
//!
//! This crate contains the writer for that binary log. Reading it back is up to its consumers.
//!
//! # Structure of preparse data
//!
//! Preparse data is a sequence of `u32` words in native byte order. It starts with a fixed
//! five-word preamble, followed by a variable-length section:
//!
//! ```text
//! [0] magic ("PRSD")
//! [1] format version
//! [2] has_error (0 or 1)
//! [3] functions_size: number of words in the section below
//! [4] reserved, always 0
//! [5 .. 5 + functions_size]
//! ```
//!
//! The variable-length section holds either any number of function records, or exactly one
//! error record. Logging an error drops all function records logged before it.
//!
//! ## Function records
//!
//! Seven words per function: start position, end position, number of parameters, function length,
//! number of literals, number of properties, and a flags word. See [`FunctionFlags`] for the bit
//! layout of the flags word.
//!
//! ## Error records
//!
//! Five fixed words: start position, end position, argument count (`0` or `1`), the
//! [`ParseErrorType`](preparse_common::ParseErrorType) and the
//! [`MessageTemplate`](preparse_common::MessageTemplate) id. If there is an argument, its length in
//! bytes follows, then one word per byte of the argument.
//!
//! # Example
//!
//! ```text
//! log_function(start: 10, end: 50, parameters: 2, length: 40, literals: 3, properties: 1,
//!              strict, calls eval)
//! ```
//!
//! is written as:
//!
//! ```text
//! [magic, version, 0, 7, 0, 10, 50, 2, 40, 3, 1, 0b0101]
//! ```

#![warn(missing_docs)]

mod error;
mod flags;
mod logger;
pub mod raw;
mod word_log;
mod writer;

pub use error::*;
pub use flags::*;
pub use logger::*;
pub use word_log::*;
pub use writer::*;
