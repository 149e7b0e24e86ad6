//! Common types and errors used by preparse data.

use std::fmt;
use std::str;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The unit of preparse data.
///
/// All record fields, preamble fields and size fields are expressed in words.
pub type Word = u32;

/// An error returned for an invalid [`LanguageMode`].
#[derive(Debug)]
pub struct UnknownLanguageModeError;

impl fmt::Display for UnknownLanguageModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown language mode")
    }
}

impl std::error::Error for UnknownLanguageModeError {}

/// The language mode a function body was scanned in.
///
/// This enumeration is represented as `u32` for lowlevel APIs. The numeric value is also the
/// value of the language mode bit in encoded function flags.
#[repr(u32)]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LanguageMode {
    /// Sloppy mode, the default for scripts.
    #[default]
    Sloppy = 0,
    /// Strict mode, entered via `"use strict"`, modules or class bodies.
    Strict = 1,
}

impl LanguageMode {
    /// Creates a `LanguageMode` from its `u32` representation.
    ///
    /// Returns `LanguageMode::Sloppy` for all unknown values.
    ///
    /// # Examples
    ///
    /// ```
    /// use preparse_common::LanguageMode;
    ///
    /// assert_eq!(LanguageMode::from_u32(1), LanguageMode::Strict);
    /// assert_eq!(LanguageMode::from_u32(7), LanguageMode::Sloppy);
    /// ```
    pub fn from_u32(val: u32) -> LanguageMode {
        match val {
            1 => Self::Strict,
            _ => Self::Sloppy,
        }
    }

    /// Returns `true` for [`LanguageMode::Strict`].
    pub fn is_strict(self) -> bool {
        self == Self::Strict
    }

    /// Returns the name of the language mode.
    ///
    /// The name is always given in lower case, suitable for serialization and parsing.
    pub fn name(self) -> &'static str {
        match self {
            LanguageMode::Sloppy => "sloppy",
            LanguageMode::Strict => "strict",
        }
    }
}

impl fmt::Display for LanguageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let formatted = match *self {
            LanguageMode::Sloppy => "sloppy mode",
            LanguageMode::Strict => "strict mode",
        };

        write!(f, "{}", formatted)
    }
}

impl str::FromStr for LanguageMode {
    type Err = UnknownLanguageModeError;

    fn from_str(string: &str) -> Result<LanguageMode, UnknownLanguageModeError> {
        Ok(match string {
            "sloppy" => LanguageMode::Sloppy,
            "strict" => LanguageMode::Strict,
            _ => return Err(UnknownLanguageModeError),
        })
    }
}

/// An error returned for an invalid [`ParseErrorType`].
#[derive(Debug)]
pub struct UnknownParseErrorTypeError;

impl fmt::Display for UnknownParseErrorTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown parse error type")
    }
}

impl std::error::Error for UnknownParseErrorTypeError {}

/// The kind of error object a logged parse error turns into when it is reported.
#[repr(u32)]
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ParseErrorType {
    /// Reported as a `SyntaxError`.
    SyntaxError = 0,
    /// Reported as a `ReferenceError`, e.g. for an invalid assignment target.
    ReferenceError = 1,
}

impl ParseErrorType {
    /// Creates a `ParseErrorType` from its `u32` representation.
    ///
    /// # Examples
    ///
    /// ```
    /// use preparse_common::ParseErrorType;
    ///
    /// assert_eq!(ParseErrorType::from_u32(1), Some(ParseErrorType::ReferenceError));
    /// assert_eq!(ParseErrorType::from_u32(2), None);
    /// ```
    pub fn from_u32(val: u32) -> Option<ParseErrorType> {
        match val {
            0 => Some(Self::SyntaxError),
            1 => Some(Self::ReferenceError),
            _ => None,
        }
    }

    /// Returns the name of the error type, as a snake cased identifier.
    pub fn name(self) -> &'static str {
        match self {
            ParseErrorType::SyntaxError => "syntax_error",
            ParseErrorType::ReferenceError => "reference_error",
        }
    }
}

impl fmt::Display for ParseErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let formatted = match *self {
            ParseErrorType::SyntaxError => "SyntaxError",
            ParseErrorType::ReferenceError => "ReferenceError",
        };

        write!(f, "{}", formatted)
    }
}

impl str::FromStr for ParseErrorType {
    type Err = UnknownParseErrorTypeError;

    fn from_str(string: &str) -> Result<ParseErrorType, UnknownParseErrorTypeError> {
        Ok(match string {
            "syntax_error" => ParseErrorType::SyntaxError,
            "reference_error" => ParseErrorType::ReferenceError,
            _ => return Err(UnknownParseErrorTypeError),
        })
    }
}

/// The id of a diagnostic message template.
///
/// The template table itself lives with the error reporter; preparse data only carries the id
/// so the message can be rebuilt later.
#[repr(transparent)]
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MessageTemplate(u32);

impl MessageTemplate {
    /// Creates a message template reference from its id.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// The numeric id of this template.
    pub const fn id(self) -> u32 {
        self.0
    }
}

impl From<u32> for MessageTemplate {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for MessageTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "message template #{}", self.0)
    }
}
