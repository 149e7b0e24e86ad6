//! Bit layout of the flags word in a function record.
//!
//! The layout is part of the wire format: a reader has to use [`FunctionFlags::from_word`] (or
//! mirror its bits exactly) to get back the values passed to
//! [`FunctionFlags::encode`].

use bitflags::bitflags;
use preparse_common::{LanguageMode, Word};

bitflags! {
    /// Packed language mode and scope facts of a logged function.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    pub struct FunctionFlags: u32 {
        /// The function body is in strict mode. Unset means sloppy mode.
        const STRICT = 1 << 0;
        /// The function accesses a property through `super`.
        const USES_SUPER_PROPERTY = 1 << 1;
        /// The function contains a direct call to `eval`.
        const CALLS_EVAL = 1 << 2;
        /// The formal parameter list declares the same name more than once.
        const HAS_DUPLICATE_PARAMETERS = 1 << 3;
    }
}

/// The unpacked contents of a [`FunctionFlags`] word.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct DecodedFlags {
    /// Language mode of the function body.
    pub language_mode: LanguageMode,
    /// Whether the function accesses a property through `super`.
    pub uses_super_property: bool,
    /// Whether the function directly calls `eval`.
    pub calls_eval: bool,
    /// Whether the parameter list has duplicate names.
    pub has_duplicate_parameters: bool,
}

impl FunctionFlags {
    /// Packs the language mode and scope facts of a function.
    pub fn encode(
        language_mode: LanguageMode,
        uses_super_property: bool,
        calls_eval: bool,
        has_duplicate_parameters: bool,
    ) -> Self {
        let mut flags = Self::empty();
        flags.set(Self::STRICT, language_mode.is_strict());
        flags.set(Self::USES_SUPER_PROPERTY, uses_super_property);
        flags.set(Self::CALLS_EVAL, calls_eval);
        flags.set(Self::HAS_DUPLICATE_PARAMETERS, has_duplicate_parameters);
        flags
    }

    /// Reads a flags word back. Bits outside the known layout are dropped.
    pub fn from_word(word: Word) -> Self {
        Self::from_bits_truncate(word)
    }

    /// The flags as they appear on the wire.
    pub fn to_word(self) -> Word {
        self.bits()
    }

    /// The language mode of the function body.
    pub fn language_mode(self) -> LanguageMode {
        if self.contains(Self::STRICT) {
            LanguageMode::Strict
        } else {
            LanguageMode::Sloppy
        }
    }

    /// Whether the function accesses a property through `super`.
    pub fn uses_super_property(self) -> bool {
        self.contains(Self::USES_SUPER_PROPERTY)
    }

    /// Whether the function directly calls `eval`.
    pub fn calls_eval(self) -> bool {
        self.contains(Self::CALLS_EVAL)
    }

    /// Whether the parameter list has duplicate names.
    pub fn has_duplicate_parameters(self) -> bool {
        self.contains(Self::HAS_DUPLICATE_PARAMETERS)
    }

    /// Unpacks all fields at once.
    pub fn decode(self) -> DecodedFlags {
        DecodedFlags {
            language_mode: self.language_mode(),
            uses_super_property: self.uses_super_property(),
            calls_eval: self.calls_eval(),
            has_duplicate_parameters: self.has_duplicate_parameters(),
        }
    }
}
