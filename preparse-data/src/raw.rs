//! The raw preparse data binary format internals.

use preparse_common::Word;
use watto::Pod;

/// The magic file preamble as individual bytes.
const PREPARSE_DATA_MAGIC_BYTES: [u8; 4] = *b"PRSD";

/// The magic preamble word to identify preparse data.
///
/// Serialized as ASCII "PRSD" on little-endian (x64) systems.
pub const PREPARSE_DATA_MAGIC: u32 = u32::from_le_bytes(PREPARSE_DATA_MAGIC_BYTES);
/// The byte-flipped magic, which indicates an endianness mismatch.
pub const PREPARSE_DATA_MAGIC_FLIPPED: u32 = PREPARSE_DATA_MAGIC.swap_bytes();

/// The current Format version
///
/// # Version History
///
/// - 1: Initial version
pub const PREPARSE_DATA_VERSION: u32 = 1;

/// Number of words in the [`Preamble`].
pub const PREAMBLE_WORDS: usize = 5;

/// Preamble offset of [`Preamble::magic`].
pub const MAGIC_OFFSET: usize = 0;
/// Preamble offset of [`Preamble::version`].
pub const VERSION_OFFSET: usize = 1;
/// Preamble offset of [`Preamble::has_error`].
pub const HAS_ERROR_OFFSET: usize = 2;
/// Preamble offset of [`Preamble::functions_size`].
pub const FUNCTIONS_SIZE_OFFSET: usize = 3;
/// Preamble offset of [`Preamble::total_size`].
pub const SIZE_OFFSET: usize = 4;

/// Number of words in one function record.
pub const FUNCTION_RECORD_WORDS: usize = 7;

/// Function record offset of the start position.
pub const FUNCTION_START_POS: usize = 0;
/// Function record offset of the end position.
pub const FUNCTION_END_POS: usize = 1;
/// Function record offset of the number of formal parameters.
pub const FUNCTION_PARAMETER_COUNT_POS: usize = 2;
/// Function record offset of the function's `length`.
pub const FUNCTION_LENGTH_POS: usize = 3;
/// Function record offset of the number of object and array literal slots.
pub const FUNCTION_LITERAL_COUNT_POS: usize = 4;
/// Function record offset of the expected number of properties.
pub const FUNCTION_PROPERTY_COUNT_POS: usize = 5;
/// Function record offset of the encoded [`FunctionFlags`](crate::FunctionFlags).
pub const FUNCTION_FLAGS_POS: usize = 6;

/// Error record offset of the error start position.
pub const MESSAGE_START_POS: usize = 0;
/// Error record offset of the error end position.
pub const MESSAGE_END_POS: usize = 1;
/// Error record offset of the argument count, which is either `0` or `1`.
pub const MESSAGE_ARG_COUNT_POS: usize = 2;
/// Error record offset of the [`ParseErrorType`](preparse_common::ParseErrorType).
pub const PARSE_ERROR_TYPE_POS: usize = 3;
/// Error record offset of the [`MessageTemplate`](preparse_common::MessageTemplate) id.
pub const MESSAGE_TEMPLATE_POS: usize = 4;
/// The optional argument string: its length word, followed by one word per byte.
pub const MESSAGE_ARG_POS: usize = 5;

/// The preparse data preamble.
///
/// The preamble is always present, even when no records were logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct Preamble {
    /// The magic representing the format and endianness.
    pub magic: u32,
    /// The Format Version.
    pub version: u32,
    /// `1` if the variable-length section holds an error record, `0` otherwise.
    pub has_error: u32,
    /// The number of words in the variable-length section.
    pub functions_size: u32,
    /// Reserved total size field. The writer always emits `0`.
    pub total_size: u32,
}

const _: () = assert!(std::mem::size_of::<Preamble>() == PREAMBLE_WORDS * 4);
const _: () = assert!(std::mem::align_of::<Preamble>() == std::mem::align_of::<Word>());

impl Preamble {
    /// The preamble of a freshly created writer.
    pub const fn new() -> Self {
        Self {
            magic: PREPARSE_DATA_MAGIC,
            version: PREPARSE_DATA_VERSION,
            has_error: 0,
            functions_size: 0,
            total_size: 0,
        }
    }

    /// Serializes the preamble in wire order.
    pub fn to_words(&self) -> [Word; PREAMBLE_WORDS] {
        let mut words = [0; PREAMBLE_WORDS];
        words[MAGIC_OFFSET] = self.magic;
        words[VERSION_OFFSET] = self.version;
        words[HAS_ERROR_OFFSET] = self.has_error;
        words[FUNCTIONS_SIZE_OFFSET] = self.functions_size;
        words[SIZE_OFFSET] = self.total_size;
        words
    }
}

impl Default for Preamble {
    fn default() -> Self {
        Self::new()
    }
}

unsafe impl Pod for Preamble {}
