//! An owning wrapper around finalized preparse data.
//!
//! See the [`ScriptData`] struct for more documentation.

use std::collections::TryReserveError;
use std::fmt;
use std::ops::Deref;

use crate::Word;

/// Minimum alignment of the buffer behind every [`ScriptData`].
pub const SCRIPT_DATA_ALIGN: usize = 8;

/// Two words of storage, aligned so the whole buffer can be viewed as `#[repr(C)]` structures.
#[repr(C, align(8))]
#[derive(Clone, Copy, Default)]
struct WordPair([Word; 2]);

const _: () = assert!(std::mem::size_of::<WordPair>() == 2 * std::mem::size_of::<Word>());
const _: () = assert!(std::mem::align_of::<WordPair>() == SCRIPT_DATA_ALIGN);
const _: () = assert!(std::mem::align_of::<WordPair>() >= std::mem::align_of::<usize>());

/// Exclusively owns one immutable, word-aligned preparse data buffer.
///
/// The buffer starts at an address aligned to [`SCRIPT_DATA_ALIGN`], which is at least the
/// alignment of a pointer, so readers may reinterpret it as a typed structure. A `ScriptData`
/// dereferences into its bytes in native byte order.
///
/// The buffer is released when the `ScriptData` is dropped. Wrapper types that want to take over
/// the buffer implement `From<ScriptData>`.
///
/// # Example
///
/// ```
/// use preparse_common::ScriptData;
///
/// let data = ScriptData::try_from_words(3, |words| words.copy_from_slice(&[1, 2, 3])).unwrap();
/// assert_eq!(data.as_words(), &[1, 2, 3]);
/// assert_eq!(data.len(), 12);
/// ```
#[derive(Clone)]
pub struct ScriptData {
    pairs: Vec<WordPair>,
    words: usize,
}

impl ScriptData {
    /// Allocates a zeroed buffer of `words` words and initializes it with `fill`.
    ///
    /// Returns an error instead of aborting if the allocation cannot be satisfied.
    pub fn try_from_words<F>(words: usize, fill: F) -> Result<Self, TryReserveError>
    where
        F: FnOnce(&mut [Word]),
    {
        let num_pairs = words.div_ceil(2);
        let mut pairs = Vec::new();
        pairs.try_reserve_exact(num_pairs)?;
        pairs.resize(num_pairs, WordPair::default());

        let mut data = ScriptData { pairs, words };
        fill(data.as_words_mut());
        Ok(data)
    }

    /// The number of bytes in the buffer.
    pub fn len(&self) -> usize {
        self.words * std::mem::size_of::<Word>()
    }

    /// The number of words in the buffer.
    pub fn word_len(&self) -> usize {
        self.words
    }

    /// Returns `true` if the buffer holds no data.
    pub fn is_empty(&self) -> bool {
        self.words == 0
    }

    /// Returns the buffer as a slice of words.
    pub fn as_words(&self) -> &[Word] {
        debug_assert!(self.words <= self.pairs.len() * 2);
        // SAFETY: `WordPair` is `repr(C)` around `[Word; 2]` without padding, so the pairs are a
        // contiguous run of initialized words, and `words` never exceeds their number.
        unsafe { std::slice::from_raw_parts(self.pairs.as_ptr() as *const Word, self.words) }
    }

    /// Returns the buffer as a slice of bytes in native byte order.
    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY: see `as_words`. Every `Word` is plain old data, so its bytes are initialized.
        unsafe { std::slice::from_raw_parts(self.pairs.as_ptr() as *const u8, self.len()) }
    }

    /// Releases the buffer into a plain vector of words.
    ///
    /// The returned vector only guarantees the alignment of [`Word`].
    pub fn into_words(self) -> Vec<Word> {
        self.as_words().to_vec()
    }

    fn as_words_mut(&mut self) -> &mut [Word] {
        // SAFETY: see `as_words`.
        let ptr = self.pairs.as_mut_ptr() as *mut Word;
        unsafe { std::slice::from_raw_parts_mut(ptr, self.words) }
    }
}

impl Deref for ScriptData {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        self.as_bytes()
    }
}

impl AsRef<[u8]> for ScriptData {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl PartialEq for ScriptData {
    fn eq(&self, other: &Self) -> bool {
        self.as_words() == other.as_words()
    }
}

impl Eq for ScriptData {}

impl fmt::Debug for ScriptData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScriptData")
            .field("words", &self.words)
            .field("aligned", &(self.pairs.as_ptr() as usize % SCRIPT_DATA_ALIGN == 0))
            .finish()
    }
}
