use preparse_common::Word;

/// An append-only log of words.
///
/// Words can only be appended, dropped all at once via [`reset`](Self::reset), or copied out in
/// bulk via [`write_to`](Self::write_to). Storage grows geometrically.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct WordLog {
    words: Vec<Word>,
}

impl WordLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one word.
    pub fn add(&mut self, word: Word) {
        self.words.push(word);
    }

    /// The number of words appended since creation or the last reset.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` if no words are in the log.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Discards all words, keeping the allocated storage for reuse.
    pub fn reset(&mut self) {
        self.words.clear();
    }

    /// Copies the first `dest.len()` words into `dest`.
    ///
    /// The destination must not be longer than the log.
    pub fn write_to(&self, dest: &mut [Word]) {
        debug_assert!(dest.len() <= self.words.len());
        dest.copy_from_slice(&self.words[..dest.len()]);
    }

    /// The logged words, in append order.
    pub fn as_slice(&self) -> &[Word] {
        &self.words
    }
}
