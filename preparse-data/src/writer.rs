//! Defines the [`PreparseDataWriter`].

use std::mem;

use preparse_common::{MessageTemplate, ParseErrorType, ScriptData, Word};

use super::raw;
use crate::{FunctionEntry, PreparseDataError, PreparseDataErrorKind, PreparseLogger, WordLog};

/// The variable-length section: function records or a single error record, never both.
#[derive(Debug, Clone)]
enum Section {
    Functions(WordLog),
    Error(WordLog),
}

impl Section {
    fn log(&self) -> &WordLog {
        match self {
            Section::Functions(log) | Section::Error(log) => log,
        }
    }
}

/// Records functions or a syntax error found by a preliminary scan.
///
/// A writer is created for one scan, fed with [`log_function`](Self::log_function) calls or a
/// single [`log_message`](Self::log_message), and then consumed by [`finalize`](Self::finalize),
/// which packs the preamble and the records into a [`ScriptData`].
///
/// # Example
///
/// ```
/// use preparse_common::{LanguageMode, MessageTemplate, ParseErrorType};
/// use preparse_data::{FunctionEntry, PreparseDataWriter};
///
/// let mut writer = PreparseDataWriter::new();
/// writer.log_function(FunctionEntry {
///     start: 10,
///     end: 50,
///     language_mode: LanguageMode::Strict,
///     ..Default::default()
/// });
/// assert_eq!(writer.functions_size(), 7);
///
/// writer.log_message(5, 8, MessageTemplate::new(42), None, ParseErrorType::SyntaxError);
/// assert!(writer.has_error());
/// assert_eq!(writer.functions_size(), 5);
///
/// let data = writer.finalize().unwrap();
/// assert_eq!(data.word_len(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct PreparseDataWriter {
    preamble: raw::Preamble,
    section: Section,
}

impl PreparseDataWriter {
    /// Creates a writer with an empty function section.
    pub fn new() -> Self {
        Self {
            preamble: raw::Preamble::new(),
            section: Section::Functions(WordLog::new()),
        }
    }

    /// Returns `true` once an error record was logged.
    pub fn has_error(&self) -> bool {
        matches!(self.section, Section::Error(_))
    }

    /// The current number of words in the variable-length section.
    pub fn functions_size(&self) -> usize {
        self.section.log().len()
    }

    /// Appends a function record.
    ///
    /// Functions logged after an error are ignored.
    pub fn log_function(&mut self, entry: FunctionEntry) {
        let log = match &mut self.section {
            Section::Functions(log) => log,
            Section::Error(_) => {
                tracing::trace!(start = entry.start, "ignoring function logged after an error");
                return;
            }
        };

        for word in entry.to_words() {
            log.add(word);
        }
    }

    /// Replaces all function records with an error record.
    ///
    /// Only the first error is recorded, later calls have no effect.
    pub fn log_message(
        &mut self,
        start_pos: u32,
        end_pos: u32,
        message: MessageTemplate,
        arg: Option<&str>,
        error_type: ParseErrorType,
    ) {
        let mut log = match &mut self.section {
            Section::Functions(log) => mem::take(log),
            Section::Error(_) => {
                tracing::trace!(start_pos, end_pos, "ignoring error after the first one");
                return;
            }
        };

        let discarded = log.len() / raw::FUNCTION_RECORD_WORDS;
        log.reset();

        log.add(start_pos);
        log.add(end_pos);
        log.add(arg.is_some() as Word);
        log.add(error_type as Word);
        log.add(message.id());
        debug_assert_eq!(log.len(), raw::MESSAGE_ARG_POS);

        if let Some(arg) = arg {
            write_string(&mut log, arg);
        }

        tracing::debug!(
            start_pos,
            end_pos,
            message = message.id(),
            %error_type,
            discarded,
            "logged preparse error"
        );

        self.preamble.has_error = 1;
        self.section = Section::Error(log);
    }

    /// Packs the preamble and all records into one word-aligned buffer.
    ///
    /// The returned [`ScriptData`] owns a fresh copy of the data and outlives the writer.
    #[tracing::instrument(level = "trace", name = "PreparseDataWriter::finalize", skip_all)]
    pub fn finalize(self) -> Result<ScriptData, PreparseDataError> {
        let Self {
            mut preamble,
            section,
        } = self;
        let log = section.log();

        let functions_size = log.len();
        preamble.functions_size = u32::try_from(functions_size).map_err(|_| {
            PreparseDataErrorKind::TooLarge {
                words: functions_size,
            }
        })?;
        let total_words = raw::PREAMBLE_WORDS
            .checked_add(functions_size)
            .ok_or(PreparseDataErrorKind::TooLarge {
                words: functions_size,
            })?;

        let data = ScriptData::try_from_words(total_words, |words| {
            let (head, tail) = words.split_at_mut(raw::PREAMBLE_WORDS);
            head.copy_from_slice(&preamble.to_words());
            if functions_size > 0 {
                log.write_to(tail);
            }
        })
        .map_err(|e| {
            PreparseDataError::new(
                PreparseDataErrorKind::AllocationFailed { words: total_words },
                e,
            )
        })?;

        tracing::trace!(
            words = total_words,
            has_error = preamble.has_error,
            "finalized preparse data"
        );
        Ok(data)
    }

    /// Finalizes the data and hands the buffer to a caller-supplied owner.
    pub fn finalize_into<T>(self) -> Result<T, PreparseDataError>
    where
        T: From<ScriptData>,
    {
        self.finalize().map(T::from)
    }
}

impl Default for PreparseDataWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl PreparseLogger for PreparseDataWriter {
    fn log_function(&mut self, entry: FunctionEntry) {
        PreparseDataWriter::log_function(self, entry)
    }

    fn log_message(
        &mut self,
        start_pos: u32,
        end_pos: u32,
        message: MessageTemplate,
        arg: Option<&str>,
        error_type: ParseErrorType,
    ) {
        PreparseDataWriter::log_message(self, start_pos, end_pos, message, arg, error_type)
    }
}

/// Writes the length of `s`, followed by each byte widened to a word.
fn write_string(log: &mut WordLog, s: &str) {
    log.add(s.len() as Word);
    for byte in s.bytes() {
        log.add(Word::from(byte));
    }
}

#[cfg(test)]
mod tests {
    use preparse_common::LanguageMode;
    use watto::Pod;

    use super::*;

    fn entry(start: u32, end: u32) -> FunctionEntry {
        FunctionEntry {
            start,
            end,
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_writer() {
        let data = PreparseDataWriter::new().finalize().unwrap();
        assert_eq!(
            data.as_words(),
            &[raw::PREPARSE_DATA_MAGIC, raw::PREPARSE_DATA_VERSION, 0, 0, 0]
        );
    }

    #[test]
    fn test_functions_size_grows_by_record() {
        let mut writer = PreparseDataWriter::default();
        for i in 0..10 {
            assert_eq!(writer.functions_size(), i * raw::FUNCTION_RECORD_WORDS);
            writer.log_function(entry(i as u32 * 10, i as u32 * 10 + 5));
        }
        assert!(!writer.has_error());

        let data = writer.finalize().unwrap();
        let (preamble, _) = raw::Preamble::ref_from_prefix(data.as_bytes()).unwrap();
        assert_eq!(preamble.functions_size, 70);
        assert_eq!(data.word_len(), raw::PREAMBLE_WORDS + 70);
    }

    #[test]
    fn test_error_replaces_functions() {
        let mut writer = PreparseDataWriter::new();
        writer.log_function(entry(0, 100));
        writer.log_function(entry(100, 200));
        writer.log_message(
            3,
            4,
            MessageTemplate::new(9),
            Some("ab"),
            ParseErrorType::ReferenceError,
        );

        assert!(writer.has_error());
        assert_eq!(writer.functions_size(), 6 + 2);

        let data = writer.finalize().unwrap();
        let (preamble, _) = raw::Preamble::ref_from_prefix(&data).unwrap();
        assert_eq!(preamble.has_error, 1);
        assert_eq!(preamble.functions_size, 8);
        assert_eq!(preamble.total_size, 0);
        assert_eq!(
            &data.as_words()[raw::PREAMBLE_WORDS..],
            &[3, 4, 1, 1, 9, 2, b'a' as u32, b'b' as u32]
        );
    }

    #[test]
    fn test_functions_after_error_are_ignored() {
        let mut writer = PreparseDataWriter::new();
        writer.log_message(1, 2, MessageTemplate::new(3), None, ParseErrorType::SyntaxError);
        writer.log_function(entry(5, 6));
        assert_eq!(writer.functions_size(), raw::MESSAGE_ARG_POS);
    }

    #[test]
    fn test_non_ascii_argument_is_zero_extended() {
        let mut writer = PreparseDataWriter::new();
        writer.log_message(
            0,
            1,
            MessageTemplate::new(0),
            Some("\u{e9}"),
            ParseErrorType::SyntaxError,
        );
        let data = writer.finalize().unwrap();
        assert_eq!(
            &data.as_words()[raw::PREAMBLE_WORDS + raw::MESSAGE_ARG_POS..],
            &[2, 0xc3, 0xa9]
        );
    }

    #[test]
    fn test_finalize_into_custom_owner() {
        struct Owned(Vec<Word>);

        impl From<ScriptData> for Owned {
            fn from(data: ScriptData) -> Self {
                Owned(data.into_words())
            }
        }

        let mut writer = PreparseDataWriter::new();
        writer.log_function(FunctionEntry {
            language_mode: LanguageMode::Strict,
            ..entry(1, 2)
        });
        let owned: Owned = writer.finalize_into().unwrap();
        assert_eq!(owned.0.len(), raw::PREAMBLE_WORDS + raw::FUNCTION_RECORD_WORDS);
        assert_eq!(owned.0[raw::PREAMBLE_WORDS + raw::FUNCTION_FLAGS_POS], 1);
    }

    #[test]
    fn test_preamble_view_is_aligned() {
        let data = PreparseDataWriter::new().finalize().unwrap();
        let (preamble, rest) = raw::Preamble::ref_from_prefix(&data).unwrap();
        assert_eq!(*preamble, raw::Preamble::new());
        assert!(rest.is_empty());
    }
}
