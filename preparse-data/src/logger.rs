//! The interface a preliminary scan records its findings through.

use preparse_common::{LanguageMode, MessageTemplate, ParseErrorType, Word};

use crate::raw;
use crate::FunctionFlags;

/// Everything recorded about one function found by a preliminary scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FunctionEntry {
    /// Source position where the function starts.
    pub start: u32,
    /// Source position where the function ends.
    pub end: u32,
    /// Number of formal parameters.
    pub num_parameters: u32,
    /// The function's `length`, i.e. the parameters before the first default or rest parameter.
    pub function_length: u32,
    /// Whether the parameter list declares the same name more than once.
    pub has_duplicate_parameters: bool,
    /// Number of object and array literal slots in the body.
    pub num_literals: u32,
    /// Expected number of properties assigned in the body.
    pub num_properties: u32,
    /// Language mode of the body.
    pub language_mode: LanguageMode,
    /// Whether the body accesses a property through `super`.
    pub uses_super_property: bool,
    /// Whether the body contains a direct call to `eval`.
    pub calls_eval: bool,
}

impl FunctionEntry {
    /// The packed flags word of this entry.
    pub fn flags(&self) -> FunctionFlags {
        FunctionFlags::encode(
            self.language_mode,
            self.uses_super_property,
            self.calls_eval,
            self.has_duplicate_parameters,
        )
    }

    /// Serializes the entry as a function record, in wire order.
    pub fn to_words(&self) -> [Word; raw::FUNCTION_RECORD_WORDS] {
        let mut words = [0; raw::FUNCTION_RECORD_WORDS];
        words[raw::FUNCTION_START_POS] = self.start;
        words[raw::FUNCTION_END_POS] = self.end;
        words[raw::FUNCTION_PARAMETER_COUNT_POS] = self.num_parameters;
        words[raw::FUNCTION_LENGTH_POS] = self.function_length;
        words[raw::FUNCTION_LITERAL_COUNT_POS] = self.num_literals;
        words[raw::FUNCTION_PROPERTY_COUNT_POS] = self.num_properties;
        words[raw::FUNCTION_FLAGS_POS] = self.flags().to_word();
        words
    }
}

/// Receives functions and errors found by a preliminary scan.
///
/// A scan reports any number of functions, or gives up at the first syntax error. Once an error
/// was logged, callers must not log further functions.
pub trait PreparseLogger {
    /// Records a function that a later parse may skip.
    fn log_function(&mut self, entry: FunctionEntry);

    /// Records the syntax error that ended the scan.
    fn log_message(
        &mut self,
        start_pos: u32,
        end_pos: u32,
        message: MessageTemplate,
        arg: Option<&str>,
        error_type: ParseErrorType,
    );
}

impl<L: PreparseLogger + ?Sized> PreparseLogger for &mut L {
    fn log_function(&mut self, entry: FunctionEntry) {
        (**self).log_function(entry)
    }

    fn log_message(
        &mut self,
        start_pos: u32,
        end_pos: u32,
        message: MessageTemplate,
        arg: Option<&str>,
        error_type: ParseErrorType,
    ) {
        (**self).log_message(start_pos, end_pos, message, arg, error_type)
    }
}

/// A logger that discards everything, for scans that do not produce preparse data.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullLogger;

impl PreparseLogger for NullLogger {
    fn log_function(&mut self, _entry: FunctionEntry) {}

    fn log_message(
        &mut self,
        _start_pos: u32,
        _end_pos: u32,
        _message: MessageTemplate,
        _arg: Option<&str>,
        _error_type: ParseErrorType,
    ) {
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_order() {
        let entry = FunctionEntry {
            start: 10,
            end: 50,
            num_parameters: 2,
            function_length: 1,
            has_duplicate_parameters: true,
            num_literals: 3,
            num_properties: 4,
            language_mode: LanguageMode::Sloppy,
            uses_super_property: false,
            calls_eval: false,
        };
        assert_eq!(entry.to_words(), [10, 50, 2, 1, 3, 4, 8]);
        assert_eq!(entry.flags(), FunctionFlags::HAS_DUPLICATE_PARAMETERS);
    }

    fn scan<L: PreparseLogger>(mut logger: L) {
        logger.log_function(FunctionEntry::default());
        logger.log_message(0, 1, MessageTemplate::new(0), None, ParseErrorType::SyntaxError);
    }

    #[test]
    fn test_null_logger() {
        let mut logger = NullLogger;
        scan(&mut logger);
        scan(logger);
    }
}
