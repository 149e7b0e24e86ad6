use preparse_common::{LanguageMode, MessageTemplate, ParseErrorType};
use preparse_data::raw::{self, Preamble};
use preparse_data::{FunctionEntry, FunctionFlags, PreparseDataWriter};
use proptest::prelude::*;
use watto::Pod;

fn arb_language_mode() -> impl Strategy<Value = LanguageMode> {
    prop_oneof![Just(LanguageMode::Sloppy), Just(LanguageMode::Strict)]
}

fn arb_error_type() -> impl Strategy<Value = ParseErrorType> {
    prop_oneof![
        Just(ParseErrorType::SyntaxError),
        Just(ParseErrorType::ReferenceError),
    ]
}

prop_compose! {
    fn arb_entry()(
        start in any::<u32>(),
        end in any::<u32>(),
        num_parameters in any::<u32>(),
        function_length in any::<u32>(),
        has_duplicate_parameters in any::<bool>(),
        num_literals in any::<u32>(),
        num_properties in any::<u32>(),
        language_mode in arb_language_mode(),
        uses_super_property in any::<bool>(),
        calls_eval in any::<bool>(),
    ) -> FunctionEntry {
        FunctionEntry {
            start,
            end,
            num_parameters,
            function_length,
            has_duplicate_parameters,
            num_literals,
            num_properties,
            language_mode,
            uses_super_property,
            calls_eval,
        }
    }
}

/// Reads a function record back the way the full parse does.
fn read_entry(record: &[u32]) -> FunctionEntry {
    let flags = FunctionFlags::from_word(record[raw::FUNCTION_FLAGS_POS]).decode();
    FunctionEntry {
        start: record[raw::FUNCTION_START_POS],
        end: record[raw::FUNCTION_END_POS],
        num_parameters: record[raw::FUNCTION_PARAMETER_COUNT_POS],
        function_length: record[raw::FUNCTION_LENGTH_POS],
        has_duplicate_parameters: flags.has_duplicate_parameters,
        num_literals: record[raw::FUNCTION_LITERAL_COUNT_POS],
        num_properties: record[raw::FUNCTION_PROPERTY_COUNT_POS],
        language_mode: flags.language_mode,
        uses_super_property: flags.uses_super_property,
        calls_eval: flags.calls_eval,
    }
}

proptest! {
    #[test]
    fn functions_round_trip(entries in prop::collection::vec(arb_entry(), 0..64)) {
        let mut writer = PreparseDataWriter::new();
        for entry in &entries {
            writer.log_function(*entry);
        }
        let data = writer.finalize().unwrap();

        let (preamble, _) = Preamble::ref_from_prefix(&data).unwrap();
        prop_assert_eq!(preamble.has_error, 0);
        prop_assert_eq!(
            preamble.functions_size as usize,
            raw::FUNCTION_RECORD_WORDS * entries.len()
        );

        let decoded: Vec<_> = data.as_words()[raw::PREAMBLE_WORDS..]
            .chunks(raw::FUNCTION_RECORD_WORDS)
            .map(read_entry)
            .collect();
        prop_assert_eq!(decoded, entries);
    }

    #[test]
    fn error_size_ignores_prior_functions(
        entries in prop::collection::vec(arb_entry(), 0..16),
        arg in proptest::option::of(".{0,24}"),
        error_type in arb_error_type(),
        start_pos in any::<u32>(),
        end_pos in any::<u32>(),
        message in any::<u32>(),
    ) {
        let mut writer = PreparseDataWriter::new();
        for entry in &entries {
            writer.log_function(*entry);
        }
        writer.log_message(
            start_pos,
            end_pos,
            MessageTemplate::new(message),
            arg.as_deref(),
            error_type,
        );
        let data = writer.finalize().unwrap();

        let (preamble, _) = Preamble::ref_from_prefix(&data).unwrap();
        let expected_size = match &arg {
            Some(arg) => raw::MESSAGE_ARG_POS + 1 + arg.len(),
            None => raw::MESSAGE_ARG_POS,
        };
        prop_assert_eq!(preamble.has_error, 1);
        prop_assert_eq!(preamble.functions_size as usize, expected_size);

        let record = &data.as_words()[raw::PREAMBLE_WORDS..];
        prop_assert_eq!(record[raw::MESSAGE_START_POS], start_pos);
        prop_assert_eq!(record[raw::MESSAGE_END_POS], end_pos);
        prop_assert_eq!(record[raw::MESSAGE_ARG_COUNT_POS], arg.is_some() as u32);
        prop_assert_eq!(record[raw::PARSE_ERROR_TYPE_POS], error_type as u32);
        prop_assert_eq!(record[raw::MESSAGE_TEMPLATE_POS], message);
        if let Some(arg) = &arg {
            let bytes: Vec<u8> = record[raw::MESSAGE_ARG_POS + 1..]
                .iter()
                .map(|&word| u8::try_from(word).unwrap())
                .collect();
            prop_assert_eq!(record[raw::MESSAGE_ARG_POS] as usize, arg.len());
            prop_assert_eq!(bytes, arg.as_bytes());
        }
    }

    #[test]
    fn second_error_is_ignored(
        first in proptest::option::of("[a-z]{0,8}"),
        second in proptest::option::of("[a-z]{0,8}"),
    ) {
        let mut once = PreparseDataWriter::new();
        once.log_message(
            1,
            2,
            MessageTemplate::new(3),
            first.as_deref(),
            ParseErrorType::SyntaxError,
        );

        let mut twice = once.clone();
        twice.log_message(
            4,
            5,
            MessageTemplate::new(6),
            second.as_deref(),
            ParseErrorType::ReferenceError,
        );

        prop_assert_eq!(once.finalize().unwrap(), twice.finalize().unwrap());
    }
}
