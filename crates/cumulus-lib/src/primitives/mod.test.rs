use super::*;
use std::error::Error;

macro_rules! test_enum_completeness {
    ($enum_type:ty, $test_name:ident) => {
        #[test]
        fn $test_name() {
            for variant in <$enum_type>::value_variants() {
                let possible_value = variant.to_possible_value();
                assert!(
                    possible_value.is_some(),
                    "PossibleValue should exist for all variants"
                );

                // Round-trip through the primary name
                let possible_val = possible_value.unwrap();
                let primary_name = possible_val.get_name();
                let parsed: Result<$enum_type, _> = primary_name.parse();
                assert_eq!(
                    parsed.unwrap(),
                    *variant,
                    "Round-trip should preserve variant"
                );
            }
        }
    };
}

macro_rules! test_fromstr_aliases {
    ($enum_type:ty, $test_name:ident, $expected_mappings:expr) => {
        #[test]
        fn $test_name() {
            let mappings: &[(&str, $enum_type)] = &$expected_mappings;

            for (input, expected) in mappings {
                let parsed: Result<$enum_type, _> = input.parse();
                assert_eq!(
                    parsed.unwrap(),
                    *expected,
                    "Wrong variant for input '{}'",
                    input
                );
            }
        }
    };
}

test_enum_completeness!(LogLevel, test_log_level_completeness);
test_enum_completeness!(LogFormat, test_log_format_completeness);
test_enum_completeness!(LogOutput, test_log_output_completeness);

test_fromstr_aliases!(
    LogLevel,
    test_log_level_aliases,
    [
        ("error", LogLevel::Error),
        ("err", LogLevel::Error),
        ("warning", LogLevel::Warning),
        ("information", LogLevel::Info),
        ("DEBUG", LogLevel::Debug),
        ("verbose", LogLevel::Trace),
    ]
);

test_fromstr_aliases!(
    LogFormat,
    test_log_format_aliases,
    [
        ("txt", LogFormat::Text),
        ("plain", LogFormat::Text),
        ("json", LogFormat::Json),
        ("full", LogFormat::Pretty),
    ]
);

#[test]
fn test_invalid_value_reports_parse_error() {
    let err = "sideways".parse::<LogOutput>().unwrap_err();
    match err {
        ConfigError::ParseError { value, reason } => {
            assert_eq!(value, "sideways");
            assert_eq!(reason, "invalid log output stream");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_from_verbosity_saturates_at_trace() {
    assert_eq!(LogLevel::from_verbosity(0), LogLevel::Error);
    assert_eq!(LogLevel::from_verbosity(3), LogLevel::Debug);
    assert_eq!(LogLevel::from_verbosity(200), LogLevel::Trace);
    assert_eq!(LogLevel::Warning.as_directive(), "warn");
}

#[test]
fn test_unknown_version_message_carries_literal() {
    let err = FactoryError::UnknownConfigVersion {
        version: "3.0".to_string(),
    };
    assert_eq!(err.to_string(), "Unknown version '3.0' in config.json");
}

#[test]
fn test_config_unreadable_keeps_io_source() {
    let err = FactoryError::ConfigUnreadable {
        project_dir: PathBuf::from("/tmp/not-a-project"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
    };
    let message = err.to_string();
    assert!(message.starts_with("Unable to load the project config file."));
    assert!(message.contains("/tmp/not-a-project"));
    assert!(err.source().is_some());
}
