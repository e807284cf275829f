use super::*;

#[test]
fn test_filter_directives_scope_crate_level() {
    let directives = filter_directives(LogLevel::Debug);
    assert!(directives.starts_with("cumulus_lib=debug,"));
    assert!(directives.contains("reqwest=warn"));
    assert!(directives.ends_with(",debug"));
}

#[test]
fn test_filter_directives_parse() {
    for level in [LogLevel::Error, LogLevel::Info, LogLevel::Trace] {
        let filter = EnvFilter::try_new(filter_directives(level));
        assert!(filter.is_ok(), "directives for {level:?} should parse");
    }
}

#[test]
fn test_logger_not_initialized_initially() {
    // Other tests may have initialized the global logger already
    assert!(!Logger::is_initialized() || Logger::global().is_some());
}
