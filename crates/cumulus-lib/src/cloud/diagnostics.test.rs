use super::*;

fn request_record(operation: &str, body: &str) -> DiagnosticRecord {
    DiagnosticRecord::new(
        "Making request for {} with params: {}",
        vec![operation.to_string(), body.to_string()],
    )
}

#[test]
fn test_create_function_body_is_redacted() {
    let mut record = request_record("CreateFunction", "{\"ZipFile\": \"UEsDBBQAAAAI...\"}");

    assert!(LargeRequestBodyFilter.filter(&mut record));
    assert_eq!(record.args[0], "CreateFunction");
    assert_eq!(record.args[1], OMITTED_BODY_PLACEHOLDER);
}

#[test]
fn test_update_function_code_body_is_redacted() {
    let mut record = request_record("UpdateFunctionCode", "UEsDBBQAAAAI");

    assert!(LargeRequestBodyFilter.filter(&mut record));
    assert_eq!(record.args.last().unwrap(), OMITTED_BODY_PLACEHOLDER);
}

#[test]
fn test_only_last_argument_is_replaced() {
    let mut record = DiagnosticRecord::new(
        "Making request for {} to {} with params: {}",
        vec![
            "CreateFunction".to_string(),
            "https://lambda.us-east-1.amazonaws.com".to_string(),
            "UEsDBBQAAAAI".to_string(),
        ],
    );

    assert!(LargeRequestBodyFilter.filter(&mut record));
    assert_eq!(record.args[1], "https://lambda.us-east-1.amazonaws.com");
    assert_eq!(record.args[2], OMITTED_BODY_PLACEHOLDER);
}

#[test]
fn test_unrelated_operation_is_unchanged() {
    let original = request_record("ListFunctions", "{}");
    let mut record = original.clone();

    assert!(LargeRequestBodyFilter.filter(&mut record));
    assert_eq!(record, original);
}

#[test]
fn test_other_message_prefix_is_unchanged() {
    let original = DiagnosticRecord::new(
        "Response body: {} {}",
        vec!["CreateFunction".to_string(), "payload".to_string()],
    );
    let mut record = original.clone();

    assert!(LargeRequestBodyFilter.filter(&mut record));
    assert_eq!(record, original);
}

#[test]
fn test_record_without_arguments_is_kept() {
    let mut record = DiagnosticRecord::new("Making request", Vec::new());
    assert!(LargeRequestBodyFilter.filter(&mut record));
    assert!(record.args.is_empty());
}

#[test]
fn test_render_substitutes_in_order() {
    let record = request_record("CreateFunction", "{}");
    assert_eq!(
        record.render(),
        "Making request for CreateFunction with params: {}"
    );

    let short = DiagnosticRecord::new("{} and {}", vec!["one".to_string()]);
    assert_eq!(short.render(), "one and {}");
}

struct DropEverything;

impl RecordFilter for DropEverything {
    fn filter(&self, _record: &mut DiagnosticRecord) -> bool {
        false
    }
}

#[test]
fn test_wire_logger_applies_filters_in_order() {
    let mut logger = WireLogger::new();
    logger.add_filter(Box::new(LargeRequestBodyFilter));

    let processed = logger
        .process(request_record("CreateFunction", "UEsDBBQAAAAI"))
        .unwrap();
    assert_eq!(processed.args[1], OMITTED_BODY_PLACEHOLDER);

    logger.add_filter(Box::new(DropEverything));
    assert!(logger.process(request_record("ListFunctions", "{}")).is_none());
    assert_eq!(logger.filter_count(), 2);
}
