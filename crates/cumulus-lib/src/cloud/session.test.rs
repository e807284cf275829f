use super::*;

fn expected_user_agent() -> String {
    format!(
        "{}/{} {}/{}",
        TOOL_USER_AGENT_NAME, TOOL_VERSION, SDK_USER_AGENT_NAME, SDK_USER_AGENT_VERSION
    )
}

#[test]
fn test_fresh_session_reports_sdk_identity() {
    let session = CloudSession::with_region(None, "eu-west-1");
    assert_eq!(session.user_agent(), "reqwest/0.13");
    assert!(session.wire_logger().is_none());
}

#[test]
fn test_tool_identity_is_primary_for_every_combination() {
    for profile in [None, Some("ops".to_string())] {
        for debug in [false, true] {
            let session =
                customize_session(CloudSession::with_region(profile.clone(), "us-west-2"), debug);

            assert_eq!(session.user_agent_name, TOOL_USER_AGENT_NAME);
            assert_eq!(session.user_agent_version, TOOL_VERSION);
            assert_eq!(session.user_agent_extra.as_deref(), Some("reqwest/0.13"));
            assert_eq!(session.user_agent(), expected_user_agent());
            assert_eq!(session.profile(), profile.as_deref());
        }
    }
}

#[test]
fn test_debug_registers_redaction_filter() {
    let session = customize_session(CloudSession::with_region(None, "us-east-1"), true);

    let logger = session.wire_logger().expect("debug enables wire logging");
    assert_eq!(logger.filter_count(), 1);

    let record = crate::cloud::diagnostics::DiagnosticRecord::new(
        "Making request for {} with params: {}",
        vec!["UpdateFunctionCode".to_string(), "UEsDBBQ".to_string()],
    );
    let processed = logger.process(record).unwrap();
    assert_eq!(
        processed.args[1],
        crate::cloud::diagnostics::OMITTED_BODY_PLACEHOLDER
    );
}

#[test]
fn test_without_debug_no_wire_logging() {
    let session = customize_session(CloudSession::with_region(None, "us-east-1"), false);
    assert!(session.wire_logger().is_none());
}

#[test]
fn test_set_debug_logger_is_idempotent() {
    let mut session = CloudSession::with_region(None, "us-east-1");
    inject_large_request_body_filter(&mut session);
    session.set_debug_logger();

    assert_eq!(session.wire_logger().unwrap().filter_count(), 1);
}

#[test]
fn test_region_resolution_order() {
    let both = RegionEnvironment {
        region: Some("eu-central-1".to_string()),
        default_region: Some("us-west-1".to_string()),
    };
    assert_eq!(both.resolve(), "eu-central-1");

    let fallback = RegionEnvironment {
        region: None,
        default_region: Some("us-west-1".to_string()),
    };
    assert_eq!(fallback.resolve(), "us-west-1");

    assert_eq!(RegionEnvironment::default().resolve(), DEFAULT_REGION);
}

#[test]
fn test_endpoint_url_uses_region() {
    let session = CloudSession::with_region(None, "ap-south-1");
    assert_eq!(
        session.endpoint_url("lambda"),
        "https://lambda.ap-south-1.amazonaws.com"
    );
}
