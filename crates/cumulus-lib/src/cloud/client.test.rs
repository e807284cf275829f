use super::*;
use crate::cloud::session::customize_session;
use serde_json::json;

fn client(debug: bool) -> CloudClient {
    let session = customize_session(CloudSession::with_region(None, "us-east-1"), debug);
    CloudClient::new(session).unwrap()
}

#[test]
fn test_request_carries_tool_identity() {
    let request = client(false)
        .prepare_request("lambda", "ListFunctions", &json!({}))
        .build()
        .unwrap();

    let agent = request.headers().get(USER_AGENT).unwrap().to_str().unwrap();
    assert!(agent.starts_with("cumulus/"));
    assert!(agent.ends_with(" reqwest/0.13"));
}

#[test]
fn test_request_targets_service_endpoint() {
    let request = client(false)
        .prepare_request("logs", "FilterLogEvents", &json!({"logGroupName": "/aws/lambda/x"}))
        .build()
        .unwrap();

    assert_eq!(request.method(), reqwest::Method::POST);
    assert_eq!(
        request.url().as_str(),
        "https://logs.us-east-1.amazonaws.com/"
    );
    assert_eq!(
        request.headers().get(TARGET_HEADER).unwrap(),
        "FilterLogEvents"
    );
}

#[test]
fn test_debug_client_still_sends_full_body() {
    let params = json!({"FunctionName": "api", "ZipFile": "UEsDBBQAAAAI"});
    let request = client(true)
        .prepare_request("lambda", "UpdateFunctionCode", &params)
        .build()
        .unwrap();

    let body = request.body().and_then(|b| b.as_bytes()).unwrap();
    let sent: Value = serde_json::from_slice(body).unwrap();
    assert_eq!(sent, params);
}
