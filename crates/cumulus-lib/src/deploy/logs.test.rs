use super::*;
use crate::cloud::CloudSession;
use serde_json::Value;

fn client() -> CloudClient {
    CloudClient::new(CloudSession::with_region(None, "us-east-1")).unwrap()
}

#[test]
fn test_log_group_from_function_arn() {
    let retriever = LogRetriever::create_from_arn(
        client(),
        "arn:aws:lambda:us-east-1:123456789012:function:orders-dev",
    )
    .unwrap();

    assert_eq!(retriever.log_group_name(), "/aws/lambda/orders-dev");
}

#[test]
fn test_versioned_arn_uses_function_name() {
    let retriever = LogRetriever::create_from_arn(
        client(),
        "arn:aws:lambda:us-east-1:123456789012:function:orders-dev:7",
    )
    .unwrap();

    assert_eq!(retriever.log_group_name(), "/aws/lambda/orders-dev");
}

#[test]
fn test_malformed_arn_is_rejected() {
    for arn in ["", "orders-dev", "arn:aws:lambda:us-east-1:123456789012:function:"] {
        let err = LogRetriever::create_from_arn(client(), arn).err().unwrap();
        assert!(matches!(err, LogRetrieverError::InvalidArn { .. }), "{arn}");
    }
}

#[test]
fn test_filter_events_request_includes_token() {
    let retriever = LogRetriever::new(client(), "/aws/lambda/orders-dev");
    let request = retriever
        .filter_events_request(Some("page-2"))
        .build()
        .unwrap();

    let body: Value =
        serde_json::from_slice(request.body().and_then(|b| b.as_bytes()).unwrap()).unwrap();
    assert_eq!(body["logGroupName"], "/aws/lambda/orders-dev");
    assert_eq!(body["nextToken"], "page-2");
    assert_eq!(body["interleaved"], true);
}
