/*
[INPUT]:  Mock HTTP responses and registry fixtures
[OUTPUT]: Test results for the request dispatcher
[POS]:    Integration tests - registry lookup, signing, verb handling
[UPDATE]: When dispatch, signing or response handling changes
*/

mod common;

use common::{
    TEST_API_KEY, TEST_MAPPER, TEST_SECRET_KEY, client_with_mapper, setup_mock_server,
    test_config, test_credentials,
};
use serde_json::json;
use tokio_test::assert_ok;
use wazirx_client::{ClientConfig, Params, Registry, RequestSigner, WazirxClient, WazirxError};
use wiremock::matchers::{any, body_string, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn test_public_get_sends_no_query_and_no_api_key() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v1/ping"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with_mapper(&server, TEST_MAPPER);
    let response = assert_ok!(client.call("ping", Some(&Params::new())).await);
    assert_eq!(response, json!({}));

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.query(), None);
    assert!(requests[0].headers.get("x-api-key").is_none());
    assert!(requests[0].body.is_empty());
}

#[tokio::test]
async fn test_signed_post_sends_signed_body_and_api_key() {
    let server = setup_mock_server().await;
    let signature = RequestSigner::new(TEST_SECRET_KEY)
        .expect("signer")
        .sign("side=buy&symbol=btcinr");

    Mock::given(method("POST"))
        .and(path("/v1/order"))
        .and(header("x-api-key", TEST_API_KEY))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string(format!("side=buy&symbol=btcinr&signature={signature}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 42, "status": "wait"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with_mapper(&server, TEST_MAPPER);
    let params = Params::new().with("symbol", "btcinr").with("side", "buy");
    let response = assert_ok!(client.call("create_order", Some(&params)).await);
    assert_eq!(response["id"], 42);

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests[0].url.query(), None);
    // caller's bag is left untouched
    assert!(params.get("signature").is_none());
}

#[tokio::test]
async fn test_signed_delete_puts_params_in_query() {
    let server = setup_mock_server().await;
    Mock::given(method("DELETE"))
        .and(path("/v1/order"))
        .and(query_param("symbol", "btcinr"))
        .and(query_param("orderId", "17"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 17})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with_mapper(&server, TEST_MAPPER);
    let params = Params::new().with("symbol", "btcinr").with("orderId", 17);
    assert_ok!(client.call("cancel_order", Some(&params)).await);

    let requests = server.received_requests().await.expect("recording enabled");
    let request = &requests[0];
    assert!(request.body.is_empty());
    assert_eq!(request.headers.get("x-api-key").map(|v| v.as_bytes()), Some(TEST_API_KEY.as_bytes()));

    let query = request.url.query().expect("query present");
    let (unsigned, signature) = query.split_once("&signature=").expect("signature last");
    let signer = RequestSigner::new(TEST_SECRET_KEY).expect("signer");
    assert_eq!(unsigned, "orderId=17&symbol=btcinr");
    assert_eq!(signature, signer.sign(unsigned));
}

#[tokio::test]
async fn test_unknown_operation_makes_no_request() {
    let server = setup_mock_server().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_with_mapper(&server, TEST_MAPPER);
    let err = client
        .call("nonexistent_op", Some(&Params::new()))
        .await
        .expect_err("unknown operation must fail");

    assert!(matches!(err, WazirxError::InvalidOperation { ref name } if name == "nonexistent_op"));
    let requests = server.received_requests().await.expect("recording enabled");
    assert!(requests.is_empty());
}

#[tokio::test]
async fn test_empty_registry_rejects_everything() {
    let server = setup_mock_server().await;
    let client = assert_ok!(WazirxClient::with_registry(
        test_credentials(),
        test_config(&server),
        Registry::from_json_or_empty("not json at all"),
    ));

    let err = client.call("ping", None).await.expect_err("empty registry");
    assert!(matches!(err, WazirxError::InvalidOperation { .. }));
}

#[tokio::test]
async fn test_empty_and_non_json_bodies_decode_to_empty_object() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v1/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_string(""))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/ping"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
        .mount(&server)
        .await;

    let client = client_with_mapper(&server, TEST_MAPPER);
    assert_eq!(assert_ok!(client.call("ping", None).await), json!({}));
    assert_eq!(assert_ok!(client.call("ping", None).await), json!({}));
}

#[tokio::test]
async fn test_non_success_status_is_api_error() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v1/ping"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with_mapper(&server, TEST_MAPPER);
    let err = client.call("ping", None).await.expect_err("503 must fail");

    match &err {
        WazirxError::Api { code, message } => {
            assert_eq!(*code, 503);
            assert_eq!(message, "maintenance");
        }
        other => panic!("Expected Api error, got {other:?}"),
    }
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_connection_failure_is_transport_error() {
    // nothing listens on port 1
    let config = ClientConfig::default().with_base_url("http://127.0.0.1:1");
    let registry = Registry::from_json(TEST_MAPPER).expect("mapper");
    let client = assert_ok!(WazirxClient::with_registry(test_credentials(), config, registry));

    let err = client.call("ping", None).await.expect_err("connection refused");
    assert!(matches!(err, WazirxError::Transport(_)));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_encoding_ignores_insertion_order() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/v1/order"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(2)
        .mount(&server)
        .await;

    let client = client_with_mapper(&server, TEST_MAPPER);
    let forward = Params::new().with("symbol", "btcinr").with("orderId", 9).with("limit", 3);
    let backward = Params::new().with("limit", 3).with("orderId", 9).with("symbol", "btcinr");
    assert_ok!(client.call("query_order", Some(&forward)).await);
    assert_ok!(client.call("query_order", Some(&backward)).await);

    let requests = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests[0].url.query(), requests[1].url.query());
}

#[tokio::test]
async fn test_caller_signature_is_replaced_not_duplicated() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/v1/order"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with_mapper(&server, TEST_MAPPER);
    let params = Params::new().with("symbol", "btcinr").with("signature", "forged");
    assert_ok!(client.call("create_order", Some(&params)).await);

    let requests = server.received_requests().await.expect("recording enabled");
    let body = String::from_utf8(requests[0].body.clone()).expect("utf8 body");
    assert_eq!(body.matches("signature=").count(), 1);
    assert!(!body.contains("forged"));
}
