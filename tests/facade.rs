//! End-to-end tests of the facade against a mocked CPSMS API.

use sportstiming_sms::cpsms::{AuthEncoding, CpSmsConfig};
use sportstiming_sms::{ClassifiedError, ErrorKind, SmsServiceError, SportstimingSms};
use std::time::Duration;
use url::Url;
use wiremock::matchers::{any, body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn facade(server: &MockServer) -> SportstimingSms {
    facade_with(server, AuthEncoding::Literal)
}

fn facade_with(server: &MockServer, encoding: AuthEncoding) -> SportstimingSms {
    let config = CpSmsConfig::builder("sportstiming", "secret-key")
        .base_url(Url::parse(&format!("{}/v2", server.uri())).unwrap())
        .timeout(Duration::from_secs(5))
        .auth_encoding(encoding)
        .build()
        .unwrap();
    SportstimingSms::from_config(config).unwrap()
}

// =============================================================================
// Async API
// =============================================================================

#[tokio::test]
async fn test_single_send_scenario() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/send"))
        .and(header("authorization", "Basic sportstiming:secret-key"))
        .and(body_json(serde_json::json!({
            "message": "Test",
            "from": "Sender",
            "to": "4512345678"
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(r#"{"success":[{"to":"4512345678","cost":1,"smsAmount":1}]}"#),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let sms = facade(&mock_server);
    let result = sms
        .send_sms_async("Test", "Sender", "4512345678")
        .await
        .unwrap();

    assert_eq!(
        result.as_str(),
        r#"{"success":[{"to":"4512345678","cost":1,"smsAmount":1}]}"#
    );
}

#[tokio::test]
async fn test_group_send_scenario() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/sendgroup"))
        .and(header("authorization", "Basic sportstiming:secret-key"))
        .and(body_json(serde_json::json!({
            "message": "Race starts at 10",
            "from": "Sender",
            "to_group": ["4511111111", "4522222222"]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"success":[]}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let sms = facade(&mock_server);
    let to = vec!["4511111111".to_string(), "4522222222".to_string()];
    let result = sms
        .send_group_sms_async("Race starts at 10", "Sender", &to)
        .await
        .unwrap();

    assert_eq!(result.as_str(), r#"{"success":[]}"#);
}

#[tokio::test]
async fn test_vendor_error_body_is_passed_through() {
    let mock_server = MockServer::start().await;

    let body = r#"{"error":[{"code":409,"message":"Not enough credit"}]}"#;
    Mock::given(method("POST"))
        .and(path("/v2/send"))
        .respond_with(ResponseTemplate::new(400).set_body_string(body))
        .mount(&mock_server)
        .await;

    let sms = facade(&mock_server);
    let result = sms
        .send_sms_async("Test", "Sender", "4512345678")
        .await
        .unwrap();

    assert_eq!(result.as_str(), body);
}

#[tokio::test]
async fn test_invalid_arguments_never_reach_the_network() {
    let mock_server = MockServer::start().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let sms = facade(&mock_server);

    let err = sms.send_sms_async("Test", "", "4512345678").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    let err = sms.send_sms_async("Test", "Sender", "").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    let err = sms
        .send_group_sms_async("Test", "Sender", &[])
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
}

#[tokio::test]
async fn test_check_credit_returns_locale_text() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/creditvalue"))
        .and(header("authorization", "Basic sportstiming:secret-key"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"credit":"9.843,40"}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let sms = facade(&mock_server);
    let credit = sms.check_credit_async().await.unwrap();

    assert_eq!(credit.as_str(), "9.843,40");
}

#[tokio::test]
async fn test_check_credit_without_field_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/creditvalue"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_string(r#"{"error":{"code":401,"message":"Unauthorized"}}"#),
        )
        .mount(&mock_server)
        .await;

    let sms = facade(&mock_server);
    let err = sms.check_credit_async().await.unwrap_err();

    assert!(err.is_parse());
    match err {
        SmsServiceError::InvalidCreditResponse { body, .. } => {
            assert_eq!(body, r#"{"error":{"code":401,"message":"Unauthorized"}}"#);
        }
        other => panic!("Expected InvalidCreditResponse, got {other:?}"),
    }
}

#[tokio::test]
async fn test_base64_auth_encoding_is_opt_in() {
    let mock_server = MockServer::start().await;

    // base64("sportstiming:secret-key")
    Mock::given(method("GET"))
        .and(path("/v2/creditvalue"))
        .and(header(
            "authorization",
            "Basic c3BvcnRzdGltaW5nOnNlY3JldC1rZXk=",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"credit":"1,00"}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let sms = facade_with(&mock_server, AuthEncoding::Base64);
    let credit = sms.check_credit_async().await.unwrap();

    assert_eq!(credit.as_str(), "1,00");
}

#[tokio::test]
async fn test_unreachable_gateway_is_transport_error() {
    let config = CpSmsConfig::builder("sportstiming", "secret-key")
        .base_url(Url::parse("http://127.0.0.1:1/v2/").unwrap())
        .build()
        .unwrap();
    let sms = SportstimingSms::from_config(config).unwrap();

    let err = sms
        .send_sms_async("Test", "Sender", "4512345678")
        .await
        .unwrap_err();

    assert!(err.is_transport());
}

// =============================================================================
// Blocking API
// =============================================================================

#[test]
fn test_blocking_calls_from_plain_thread() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let mock_server = runtime.block_on(MockServer::start());

    runtime.block_on(async {
        Mock::given(method("POST"))
            .and(path("/v2/send"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"success":[]}"#))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/v2/creditvalue"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"credit":"9.843,40"}"#))
            .expect(1)
            .mount(&mock_server)
            .await;
    });

    let sms = facade(&mock_server);

    let result = sms.send_sms("Test", "Sender", "4512345678").unwrap();
    assert_eq!(result.as_str(), r#"{"success":[]}"#);

    let credit = sms.check_credit().unwrap();
    assert_eq!(credit.as_str(), "9.843,40");

    runtime.block_on(mock_server.verify());
}

#[tokio::test(flavor = "current_thread")]
async fn test_blocking_call_inside_single_threaded_runtime() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/sendgroup"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let sms = facade(&mock_server);
    let to = vec!["4511111111".to_string()];
    let result = sms.send_group_sms("Test", "Sender", &to).unwrap();

    assert_eq!(result.as_str(), "{}");
}

#[tokio::test(flavor = "current_thread")]
async fn test_blocking_call_after_async_call_on_single_threaded_runtime() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v2/send"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"success":[]}"#))
        .expect(2)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/creditvalue"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"credit":"9.843,40"}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = CpSmsConfig::builder("sportstiming", "secret-key")
        .base_url(Url::parse(&format!("{}/v2/", mock_server.uri())).unwrap())
        .timeout(Duration::from_secs(3))
        .build()
        .unwrap();
    let sms = SportstimingSms::from_config(config).unwrap();

    // Leaves a pooled connection owned by this runtime.
    sms.send_sms_async("Test", "Sender", "4512345678")
        .await
        .unwrap();

    let started = std::time::Instant::now();
    let credit = sms.check_credit().unwrap();
    let result = sms.send_sms("Test", "Sender", "4512345678").unwrap();

    assert_eq!(credit.as_str(), "9.843,40");
    assert_eq!(result.as_str(), r#"{"success":[]}"#);
    assert!(started.elapsed() < Duration::from_secs(3));
}

#[test]
fn test_blocking_invalid_argument() {
    let sms = SportstimingSms::new("sportstiming", "secret-key").unwrap();

    let err = sms.send_group_sms("Test", "Sender", &[]).unwrap_err();

    assert!(err.is_invalid_argument());
}
