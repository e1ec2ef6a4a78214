//! [`SmsSender`] implementation for CPSMS.

use super::client::CpSmsClient;
use super::errors::{CpSmsError, Result};
use super::types::{GroupSmsRequest, SingleSmsRequest};
use crate::providers::traits::SmsSender;
use crate::types::SendResult;

#[cfg(feature = "tracing")]
use tracing::debug;

impl SmsSender for CpSmsClient {
    type Error = CpSmsError;

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "CpSmsClient::send_sms", skip_all)
    )]
    async fn send_sms(&self, message: &str, from: &str, to: &str) -> Result<SendResult> {
        if from.is_empty() {
            return Err(CpSmsError::empty("from"));
        }
        if to.is_empty() {
            return Err(CpSmsError::empty("to"));
        }

        let body = self
            .send(&SingleSmsRequest { message, from, to })
            .await?;

        #[cfg(feature = "tracing")]
        debug!("Single SMS submitted");

        Ok(SendResult::from(body))
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "CpSmsClient::send_group_sms",
            skip_all,
            fields(recipients = to.len())
        )
    )]
    async fn send_group_sms(&self, message: &str, from: &str, to: &[String]) -> Result<SendResult> {
        if from.is_empty() {
            return Err(CpSmsError::empty("from"));
        }
        if to.is_empty() {
            return Err(CpSmsError::empty("to_group"));
        }
        if let Some(index) = to.iter().position(|recipient| recipient.is_empty()) {
            return Err(CpSmsError::InvalidArgument {
                field: "to_group",
                reason: format!("recipient at index {index} is empty"),
            });
        }

        let body = self
            .send_group(&GroupSmsRequest {
                message,
                from,
                to_group: to,
            })
            .await?;

        #[cfg(feature = "tracing")]
        debug!("Group SMS submitted");

        Ok(SendResult::from(body))
    }

    async fn check_balance(&self) -> Result<String> {
        self.credit_value().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ClassifiedError;
    use crate::providers::cpsms::config::CpSmsConfig;
    use url::Url;
    use wiremock::matchers::{any, body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> CpSmsClient {
        let config = CpSmsConfig::builder("user", "key")
            .base_url(Url::parse(&format!("{}/v2/", server.uri())).unwrap())
            .build()
            .unwrap();
        CpSmsClient::from_config(config).unwrap()
    }

    /// Mounts a catch-all mock that fails verification if any request arrives.
    async fn expect_no_requests(server: &MockServer) {
        Mock::given(any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_send_sms_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v2/send"))
            .and(body_json(serde_json::json!({
                "message": "Test",
                "from": "Sender",
                "to": "4512345678"
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(r#"{"success":[{"to":"4512345678","cost":1}]}"#),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server);
        let result = client.send_sms("Test", "Sender", "4512345678").await;

        assert!(result.is_ok());
        assert_eq!(
            result.unwrap().as_str(),
            r#"{"success":[{"to":"4512345678","cost":1}]}"#
        );
    }

    #[tokio::test]
    async fn test_send_sms_allows_empty_message() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v2/send"))
            .and(body_json(serde_json::json!({
                "message": "",
                "from": "Sender",
                "to": "4512345678"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server);
        assert!(client.send_sms("", "Sender", "4512345678").await.is_ok());
    }

    #[tokio::test]
    async fn test_send_sms_empty_from_is_rejected_without_request() {
        let mock_server = MockServer::start().await;
        expect_no_requests(&mock_server).await;

        let client = test_client(&mock_server);
        let err = client.send_sms("Test", "", "4512345678").await.unwrap_err();

        assert!(err.is_invalid_argument());
        assert!(matches!(
            err,
            CpSmsError::InvalidArgument { field: "from", .. }
        ));
    }

    #[tokio::test]
    async fn test_send_sms_empty_to_is_rejected_without_request() {
        let mock_server = MockServer::start().await;
        expect_no_requests(&mock_server).await;

        let client = test_client(&mock_server);
        let err = client.send_sms("Test", "Sender", "").await.unwrap_err();

        assert!(matches!(err, CpSmsError::InvalidArgument { field: "to", .. }));
    }

    #[tokio::test]
    async fn test_send_group_sms_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v2/sendgroup"))
            .and(body_json(serde_json::json!({
                "message": "Race starts at 10",
                "from": "Sender",
                "to_group": ["4511111111", "4522222222"]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"success":[]}"#))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server);
        let to = vec!["4511111111".to_string(), "4522222222".to_string()];
        let result = client
            .send_group_sms("Race starts at 10", "Sender", &to)
            .await
            .unwrap();

        assert_eq!(result.as_str(), r#"{"success":[]}"#);
    }

    #[tokio::test]
    async fn test_send_group_sms_empty_list_is_rejected_without_request() {
        let mock_server = MockServer::start().await;
        expect_no_requests(&mock_server).await;

        let client = test_client(&mock_server);
        let err = client
            .send_group_sms("Test", "Sender", &[])
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            CpSmsError::InvalidArgument {
                field: "to_group",
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_send_group_sms_empty_from_is_rejected_without_request() {
        let mock_server = MockServer::start().await;
        expect_no_requests(&mock_server).await;

        let client = test_client(&mock_server);
        let to = vec!["4511111111".to_string()];
        let err = client.send_group_sms("Test", "", &to).await.unwrap_err();

        assert!(matches!(
            err,
            CpSmsError::InvalidArgument { field: "from", .. }
        ));
    }

    #[tokio::test]
    async fn test_send_group_sms_empty_entry_is_rejected_without_request() {
        let mock_server = MockServer::start().await;
        expect_no_requests(&mock_server).await;

        let client = test_client(&mock_server);
        let to = vec!["4511111111".to_string(), String::new()];
        let err = client.send_group_sms("Test", "Sender", &to).await.unwrap_err();

        match err {
            CpSmsError::InvalidArgument { field, reason } => {
                assert_eq!(field, "to_group");
                assert_eq!(reason, "recipient at index 1 is empty");
            }
            other => panic!("Expected InvalidArgument, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_check_balance_returns_raw_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v2/creditvalue"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"credit":"9.843,40"}"#))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = test_client(&mock_server);
        let body = client.check_balance().await.unwrap();

        assert_eq!(body, r#"{"credit":"9.843,40"}"#);
    }
}
