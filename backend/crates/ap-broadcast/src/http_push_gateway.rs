use ap_config::PushConfig;
use ap_core::{
    DeliveryFailure, MulticastResponse, PushGateway, PushGatewayError, PushPayload,
    TokenSendResult,
};

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use futures::future::join_all;
use reqwest::Client as ReqwestClient;
use serde::{Deserialize, Serialize};

const INVALID_ARGUMENT: &str = "INVALID_ARGUMENT";
const TRANSPORT_ERROR: &str = "TRANSPORT";

/// Push gateway speaking the FCM HTTP v1 `messages:send` protocol.
///
/// The v1 API takes one token per request, so a multicast is a set of
/// concurrent requests whose results are collected in token order.
pub struct HttpPushGateway {
    client: ReqwestClient,
    send_url: Option<String>,
    access_token: Option<String>,
}

#[derive(Serialize)]
struct SendRequest<'a> {
    message: Message<'a>,
}

#[derive(Serialize)]
struct Message<'a> {
    token: &'a str,
    notification: Notification<'a>,
    data: &'a BTreeMap<String, String>,
}

#[derive(Serialize)]
struct Notification<'a> {
    title: &'a str,
    body: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<&'a str>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    details: Vec<ErrorDetail>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorDetail {
    #[serde(default)]
    error_code: Option<String>,
}

impl HttpPushGateway {
    pub fn new(
        send_url: Option<String>,
        access_token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, PushGatewayError> {
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PushGatewayError::transport(e.to_string()))?;

        Ok(Self {
            client,
            send_url,
            access_token,
        })
    }

    pub fn from_config(config: &PushConfig) -> Result<Self, PushGatewayError> {
        Self::new(
            config.send_url(),
            config.access_token.clone(),
            Duration::from_secs(config.timeout_secs),
        )
    }

    async fn send_one(&self, url: &str, payload: &PushPayload, token: &str) -> TokenSendResult {
        let body = SendRequest {
            message: Message {
                token,
                notification: Notification {
                    title: &payload.title,
                    body: &payload.body,
                    image: payload.image_url.as_deref(),
                },
                data: &payload.data,
            },
        };

        let mut request = self.client.post(url).json(&body);
        if let Some(access_token) = &self.access_token {
            request = request.bearer_auth(access_token);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                return TokenSendResult::failed(
                    token,
                    DeliveryFailure::transient(TRANSPORT_ERROR, error_chain(&e)),
                );
            }
        };

        let status = response.status();
        if status.is_success() {
            return TokenSendResult::delivered(token);
        }

        let text = response.text().await.unwrap_or_default();
        TokenSendResult::failed(token, classify_error(status.as_u16(), &text))
    }
}

/// Classify an FCM error response.
///
/// The specific `errorCode` from the error details wins over the canonical
/// status. `INVALID_ARGUMENT` is only permanent when it is about the token.
/// `reqwest` hides the connect cause behind its source chain.
fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

pub fn classify_error(status: u16, body: &str) -> DeliveryFailure {
    let Ok(envelope) = serde_json::from_str::<ErrorEnvelope>(body) else {
        return DeliveryFailure::transient(format!("HTTP_{}", status), body.to_string());
    };
    let error = envelope.error;

    let code = error
        .details
        .iter()
        .find_map(|d| d.error_code.clone())
        .or(error.status)
        .unwrap_or_else(|| format!("HTTP_{}", status));

    if code == INVALID_ARGUMENT {
        let about_token = error.message.to_lowercase().contains("token");
        return DeliveryFailure {
            code,
            message: error.message,
            permanent: about_token,
        };
    }

    DeliveryFailure::from_code(code, error.message)
}

#[async_trait]
impl PushGateway for HttpPushGateway {
    async fn send_multicast(
        &self,
        payload: &PushPayload,
        tokens: &[String],
    ) -> Result<MulticastResponse, PushGatewayError> {
        let Some(url) = self.send_url.as_deref() else {
            return Err(PushGatewayError::not_configured("push.project_id is not set"));
        };

        let responses = join_all(
            tokens
                .iter()
                .map(|token| self.send_one(url, payload, token)),
        )
        .await;

        Ok(MulticastResponse { responses })
    }
}
