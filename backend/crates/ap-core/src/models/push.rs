use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Gateway error codes that mean the token will never work again.
pub const PERMANENT_TOKEN_ERROR_CODES: &[&str] = &[
    "UNREGISTERED",
    "NOT_FOUND",
    "messaging/registration-token-not-registered",
    "messaging/invalid-registration-token",
];

/// Multi-token push message for a single recipient.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PushPayload {
    pub title: String,
    pub body: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub data: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryFailure {
    pub code: String,
    pub message: String,
    /// The token is dead and should be removed.
    pub permanent: bool,
}

impl DeliveryFailure {
    /// Classify a gateway error code as permanent or transient.
    pub fn from_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        let code = code.into();
        let permanent = PERMANENT_TOKEN_ERROR_CODES.contains(&code.as_str());
        Self {
            code,
            message: message.into(),
            permanent,
        }
    }

    pub fn transient(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            permanent: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSendResult {
    pub token: String,
    pub error: Option<DeliveryFailure>,
}

impl TokenSendResult {
    pub fn delivered(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            error: None,
        }
    }

    pub fn failed(token: impl Into<String>, failure: DeliveryFailure) -> Self {
        Self {
            token: token.into(),
            error: Some(failure),
        }
    }

    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Per-token outcome of one gateway call, in request order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MulticastResponse {
    pub responses: Vec<TokenSendResult>,
}

impl MulticastResponse {
    pub fn success_count(&self) -> usize {
        self.responses.iter().filter(|r| r.is_success()).count()
    }

    pub fn failure_count(&self) -> usize {
        self.responses.len() - self.success_count()
    }

    /// Tokens the gateway reported as permanently invalid.
    pub fn dead_tokens(&self) -> impl Iterator<Item = &str> {
        self.responses.iter().filter_map(|r| match &r.error {
            Some(failure) if failure.permanent => Some(r.token.as_str()),
            _ => None,
        })
    }
}
