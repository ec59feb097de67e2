use ap_core::{ConfigTemplate, RemoteConfigError, RemoteConfigService};

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ETAG, IF_MATCH};
use reqwest::{Client as ReqwestClient, RequestBuilder, Response};
use serde::Deserialize;

/// `If-Match` value that matches any version, used when no ETag is known.
const ANY_VERSION: &str = "*";

/// Client for the Firebase Remote Config REST API
/// (`/v1/projects/{project}/remoteConfig`).
pub struct HttpRemoteConfigService {
    client: ReqwestClient,
    template_url: String,
    access_token: Option<String>,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
}

impl HttpRemoteConfigService {
    pub fn new(
        base_url: &str,
        project_id: &str,
        access_token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, RemoteConfigError> {
        let client = ReqwestClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| RemoteConfigError::transport(e.to_string()))?;

        Ok(Self {
            client,
            template_url: format!(
                "{}/v1/projects/{}/remoteConfig",
                base_url.trim_end_matches('/'),
                project_id
            ),
            access_token,
        })
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.access_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn put_template(
        &self,
        url: &str,
        template: &ConfigTemplate,
    ) -> Result<ConfigTemplate, RemoteConfigError> {
        let if_match = template.etag.as_deref().unwrap_or(ANY_VERSION);
        let request = self
            .client
            .put(url)
            .header(IF_MATCH, if_match)
            .json(template);

        let response = self
            .authorized(request)
            .send()
            .await
            .map_err(|e| RemoteConfigError::transport(e.to_string()))?;

        read_template(response).await
    }
}

/// Decode a template response, taking the version marker from `ETag`.
async fn read_template(response: Response) -> Result<ConfigTemplate, RemoteConfigError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(RemoteConfigError::from_status(
            status.as_u16(),
            error_message(&body),
        ));
    }

    let etag = response
        .headers()
        .get(ETAG)
        .and_then(|value| value.to_str().ok())
        .map(String::from);

    let mut template: ConfigTemplate = response
        .json()
        .await
        .map_err(|e| RemoteConfigError::decode(e.to_string()))?;
    template.etag = etag;

    Ok(template)
}

fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(envelope) => envelope.error.message,
        Err(_) => body.to_string(),
    }
}

#[async_trait]
impl RemoteConfigService for HttpRemoteConfigService {
    async fn get_template(&self) -> Result<ConfigTemplate, RemoteConfigError> {
        let request = self.client.get(&self.template_url);
        let response = self
            .authorized(request)
            .send()
            .await
            .map_err(|e| RemoteConfigError::transport(e.to_string()))?;

        read_template(response).await
    }

    async fn validate_template(
        &self,
        template: &ConfigTemplate,
    ) -> Result<ConfigTemplate, RemoteConfigError> {
        let url = format!("{}?validateOnly=true", self.template_url);
        self.put_template(&url, template).await
    }

    async fn publish_template(
        &self,
        template: &ConfigTemplate,
    ) -> Result<ConfigTemplate, RemoteConfigError> {
        self.put_template(&self.template_url, template).await
    }
}
