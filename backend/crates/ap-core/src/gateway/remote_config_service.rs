use crate::{ConfigTemplate, RemoteConfigError};

use async_trait::async_trait;

/// The shared remote configuration resource.
///
/// Publishing is guarded by optimistic concurrency: the template's `etag`
/// must match the server's current version.
#[async_trait]
pub trait RemoteConfigService: Send + Sync {
    async fn get_template(&self) -> Result<ConfigTemplate, RemoteConfigError>;

    async fn validate_template(
        &self,
        template: &ConfigTemplate,
    ) -> Result<ConfigTemplate, RemoteConfigError>;

    /// Publish and return the template as stored, carrying its new etag.
    async fn publish_template(
        &self,
        template: &ConfigTemplate,
    ) -> Result<ConfigTemplate, RemoteConfigError>;
}
