//! Composite Configuration Provider
//!
//! Chains providers by priority; the first provider that knows a key wins.

use super::{ConfigError, ConfigResult};
use super::provider::ConfigProvider;

pub struct CompositeConfigProvider {
    providers: Vec<Box<dyn ConfigProvider>>,
}

impl CompositeConfigProvider {
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// First added = highest priority
    pub fn add_provider(&mut self, provider: Box<dyn ConfigProvider>) {
        self.providers.push(provider);
    }

    pub fn provider(mut self, provider: Box<dyn ConfigProvider>) -> Self {
        self.providers.push(provider);
        self
    }

    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }
}

impl Default for CompositeConfigProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl ConfigProvider for CompositeConfigProvider {
    fn name(&self) -> &str {
        "composite"
    }

    async fn get_raw(&self, key: &str) -> ConfigResult<Option<String>> {
        for provider in &self.providers {
            if let Some(value) = provider.get_raw(key).await? {
                tracing::trace!(key, provider = provider.name(), "config value resolved");
                return Ok(Some(value));
            }
        }
        Ok(None)
    }

    async fn set_raw(&self, key: &str, value: &str) -> ConfigResult<()> {
        match self.providers.first() {
            Some(provider) => provider.set_raw(key, value).await,
            None => Err(ConfigError::Provider {
                message: "no providers configured".into(),
            }),
        }
    }
}

impl std::fmt::Debug for CompositeConfigProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositeConfigProvider")
            .field("provider_names", &self.provider_names())
            .finish()
    }
}
