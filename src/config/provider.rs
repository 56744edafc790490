//! Configuration Provider Trait

use serde::de::DeserializeOwned;

use super::{ConfigError, ConfigResult};

/// Source of raw configuration values keyed by dotted names
/// such as `classification.model`.
#[async_trait::async_trait]
pub trait ConfigProvider: Send + Sync {
    /// Provider name for logging
    fn name(&self) -> &str;

    /// Get a raw configuration value
    async fn get_raw(&self, key: &str) -> ConfigResult<Option<String>>;

    /// Set a raw configuration value
    async fn set_raw(&self, key: &str, value: &str) -> ConfigResult<()>;
}

/// Typed access on top of [`ConfigProvider`].
pub trait ConfigProviderExt: ConfigProvider {
    /// Get a value parsed as JSON (numbers, booleans, quoted strings).
    fn get<T: DeserializeOwned + Send>(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = ConfigResult<Option<T>>> + Send
    where
        Self: Sync,
    {
        async move {
            match self.get_raw(key).await? {
                Some(raw) => {
                    let value: T =
                        serde_json::from_str(raw.trim()).map_err(|e| ConfigError::InvalidValue {
                            key: key.to_string(),
                            message: e.to_string(),
                        })?;
                    Ok(Some(value))
                }
                None => Ok(None),
            }
        }
    }

    /// Get a value as a plain string, treating blank values as unset.
    fn get_string(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = ConfigResult<Option<String>>> + Send
    where
        Self: Sync,
    {
        async move {
            Ok(self
                .get_raw(key)
                .await?
                .map(|raw| raw.trim().to_string())
                .filter(|value| !value.is_empty()))
        }
    }
}

impl<P: ConfigProvider + ?Sized> ConfigProviderExt for P {}
