//! LLM settings used by the memory system's classification calls.

use serde::{Deserialize, Serialize};

use super::ConfigResult;
use super::env::EnvConfigProvider;
use super::provider::{ConfigProvider, ConfigProviderExt};
use crate::models::ModelRegistry;
use crate::params::{EffortLevel, TokenParams, get_openai_token_params};

pub const DEFAULT_CLASSIFICATION_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_CLASSIFICATION_MAX_TOKENS: u32 = 64;

pub mod keys {
    pub const CLASSIFICATION_MODEL: &str = "classification.model";
    pub const CLASSIFICATION_MAX_TOKENS: &str = "classification.max.tokens";
    pub const CLASSIFICATION_REASONING_EFFORT: &str = "classification.reasoning.effort";
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LlmSettings {
    pub classification_model: String,
    pub max_tokens: u32,
    /// Passed through as-is; `None` when unset or blank.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reasoning_effort: Option<String>,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            classification_model: DEFAULT_CLASSIFICATION_MODEL.to_string(),
            max_tokens: DEFAULT_CLASSIFICATION_MAX_TOKENS,
            reasoning_effort: None,
        }
    }
}

impl LlmSettings {
    pub async fn load<P: ConfigProvider + ?Sized>(provider: &P) -> ConfigResult<Self> {
        let defaults = Self::default();

        let classification_model = provider
            .get_string(keys::CLASSIFICATION_MODEL)
            .await?
            .unwrap_or(defaults.classification_model);
        let max_tokens = provider
            .get::<u32>(keys::CLASSIFICATION_MAX_TOKENS)
            .await?
            .unwrap_or(defaults.max_tokens);
        let reasoning_effort = provider
            .get_string(keys::CLASSIFICATION_REASONING_EFFORT)
            .await?;

        if let Some(effort) = reasoning_effort.as_deref()
            && EffortLevel::parse(effort).is_none()
        {
            tracing::warn!(effort, "unrecognized reasoning effort, passing through unchanged");
        }

        tracing::debug!(
            provider = provider.name(),
            model = %classification_model,
            max_tokens,
            effort = ?reasoning_effort,
            "llm settings loaded"
        );

        Ok(Self {
            classification_model,
            max_tokens,
            reasoning_effort,
        })
    }

    pub async fn from_env() -> crate::Result<Self> {
        Ok(Self::load(&EnvConfigProvider::new()).await?)
    }

    pub fn token_params(&self) -> TokenParams {
        get_openai_token_params(
            &self.classification_model,
            self.max_tokens,
            self.reasoning_effort.as_deref(),
        )
    }

    pub fn token_params_with(&self, registry: &ModelRegistry) -> TokenParams {
        registry.token_params(
            &self.classification_model,
            self.max_tokens,
            self.reasoning_effort.as_deref(),
        )
    }
}
