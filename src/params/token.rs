use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::effort::ReasoningConfig;
use crate::models::{ModelFamily, TokenLimitKey};

/// The single token-limit field of a completion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TokenLimit {
    #[serde(rename = "max_tokens")]
    MaxTokens(u32),
    #[serde(rename = "max_completion_tokens")]
    MaxCompletionTokens(u32),
}

impl TokenLimit {
    pub fn new(key: TokenLimitKey, value: u32) -> Self {
        match key {
            TokenLimitKey::MaxTokens => Self::MaxTokens(value),
            TokenLimitKey::MaxCompletionTokens => Self::MaxCompletionTokens(value),
        }
    }

    pub fn key(&self) -> TokenLimitKey {
        match self {
            Self::MaxTokens(_) => TokenLimitKey::MaxTokens,
            Self::MaxCompletionTokens(_) => TokenLimitKey::MaxCompletionTokens,
        }
    }

    pub fn value(&self) -> u32 {
        match self {
            Self::MaxTokens(v) | Self::MaxCompletionTokens(v) => *v,
        }
    }
}

/// Token parameters to merge into an outbound completion request.
///
/// Serializes to a flat object holding exactly one of `max_tokens` or
/// `max_completion_tokens`, plus `reasoning` when an effort applies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenParams {
    #[serde(flatten)]
    limit: TokenLimit,
    #[serde(skip_serializing_if = "Option::is_none")]
    reasoning: Option<ReasoningConfig>,
}

impl TokenParams {
    pub(crate) fn for_family(
        family: ModelFamily,
        model: &str,
        max_tokens: u32,
        reasoning_effort: Option<&str>,
    ) -> Self {
        let limit = TokenLimit::new(family.token_limit_key(), max_tokens);

        let reasoning = match reasoning_effort.filter(|effort| !effort.is_empty()) {
            Some(effort) if family.supports_reasoning() => Some(ReasoningConfig::new(effort)),
            Some(effort) => {
                tracing::debug!(
                    model,
                    effort,
                    "reasoning effort dropped for model without reasoning support"
                );
                None
            }
            None => None,
        };

        Self { limit, reasoning }
    }

    pub fn limit(&self) -> TokenLimit {
        self.limit
    }

    pub fn reasoning(&self) -> Option<&ReasoningConfig> {
        self.reasoning.as_ref()
    }

    pub fn reasoning_effort(&self) -> Option<&str> {
        self.reasoning.as_ref().map(|r| r.effort.as_str())
    }

    pub fn to_value(&self) -> crate::Result<Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Copies these parameters into a request body.
    ///
    /// The opposite token-limit key is removed so the body never carries both.
    pub fn merge_into(&self, body: &mut Map<String, Value>) -> crate::Result<()> {
        let other = match self.limit.key() {
            TokenLimitKey::MaxTokens => TokenLimitKey::MaxCompletionTokens,
            TokenLimitKey::MaxCompletionTokens => TokenLimitKey::MaxTokens,
        };
        let params: Map<String, Value> = serde_json::from_value(self.to_value()?)?;

        body.remove(other.as_str());
        body.extend(params);
        Ok(())
    }
}
