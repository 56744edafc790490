use serde::{Deserialize, Serialize};

use super::registry::registry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelFamily {
    /// `o1`, `o3` and their `-mini` / `-preview` variants.
    OSeries,
    /// `gpt-5` and every dotted or suffixed release after it.
    Gpt5,
    Other,
}

/// Name of the token-limit field a family expects in a completion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenLimitKey {
    MaxTokens,
    MaxCompletionTokens,
}

impl TokenLimitKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MaxTokens => "max_tokens",
            Self::MaxCompletionTokens => "max_completion_tokens",
        }
    }
}

impl ModelFamily {
    pub fn classify(model: &str) -> Self {
        registry().classify(model)
    }

    pub fn supports_reasoning(&self) -> bool {
        match self {
            Self::OSeries | Self::Gpt5 => true,
            Self::Other => false,
        }
    }

    pub fn token_limit_key(&self) -> TokenLimitKey {
        match self {
            Self::OSeries => TokenLimitKey::MaxCompletionTokens,
            Self::Gpt5 | Self::Other => TokenLimitKey::MaxTokens,
        }
    }
}

/// Prefix rule mapping model identifiers onto a family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyRule {
    pub prefix: String,
    pub family: ModelFamily,
}

impl FamilyRule {
    pub fn new(prefix: impl Into<String>, family: ModelFamily) -> Self {
        Self {
            prefix: prefix.into(),
            family,
        }
    }

    pub fn matches(&self, model: &str) -> bool {
        model
            .get(..self.prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(&self.prefix))
    }
}
