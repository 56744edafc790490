//! # automem-core
//!
//! Input normalization for an LLM-backed memory service.
//!
//! Two concerns live here:
//!
//! - choosing the token-limit and reasoning parameters an OpenAI-style
//!   completion request must carry for a given model family;
//! - canonicalizing free-form memory-type labels before a memory is stored.
//!
//! ```rust
//! use automem_core::{get_openai_token_params, normalize_memory_type};
//!
//! let params = get_openai_token_params("gpt-5.2", 100, Some("high"));
//! assert_eq!(
//!     params.to_value().unwrap(),
//!     serde_json::json!({"max_tokens": 100, "reasoning": {"effort": "high"}})
//! );
//!
//! assert_eq!(normalize_memory_type(Some("memory")), ("Context", true));
//! assert_eq!(normalize_memory_type(Some("nonsense")), ("", true));
//! ```
//!
//! All three core operations are pure and never fail; unrecognized input is
//! reported through return values rather than errors.

#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod memory;
pub mod models;
pub mod params;
pub mod prelude;

pub use config::{ConfigBuilder, ConfigError, ConfigProvider, LlmSettings};
pub use memory::{
    LEGACY_TYPE_ALIASES, MemoryType, Normalized, is_canonical_memory_type, normalize_memory_type,
};
pub use models::{
    FamilyRule, ModelFamily, ModelRegistry, TokenLimitKey, registry as model_registry,
    supports_reasoning,
};
pub use params::{EffortLevel, ReasoningConfig, TokenLimit, TokenParams, get_openai_token_params};

/// Error type for automem-core operations.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Invalid or missing configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Value could not be parsed into the requested type.
    #[error("Parse error: {0}")]
    Parse(String),

    /// JSON serialization or deserialization failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// Required environment variable missing or invalid.
    #[error("Environment variable error: {0}")]
    Env(#[from] std::env::VarError),
}

impl Error {
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Error::Config(_) | Error::Env(_))
    }
}

impl From<config::ConfigError> for Error {
    fn from(err: config::ConfigError) -> Self {
        match err {
            config::ConfigError::InvalidValue { key, message } => {
                Error::Config(format!("Invalid value for {}: {}", key, message))
            }
            config::ConfigError::Env(e) => Error::Env(e),
            config::ConfigError::Provider { message } => Error::Config(message),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
