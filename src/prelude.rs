//! Prelude module for convenient imports.
//!
//! ```rust
//! use automem_core::prelude::*;
//!
//! assert!(supports_reasoning("o3-mini"));
//! ```

pub use crate::Error;
pub use crate::Result;

pub use crate::memory::{MemoryType, Normalized, normalize_memory_type};
pub use crate::models::{ModelFamily, ModelRegistry, supports_reasoning};
pub use crate::params::{EffortLevel, TokenParams, get_openai_token_params};

pub use crate::config::{ConfigProvider, ConfigProviderExt, LlmSettings};
