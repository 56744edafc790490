//! Token-limit and reasoning parameters for OpenAI-style completion requests.

mod effort;
mod token;

pub use effort::{EffortLevel, ReasoningConfig};
pub use token::{TokenLimit, TokenParams};

use crate::models::registry;

/// Builds the token parameters a completion request for `model` must carry.
///
/// O-series models take `max_completion_tokens`; every other model takes
/// `max_tokens`. A `reasoning` entry is attached only when the model family
/// supports reasoning and `reasoning_effort` is non-empty. The effort string
/// is passed through without checking it against [`EffortLevel`].
pub fn get_openai_token_params(
    model: &str,
    max_tokens: u32,
    reasoning_effort: Option<&str>,
) -> TokenParams {
    registry().token_params(model, max_tokens, reasoning_effort)
}
