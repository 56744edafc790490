//! Model-family classification.
//!
//! Families are recognised by identifier prefix through an ordered rule table,
//! so supporting a new family is a data change in the builtin table or a runtime
//! [`ModelRegistry::register`] call.

mod builtin;
mod family;
mod registry;

pub use family::{FamilyRule, ModelFamily, TokenLimitKey};
pub use registry::{ModelRegistry, registry};

/// Whether `model` belongs to a family that accepts a reasoning effort.
///
/// Unknown or malformed identifiers are not reasoning-capable.
pub fn supports_reasoning(model: &str) -> bool {
    registry().supports_reasoning(model)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_o1_models_support_reasoning() {
        assert!(supports_reasoning("o1"));
        assert!(supports_reasoning("o1-mini"));
        assert!(supports_reasoning("o1-preview"));
    }

    #[test]
    fn test_o3_models_support_reasoning() {
        assert!(supports_reasoning("o3"));
        assert!(supports_reasoning("o3-mini"));
    }

    #[test]
    fn test_gpt5_models_support_reasoning() {
        assert!(supports_reasoning("gpt-5"));
        assert!(supports_reasoning("gpt-5.2"));
        assert!(supports_reasoning("gpt-5.3-codex"));
        assert!(supports_reasoning("GPT-5-mini"));
    }

    #[test]
    fn test_gpt4_models_do_not_support_reasoning() {
        assert!(!supports_reasoning("gpt-4"));
        assert!(!supports_reasoning("gpt-4o"));
        assert!(!supports_reasoning("gpt-4o-mini"));
        assert!(!supports_reasoning("gpt-4-turbo"));
    }

    #[test]
    fn test_other_models_do_not_support_reasoning() {
        assert!(!supports_reasoning("text-embedding-3-large"));
        assert!(!supports_reasoning("claude-3-opus"));
        assert!(!supports_reasoning("unknown-model"));
        assert!(!supports_reasoning(""));
        assert!(!supports_reasoning("o"));
    }
}
