//! Normalization Tests
//!
//! End-to-end checks of the public API: model classification, token
//! parameter building, memory-type normalization and settings loading.
//!
//! Run: cargo nextest run --test normalization_tests

use automem_core::{
    EffortLevel, MemoryType, ModelFamily, get_openai_token_params, normalize_memory_type,
    supports_reasoning,
};
use serde_json::json;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

const REASONING_MODELS: &[&str] = &[
    "o1",
    "o1-mini",
    "o1-preview",
    "o3",
    "o3-mini",
    "gpt-5",
    "gpt-5.2",
    "gpt-5.3-codex",
];

const PLAIN_MODELS: &[&str] = &[
    "gpt-4",
    "gpt-4o",
    "gpt-4o-mini",
    "gpt-4-turbo",
    "text-embedding-3-large",
    "claude-3-opus",
    "unknown-model",
];

// =============================================================================
// Model classification
// =============================================================================

mod classification_tests {
    use super::*;

    #[test]
    fn test_reasoning_models() {
        for model in REASONING_MODELS {
            assert!(supports_reasoning(model), "{model} should support reasoning");
        }
    }

    #[test]
    fn test_plain_models() {
        for model in PLAIN_MODELS {
            assert!(!supports_reasoning(model), "{model} should not support reasoning");
            assert_eq!(ModelFamily::classify(model), ModelFamily::Other);
        }
    }
}

// =============================================================================
// Token parameters
// =============================================================================

mod token_params_tests {
    use super::*;

    #[test]
    fn test_o1_without_effort() {
        let params = get_openai_token_params("o1", 100, None);
        assert_eq!(params.to_value().unwrap(), json!({"max_completion_tokens": 100}));
    }

    #[test]
    fn test_gpt5_with_effort() {
        let params = get_openai_token_params("gpt-5.2", 100, Some("high"));
        assert_eq!(
            serde_json::to_value(&params).unwrap(),
            json!({"max_tokens": 100, "reasoning": {"effort": "high"}})
        );
    }

    #[test]
    fn test_gpt4_drops_effort() {
        init_tracing();
        let params = get_openai_token_params("gpt-4o-mini", 100, Some("medium"));
        assert_eq!(params.to_value().unwrap(), json!({"max_tokens": 100}));
    }

    #[test]
    fn test_exactly_one_limit_key() {
        for model in REASONING_MODELS.iter().chain(PLAIN_MODELS) {
            for effort in [None, Some(""), Some("low"), Some("xhigh")] {
                let value = get_openai_token_params(model, 10, effort).to_value().unwrap();
                let has_legacy = value.get("max_tokens").is_some();
                let has_budget = value.get("max_completion_tokens").is_some();
                assert!(has_legacy ^ has_budget, "{model}: {value}");
            }
        }
    }

    #[test]
    fn test_reasoning_iff_supported_and_non_empty() {
        for model in REASONING_MODELS.iter().chain(PLAIN_MODELS) {
            for effort in [None, Some(""), Some("medium"), Some("typo")] {
                let params = get_openai_token_params(model, 10, effort);
                let expected = supports_reasoning(model) && effort.is_some_and(|e| !e.is_empty());
                assert_eq!(params.reasoning().is_some(), expected, "{model} {effort:?}");
            }
        }
    }

    #[test]
    fn test_known_levels_pass_through() {
        for level in EffortLevel::ALL {
            let params = get_openai_token_params("o3", 50, Some(level.as_str()));
            assert_eq!(
                params.to_value().unwrap()["reasoning"]["effort"],
                json!(level.as_str())
            );
        }
    }
}

// =============================================================================
// Memory types
// =============================================================================

mod memory_type_tests {
    use super::*;

    #[test]
    fn test_scenarios() {
        assert_eq!(normalize_memory_type(Some("decision")), ("Decision", true));
        assert_eq!(normalize_memory_type(Some("memory")), ("Context", true));
        assert_eq!(normalize_memory_type(Some("Decision")), ("Decision", false));
        assert_eq!(normalize_memory_type(None), ("Context", true));
        assert_eq!(normalize_memory_type(Some("unknown_type")), ("", true));
    }

    #[test]
    fn test_canonical_labels_are_fixed_points() {
        for memory_type in MemoryType::ALL {
            let (label, modified) = normalize_memory_type(Some(memory_type.as_str()));
            assert_eq!(label, memory_type.as_str());
            assert!(!modified);
        }
    }

    #[test]
    fn test_renormalizing_output_is_stable() {
        for raw in ["insight", "ANALYSIS", "observation", "Milestone", "template"] {
            let (label, modified) = normalize_memory_type(Some(raw));
            assert!(modified);
            assert_eq!(normalize_memory_type(Some(label)), (label, false));
        }
    }
}

// =============================================================================
// Settings
// =============================================================================

mod settings_tests {
    use automem_core::LlmSettings;
    use automem_core::config::settings::keys;
    use automem_core::config::{ConfigBuilder, MemoryConfigProvider};
    use serde_json::json;

    #[tokio::test]
    async fn test_settings_to_request_params() {
        super::init_tracing();
        let config = ConfigBuilder::new()
            .memory(
                MemoryConfigProvider::new()
                    .value(keys::CLASSIFICATION_MODEL, "o1-mini")
                    .value(keys::CLASSIFICATION_MAX_TOKENS, "200")
                    .value(keys::CLASSIFICATION_REASONING_EFFORT, "medium"),
            )
            .build();

        let settings = LlmSettings::load(&config).await.unwrap();
        let mut body = json!({"model": settings.classification_model, "max_tokens": 1});
        settings
            .token_params()
            .merge_into(body.as_object_mut().unwrap())
            .unwrap();

        assert_eq!(
            body,
            json!({
                "model": "o1-mini",
                "max_completion_tokens": 200,
                "reasoning": {"effort": "medium"}
            })
        );
    }
}
