use std::sync::OnceLock;

use super::builtin;
use super::family::{FamilyRule, ModelFamily};
use crate::params::TokenParams;

static REGISTRY: OnceLock<ModelRegistry> = OnceLock::new();

pub fn registry() -> &'static ModelRegistry {
    REGISTRY.get_or_init(ModelRegistry::builtins)
}

/// Ordered prefix rules, evaluated first-match-wins.
#[derive(Debug, Clone, Default)]
pub struct ModelRegistry {
    rules: Vec<FamilyRule>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builtins() -> Self {
        let mut registry = Self::new();
        builtin::register_all(&mut registry);
        registry
    }

    /// Rules registered later are consulted first, so callers can
    /// override or extend the builtin table.
    pub fn register(&mut self, rule: FamilyRule) {
        self.rules.insert(0, rule);
    }

    pub(super) fn push_builtin(&mut self, rule: FamilyRule) {
        self.rules.push(rule);
    }

    pub fn rules(&self) -> &[FamilyRule] {
        &self.rules
    }

    pub fn classify(&self, model: &str) -> ModelFamily {
        let family = self
            .rules
            .iter()
            .find(|rule| rule.matches(model))
            .map(|rule| rule.family)
            .unwrap_or(ModelFamily::Other);

        tracing::trace!(model, ?family, "model classified");
        family
    }

    pub fn supports_reasoning(&self, model: &str) -> bool {
        self.classify(model).supports_reasoning()
    }

    pub fn token_params(
        &self,
        model: &str,
        max_tokens: u32,
        reasoning_effort: Option<&str>,
    ) -> TokenParams {
        TokenParams::for_family(self.classify(model), model, max_tokens, reasoning_effort)
    }
}
