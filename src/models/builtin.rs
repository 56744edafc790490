use super::family::{FamilyRule, ModelFamily};
use super::registry::ModelRegistry;

const BUILTIN_RULES: &[(&str, ModelFamily)] = &[
    ("o1", ModelFamily::OSeries),
    ("o3", ModelFamily::OSeries),
    ("gpt-5", ModelFamily::Gpt5),
];

pub fn register_all(registry: &mut ModelRegistry) {
    for (prefix, family) in BUILTIN_RULES {
        registry.push_builtin(FamilyRule::new(*prefix, *family));
    }
}
