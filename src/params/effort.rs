use serde::{Deserialize, Serialize};

/// Reasoning effort levels understood by current reasoning models.
///
/// Request building accepts any effort string; this enum only gives callers
/// typed names for the known values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffortLevel {
    Low,
    Medium,
    High,
    XHigh,
}

impl EffortLevel {
    pub const ALL: [EffortLevel; 4] = [Self::Low, Self::Medium, Self::High, Self::XHigh];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::XHigh => "xhigh",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(value))
    }
}

impl std::fmt::Display for EffortLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Nested `reasoning` entry of a completion request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReasoningConfig {
    pub effort: String,
}

impl ReasoningConfig {
    pub fn new(effort: impl Into<String>) -> Self {
        Self {
            effort: effort.into(),
        }
    }
}

impl From<EffortLevel> for ReasoningConfig {
    fn from(level: EffortLevel) -> Self {
        Self::new(level.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effort_level_serialization() {
        assert_eq!(serde_json::to_string(&EffortLevel::Low).unwrap(), "\"low\"");
        assert_eq!(
            serde_json::to_string(&EffortLevel::XHigh).unwrap(),
            "\"xhigh\""
        );
    }

    #[test]
    fn test_effort_level_parse() {
        assert_eq!(EffortLevel::parse("medium"), Some(EffortLevel::Medium));
        assert_eq!(EffortLevel::parse("XHIGH"), Some(EffortLevel::XHigh));
        assert_eq!(EffortLevel::parse("maximum"), None);
        assert_eq!(EffortLevel::parse(""), None);
    }

    #[test]
    fn test_reasoning_config_serialization() {
        let config = ReasoningConfig::from(EffortLevel::High);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"effort":"high"}"#);
    }
}
