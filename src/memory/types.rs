use serde::{Deserialize, Serialize};

/// Canonical category of a stored memory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemoryType {
    Decision,
    Pattern,
    Preference,
    Style,
    Habit,
    Insight,
    #[default]
    Context,
}

impl MemoryType {
    pub const ALL: [MemoryType; 7] = [
        Self::Decision,
        Self::Pattern,
        Self::Preference,
        Self::Style,
        Self::Habit,
        Self::Insight,
        Self::Context,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Decision => "Decision",
            Self::Pattern => "Pattern",
            Self::Preference => "Preference",
            Self::Style => "Style",
            Self::Habit => "Habit",
            Self::Insight => "Insight",
            Self::Context => "Context",
        }
    }
}

impl std::fmt::Display for MemoryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for MemoryType {
    type Err = crate::Error;

    /// Accepts canonical labels in any casing and legacy aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::normalize(Some(s))
            .memory_type()
            .ok_or_else(|| crate::Error::Parse(format!("Unknown memory type: {}", s)))
    }
}
