use super::types::MemoryType;

/// Labels used before the current category set, and their replacements.
pub const LEGACY_TYPE_ALIASES: &[(&str, MemoryType)] = &[
    ("memory", MemoryType::Context),
    ("milestone", MemoryType::Context),
    ("analysis", MemoryType::Insight),
    ("observation", MemoryType::Insight),
    ("template", MemoryType::Pattern),
];

/// Outcome of normalizing a raw memory-type label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Normalized {
    memory_type: Option<MemoryType>,
    was_modified: bool,
}

impl Normalized {
    /// `None` when the label could not be mapped to any category.
    pub fn memory_type(&self) -> Option<MemoryType> {
        self.memory_type
    }

    /// Always `true` for an unrecognized label.
    pub fn was_modified(&self) -> bool {
        self.was_modified
    }

    /// Canonical label, or the empty string for an unrecognized input.
    pub fn label(&self) -> &'static str {
        self.memory_type.map(|t| t.as_str()).unwrap_or("")
    }

    pub fn is_recognized(&self) -> bool {
        self.memory_type.is_some()
    }

    pub fn into_pair(self) -> (&'static str, bool) {
        (self.label(), self.was_modified)
    }
}

impl MemoryType {
    /// Maps a raw label onto a category.
    ///
    /// Checked in order: exact canonical label, canonical label in another
    /// casing, legacy alias, missing label (defaults to `Context`). Anything
    /// else is unrecognized.
    pub fn normalize(raw: Option<&str>) -> Normalized {
        let Some(raw) = raw else {
            return Normalized {
                memory_type: Some(MemoryType::default()),
                was_modified: true,
            };
        };

        if let Some(exact) = MemoryType::ALL.into_iter().find(|t| t.as_str() == raw) {
            return Normalized {
                memory_type: Some(exact),
                was_modified: false,
            };
        }

        let resolved = MemoryType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(raw))
            .or_else(|| legacy_alias(raw));

        match resolved {
            Some(memory_type) => {
                tracing::debug!(raw, normalized = %memory_type, "memory type normalized");
            }
            None => tracing::debug!(raw, "unrecognized memory type"),
        }

        Normalized {
            memory_type: resolved,
            was_modified: true,
        }
    }
}

fn legacy_alias(raw: &str) -> Option<MemoryType> {
    LEGACY_TYPE_ALIASES
        .iter()
        .find(|(alias, _)| alias.eq_ignore_ascii_case(raw))
        .map(|(_, memory_type)| *memory_type)
}

/// Normalizes a raw memory-type label into `(label, was_modified)`.
///
/// An empty label means the input was not recognized; the caller decides
/// whether to reject the record or substitute a default.
pub fn normalize_memory_type(raw: Option<&str>) -> (&'static str, bool) {
    MemoryType::normalize(raw).into_pair()
}

pub fn is_canonical_memory_type(label: &str) -> bool {
    MemoryType::ALL.iter().any(|t| t.as_str() == label)
}
