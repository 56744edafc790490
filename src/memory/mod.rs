//! Memory-type canonicalization applied before a memory record is stored.

mod normalize;
mod types;

pub use normalize::{
    LEGACY_TYPE_ALIASES, Normalized, is_canonical_memory_type, normalize_memory_type,
};
pub use types::MemoryType;
