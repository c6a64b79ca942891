// Derivation history record

use std::time::SystemTime;

use serde::{Deserialize, Serialize};

/// One recorded generation result, owned by the root it was derived from.
///
/// The (pattern id, word) pair never changes after creation; repeated
/// generation of the same (root, pattern) pair only bumps `usage_count`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedWord {
    pub pattern_id: String,
    pub word: String,
    pub usage_count: u64,
    pub created_at: SystemTime,
}

impl DerivedWord {
    /// Create a record with a usage count of one, stamped now.
    pub fn new(pattern_id: impl Into<String>, word: impl Into<String>) -> Self {
        Self {
            pattern_id: pattern_id.into(),
            word: word.into(),
            usage_count: 1,
            created_at: SystemTime::now(),
        }
    }

    /// Count one more identical generation request.
    pub fn touch(&mut self) {
        self.usage_count = self.usage_count.saturating_add(1);
    }
}
