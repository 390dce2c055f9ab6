use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Clipboard history entry identifier.
///
/// The source material derived IDs from wall-clock milliseconds, which can
/// collide under rapid successive writes. Freshly generated IDs use a UUID
/// instead; IDs loaded from an existing store are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryId(String);

impl EntryId {
    pub fn new(id: String) -> Self {
        Self(id)
    }

    /// Generate a fresh unique identifier.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for EntryId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for EntryId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for EntryId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_id_from_str() {
        let id: EntryId = "1700000000000".into();
        assert_eq!(id.as_str(), "1700000000000");
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let a = EntryId::generate();
        let b = EntryId::generate();
        assert_ne!(a, b);
    }
}
