use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Content-hash identity of a stored string.
///
/// Lowercase hex SHA-256 of the value's UTF-8 bytes. The id is a pure
/// function of the value: identical values always produce identical ids,
/// and the same derivation runs at creation and at lookup time, which is
/// what makes records addressable "by value".
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StringId(String);

impl StringId {
    pub fn from_value(value: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(value.as_bytes());

        let hash = hasher.finalize();
        StringId(hex::encode(hash))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StringId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
