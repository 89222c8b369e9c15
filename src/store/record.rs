use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::{analyze, Properties};
use crate::types::StringId;

/// The unit of storage: a value plus its computed properties.
///
/// `id` equals `properties.sha256_hash` and is immutable. The value is
/// stored exactly as submitted, with no normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StringRecord {
    pub id: StringId,
    pub value: String,
    pub properties: Properties,
    pub created_at: DateTime<Utc>,
}

impl StringRecord {
    /// Analyze a value and assemble its record.
    ///
    /// This is the ONLY way to construct a StringRecord: the id is derived
    /// from the computed digest and the properties are frozen here.
    pub fn create(value: String) -> Self {
        let properties = analyze(&value);
        let id = properties.sha256_hash.clone();

        StringRecord {
            id,
            value,
            properties,
            created_at: Utc::now(),
        }
    }
}
