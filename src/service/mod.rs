//! Operation surface exposed to the transport layer.
//!
//! A [`StringService`] owns the repository instance; nothing here is
//! global. The transport maps these typed outcomes onto its wire framing
//! (status codes, bodies) without any decisions of its own.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::filter::{FilterError, StringFilter};
use crate::query::{interpret, InterpretedQuery, QueryError};
use crate::store::{StoreError, StringRecord, StringRepository};

/// Error taxonomy of the operation surface.
///
/// `BadRequest` is "you typed garbage"; `FilterConflict` is "you typed
/// something consistent but self-contradictory"; `UnprocessableType` is
/// a field that exists but has the wrong shape. All are local to a
/// single operation and leave the repository untouched.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    UnprocessableType(String),
    #[error("String already exists in the system")]
    Conflict,
    #[error("String does not exist in the system")]
    NotFound,
    #[error("Query parsed but resulted in conflicting filters")]
    FilterConflict { interpreted: InterpretedQuery },
    #[error("Server error: {0}")]
    Internal(String),
}

/// Typed create payload, parsed and validated before any business logic.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRequest {
    pub value: String,
}

impl CreateRequest {
    /// Validate a raw JSON body.
    ///
    /// A body that is not an object or lacks `value` is a `BadRequest`;
    /// a `value` that is present but not a string failed a type
    /// contract, which is reported distinctly.
    pub fn from_json(body: &Value) -> Result<Self, ServiceError> {
        let obj = body.as_object().ok_or_else(|| {
            ServiceError::BadRequest("Invalid request body or missing \"value\" field".to_string())
        })?;

        let value = obj.get("value").ok_or_else(|| {
            ServiceError::BadRequest("Invalid request body or missing \"value\" field".to_string())
        })?;

        match value.as_str() {
            Some(s) => Ok(CreateRequest {
                value: s.to_string(),
            }),
            None => Err(ServiceError::UnprocessableType(
                "Invalid data type for \"value\" (must be string)".to_string(),
            )),
        }
    }
}

/// A filtered listing: the matching records, their count, and an echo of
/// exactly the filters that were applied.
#[derive(Debug, Clone, Serialize)]
pub struct ListOutcome {
    pub data: Vec<StringRecord>,
    pub count: usize,
    pub filters_applied: StringFilter,
}

/// Listing produced from a natural-language query, echoing the
/// interpretation instead of raw filters.
#[derive(Debug, Clone, Serialize)]
pub struct NlListOutcome {
    pub data: Vec<StringRecord>,
    pub count: usize,
    pub interpreted_query: InterpretedQuery,
}

#[derive(Debug, Default)]
pub struct StringService {
    repository: StringRepository,
}

impl StringService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Analyze and store a value. Fails with `Conflict` when a record
    /// with the same content digest already exists.
    pub fn create(&self, value: String) -> Result<StringRecord, ServiceError> {
        let record = StringRecord::create(value);
        match self.repository.insert(record.clone()) {
            Ok(()) => {
                tracing::debug!(id = %record.id, length = record.properties.length, "stored string");
                Ok(record)
            }
            Err(StoreError::AlreadyExists(id)) => {
                tracing::debug!(id = %id, "duplicate create rejected");
                Err(ServiceError::Conflict)
            }
            // insert only ever reports AlreadyExists
            Err(other) => Err(ServiceError::Internal(other.to_string())),
        }
    }

    /// Look a record up by its value. The caller supplies the decoded
    /// value; its digest is re-derived here.
    pub fn get_by_value(&self, value: &str) -> Result<StringRecord, ServiceError> {
        self.repository
            .get_by_value(value)
            .ok_or(ServiceError::NotFound)
    }

    /// List records matching a raw query-parameter set.
    pub fn list(&self, params: &BTreeMap<String, String>) -> Result<ListOutcome, ServiceError> {
        let filter = StringFilter::from_params(params).map_err(|e| match e {
            // The structured-parameter path reports both malformed params
            // and conflicting bounds as caller errors.
            err @ (FilterError::InvalidParam { .. } | FilterError::ConflictingBounds { .. }) => {
                ServiceError::BadRequest(err.to_string())
            }
        })?;

        let data = filter.apply(self.repository.all());
        let count = data.len();
        tracing::debug!(count, "filtered listing");

        Ok(ListOutcome {
            data,
            count,
            filters_applied: filter,
        })
    }

    /// Delete the record addressed by a value.
    pub fn delete_by_value(&self, value: &str) -> Result<(), ServiceError> {
        match self.repository.remove_by_value(value) {
            Ok(record) => {
                tracing::debug!(id = %record.id, "deleted string");
                Ok(())
            }
            Err(_) => Err(ServiceError::NotFound),
        }
    }

    /// List records matching a free-text query, via the heuristic
    /// interpreter. A parse that yields conflicting bounds is reported
    /// with the partial interpretation attached.
    pub fn list_by_natural_language(&self, text: &str) -> Result<NlListOutcome, ServiceError> {
        if text.trim().is_empty() {
            return Err(ServiceError::BadRequest(
                "Missing or invalid \"query\" parameter".to_string(),
            ));
        }

        let interpreted = interpret(text).map_err(|e| match e {
            QueryError::Unparseable => ServiceError::BadRequest(e.to_string()),
            QueryError::ConflictingFilters { interpreted } => {
                ServiceError::FilterConflict { interpreted }
            }
        })?;

        let data = interpreted.parsed_filters.apply(self.repository.all());
        let count = data.len();
        tracing::debug!(count, query = %interpreted.original, "natural-language listing");

        Ok(NlListOutcome {
            data,
            count,
            interpreted_query: interpreted,
        })
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.repository.len()
    }

    pub fn is_empty(&self) -> bool {
        self.repository.is_empty()
    }
}
