//! Deterministic string analysis engine with a content-addressed store.
//!
//! `analyzer-core` computes descriptive properties for text values
//! (length, palindrome check, word count, character frequencies), stores
//! records keyed by their SHA-256 content digest, and selects records
//! through a validated structured filter set or a small heuristic
//! natural-language translator. All analysis is deterministic — identical
//! inputs always produce identical properties and identities.
//!
//! Transport concerns (routing, wire framing, body decoding) live
//! outside this crate; the [`service`] module is the boundary.

pub mod analysis;
pub mod filter;
pub mod query;
pub mod service;
pub mod store;
pub mod types;
