//! Translate natural-language access requests into structured data-governance policies.
#![warn(missing_docs)]

/// Policy data model, assembly pipeline, transformation inference, and risk scoring.
pub mod engine;
/// Independent extractors for restricted fields, time limits, and conditional-access clauses.
pub mod extractor;
/// Surface-form lexicons and word-boundary matching for roles, data fields, and actions.
pub mod lexicon;
/// File-backed store for saved policies and the JSON export projection.
pub mod store;
