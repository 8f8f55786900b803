//! Core data types for bacteria query resolution.
//!
//! - [`BacteriumRecord`]: A curated catalog entry with its aliases
//! - [`ExternalResult`]: A summary retrieved from the external encyclopedic source
//! - [`QueryOutcome`]: The single result produced for every query
//! - [`RecordKey`], [`SourceLabel`], [`Stage`]: Supporting identifiers
//!
//! [`BacteriumRecord`]: record::BacteriumRecord
//! [`ExternalResult`]: outcome::ExternalResult
//! [`QueryOutcome`]: outcome::QueryOutcome
//! [`RecordKey`]: types::RecordKey
//! [`SourceLabel`]: types::SourceLabel
//! [`Stage`]: types::Stage

pub mod outcome;
pub mod record;
pub mod types;
