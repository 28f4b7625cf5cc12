//! Outbound adapters implementing domain ports against infrastructure.
//!
//! Adapters only translate between domain types and store representations;
//! they hold no business rules.

pub mod persistence;
