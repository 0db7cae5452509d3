//! Core domain entities representing the business data model.
//!
//! The service tracks a single entity: the per-user [`ClickRecord`] holding
//! the authoritative total alongside the pending-increment bookkeeping used
//! by the reconciler.

pub mod click_record;

pub use click_record::ClickRecord;
