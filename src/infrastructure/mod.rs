//! Infrastructure layer for external system integrations.
//!
//! Concrete implementations of the domain repository traits live here,
//! keeping the domain and application layers free of database concerns.

pub mod persistence;
