//! Application layer containing business logic services.
//!
//! Services sit between the HTTP handlers and the repository traits: they
//! enforce input rules and translate missing records into domain errors,
//! while staying independent of the concrete store.

pub mod services;
