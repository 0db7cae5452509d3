//! Data Transfer Objects for request/response serialization.

pub mod clicks;
pub mod health;
