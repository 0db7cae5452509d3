//! Application services orchestrating domain operations.

pub mod counter_service;

pub use counter_service::CounterService;
