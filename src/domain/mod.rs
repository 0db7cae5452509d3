//! Domain layer containing business entities and logic.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`reconciler`] - Periodic reconciliation of pending clicks
//!
//! # Reconciliation Flow
//!
//! 1. HTTP handlers acknowledge increments by atomically growing a record's
//!    `pending` counter via [`repositories::ClickRepository::add_pending`]
//! 2. [`reconciler::run_reconciler`] ticks on a fixed period
//! 3. Each tick folds `pending - last_reconciled_pending` into `total` per
//!    record, from a single consistent snapshot, so increments racing with
//!    the pass are never lost and never double-counted

pub mod entities;
pub mod reconciler;
pub mod repositories;
