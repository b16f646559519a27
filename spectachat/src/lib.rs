//! SpecTaChat Service Layer
//!
//! This library wires the eyewear Q&A hub's service layer together:
//! configuration and dependency injection, the question/answer/session
//! services the UI calls, and the tally reconciliation job.

pub mod config;
pub mod errors;
pub mod reconcile;
pub mod services;

pub use config::Dependencies;
pub use errors::{HubError, ServiceError};
pub use reconcile::TallyReconciler;
