//! # SpecTaChat Votes
//! This crate implements the vote tracker: the component that mediates a
//! single user's up/down vote on a question or answer into the correct
//! persisted row operation and the correct displayed tally.
//!
//! The tracker separates a cast into three steps: compute the intended
//! transition, attempt persistence, and commit local state only on success.
//! Casts on one instance are serialized, so two rapid clicks can never
//! compute deltas against a stale vote.
pub mod errors;
pub mod tracker;
pub mod transition;

pub use errors::VoteError;
pub use tracker::{VoteOutcome, VoteTracker};
pub use transition::{PersistAction, VoteTransition};
