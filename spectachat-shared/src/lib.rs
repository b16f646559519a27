//! # SpecTaChat Shared
//! This crate defines shared data structures and types used across the
//! SpecTaChat service layer. It includes common definitions for votes,
//! questions, answers, categories, and resolved user identities.
pub mod types;
