//! Configuration module for the service layer.
//! Defines and wires application-wide dependencies.
mod dependencies;

pub use dependencies::Dependencies;
