//! # Workflows Module
//!
//! The user-facing entry point: the complete compilation pipeline from a
//! parameterized atomistic structure to a finished spring network, with
//! progress reporting for interactive callers.

pub mod build;
pub mod progress;
