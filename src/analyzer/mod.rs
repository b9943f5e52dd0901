//! # Analyzer Module
//!
//! Manifest analysis. Currently holds the pod manifest validator.

pub mod podlint;
