//! Core Kernel - Foundational types and utilities for the address book
//!
//! This crate provides the building blocks shared by the domain and storage crates:
//! - A common error type carrying field constraint messages
//! - Tracing subscriber bootstrap for binaries and test harnesses

pub mod error;
pub mod telemetry;

pub use error::CoreError;
pub use telemetry::init_tracing;
