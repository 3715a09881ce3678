//! Core domain types
//!
//! These types represent the entities exposed by the automation service:
//! execution log records and the daily schedule. They are shared between the
//! HTTP client (deserialization) and the CLI (rendering).

pub mod execution;
pub mod schedule;
