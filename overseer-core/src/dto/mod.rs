//! Data transfer objects for the automation service API
//!
//! These mirror the JSON envelopes the service speaks on the wire. Domain
//! entities live in [`crate::domain`]; everything here is shaped by the
//! HTTP contract.

pub mod error;
pub mod logs;
pub mod run;
pub mod schedule;
