//! Overseer Core
//!
//! Core types for the Overseer automation-service client.
//!
//! This crate contains:
//! - Domain types: Core business entities (ExecutionRecord, ScheduleStatus)
//! - DTOs: Wire representations of the automation service API

pub mod domain;
pub mod dto;
