//! Vigil Core
//!
//! Core types for tracking long-running operations on a managed
//! text-classification service.
//!
//! This crate contains:
//! - Domain types: operation handles, status snapshots, poll policies, outcomes
//!   and the status vocabularies of each operation kind
//! - DTOs: request and response shapes of the service's describe operations
//! - Evaluation: binary-classification metrics over batch results
//!
//! Note: no I/O lives here. Polling is in `vigil-poller`, HTTP in `vigil-client`.

pub mod domain;
pub mod dto;
pub mod evaluation;
