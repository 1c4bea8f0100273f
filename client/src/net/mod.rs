//! Networking modules for the record service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs REST calls, `types` defines the wire schema, and `error`
//! classifies failures so pages can choose how to surface them.

pub mod api;
pub mod error;
pub mod types;
