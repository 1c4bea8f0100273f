//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern so components depend on small focused models:
//! `records` backs the analysis list page, `practice` carries session progress
//! across routes.

pub mod practice;
pub mod records;
