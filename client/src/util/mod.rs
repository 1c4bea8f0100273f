//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules hold the pure logic behind pages and components (grading,
//! pagination layout, glyph geometry, message rotation) so it can be tested
//! without a browser.

pub mod grade;
pub mod message_cycle;
pub mod pagination;
pub mod radar;
