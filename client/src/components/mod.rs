//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render list rows, dialogs and feedback widgets. Pages own the
//! state and pass signals and callbacks down; components never reach into
//! context for data they can be handed.

pub mod confirm_dialog;
pub mod finish_modal;
pub mod loading_message;
pub mod metrics_visualizer;
pub mod pagination;
pub mod record_card;
