//! UI layer for Borealis.
//!
//! Two concerns live here:
//!
//! - [`dialog`]: the focus controller for modal dialogs (focus capture and
//!   restoration, background scroll lock, Tab/Shift+Tab trapping, and
//!   escape/overlay close semantics), behind the renderer-agnostic
//!   [`dialog::DocumentPort`] seam.
//! - [`error_handler`]: the cheap-clone [`ErrorHandlerHandle`] that binds
//!   the shared error service for UI call sites.

pub mod dialog;
pub mod error_handler;

pub use dialog::{
    ClickTarget, CloseReason, DialogFocusController, DialogKey, DialogOptions, DialogState,
    DocumentPort, KeyOutcome, NodeId,
};
pub use error_handler::ErrorHandlerHandle;
