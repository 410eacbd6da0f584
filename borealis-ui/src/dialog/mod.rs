//! Dialog focus management.
//!
//! [`DialogFocusController`] owns the open/close focus semantics of one
//! dialog (focus capture and restoration, background scroll lock, the
//! Tab/Shift+Tab trap, and escape/overlay close gating), talking to the
//! embedding toolkit only through [`DocumentPort`].

mod focus;
mod port;

pub use focus::{
    ClickTarget, CloseReason, DialogFocusController, DialogKey, DialogOptions, DialogState,
    KeyOutcome,
};
pub use port::{DocumentPort, NodeId};
