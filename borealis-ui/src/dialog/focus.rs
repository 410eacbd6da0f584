use super::port::{DocumentPort, NodeId};

/// Per-dialog behavior flags.
#[derive(Debug, Clone, Copy)]
pub struct DialogOptions {
    /// Close the dialog when Escape is pressed. Default `true`.
    pub close_on_escape: bool,
    /// Close the dialog when the overlay backdrop (not the content) is
    /// clicked. Default `true`.
    pub close_on_overlay_click: bool,
    /// Whether a close button is rendered; a hidden button cannot request a
    /// close. Default `true`.
    pub show_close_button: bool,
}

impl Default for DialogOptions {
    fn default() -> Self {
        Self {
            close_on_escape: true,
            close_on_overlay_click: true,
            show_close_button: true,
        }
    }
}

/// Externally observable dialog states. Entry and exit actions run on the
/// edges of `set_open`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogState {
    Closed,
    Open,
}

/// Where a close request originated. Every close path funnels through
/// [`DialogFocusController::request_close`] with one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    EscapeKey,
    OverlayClick,
    CloseButton,
}

/// Keyboard input relevant to the focus trap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKey {
    Escape,
    Tab,
    ShiftTab,
}

/// Where a pointer click landed, as classified by the rendering layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The overlay backdrop itself.
    Overlay,
    /// Anywhere inside the dialog content.
    Content,
}

/// What the controller did with a key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Not handled; the event follows natural tab order or is dropped.
    Ignored,
    /// The focus trap wrapped focus to this node.
    FocusWrapped(NodeId),
    /// The event closed the dialog.
    Closed,
}

/// Focus controller for one dialog instance.
///
/// Owns the open/close transition actions (focus capture and restoration,
/// background scroll lock) and the Tab/Shift+Tab focus trap. The `is_open`
/// boolean driven through [`set_open`](Self::set_open) is the sole state
/// driver; there is no internal "closing" state.
///
/// The trap boundary is re-queried from the [`DocumentPort`] on every
/// trap-relevant key event, so content changes after opening are always
/// reflected.
///
/// Only one dialog is supported at a time. With stacked dialogs the last
/// opened owns the scroll lock and the trap, and dialogs must close in
/// reverse order of opening; each controller restores its own captured
/// focus target.
pub struct DialogFocusController {
    container: NodeId,
    options: DialogOptions,
    state: DialogState,
    previously_focused: Option<NodeId>,
}

impl DialogFocusController {
    pub fn new(container: NodeId, options: DialogOptions) -> Self {
        Self {
            container,
            options,
            state: DialogState::Closed,
            previously_focused: None,
        }
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == DialogState::Open
    }

    pub fn options(&self) -> DialogOptions {
        self.options
    }

    /// Drives the open/close transitions. Calls that match the current state
    /// are no-ops.
    pub fn set_open(&mut self, open: bool, port: &mut dyn DocumentPort) {
        match (self.state, open) {
            (DialogState::Closed, true) => self.open(port),
            (DialogState::Open, false) => self.close(port),
            _ => {
                tracing::trace!(open, state = ?self.state, "set_open with current state, no change");
            }
        }
    }

    fn open(&mut self, port: &mut dyn DocumentPort) {
        self.previously_focused = port.focused();
        port.set_scroll_locked(true);
        if !port.set_focus(self.container) {
            tracing::debug!(container = self.container, "Dialog container not focusable");
        }
        self.state = DialogState::Open;
        tracing::debug!(
            container = self.container,
            previously_focused = ?self.previously_focused,
            "Dialog opened"
        );
    }

    fn close(&mut self, port: &mut dyn DocumentPort) {
        port.set_scroll_locked(false);
        if let Some(previous) = self.previously_focused.take() {
            if port.contains(previous) {
                port.set_focus(previous);
                tracing::debug!(node = previous, "Focus restored after dialog close");
            } else {
                tracing::debug!(node = previous, "Previous focus target gone, not restoring");
            }
        }
        self.state = DialogState::Closed;
    }

    /// Requests a close from the given origin, honoring the configuration
    /// gates. Returns whether the dialog actually closed. A request while
    /// closed is a no-op.
    pub fn request_close(&mut self, reason: CloseReason, port: &mut dyn DocumentPort) -> bool {
        if !self.is_open() {
            return false;
        }
        let allowed = match reason {
            CloseReason::EscapeKey => self.options.close_on_escape,
            CloseReason::OverlayClick => self.options.close_on_overlay_click,
            CloseReason::CloseButton => self.options.show_close_button,
        };
        if !allowed {
            tracing::trace!(?reason, "Close request blocked by configuration");
            return false;
        }
        tracing::debug!(?reason, "Dialog close requested");
        self.close(port);
        true
    }

    /// Handles a trap-relevant key press while the dialog is open.
    ///
    /// Tab on the boundary's last focusable wraps to the first; Shift+Tab on
    /// the first wraps to the last. Everything else is left to natural tab
    /// order. The focusable list is queried fresh on every call.
    pub fn handle_key(&mut self, key: DialogKey, port: &mut dyn DocumentPort) -> KeyOutcome {
        if !self.is_open() {
            return KeyOutcome::Ignored;
        }

        match key {
            DialogKey::Escape => {
                if self.request_close(CloseReason::EscapeKey, port) {
                    KeyOutcome::Closed
                } else {
                    KeyOutcome::Ignored
                }
            }
            DialogKey::Tab | DialogKey::ShiftTab => {
                let boundary = port.focusable_descendants(self.container);
                let (first, last) = match (boundary.first(), boundary.last()) {
                    (Some(&first), Some(&last)) => (first, last),
                    _ => return KeyOutcome::Ignored,
                };
                let current = port.focused();

                let wrap_to = match key {
                    DialogKey::Tab if current == Some(last) => Some(first),
                    DialogKey::ShiftTab if current == Some(first) => Some(last),
                    _ => None,
                };

                match wrap_to {
                    Some(target) if port.set_focus(target) => {
                        tracing::trace!(node = target, "Focus trap wrapped");
                        KeyOutcome::FocusWrapped(target)
                    }
                    _ => KeyOutcome::Ignored,
                }
            }
        }
    }

    /// Handles a click while the dialog is open. Content clicks never close
    /// the dialog regardless of configuration. Returns whether the dialog
    /// closed.
    pub fn handle_click(&mut self, target: ClickTarget, port: &mut dyn DocumentPort) -> bool {
        match target {
            ClickTarget::Overlay => self.request_close(CloseReason::OverlayClick, port),
            ClickTarget::Content => false,
        }
    }
}
