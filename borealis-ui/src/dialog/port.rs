//! The document port: the seam between dialog focus logic and the real
//! focus/DOM machinery of the embedding toolkit.

/// Opaque identifier of a focusable node in the document tree.
pub type NodeId = u64;

/// Focus and document operations the dialog controller needs.
///
/// Production implementations wrap the embedding toolkit's focus APIs; tests
/// use a scripted in-memory document. The controller re-queries
/// [`focusable_descendants`](DocumentPort::focusable_descendants) on every
/// trap-relevant key event, so implementations must reflect the live
/// document, not a cached snapshot.
pub trait DocumentPort {
    /// The node currently holding document focus, if any.
    fn focused(&self) -> Option<NodeId>;

    /// Moves document focus to `node`. Returns `false` when the node no
    /// longer exists; the document focus is then left unchanged.
    fn set_focus(&mut self, node: NodeId) -> bool;

    /// Whether `node` still exists in the document.
    fn contains(&self, node: NodeId) -> bool;

    /// The focusable descendants of `container`, in tab order.
    fn focusable_descendants(&self, container: NodeId) -> Vec<NodeId>;

    /// Locks or unlocks background scrolling. A single shared document
    /// resource; last writer wins.
    fn set_scroll_locked(&mut self, locked: bool);
}
