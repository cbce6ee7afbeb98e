#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// A page rendering was scanned; replaces everything shown.
    PageLoaded(crate::PageSnapshot),
    /// User activated a trigger element.
    TriggerClicked { element: crate::ElementId },
    /// The server answered an action request.
    ActionCompleted {
        request_id: crate::RequestId,
        outcome: crate::ActionOutcome,
    },
    /// An action request never produced a usable answer (network, timeout, bad payload).
    ActionFailed {
        request_id: crate::RequestId,
        reason: String,
    },
    /// User asked for a fresh page.
    ReloadRequested,
    /// Re-fetching the page failed; the last page stays in place.
    ReloadFailed(String),
    /// User cleared the inline notices.
    NoticesDismissed,
    /// Fallback for placeholder wiring.
    NoOp,
}
