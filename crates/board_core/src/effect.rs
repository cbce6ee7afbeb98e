use crate::ActionRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SendAction(ActionRequest),
    /// Recovery strategy: drop local state and re-derive the page from the server.
    ReloadPage { reason: ReloadReason },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReloadReason {
    /// The server rejected the session (HTTP 401).
    Unauthorized,
    /// A stage transition changed list membership server-side.
    StageChanged,
    /// The user asked for a fresh page.
    Requested,
}
