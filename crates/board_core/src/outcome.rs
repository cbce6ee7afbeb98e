/// Parsed body of a 200 reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionReply {
    /// Toggle-save: the server's authoritative bookmark state for `job_id`.
    Bookmark { job_id: String, is_bookmarked: bool },
    /// Stage transition acknowledged. The payload is informational only.
    Acknowledged { ap_id: Option<String> },
}

/// How the server answered an action request that reached it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Success(ActionReply),
    Unauthorized,
    UnexpectedStatus(u16),
}
