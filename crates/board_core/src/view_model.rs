use crate::{ActionKind, BookmarkLabel, ElementId, ReloadReason, RequestId};

/// Inline error shown next to the page; the page itself is left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub request_id: Option<RequestId>,
    pub kind: Option<ActionKind>,
    pub identifier: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageViewModel {
    pub generation: u64,
    pub has_token: bool,
    pub elements: Vec<TriggerRowView>,
    pub messages: Vec<String>,
    pub notices: Vec<Notice>,
    pub in_flight: usize,
    pub reload_pending: Option<ReloadReason>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerRowView {
    pub element: ElementId,
    pub kind: ActionKind,
    pub value: String,
    pub label: Option<BookmarkLabel>,
    /// Requests sent from this element that have not been answered yet.
    pub pending: usize,
}
