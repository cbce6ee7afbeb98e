/// Form field carrying the page's anti-forgery token on every action request.
pub const CSRF_FIELD: &str = "csrfmiddlewaretoken";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ActionKind {
    ToggleSave,
    MarkContacted,
    MarkShortlisted,
    MarkArchived,
}

/// What the client does with a 200 reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuccessStrategy {
    /// Show the server's bookmark state on the element named in the reply.
    SwapBookmarkLabel,
    /// List membership changed server-side; re-derive the whole page.
    Reload,
}

/// Static configuration of one action: where it is triggered, where it is sent
/// and how its success is reconciled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionSpec {
    pub kind: ActionKind,
    pub trigger_class: &'static str,
    pub endpoint: &'static str,
    pub id_field: &'static str,
    pub on_success: SuccessStrategy,
}

const TOGGLE_SAVE: ActionSpec = ActionSpec {
    kind: ActionKind::ToggleSave,
    trigger_class: "bookmark",
    endpoint: "/ac/bookmark/",
    id_field: "job_id",
    on_success: SuccessStrategy::SwapBookmarkLabel,
};

const MARK_CONTACTED: ActionSpec = ActionSpec {
    kind: ActionKind::MarkContacted,
    trigger_class: "contact",
    endpoint: "/contact/",
    id_field: "ap_id",
    on_success: SuccessStrategy::Reload,
};

const MARK_SHORTLISTED: ActionSpec = ActionSpec {
    kind: ActionKind::MarkShortlisted,
    trigger_class: "shortlist",
    endpoint: "/shortlist/",
    id_field: "ap_id",
    on_success: SuccessStrategy::Reload,
};

const MARK_ARCHIVED: ActionSpec = ActionSpec {
    kind: ActionKind::MarkArchived,
    trigger_class: "archive",
    endpoint: "/archive/",
    id_field: "ap_id",
    on_success: SuccessStrategy::Reload,
};

impl ActionKind {
    pub const ALL: [ActionKind; 4] = [
        ActionKind::ToggleSave,
        ActionKind::MarkContacted,
        ActionKind::MarkShortlisted,
        ActionKind::MarkArchived,
    ];

    pub fn spec(self) -> &'static ActionSpec {
        match self {
            ActionKind::ToggleSave => &TOGGLE_SAVE,
            ActionKind::MarkContacted => &MARK_CONTACTED,
            ActionKind::MarkShortlisted => &MARK_SHORTLISTED,
            ActionKind::MarkArchived => &MARK_ARCHIVED,
        }
    }

    pub fn from_trigger_class(class: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.spec().trigger_class == class)
    }

    pub fn label(self) -> &'static str {
        match self {
            ActionKind::ToggleSave => "Toggle save",
            ActionKind::MarkContacted => "Mark contacted",
            ActionKind::MarkShortlisted => "Mark shortlisted",
            ActionKind::MarkArchived => "Mark archived",
        }
    }
}
