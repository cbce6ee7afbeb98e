use crate::ActionKind;

/// Position of a trigger element in document order.
pub type ElementId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookmarkLabel {
    Save,
    Unsave,
}

impl BookmarkLabel {
    pub fn from_bookmarked(is_bookmarked: bool) -> Self {
        if is_bookmarked {
            BookmarkLabel::Unsave
        } else {
            BookmarkLabel::Save
        }
    }

    pub fn text(self) -> &'static str {
        match self {
            BookmarkLabel::Save => "Save",
            BookmarkLabel::Unsave => "Unsave",
        }
    }

    /// Solid icon while bookmarked, outline otherwise.
    pub fn icon_class(self) -> &'static str {
        match self {
            BookmarkLabel::Save => "far fa-bookmark me-2",
            BookmarkLabel::Unsave => "fas fa-bookmark me-2",
        }
    }

    pub fn to_html(self) -> String {
        format!(r#"<i class="{}"></i>{}"#, self.icon_class(), self.text())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerElement {
    pub kind: ActionKind,
    /// Opaque identifier carried in the element's value attribute.
    pub value: String,
    /// Current label; only toggle-save elements carry one.
    pub label: Option<BookmarkLabel>,
}

impl TriggerElement {
    pub fn new(kind: ActionKind, value: impl Into<String>) -> Self {
        let label = match kind {
            ActionKind::ToggleSave => Some(BookmarkLabel::Save),
            _ => None,
        };
        Self {
            kind,
            value: value.into(),
            label,
        }
    }

    pub fn with_label(mut self, label: BookmarkLabel) -> Self {
        if self.kind == ActionKind::ToggleSave {
            self.label = Some(label);
        }
        self
    }
}

/// The interactive parts of one rendering of the page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageSnapshot {
    pub csrf_token: Option<String>,
    pub elements: Vec<TriggerElement>,
    /// Flash messages the server rendered into this page, e.g. after a 401.
    pub messages: Vec<String>,
}
