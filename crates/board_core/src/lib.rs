//! Job board core: pure action-dispatch state machine and view-model helpers.
mod action;
mod effect;
mod msg;
mod outcome;
mod page;
mod request;
mod state;
mod update;
mod view_model;

pub use action::{ActionKind, ActionSpec, SuccessStrategy, CSRF_FIELD};
pub use effect::{Effect, ReloadReason};
pub use msg::Msg;
pub use outcome::{ActionOutcome, ActionReply};
pub use page::{BookmarkLabel, ElementId, PageSnapshot, TriggerElement};
pub use request::{ActionRequest, RequestId};
pub use state::PageState;
pub use update::update;
pub use view_model::{Notice, PageViewModel, TriggerRowView};
