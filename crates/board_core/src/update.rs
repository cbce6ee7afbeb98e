use crate::state::InFlight;
use crate::{
    ActionOutcome, ActionReply, BookmarkLabel, Effect, Msg, PageState, ReloadReason, RequestId,
    SuccessStrategy,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: PageState, msg: Msg) -> (PageState, Vec<Effect>) {
    let effects = match msg {
        Msg::PageLoaded(snapshot) => {
            state.replace_page(snapshot);
            Vec::new()
        }
        Msg::TriggerClicked { element } => {
            // The page is navigating away; nothing on it is live any more.
            if state.reload_pending().is_some() {
                return (state, Vec::new());
            }
            match state.begin_request(element) {
                Some(request) => vec![Effect::SendAction(request)],
                None => Vec::new(),
            }
        }
        Msg::ActionCompleted {
            request_id,
            outcome,
        } => match state.finish_request(request_id) {
            Some(finished) => reconcile(&mut state, request_id, finished, outcome),
            None => Vec::new(),
        },
        Msg::ActionFailed { request_id, reason } => {
            if let Some(finished) = state.finish_request(request_id) {
                state.push_request_notice(request_id, finished, reason);
            }
            Vec::new()
        }
        Msg::ReloadRequested => reload(&mut state, ReloadReason::Requested),
        Msg::ReloadFailed(reason) => {
            if state.reload_pending().is_some() {
                state.abort_reload(format!("Reload failed: {reason}"));
            }
            Vec::new()
        }
        Msg::NoticesDismissed => {
            state.clear_notices();
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn reconcile(
    state: &mut PageState,
    request_id: RequestId,
    finished: InFlight,
    outcome: ActionOutcome,
) -> Vec<Effect> {
    match outcome {
        ActionOutcome::Success(reply) => match (finished.kind.spec().on_success, reply) {
            (
                SuccessStrategy::SwapBookmarkLabel,
                ActionReply::Bookmark {
                    job_id,
                    is_bookmarked,
                },
            ) => {
                // The echoed id picks the element, not the one that was clicked.
                state.set_bookmark_label(&job_id, BookmarkLabel::from_bookmarked(is_bookmarked));
                Vec::new()
            }
            (SuccessStrategy::SwapBookmarkLabel, ActionReply::Acknowledged { .. }) => {
                state.push_request_notice(
                    request_id,
                    finished,
                    "reply did not carry a bookmark state".to_string(),
                );
                Vec::new()
            }
            (SuccessStrategy::Reload, _) => reload(state, ReloadReason::StageChanged),
        },
        ActionOutcome::Unauthorized => reload(state, ReloadReason::Unauthorized),
        ActionOutcome::UnexpectedStatus(code) => {
            state.push_request_notice(
                request_id,
                finished,
                format!("unexpected response status {code}"),
            );
            Vec::new()
        }
    }
}

fn reload(state: &mut PageState, reason: ReloadReason) -> Vec<Effect> {
    if state.begin_reload(reason) {
        vec![Effect::ReloadPage { reason }]
    } else {
        Vec::new()
    }
}
