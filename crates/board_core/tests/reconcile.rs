use std::sync::Once;

use board_core::{
    update, ActionKind, ActionOutcome, ActionReply, BookmarkLabel, Effect, Msg, PageSnapshot,
    PageState, ReloadReason, TriggerElement,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(board_logging::initialize_for_tests);
}

fn page(elements: Vec<TriggerElement>) -> PageState {
    let snapshot = PageSnapshot {
        csrf_token: Some("tok".to_string()),
        elements,
        messages: Vec::new(),
    };
    let (state, _) = update(PageState::new(), Msg::PageLoaded(snapshot));
    state
}

fn click(state: PageState, element: usize) -> (PageState, u64) {
    let (state, effects) = update(state, Msg::TriggerClicked { element });
    let request_id = match effects.as_slice() {
        [Effect::SendAction(request)] => request.request_id,
        other => panic!("expected one request, got {other:?}"),
    };
    (state, request_id)
}

fn complete(state: PageState, request_id: u64, outcome: ActionOutcome) -> (PageState, Vec<Effect>) {
    update(
        state,
        Msg::ActionCompleted {
            request_id,
            outcome,
        },
    )
}

fn bookmark_reply(job_id: &str, is_bookmarked: bool) -> ActionOutcome {
    ActionOutcome::Success(ActionReply::Bookmark {
        job_id: job_id.to_string(),
        is_bookmarked,
    })
}

#[test]
fn bookmarked_reply_shows_unsave_with_solid_icon() {
    init_logging();
    let state = page(vec![TriggerElement::new(ActionKind::ToggleSave, "42")]);
    let (state, request_id) = click(state, 0);

    let (mut state, effects) = complete(state, request_id, bookmark_reply("42", true));

    assert!(effects.is_empty());
    let view = state.view();
    let label = view.elements[0].label.unwrap();
    assert_eq!(label, BookmarkLabel::Unsave);
    assert_eq!(label.text(), "Unsave");
    assert_eq!(label.to_html(), r#"<i class="fas fa-bookmark me-2"></i>Unsave"#);
    assert_eq!(view.elements[0].pending, 0);
    assert!(state.consume_dirty());
}

#[test]
fn unbookmarked_reply_shows_save_with_outline_icon() {
    init_logging();
    let state = page(vec![
        TriggerElement::new(ActionKind::ToggleSave, "42").with_label(BookmarkLabel::Unsave)
    ]);
    let (state, request_id) = click(state, 0);

    let (state, effects) = complete(state, request_id, bookmark_reply("42", false));

    assert!(effects.is_empty());
    let label = state.view().elements[0].label.unwrap();
    assert_eq!(label, BookmarkLabel::Save);
    assert_eq!(label.to_html(), r#"<i class="far fa-bookmark me-2"></i>Save"#);
}

#[test]
fn label_follows_echoed_job_id_not_clicked_element() {
    init_logging();
    let state = page(vec![
        TriggerElement::new(ActionKind::ToggleSave, "1"),
        TriggerElement::new(ActionKind::ToggleSave, "2"),
        TriggerElement::new(ActionKind::MarkContacted, "2"),
    ]);
    let (state, request_id) = click(state, 0);

    let (state, _) = complete(state, request_id, bookmark_reply("2", true));

    let view = state.view();
    assert_eq!(view.elements[0].label, Some(BookmarkLabel::Save));
    assert_eq!(view.elements[1].label, Some(BookmarkLabel::Unsave));
    assert_eq!(view.elements[2].label, None);
}

#[test]
fn stage_transition_success_reloads_regardless_of_payload() {
    init_logging();
    for kind in [
        ActionKind::MarkContacted,
        ActionKind::MarkShortlisted,
        ActionKind::MarkArchived,
    ] {
        for reply in [
            ActionReply::Acknowledged {
                ap_id: Some("7".to_string()),
            },
            ActionReply::Acknowledged { ap_id: None },
        ] {
            let state = page(vec![TriggerElement::new(kind, "7")]);
            let (state, request_id) = click(state, 0);
            let (state, effects) = complete(state, request_id, ActionOutcome::Success(reply));

            assert_eq!(
                effects,
                vec![Effect::ReloadPage {
                    reason: ReloadReason::StageChanged
                }]
            );
            assert_eq!(state.reload_pending(), Some(ReloadReason::StageChanged));
        }
    }
}

#[test]
fn unauthorized_reloads_for_every_kind() {
    init_logging();
    for kind in ActionKind::ALL {
        let state = page(vec![TriggerElement::new(kind, "7")]);
        let (state, request_id) = click(state, 0);
        let before = state.view().elements;

        let (state, effects) = complete(state, request_id, ActionOutcome::Unauthorized);

        assert_eq!(
            effects,
            vec![Effect::ReloadPage {
                reason: ReloadReason::Unauthorized
            }]
        );
        assert_eq!(state.view().elements[0].label, before[0].label);
    }
}

#[test]
fn unexpected_status_leaves_page_and_records_notice() {
    init_logging();
    let state = page(vec![TriggerElement::new(ActionKind::ToggleSave, "42")]);
    let (state, request_id) = click(state, 0);

    let (state, effects) = complete(state, request_id, ActionOutcome::UnexpectedStatus(500));

    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.elements[0].label, Some(BookmarkLabel::Save));
    assert_eq!(view.reload_pending, None);
    assert_eq!(view.notices.len(), 1);
    assert_eq!(view.notices[0].request_id, Some(request_id));
    assert_eq!(view.notices[0].kind, Some(ActionKind::ToggleSave));
    assert_eq!(view.notices[0].identifier.as_deref(), Some("42"));
    assert_eq!(view.notices[0].message, "unexpected response status 500");
}

#[test]
fn transport_failure_records_notice_without_reload() {
    init_logging();
    let state = page(vec![TriggerElement::new(ActionKind::MarkShortlisted, "7")]);
    let (state, request_id) = click(state, 0);

    let (state, effects) = update(
        state,
        Msg::ActionFailed {
            request_id,
            reason: "network error".to_string(),
        },
    );

    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.in_flight, 0);
    assert_eq!(view.reload_pending, None);
    assert_eq!(view.notices[0].message, "network error");

    let (state, _) = update(state, Msg::NoticesDismissed);
    assert!(state.view().notices.is_empty());
}

#[test]
fn bookmark_action_answered_without_state_records_notice() {
    init_logging();
    let state = page(vec![TriggerElement::new(ActionKind::ToggleSave, "42")]);
    let (state, request_id) = click(state, 0);

    let (state, effects) = complete(
        state,
        request_id,
        ActionOutcome::Success(ActionReply::Acknowledged { ap_id: None }),
    );

    assert!(effects.is_empty());
    assert_eq!(state.view().elements[0].label, Some(BookmarkLabel::Save));
    assert_eq!(state.view().notices.len(), 1);
}

#[test]
fn unknown_request_ids_are_ignored() {
    init_logging();
    let state = page(vec![TriggerElement::new(ActionKind::ToggleSave, "42")]);
    let before = state.clone();

    let (state, effects) = complete(state, 77, bookmark_reply("42", true));

    assert!(effects.is_empty());
    assert_eq!(state, before);
}
