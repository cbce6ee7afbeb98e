use std::sync::{mpsc, Arc};

use board_core::{ActionOutcome, ActionReply, Effect, Msg};
use board_engine::{ClientSettings, EngineError, EngineEvent, EngineHandle, EventSink};
use board_logging::{board_debug, board_info, board_warn};

use super::app::Input;

pub(crate) struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub(crate) fn new(
        settings: ClientSettings,
        input_tx: mpsc::Sender<Input>,
    ) -> Result<Self, EngineError> {
        let engine = EngineHandle::new(settings, Arc::new(MsgSink { tx: input_tx }))?;
        Ok(Self { engine })
    }

    pub(crate) fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SendAction(request) => {
                    board_info!(
                        "SendAction request_id={} kind={:?} {}={}",
                        request.request_id,
                        request.kind,
                        request.id_field,
                        request.identifier
                    );
                    self.engine.send(request);
                }
                Effect::ReloadPage { reason } => {
                    board_info!("ReloadPage reason={:?}", reason);
                    self.engine.reload();
                }
            }
        }
    }
}

/// Feeds engine events back into the shell's message loop.
struct MsgSink {
    tx: mpsc::Sender<Input>,
}

impl EventSink for MsgSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(Input::Msg(event_to_msg(event)));
    }
}

fn event_to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::ActionCompleted { request_id, result } => match result {
            Ok(outcome) => {
                if let ActionOutcome::Success(ActionReply::Acknowledged { ap_id }) = &outcome {
                    board_debug!(
                        "request_id={} acknowledged ap_id={}",
                        request_id,
                        ap_id.as_deref().unwrap_or("<none>")
                    );
                }
                Msg::ActionCompleted {
                    request_id,
                    outcome,
                }
            }
            Err(err) => {
                board_warn!("request_id={} failed: {}", request_id, err);
                Msg::ActionFailed {
                    request_id,
                    reason: err.kind.to_string(),
                }
            }
        },
        EngineEvent::PageLoaded(Ok(snapshot)) => Msg::PageLoaded(snapshot),
        EngineEvent::PageLoaded(Err(err)) => {
            board_warn!("page reload failed: {}", err);
            Msg::ReloadFailed(err.kind.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use board_core::PageSnapshot;
    use board_engine::{ClientError, FailureKind};

    fn failure(kind: FailureKind) -> ClientError {
        ClientError {
            kind,
            message: "details".to_string(),
        }
    }

    #[test]
    fn answered_requests_pass_through() {
        let msg = event_to_msg(EngineEvent::ActionCompleted {
            request_id: 4,
            result: Ok(ActionOutcome::Unauthorized),
        });
        assert_eq!(
            msg,
            Msg::ActionCompleted {
                request_id: 4,
                outcome: ActionOutcome::Unauthorized
            }
        );
    }

    #[test]
    fn acknowledged_transitions_pass_through() {
        let outcome = ActionOutcome::Success(ActionReply::Acknowledged {
            ap_id: Some("7".to_string()),
        });
        let msg = event_to_msg(EngineEvent::ActionCompleted {
            request_id: 6,
            result: Ok(outcome.clone()),
        });
        assert_eq!(
            msg,
            Msg::ActionCompleted {
                request_id: 6,
                outcome
            }
        );
    }

    #[test]
    fn transport_failures_become_notices() {
        let msg = event_to_msg(EngineEvent::ActionCompleted {
            request_id: 5,
            result: Err(failure(FailureKind::Timeout)),
        });
        assert_eq!(
            msg,
            Msg::ActionFailed {
                request_id: 5,
                reason: "timeout".to_string()
            }
        );
    }

    #[test]
    fn page_loads_map_to_page_messages() {
        assert_eq!(
            event_to_msg(EngineEvent::PageLoaded(Ok(PageSnapshot::default()))),
            Msg::PageLoaded(PageSnapshot::default())
        );
        assert_eq!(
            event_to_msg(EngineEvent::PageLoaded(Err(failure(FailureKind::HttpStatus(502))))),
            Msg::ReloadFailed("http status 502".to_string())
        );
    }
}
