use std::sync::{mpsc, Arc};
use std::thread;

use board_core::ActionRequest;
use board_logging::{board_debug, board_warn};

use crate::client::{ActionSender, HttpBoardClient, PageLoader};
use crate::{ClientSettings, EngineError, EngineEvent};

enum EngineCommand {
    Send(ActionRequest),
    Reload,
}

/// Receives engine events as they complete, in completion order.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

/// Runs every command as an independent task; nothing is ordered, deduplicated
/// or cancelled.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(settings: ClientSettings, sink: Arc<dyn EventSink>) -> Result<Self, EngineError> {
        let client = Arc::new(HttpBoardClient::new(settings)?);
        Self::with_client(client, sink)
    }

    pub fn with_client<C>(client: Arc<C>, sink: Arc<dyn EventSink>) -> Result<Self, EngineError>
    where
        C: ActionSender + PageLoader + 'static,
    {
        let runtime = tokio::runtime::Runtime::new()?;
        let (cmd_tx, cmd_rx) = mpsc::channel();

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let client = client.clone();
                let sink = sink.clone();
                runtime.spawn(async move {
                    handle_command(client.as_ref(), command, sink.as_ref()).await;
                });
            }
        });

        Ok(Self { cmd_tx })
    }

    pub fn send(&self, request: ActionRequest) {
        if self.cmd_tx.send(EngineCommand::Send(request)).is_err() {
            board_warn!("engine stopped; action request dropped");
        }
    }

    pub fn reload(&self) {
        if self.cmd_tx.send(EngineCommand::Reload).is_err() {
            board_warn!("engine stopped; reload dropped");
        }
    }
}

async fn handle_command<C>(client: &C, command: EngineCommand, sink: &dyn EventSink)
where
    C: ActionSender + PageLoader,
{
    match command {
        EngineCommand::Send(request) => {
            let result = client.send(&request).await;
            board_debug!("request_id={} finished: {:?}", request.request_id, result);
            sink.emit(EngineEvent::ActionCompleted {
                request_id: request.request_id,
                result,
            });
        }
        EngineCommand::Reload => {
            let result = client.load().await;
            sink.emit(EngineEvent::PageLoaded(result));
        }
    }
}
