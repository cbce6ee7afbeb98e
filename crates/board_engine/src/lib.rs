//! Job board engine: HTTP action requests, page scanning and effect execution.
mod client;
mod decode;
mod engine;
mod reply;
mod scan;
mod settings;
mod types;

pub use client::{ActionSender, HttpBoardClient, PageLoader};
pub use decode::decode_page;
pub use engine::{ChannelEventSink, EngineHandle, EventSink};
pub use scan::scan_page;
pub use settings::ClientSettings;
pub use types::{ClientError, EngineError, EngineEvent, FailureKind};
