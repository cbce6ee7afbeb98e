use board_core::{ActionOutcome, PageSnapshot, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    ActionCompleted {
        request_id: RequestId,
        result: Result<ActionOutcome, ClientError>,
    },
    PageLoaded(Result<PageSnapshot, ClientError>),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct ClientError {
    pub kind: FailureKind,
    pub message: String,
}

impl ClientError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FailureKind {
    #[error("invalid url")]
    InvalidUrl,
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("timeout")]
    Timeout,
    #[error("network error")]
    Network,
    #[error("malformed reply")]
    MalformedReply,
    #[error("page too large (max {max_bytes}, actual {actual:?})")]
    TooLarge { max_bytes: u64, actual: Option<u64> },
    #[error("unsupported content type {content_type}")]
    UnsupportedContentType { content_type: String },
    #[error("page decoding failed")]
    Decode,
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("failed to build http client: {0}")]
    Client(#[from] ClientError),
}
