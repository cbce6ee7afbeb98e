use board_core::ActionReply;
use serde::Deserialize;
use serde_json::Value;

use crate::{ClientError, FailureKind};

#[derive(Debug, Deserialize)]
struct BookmarkBody {
    job_id: Value,
    is_bookmarked: bool,
}

#[derive(Debug, Deserialize)]
struct TransitionBody {
    #[serde(default)]
    ap_id: Option<Value>,
}

pub(crate) fn parse_bookmark_reply(body: &[u8]) -> Result<ActionReply, ClientError> {
    let parsed: BookmarkBody = serde_json::from_slice(body)
        .map_err(|err| ClientError::new(FailureKind::MalformedReply, err.to_string()))?;
    let job_id = identifier(&parsed.job_id).ok_or_else(|| {
        ClientError::new(
            FailureKind::MalformedReply,
            format!("job_id is not an identifier: {}", parsed.job_id),
        )
    })?;
    Ok(ActionReply::Bookmark {
        job_id,
        is_bookmarked: parsed.is_bookmarked,
    })
}

/// Transition replies never fail: the page is reloaded whatever they contain.
pub(crate) fn parse_transition_reply(body: Option<&[u8]>) -> ActionReply {
    let ap_id = body
        .and_then(|bytes| serde_json::from_slice::<TransitionBody>(bytes).ok())
        .and_then(|parsed| parsed.ap_id)
        .as_ref()
        .and_then(identifier);
    ActionReply::Acknowledged { ap_id }
}

fn identifier(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}
