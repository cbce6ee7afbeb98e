use crate::action::{ActionKind, CSRF_FIELD};

pub type RequestId = u64;

/// One state-changing request, built fresh per click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRequest {
    pub request_id: RequestId,
    pub kind: ActionKind,
    pub endpoint: &'static str,
    pub id_field: &'static str,
    pub identifier: String,
    pub csrf_token: String,
}

impl ActionRequest {
    pub fn new(
        request_id: RequestId,
        kind: ActionKind,
        identifier: impl Into<String>,
        csrf_token: impl Into<String>,
    ) -> Self {
        let spec = kind.spec();
        Self {
            request_id,
            kind,
            endpoint: spec.endpoint,
            id_field: spec.id_field,
            identifier: identifier.into(),
            csrf_token: csrf_token.into(),
        }
    }

    /// Form body fields in wire order.
    pub fn form_fields(&self) -> [(&'static str, &str); 2] {
        [
            (self.id_field, self.identifier.as_str()),
            (CSRF_FIELD, self.csrf_token.as_str()),
        ]
    }
}
