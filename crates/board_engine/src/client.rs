use board_core::{ActionOutcome, ActionRequest, PageSnapshot, SuccessStrategy};
use board_logging::{board_debug, board_info, board_warn};
use futures_util::StreamExt;
use reqwest::header::{CONTENT_TYPE, REFERER};
use reqwest::{StatusCode, Url};
use url::form_urlencoded;

use crate::reply::{parse_bookmark_reply, parse_transition_reply};
use crate::{decode_page, scan_page, ClientError, ClientSettings, FailureKind};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=UTF-8";
const ALLOWED_PAGE_TYPES: [&str; 2] = ["text/html", "application/xhtml+xml"];

/// Sends one action request and classifies the server's answer.
#[async_trait::async_trait]
pub trait ActionSender: Send + Sync {
    async fn send(&self, request: &ActionRequest) -> Result<ActionOutcome, ClientError>;
}

/// Fetches the page and scans its triggers; this is what a reload does.
#[async_trait::async_trait]
pub trait PageLoader: Send + Sync {
    async fn load(&self) -> Result<PageSnapshot, ClientError>;
}

/// HTTP client shared by action requests and page loads, so both carry the
/// same session cookies.
#[derive(Debug, Clone)]
pub struct HttpBoardClient {
    client: reqwest::Client,
    base_url: Url,
    page_url: Url,
    settings: ClientSettings,
}

impl HttpBoardClient {
    pub fn new(settings: ClientSettings) -> Result<Self, ClientError> {
        let base_url = Url::parse(&settings.base_url)
            .map_err(|err| ClientError::new(FailureKind::InvalidUrl, err.to_string()))?;
        let page_url = join(&base_url, &settings.page_path)?;
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .cookie_store(true)
            .build()
            .map_err(|err| ClientError::new(FailureKind::Network, err.to_string()))?;

        Ok(Self {
            client,
            base_url,
            page_url,
            settings,
        })
    }

    pub fn page_url(&self) -> &Url {
        &self.page_url
    }

    fn is_page_type_allowed(content_type: &str) -> bool {
        let ct = content_type.split(';').next().unwrap_or(content_type).trim();
        ALLOWED_PAGE_TYPES
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(ct))
    }
}

#[async_trait::async_trait]
impl ActionSender for HttpBoardClient {
    async fn send(&self, request: &ActionRequest) -> Result<ActionOutcome, ClientError> {
        let url = join(&self.base_url, request.endpoint)?;
        if request.csrf_token.is_empty() {
            board_warn!(
                "request_id={} sent without an anti-forgery token",
                request.request_id
            );
        }
        let body = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(request.form_fields())
            .finish();

        board_debug!(
            "POST {} request_id={} {}={}",
            url,
            request.request_id,
            request.id_field,
            request.identifier
        );
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .header("X-Requested-With", "XMLHttpRequest")
            .header(REFERER, self.page_url.as_str())
            .body(body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        board_debug!("request_id={} answered {}", request.request_id, status);
        match status {
            StatusCode::OK => {
                let body = response.bytes().await;
                let reply = match request.kind.spec().on_success {
                    SuccessStrategy::SwapBookmarkLabel => {
                        parse_bookmark_reply(&body.map_err(map_reqwest_error)?)?
                    }
                    SuccessStrategy::Reload => parse_transition_reply(body.ok().as_deref()),
                };
                Ok(ActionOutcome::Success(reply))
            }
            StatusCode::UNAUTHORIZED => Ok(ActionOutcome::Unauthorized),
            other => Ok(ActionOutcome::UnexpectedStatus(other.as_u16())),
        }
    }
}

#[async_trait::async_trait]
impl PageLoader for HttpBoardClient {
    async fn load(&self) -> Result<PageSnapshot, ClientError> {
        let response = self
            .client
            .get(self.page_url.clone())
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let max_bytes = self.settings.max_page_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(ClientError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(content_len),
                    },
                    "page too large",
                ));
            }
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());
        if let Some(ct) = content_type.as_deref() {
            if !Self::is_page_type_allowed(ct) {
                return Err(ClientError::new(
                    FailureKind::UnsupportedContentType {
                        content_type: ct.to_string(),
                    },
                    "page is not html",
                ));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(ClientError::new(
                    FailureKind::TooLarge {
                        max_bytes,
                        actual: Some(next_len),
                    },
                    "page too large",
                ));
            }
            bytes.extend_from_slice(&chunk);
        }

        let html = decode_page(&bytes, content_type.as_deref())?;
        let snapshot = scan_page(&html);
        board_info!(
            "Loaded {} ({} bytes, {} triggers, token {})",
            self.page_url,
            bytes.len(),
            snapshot.elements.len(),
            if snapshot.csrf_token.is_some() { "present" } else { "missing" }
        );
        Ok(snapshot)
    }
}

fn join(base: &Url, path: &str) -> Result<Url, ClientError> {
    base.join(path)
        .map_err(|err| ClientError::new(FailureKind::InvalidUrl, format!("{path}: {err}")))
}

fn map_reqwest_error(err: reqwest::Error) -> ClientError {
    if err.is_timeout() {
        return ClientError::new(FailureKind::Timeout, err.to_string());
    }
    ClientError::new(FailureKind::Network, err.to_string())
}
