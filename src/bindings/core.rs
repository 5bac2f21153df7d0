use std::sync::OnceLock;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, HtmlAnchorElement, Request, RequestInit, Response};

// ============================================================================
// Errors
// ============================================================================

/// Failure of a backend call.
///
/// Transport and backend failures are kept apart only so that the backend's
/// `detail` message can be surfaced where a view wants it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request failed with status {status}{}", detail_suffix(.detail))]
    Status { status: u16, detail: Option<String> },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("browser error: {0}")]
    Browser(String),
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail.as_deref().map(|d| format!(": {d}")).unwrap_or_default()
}

impl ApiError {
    /// Backend-provided `detail` message, if the response carried one
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Build a status error from a non-2xx response body.
    ///
    /// Only a string `detail` is kept; validation errors whose `detail` is an
    /// array are reported without one.
    pub fn from_response_body(status: u16, body: &str) -> Self {
        #[derive(Deserialize)]
        struct ErrorBody {
            detail: Option<serde_json::Value>,
        }

        let detail = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.detail)
            .and_then(|d| match d {
                serde_json::Value::String(s) => Some(s),
                _ => None,
            });

        ApiError::Status { status, detail }
    }
}

fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", value))
}

fn browser_error(value: JsValue) -> ApiError {
    ApiError::Browser(js_error_message(&value))
}

// ============================================================================
// Endpoint Base
// ============================================================================

static API_BASE: OnceLock<String> = OnceLock::new();

/// Set the prefix used for every backend call. Only the first call wins.
pub fn set_api_base(base: &str) {
    let _ = API_BASE.set(base.trim_end_matches('/').to_string());
}

pub fn api_base() -> &'static str {
    API_BASE.get().map(String::as_str).unwrap_or("")
}

/// Join a base URL and an absolute API path
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

// ============================================================================
// Requests
// ============================================================================

/// Multipart form body for POST calls
pub struct MultipartForm {
    data: FormData,
}

impl MultipartForm {
    pub fn new() -> Result<Self, ApiError> {
        let data = FormData::new().map_err(browser_error)?;
        Ok(Self { data })
    }

    pub fn text(self, name: &str, value: &str) -> Result<Self, ApiError> {
        self.data.append_with_str(name, value).map_err(browser_error)?;
        Ok(self)
    }

    pub fn file(self, name: &str, file: &web_sys::File) -> Result<Self, ApiError> {
        self.data
            .append_with_blob_and_filename(name, file, &file.name())
            .map_err(browser_error)?;
        Ok(self)
    }
}

/// Reference to a stored asset returned by the generation endpoints
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AssetRef {
    pub url: String,
    #[serde(default)]
    pub id: Option<String>,
}

/// POST a multipart form and decode the JSON response
pub async fn post_form<R: DeserializeOwned>(path: &str, form: MultipartForm) -> Result<R, ApiError> {
    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(&JsValue::from(form.data));

    let url = join_url(api_base(), path);
    let request = Request::new_with_str_and_init(&url, &init).map_err(browser_error)?;
    let response = send(&request).await?;
    read_json(response).await
}

/// GET a JSON document
pub async fn get_json<R: DeserializeOwned>(path: &str) -> Result<R, ApiError> {
    let init = RequestInit::new();
    init.set_method("GET");

    let url = join_url(api_base(), path);
    let request = Request::new_with_str_and_init(&url, &init).map_err(browser_error)?;
    let response = send(&request).await?;
    read_json(response).await
}

async fn send(request: &Request) -> Result<Response, ApiError> {
    let window =
        web_sys::window().ok_or_else(|| ApiError::Browser("window is not available".to_string()))?;

    let value = JsFuture::from(window.fetch_with_request(request))
        .await
        .map_err(|e| ApiError::Network(js_error_message(&e)))?;

    value
        .dyn_into::<Response>()
        .map_err(|_| ApiError::Browser("fetch resolved to a non-Response value".to_string()))
}

async fn read_json<R: DeserializeOwned>(response: Response) -> Result<R, ApiError> {
    let text = response.text().map_err(browser_error)?;
    let body = JsFuture::from(text)
        .await
        .map_err(|e| ApiError::Network(js_error_message(&e)))?
        .as_string()
        .unwrap_or_default();

    if !response.ok() {
        return Err(ApiError::from_response_body(response.status(), &body));
    }

    parse_json(&body)
}

pub fn parse_json<R: DeserializeOwned>(body: &str) -> Result<R, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

// ============================================================================
// Browser Utilities
// ============================================================================

/// Save a URL to disk through a temporary download link
pub fn download_file(url: &str, filename: &str) -> Result<(), ApiError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ApiError::Browser("document is not available".to_string()))?;

    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .map_err(browser_error)?
        .dyn_into()
        .map_err(|_| ApiError::Browser("created element is not an anchor".to_string()))?;

    anchor.set_href(url);
    anchor.set_download(filename);
    anchor.click();
    Ok(())
}
