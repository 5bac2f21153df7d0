//! Per-action request tracking
//!
//! Each user action that talks to the backend owns one `RequestStatus`
//! signal. Views derive their disabled and busy rendering from it.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::bindings::ApiError;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestStatus {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed(String),
}

impl RequestStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, RequestStatus::Pending)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RequestStatus::Failed(_))
    }

    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            RequestStatus::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    /// Status after the request settles
    pub fn settled<T>(result: &Result<T, ApiError>) -> Self {
        match result {
            Ok(_) => RequestStatus::Succeeded,
            Err(e) => RequestStatus::Failed(e.to_string()),
        }
    }
}

/// Run `request` on the UI task queue, tracking it in `status`.
///
/// Returns `false` without issuing anything while a previous request on the
/// same status is still pending.
pub fn track_request<T, Fut, S, F>(
    status: RwSignal<RequestStatus>,
    request: Fut,
    on_success: S,
    on_failure: F,
) -> bool
where
    T: 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
    S: FnOnce(T) + 'static,
    F: FnOnce(ApiError) + 'static,
{
    if status.get_untracked().is_pending() {
        return false;
    }
    status.set(RequestStatus::Pending);

    spawn_local(async move {
        let result = request.await;
        status.set(RequestStatus::settled(&result));
        match result {
            Ok(value) => on_success(value),
            Err(e) => on_failure(e),
        }
    });
    true
}
