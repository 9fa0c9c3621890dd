//! Package-check webservices.
//!
//! Both endpoints accept any verb. The verb and body are parsed into a
//! [`PackageCheckRequest`] up front; anything unparseable is answered with
//! `400 Not valid input` before the store is touched.

use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Query, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use rpa_functions_core::package_check::{responses, PackageCheckRequest};

use crate::{handlers::AppError, services::PackageCheckService, state::AppState};

/// Query parameters accepted by the PC185 webservice.
#[derive(Debug, Default, Deserialize)]
pub struct WebserviceQuery {
    /// Caller name, only recorded on the request span.
    pub name: Option<String>,
    /// `"true"` turns a GET into a wake-up call.
    pub wakeup: Option<String>,
}

impl WebserviceQuery {
    fn wake_up(&self) -> bool {
        self.wakeup.as_deref() == Some("true")
    }
}

fn bad_request(message: &'static str) -> Response {
    (StatusCode::BAD_REQUEST, message).into_response()
}

/// ANY /api/PC35_Webservice
pub async fn pc35_webservice(
    State(state): State<AppState>,
    method: Method,
    body: Bytes,
) -> Result<Response, AppError> {
    tracing::info!(method = %method, "PC35 webservice request");

    handle(&state, &method, false, &body).await
}

/// ANY /api/PC185_Webservice
///
/// A malformed query string never decides the response; it is treated as an
/// empty one so verb routing still applies.
#[tracing::instrument(skip_all, fields(name = tracing::field::Empty))]
pub async fn pc185_webservice(
    State(state): State<AppState>,
    method: Method,
    query: Result<Query<WebserviceQuery>, QueryRejection>,
    body: Bytes,
) -> Result<Response, AppError> {
    let query = query.map(|Query(query)| query).unwrap_or_else(|rejection| {
        tracing::warn!(error = %rejection, "Ignoring malformed query string");
        WebserviceQuery::default()
    });
    tracing::Span::current().record("name", query.name.as_deref());
    tracing::info!(method = %method, "PC185 webservice request");

    handle(&state, &method, query.wake_up(), &body).await
}

async fn handle(
    state: &AppState,
    method: &Method,
    wake_up: bool,
    body: &[u8],
) -> Result<Response, AppError> {
    let request = match PackageCheckRequest::parse(method.as_str(), wake_up, body) {
        Ok(request) => request,
        Err(err) => {
            tracing::warn!(method = %method, error = %err, "Rejected package-check request");
            return Ok(bad_request(responses::NOT_VALID_INPUT));
        }
    };

    let service = PackageCheckService::new(state.record_store.clone());

    match request {
        PackageCheckRequest::WakeUp => Ok(responses::WAKING_UP.into_response()),
        PackageCheckRequest::QueryPending => {
            let pending = service.query_pending().await?;
            if pending.is_empty() {
                return Ok(bad_request(responses::NO_MATCHES));
            }
            tracing::debug!(count = pending.len(), "Returning pending packages");
            Ok(Json(pending).into_response())
        }
        PackageCheckRequest::Insert(packages) => {
            tracing::debug!(count = packages.len(), "Inserting packages");
            service.insert_batch(packages).await?;
            Ok(StatusCode::OK.into_response())
        }
        PackageCheckRequest::Update(update) => {
            if service.update_package(&update).await? {
                Ok(responses::SUCCESS.into_response())
            } else {
                Ok(bad_request(responses::NOT_VALID_INPUT))
            }
        }
        PackageCheckRequest::Unsupported(verb) => {
            tracing::error!(method = %verb, "Unsupported package-check verb");
            Ok(bad_request(responses::NOT_IMPLEMENTED))
        }
    }
}
