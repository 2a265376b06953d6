//! HTTP surface: router, state, and request handlers

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::cache::MemoryStore;
use crate::client::RxClassClient;
use crate::config::ServerConfig;
use crate::error::Error;
use crate::export;
use crate::lookup::{DrugClassService, LookupResult};
use crate::speech::{CommandSpeechEngine, SpeechEngine};

/// Index page template; `{{quip}}` is replaced at render time
const INDEX_TEMPLATE: &str = include_str!("../../templates/index.html");

/// One of these shows up under the page title on each load
const QUIPS: &[&str] = &[
    "Ask your pharmacist if reading the label is right for you.",
    "All drugs have two names, and neither is pronounceable.",
    "Side effects may include knowing what your medication actually does.",
    "Contraindications: now in convenient table form.",
    "The -mab is silent. It is not.",
];

/// HTTP-facing error type
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Upstream(String),

    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Upstream(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::Api(_) => {
                log::warn!("upstream lookup failed: {err}");
                ApiError::Upstream("Failed to fetch data from RxClass API".to_string())
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub lookup: Arc<DrugClassService<RxClassClient>>,
    pub speech: Arc<dyn SpeechEngine>,
}

#[derive(Debug, Deserialize)]
pub struct DrugNameRequest {
    #[serde(default)]
    pub drug_name: String,
}

#[derive(Debug, Deserialize)]
pub struct SpeakRequest {
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct SpeakResponse {
    pub status: String,
}

/// GET / - lookup page with a random quip
async fn index() -> Html<String> {
    let quip = QUIPS
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or_default();

    Html(INDEX_TEMPLATE.replace("{{quip}}", quip))
}

/// POST /get_drug_class - aggregate classification data for a drug
async fn get_drug_class(
    State(state): State<AppState>,
    Json(req): Json<DrugNameRequest>,
) -> Result<Json<LookupResult>, ApiError> {
    if req.drug_name.is_empty() {
        return Err(ApiError::BadRequest("No drug name provided".to_string()));
    }

    let result = state.lookup.lookup(&req.drug_name).await?;
    Ok(Json(result))
}

/// POST /speak - synchronous text-to-speech playback
async fn speak(
    State(state): State<AppState>,
    Json(req): Json<SpeakRequest>,
) -> Result<Json<SpeakResponse>, ApiError> {
    if req.text.is_empty() {
        return Err(ApiError::BadRequest("No text provided".to_string()));
    }

    state.speech.speak(&req.text).await?;

    Ok(Json(SpeakResponse {
        status: "success".to_string(),
    }))
}

/// POST /download_results - export cached results as an .xlsx attachment.
/// Never triggers a fresh lookup.
async fn download_results(
    State(state): State<AppState>,
    Json(req): Json<DrugNameRequest>,
) -> Result<Response, ApiError> {
    if req.drug_name.is_empty() {
        return Err(ApiError::BadRequest("No drug name provided".to_string()));
    }

    let result = state.lookup.cached(&req.drug_name).ok_or_else(|| {
        ApiError::NotFound(format!("No results found for drug '{}'", req.drug_name))
    })?;

    let bytes = export::to_xlsx(&result)?;
    let headers = [
        (header::CONTENT_TYPE, export::XLSX_CONTENT_TYPE.to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!(
                "attachment; filename=\"{}\"",
                export::attachment_filename(&req.drug_name)
            ),
        ),
    ];

    Ok((headers, bytes).into_response())
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/get_drug_class", post(get_drug_class))
        .route("/speak", post(speak))
        .route("/download_results", post(download_results))
        .with_state(state)
}

/// Run the HTTP server until shutdown
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let client = RxClassClient::with_base_url(&config.rxclass_base_url)?;
    let lookup = DrugClassService::new(Arc::new(client), Arc::new(MemoryStore::new()));

    let speech: Arc<dyn SpeechEngine> = match &config.speech_command {
        Some(program) => Arc::new(CommandSpeechEngine::new(program)),
        None => Arc::new(CommandSpeechEngine::system_default()),
    };

    let state = AppState {
        lookup: Arc::new(lookup),
        speech,
    };

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    log::info!("rxlookup listening on {addr}");
    log::info!("RxClass API: {}", config.rxclass_base_url);

    axum::serve(listener, router(state)).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_status_codes() {
        let cases = [
            (ApiError::BadRequest("x".into()), StatusCode::BAD_REQUEST),
            (ApiError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (
                ApiError::Upstream("x".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                ApiError::Internal("x".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn test_upstream_error_maps_to_fetch_failure_message() {
        let err: ApiError = Error::Api(crate::error::ApiError::Upstream { status: 502 }).into();
        match err {
            ApiError::Upstream(msg) => assert!(msg.contains("RxClass")),
            other => panic!("expected Upstream, got {other:?}"),
        }
    }

    #[test]
    fn test_index_template_has_quip_placeholder() {
        assert!(INDEX_TEMPLATE.contains("{{quip}}"));
        assert!(!QUIPS.is_empty());
    }
}
