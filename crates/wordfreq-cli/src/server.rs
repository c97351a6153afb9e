//! HTTP API over the word frequency queries.
//!
//! Every endpoint accepts a JSON body, validates it, and answers with either
//! the query result or a validation envelope:
//!
//! - `POST /api/words/freq/highest`  `{text}` -> `{amount}`
//! - `POST /api/words/freq/specific` `{text, word}` -> `{amount}`
//! - `POST /api/words/freq/page`     `{text, limit}` -> `[{word, frequency}]`

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use thiserror::Error;
use tracing::{debug, warn};
use wordfreq_core::{RankedEntry, frequency_for_word, highest_frequency, top_n_words};

use crate::shared::AmountResponse;
use crate::validation::{
    HighestFrequencyRequest, MostFrequentWordsRequest, ValidationError, WordFrequencyRequest,
};

pub const MALFORMED_BODY: &str = "Malformed request body";

/// Settings shared by all handlers.
#[derive(Debug, Clone, Copy)]
pub struct ServerConfig {
    /// Largest accepted `text` field, in bytes.
    pub max_text_bytes: usize,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Malformed request body: {0}")]
    MalformedBody(#[from] JsonRejection),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!(error = %self, "Rejected request");

        let (status, body) = match self {
            ApiError::Validation(err) => (StatusCode::BAD_REQUEST, err),
            ApiError::MalformedBody(rejection) => {
                let status = match rejection {
                    JsonRejection::MissingJsonContentType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
                    _ => StatusCode::BAD_REQUEST,
                };
                (status, ValidationError::new(MALFORMED_BODY, Vec::new()))
            }
        };

        (status, Json(body)).into_response()
    }
}

pub fn router(config: ServerConfig) -> Router {
    Router::new()
        .route("/api/words/freq/highest", post(highest_handler))
        .route("/api/words/freq/specific", post(specific_handler))
        .route("/api/words/freq/page", post(page_handler))
        .with_state(config)
}

/// POST /api/words/freq/highest
pub async fn highest_handler(
    State(config): State<ServerConfig>,
    payload: Result<Json<HighestFrequencyRequest>, JsonRejection>,
) -> Result<Json<AmountResponse>, ApiError> {
    let Json(request) = payload?;
    let query = request.validate(Some(config.max_text_bytes))?;

    let amount = highest_frequency(&query.text);
    debug!(amount, "Served highest frequency");
    Ok(Json(AmountResponse { amount }))
}

/// POST /api/words/freq/specific
pub async fn specific_handler(
    State(config): State<ServerConfig>,
    payload: Result<Json<WordFrequencyRequest>, JsonRejection>,
) -> Result<Json<AmountResponse>, ApiError> {
    let Json(request) = payload?;
    let query = request.validate(Some(config.max_text_bytes))?;

    let amount = frequency_for_word(&query.text, &query.word);
    debug!(amount, word = %query.word, "Served word frequency");
    Ok(Json(AmountResponse { amount }))
}

/// POST /api/words/freq/page
pub async fn page_handler(
    State(config): State<ServerConfig>,
    payload: Result<Json<MostFrequentWordsRequest>, JsonRejection>,
) -> Result<Json<Vec<RankedEntry>>, ApiError> {
    let Json(request) = payload?;
    let query = request.validate(Some(config.max_text_bytes))?;

    let entries = top_n_words(&query.text, query.limit);
    debug!(limit = query.limit, returned = entries.len(), "Served most frequent words");
    Ok(Json(entries))
}
