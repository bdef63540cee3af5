// src/presentation/http/controllers/satisfaction.rs
use crate::application::{dto::SatisfactionDto, queries::satisfaction::AnalyzeSatisfactionQuery};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct SatisfactionRequest {
    #[serde(default)]
    pub message: Option<String>,
}

/// Scores a message on the fly; nothing is persisted.
#[utoipa::path(
    post,
    path = "/api/satisfaction",
    request_body = SatisfactionRequest,
    responses(
        (status = 200, description = "Binary satisfaction and label (`null` for blank text).", body = SatisfactionDto)
    ),
    tag = "Contact"
)]
pub async fn analyze(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<SatisfactionRequest>,
) -> Json<SatisfactionDto> {
    Json(state.services.satisfaction.analyze(&AnalyzeSatisfactionQuery {
        message: payload.message,
    }))
}
