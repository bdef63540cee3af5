// src/presentation/http/controllers/contact.rs
use crate::application::{
    commands::messages::{CreateMessageCommand, UpdateMessageCommand},
    dto::MessageDto,
    queries::messages::{GetMessageQuery, ListMessagesQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::openapi::MessageListResponse;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

const fn default_limit() -> u32 {
    20
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MessageListParams {
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub cursor: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateMessageRequest {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub email_address: String,
    /// May be omitted or blank; such messages are stored unscored.
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct UpdateMessageRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub email_address: Option<String>,
    pub message: Option<String>,
}

#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = CreateMessageRequest,
    responses(
        (status = 201, description = "Message stored with its derived sentiment.", body = MessageDto),
        (status = 400, description = "Invalid contact details.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Contact"
)]
pub async fn create_message(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreateMessageRequest>,
) -> HttpResult<(StatusCode, Json<MessageDto>)> {
    let command = CreateMessageCommand {
        first_name: payload.first_name,
        last_name: payload.last_name,
        phone_number: payload.phone_number,
        email_address: payload.email_address,
        message: payload.message,
    };

    let message = state
        .services
        .message_commands
        .create_message(command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(message)))
}

#[utoipa::path(
    get,
    path = "/api/contact",
    params(MessageListParams),
    responses(
        (status = 200, description = "Page of messages, newest first.", body = MessageListResponse),
        (status = 400, description = "Malformed cursor.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Contact"
)]
pub async fn list_messages(
    Extension(state): Extension<HttpState>,
    Query(params): Query<MessageListParams>,
) -> HttpResult<Json<MessageListResponse>> {
    state
        .services
        .message_queries
        .list_messages(ListMessagesQuery {
            limit: params.limit,
            cursor: params.cursor,
        })
        .await
        .into_http()
        .map(|page| Json(page.into()))
}

#[utoipa::path(
    get,
    path = "/api/contact/{id}",
    params(("id" = i64, Path, description = "Message id")),
    responses(
        (status = 200, description = "The message.", body = MessageDto),
        (status = 404, description = "No message with this id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Contact"
)]
pub async fn get_message(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
) -> HttpResult<Json<MessageDto>> {
    state
        .services
        .message_queries
        .get_message(GetMessageQuery { id })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    patch,
    path = "/api/contact/{id}",
    params(("id" = i64, Path, description = "Message id")),
    request_body = UpdateMessageRequest,
    responses(
        (status = 200, description = "Message updated; sentiment recomputed from the new text.", body = MessageDto),
        (status = 400, description = "Invalid contact details.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No message with this id.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Contact"
)]
pub async fn update_message(
    Extension(state): Extension<HttpState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateMessageRequest>,
) -> HttpResult<Json<MessageDto>> {
    let command = UpdateMessageCommand {
        id,
        first_name: payload.first_name,
        last_name: payload.last_name,
        phone_number: payload.phone_number,
        email_address: payload.email_address,
        message: payload.message,
    };

    state
        .services
        .message_commands
        .update_message(command)
        .await
        .into_http()
        .map(Json)
}
