// src/presentation/http/controllers/posts.rs
use crate::application::{
    commands::posts::{CreatePostCommand, DeletePostCommand, UpdatePostCommand},
    dto::PostDto,
    queries::posts::{GetPostBySlugQuery, ListPostsQuery},
};
use crate::domain::post::Category;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::openapi::PostListResponse;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json,
    extract::{Path, Query},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer};
use utoipa::{IntoParams, ToSchema};

const fn default_limit() -> u32 {
    20
}

/// Distinguishes an absent field from an explicit `null`.
fn explicit_null<'de, D>(deserializer: D) -> Result<Option<Option<DateTime<Utc>>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<DateTime<Utc>>::deserialize(deserializer).map(Some)
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PostListParams {
    /// Restrict to published (`true`) or draft (`false`) posts.
    #[serde(default)]
    pub published: Option<bool>,
    #[serde(default = "default_limit")]
    pub limit: u32,
    #[serde(default)]
    pub cursor: Option<String>,
}

/// Payload for creating a post. Any `slug` sent by the client is ignored.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePostRequest {
    pub title: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    pub content: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub read_time: Option<u32>,
    #[serde(default)]
    pub is_published: Option<bool>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ReplacePostRequest {
    pub title: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    pub content: String,
    #[serde(default)]
    pub author: Option<String>,
    pub category: Category,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub read_time: Option<u32>,
    #[serde(default)]
    pub is_published: Option<bool>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PatchPostRequest {
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub content: Option<String>,
    pub author: Option<String>,
    pub category: Option<Category>,
    /// Omit to keep the current date, send `null` to clear it.
    #[serde(default, deserialize_with = "explicit_null")]
    #[schema(value_type = Option<String>, format = DateTime)]
    pub date: Option<Option<DateTime<Utc>>>,
    pub read_time: Option<u32>,
    pub is_published: Option<bool>,
}

#[utoipa::path(
    get,
    path = "/api/posts",
    params(PostListParams),
    responses(
        (status = 200, description = "Page of posts, newest first.", body = PostListResponse),
        (status = 400, description = "Malformed cursor.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn list_posts(
    Extension(state): Extension<HttpState>,
    Query(params): Query<PostListParams>,
) -> HttpResult<Json<PostListResponse>> {
    state
        .services
        .post_queries
        .list_posts(ListPostsQuery {
            published: params.published,
            limit: params.limit,
            cursor: params.cursor,
        })
        .await
        .into_http()
        .map(|page| Json(page.into()))
}

#[utoipa::path(
    post,
    path = "/api/posts",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created with a derived slug.", body = PostDto),
        (status = 400, description = "Invalid payload or title yields no slug.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Duplicate title or slug could not be assigned.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn create_post(
    Extension(state): Extension<HttpState>,
    Json(payload): Json<CreatePostRequest>,
) -> HttpResult<(StatusCode, Json<PostDto>)> {
    let command = CreatePostCommand {
        title: payload.title,
        slug: None,
        excerpt: payload.excerpt,
        content: payload.content,
        author: payload.author,
        category: payload.category,
        date: payload.date,
        read_time: payload.read_time,
        is_published: payload.is_published,
    };

    let post = state
        .services
        .post_commands
        .create_post(command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(post)))
}

#[utoipa::path(
    get,
    path = "/api/posts/{slug}",
    params(("slug" = String, Path, description = "Post slug")),
    responses(
        (status = 200, description = "The post.", body = PostDto),
        (status = 404, description = "No post with this slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn get_post(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<PostDto>> {
    state
        .services
        .post_queries
        .get_post_by_slug(GetPostBySlugQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/posts/{slug}",
    params(("slug" = String, Path, description = "Post slug")),
    request_body = ReplacePostRequest,
    responses(
        (status = 200, description = "Post replaced; the slug is unchanged.", body = PostDto),
        (status = 400, description = "Invalid payload.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No post with this slug.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Concurrent modification or duplicate title.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn replace_post(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    Json(payload): Json<ReplacePostRequest>,
) -> HttpResult<Json<PostDto>> {
    let command = UpdatePostCommand {
        slug,
        title: Some(payload.title),
        excerpt: Some(payload.excerpt.unwrap_or_default()),
        content: Some(payload.content),
        author: Some(payload.author.unwrap_or_default()),
        category: Some(payload.category),
        date: Some(payload.date),
        read_time: Some(payload.read_time.unwrap_or(0)),
        is_published: Some(payload.is_published.unwrap_or(true)),
    };

    state
        .services
        .post_commands
        .update_post(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    patch,
    path = "/api/posts/{slug}",
    params(("slug" = String, Path, description = "Post slug")),
    request_body = PatchPostRequest,
    responses(
        (status = 200, description = "Post updated; the slug is unchanged.", body = PostDto),
        (status = 400, description = "Invalid payload.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "No post with this slug.", body = crate::presentation::http::error::ErrorResponse),
        (status = 409, description = "Concurrent modification or duplicate title.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn patch_post(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
    Json(payload): Json<PatchPostRequest>,
) -> HttpResult<Json<PostDto>> {
    let command = UpdatePostCommand {
        slug,
        title: payload.title,
        excerpt: payload.excerpt,
        content: payload.content,
        author: payload.author,
        category: payload.category,
        date: payload.date,
        read_time: payload.read_time,
        is_published: payload.is_published,
    };

    state
        .services
        .post_commands
        .update_post(command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/posts/{slug}",
    params(("slug" = String, Path, description = "Post slug")),
    responses(
        (status = 204, description = "Post deleted."),
        (status = 404, description = "No post with this slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Posts"
)]
pub async fn delete_post(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<StatusCode> {
    state
        .services
        .post_commands
        .delete_post(DeletePostCommand { slug })
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}
