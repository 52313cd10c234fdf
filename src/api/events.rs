//! Event API endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ApiResult;
use crate::errors::AppError;
use crate::models::{self, CreateEventRequest, Event, EventType, Genre};
use crate::query::{self, ListQuery};
use crate::AppState;

/// Maximum page size for listing requests.
const MAX_PAGE_SIZE: usize = 100;

/// Query parameters for the listing endpoint.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(rename = "type", default)]
    pub event_type: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default = "default_page")]
    pub page: usize,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_page() -> usize {
    1
}

fn default_limit() -> usize {
    10
}

/// Paged listing response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEventsResponse {
    pub events: Vec<Event>,
    pub total: usize,
    pub page: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_prev: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Response body for a successful creation.
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub message: String,
    pub event: Event,
}

/// Response body for a successful deletion.
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub message: String,
}

/// GET /api/events - List events with filtering, sorting and pagination.
pub async fn list_events(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> ApiResult<Json<ListEventsResponse>> {
    let Some(events) = state.store.load().await? else {
        return Ok(Json(ListEventsResponse {
            events: Vec::new(),
            total: 0,
            page: 1,
            total_pages: 0,
            has_next: false,
            has_prev: false,
            message: Some("No event data available yet.".to_string()),
        }));
    };

    let list_query = ListQuery {
        search: params.search,
        event_type: params.event_type,
        genre: params.genre,
        source: params.source,
        page: params.page,
        limit: params.limit.clamp(1, MAX_PAGE_SIZE),
    };

    let result = query::run(events, &list_query);

    Ok(Json(ListEventsResponse {
        events: result.events,
        total: result.total,
        page: result.page,
        total_pages: result.total_pages,
        has_next: result.has_next,
        has_prev: result.has_prev,
        message: None,
    }))
}

/// GET /api/events/:id - Get a single event.
pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Event>> {
    match state.store.get(&id).await? {
        Some(event) => Ok(Json(event)),
        None => Err(AppError::NotFound(format!("Event {} not found", id))),
    }
}

/// POST /api/events - Create a new event and persist it.
pub async fn create_event(
    State(state): State<AppState>,
    Json(request): Json<CreateEventRequest>,
) -> ApiResult<(StatusCode, Json<CreatedResponse>)> {
    let fields = validate(&request)?;

    let id = format!("event_{}", Uuid::new_v4());
    let event = build_event(id, String::new(), fields, &request);
    let event = state.store.append(event).await?;

    tracing::info!("Created event {} ({})", event.id, event.title);

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Event created successfully.".to_string(),
            event,
        }),
    ))
}

/// PUT /api/events/:id - Replace an event wholesale.
///
/// Takes the same payload as creation; `id` and `created_at` are preserved.
pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<CreateEventRequest>,
) -> ApiResult<Json<Event>> {
    let fields = validate(&request)?;

    let existing = state
        .store
        .get(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Event {} not found", id)))?;

    let event = build_event(existing.id, existing.created_at, fields, &request);
    match state.store.replace(&id, event).await? {
        Some(event) => {
            tracing::info!("Replaced event {}", event.id);
            Ok(Json(event))
        }
        None => Err(AppError::NotFound(format!("Event {} not found", id))),
    }
}

/// DELETE /api/events/:id - Delete an event.
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeletedResponse>> {
    if !state.store.remove(&id).await? {
        return Err(AppError::NotFound(format!("Event {} not found", id)));
    }

    tracing::info!("Deleted event {}", id);

    Ok(Json(DeletedResponse {
        message: "Event deleted successfully.".to_string(),
    }))
}

/// Required fields of a request, presence-checked and vocabulary-checked.
struct RequiredFields {
    title: String,
    date: String,
    location: String,
    event_type: String,
    genre: String,
    source: String,
}

/// Validate a creation/replacement payload.
///
/// Presence is checked field by field in a fixed order so the first missing
/// field is the one named in the error, then type/genre/source are checked
/// against the closed vocabularies.
fn validate(request: &CreateEventRequest) -> Result<RequiredFields, AppError> {
    let title = require(&request.title, "title")?;
    let date = require(&request.date, "date")?;
    let location = require(&request.location, "location")?;
    let event_type = require(&request.event_type, "type")?;
    let genre = require(&request.genre, "genre")?;
    let source = require(&request.source, "source")?;

    if EventType::from_str(&event_type).is_none() {
        return Err(AppError::Validation(format!(
            "Unknown event type: {}",
            event_type
        )));
    }
    if Genre::from_str(&genre).is_none() {
        return Err(AppError::Validation(format!("Unknown genre: {}", genre)));
    }
    if !models::is_known_source(&source) {
        return Err(AppError::Validation(format!("Unknown source: {}", source)));
    }

    Ok(RequiredFields {
        title,
        date,
        location,
        event_type,
        genre,
        source,
    })
}

fn require(value: &Option<String>, field: &'static str) -> Result<String, AppError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value.clone()),
        _ => Err(AppError::Validation(format!("{} is required", field))),
    }
}

/// Assemble a full record from validated fields, filling optional defaults.
fn build_event(
    id: String,
    created_at: String,
    fields: RequiredFields,
    request: &CreateEventRequest,
) -> Event {
    let image = request
        .image
        .clone()
        .filter(|image| !image.is_empty())
        .unwrap_or_else(|| format!("https://picsum.photos/300/200?random={}", id));

    let created_at = if created_at.is_empty() {
        Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
    } else {
        created_at
    };

    Event {
        id,
        title: fields.title,
        description: request.description.clone().unwrap_or_default(),
        date: fields.date,
        location: fields.location,
        event_type: fields.event_type,
        genre: fields.genre,
        image,
        source: fields.source,
        link: request.link.clone().unwrap_or_default(),
        created_at,
    }
}
