//! Catalog metadata endpoints.

use axum::Json;
use serde::Serialize;

use super::ApiResult;
use crate::models::{EventType, Genre, KNOWN_SOURCES};

/// The fixed classification vocabularies the catalog accepts.
#[derive(Debug, Serialize)]
pub struct VocabResponse {
    pub types: Vec<&'static str>,
    pub genres: Vec<&'static str>,
    pub sources: Vec<&'static str>,
}

/// GET /api/events/vocab - List the accepted classification vocabularies.
///
/// The presentation views use this to populate filter dropdowns and the admin
/// form instead of hardcoding the vocabularies client-side.
pub async fn get_vocab() -> ApiResult<Json<VocabResponse>> {
    Ok(Json(VocabResponse {
        types: EventType::ALL.iter().map(|t| t.as_str()).collect(),
        genres: Genre::ALL.iter().map(|g| g.as_str()).collect(),
        sources: KNOWN_SOURCES.to_vec(),
    }))
}
