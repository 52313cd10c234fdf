//! Event model matching the backing file record layout.

use serde::{Deserialize, Serialize};

/// A single movie-theater promotional listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// ISO date (`YYYY-MM-DD`); drives the listing sort order
    pub date: String,
    pub location: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub genre: String,
    #[serde(default)]
    pub image: String,
    /// Theater chain or organization that published the event
    pub source: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub created_at: String,
}

/// Request body for creating an event.
///
/// Replacement (`PUT`) takes the same payload; mutation is whole-record.
/// Required fields are `Option` here so that presence can be checked per
/// field and the first missing one named in the error.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEventRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(rename = "type", default)]
    pub event_type: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}
