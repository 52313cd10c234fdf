//! Closed vocabularies for event classification.
//!
//! Values are validated at the API boundary and stored as plain strings, so
//! data files written by older tooling still load.

/// Promotional event category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventType {
    Premiere,
    Giveaway,
    Promotion,
    Experience,
    Festival,
    Special,
}

impl EventType {
    pub const ALL: [EventType; 6] = [
        EventType::Premiere,
        EventType::Giveaway,
        EventType::Promotion,
        EventType::Experience,
        EventType::Festival,
        EventType::Special,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Premiere => "premiere",
            EventType::Giveaway => "giveaway",
            EventType::Promotion => "promotion",
            EventType::Experience => "experience",
            EventType::Festival => "festival",
            EventType::Special => "special",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "premiere" => Some(EventType::Premiere),
            "giveaway" => Some(EventType::Giveaway),
            "promotion" => Some(EventType::Promotion),
            "experience" => Some(EventType::Experience),
            "festival" => Some(EventType::Festival),
            "special" => Some(EventType::Special),
            _ => None,
        }
    }
}

/// Film genre associated with an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Genre {
    Action,
    Romance,
    Drama,
    Comedy,
    Thriller,
    SciFi,
    Horror,
    Animation,
}

impl Genre {
    pub const ALL: [Genre; 8] = [
        Genre::Action,
        Genre::Romance,
        Genre::Drama,
        Genre::Comedy,
        Genre::Thriller,
        Genre::SciFi,
        Genre::Horror,
        Genre::Animation,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Genre::Action => "action",
            Genre::Romance => "romance",
            Genre::Drama => "drama",
            Genre::Comedy => "comedy",
            Genre::Thriller => "thriller",
            Genre::SciFi => "sci-fi",
            Genre::Horror => "horror",
            Genre::Animation => "animation",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "action" => Some(Genre::Action),
            "romance" => Some(Genre::Romance),
            "drama" => Some(Genre::Drama),
            "comedy" => Some(Genre::Comedy),
            "thriller" => Some(Genre::Thriller),
            "sci-fi" => Some(Genre::SciFi),
            "horror" => Some(Genre::Horror),
            "animation" => Some(Genre::Animation),
            _ => None,
        }
    }
}

/// Theater chains and origins events can be published by.
pub const KNOWN_SOURCES: &[&str] = &[
    "CGV",
    "Lotte Cinema",
    "Megabox",
    "MaxMovie",
    "Film Studio",
    "Indie Theater",
    "Culture Center",
];

/// Whether `s` names a known source.
pub fn is_known_source(s: &str) -> bool {
    KNOWN_SOURCES.contains(&s)
}
