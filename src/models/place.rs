// src/models/place.rs
// DOCUMENTATION: Core data structures for places
// PURPOSE: Defines all serialization/deserialization models for API and database

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use std::collections::BTreeMap;
use uuid::Uuid;
use validator::Validate;

use crate::services::slug::slugify_name;

/// Maximum length (in characters) of every free-text place field
pub const MAX_FIELD_LENGTH: u64 = 255;

/// Field name -> validation messages, ordered by field name
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Represents a complete place record
/// DOCUMENTATION: This struct maps directly to the places table in PostgreSQL
/// and is also the JSON shape returned by every endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Place {
    /// Unique identifier (UUID v4), assigned on insert
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// URL-safe form of `name`, recomputed on every write
    pub slug: String,

    pub city: String,

    /// Free-form state / region
    pub state: String,

    /// When record was created
    pub created_at: DateTime<Utc>,

    /// When record was last modified
    pub updated_at: DateTime<Utc>,
}

/// Request DTO for creating or replacing a place
/// DOCUMENTATION: Body of POST /places and PUT /places/{id}
/// Fields are kept as raw JSON values so that a missing or wrong-typed field
/// surfaces as a validation error instead of a deserialization failure.
/// Any `slug` sent by the caller is ignored.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct PlaceRequest {
    #[serde(default)]
    pub name: Option<Value>,

    #[serde(default)]
    pub city: Option<Value>,

    #[serde(default)]
    pub state: Option<Value>,
}

impl PlaceRequest {
    /// Split the raw body into string fields and per-field type errors
    /// DOCUMENTATION: `null` counts as absent; any other non-string value is
    /// dropped from the fields and reported as "must be a string"
    pub fn fields(&self) -> (PlaceFields, FieldErrors) {
        let mut type_errors = FieldErrors::new();
        let mut take = |field: &str, value: &Option<Value>| match value {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => {
                type_errors.insert(
                    field.to_string(),
                    vec![format!("The {} field must be a string.", field)],
                );
                None
            }
        };

        let fields = PlaceFields {
            name: take("name", &self.name),
            city: take("city", &self.city),
            state: take("state", &self.state),
        };
        (fields, type_errors)
    }
}

/// String fields of a place request, checked by the `validator` rules
#[derive(Debug, Default, Clone, PartialEq, Validate)]
pub struct PlaceFields {
    #[validate(required, length(max = 255))]
    pub name: Option<String>,

    #[validate(required, length(max = 255))]
    pub city: Option<String>,

    #[validate(required, length(max = 255))]
    pub state: Option<String>,
}

impl PlaceFields {
    /// Trim every field and treat blank values as absent
    pub fn normalized(&self) -> PlaceFields {
        PlaceFields {
            name: clean(&self.name),
            city: clean(&self.city),
            state: clean(&self.state),
        }
    }
}

fn clean(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// A place payload that passed validation
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceInput {
    pub name: String,
    pub city: String,
    pub state: String,
}

/// Column values written by the repository on insert/update
/// DOCUMENTATION: Only constructible from a validated `PlaceInput`, which is
/// what keeps `slug` consistent with `name` in storage
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceDraft {
    name: String,
    slug: String,
    city: String,
    state: String,
}

impl PlaceDraft {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state(&self) -> &str {
        &self.state
    }
}

impl From<PlaceInput> for PlaceDraft {
    fn from(input: PlaceInput) -> Self {
        PlaceDraft {
            slug: slugify_name(&input.name),
            name: input.name,
            city: input.city,
            state: input.state,
        }
    }
}

/// List query parameters
/// DOCUMENTATION: DTO for parsing the query string of GET /places
#[derive(Debug, Default, Clone, Deserialize)]
pub struct PlaceFilter {
    /// Case-insensitive substring of the place name
    pub name: Option<String>,
}

impl PlaceFilter {
    #[cfg(test)]
    pub fn by_name(name: impl Into<String>) -> Self {
        PlaceFilter {
            name: Some(name.into()),
        }
    }

    /// The trimmed name fragment to match, `None` when every record matches
    pub fn name_fragment(&self) -> Option<&str> {
        self.name.as_deref().map(str::trim).filter(|n| !n.is_empty())
    }

    /// Whether `place` passes this filter
    pub fn matches(&self, place: &Place) -> bool {
        match self.name_fragment() {
            Some(fragment) => place
                .name
                .to_lowercase()
                .contains(&fragment.to_lowercase()),
            None => true,
        }
    }
}
