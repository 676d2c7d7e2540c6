// src/db/repository.rs
// DOCUMENTATION: Database access layer - all SQL queries
// PURPOSE: Abstract database operations from business logic

use crate::errors::PlacesError;
use crate::models::{Place, PlaceDraft, PlaceFilter};
use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

/// Storage operations for places
/// DOCUMENTATION: Implemented by PgPlaceRepository (production) and
/// InMemoryPlaceRepository (tests, `STORAGE_BACKEND=memory`)
#[async_trait]
pub trait PlaceRepository: Send + Sync {
    /// Fetch one place, `None` if the id is unknown
    async fn find(&self, id: Uuid) -> Result<Option<Place>, PlacesError>;

    /// Fetch every place matching `filter`, in storage order
    async fn find_all(&self, filter: &PlaceFilter) -> Result<Vec<Place>, PlacesError>;

    async fn insert(&self, draft: PlaceDraft) -> Result<Place, PlacesError>;

    /// Replace name/slug/city/state, `None` if the id is unknown
    async fn update(&self, id: Uuid, draft: PlaceDraft) -> Result<Option<Place>, PlacesError>;

    /// Hard delete, `false` if the id is unknown
    async fn delete(&self, id: Uuid) -> Result<bool, PlacesError>;
}

/// Escape LIKE metacharacters so the fragment is matched literally
fn like_pattern(fragment: &str) -> String {
    let escaped = fragment
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

/// PlaceRepository backed by PostgreSQL
/// DOCUMENTATION: Uses query_as for type-safe SQL queries
#[derive(Clone)]
pub struct PgPlaceRepository {
    pool: PgPool,
}

impl PgPlaceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PlaceRepository for PgPlaceRepository {
    async fn find(&self, id: Uuid) -> Result<Option<Place>, PlacesError> {
        let place = sqlx::query_as::<_, Place>(
            r#"
            SELECT id, name, slug, city, state, created_at, updated_at
            FROM places
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            log::error!("Database error fetching place: {}", e);
            PlacesError::DatabaseError(e.to_string())
        })?;

        if place.is_none() {
            log::warn!("Place not found: {}", id);
        }

        Ok(place)
    }

    async fn find_all(&self, filter: &PlaceFilter) -> Result<Vec<Place>, PlacesError> {
        let select_clause = r#"
            SELECT id, name, slug, city, state, created_at, updated_at
            FROM places
        "#;

        let places = match filter.name_fragment() {
            Some(fragment) => {
                let sql = format!(
                    "{} WHERE name ILIKE $1 ESCAPE '\\' ORDER BY created_at ASC, id ASC",
                    select_clause
                );
                log::debug!("Executing list query: {} [{}]", sql, fragment);

                sqlx::query_as::<_, Place>(&sql)
                    .bind(like_pattern(fragment))
                    .fetch_all(&self.pool)
                    .await
            }
            None => {
                let sql = format!("{} ORDER BY created_at ASC, id ASC", select_clause);
                log::debug!("Executing list query: {}", sql);

                sqlx::query_as::<_, Place>(&sql).fetch_all(&self.pool).await
            }
        }
        .map_err(|e| {
            log::error!("List query error: {}", e);
            PlacesError::DatabaseError(e.to_string())
        })?;

        log::info!("List completed: {} results", places.len());
        Ok(places)
    }

    async fn insert(&self, draft: PlaceDraft) -> Result<Place, PlacesError> {
        let place = sqlx::query_as::<_, Place>(
            r#"
            INSERT INTO places (id, name, slug, city, state, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, NOW(), NOW())
            RETURNING id, name, slug, city, state, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4()) // $1
        .bind(draft.name()) // $2
        .bind(draft.slug()) // $3
        .bind(draft.city()) // $4
        .bind(draft.state()) // $5
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            log::error!("Failed to create place: {}", e);
            PlacesError::DatabaseError(e.to_string())
        })?;

        log::info!("Created place with id: {}", place.id);
        Ok(place)
    }

    async fn update(&self, id: Uuid, draft: PlaceDraft) -> Result<Option<Place>, PlacesError> {
        let place = sqlx::query_as::<_, Place>(
            r#"
            UPDATE places
            SET name = $1,
                slug = $2,
                city = $3,
                state = $4,
                updated_at = NOW()
            WHERE id = $5
            RETURNING id, name, slug, city, state, created_at, updated_at
            "#,
        )
        .bind(draft.name())
        .bind(draft.slug())
        .bind(draft.city())
        .bind(draft.state())
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            log::error!("Update failed for place {}: {}", id, e);
            PlacesError::DatabaseError(e.to_string())
        })?;

        if place.is_some() {
            log::info!("Updated place: {}", id);
        }
        Ok(place)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, PlacesError> {
        let rows = sqlx::query("DELETE FROM places WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                log::error!("Delete failed for place {}: {}", id, e);
                PlacesError::DatabaseError(e.to_string())
            })?
            .rows_affected();

        if rows > 0 {
            log::info!("Deleted place: {}", id);
        }
        Ok(rows > 0)
    }
}
