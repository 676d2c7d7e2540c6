// src/db/memory.rs
// DOCUMENTATION: In-memory place store
// PURPOSE: Run the service and its tests without PostgreSQL

use crate::db::PlaceRepository;
use crate::errors::PlacesError;
use crate::models::{Place, PlaceDraft, PlaceFilter};
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Thread-safe Vec-backed repository; storage order is insertion order
#[derive(Default)]
pub struct InMemoryPlaceRepository {
    store: RwLock<Vec<Place>>,
}

impl InMemoryPlaceRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PlaceRepository for InMemoryPlaceRepository {
    async fn find(&self, id: Uuid) -> Result<Option<Place>, PlacesError> {
        let store = self.store.read().await;
        Ok(store.iter().find(|p| p.id == id).cloned())
    }

    async fn find_all(&self, filter: &PlaceFilter) -> Result<Vec<Place>, PlacesError> {
        let store = self.store.read().await;
        Ok(store.iter().filter(|p| filter.matches(p)).cloned().collect())
    }

    async fn insert(&self, draft: PlaceDraft) -> Result<Place, PlacesError> {
        let now = Utc::now();
        let place = Place {
            id: Uuid::new_v4(),
            name: draft.name().to_string(),
            slug: draft.slug().to_string(),
            city: draft.city().to_string(),
            state: draft.state().to_string(),
            created_at: now,
            updated_at: now,
        };

        self.store.write().await.push(place.clone());
        log::info!("Created place with id: {}", place.id);
        Ok(place)
    }

    async fn update(&self, id: Uuid, draft: PlaceDraft) -> Result<Option<Place>, PlacesError> {
        let mut store = self.store.write().await;
        let Some(place) = store.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };

        place.name = draft.name().to_string();
        place.slug = draft.slug().to_string();
        place.city = draft.city().to_string();
        place.state = draft.state().to_string();
        place.updated_at = Utc::now();

        log::info!("Updated place: {}", id);
        Ok(Some(place.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, PlacesError> {
        let mut store = self.store.write().await;
        let before = store.len();
        store.retain(|p| p.id != id);

        let deleted = store.len() < before;
        if deleted {
            log::info!("Deleted place: {}", id);
        }
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlaceInput;

    fn draft(name: &str) -> PlaceDraft {
        PlaceDraft::from(PlaceInput {
            name: name.to_string(),
            city: "City".to_string(),
            state: "ST".to_string(),
        })
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let repo = InMemoryPlaceRepository::new();

        let created = repo.insert(draft("Place A")).await.unwrap();
        let found = repo.find(created.id).await.unwrap();

        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn test_find_all_keeps_insertion_order() {
        let repo = InMemoryPlaceRepository::new();
        repo.insert(draft("Beta")).await.unwrap();
        repo.insert(draft("Alpha")).await.unwrap();

        let names: Vec<String> = repo
            .find_all(&PlaceFilter::default())
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();

        assert_eq!(names, vec!["Beta", "Alpha"]);
    }

    #[tokio::test]
    async fn test_update_replaces_fields() {
        let repo = InMemoryPlaceRepository::new();
        let created = repo.insert(draft("Old Name")).await.unwrap();

        let updated = repo
            .update(created.id, draft("New Name"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.slug, "new-name");
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn test_update_and_delete_unknown_id() {
        let repo = InMemoryPlaceRepository::new();

        assert!(repo.update(Uuid::new_v4(), draft("X")).await.unwrap().is_none());
        assert!(!repo.delete(Uuid::new_v4()).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_removes_record() {
        let repo = InMemoryPlaceRepository::new();
        let created = repo.insert(draft("Gone")).await.unwrap();

        assert!(repo.delete(created.id).await.unwrap());
        assert!(repo.find(created.id).await.unwrap().is_none());
        assert!(!repo.delete(created.id).await.unwrap());
    }
}
