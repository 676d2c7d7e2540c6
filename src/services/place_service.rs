// src/services/place_service.rs
// DOCUMENTATION: Business logic for places
// PURPOSE: Intermediary between handlers and repository, handles validation and slugs

use crate::db::PlaceRepository;
use crate::errors::PlacesError;
use crate::models::{Place, PlaceDraft, PlaceFilter, PlaceRequest};
use crate::services::validation::validate_place;
use uuid::Uuid;

pub struct PlaceService;

impl PlaceService {
    /// List places, optionally filtered by a name fragment
    pub async fn list_places(
        repo: &dyn PlaceRepository,
        filter: &PlaceFilter,
    ) -> Result<Vec<Place>, PlacesError> {
        repo.find_all(filter).await
    }

    /// Create a new place
    pub async fn create_place(
        repo: &dyn PlaceRepository,
        req: &PlaceRequest,
    ) -> Result<Place, PlacesError> {
        let input = validate_place(req).map_err(PlacesError::ValidationError)?;
        repo.insert(PlaceDraft::from(input)).await
    }

    /// Get a place by ID
    pub async fn get_place(repo: &dyn PlaceRepository, id: Uuid) -> Result<Place, PlacesError> {
        repo.find(id)
            .await?
            .ok_or_else(|| PlacesError::NotFound(id.to_string()))
    }

    /// Replace name/city/state of a place
    /// DOCUMENTATION: Unknown ids are reported before validation problems
    pub async fn update_place(
        repo: &dyn PlaceRepository,
        id: Uuid,
        req: &PlaceRequest,
    ) -> Result<Place, PlacesError> {
        Self::get_place(repo, id).await?;

        let input = validate_place(req).map_err(PlacesError::ValidationError)?;
        repo.update(id, PlaceDraft::from(input))
            .await?
            .ok_or_else(|| PlacesError::NotFound(id.to_string()))
    }

    /// Delete a place
    pub async fn delete_place(repo: &dyn PlaceRepository, id: Uuid) -> Result<(), PlacesError> {
        if repo.delete(id).await? {
            Ok(())
        } else {
            Err(PlacesError::NotFound(id.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::InMemoryPlaceRepository;
    use crate::services::slug::slugify_name;

    fn request(name: &str, city: &str, state: &str) -> PlaceRequest {
        serde_json::from_value(serde_json::json!({"name": name, "city": city, "state": state}))
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_then_read_has_slug_of_name() {
        let repo = InMemoryPlaceRepository::new();

        for name in ["Place A", "São Paulo Café", "Route 66 -- Diner!"] {
            let created = PlaceService::create_place(&repo, &request(name, "City", "ST"))
                .await
                .unwrap();
            let read = PlaceService::get_place(&repo, created.id).await.unwrap();

            assert_eq!(read.name, name);
            assert_eq!(read.slug, slugify_name(name));
            assert_eq!(read, created);
        }
    }

    #[tokio::test]
    async fn test_create_invalid_does_not_persist() {
        let repo = InMemoryPlaceRepository::new();

        let err = PlaceService::create_place(&repo, &PlaceRequest::default())
            .await
            .unwrap_err();

        match err {
            PlacesError::ValidationError(fields) => assert_eq!(fields.len(), 3),
            other => panic!("unexpected error: {:?}", other),
        }
        assert!(PlaceService::list_places(&repo, &PlaceFilter::default())
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_list_with_and_without_filter() {
        let repo = InMemoryPlaceRepository::new();
        PlaceService::create_place(&repo, &request("Parque Azul", "C", "S"))
            .await
            .unwrap();
        PlaceService::create_place(&repo, &request("Outro Lugar", "C", "S"))
            .await
            .unwrap();

        let all = PlaceService::list_places(&repo, &PlaceFilter::default())
            .await
            .unwrap();
        assert_eq!(all.len(), 2);

        let filtered = PlaceService::list_places(&repo, &PlaceFilter::by_name("PARQUE"))
            .await
            .unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Parque Azul");
    }

    #[tokio::test]
    async fn test_update_recomputes_slug() {
        let repo = InMemoryPlaceRepository::new();
        let created = PlaceService::create_place(&repo, &request("Old Name", "Old City", "OC"))
            .await
            .unwrap();

        let updated = PlaceService::update_place(
            &repo,
            created.id,
            &request("New Name", "New City", "NC"),
        )
        .await
        .unwrap();

        assert_eq!(updated.name, "New Name");
        assert_eq!(updated.slug, "new-name");
        assert_eq!(updated.city, "New City");
        assert_eq!(updated.state, "NC");
    }

    #[tokio::test]
    async fn test_update_unknown_id_wins_over_validation() {
        let repo = InMemoryPlaceRepository::new();

        let err = PlaceService::update_place(&repo, Uuid::new_v4(), &PlaceRequest::default())
            .await
            .unwrap_err();

        assert!(matches!(err, PlacesError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_invalid_keeps_record() {
        let repo = InMemoryPlaceRepository::new();
        let created = PlaceService::create_place(&repo, &request("Keep", "City", "ST"))
            .await
            .unwrap();

        let err = PlaceService::update_place(&repo, created.id, &request("", "City", "ST"))
            .await
            .unwrap_err();

        assert!(matches!(err, PlacesError::ValidationError(_)));
        assert_eq!(
            PlaceService::get_place(&repo, created.id).await.unwrap(),
            created
        );
    }

    #[tokio::test]
    async fn test_missing_id_is_not_found_everywhere() {
        let repo = InMemoryPlaceRepository::new();
        let id = Uuid::new_v4();

        assert!(matches!(
            PlaceService::get_place(&repo, id).await,
            Err(PlacesError::NotFound(_))
        ));
        assert!(matches!(
            PlaceService::update_place(&repo, id, &request("A", "B", "C")).await,
            Err(PlacesError::NotFound(_))
        ));
        assert!(matches!(
            PlaceService::delete_place(&repo, id).await,
            Err(PlacesError::NotFound(_))
        ));
    }
}
