//! # Villa Client
//!
//! Business rules for the Villa resource on top of the persistence port: id
//! checks, name uniqueness, server-assigned ids, JSON Patch, and the restrict rule
//! that keeps villas with villa numbers from being deleted.

use crate::model::{Villa, VillaDto, VillaNumber};
use crate::patch::{self, PatchDocument};
use crate::villa::VillaError;
use resource_store::{Repository, StoreError};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Client for the Villa resource.
#[derive(Clone)]
pub struct VillaClient {
    villas: Arc<dyn Repository<Villa>>,
    villa_numbers: Arc<dyn Repository<VillaNumber>>,
}

impl VillaClient {
    pub fn new(
        villas: Arc<dyn Repository<Villa>>,
        villa_numbers: Arc<dyn Repository<VillaNumber>>,
    ) -> Self {
        Self {
            villas,
            villa_numbers,
        }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<VillaDto>, VillaError> {
        let villas = self.villas.get_all().await?;
        debug!(count = villas.len(), "Listed villas");
        Ok(villas.into_iter().map(VillaDto::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i32) -> Result<VillaDto, VillaError> {
        if id == 0 {
            return Err(VillaError::InvalidId);
        }
        self.load(id).await.map(VillaDto::from)
    }

    /// Creates a villa. The returned DTO carries the id assigned by the store.
    #[instrument(skip(self))]
    pub async fn create(&self, dto: Option<VillaDto>) -> Result<VillaDto, VillaError> {
        let dto = dto.ok_or(VillaError::MissingPayload)?;
        dto.validate().map_err(VillaError::Validation)?;

        let name = dto.name.to_lowercase();
        let taken = self
            .villas
            .get(Box::new(move |villa: &Villa| villa.name.to_lowercase() == name))
            .await?;
        if taken.is_some() {
            return Err(VillaError::AlreadyExists(dto.name));
        }

        if dto.id != 0 {
            return Err(VillaError::ClientAssignedId(dto.id));
        }

        let requested_name = dto.name.clone();
        let created = self
            .villas
            .create(Villa::from(dto))
            .await
            .map_err(|e| match e {
                StoreError::Conflict(_) => VillaError::AlreadyExists(requested_name),
                other => other.into(),
            })?;

        info!(id = created.id, "Villa created");
        Ok(created.into())
    }

    /// Replaces a villa wholesale. Name uniqueness is not re-checked.
    #[instrument(skip(self))]
    pub async fn update(&self, id: i32, dto: Option<VillaDto>) -> Result<(), VillaError> {
        let dto = dto.ok_or_else(|| VillaError::Validation("Villa payload is required".into()))?;
        if dto.id != id {
            return Err(VillaError::IdMismatch { path: id, body: dto.id });
        }
        dto.validate().map_err(VillaError::Validation)?;

        self.replace(Villa::from(dto)).await?;
        info!(id, "Villa updated");
        Ok(())
    }

    /// Applies a JSON Patch document to a copy of the villa and stores the result.
    #[instrument(skip(self))]
    pub async fn patch(&self, id: i32, document: Option<PatchDocument>) -> Result<(), VillaError> {
        if id == 0 {
            return Err(VillaError::InvalidId);
        }
        let document =
            document.ok_or_else(|| VillaError::Validation("Patch document is required".into()))?;

        let current = self
            .villas
            .get_by_id(id)
            .await?
            .ok_or_else(|| VillaError::Validation(format!("Villa {id} does not exist")))?;

        let mut value = serde_json::to_value(VillaDto::from(current))
            .map_err(|e| VillaError::InvalidPayload(e.to_string()))?;
        patch::apply(&mut value, &document).map_err(|e| VillaError::InvalidPayload(e.to_string()))?;
        let patched: VillaDto =
            serde_json::from_value(value).map_err(|e| VillaError::InvalidPayload(e.to_string()))?;

        if patched.id != id {
            return Err(VillaError::IdMismatch { path: id, body: patched.id });
        }
        patched.validate().map_err(VillaError::Validation)?;

        self.replace(Villa::from(patched)).await?;
        info!(id, operations = document.len(), "Villa patched");
        Ok(())
    }

    /// Deletes a villa unless villa numbers still point at it.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<(), VillaError> {
        if id == 0 {
            return Err(VillaError::InvalidId);
        }
        self.load(id).await?;

        let in_use = self
            .villa_numbers
            .get(Box::new(move |number: &VillaNumber| number.villa_id == id))
            .await?;
        if in_use.is_some() {
            return Err(VillaError::HasVillaNumbers(id));
        }

        self.villas.remove(id).await.map_err(|e| match e {
            StoreError::NotFound(_) => VillaError::NotFound(id),
            other => other.into(),
        })?;
        info!(id, "Villa deleted");
        Ok(())
    }

    async fn load(&self, id: i32) -> Result<Villa, VillaError> {
        self.villas
            .get_by_id(id)
            .await?
            .ok_or(VillaError::NotFound(id))
    }

    async fn replace(&self, villa: Villa) -> Result<Villa, VillaError> {
        let id = villa.id;
        self.villas.update(villa).await.map_err(|e| match e {
            StoreError::NotFound(_) => VillaError::NotFound(id),
            other => other.into(),
        })
    }
}
