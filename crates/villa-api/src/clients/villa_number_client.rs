//! # VillaNumber Client
//!
//! Business rules for the VillaNumber resource: number uniqueness and the foreign
//! key to an existing villa, both checked before writes.

use crate::model::{
    Villa, VillaNumber, VillaNumberCreateDto, VillaNumberDto, VillaNumberUpdateDto,
};
use crate::villa_number::VillaNumberError;
use resource_store::{Repository, StoreError};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Client for the VillaNumber resource.
#[derive(Clone)]
pub struct VillaNumberClient {
    villa_numbers: Arc<dyn Repository<VillaNumber>>,
    villas: Arc<dyn Repository<Villa>>,
}

impl VillaNumberClient {
    pub fn new(
        villa_numbers: Arc<dyn Repository<VillaNumber>>,
        villas: Arc<dyn Repository<Villa>>,
    ) -> Self {
        Self {
            villa_numbers,
            villas,
        }
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<VillaNumberDto>, VillaNumberError> {
        let numbers = self.villa_numbers.get_all().await?;
        debug!(count = numbers.len(), "Listed villa numbers");
        Ok(numbers.into_iter().map(VillaNumberDto::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn get(&self, villa_no: i32) -> Result<VillaNumberDto, VillaNumberError> {
        if villa_no == 0 {
            return Err(VillaNumberError::InvalidId);
        }
        self.villa_numbers
            .get_by_id(villa_no)
            .await?
            .map(VillaNumberDto::from)
            .ok_or(VillaNumberError::NotFound(villa_no))
    }

    #[instrument(skip(self))]
    pub async fn create(
        &self,
        dto: Option<VillaNumberCreateDto>,
    ) -> Result<VillaNumberDto, VillaNumberError> {
        let dto = dto.ok_or(VillaNumberError::MissingPayload)?;
        if dto.villa_no == 0 {
            return Err(VillaNumberError::Validation("Villa Number must not be 0".into()));
        }

        if self.villa_numbers.get_by_id(dto.villa_no).await?.is_some() {
            return Err(VillaNumberError::AlreadyExists(dto.villa_no));
        }
        self.ensure_villa(dto.villa_id).await?;

        let villa_no = dto.villa_no;
        let created = self
            .villa_numbers
            .create(VillaNumber::from(dto))
            .await
            .map_err(|e| match e {
                StoreError::Conflict(_) => VillaNumberError::AlreadyExists(villa_no),
                other => other.into(),
            })?;

        info!(villa_no, villa_id = created.villa_id, "Villa number created");
        Ok(created.into())
    }

    #[instrument(skip(self))]
    pub async fn update(
        &self,
        villa_no: i32,
        dto: Option<VillaNumberUpdateDto>,
    ) -> Result<(), VillaNumberError> {
        let dto = dto.ok_or_else(|| {
            VillaNumberError::Validation("Villa number payload is required".into())
        })?;
        if dto.villa_no != villa_no {
            return Err(VillaNumberError::IdMismatch {
                path: villa_no,
                body: dto.villa_no,
            });
        }
        self.ensure_villa(dto.villa_id).await?;

        self.villa_numbers
            .update(VillaNumber::from(dto))
            .await
            .map_err(|e| match e {
                StoreError::NotFound(_) => VillaNumberError::NotFound(villa_no),
                other => other.into(),
            })?;

        info!(villa_no, "Villa number updated");
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, villa_no: i32) -> Result<(), VillaNumberError> {
        if villa_no == 0 {
            return Err(VillaNumberError::InvalidId);
        }

        self.villa_numbers
            .remove(villa_no)
            .await
            .map_err(|e| match e {
                StoreError::NotFound(_) => VillaNumberError::NotFound(villa_no),
                other => other.into(),
            })?;

        info!(villa_no, "Villa number deleted");
        Ok(())
    }

    async fn ensure_villa(&self, villa_id: i32) -> Result<(), VillaNumberError> {
        match self.villas.get_by_id(villa_id).await? {
            Some(_) => Ok(()),
            None => Err(VillaNumberError::InvalidVilla(villa_id)),
        }
    }
}
