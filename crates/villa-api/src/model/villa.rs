use serde::{Deserialize, Serialize};

/// Longest accepted villa name.
pub const MAX_NAME_LEN: usize = 30;

/// A rentable villa as it is stored.
///
/// # Store
/// This struct implements [`StoreEntity`](resource_store::StoreEntity), so the store
/// assigns `id` on insert and keeps `name` unique ignoring case. See
/// [`crate::villa::entity`].
#[derive(Debug, Clone, PartialEq)]
pub struct Villa {
    pub id: i32,
    pub name: String,
    pub details: String,
    pub occupancy: i32,
    pub image_url: String,
    pub sqft: i32,
    pub rate: f64,
    pub amenity: String,
}

/// Transfer object for [`Villa`], used for both requests and responses.
///
/// Missing fields deserialize to their defaults, so `{"name":"Seaside"}` is a
/// complete create payload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VillaDto {
    pub id: i32,
    pub name: String,
    pub details: String,
    pub occupancy: i32,
    pub image_url: String,
    pub sqft: i32,
    pub rate: f64,
    pub amenity: String,
}

impl VillaDto {
    /// Field-level checks: `name` is required and at most [`MAX_NAME_LEN`] characters.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("The Name field is required.".to_string());
        }
        if self.name.chars().count() > MAX_NAME_LEN {
            return Err(format!(
                "The field Name must be a string with a maximum length of {MAX_NAME_LEN}."
            ));
        }
        Ok(())
    }
}

impl From<VillaDto> for Villa {
    fn from(dto: VillaDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
            details: dto.details,
            occupancy: dto.occupancy,
            image_url: dto.image_url,
            sqft: dto.sqft,
            rate: dto.rate,
            amenity: dto.amenity,
        }
    }
}

impl From<Villa> for VillaDto {
    fn from(villa: Villa) -> Self {
        Self {
            id: villa.id,
            name: villa.name,
            details: villa.details,
            occupancy: villa.occupancy,
            image_url: villa.image_url,
            sqft: villa.sqft,
            rate: villa.rate,
            amenity: villa.amenity,
        }
    }
}
