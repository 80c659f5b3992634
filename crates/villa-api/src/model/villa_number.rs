use serde::{Deserialize, Serialize};

/// A numbered unit belonging to a [`Villa`](crate::model::Villa).
///
/// `villa_no` is the primary key and is chosen by the caller; `villa_id` must point
/// at an existing villa when the record is written.
#[derive(Debug, Clone, PartialEq)]
pub struct VillaNumber {
    pub villa_no: i32,
    pub villa_id: i32,
    pub special_details: String,
}

/// Response transfer object for [`VillaNumber`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VillaNumberDto {
    pub villa_no: i32,
    pub villa_id: i32,
    pub special_details: String,
}

/// Payload for creating a villa number.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VillaNumberCreateDto {
    pub villa_no: i32,
    pub villa_id: i32,
    pub special_details: String,
}

/// Payload for replacing a villa number.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VillaNumberUpdateDto {
    pub villa_no: i32,
    pub villa_id: i32,
    pub special_details: String,
}

impl From<VillaNumber> for VillaNumberDto {
    fn from(number: VillaNumber) -> Self {
        Self {
            villa_no: number.villa_no,
            villa_id: number.villa_id,
            special_details: number.special_details,
        }
    }
}

impl From<VillaNumberCreateDto> for VillaNumber {
    fn from(dto: VillaNumberCreateDto) -> Self {
        Self {
            villa_no: dto.villa_no,
            villa_id: dto.villa_id,
            special_details: dto.special_details,
        }
    }
}

impl From<VillaNumberUpdateDto> for VillaNumber {
    fn from(dto: VillaNumberUpdateDto) -> Self {
        Self {
            villa_no: dto.villa_no,
            villa_id: dto.villa_id,
            special_details: dto.special_details,
        }
    }
}
