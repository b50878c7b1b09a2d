//! Wire shapes for the villa resource.
//!
//! These never carry persistence-only columns; conversion to and from the
//! database entity lives in `models::villa`.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Full view returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VillaDto {
    pub id: i32,
    pub name: String,
    #[serde(default)]
    pub details: String,
    pub rate: f64,
    pub occupancy: i32,
    pub sqft: i32,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub amenity: String,
}

/// Input for `POST /api/villaAPI`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VillaCreateDto {
    #[validate(length(min = 1, max = 30, message = "The Name field is required and must be at most 30 characters."))]
    pub name: String,
    #[serde(default)]
    pub details: String,
    #[validate(range(min = 0.0, message = "The Rate field must not be negative."))]
    pub rate: f64,
    #[serde(default)]
    #[validate(range(min = 0, message = "The Occupancy field must not be negative."))]
    pub occupancy: i32,
    #[serde(default)]
    #[validate(range(min = 0, message = "The Sqft field must not be negative."))]
    pub sqft: i32,
    #[serde(default)]
    #[validate(length(max = 512, message = "The ImageUrl field must be at most 512 characters."))]
    pub image_url: String,
    #[serde(default)]
    #[validate(length(max = 256, message = "The Amenity field must be at most 256 characters."))]
    pub amenity: String,
}

/// Input for `PUT /api/villaAPI/{id}` and the target shape of JSON patches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VillaUpdateDto {
    pub id: i32,
    #[validate(length(min = 1, max = 30, message = "The Name field is required and must be at most 30 characters."))]
    pub name: String,
    #[serde(default)]
    pub details: String,
    #[validate(range(min = 0.0, message = "The Rate field must not be negative."))]
    pub rate: f64,
    #[validate(range(min = 0, message = "The Occupancy field must not be negative."))]
    pub occupancy: i32,
    #[validate(range(min = 0, message = "The Sqft field must not be negative."))]
    pub sqft: i32,
    #[validate(length(min = 1, max = 512, message = "The ImageUrl field is required and must be at most 512 characters."))]
    pub image_url: String,
    #[serde(default)]
    #[validate(length(max = 256, message = "The Amenity field must be at most 256 characters."))]
    pub amenity: String,
}

impl From<VillaDto> for VillaUpdateDto {
    fn from(v: VillaDto) -> Self {
        VillaUpdateDto {
            id: v.id,
            name: v.name,
            details: v.details,
            rate: v.rate,
            occupancy: v.occupancy,
            sqft: v.sqft,
            image_url: v.image_url,
            amenity: v.amenity,
        }
    }
}
