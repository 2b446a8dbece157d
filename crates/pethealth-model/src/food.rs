use crate::ids::{FoodId, PetId};
use crate::photo::PhotoRef;

/// A food product associated with one pet.
#[derive(Debug, Clone, PartialEq)]
pub struct Food {
    pub id: FoodId,
    pub pet_id: PetId,
    pub name: String,
    /// Package weight in kilograms; forms reject non-positive values.
    pub weight_kg: f64,
    pub photo: PhotoRef,
}
