use chrono::NaiveDate;

use crate::ids::PetId;
use crate::photo::PhotoRef;

/// A pet whose health history the app tracks.
#[derive(Debug, Clone, PartialEq)]
pub struct Pet {
    pub id: PetId,
    pub name: String,
    pub breed: String,
    /// Date of birth; the dashboard derives the displayed age from it.
    pub dob: NaiveDate,
    pub photo: PhotoRef,
}
