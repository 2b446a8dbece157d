//! Entity model for Pet Health Studio.
//!
//! Plain data types shared by the core state layer and the desktop GUI:
//! pets, their medical records and food entries, the clinic contact card,
//! photo references and id generation.

pub mod clinic;
pub mod food;
pub mod ids;
pub mod pet;
pub mod photo;
pub mod record;

pub use clinic::VetClinic;
pub use food::Food;
pub use ids::{FoodId, IdGenerator, PetId, RecordId};
pub use pet::Pet;
pub use photo::PhotoRef;
pub use record::{MedicalRecord, RecordDetails, RecordKind};
