//! Modal form controllers.
//!
//! Each controller owns a visibility flag, the id being edited (`None`
//! while creating) and a draft buffer the modal edits in place. Nothing
//! touches the store until `save`; a validation failure keeps the modal
//! open with the draft intact and the error shown inline. `cancel`
//! discards the draft outright.

mod food;
mod pet;
mod record;

pub use food::{FoodDraft, FoodForm};
pub use pet::{PetDraft, PetForm};
pub use record::{RecordDraft, RecordForm};

use thiserror::Error;

/// Validation failure surfaced inside an open modal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("please fill in the {0} field")]
    MissingField(&'static str),

    #[error("weight must be greater than zero")]
    NonPositiveWeight,

    #[error("time must be HH:MM, got \"{0}\"")]
    InvalidTime(String),

    #[error("no pet is selected")]
    NoPetSelected,
}
