//! Core state layer for Pet Health Studio.
//!
//! Owns the entity store, the derivation pipeline, the filter state and
//! the modal form controllers, all free of UI-framework types: the GUI
//! crate renders this state and routes input back into it.

pub mod derived;
pub mod filter;
pub mod forms;
pub mod seed;
pub mod store;

pub use derived::{DerivedCache, DerivedViews};
pub use filter::RecordFilter;
pub use forms::{FoodDraft, FoodForm, FormError, PetDraft, PetForm, RecordDraft, RecordForm};
pub use seed::seed_store;
pub use store::EntityStore;
