use pethealth_model::{Food, FoodId, PhotoRef};

use crate::forms::FormError;
use crate::store::EntityStore;

/// Scratch copy of a food entry's fields while the modal is open.
#[derive(Debug, Clone)]
pub struct FoodDraft {
    pub name: String,
    pub weight_kg: f64,
    pub photo: PhotoRef,
}

impl FoodDraft {
    fn for_new() -> Self {
        Self {
            name: String::new(),
            weight_kg: 1.0,
            photo: PhotoRef::Placeholder,
        }
    }

    fn for_edit(food: &Food) -> Self {
        Self {
            name: food.name.clone(),
            weight_kg: food.weight_kg,
            photo: food.photo.clone(),
        }
    }
}

/// Controller for the add/edit food modal, including the delete
/// confirmation step.
#[derive(Debug)]
pub struct FoodForm {
    open: bool,
    editing: Option<FoodId>,
    confirm_delete: bool,
    error: Option<FormError>,
    pub draft: FoodDraft,
}

impl Default for FoodForm {
    fn default() -> Self {
        Self {
            open: false,
            editing: None,
            confirm_delete: false,
            error: None,
            draft: FoodDraft::for_new(),
        }
    }
}

impl FoodForm {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The food entry being edited, `None` while creating.
    pub fn editing(&self) -> Option<FoodId> {
        self.editing
    }

    pub fn confirming_delete(&self) -> bool {
        self.confirm_delete
    }

    pub fn error(&self) -> Option<&FormError> {
        self.error.as_ref()
    }

    pub fn open_add(&mut self) {
        self.open = true;
        self.editing = None;
        self.confirm_delete = false;
        self.error = None;
        self.draft = FoodDraft::for_new();
    }

    pub fn open_edit(&mut self, food: &Food) {
        self.open = true;
        self.editing = Some(food.id);
        self.confirm_delete = false;
        self.error = None;
        self.draft = FoodDraft::for_edit(food);
    }

    /// Close without touching the store; the draft is discarded.
    pub fn cancel(&mut self) {
        self.open = false;
        self.confirm_delete = false;
        self.error = None;
    }

    /// A finished photo read lands in the draft, never in the store.
    pub fn set_photo(&mut self, photo: PhotoRef) {
        self.draft.photo = photo;
    }

    /// Validate the draft and merge it into the store. New entries attach
    /// to the selected pet; edits keep the entry's pet.
    pub fn save(&mut self, store: &mut EntityStore) -> Result<(), FormError> {
        match self.try_save(store) {
            Ok(()) => {
                self.open = false;
                self.error = None;
                Ok(())
            }
            Err(e) => {
                self.error = Some(e.clone());
                Err(e)
            }
        }
    }

    fn try_save(&mut self, store: &mut EntityStore) -> Result<(), FormError> {
        let name = self.draft.name.trim();
        if name.is_empty() {
            return Err(FormError::MissingField("name"));
        }
        if self.draft.weight_kg <= 0.0 {
            return Err(FormError::NonPositiveWeight);
        }

        match self.editing {
            Some(id) => {
                let Some(pet_id) = store.food(id).map(|f| f.pet_id) else {
                    tracing::warn!(food = %id, "edited food entry no longer exists");
                    return Ok(());
                };
                store.update_food(Food {
                    id,
                    pet_id,
                    name: name.to_string(),
                    weight_kg: self.draft.weight_kg,
                    photo: self.draft.photo.clone(),
                });
            }
            None => {
                let pet_id = store.selected_pet_id().ok_or(FormError::NoPetSelected)?;
                let id = store.next_food_id();
                store.add_food(Food {
                    id,
                    pet_id,
                    name: name.to_string(),
                    weight_kg: self.draft.weight_kg,
                    photo: self.draft.photo.clone(),
                });
            }
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Deletion (edit mode only)
    // ------------------------------------------------------------------

    pub fn request_delete(&mut self) {
        if self.editing.is_some() {
            self.confirm_delete = true;
        }
    }

    pub fn cancel_delete(&mut self) {
        self.confirm_delete = false;
    }

    /// Remove the food entry and close. Cascades nothing.
    pub fn delete(&mut self, store: &mut EntityStore) {
        let Some(id) = self.editing else {
            return;
        };
        store.delete_food(id);
        self.confirm_delete = false;
        self.open = false;
        self.error = None;
    }
}
