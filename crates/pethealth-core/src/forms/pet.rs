use chrono::NaiveDate;

use pethealth_model::{Pet, PetId, PhotoRef};

use crate::forms::FormError;
use crate::store::EntityStore;

/// Scratch copy of a pet's fields while the modal is open.
#[derive(Debug, Clone)]
pub struct PetDraft {
    pub name: String,
    pub breed: String,
    pub dob: NaiveDate,
    pub photo: PhotoRef,
}

impl PetDraft {
    fn for_new(today: NaiveDate) -> Self {
        Self {
            name: String::new(),
            breed: String::new(),
            dob: today,
            photo: PhotoRef::Placeholder,
        }
    }

    fn for_edit(pet: &Pet) -> Self {
        Self {
            name: pet.name.clone(),
            breed: pet.breed.clone(),
            dob: pet.dob,
            photo: pet.photo.clone(),
        }
    }
}

/// Controller for the add/edit pet modal, including the delete
/// confirmation step.
#[derive(Debug)]
pub struct PetForm {
    open: bool,
    editing: Option<PetId>,
    confirm_delete: bool,
    error: Option<FormError>,
    pub draft: PetDraft,
}

impl Default for PetForm {
    fn default() -> Self {
        Self {
            open: false,
            editing: None,
            confirm_delete: false,
            error: None,
            draft: PetDraft::for_new(NaiveDate::default()),
        }
    }
}

impl PetForm {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The pet being edited, `None` while creating.
    pub fn editing(&self) -> Option<PetId> {
        self.editing
    }

    pub fn confirming_delete(&self) -> bool {
        self.confirm_delete
    }

    pub fn error(&self) -> Option<&FormError> {
        self.error.as_ref()
    }

    pub fn open_add(&mut self, today: NaiveDate) {
        self.open = true;
        self.editing = None;
        self.confirm_delete = false;
        self.error = None;
        self.draft = PetDraft::for_new(today);
    }

    pub fn open_edit(&mut self, pet: &Pet) {
        self.open = true;
        self.editing = Some(pet.id);
        self.confirm_delete = false;
        self.error = None;
        self.draft = PetDraft::for_edit(pet);
    }

    /// Close without touching the store; the draft is discarded.
    pub fn cancel(&mut self) {
        self.open = false;
        self.confirm_delete = false;
        self.error = None;
    }

    /// A finished photo read lands in the draft, never in the store. If the
    /// modal was closed meanwhile the next open replaces the draft anyway.
    pub fn set_photo(&mut self, photo: PhotoRef) {
        self.draft.photo = photo;
    }

    /// Validate the draft and merge it into the store. Creating a pet also
    /// selects it. On error the modal stays open with the draft retained.
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
        let breed = self.draft.breed.trim();
        if breed.is_empty() {
            return Err(FormError::MissingField("breed"));
        }

        match self.editing {
            Some(id) => {
                store.update_pet(Pet {
                    id,
                    name: name.to_string(),
                    breed: breed.to_string(),
                    dob: self.draft.dob,
                    photo: self.draft.photo.clone(),
                });
            }
            None => {
                let id = store.next_pet_id();
                store.add_pet(Pet {
                    id,
                    name: name.to_string(),
                    breed: breed.to_string(),
                    dob: self.draft.dob,
                    photo: self.draft.photo.clone(),
                });
                store.select_pet(id);
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

    /// Remove the pet and its whole medical history, then close. The store
    /// moves the selection off the deleted pet.
    pub fn delete(&mut self, store: &mut EntityStore) {
        let Some(id) = self.editing else {
            return;
        };
        let removed = store.delete_records_for_pet(id);
        store.delete_pet(id);
        tracing::info!(pet = %id, records_removed = removed, "deleted pet with history");
        self.confirm_delete = false;
        self.open = false;
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pethealth_model::{MedicalRecord, RecordDetails, RecordId, VetClinic};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn test_store() -> EntityStore {
        EntityStore::new(VetClinic {
            name: "Test Clinic".to_string(),
            hours: "9-5".to_string(),
            phone: "555".to_string(),
        })
    }

    fn add_pet(store: &mut EntityStore, id: i64, name: &str) -> PetId {
        let pet_id = PetId::new(id);
        store.add_pet(Pet {
            id: pet_id,
            name: name.to_string(),
            breed: "Mixed".to_string(),
            dob: date(2020, 6, 15),
            photo: PhotoRef::Placeholder,
        });
        pet_id
    }

    #[test]
    fn creating_a_pet_appends_and_selects_it() {
        let mut store = test_store();
        let first = add_pet(&mut store, 1, "Buddy");
        store.select_pet(first);

        let mut form = PetForm::default();
        form.open_add(date(2024, 6, 15));
        form.draft.name = "Lucy".to_string();
        form.draft.breed = "Siamese".to_string();

        form.save(&mut store).unwrap();
        assert!(!form.is_open());
        assert_eq!(store.pets().len(), 2);

        let new_id = store.pets()[1].id;
        assert_eq!(store.selected_pet_id(), Some(new_id));
        assert_ne!(new_id, first);
    }

    #[test]
    fn editing_merges_by_id_without_appending() {
        let mut store = test_store();
        let id = add_pet(&mut store, 1, "Buddy");

        let mut form = PetForm::default();
        let pet = store.pet(id).unwrap().clone();
        form.open_edit(&pet);
        form.draft.name = "Buddy Jr.".to_string();

        form.save(&mut store).unwrap();
        assert_eq!(store.pets().len(), 1);
        assert_eq!(store.pet(id).unwrap().name, "Buddy Jr.");
    }

    #[test]
    fn a_blank_name_keeps_the_modal_open_and_the_store_untouched() {
        let mut store = test_store();
        let version = store.version();

        let mut form = PetForm::default();
        form.open_add(date(2024, 6, 15));
        form.draft.breed = "Siamese".to_string();

        assert_eq!(
            form.save(&mut store),
            Err(FormError::MissingField("name"))
        );
        assert!(form.is_open());
        assert_eq!(form.draft.breed, "Siamese");
        assert_eq!(store.version(), version);
    }

    #[test]
    fn whitespace_only_fields_count_as_missing() {
        let mut store = test_store();
        let mut form = PetForm::default();
        form.open_add(date(2024, 6, 15));
        form.draft.name = "  ".to_string();
        form.draft.breed = "Siamese".to_string();

        assert_eq!(
            form.save(&mut store),
            Err(FormError::MissingField("name"))
        );
    }

    #[test]
    fn delete_cascades_records_and_moves_the_selection() {
        let mut store = test_store();
        let buddy = add_pet(&mut store, 1, "Buddy");
        let lucy = add_pet(&mut store, 2, "Lucy");
        store.add_record(MedicalRecord {
            id: RecordId::new(10),
            pet_id: lucy,
            date: date(2024, 1, 10),
            doctor: "Dr. Lee".to_string(),
            notes: "note".to_string(),
            details: RecordDetails::RoutineCheckup,
        });
        store.select_pet(lucy);

        let mut form = PetForm::default();
        let pet = store.pet(lucy).unwrap().clone();
        form.open_edit(&pet);
        form.request_delete();
        assert!(form.confirming_delete());

        form.delete(&mut store);
        assert!(!form.is_open());
        assert!(store.pet(lucy).is_none());
        assert!(store.records().is_empty());
        assert_eq!(store.selected_pet_id(), Some(buddy));
    }

    #[test]
    fn delete_requires_a_prior_confirmation_request_only_in_edit_mode() {
        let mut form = PetForm::default();
        form.open_add(date(2024, 6, 15));
        form.request_delete();
        assert!(!form.confirming_delete());
    }

    #[test]
    fn cancel_delete_backs_out_without_closing_the_modal() {
        let mut store = test_store();
        let id = add_pet(&mut store, 1, "Buddy");

        let mut form = PetForm::default();
        let pet = store.pet(id).unwrap().clone();
        form.open_edit(&pet);
        form.request_delete();
        form.cancel_delete();

        assert!(!form.confirming_delete());
        assert!(form.is_open());
        assert_eq!(store.pets().len(), 1);
    }

    #[test]
    fn a_late_photo_lands_in_the_draft_not_the_store() {
        let mut store = test_store();
        let id = add_pet(&mut store, 1, "Buddy");

        let mut form = PetForm::default();
        let pet = store.pet(id).unwrap().clone();
        form.open_edit(&pet);
        form.cancel();

        form.set_photo(PhotoRef::from_bytes(vec![1u8, 2, 3]));
        assert!(store.pet(id).unwrap().photo.is_placeholder());
    }
}
