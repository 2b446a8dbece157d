//! In-memory entity store.
//!
//! `EntityStore` owns every entity collection plus the active pet
//! selection. Each mutation bumps a version counter; derived views key
//! their caches on it (see `crate::derived`).

use pethealth_model::{Food, FoodId, IdGenerator, MedicalRecord, Pet, PetId, RecordId, VetClinic};

/// Owner of all entity collections and the selection pointer.
///
/// Collections are plain `Vec`s mutated in place. `version` increments on
/// every mutation, including selection changes, so caches can tell whether
/// they are current without diffing the data.
#[derive(Debug)]
pub struct EntityStore {
    pets: Vec<Pet>,
    records: Vec<MedicalRecord>,
    foods: Vec<Food>,
    clinic: VetClinic,
    selected_pet: Option<PetId>,
    ids: IdGenerator,
    version: u64,
}

impl EntityStore {
    pub fn new(clinic: VetClinic) -> Self {
        Self {
            pets: Vec::new(),
            records: Vec::new(),
            foods: Vec::new(),
            clinic,
            selected_pet: None,
            ids: IdGenerator::new(),
            version: 0,
        }
    }

    // ========================================================================
    // Read access
    // ========================================================================

    pub fn pets(&self) -> &[Pet] {
        &self.pets
    }

    pub fn records(&self) -> &[MedicalRecord] {
        &self.records
    }

    pub fn foods(&self) -> &[Food] {
        &self.foods
    }

    pub fn clinic(&self) -> &VetClinic {
        &self.clinic
    }

    pub fn pet(&self, id: PetId) -> Option<&Pet> {
        self.pets.iter().find(|p| p.id == id)
    }

    pub fn record(&self, id: RecordId) -> Option<&MedicalRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    pub fn food(&self, id: FoodId) -> Option<&Food> {
        self.foods.iter().find(|f| f.id == id)
    }

    pub fn selected_pet_id(&self) -> Option<PetId> {
        self.selected_pet
    }

    /// Current store version; bumped by every mutation.
    pub fn version(&self) -> u64 {
        self.version
    }

    // ========================================================================
    // Id issue
    // ========================================================================

    pub fn next_pet_id(&mut self) -> PetId {
        self.ids.next_pet_id()
    }

    pub fn next_record_id(&mut self) -> RecordId {
        self.ids.next_record_id()
    }

    pub fn next_food_id(&mut self) -> FoodId {
        self.ids.next_food_id()
    }

    // ========================================================================
    // Selection
    // ========================================================================

    /// Point the selection at `id`. Ignored with a warning if no such pet
    /// exists; the selection must always reference a live pet (or nothing).
    pub fn select_pet(&mut self, id: PetId) {
        if self.pet(id).is_none() {
            tracing::warn!(pet = %id, "ignoring selection of unknown pet");
            return;
        }
        self.selected_pet = Some(id);
        self.bump();
    }

    // ========================================================================
    // Pet mutations
    // ========================================================================

    pub fn add_pet(&mut self, pet: Pet) {
        self.ids.observe(pet.id.raw());
        tracing::debug!(pet = %pet.id, name = %pet.name, "adding pet");
        self.pets.push(pet);
        self.bump();
    }

    /// Replace the stored pet with the same id. Unknown ids are ignored
    /// with a warning.
    pub fn update_pet(&mut self, pet: Pet) {
        match self.pets.iter_mut().find(|p| p.id == pet.id) {
            Some(slot) => {
                tracing::debug!(pet = %pet.id, "updating pet");
                *slot = pet;
                self.bump();
            }
            None => tracing::warn!(pet = %pet.id, "ignoring update of unknown pet"),
        }
    }

    /// Remove the pet. Does NOT remove its medical records; callers pair
    /// this with [`delete_records_for_pet`](Self::delete_records_for_pet).
    /// If the selection pointed at the removed pet it moves to the first
    /// remaining pet, or clears when none are left.
    pub fn delete_pet(&mut self, id: PetId) {
        let before = self.pets.len();
        self.pets.retain(|p| p.id != id);
        if self.pets.len() == before {
            tracing::warn!(pet = %id, "ignoring delete of unknown pet");
            return;
        }
        if self.selected_pet == Some(id) {
            self.selected_pet = self.pets.first().map(|p| p.id);
        }
        tracing::debug!(pet = %id, "deleted pet");
        self.bump();
    }

    // ========================================================================
    // Record mutations
    // ========================================================================

    pub fn add_record(&mut self, record: MedicalRecord) {
        self.ids.observe(record.id.raw());
        tracing::debug!(record = %record.id, pet = %record.pet_id, kind = %record.kind(), "adding record");
        self.records.push(record);
        self.bump();
    }

    /// Replace the stored record with the same id. Unknown ids are ignored
    /// with a warning.
    pub fn update_record(&mut self, record: MedicalRecord) {
        match self.records.iter_mut().find(|r| r.id == record.id) {
            Some(slot) => {
                tracing::debug!(record = %record.id, "updating record");
                *slot = record;
                self.bump();
            }
            None => tracing::warn!(record = %record.id, "ignoring update of unknown record"),
        }
    }

    /// Remove every medical record belonging to `pet_id`, returning how
    /// many were removed. The cascade half of a pet deletion.
    pub fn delete_records_for_pet(&mut self, pet_id: PetId) -> usize {
        let before = self.records.len();
        self.records.retain(|r| r.pet_id != pet_id);
        let removed = before - self.records.len();
        if removed > 0 {
            tracing::debug!(pet = %pet_id, removed, "deleted records for pet");
            self.bump();
        }
        removed
    }

    // ========================================================================
    // Food mutations
    // ========================================================================

    pub fn add_food(&mut self, food: Food) {
        self.ids.observe(food.id.raw());
        tracing::debug!(food = %food.id, pet = %food.pet_id, "adding food");
        self.foods.push(food);
        self.bump();
    }

    /// Replace the stored food entry with the same id. Unknown ids are
    /// ignored with a warning.
    pub fn update_food(&mut self, food: Food) {
        match self.foods.iter_mut().find(|f| f.id == food.id) {
            Some(slot) => {
                tracing::debug!(food = %food.id, "updating food");
                *slot = food;
                self.bump();
            }
            None => tracing::warn!(food = %food.id, "ignoring update of unknown food"),
        }
    }

    pub fn delete_food(&mut self, id: FoodId) {
        let before = self.foods.len();
        self.foods.retain(|f| f.id != id);
        if self.foods.len() == before {
            tracing::warn!(food = %id, "ignoring delete of unknown food");
            return;
        }
        tracing::debug!(food = %id, "deleted food");
        self.bump();
    }

    fn bump(&mut self) {
        self.version += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pethealth_model::{PhotoRef, RecordDetails};

    fn test_clinic() -> VetClinic {
        VetClinic {
            name: "Test Clinic".to_string(),
            hours: "9-5".to_string(),
            phone: "555".to_string(),
        }
    }

    fn make_pet(id: i64, name: &str) -> Pet {
        Pet {
            id: PetId::new(id),
            name: name.to_string(),
            breed: "Mixed".to_string(),
            dob: NaiveDate::from_ymd_opt(2020, 6, 15).unwrap(),
            photo: PhotoRef::Placeholder,
        }
    }

    fn make_record(id: i64, pet_id: PetId) -> MedicalRecord {
        MedicalRecord {
            id: RecordId::new(id),
            pet_id,
            date: NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
            doctor: "Dr. Lee".to_string(),
            notes: "Routine visit".to_string(),
            details: RecordDetails::RoutineCheckup,
        }
    }

    #[test]
    fn every_mutation_bumps_the_version() {
        let mut store = EntityStore::new(test_clinic());
        let v0 = store.version();

        store.add_pet(make_pet(1, "Buddy"));
        let v1 = store.version();
        assert!(v1 > v0);

        store.select_pet(PetId::new(1));
        let v2 = store.version();
        assert!(v2 > v1);

        store.add_record(make_record(10, PetId::new(1)));
        assert!(store.version() > v2);
    }

    #[test]
    fn selecting_an_unknown_pet_is_ignored() {
        let mut store = EntityStore::new(test_clinic());
        store.add_pet(make_pet(1, "Buddy"));
        store.select_pet(PetId::new(1));
        let version = store.version();

        store.select_pet(PetId::new(99));
        assert_eq!(store.selected_pet_id(), Some(PetId::new(1)));
        assert_eq!(store.version(), version);
    }

    #[test]
    fn update_replaces_by_id() {
        let mut store = EntityStore::new(test_clinic());
        store.add_pet(make_pet(1, "Buddy"));

        let mut renamed = make_pet(1, "Buddy Jr.");
        renamed.breed = "Golden Retriever".to_string();
        store.update_pet(renamed);

        assert_eq!(store.pets().len(), 1);
        assert_eq!(store.pet(PetId::new(1)).unwrap().name, "Buddy Jr.");
    }

    #[test]
    fn update_of_unknown_pet_is_ignored() {
        let mut store = EntityStore::new(test_clinic());
        store.add_pet(make_pet(1, "Buddy"));
        let version = store.version();

        store.update_pet(make_pet(2, "Ghost"));
        assert_eq!(store.pets().len(), 1);
        assert_eq!(store.version(), version);
    }

    #[test]
    fn deleting_the_selected_pet_moves_selection_to_first_remaining() {
        let mut store = EntityStore::new(test_clinic());
        store.add_pet(make_pet(1, "Buddy"));
        store.add_pet(make_pet(2, "Lucy"));
        store.select_pet(PetId::new(2));

        store.delete_pet(PetId::new(2));
        assert_eq!(store.selected_pet_id(), Some(PetId::new(1)));

        store.delete_pet(PetId::new(1));
        assert_eq!(store.selected_pet_id(), None);
        assert!(store.pets().is_empty());
    }

    #[test]
    fn deleting_an_unselected_pet_keeps_the_selection() {
        let mut store = EntityStore::new(test_clinic());
        store.add_pet(make_pet(1, "Buddy"));
        store.add_pet(make_pet(2, "Lucy"));
        store.select_pet(PetId::new(1));

        store.delete_pet(PetId::new(2));
        assert_eq!(store.selected_pet_id(), Some(PetId::new(1)));
    }

    #[test]
    fn delete_records_for_pet_removes_only_that_pets_records() {
        let mut store = EntityStore::new(test_clinic());
        store.add_pet(make_pet(1, "Buddy"));
        store.add_pet(make_pet(2, "Lucy"));
        store.add_record(make_record(10, PetId::new(1)));
        store.add_record(make_record(11, PetId::new(1)));
        store.add_record(make_record(12, PetId::new(2)));

        let removed = store.delete_records_for_pet(PetId::new(1));
        assert_eq!(removed, 2);
        assert_eq!(store.records().len(), 1);
        assert_eq!(store.records()[0].pet_id, PetId::new(2));
    }

    #[test]
    fn generated_ids_never_collide_with_seeded_ids() {
        let mut store = EntityStore::new(test_clinic());
        store.add_pet(make_pet(1, "Buddy"));
        store.add_record(make_record(2, PetId::new(1)));

        let fresh = store.next_record_id();
        assert!(fresh.raw() > 2);
        assert!(store.record(fresh).is_none());
    }
}
