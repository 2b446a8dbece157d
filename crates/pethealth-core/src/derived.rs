//! Pure derivations over the store and filter.
//!
//! Every function takes `today` explicitly: the GUI passes the local
//! calendar date once per frame and tests pass fixed dates. `DerivedCache`
//! memoizes one `DerivedViews` snapshot keyed on the store version, the
//! filter revision and `today`, so a frame that changed nothing renders
//! from the previous snapshot.

use chrono::{Datelike, NaiveDate};
use pethealth_model::{Food, MedicalRecord, Pet, PetId, RecordKind};

use crate::filter::RecordFilter;
use crate::store::EntityStore;

/// The pet the selection pointer refers to.
pub fn selected_pet(store: &EntityStore) -> Option<&Pet> {
    store.selected_pet_id().and_then(|id| store.pet(id))
}

/// Whole years between `dob` and `today`, calendar-aware.
///
/// The year difference drops by one while today's month/day still precedes
/// the birthday. Never negative: a date of birth in the future reads as 0.
pub fn pet_age_years(dob: NaiveDate, today: NaiveDate) -> u32 {
    let mut age = today.year() - dob.year();
    if (today.month(), today.day()) < (dob.month(), dob.day()) {
        age -= 1;
    }
    age.max(0) as u32
}

/// All records of one pet, newest first.
///
/// `sort_by` is stable, so records sharing a date keep insertion order.
pub fn sorted_records_for_pet(store: &EntityStore, pet_id: PetId) -> Vec<MedicalRecord> {
    let mut records: Vec<MedicalRecord> = store
        .records()
        .iter()
        .filter(|r| r.pet_id == pet_id)
        .cloned()
        .collect();
    records.sort_by(|a, b| b.date.cmp(&a.date));
    records
}

/// Upcoming checkups: scheduled visits from today onwards.
///
/// Day granularity only; an appointment later today stays listed no matter
/// its time-of-day field.
pub fn upcoming_checkups(records: &[MedicalRecord], today: NaiveDate) -> Vec<MedicalRecord> {
    records
        .iter()
        .filter(|r| r.kind() == RecordKind::UpcomingCheckup && r.date >= today)
        .cloned()
        .collect()
}

/// Every vaccination record, regardless of date.
pub fn vaccination_schedule(records: &[MedicalRecord]) -> Vec<MedicalRecord> {
    records
        .iter()
        .filter(|r| r.kind() == RecordKind::Vaccination)
        .cloned()
        .collect()
}

/// The medical-history list: everything except upcoming checkups, narrowed
/// by the active filters. Filters combine conjunctively and both date
/// bounds are inclusive.
pub fn past_records(records: &[MedicalRecord], filter: &RecordFilter) -> Vec<MedicalRecord> {
    records
        .iter()
        .filter(|r| r.kind() != RecordKind::UpcomingCheckup)
        .filter(|r| filter.kind().is_none_or(|kind| r.kind() == kind))
        .filter(|r| filter.date_from().is_none_or(|from| r.date >= from))
        .filter(|r| filter.date_to().is_none_or(|to| r.date <= to))
        .cloned()
        .collect()
}

/// Food entries belonging to one pet.
pub fn food_for_pet(store: &EntityStore, pet_id: PetId) -> Vec<Food> {
    store
        .foods()
        .iter()
        .filter(|f| f.pet_id == pet_id)
        .cloned()
        .collect()
}

// ============================================================================
// Snapshot + cache
// ============================================================================

/// Snapshot of everything the dashboard renders for the current selection.
///
/// With no pet selected every list is empty and the age reads 0.
#[derive(Debug, Clone, Default)]
pub struct DerivedViews {
    pub pet: Option<Pet>,
    pub age_years: u32,
    /// All of the selected pet's records, newest first.
    pub records: Vec<MedicalRecord>,
    pub upcoming: Vec<MedicalRecord>,
    pub vaccinations: Vec<MedicalRecord>,
    /// History list after the active filters.
    pub past: Vec<MedicalRecord>,
    pub food: Vec<Food>,
}

impl DerivedViews {
    pub fn compute(store: &EntityStore, filter: &RecordFilter, today: NaiveDate) -> Self {
        let Some(pet) = selected_pet(store).cloned() else {
            return Self::default();
        };
        let records = sorted_records_for_pet(store, pet.id);
        let upcoming = upcoming_checkups(&records, today);
        let vaccinations = vaccination_schedule(&records);
        let past = past_records(&records, filter);
        let food = food_for_pet(store, pet.id);
        let age_years = pet_age_years(pet.dob, today);
        Self {
            pet: Some(pet),
            age_years,
            records,
            upcoming,
            vaccinations,
            past,
            food,
        }
    }
}

/// Inputs a snapshot was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CacheKey {
    store_version: u64,
    filter_revision: u64,
    today: NaiveDate,
}

/// Memoizes the last computed snapshot.
///
/// The stored key is compared against the current inputs and the snapshot
/// is rebuilt when any differ. `today` is part of the key, so a session
/// left open across midnight refreshes as well.
#[derive(Debug, Default)]
pub struct DerivedCache {
    key: Option<CacheKey>,
    views: DerivedViews,
}

impl DerivedCache {
    /// The snapshot for the current inputs, recomputing it if stale.
    pub fn views(
        &mut self,
        store: &EntityStore,
        filter: &RecordFilter,
        today: NaiveDate,
    ) -> &DerivedViews {
        let key = CacheKey {
            store_version: store.version(),
            filter_revision: filter.revision(),
            today,
        };
        if self.key != Some(key) {
            tracing::debug!(
                version = key.store_version,
                revision = key.filter_revision,
                "recomputing derived views"
            );
            self.views = DerivedViews::compute(store, filter, today);
            self.key = Some(key);
        }
        &self.views
    }
}
