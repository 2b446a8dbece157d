//! Application-level state.
//!
//! `AppState` is the root of all state: the seeded entity store, the
//! filter, the derived-view cache, the three modal form controllers and
//! the persisted settings. Entity data lives in memory only and reseeds
//! on every launch; settings are the one persisted surface.

use chrono::NaiveDate;
use pethealth_core::{
    DerivedCache, DerivedViews, EntityStore, FoodForm, PetForm, RecordFilter, RecordForm,
    seed_store,
};

use crate::settings::Settings;

/// Top-level application state.
pub struct AppState {
    /// All entity collections plus the selection pointer.
    pub store: EntityStore,
    /// Active medical-history filters.
    pub filter: RecordFilter,
    /// Memoized derived views, keyed on store version + filter revision.
    pub derived: DerivedCache,
    pub pet_form: PetForm,
    pub record_form: RecordForm,
    pub food_form: FoodForm,
    /// Application settings (persisted).
    pub settings: Settings,
    /// Last photo-load failure for the pet modal, shown inline.
    pub pet_photo_error: Option<String>,
    /// Last photo-load failure for the food modal, shown inline.
    pub food_photo_error: Option<String>,
}

impl AppState {
    /// Create app state with loaded settings and a freshly seeded store.
    pub fn new(settings: Settings, today: NaiveDate) -> Self {
        Self {
            store: seed_store(today),
            filter: RecordFilter::default(),
            derived: DerivedCache::default(),
            pet_form: PetForm::default(),
            record_form: RecordForm::default(),
            food_form: FoodForm::default(),
            settings,
            pet_photo_error: None,
            food_photo_error: None,
        }
    }

    /// Snapshot of the derived views for this frame.
    ///
    /// Cloned out of the cache so the caller can keep mutating state while
    /// rendering from the snapshot; the dataset is a handful of records.
    pub fn views(&mut self, today: NaiveDate) -> DerivedViews {
        self.derived
            .views(&self.store, &self.filter, today)
            .clone()
    }

    /// Whether any modal is open (drives input routing).
    pub fn any_modal_open(&self) -> bool {
        self.pet_form.is_open() || self.record_form.is_open() || self.food_form.is_open()
    }

    /// Escape-key behaviour: back out of a pending delete confirmation
    /// first, otherwise close the open modal. Returns true if anything
    /// was dismissed.
    pub fn dismiss_topmost(&mut self) -> bool {
        if self.pet_form.confirming_delete() {
            self.pet_form.cancel_delete();
            return true;
        }
        if self.food_form.confirming_delete() {
            self.food_form.cancel_delete();
            return true;
        }
        if self.pet_form.is_open() {
            self.pet_form.cancel();
            self.pet_photo_error = None;
            return true;
        }
        if self.record_form.is_open() {
            self.record_form.cancel();
            return true;
        }
        if self.food_form.is_open() {
            self.food_form.cancel();
            self.food_photo_error = None;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pethealth_model::RecordKind;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn starts_seeded_with_a_selected_pet() {
        let mut state = AppState::new(Settings::default(), date(2024, 6, 15));
        assert!(state.store.selected_pet_id().is_some());

        let views = state.views(date(2024, 6, 15));
        assert!(views.pet.is_some());
        assert!(!views.records.is_empty());
    }

    #[test]
    fn escape_backs_out_of_the_confirmation_before_the_modal() {
        let today = date(2024, 6, 15);
        let mut state = AppState::new(Settings::default(), today);

        let pet = state.views(today).pet.unwrap();
        state.pet_form.open_edit(&pet);
        state.pet_form.request_delete();

        assert!(state.dismiss_topmost());
        assert!(state.pet_form.is_open());
        assert!(!state.pet_form.confirming_delete());

        assert!(state.dismiss_topmost());
        assert!(!state.pet_form.is_open());
        assert!(!state.dismiss_topmost());
    }

    #[test]
    fn frame_snapshot_tracks_filter_changes() {
        let today = date(2024, 6, 15);
        let mut state = AppState::new(Settings::default(), today);

        let all = state.views(today).past.len();
        state.filter.toggle_kind(RecordKind::Vaccination);
        let filtered = state.views(today).past;
        assert!(filtered.len() < all);
        assert!(
            filtered
                .iter()
                .all(|r| r.kind() == RecordKind::Vaccination)
        );
    }
}
