//! End-to-end flows over the seeded store: forms mutate, the cache
//! observes, the derived views are what a dashboard frame would render.

use chrono::{Days, NaiveDate};
use pethealth_core::derived::DerivedCache;
use pethealth_core::filter::RecordFilter;
use pethealth_core::forms::{FoodForm, PetForm, RecordForm};
use pethealth_core::seed::seed_store;
use pethealth_model::{PetId, RecordKind};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

#[test]
fn adding_a_record_puts_it_at_the_top_of_history() {
    let mut store = seed_store(today());
    let filter = RecordFilter::default();
    let mut cache = DerivedCache::default();
    let before = cache.views(&store, &filter, today()).past.len();

    let mut form = RecordForm::default();
    form.open_add(today());
    form.draft.kind = RecordKind::RoutineCheckup;
    form.draft.doctor = "Dr. Patel".to_string();
    form.draft.notes = "Weight slightly up, diet adjusted".to_string();
    form.save(&mut store).expect("valid record saves");

    let views = cache.views(&store, &filter, today());
    assert_eq!(views.past.len(), before + 1);
    // Dated today, so it sorts above the seeded history.
    assert_eq!(views.past[0].notes, "Weight slightly up, diet adjusted");
    assert_eq!(views.past[0].pet_id, PetId::new(1));
}

#[test]
fn deleting_the_selected_pet_rebuilds_the_dashboard_for_the_next_one() {
    let mut store = seed_store(today());
    let filter = RecordFilter::default();
    let mut cache = DerivedCache::default();

    let records_before = store.records().len();
    let buddy_records = cache.views(&store, &filter, today()).records.len();
    assert!(buddy_records > 0);

    let buddy = store.pet(PetId::new(1)).expect("seeded").clone();
    let mut form = PetForm::default();
    form.open_edit(&buddy);
    form.request_delete();
    form.delete(&mut store);

    // Lucy takes over the dashboard; Buddy's history is fully gone.
    let views = cache.views(&store, &filter, today());
    assert_eq!(views.pet.as_ref().map(|p| p.id), Some(PetId::new(2)));
    assert_eq!(store.records().len(), records_before - buddy_records);
    assert!(views.records.iter().all(|r| r.pet_id == PetId::new(2)));
}

#[test]
fn deleting_the_last_pet_empties_the_dashboard() {
    let mut store = seed_store(today());
    let filter = RecordFilter::default();
    let mut cache = DerivedCache::default();

    for id in [1, 2] {
        let pet = store.pet(PetId::new(id)).expect("seeded").clone();
        let mut form = PetForm::default();
        form.open_edit(&pet);
        form.request_delete();
        form.delete(&mut store);
    }

    let views = cache.views(&store, &filter, today());
    assert_eq!(store.selected_pet_id(), None);
    assert!(views.pet.is_none());
    assert_eq!(views.age_years, 0);
    assert!(views.records.is_empty());
    assert!(store.records().is_empty());
}

#[test]
fn the_filter_journey_narrows_and_clears() {
    let mut store = seed_store(today());
    let mut filter = RecordFilter::default();
    let mut cache = DerivedCache::default();

    let all = cache.views(&store, &filter, today()).past.len();
    let upcoming = cache.views(&store, &filter, today()).upcoming.len();

    filter.toggle_kind(RecordKind::Vaccination);
    let vaccinations_only = cache.views(&store, &filter, today()).past.len();
    assert!(vaccinations_only < all);
    assert!(
        cache
            .views(&store, &filter, today())
            .past
            .iter()
            .all(|r| r.kind() == RecordKind::Vaccination)
    );

    // Narrow further to the last half year.
    filter.set_date_from(Some(today() - Days::new(183)));
    let recent_vaccinations = cache.views(&store, &filter, today()).past.len();
    assert!(recent_vaccinations <= vaccinations_only);

    // Upcoming visits ignore the history filters entirely.
    assert_eq!(cache.views(&store, &filter, today()).upcoming.len(), upcoming);

    filter.clear();
    assert_eq!(cache.views(&store, &filter, today()).past.len(), all);

    // Toggle twice lands back on the unfiltered list too.
    filter.toggle_kind(RecordKind::Medication);
    filter.toggle_kind(RecordKind::Medication);
    assert_eq!(cache.views(&store, &filter, today()).past.len(), all);
}

#[test]
fn a_new_pet_starts_selected_with_a_blank_dashboard() {
    let mut store = seed_store(today());
    let filter = RecordFilter::default();
    let mut cache = DerivedCache::default();

    let mut form = PetForm::default();
    form.open_add(today());
    form.draft.name = "Rex".to_string();
    form.draft.breed = "Beagle".to_string();
    form.draft.dob = today() - Days::new(100);
    form.save(&mut store).expect("valid pet saves");

    let views = cache.views(&store, &filter, today());
    assert_eq!(views.pet.as_ref().map(|p| p.name.as_str()), Some("Rex"));
    assert_eq!(views.age_years, 0);
    assert!(views.records.is_empty());
    assert!(views.food.is_empty());
}

#[test]
fn rescheduling_a_checkup_as_a_vaccination_swaps_its_payload() {
    let mut store = seed_store(today());
    let upcoming = store
        .records()
        .iter()
        .find(|r| r.kind() == RecordKind::UpcomingCheckup)
        .expect("seeded")
        .clone();

    let mut form = RecordForm::default();
    form.open_edit(&upcoming, today());
    form.draft.kind = RecordKind::Vaccination;
    form.draft.next_due = today() + Days::new(365);
    form.save(&mut store).expect("valid record saves");

    let updated = store.record(upcoming.id).expect("still present");
    assert_eq!(updated.kind(), RecordKind::Vaccination);
    assert_eq!(updated.pet_id, upcoming.pet_id);
}

#[test]
fn food_entries_come_and_go_with_the_forms() {
    let mut store = seed_store(today());
    let filter = RecordFilter::default();
    let mut cache = DerivedCache::default();
    assert_eq!(cache.views(&store, &filter, today()).food.len(), 1);

    let mut form = FoodForm::default();
    form.open_add();
    form.draft.name = "Senior Formula".to_string();
    form.draft.weight_kg = 10.0;
    form.save(&mut store).expect("valid food saves");
    assert_eq!(cache.views(&store, &filter, today()).food.len(), 2);

    let senior = store
        .foods()
        .iter()
        .find(|f| f.name == "Senior Formula")
        .expect("just added")
        .clone();
    let mut form = FoodForm::default();
    form.open_edit(&senior);
    form.request_delete();
    form.delete(&mut store);
    assert_eq!(cache.views(&store, &filter, today()).food.len(), 1);
}
