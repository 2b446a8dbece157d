//! Demo data the app starts with.
//!
//! Entity state lives in memory only, so every launch reseeds. Future
//! entries (upcoming visits, next vaccine doses) are expressed relative to
//! `today`, keeping the upcoming section populated no matter when the app
//! runs.

use chrono::{Days, Months, NaiveDate, NaiveTime};
use pethealth_model::{
    Food, FoodId, MedicalRecord, Pet, PetId, PhotoRef, RecordDetails, RecordId, VetClinic,
};

use crate::store::EntityStore;

fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}

/// Build the seeded store: two pets, their medical history, a food entry
/// each and the clinic card. The first pet starts selected.
pub fn seed_store(today: NaiveDate) -> EntityStore {
    let mut store = EntityStore::new(VetClinic {
        name: "San Martin Veterinary Clinic".to_string(),
        hours: "Mon-Fri 9:00-20:00, Sat 10:00-14:00".to_string(),
        phone: "+1 555 467 8900".to_string(),
    });

    let buddy = PetId::new(1);
    let lucy = PetId::new(2);

    store.add_pet(Pet {
        id: buddy,
        name: "Buddy".to_string(),
        breed: "Golden Retriever".to_string(),
        dob: today - Months::new(50),
        photo: PhotoRef::Placeholder,
    });
    store.add_pet(Pet {
        id: lucy,
        name: "Lucy".to_string(),
        breed: "Siamese".to_string(),
        dob: today - Months::new(30),
        photo: PhotoRef::Placeholder,
    });

    let record = |id: i64,
                  pet_id: PetId,
                  date: NaiveDate,
                  doctor: &str,
                  notes: &str,
                  details: RecordDetails| MedicalRecord {
        id: RecordId::new(id),
        pet_id,
        date,
        doctor: doctor.to_string(),
        notes: notes.to_string(),
        details,
    };

    // Buddy's history.
    let shot = today - Days::new(160);
    store.add_record(record(
        1,
        buddy,
        shot,
        "Dr. Garcia",
        "Annual rabies vaccine",
        RecordDetails::Vaccination {
            next_due: shot + Days::new(365),
        },
    ));
    store.add_record(record(
        2,
        buddy,
        today - Days::new(200),
        "Dr. Martinez",
        "General checkup, all in order",
        RecordDetails::RoutineCheckup,
    ));
    store.add_record(record(
        3,
        buddy,
        today - Days::new(90),
        "Dr. Garcia",
        "Antibiotics for an ear infection",
        RecordDetails::Medication,
    ));
    store.add_record(record(
        4,
        buddy,
        today + Days::new(14),
        "Dr. Martinez",
        "Scheduled annual checkup",
        RecordDetails::UpcomingCheckup { time: hm(10, 30) },
    ));
    let booster = today - Days::new(400);
    store.add_record(record(
        5,
        buddy,
        booster,
        "Dr. Garcia",
        "Polyvalent booster",
        RecordDetails::Vaccination {
            next_due: booster + Days::new(365),
        },
    ));

    // Lucy's history.
    let feline = today - Days::new(120);
    store.add_record(record(
        6,
        lucy,
        feline,
        "Dr. Martinez",
        "Feline triple vaccine",
        RecordDetails::Vaccination {
            next_due: feline + Days::new(365),
        },
    ));
    store.add_record(record(
        7,
        lucy,
        today - Days::new(60),
        "Dr. Martinez",
        "Dental check, mild tartar",
        RecordDetails::RoutineCheckup,
    ));
    store.add_record(record(
        8,
        lucy,
        today - Days::new(30),
        "Dr. Garcia",
        "Deworming treatment",
        RecordDetails::Medication,
    ));
    store.add_record(record(
        9,
        lucy,
        today + Days::new(7),
        "Dr. Garcia",
        "Vaccination booster appointment",
        RecordDetails::UpcomingCheckup { time: hm(16, 0) },
    ));

    store.add_food(Food {
        id: FoodId::new(1),
        pet_id: buddy,
        name: "Premium Adult Dog Food".to_string(),
        weight_kg: 15.0,
        photo: PhotoRef::Placeholder,
    });
    store.add_food(Food {
        id: FoodId::new(2),
        pet_id: lucy,
        name: "Grain-Free Cat Food".to_string(),
        weight_kg: 3.5,
        photo: PhotoRef::Placeholder,
    });

    store.select_pet(buddy);
    store
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::derived::DerivedViews;
    use crate::filter::RecordFilter;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn seeds_two_pets_with_the_first_selected() {
        let store = seed_store(today());
        assert_eq!(store.pets().len(), 2);
        assert_eq!(store.selected_pet_id(), Some(PetId::new(1)));
        assert_eq!(store.records().len(), 9);
        assert_eq!(store.foods().len(), 2);
        assert!(!store.clinic().name.is_empty());
    }

    #[test]
    fn both_pets_start_with_an_upcoming_visit_and_food() {
        let mut store = seed_store(today());
        let filter = RecordFilter::default();

        for id in [PetId::new(1), PetId::new(2)] {
            store.select_pet(id);
            let views = DerivedViews::compute(&store, &filter, today());
            assert_eq!(views.upcoming.len(), 1, "pet {} upcoming", id);
            assert!(!views.vaccinations.is_empty(), "pet {} vaccinations", id);
            assert_eq!(views.food.len(), 1, "pet {} food", id);
        }
    }

    #[test]
    fn seeded_ids_do_not_block_fresh_ones() {
        let mut store = seed_store(today());
        assert!(store.next_record_id().raw() > 9);
    }
}
