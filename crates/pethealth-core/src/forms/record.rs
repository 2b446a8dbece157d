use chrono::{Days, NaiveDate, NaiveTime};

use pethealth_model::{MedicalRecord, RecordDetails, RecordId, RecordKind};

use crate::forms::FormError;
use crate::store::EntityStore;

const DEFAULT_TIME: &str = "09:00";

fn default_next_due(today: NaiveDate) -> NaiveDate {
    today + Days::new(365)
}

/// Scratch copy of a record's fields while the modal is open.
///
/// The draft is flat: every kind's fields stay editable, so switching the
/// kind never loses input. `save` carries over only the fields belonging
/// to the chosen kind.
#[derive(Debug, Clone)]
pub struct RecordDraft {
    pub kind: RecordKind,
    pub date: NaiveDate,
    pub doctor: String,
    pub notes: String,
    /// Appointment time text, parsed as `%H:%M` when the kind is
    /// UpcomingCheckup and ignored otherwise.
    pub time: String,
    /// Next dose date, stored only when the kind is Vaccination.
    pub next_due: NaiveDate,
}

impl RecordDraft {
    fn for_new(today: NaiveDate) -> Self {
        Self {
            kind: RecordKind::RoutineCheckup,
            date: today,
            doctor: String::new(),
            notes: String::new(),
            time: DEFAULT_TIME.to_string(),
            next_due: default_next_due(today),
        }
    }

    fn for_edit(record: &MedicalRecord, today: NaiveDate) -> Self {
        let mut draft = Self::for_new(today);
        draft.kind = record.kind();
        draft.date = record.date;
        draft.doctor = record.doctor.clone();
        draft.notes = record.notes.clone();
        match record.details {
            RecordDetails::Vaccination { next_due } => draft.next_due = next_due,
            RecordDetails::UpcomingCheckup { time } => {
                draft.time = time.format("%H:%M").to_string();
            }
            RecordDetails::RoutineCheckup | RecordDetails::Medication => {}
        }
        draft
    }
}

/// Controller for the add/edit medical-record modal.
#[derive(Debug)]
pub struct RecordForm {
    open: bool,
    editing: Option<RecordId>,
    error: Option<FormError>,
    pub draft: RecordDraft,
}

impl Default for RecordForm {
    fn default() -> Self {
        Self {
            open: false,
            editing: None,
            error: None,
            draft: RecordDraft::for_new(NaiveDate::default()),
        }
    }
}

impl RecordForm {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// The record being edited, `None` while creating.
    pub fn editing(&self) -> Option<RecordId> {
        self.editing
    }

    pub fn error(&self) -> Option<&FormError> {
        self.error.as_ref()
    }

    pub fn open_add(&mut self, today: NaiveDate) {
        self.open = true;
        self.editing = None;
        self.error = None;
        self.draft = RecordDraft::for_new(today);
    }

    /// Pre-populate from an existing record. Fields its kind lacks fall
    /// back to the new-record defaults so switching kinds starts sensible.
    pub fn open_edit(&mut self, record: &MedicalRecord, today: NaiveDate) {
        self.open = true;
        self.editing = Some(record.id);
        self.error = None;
        self.draft = RecordDraft::for_edit(record, today);
    }

    /// Close without touching the store; the draft is discarded.
    pub fn cancel(&mut self) {
        self.open = false;
        self.error = None;
    }

    /// Validate the draft and merge it into the store: update by id when
    /// editing, otherwise append a fresh record for the selected pet. On
    /// error the modal stays open with the draft retained.
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
        let doctor = self.draft.doctor.trim();
        if doctor.is_empty() {
            return Err(FormError::MissingField("doctor"));
        }
        let notes = self.draft.notes.trim();
        if notes.is_empty() {
            return Err(FormError::MissingField("notes"));
        }

        // Only the chosen kind's fields survive into the saved record.
        let details = match self.draft.kind {
            RecordKind::RoutineCheckup => RecordDetails::RoutineCheckup,
            RecordKind::Medication => RecordDetails::Medication,
            RecordKind::Vaccination => RecordDetails::Vaccination {
                next_due: self.draft.next_due,
            },
            RecordKind::UpcomingCheckup => {
                let time = NaiveTime::parse_from_str(self.draft.time.trim(), "%H:%M")
                    .map_err(|_| FormError::InvalidTime(self.draft.time.clone()))?;
                RecordDetails::UpcomingCheckup { time }
            }
        };

        match self.editing {
            Some(id) => {
                let Some(pet_id) = store.record(id).map(|r| r.pet_id) else {
                    tracing::warn!(record = %id, "edited record no longer exists");
                    return Ok(());
                };
                store.update_record(MedicalRecord {
                    id,
                    pet_id,
                    date: self.draft.date,
                    doctor: doctor.to_string(),
                    notes: notes.to_string(),
                    details,
                });
            }
            None => {
                let pet_id = store.selected_pet_id().ok_or(FormError::NoPetSelected)?;
                let id = store.next_record_id();
                store.add_record(MedicalRecord {
                    id,
                    pet_id,
                    date: self.draft.date,
                    doctor: doctor.to_string(),
                    notes: notes.to_string(),
                    details,
                });
            }
        }
        Ok(())
    }
}
