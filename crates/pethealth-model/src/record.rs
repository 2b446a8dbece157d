use chrono::{NaiveDate, NaiveTime};
use std::fmt;

use crate::ids::{PetId, RecordId};

/// The closed set of medical record categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    RoutineCheckup,
    Vaccination,
    Medication,
    /// A scheduled future visit; the only kind with a time of day.
    UpcomingCheckup,
}

impl RecordKind {
    /// All kinds, in the order the UI lists them.
    pub const fn all() -> &'static [RecordKind] {
        &[
            Self::RoutineCheckup,
            Self::Vaccination,
            Self::Medication,
            Self::UpcomingCheckup,
        ]
    }

    /// Display name for UI.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::RoutineCheckup => "Routine Checkup",
            Self::Vaccination => "Vaccination",
            Self::Medication => "Medication",
            Self::UpcomingCheckup => "Upcoming Checkup",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Kind-specific payload of a medical record.
///
/// Only vaccinations carry a next-due date and only upcoming checkups carry
/// an appointment time; the remaining kinds have no extra fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RecordDetails {
    RoutineCheckup,
    Vaccination { next_due: NaiveDate },
    Medication,
    UpcomingCheckup { time: NaiveTime },
}

impl RecordDetails {
    pub const fn kind(&self) -> RecordKind {
        match self {
            Self::RoutineCheckup => RecordKind::RoutineCheckup,
            Self::Vaccination { .. } => RecordKind::Vaccination,
            Self::Medication => RecordKind::Medication,
            Self::UpcomingCheckup { .. } => RecordKind::UpcomingCheckup,
        }
    }
}

/// One entry in a pet's medical history.
#[derive(Debug, Clone, PartialEq)]
pub struct MedicalRecord {
    pub id: RecordId,
    pub pet_id: PetId,
    pub date: NaiveDate,
    pub doctor: String,
    pub notes: String,
    pub details: RecordDetails,
}

impl MedicalRecord {
    pub fn kind(&self) -> RecordKind {
        self.details.kind()
    }
}
