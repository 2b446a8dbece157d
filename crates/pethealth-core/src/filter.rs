//! Filter state for the medical-history section.

use chrono::NaiveDate;
use pethealth_model::RecordKind;

/// Active filters applied to the past-records list.
///
/// `revision` increments on every change, so cached derived views observe
/// filter edits the same way they observe store mutations.
#[derive(Debug, Default)]
pub struct RecordFilter {
    kind: Option<RecordKind>,
    date_from: Option<NaiveDate>,
    date_to: Option<NaiveDate>,
    revision: u64,
}

impl RecordFilter {
    pub fn kind(&self) -> Option<RecordKind> {
        self.kind
    }

    pub fn date_from(&self) -> Option<NaiveDate> {
        self.date_from
    }

    pub fn date_to(&self) -> Option<NaiveDate> {
        self.date_to
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Single-select toggle: picking the active kind clears it, picking
    /// another kind replaces it.
    pub fn toggle_kind(&mut self, kind: RecordKind) {
        self.kind = if self.kind == Some(kind) {
            None
        } else {
            Some(kind)
        };
        self.revision += 1;
    }

    pub fn set_date_from(&mut self, date: Option<NaiveDate>) {
        if self.date_from != date {
            self.date_from = date;
            self.revision += 1;
        }
    }

    pub fn set_date_to(&mut self, date: Option<NaiveDate>) {
        if self.date_to != date {
            self.date_to = date;
            self.revision += 1;
        }
    }

    /// Reset the kind filter and both date bounds.
    pub fn clear(&mut self) {
        self.kind = None;
        self.date_from = None;
        self.date_to = None;
        self.revision += 1;
    }

    /// True when any filter is set; drives the "clear filters" control.
    pub fn is_active(&self) -> bool {
        self.kind.is_some() || self.date_from.is_some() || self.date_to.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_the_same_kind_twice_clears_it() {
        let mut filter = RecordFilter::default();
        filter.toggle_kind(RecordKind::Vaccination);
        assert_eq!(filter.kind(), Some(RecordKind::Vaccination));
        assert!(filter.is_active());

        filter.toggle_kind(RecordKind::Vaccination);
        assert_eq!(filter.kind(), None);
        assert!(!filter.is_active());
    }

    #[test]
    fn toggling_another_kind_replaces_the_active_one() {
        let mut filter = RecordFilter::default();
        filter.toggle_kind(RecordKind::Vaccination);
        filter.toggle_kind(RecordKind::Medication);
        assert_eq!(filter.kind(), Some(RecordKind::Medication));
    }

    #[test]
    fn clear_resets_everything() {
        let mut filter = RecordFilter::default();
        filter.toggle_kind(RecordKind::Medication);
        filter.set_date_from(NaiveDate::from_ymd_opt(2024, 1, 1));
        filter.set_date_to(NaiveDate::from_ymd_opt(2024, 12, 31));
        assert!(filter.is_active());

        filter.clear();
        assert_eq!(filter.kind(), None);
        assert_eq!(filter.date_from(), None);
        assert_eq!(filter.date_to(), None);
        assert!(!filter.is_active());
    }

    #[test]
    fn every_change_moves_the_revision() {
        let mut filter = RecordFilter::default();
        let r0 = filter.revision();

        filter.toggle_kind(RecordKind::RoutineCheckup);
        let r1 = filter.revision();
        assert!(r1 > r0);

        filter.set_date_from(NaiveDate::from_ymd_opt(2024, 1, 1));
        let r2 = filter.revision();
        assert!(r2 > r1);

        // Setting the same bound again is not a change.
        filter.set_date_from(NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(filter.revision(), r2);

        filter.clear();
        assert!(filter.revision() > r2);
    }
}
