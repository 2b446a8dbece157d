//! Vaccination schedule: every vaccine with its next-due status.

use chrono::NaiveDate;
use egui::{RichText, Ui};
use pethealth_model::{MedicalRecord, RecordDetails};

use crate::theme::spacing;
use crate::views::widgets;

pub fn show(ui: &mut Ui, vaccinations: &[MedicalRecord], today: NaiveDate) {
    widgets::section_heading(ui, egui_phosphor::regular::SYRINGE, "Vaccination Schedule");
    ui.add_space(spacing::SM);

    if vaccinations.is_empty() {
        widgets::empty_hint(ui, "No vaccinations on record");
        return;
    }

    egui::Grid::new("vaccination_schedule")
        .num_columns(4)
        .spacing([spacing::MD, spacing::XS])
        .show(ui, |ui| {
            for record in vaccinations {
                let RecordDetails::Vaccination { next_due } = record.details else {
                    continue;
                };
                ui.label(RichText::new(&record.notes).strong());
                ui.label(widgets::format_date(record.date));
                ui.label(
                    RichText::new(format!("next {}", widgets::format_date(next_due))).weak(),
                );
                if next_due < today {
                    widgets::status_dot(ui, false, "overdue");
                } else {
                    widgets::status_dot(ui, true, "up to date");
                }
                ui.end_row();
            }
        });
}
