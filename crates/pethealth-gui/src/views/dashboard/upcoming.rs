//! Upcoming checkups: scheduled visits from today onward.

use chrono::NaiveDate;
use egui::{RichText, Ui};
use pethealth_model::{MedicalRecord, RecordDetails};

use crate::theme::spacing;
use crate::views::widgets;

pub fn show(ui: &mut Ui, upcoming: &[MedicalRecord], today: NaiveDate) {
    widgets::section_heading(
        ui,
        egui_phosphor::regular::CALENDAR_CHECK,
        "Upcoming Checkups",
    );
    ui.add_space(spacing::SM);

    if upcoming.is_empty() {
        widgets::empty_hint(ui, "No visits scheduled");
        return;
    }

    for record in upcoming {
        let RecordDetails::UpcomingCheckup { time } = record.details else {
            continue;
        };
        ui.horizontal(|ui| {
            let when = if record.date == today {
                format!("Today at {}", time.format("%H:%M"))
            } else {
                format!(
                    "{} at {}",
                    widgets::format_date(record.date),
                    time.format("%H:%M")
                )
            };
            ui.label(RichText::new(when).strong());
            ui.label(RichText::new(format!("with {}", record.doctor)).weak());
        });
        ui.label(RichText::new(&record.notes).weak().small());
        ui.add_space(spacing::XS);
    }
}
