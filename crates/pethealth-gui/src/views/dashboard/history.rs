//! Medical history: filter controls and the filtered past-record list.
//!
//! The only dashboard section that mutates state directly: filter edits
//! bump the filter revision, which the derived cache observes next frame.

use chrono::NaiveDate;
use egui::{RichText, Ui};
use egui_extras::DatePickerButton;
use pethealth_core::RecordFilter;
use pethealth_model::{MedicalRecord, RecordKind};

use super::DashboardAction;
use crate::theme::spacing;
use crate::views::widgets;

pub fn show(
    ui: &mut Ui,
    past: &[MedicalRecord],
    filter: &mut RecordFilter,
    today: NaiveDate,
) -> Option<DashboardAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        widgets::section_heading(ui, egui_phosphor::regular::CLIPBOARD_TEXT, "Medical History");
        if ui
            .button(format!("{} Add Record", egui_phosphor::regular::PLUS))
            .clicked()
        {
            action = Some(DashboardAction::AddRecord);
        }
    });
    ui.add_space(spacing::SM);

    // Kind chips: single-select toggles. Upcoming checkups never appear
    // in the history, so they get no chip either.
    ui.horizontal(|ui| {
        for &kind in RecordKind::all() {
            if kind == RecordKind::UpcomingCheckup {
                continue;
            }
            let active = filter.kind() == Some(kind);
            if ui.selectable_label(active, kind.label()).clicked() {
                filter.toggle_kind(kind);
            }
        }
    });
    ui.add_space(spacing::XS);

    ui.horizontal(|ui| {
        ui.label(RichText::new("From").weak());
        date_bound(ui, "history_from", filter.date_from(), today, |d| {
            filter.set_date_from(d);
        });

        ui.label(RichText::new("to").weak());
        date_bound(ui, "history_to", filter.date_to(), today, |d| {
            filter.set_date_to(d);
        });

        if filter.is_active()
            && ui
                .button(format!("{} Clear", egui_phosphor::regular::X))
                .clicked()
        {
            filter.clear();
        }
    });
    ui.add_space(spacing::SM);

    if past.is_empty() {
        widgets::empty_hint(ui, "No records match the current filters");
        return action;
    }

    for record in past {
        ui.horizontal(|ui| {
            widgets::kind_badge(ui, record.kind());
            ui.label(RichText::new(widgets::format_date(record.date)).strong());
            ui.label(RichText::new(&record.doctor).weak());
            if ui
                .small_button(egui_phosphor::regular::PENCIL_SIMPLE)
                .on_hover_text("Edit record")
                .clicked()
            {
                action = Some(DashboardAction::EditRecord(record.id));
            }
        });
        ui.label(&record.notes);
        ui.add_space(spacing::SM);
    }

    action
}

/// Optional date bound: a "set" button while unset, a date picker plus a
/// clear button once set.
fn date_bound(
    ui: &mut Ui,
    id: &str,
    current: Option<NaiveDate>,
    today: NaiveDate,
    mut set: impl FnMut(Option<NaiveDate>),
) {
    match current {
        Some(bound) => {
            let mut date = bound;
            if ui
                .add(DatePickerButton::new(&mut date).id_salt(id))
                .changed()
            {
                set(Some(date));
            }
            if ui.small_button(egui_phosphor::regular::X).clicked() {
                set(None);
            }
        }
        None => {
            if ui.button("any date").clicked() {
                set(Some(today));
            }
        }
    }
}
