//! Add/edit medical-record modal.
//!
//! The draft is flat: switching the kind shows or hides the kind-specific
//! fields without losing what was typed. Only the chosen kind's fields
//! make it into the saved record.

use egui::Context;
use egui_extras::DatePickerButton;
use pethealth_core::RecordForm;
use pethealth_model::RecordKind;

use super::ModalAction;
use crate::theme::spacing;
use crate::views::widgets;

pub struct RecordModal;

impl RecordModal {
    pub fn show(ctx: &Context, form: &mut RecordForm) -> Option<ModalAction> {
        if !form.is_open() {
            return None;
        }
        let title = if form.editing().is_some() {
            "Edit Record"
        } else {
            "Add Record"
        };

        super::modal_window(ctx, title, |ui| {
            let mut action = None;

            egui::Grid::new("record_form")
                .num_columns(2)
                .spacing([spacing::MD, spacing::SM])
                .show(ui, |ui| {
                    ui.label("Type");
                    egui::ComboBox::from_id_salt("record_kind")
                        .selected_text(form.draft.kind.label())
                        .show_ui(ui, |ui| {
                            for &kind in RecordKind::all() {
                                ui.selectable_value(&mut form.draft.kind, kind, kind.label());
                            }
                        });
                    ui.end_row();

                    ui.label("Date");
                    ui.add(DatePickerButton::new(&mut form.draft.date).id_salt("record_date"));
                    ui.end_row();

                    if form.draft.kind == RecordKind::UpcomingCheckup {
                        ui.label("Time");
                        ui.add(
                            egui::TextEdit::singleline(&mut form.draft.time)
                                .hint_text("HH:MM")
                                .desired_width(80.0),
                        );
                        ui.end_row();
                    }

                    if form.draft.kind == RecordKind::Vaccination {
                        ui.label("Next due");
                        ui.add(
                            DatePickerButton::new(&mut form.draft.next_due)
                                .id_salt("record_next_due"),
                        );
                        ui.end_row();
                    }

                    ui.label("Doctor");
                    ui.text_edit_singleline(&mut form.draft.doctor);
                    ui.end_row();

                    ui.label("Notes");
                    ui.text_edit_multiline(&mut form.draft.notes);
                    ui.end_row();
                });

            if let Some(error) = form.error() {
                widgets::error_line(ui, &error.to_string());
            }

            // Records have no standalone delete; they go with their pet.
            if let Some(a) = super::button_row(ui, false) {
                action = Some(a);
            }

            action
        })
        .flatten()
    }
}
