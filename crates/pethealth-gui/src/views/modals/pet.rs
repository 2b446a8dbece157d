//! Add/edit pet modal.

use egui::Context;
use egui_extras::DatePickerButton;
use pethealth_core::PetForm;

use super::ModalAction;
use crate::theme::spacing;
use crate::views::widgets;

pub struct PetModal;

impl PetModal {
    pub fn show(
        ctx: &Context,
        form: &mut PetForm,
        photo_error: Option<&str>,
    ) -> Option<ModalAction> {
        if !form.is_open() {
            return None;
        }
        let title = if form.editing().is_some() {
            "Edit Pet"
        } else {
            "Add Pet"
        };

        super::modal_window(ctx, title, |ui| {
            let mut action = None;

            egui::Grid::new("pet_form")
                .num_columns(2)
                .spacing([spacing::MD, spacing::SM])
                .show(ui, |ui| {
                    ui.label("Name");
                    ui.text_edit_singleline(&mut form.draft.name);
                    ui.end_row();

                    ui.label("Breed");
                    ui.text_edit_singleline(&mut form.draft.breed);
                    ui.end_row();

                    ui.label("Date of birth");
                    ui.add(DatePickerButton::new(&mut form.draft.dob).id_salt("pet_dob"));
                    ui.end_row();

                    ui.label("Photo");
                    if let Some(a) = super::photo_field(ui, &form.draft.photo, photo_error) {
                        action = Some(a);
                    }
                    ui.end_row();
                });

            if let Some(error) = form.error() {
                widgets::error_line(ui, &error.to_string());
            }

            if form.confirming_delete() {
                let subject = format!("{} and its whole medical history", form.draft.name);
                if let Some(a) = super::confirm_delete_row(ui, &subject) {
                    action = Some(a);
                }
            } else if let Some(a) = super::button_row(ui, form.editing().is_some()) {
                action = Some(a);
            }

            action
        })
        .flatten()
    }
}
