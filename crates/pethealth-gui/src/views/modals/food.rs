//! Add/edit food modal.

use egui::Context;
use pethealth_core::FoodForm;

use super::ModalAction;
use crate::theme::spacing;
use crate::views::widgets;

pub struct FoodModal;

impl FoodModal {
    pub fn show(
        ctx: &Context,
        form: &mut FoodForm,
        photo_error: Option<&str>,
    ) -> Option<ModalAction> {
        if !form.is_open() {
            return None;
        }
        let title = if form.editing().is_some() {
            "Edit Food"
        } else {
            "Add Food"
        };

        super::modal_window(ctx, title, |ui| {
            let mut action = None;

            egui::Grid::new("food_form")
                .num_columns(2)
                .spacing([spacing::MD, spacing::SM])
                .show(ui, |ui| {
                    ui.label("Name");
                    ui.text_edit_singleline(&mut form.draft.name);
                    ui.end_row();

                    ui.label("Weight (kg)");
                    ui.add(
                        egui::DragValue::new(&mut form.draft.weight_kg)
                            .range(0.0..=100.0)
                            .speed(0.1)
                            .suffix(" kg"),
                    );
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
                let subject = format!("\"{}\"", form.draft.name);
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
