//! Pet header: photo, name, breed, derived age, edit button.

use egui::{RichText, Ui};
use pethealth_model::Pet;

use crate::theme::spacing;
use crate::views::widgets;

/// Returns true when the edit button was clicked.
pub fn show(ui: &mut Ui, pet: &Pet, age_years: u32) -> bool {
    let mut edit_clicked = false;

    ui.horizontal(|ui| {
        widgets::photo_thumb(ui, &pet.photo, 72.0);
        ui.add_space(spacing::SM);
        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                ui.heading(RichText::new(&pet.name).size(26.0));
                if ui
                    .small_button(format!("{} Edit", egui_phosphor::regular::PENCIL_SIMPLE))
                    .clicked()
                {
                    edit_clicked = true;
                }
            });
            ui.label(RichText::new(&pet.breed).weak());
            let years = if age_years == 1 { "year" } else { "years" };
            ui.label(format!(
                "{} {age_years} {years} old (born {})",
                egui_phosphor::regular::CAKE,
                widgets::format_date(pet.dob)
            ));
        });
    });

    edit_clicked
}
