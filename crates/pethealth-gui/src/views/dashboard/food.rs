//! Food section: the selected pet's food entries.

use egui::{RichText, Ui};
use pethealth_model::Food;

use super::DashboardAction;
use crate::theme::spacing;
use crate::views::widgets;

pub fn show(ui: &mut Ui, food: &[Food]) -> Option<DashboardAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        widgets::section_heading(ui, egui_phosphor::regular::BOWL_FOOD, "Food");
        if ui
            .button(format!("{} Add Food", egui_phosphor::regular::PLUS))
            .clicked()
        {
            action = Some(DashboardAction::AddFood);
        }
    });
    ui.add_space(spacing::SM);

    if food.is_empty() {
        widgets::empty_hint(ui, "No food entries yet");
        return action;
    }

    for entry in food {
        ui.horizontal(|ui| {
            widgets::photo_thumb(ui, &entry.photo, 40.0);
            ui.vertical(|ui| {
                ui.label(RichText::new(&entry.name).strong());
                ui.label(RichText::new(format!("{} kg", entry.weight_kg)).weak().small());
            });
            if ui
                .small_button(egui_phosphor::regular::PENCIL_SIMPLE)
                .on_hover_text("Edit food")
                .clicked()
            {
                action = Some(DashboardAction::EditFood(entry.id));
            }
        });
        ui.add_space(spacing::XS);
    }

    action
}
