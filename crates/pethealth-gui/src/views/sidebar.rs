//! Sidebar: pet selector and the clinic contact card.

use egui::{RichText, Ui};
use pethealth_model::PetId;

use super::widgets;
use crate::state::AppState;
use crate::theme::spacing;

/// Deferred sidebar interaction, applied by the app after rendering.
pub enum SidebarAction {
    SelectPet(PetId),
    AddPet,
}

pub struct SidebarView;

impl SidebarView {
    pub fn show(ui: &mut Ui, state: &AppState) -> Option<SidebarAction> {
        let mut action = None;

        ui.add_space(spacing::MD);
        widgets::section_heading(ui, egui_phosphor::regular::PAW_PRINT, "My Pets");
        ui.add_space(spacing::SM);

        let selected = state.store.selected_pet_id();
        for pet in state.store.pets() {
            let is_selected = selected == Some(pet.id);
            let response = ui
                .horizontal(|ui| {
                    widgets::photo_thumb(ui, &pet.photo, 32.0);
                    ui.vertical(|ui| {
                        ui.label(RichText::new(&pet.name).strong());
                        ui.label(RichText::new(&pet.breed).weak().small());
                    });
                })
                .response;

            let response = response.interact(egui::Sense::click());
            if is_selected {
                ui.painter().rect_stroke(
                    response.rect.expand(2.0),
                    4.0,
                    ui.visuals().selection.stroke,
                    egui::StrokeKind::Outside,
                );
            }
            if response.clicked() && !is_selected {
                action = Some(SidebarAction::SelectPet(pet.id));
            }
            ui.add_space(spacing::XS);
        }

        if state.store.pets().is_empty() {
            widgets::empty_hint(ui, "No pets yet");
            ui.add_space(spacing::XS);
        }

        if ui
            .button(format!("{} Add Pet", egui_phosphor::regular::PLUS))
            .clicked()
        {
            action = Some(SidebarAction::AddPet);
        }

        ui.add_space(spacing::LG);
        ui.separator();
        ui.add_space(spacing::SM);

        let clinic = state.store.clinic();
        widgets::section_heading(ui, egui_phosphor::regular::FIRST_AID_KIT, "Vet Clinic");
        ui.add_space(spacing::XS);
        ui.label(RichText::new(&clinic.name).strong());
        ui.label(
            RichText::new(format!("{} {}", egui_phosphor::regular::CLOCK, clinic.hours)).weak(),
        );
        ui.label(
            RichText::new(format!("{} {}", egui_phosphor::regular::PHONE, clinic.phone)).weak(),
        );

        action
    }
}
