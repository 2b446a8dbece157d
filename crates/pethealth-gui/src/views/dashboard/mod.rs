//! Dashboard: everything shown for the selected pet.
//!
//! Sections render from a `DerivedViews` snapshot taken at the top of the
//! frame and report interactions as deferred [`DashboardAction`]s; only
//! the history section mutates state directly (the filter, whose revision
//! the cache observes).

mod food;
mod header;
mod history;
mod upcoming;
mod vaccinations;

use chrono::NaiveDate;
use egui::Ui;
use pethealth_core::{DerivedViews, RecordFilter};
use pethealth_model::{FoodId, RecordId};

use crate::theme::spacing;
use crate::views::widgets;

/// Deferred dashboard interaction, applied by the app after rendering.
pub enum DashboardAction {
    EditPet,
    AddRecord,
    EditRecord(RecordId),
    AddFood,
    EditFood(FoodId),
}

pub struct DashboardView;

impl DashboardView {
    pub fn show(
        ui: &mut Ui,
        views: &DerivedViews,
        filter: &mut RecordFilter,
        today: NaiveDate,
    ) -> Option<DashboardAction> {
        let Some(pet) = &views.pet else {
            ui.add_space(spacing::XL);
            ui.vertical_centered(|ui| {
                widgets::empty_hint(ui, "Add a pet to start tracking its health history.");
            });
            return None;
        };

        let mut action = None;

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.add_space(spacing::MD);
            if header::show(ui, pet, views.age_years) {
                action = Some(DashboardAction::EditPet);
            }

            ui.add_space(spacing::LG);
            upcoming::show(ui, &views.upcoming, today);

            ui.add_space(spacing::LG);
            vaccinations::show(ui, &views.vaccinations, today);

            ui.add_space(spacing::LG);
            if let Some(a) = history::show(ui, &views.past, filter, today) {
                action = Some(a);
            }

            ui.add_space(spacing::LG);
            if let Some(a) = food::show(ui, &views.food) {
                action = Some(a);
            }
            ui.add_space(spacing::XL);
        });

        action
    }
}
