//! Modal form windows.
//!
//! Each modal renders its form controller's draft in a centered,
//! non-collapsible `egui::Window` and reports button presses as deferred
//! [`ModalAction`]s; the app applies them against the store so view code
//! never mutates entities. Destructive actions go through an in-window
//! confirmation step first.

mod food;
mod pet;
mod record;

pub use food::FoodModal;
pub use pet::PetModal;
pub use record::RecordModal;

use egui::{Context, Ui};

use crate::theme::spacing;
use crate::views::widgets;

/// Deferred modal interaction, applied by the app after rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    Save,
    Cancel,
    PickPhoto,
    RequestDelete,
    ConfirmDelete,
    CancelDelete,
}

/// Shared modal window chrome.
fn modal_window<R>(
    ctx: &Context,
    title: &str,
    add_contents: impl FnOnce(&mut Ui) -> R,
) -> Option<R> {
    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.set_min_width(320.0);
            add_contents(ui)
        })
        .and_then(|inner| inner.inner)
}

/// Delete confirmation step rendered inside the modal body.
fn confirm_delete_row(ui: &mut Ui, subject: &str) -> Option<ModalAction> {
    let mut action = None;
    ui.add_space(spacing::SM);
    widgets::error_line(ui, &format!("Delete {subject}? This cannot be undone."));
    ui.add_space(spacing::XS);
    ui.horizontal(|ui| {
        if ui.button("Cancel").clicked() {
            action = Some(ModalAction::CancelDelete);
        }
        if ui
            .button(egui::RichText::new("Delete").color(crate::theme::colors::DANGER))
            .clicked()
        {
            action = Some(ModalAction::ConfirmDelete);
        }
    });
    action
}

/// Standard Cancel / Save / Delete button row.
fn button_row(ui: &mut Ui, can_delete: bool) -> Option<ModalAction> {
    let mut action = None;
    ui.add_space(spacing::SM);
    ui.horizontal(|ui| {
        if ui.button("Cancel").clicked() {
            action = Some(ModalAction::Cancel);
        }
        if ui.button(egui::RichText::new("Save").strong()).clicked() {
            action = Some(ModalAction::Save);
        }
        if can_delete
            && ui
                .button(egui::RichText::new("Delete").color(crate::theme::colors::DANGER))
                .clicked()
        {
            action = Some(ModalAction::RequestDelete);
        }
    });
    action
}

/// Photo field: thumbnail, pick button and any load error.
fn photo_field(
    ui: &mut Ui,
    photo: &pethealth_model::PhotoRef,
    error: Option<&str>,
) -> Option<ModalAction> {
    let mut action = None;
    ui.horizontal(|ui| {
        widgets::photo_thumb(ui, photo, 48.0);
        if ui
            .button(format!("{} Choose Photo", egui_phosphor::regular::IMAGE))
            .clicked()
        {
            action = Some(ModalAction::PickPhoto);
        }
    });
    if let Some(message) = error {
        widgets::error_line(ui, message);
    }
    action
}
