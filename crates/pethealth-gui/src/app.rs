//! Main application struct and eframe::App implementation

use chrono::{Local, NaiveDate};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use crate::services::{PhotoEvent, PhotoTarget, SUPPORTED_EXTENSIONS, spawn_photo_read};
use crate::settings::{load_settings, save_settings};
use crate::state::AppState;
use crate::views::{
    DashboardAction, DashboardView, FoodModal, ModalAction, PetModal, RecordModal, SidebarAction,
    SidebarView,
};

/// Main application struct
pub struct PetHealthApp {
    state: AppState,
    photo_sender: Sender<PhotoEvent>,
    photo_receiver: Receiver<PhotoEvent>,
}

impl PetHealthApp {
    /// Create a new application instance
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Initialize Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        // Image loaders for embedded pet/food photos
        egui_extras::install_image_loaders(&cc.egui_ctx);

        // Load settings from disk
        let settings = load_settings();
        tracing::info!("Loaded settings: dark_mode={}", settings.general.dark_mode);

        let (photo_sender, photo_receiver) = crossbeam_channel::unbounded();

        Self {
            state: AppState::new(settings, Local::now().date_naive()),
            photo_sender,
            photo_receiver,
        }
    }
}

impl eframe::App for PetHealthApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let today = Local::now().date_naive();

        // Handle finished photo reads from background threads
        self.handle_photo_events();

        // Handle keyboard shortcuts
        self.handle_shortcuts(ctx);

        self.apply_theme(ctx);

        // Derived snapshot for this frame; recomputed only when the store
        // version, filter revision or calendar day moved.
        let views = self.state.views(today);

        let mut sidebar_action = None;
        let mut dashboard_action = None;

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(format!(
                        "{} Pet Health Studio",
                        egui_phosphor::regular::PAW_PRINT
                    ))
                    .strong()
                    .size(18.0),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let icon = if self.state.settings.general.dark_mode {
                        egui_phosphor::regular::SUN
                    } else {
                        egui_phosphor::regular::MOON
                    };
                    if ui.button(icon).on_hover_text("Toggle dark mode").clicked() {
                        self.state.settings.general.dark_mode =
                            !self.state.settings.general.dark_mode;
                        if let Err(e) = save_settings(&self.state.settings) {
                            tracing::error!("Failed to save settings: {}", e);
                        }
                    }
                });
            });
        });

        egui::SidePanel::left("sidebar")
            .resizable(false)
            .default_width(240.0)
            .show(ctx, |ui| {
                sidebar_action = SidebarView::show(ui, &self.state);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            dashboard_action = DashboardView::show(ui, &views, &mut self.state.filter, today);
        });

        // Modals render on top of the panels
        let pet_action = PetModal::show(
            ctx,
            &mut self.state.pet_form,
            self.state.pet_photo_error.as_deref(),
        );
        let record_action = RecordModal::show(ctx, &mut self.state.record_form);
        let food_action = FoodModal::show(
            ctx,
            &mut self.state.food_form,
            self.state.food_photo_error.as_deref(),
        );

        // Apply deferred actions after all borrows of the frame are done
        if let Some(action) = sidebar_action {
            self.apply_sidebar_action(action, today);
        }
        if let Some(action) = dashboard_action {
            self.apply_dashboard_action(action, today);
        }
        if let Some(action) = pet_action {
            self.apply_pet_modal_action(action, ctx);
        }
        if let Some(action) = record_action {
            self.apply_record_modal_action(action);
        }
        if let Some(action) = food_action {
            self.apply_food_modal_action(action, ctx);
        }
    }
}

impl PetHealthApp {
    /// Receive finished photo reads and route them into the right draft.
    ///
    /// A read that finishes after its modal closed still lands in the
    /// (discarded) draft; the next open replaces it.
    fn handle_photo_events(&mut self) {
        while let Ok(event) = self.photo_receiver.try_recv() {
            match event.target {
                PhotoTarget::Pet => match event.result {
                    Ok(photo) => {
                        self.state.pet_form.set_photo(photo);
                        self.state.pet_photo_error = None;
                    }
                    Err(e) => self.state.pet_photo_error = Some(e.to_string()),
                },
                PhotoTarget::Food => match event.result {
                    Ok(photo) => {
                        self.state.food_form.set_photo(photo);
                        self.state.food_photo_error = None;
                    }
                    Err(e) => self.state.food_photo_error = Some(e.to_string()),
                },
            }
        }
    }

    /// Handle global keyboard shortcuts
    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.state.dismiss_topmost();
        }
    }

    fn apply_theme(&self, ctx: &egui::Context) {
        if self.state.settings.general.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }
    }

    /// Open the native file dialog and read the chosen image off-thread.
    fn pick_photo(&mut self, target: PhotoTarget, ctx: &egui::Context) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", SUPPORTED_EXTENSIONS)
            .pick_file()
        {
            tracing::info!("Reading photo: {:?}", path);
            spawn_photo_read(path, target, self.photo_sender.clone(), ctx.clone());
        }
    }

    fn apply_sidebar_action(&mut self, action: SidebarAction, today: NaiveDate) {
        match action {
            SidebarAction::SelectPet(id) => self.state.store.select_pet(id),
            SidebarAction::AddPet => {
                self.state.pet_photo_error = None;
                self.state.pet_form.open_add(today);
            }
        }
    }

    fn apply_dashboard_action(&mut self, action: DashboardAction, today: NaiveDate) {
        match action {
            DashboardAction::EditPet => {
                let Some(pet) = self
                    .state
                    .store
                    .selected_pet_id()
                    .and_then(|id| self.state.store.pet(id))
                    .cloned()
                else {
                    return;
                };
                self.state.pet_photo_error = None;
                self.state.pet_form.open_edit(&pet);
            }
            DashboardAction::AddRecord => self.state.record_form.open_add(today),
            DashboardAction::EditRecord(id) => {
                if let Some(record) = self.state.store.record(id).cloned() {
                    self.state.record_form.open_edit(&record, today);
                }
            }
            DashboardAction::AddFood => {
                self.state.food_photo_error = None;
                self.state.food_form.open_add();
            }
            DashboardAction::EditFood(id) => {
                if let Some(food) = self.state.store.food(id).cloned() {
                    self.state.food_photo_error = None;
                    self.state.food_form.open_edit(&food);
                }
            }
        }
    }

    fn apply_pet_modal_action(&mut self, action: ModalAction, ctx: &egui::Context) {
        match action {
            ModalAction::Save => {
                // On error the form stays open with the message inline
                if self.state.pet_form.save(&mut self.state.store).is_ok() {
                    self.state.pet_photo_error = None;
                }
            }
            ModalAction::Cancel => {
                self.state.pet_form.cancel();
                self.state.pet_photo_error = None;
            }
            ModalAction::PickPhoto => self.pick_photo(PhotoTarget::Pet, ctx),
            ModalAction::RequestDelete => self.state.pet_form.request_delete(),
            ModalAction::CancelDelete => self.state.pet_form.cancel_delete(),
            ModalAction::ConfirmDelete => self.state.pet_form.delete(&mut self.state.store),
        }
    }

    fn apply_record_modal_action(&mut self, action: ModalAction) {
        match action {
            ModalAction::Save => {
                let _ = self.state.record_form.save(&mut self.state.store);
            }
            ModalAction::Cancel => self.state.record_form.cancel(),
            // Records carry no photo and no standalone delete
            ModalAction::PickPhoto
            | ModalAction::RequestDelete
            | ModalAction::CancelDelete
            | ModalAction::ConfirmDelete => {}
        }
    }

    fn apply_food_modal_action(&mut self, action: ModalAction, ctx: &egui::Context) {
        match action {
            ModalAction::Save => {
                if self.state.food_form.save(&mut self.state.store).is_ok() {
                    self.state.food_photo_error = None;
                }
            }
            ModalAction::Cancel => {
                self.state.food_form.cancel();
                self.state.food_photo_error = None;
            }
            ModalAction::PickPhoto => self.pick_photo(PhotoTarget::Food, ctx),
            ModalAction::RequestDelete => self.state.food_form.request_delete(),
            ModalAction::CancelDelete => self.state.food_form.cancel_delete(),
            ModalAction::ConfirmDelete => self.state.food_form.delete(&mut self.state.store),
        }
    }
}
