//! Pet Health Studio - GUI Library
//!
//! The binary in `main.rs` only builds the eframe window around
//! [`app::PetHealthApp`]; everything else lives here so tests can reach it.

pub mod app;
pub mod services;
pub mod settings;
pub mod state;
pub mod theme;
pub mod views;
