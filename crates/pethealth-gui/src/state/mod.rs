//! Application state.
//!
//! The GUI keeps no entity data of its own: `AppState` wraps the core
//! state layer (store, filter, derived cache, form controllers) together
//! with persisted settings and transient per-modal UI state.

mod app_state;

pub use app_state::AppState;
