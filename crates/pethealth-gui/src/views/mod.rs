//! View components.
//!
//! The sidebar and dashboard render from state and return deferred
//! actions; the modals additionally edit their form's draft in place.

mod dashboard;
mod modals;
mod sidebar;
pub mod widgets;

pub use dashboard::{DashboardAction, DashboardView};
pub use modals::{FoodModal, ModalAction, PetModal, RecordModal};
pub use sidebar::{SidebarAction, SidebarView};
