//! Theme and styling constants

use egui::Color32;
use pethealth_model::RecordKind;

/// Spacing constants
pub mod spacing {
    pub const XS: f32 = 4.0;
    pub const SM: f32 = 8.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

/// Common color constants not covered by egui's visuals
pub mod colors {
    use egui::Color32;

    /// Success/positive indicator color (green)
    pub const SUCCESS: Color32 = Color32::from_rgb(34, 197, 94);
    /// Destructive action color (red)
    pub const DANGER: Color32 = Color32::from_rgb(220, 38, 38);
}

/// Badge color for a record kind.
pub fn kind_color(kind: RecordKind) -> Color32 {
    match kind {
        RecordKind::RoutineCheckup => Color32::from_rgb(59, 130, 246),
        RecordKind::Vaccination => Color32::from_rgb(34, 197, 94),
        RecordKind::Medication => Color32::from_rgb(245, 158, 11),
        RecordKind::UpcomingCheckup => Color32::from_rgb(168, 85, 247),
    }
}

/// Icon glyph for a record kind.
pub fn kind_icon(kind: RecordKind) -> &'static str {
    match kind {
        RecordKind::RoutineCheckup => egui_phosphor::regular::STETHOSCOPE,
        RecordKind::Vaccination => egui_phosphor::regular::SYRINGE,
        RecordKind::Medication => egui_phosphor::regular::PILL,
        RecordKind::UpcomingCheckup => egui_phosphor::regular::CALENDAR_CHECK,
    }
}
