//! Small shared widgets used across the dashboard sections and modals.

use egui::{Color32, RichText, Ui, Vec2};
use pethealth_model::{PhotoRef, RecordKind};

use crate::theme;

/// Square photo thumbnail; placeholders render as a paw-print glyph in a
/// frame so rows keep their alignment.
pub fn photo_thumb(ui: &mut Ui, photo: &PhotoRef, size: f32) {
    match photo {
        PhotoRef::Embedded { uri, bytes } => {
            ui.add(
                egui::Image::from_bytes(uri.clone(), bytes.clone())
                    .fit_to_exact_size(Vec2::splat(size)),
            );
        }
        PhotoRef::Placeholder => {
            let (rect, _) = ui.allocate_exact_size(Vec2::splat(size), egui::Sense::hover());
            ui.painter().rect_filled(
                rect,
                4.0,
                ui.visuals().widgets.noninteractive.bg_fill,
            );
            ui.painter().text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                egui_phosphor::regular::PAW_PRINT,
                egui::FontId::proportional(size * 0.5),
                ui.visuals().weak_text_color(),
            );
        }
    }
}

/// Colored record-kind badge with icon, as in the history rows.
pub fn kind_badge(ui: &mut Ui, kind: RecordKind) {
    let color = theme::kind_color(kind);
    egui::Frame::new()
        .fill(color.gamma_multiply(0.15))
        .corner_radius(4.0)
        .inner_margin(egui::Margin::symmetric(6, 2))
        .show(ui, |ui| {
            ui.label(
                RichText::new(format!("{} {}", theme::kind_icon(kind), kind.label()))
                    .color(color)
                    .small(),
            );
        });
}

/// Section heading with a phosphor icon.
pub fn section_heading(ui: &mut Ui, icon: &str, title: &str) {
    ui.label(RichText::new(format!("{icon} {title}")).strong().size(16.0));
}

/// Inline validation error line inside a modal.
pub fn error_line(ui: &mut Ui, message: &str) {
    ui.label(
        RichText::new(format!("{} {message}", egui_phosphor::regular::WARNING))
            .color(theme::colors::DANGER),
    );
}

/// Weak "nothing here" placeholder for an empty section.
pub fn empty_hint(ui: &mut Ui, message: &str) {
    ui.label(RichText::new(message).weak().italics());
}

/// Date formatted the way every list shows it.
pub fn format_date(date: chrono::NaiveDate) -> String {
    date.format("%b %e, %Y").to_string()
}

/// Green/red dot plus label, used for due/overdue vaccine status.
pub fn status_dot(ui: &mut Ui, ok: bool, label: &str) {
    let color = if ok {
        theme::colors::SUCCESS
    } else {
        Color32::from_rgb(245, 158, 11)
    };
    ui.label(RichText::new(format!("{} {label}", egui_phosphor::regular::CIRCLE)).color(color));
}
