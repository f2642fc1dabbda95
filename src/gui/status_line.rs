use eframe::egui;

use super::theme::Theme;
use crate::core::ScreenState;

pub fn status_line(ui: &mut egui::Ui, screen: &ScreenState, theme: &Theme) {
    ui.horizontal(|ui| {
        if screen.is_busy() {
            ui.spinner();
        }

        let status = screen.status();
        ui.colored_label(theme.status_color(ui, status.kind), &status.text);
    });
}
