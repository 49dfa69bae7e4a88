use crate::command::Command;
use eframe::egui;

/// Renders the keybinding hints along the bottom of the window.
pub fn render(ui: &mut egui::Ui, current: usize, count: usize) {
    ui.horizontal(|ui| {
        ui.add_space(8.0);

        ui.label(
            egui::RichText::new(format!("{}/{}", current + 1, count))
                .size(12.0)
                .color(egui::Color32::DARK_GRAY),
        );

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.add_space(8.0);
            for cmd in Command::all().iter().rev() {
                ui.label(
                    egui::RichText::new(format!("{} {}", cmd.keybinding(), cmd.name()))
                        .size(11.0)
                        .color(egui::Color32::GRAY),
                );
            }
        });
    });
}
