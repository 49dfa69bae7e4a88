use crate::command::Command;
use eframe::egui;

use super::App;

impl App {
    pub(crate) fn execute_command(&mut self, cmd: Command) {
        if cmd == Command::ShuffleColors {
            self.shuffle_colors();
            return;
        }

        if let Some(page) = cmd.target_page(self.carousel.current_page(), self.carousel.len()) {
            self.go_to_page(page);
        }
    }

    /// Animate to `page` as a direct selection (indicator or keyboard).
    pub(crate) fn go_to_page(&mut self, page: usize) {
        match self.carousel.select_page(page) {
            Ok(offset) => log::debug!("scrolling to page {} at {:.1}", page, offset),
            Err(e) => log::error!("Cannot select page: {}", e),
        }
    }

    pub(crate) fn handle_keyboard_shortcuts(&mut self, ctx: &egui::Context) {
        let bindings = [
            (egui::Key::ArrowLeft, Command::PreviousPage),
            (egui::Key::ArrowRight, Command::NextPage),
            (egui::Key::Home, Command::FirstPage),
            (egui::Key::End, Command::LastPage),
            (egui::Key::R, Command::ShuffleColors),
        ];

        let pressed: Vec<Command> = ctx.input_mut(|i| {
            bindings
                .iter()
                .filter(|(key, _)| i.consume_key(egui::Modifiers::NONE, *key))
                .map(|(_, cmd)| *cmd)
                .collect()
        });

        for cmd in pressed {
            self.execute_command(cmd);
        }
    }
}
