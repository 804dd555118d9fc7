//! Window and settings message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle window-related messages
    pub fn handle_window(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::ToggleDarkMode => {
                self.core.settings.dark_mode = !self.core.settings.dark_mode;
                if let Err(e) = self.core.settings.save() {
                    tracing::warn!("Failed to save settings: {}", e);
                }
                Some(Task::none())
            }

            Message::Quit => {
                tracing::info!("Quit requested");
                Some(iced::exit())
            }

            _ => None,
        }
    }
}
