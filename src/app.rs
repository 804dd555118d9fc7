//! Main application module

mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

pub use message::Message;
pub use state::{App, CoreState, UiState};

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        let settings = crate::features::Settings::load();
        tracing::info!("Sound directory: {}", settings.sound_dir.display());

        let core = CoreState::new(settings);
        let ui = UiState::default();

        (Self { core, ui }, Task::none())
    }

    /// Application theme
    pub fn theme(&self) -> Theme {
        if self.core.settings.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Window title
    pub fn title(&self) -> String {
        "Guitar Chord Player".to_string()
    }

    /// Keyboard subscription: every keypress becomes a message so note
    /// keys play and dismissal keys reach the dialog
    pub fn subscription(&self) -> iced::Subscription<Message> {
        iced::keyboard::listen().filter_map(|event| match event {
            iced::keyboard::Event::KeyPressed { key, modifiers, .. } => {
                Some(Message::KeyPressed(key, modifiers))
            }
            _ => None,
        })
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new().0
    }
}
