//! Note activation handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::notes::{self, Activation, ActivationError};

impl App {
    /// Handle note activation and error dialog messages
    pub fn handle_notes(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::NotePressed(note) => {
                self.activate(*note);
                Some(Task::none())
            }

            Message::DismissError => {
                self.ui.error_dialog = None;
                Some(Task::none())
            }

            _ => None,
        }
    }

    /// Resolve a note to its clip and start playback, or surface the error.
    ///
    /// Failures end here: they become dialog text and the app stays fully
    /// usable for the next activation.
    fn activate(&mut self, note: char) {
        let plan = notes::plan(&self.core.notes, &self.core.settings.sound_dir, note);
        match plan {
            Some(Activation::Play(path)) => {
                let result = match &self.core.player {
                    Some(player) => player.play_clip(&path),
                    None => Err("audio output unavailable".to_string()),
                };
                if let Err(e) = result {
                    let error = ActivationError::Playback(e);
                    tracing::warn!("Playback failed for {}: {}", path.display(), error);
                    self.ui.error_dialog = Some(error.to_string());
                } else {
                    tracing::debug!("Playing note {} from {}", note, path.display());
                }
            }
            Some(Activation::Fail(error)) => {
                tracing::warn!("{}", error);
                self.ui.error_dialog = Some(error.to_string());
            }
            // Not a bound note: ignore silently
            None => {}
        }
    }
}
