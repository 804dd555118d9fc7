//! Application messages

use iced::keyboard::{Key, Modifiers};

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    /// A note button was clicked
    NotePressed(char),
    /// Raw keyboard input from the subscription
    KeyPressed(Key, Modifiers),
    /// Dismiss the error dialog (OK button, backdrop click, or Escape/Enter)
    DismissError,
    /// Toggle dark/light mode and persist the choice
    ToggleDarkMode,
    /// Quit button pressed
    Quit,
}
