//! Keyboard message handlers

use iced::Task;
use iced::keyboard::Key;
use iced::keyboard::key::Named;

use crate::app::message::Message;
use crate::app::state::App;
use crate::notes::NoteTable;

impl App {
    /// Handle keyboard-related messages
    pub fn handle_keyboard(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::KeyPressed(key, _modifiers) => {
                // The error dialog is modal: note keys are swallowed while
                // it is open, Escape/Enter dismiss it
                if self.ui.error_dialog.is_some() {
                    if matches!(key, Key::Named(Named::Escape | Named::Enter)) {
                        return Some(self.update(Message::DismissError));
                    }
                    return Some(Task::none());
                }

                if let Some(note) = note_for_key_event(&self.core.notes, key) {
                    return Some(self.update(Message::NotePressed(note)));
                }
                Some(Task::none())
            }

            _ => None,
        }
    }
}

/// Map a raw key event to a bound note identifier.
///
/// Only single-character keys can match; everything else (named keys,
/// IME strings) is ignored without error.
fn note_for_key_event(table: &NoteTable, key: &Key) -> Option<char> {
    match key {
        Key::Character(c) => {
            let mut chars = c.chars();
            let first = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            table.note_for_key(first)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn character(s: &str) -> Key {
        Key::Character(s.into())
    }

    #[test]
    fn lowercase_and_uppercase_hit_the_same_note() {
        let table = NoteTable::default();
        assert_eq!(note_for_key_event(&table, &character("a")), Some('A'));
        assert_eq!(note_for_key_event(&table, &character("A")), Some('A'));
        assert_eq!(note_for_key_event(&table, &character("e")), Some('E'));
    }

    #[test]
    fn unbound_characters_are_ignored() {
        let table = NoteTable::default();
        assert_eq!(note_for_key_event(&table, &character("b")), None);
        assert_eq!(note_for_key_event(&table, &character("x")), None);
        assert_eq!(note_for_key_event(&table, &character("5")), None);
    }

    #[test]
    fn named_and_multi_character_keys_are_ignored() {
        let table = NoteTable::default();
        assert_eq!(note_for_key_event(&table, &Key::Named(Named::Space)), None);
        assert_eq!(note_for_key_event(&table, &Key::Named(Named::Enter)), None);
        assert_eq!(note_for_key_event(&table, &character("ae")), None);
    }
}
