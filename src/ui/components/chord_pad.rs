//! Chord pad component
//!
//! One button per note in table order, with the Quit control and theme
//! toggle on a second row beneath them.

use iced::widget::{Space, button, column, row, text};
use iced::{Alignment, Element};

use crate::app::Message;
use crate::notes::NoteTable;
use crate::ui::theme;

/// Build the chord pad
pub fn view(notes: &NoteTable) -> Element<'static, Message> {
    let mut buttons = row![].spacing(10);
    for id in notes.ids() {
        buttons = buttons.push(
            button(text(id.to_string()).size(22).center())
                .width(90)
                .height(64)
                .style(theme::note_button)
                .on_press(Message::NotePressed(id)),
        );
    }

    let quit_btn = button(text("Quit").size(14).center())
        .padding([8, 24])
        .style(theme::secondary_button)
        .on_press(Message::Quit);

    let theme_btn = button(text("Theme").size(14).center())
        .padding([8, 16])
        .style(theme::secondary_button)
        .on_press(Message::ToggleDarkMode);

    let controls = row![quit_btn, Space::new().width(12), theme_btn].align_y(Alignment::Center);

    column![
        text("Guitar Chord Player").size(18),
        Space::new().height(16),
        buttons,
        Space::new().height(20),
        controls,
    ]
    .align_x(Alignment::Center)
    .into()
}
