//! Application view rendering

use iced::widget::{Space, container, stack};
use iced::{Element, Fill};

use super::App;
use super::message::Message;
use crate::ui::{components, theme};

impl App {
    /// Build the window contents
    pub fn view(&self) -> Element<'_, Message> {
        let pad = components::chord_pad::view(&self.core.notes);

        let main_layout = container(pad)
            .width(Fill)
            .height(Fill)
            .center_x(Fill)
            .center_y(Fill)
            .style(theme::main_content);

        // Error dialog overlay (empty space if not visible)
        let dialog_overlay: Element<'_, Message> = if let Some(message) = &self.ui.error_dialog {
            components::error_dialog::view(message)
        } else {
            Space::new().width(0).height(0).into()
        };

        stack![main_layout, dialog_overlay]
            .width(Fill)
            .height(Fill)
            .into()
    }
}
