//! Modal error dialog component
//!
//! Blocks the chord pad until dismissed. The backdrop intercepts every
//! mouse event; clicking it dismisses the dialog, as do OK and Escape/Enter
//! (handled by the keyboard update path).

use iced::mouse::Interaction;
use iced::widget::{Space, button, column, container, mouse_area, opaque, row, text};
use iced::{Alignment, Color, Element, Fill};

use crate::app::Message;
use crate::ui::theme;

/// Build the error dialog over a dimmed backdrop
pub fn view(message: &str) -> Element<'static, Message> {
    let title = text("Error")
        .size(18)
        .font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..Default::default()
        })
        .style(|theme: &iced::Theme| text::Style {
            color: Some(theme::danger(theme)),
        });

    let detail = text(message.to_string())
        .size(14)
        .style(|theme: &iced::Theme| text::Style {
            color: Some(theme::text_secondary(theme)),
        });

    let ok_btn = button(text("OK").size(14).center())
        .padding([8, 28])
        .style(|theme: &iced::Theme, status| {
            let bg = match status {
                button::Status::Hovered | button::Status::Pressed => theme::hover_bg(theme),
                _ => theme::surface(theme),
            };
            button::Style {
                background: Some(iced::Background::Color(bg)),
                text_color: theme::text_primary(theme),
                border: iced::Border {
                    radius: 8.0.into(),
                    width: 1.0,
                    color: theme::divider(theme),
                },
                ..Default::default()
            }
        })
        .on_press(Message::DismissError);

    let buttons = row![Space::new().width(Fill), ok_btn].align_y(Alignment::Center);

    let dialog_content = column![
        title,
        Space::new().height(8),
        detail,
        Space::new().height(20),
        buttons,
    ]
    .width(380)
    .padding(24);

    let dialog_box = container(dialog_content).style(|theme: &iced::Theme| container::Style {
        background: Some(iced::Background::Color(theme::surface_elevated(theme))),
        border: iced::Border {
            radius: 12.0.into(),
            width: 1.0,
            color: theme::divider(theme),
        },
        ..Default::default()
    });

    // Backdrop with event interception
    let backdrop_content = container(dialog_box)
        .width(Fill)
        .height(Fill)
        .center_x(Fill)
        .center_y(Fill)
        .style(|_theme| container::Style {
            background: Some(iced::Background::Color(Color::from_rgba(0.0, 0.0, 0.0, 0.5))),
            ..Default::default()
        });

    // mouse_area captures backdrop clicks (clicking outside dismisses),
    // opaque blocks events from reaching the pad underneath
    let event_blocker = mouse_area(backdrop_content)
        .interaction(Interaction::Idle)
        .on_press(Message::DismissError);

    opaque(event_blocker).into()
}
