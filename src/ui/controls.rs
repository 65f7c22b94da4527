use iced::widget::{button, container, row, text};
use iced::{Alignment, Element};

use crate::Message;

/// Zoom-out / reset / zoom-in button bar shown along the bottom edge
pub fn control_bar() -> Element<'static, Message> {
    let control = |label: &'static str, message: Message| {
        button(text(label).size(18)).padding(10).on_press(message)
    };

    container(
        row![
            control("−", Message::ZoomOut),
            control("1:1", Message::ResetZoom),
            control("+", Message::ZoomIn),
        ]
        .spacing(8)
        .align_y(Alignment::Center),
    )
    .padding(12)
    .into()
}
