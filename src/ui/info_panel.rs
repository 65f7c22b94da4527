use iced::widget::{container, mouse_area, row, text};
use iced::{Alignment, Element};

use crate::state::transform::TransformState;
use crate::Message;

/// Hotspot toggle plus live transform readouts, shown along the top edge
///
/// The readouts are hidden until the hotspot is pressed; the values update
/// on every re-render, so the panel always shows the current transform.
pub fn info_panel(transform: TransformState, visible: bool) -> Element<'static, Message> {
    let hotspot = mouse_area(text("◎").size(26)).on_press(Message::ToggleInfoPanel);

    let mut content = row![hotspot].spacing(16).align_y(Alignment::Center);

    if visible {
        content = content
            .push(text(format!("scale {:.2}", transform.scale)).size(14))
            .push(text(format!("x {:+.1}", transform.offset.x)).size(14))
            .push(text(format!("y {:+.1}", transform.offset.y)).size(14));
    }

    container(content).padding(10).into()
}
