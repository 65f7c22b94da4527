use iced::mouse::{self, Cursor};
use iced::touch::{self, Finger};
use iced::widget::canvas::{self, Program};
use iced::{Color, Point, Rectangle, Renderer, Size, Theme, Vector};
use std::time::Instant;

use cgmath::Vector2;

use crate::assets::LoadedAsset;
use crate::state::transform::TransformState;
use crate::Message;

/// Drag distance in logical pixels before a press becomes a pan
///
/// Large enough to ignore finger jitter on touch screens, small enough to
/// feel responsive. Presses that stay inside this radius count as taps.
const DRAG_THRESHOLD: f32 = 8.0;

/// Maximum delay between two taps that still counts as a double tap
const DOUBLE_TAP_WINDOW_MS: u128 = 350;

/// Margin between the fitted page image and the window edge
const PAGE_MARGIN: f32 = 16.0;

/// Canvas that renders the current page and translates pointer input into
/// gesture messages
pub struct PageCanvas {
    /// Decoded page bitmap (None while assets load or when one is missing)
    pub asset: Option<LoadedAsset>,
    /// Transform applied to the page
    pub transform: TransformState,
}

impl Program<Message> for PageCanvas {
    type State = GestureState;

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        let Some(asset) = &self.asset else {
            // Placeholder while the page bitmap is not available
            frame.fill_rectangle(
                Point::ORIGIN,
                frame.size(),
                Color::from_rgb(0.12, 0.12, 0.13),
            );
            return vec![frame.into_geometry()];
        };

        let fitted = fit_rectangle(
            (asset.width as f32, asset.height as f32),
            frame.size(),
            PAGE_MARGIN,
        );

        frame.with_save(|frame| {
            let center = frame.center();

            // Pan first, then zoom about the window center
            frame.translate(Vector::new(
                self.transform.offset.x,
                self.transform.offset.y,
            ));
            frame.translate(Vector::new(center.x, center.y));
            frame.scale(self.transform.scale);
            frame.translate(Vector::new(-center.x, -center.y));

            frame.draw_image(fitted, canvas::Image::new(asset.handle.clone()));
        });

        vec![frame.into_geometry()]
    }

    fn update(
        &self,
        state: &mut Self::State,
        event: canvas::Event,
        _bounds: Rectangle,
        cursor: Cursor,
    ) -> (canvas::event::Status, Option<Message>) {
        match event {
            // Left button starts a press that may become a pan or a tap
            canvas::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => {
                if let Some(position) = cursor.position() {
                    state.begin_press(position);
                    return (canvas::event::Status::Captured, None);
                }
            }

            canvas::Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                if let Some(position) = cursor.position() {
                    if let Some(message) = state.track_pointer(position) {
                        return (canvas::event::Status::Captured, Some(message));
                    }
                }
            }

            canvas::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                let message = state.end_press();
                if message.is_some() {
                    return (canvas::event::Status::Captured, message);
                }
            }

            // Mouse wheel steps through the discrete zoom levels
            canvas::Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                let notches = match delta {
                    mouse::ScrollDelta::Lines { y, .. } => y,
                    mouse::ScrollDelta::Pixels { y, .. } => y / 40.0,
                };

                if notches > 0.0 {
                    return (canvas::event::Status::Captured, Some(Message::ZoomIn));
                } else if notches < 0.0 {
                    return (canvas::event::Status::Captured, Some(Message::ZoomOut));
                }
            }

            // Touch input: one finger pans, two fingers pinch
            canvas::Event::Touch(touch_event) => {
                let message = state.track_touch(touch_event);
                return (canvas::event::Status::Captured, message);
            }

            _ => {}
        }

        (canvas::event::Status::Ignored, None)
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: Cursor,
    ) -> mouse::Interaction {
        if state.is_dragging() {
            mouse::Interaction::Grabbing
        } else if cursor.is_over(bounds) {
            mouse::Interaction::Grab
        } else {
            mouse::Interaction::default()
        }
    }
}

/// Per-interaction pointer state tracked by the canvas
#[derive(Debug, Clone, Default)]
pub struct GestureState {
    /// Where the active press started
    press_origin: Option<Point>,
    /// True once the press has moved past the drag threshold
    dragging: bool,
    /// Completion time of the previous tap, for double-tap detection
    last_tap: Option<Instant>,
    /// Active touch points, in press order
    touches: Vec<(Finger, Point)>,
    /// Finger distance at the moment the pinch began
    pinch_start_distance: Option<f32>,
}

impl GestureState {
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    fn begin_press(&mut self, position: Point) {
        self.press_origin = Some(position);
        self.dragging = false;
    }

    /// Single-pointer move; emits the total translation once past the
    /// drag threshold
    fn track_pointer(&mut self, position: Point) -> Option<Message> {
        let origin = self.press_origin?;

        if !self.dragging && origin.distance(position) <= DRAG_THRESHOLD {
            return None;
        }

        self.dragging = true;
        let translation = position - origin;
        Some(Message::DragChanged(Vector2::new(
            translation.x,
            translation.y,
        )))
    }

    /// Single-pointer release; ends a pan or registers a (double) tap
    fn end_press(&mut self) -> Option<Message> {
        let was_pressed = self.press_origin.take().is_some();

        if self.dragging {
            self.dragging = false;
            self.last_tap = None;
            return Some(Message::DragEnded);
        }

        if !was_pressed {
            return None;
        }

        match self.last_tap.take() {
            Some(previous) if previous.elapsed().as_millis() <= DOUBLE_TAP_WINDOW_MS => {
                Some(Message::DoubleTapped)
            }
            _ => {
                self.last_tap = Some(Instant::now());
                None
            }
        }
    }

    fn track_touch(&mut self, event: touch::Event) -> Option<Message> {
        match event {
            touch::Event::FingerPressed { id, position } => {
                self.upsert_touch(id, position);
                match self.touches.len() {
                    1 => {
                        self.begin_press(position);
                        None
                    }
                    2 => {
                        // A second finger turns the interaction into a pinch
                        self.press_origin = None;
                        let was_dragging = self.dragging;
                        self.dragging = false;
                        self.pinch_start_distance = self.finger_distance();
                        was_dragging.then_some(Message::DragEnded)
                    }
                    _ => None,
                }
            }

            touch::Event::FingerMoved { id, position } => {
                self.upsert_touch(id, position);

                if let Some(start) = self.pinch_start_distance {
                    // Raw magnification is the growth of the finger span
                    // since the pinch began
                    let current = self.finger_distance()?;
                    (start > f32::EPSILON).then(|| Message::MagnifyChanged(current / start))
                } else if self.touches.len() == 1 {
                    self.track_pointer(position)
                } else {
                    None
                }
            }

            touch::Event::FingerLifted { id, .. } | touch::Event::FingerLost { id, .. } => {
                self.touches.retain(|(finger, _)| *finger != id);

                if self.pinch_start_distance.is_some() {
                    if self.touches.len() < 2 {
                        self.pinch_start_distance = None;
                        return Some(Message::MagnifyEnded);
                    }
                    None
                } else {
                    self.end_press()
                }
            }
        }
    }

    fn upsert_touch(&mut self, id: Finger, position: Point) {
        if let Some(entry) = self.touches.iter_mut().find(|(finger, _)| *finger == id) {
            entry.1 = position;
        } else {
            self.touches.push((id, position));
        }
    }

    /// Distance between the first two active touch points
    fn finger_distance(&self) -> Option<f32> {
        if self.touches.len() < 2 {
            return None;
        }

        let a = self.touches[0].1;
        let b = self.touches[1].1;
        Some(a.distance(b))
    }
}

/// Aspect-fit an image into the window, centered, honoring the margin
fn fit_rectangle(image: (f32, f32), canvas: Size, margin: f32) -> Rectangle {
    let available = Size::new(
        (canvas.width - 2.0 * margin).max(1.0),
        (canvas.height - 2.0 * margin).max(1.0),
    );

    let ratio = (available.width / image.0).min(available.height / image.1);
    let fitted = Size::new(image.0 * ratio, image.1 * ratio);

    Rectangle::new(
        Point::new(
            (canvas.width - fitted.width) / 2.0,
            (canvas.height - fitted.height) / 2.0,
        ),
        fitted,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_preserves_aspect_ratio() {
        let rect = fit_rectangle((200.0, 100.0), Size::new(432.0, 432.0), 16.0);

        assert_eq!(rect.width, 400.0);
        assert_eq!(rect.height, 200.0);
    }

    #[test]
    fn test_fit_centers_the_image() {
        let rect = fit_rectangle((100.0, 100.0), Size::new(500.0, 300.0), 50.0);

        assert_eq!(rect.width, 200.0);
        assert_eq!(rect.height, 200.0);
        assert_eq!(rect.x, 150.0);
        assert_eq!(rect.y, 50.0);
    }

    #[test]
    fn test_fit_survives_degenerate_window() {
        let rect = fit_rectangle((100.0, 100.0), Size::new(10.0, 10.0), 16.0);

        assert!(rect.width > 0.0);
        assert!(rect.height > 0.0);
    }
}
