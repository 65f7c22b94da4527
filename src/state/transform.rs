/// Zoom and pan state machine for the displayed page
///
/// Every gesture callback maps to exactly one transition method. Each
/// transition consumes the current state and returns the next one, so the
/// shell applies them in delivery order without any hidden mutation.

use cgmath::{Vector2, Zero};

/// Minimum zoom scale (natural size)
pub const MIN_SCALE: f32 = 1.0;

/// Maximum zoom scale
pub const MAX_SCALE: f32 = 5.0;

/// Scale applied when double-tapping from natural size
pub const DOUBLE_TAP_SCALE: f32 = MAX_SCALE;

/// Current zoom scale and pan offset of the page image
///
/// Invariant: `MIN_SCALE <= scale <= MAX_SCALE` whenever no gesture is in
/// flight. During an active pinch the scale tracks the raw gesture magnitude
/// and is only pinned back into range by the end transition. The offset is
/// unconstrained while dragging and returns to zero together with the scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformState {
    /// Multiplicative zoom factor (1.0 = natural size)
    pub scale: f32,
    /// Pan translation in logical pixels
    pub offset: Vector2<f32>,
}

impl Default for TransformState {
    fn default() -> Self {
        Self::reset()
    }
}

impl TransformState {
    /// Natural size, centered
    pub fn reset() -> Self {
        Self {
            scale: MIN_SCALE,
            offset: Vector2::zero(),
        }
    }

    /// Double tap toggles between natural size and the double-tap zoom level
    pub fn on_double_tap(self) -> Self {
        if self.scale == MIN_SCALE {
            Self {
                scale: DOUBLE_TAP_SCALE,
                ..self
            }
        } else {
            Self::reset()
        }
    }

    /// Drag progress; `translation` is the total movement since the drag
    /// began and replaces the offset outright, it is never accumulated
    pub fn on_drag_changed(self, translation: Vector2<f32>) -> Self {
        Self {
            offset: translation,
            ..self
        }
    }

    /// Drag finished; a page at natural size snaps back to center
    pub fn on_drag_ended(self) -> Self {
        if self.scale <= MIN_SCALE {
            Self::reset()
        } else {
            self
        }
    }

    /// Pinch progress; `magnification` is the raw gesture magnitude
    ///
    /// The branch is decided from the scale as it was before this call, so a
    /// magnification pushed past the limit is stored as-is and only pinned on
    /// the next callback or by `on_magnify_ended`.
    pub fn on_magnify_changed(self, magnification: f32) -> Self {
        if self.scale >= MIN_SCALE && self.scale <= MAX_SCALE {
            Self {
                scale: magnification,
                ..self
            }
        } else if self.scale > MAX_SCALE {
            Self {
                scale: MAX_SCALE,
                ..self
            }
        } else {
            self
        }
    }

    /// Pinch finished; settle the scale back into range
    pub fn on_magnify_ended(self) -> Self {
        if self.scale > MAX_SCALE {
            Self {
                scale: MAX_SCALE,
                ..self
            }
        } else if self.scale <= MIN_SCALE {
            Self::reset()
        } else {
            self
        }
    }

    /// Step zoom in by one level, saturating at the maximum
    pub fn zoom_in(self) -> Self {
        let mut next = self;
        if next.scale < MAX_SCALE {
            next.scale += 1.0;
        }
        if next.scale > MAX_SCALE {
            next.scale = MAX_SCALE;
        }
        next
    }

    /// Step zoom out by one level; reaching natural size recenters the page
    pub fn zoom_out(self) -> Self {
        let mut next = self;
        if next.scale > MIN_SCALE {
            next.scale -= 1.0;
        }
        if next.scale <= MIN_SCALE {
            return Self::reset();
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vec2(x: f32, y: f32) -> Vector2<f32> {
        Vector2::new(x, y)
    }

    #[test]
    fn test_reset_returns_to_natural_size() {
        let reset = TransformState::reset();

        assert_eq!(reset.scale, MIN_SCALE);
        assert_eq!(reset.offset, Vector2::zero());
        assert_eq!(TransformState::default(), reset);
    }

    #[test]
    fn test_double_tap_toggles_between_natural_and_max() {
        let resting = TransformState::reset();

        let zoomed = resting.on_double_tap();
        assert_eq!(zoomed.scale, DOUBLE_TAP_SCALE);
        assert_eq!(zoomed.offset, resting.offset);

        assert_eq!(zoomed.on_double_tap(), TransformState::reset());
    }

    #[test]
    fn test_double_tap_resets_from_intermediate_zoom() {
        let state = TransformState {
            scale: 2.5,
            offset: vec2(10.0, 20.0),
        };

        assert_eq!(state.on_double_tap(), TransformState::reset());
    }

    #[test]
    fn test_drag_replaces_offset_with_total_translation() {
        let state = TransformState {
            scale: 3.0,
            offset: vec2(5.0, 5.0),
        };

        let dragged = state.on_drag_changed(vec2(18.0, -4.0));
        assert_eq!(dragged.offset, vec2(18.0, -4.0));
        assert_eq!(dragged.scale, 3.0);

        // A later callback replaces the offset again; it never accumulates.
        let dragged = dragged.on_drag_changed(vec2(2.0, 2.0));
        assert_eq!(dragged.offset, vec2(2.0, 2.0));
    }

    #[test]
    fn test_drag_end_recenters_at_natural_size() {
        let state = TransformState::reset().on_drag_changed(vec2(30.0, 30.0));

        assert_eq!(state.on_drag_ended(), TransformState::reset());
    }

    #[test]
    fn test_drag_end_keeps_offset_when_zoomed() {
        let state = TransformState {
            scale: 4.0,
            offset: vec2(30.0, -12.0),
        };

        assert_eq!(state.on_drag_ended(), state);
    }

    #[test]
    fn test_magnify_tracks_raw_value_while_in_range() {
        let state = TransformState::reset().on_magnify_changed(3.2);

        assert_eq!(state.scale, 3.2);
        assert_eq!(state.on_magnify_ended(), state);
    }

    #[test]
    fn test_magnify_clamp_is_delayed_until_gesture_end() {
        // A raw magnification above the limit is stored unclamped first...
        let state = TransformState::reset().on_magnify_changed(9.0);
        assert_eq!(state.scale, 9.0);

        // ...and only pinned to the maximum when the pinch ends.
        assert_eq!(state.on_magnify_ended().scale, MAX_SCALE);
    }

    #[test]
    fn test_magnify_pins_overscaled_state_on_next_change() {
        let state = TransformState::reset().on_magnify_changed(9.0);

        assert_eq!(state.on_magnify_changed(9.5).scale, MAX_SCALE);
    }

    #[test]
    fn test_magnify_holds_undersized_state_mid_gesture() {
        let state = TransformState::reset().on_magnify_changed(0.4);
        assert_eq!(state.scale, 0.4);

        // Below natural size nothing is applied until the gesture ends.
        assert_eq!(state.on_magnify_changed(3.0), state);
    }

    #[test]
    fn test_magnify_end_recenters_below_natural_size() {
        let state = TransformState::reset().on_magnify_changed(0.4);

        assert_eq!(state.on_magnify_ended(), TransformState::reset());
    }

    #[test]
    fn test_button_zoom_round_trip_is_identity() {
        let state = TransformState::reset().zoom_in().zoom_out();

        assert_eq!(state, TransformState::reset());
    }

    #[test]
    fn test_button_zoom_never_leaves_bounds() {
        let mut state = TransformState::reset();

        for _ in 0..8 {
            state = state.zoom_in();
            assert!(state.scale <= MAX_SCALE);
        }
        assert_eq!(state.scale, MAX_SCALE);

        for _ in 0..8 {
            state = state.zoom_out();
            assert!(state.scale >= MIN_SCALE);
        }
        assert_eq!(state, TransformState::reset());
    }

    #[test]
    fn test_zoom_out_keeps_offset_while_still_zoomed() {
        let state = TransformState {
            scale: 3.0,
            offset: vec2(10.0, 10.0),
        };

        let out = state.zoom_out();
        assert_eq!(out.scale, 2.0);
        assert_eq!(out.offset, vec2(10.0, 10.0));
    }

    #[test]
    fn test_zoom_out_recenters_fractional_scales() {
        let state = TransformState {
            scale: 1.5,
            offset: vec2(12.0, 0.0),
        };

        assert_eq!(state.zoom_out(), TransformState::reset());
    }

    #[test]
    fn test_zoom_in_clamps_fractional_overshoot() {
        let state = TransformState {
            scale: 4.5,
            offset: Vector2::zero(),
        };

        assert_eq!(state.zoom_in().scale, MAX_SCALE);
    }
}
