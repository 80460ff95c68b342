//! Mouse event normalization.
//!
//! Terminal mouse-reporting protocols are lossy: release reports are not
//! trusted to identify which button went up, intermediate positions during a
//! drag may be dropped, and click reports conflate a press/release pair into
//! one event. The normalizer repairs the stream under two conservative
//! assumptions: at most one button is down at a time, and any release ends
//! whichever button that is.

use crate::modifiers::Modifiers;
use crate::mouse::event::{ButtonState, MouseButton, MouseEvent, Position};

/// Per-session state machine converting raw positional/button reports into
/// a canonical stream of move/press/release events.
///
/// One instance per input session; state is never shared across sessions.
/// Each call returns the ordered list of resolved events, at most three: a
/// priming move, then up to a press/release pair.
#[derive(Clone, Debug, Default)]
pub struct MouseNormalizer {
    last_position: Option<Position>,
    pressed_button: Option<MouseButton>,
}

impl MouseNormalizer {
    /// Create a normalizer for a fresh input session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new session on the same allocation.
    pub fn reset(&mut self) {
        self.last_position = None;
        self.pressed_button = None;
    }

    /// Normalize one raw mouse event.
    pub fn process(&mut self, raw: MouseEvent) -> Vec<MouseEvent> {
        match raw {
            MouseEvent::Move(position) => self.process_move(position),
            MouseEvent::Action {
                position,
                button,
                state,
                modifiers,
            } => self.process_action(position, button, state, modifiers),
        }
    }

    /// Normalize a raw move report. Repeated reports of the same position
    /// are pure jitter and produce nothing.
    pub fn process_move(&mut self, position: Position) -> Vec<MouseEvent> {
        if self.last_position == Some(position) {
            return Vec::new();
        }
        self.last_position = Some(position);
        vec![MouseEvent::Move(position)]
    }

    /// Normalize a raw button report.
    pub fn process_action(
        &mut self,
        position: Position,
        button: MouseButton,
        state: ButtonState,
        modifiers: Modifiers,
    ) -> Vec<MouseEvent> {
        let mut resolved = Vec::new();

        // Any action away from the last known position implies motion the
        // terminal never reported; synthesize it.
        let moved = self.last_position != Some(position);
        if moved {
            self.last_position = Some(position);
            resolved.push(MouseEvent::Move(position));
        }

        match state {
            ButtonState::Pressed => {
                // A press while a button is held and the pointer moved is a
                // drag continuation, not a new click; the synthetic move
                // above already carries the information.
                let drag_continuation = self.pressed_button.is_some() && moved;
                if !drag_continuation {
                    resolved
                        .push(MouseEvent::press(position, button).with_modifiers(modifiers));
                    self.pressed_button = Some(button);
                }
            }
            ButtonState::Released => {
                if let Some(held) = self.pressed_button.take() {
                    // Release reports misidentify the button; the one we
                    // recorded at press time is the one that went up.
                    resolved.push(
                        MouseEvent::release(position, held).with_modifiers(modifiers),
                    );
                }
                // No press on record: the stray release is absorbed.
            }
            ButtonState::Clicked | ButtonState::DoubleClicked | ButtonState::TripleClicked => {
                resolved.push(MouseEvent::press(position, button).with_modifiers(modifiers));
                resolved.push(MouseEvent::release(position, button).with_modifiers(modifiers));
                self.pressed_button = None;
            }
        }

        resolved
    }
}
