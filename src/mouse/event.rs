//! Mouse event types.

use crate::modifiers::Modifiers;

/// A cell position in the terminal grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    /// Column.
    pub x: u32,
    /// Row.
    pub y: u32,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

impl From<(u32, u32)> for Position {
    fn from((x, y): (u32, u32)) -> Self {
        Self { x, y }
    }
}

/// Mouse button.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button.
    Left,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button.
    Right,
}

/// Button state carried by a raw action report.
///
/// After normalization only `Pressed` and `Released` survive; the click
/// variants are expanded into synthetic press/release pairs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ButtonState {
    /// Button went down.
    Pressed,
    /// Button went up.
    Released,
    /// Terminal-reported single click.
    Clicked,
    /// Terminal-reported double click.
    DoubleClicked,
    /// Terminal-reported triple click.
    TripleClicked,
}

impl ButtonState {
    /// Check if this is one of the click variants.
    #[must_use]
    pub fn is_click(&self) -> bool {
        matches!(self, Self::Clicked | Self::DoubleClicked | Self::TripleClicked)
    }
}

/// A mouse event.
///
/// Serves as both the raw shape delivered by the terminal source and the
/// resolved shape produced by
/// [`MouseNormalizer`](crate::mouse::MouseNormalizer); normalized streams
/// never contain an `Action` with a click state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MouseEvent {
    /// Pointer moved.
    Move(Position),
    /// Button activity at a position.
    Action {
        /// Where the action happened.
        position: Position,
        /// Which button.
        button: MouseButton,
        /// What the button did.
        state: ButtonState,
        /// Modifier keys held.
        modifiers: Modifiers,
    },
}

impl MouseEvent {
    /// Create a move event.
    #[must_use]
    pub fn move_to(x: u32, y: u32) -> Self {
        Self::Move(Position::new(x, y))
    }

    /// Create an action event with no modifiers.
    #[must_use]
    pub fn action(position: Position, button: MouseButton, state: ButtonState) -> Self {
        Self::Action {
            position,
            button,
            state,
            modifiers: Modifiers::empty(),
        }
    }

    /// Create a press event with no modifiers.
    #[must_use]
    pub fn press(position: Position, button: MouseButton) -> Self {
        Self::action(position, button, ButtonState::Pressed)
    }

    /// Create a release event with no modifiers.
    #[must_use]
    pub fn release(position: Position, button: MouseButton) -> Self {
        Self::action(position, button, ButtonState::Released)
    }

    /// Set modifier keys on an action; moves are unchanged.
    #[must_use]
    pub fn with_modifiers(mut self, mods: Modifiers) -> Self {
        if let Self::Action { modifiers, .. } = &mut self {
            *modifiers = mods;
        }
        self
    }

    /// The position this event reports.
    #[must_use]
    pub fn position(&self) -> Position {
        match self {
            Self::Move(position) | Self::Action { position, .. } => *position,
        }
    }

    /// Check if this is a move event.
    #[must_use]
    pub fn is_move(&self) -> bool {
        matches!(self, Self::Move(_))
    }

    /// Check if this is a press action.
    #[must_use]
    pub fn is_press(&self) -> bool {
        matches!(
            self,
            Self::Action {
                state: ButtonState::Pressed,
                ..
            }
        )
    }

    /// Check if this is a release action.
    #[must_use]
    pub fn is_release(&self) -> bool {
        matches!(
            self,
            Self::Action {
                state: ButtonState::Released,
                ..
            }
        )
    }
}
