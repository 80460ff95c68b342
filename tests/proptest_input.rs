//! Property-based tests for the resolver chain and mouse normalizer.
//!
//! Verifies the structural invariants: resolvers never claim more tokens
//! than supplied, the driver never drops or reorders input, and normalized
//! mouse streams never contain click states.

use proptest::prelude::*;
use termflow::{
    ButtonState, KeyCode, KeyEvent, Modifiers, MouseButton, MouseEvent, MouseNormalizer, Position,
    RESOLVERS, ResolutionDriver,
};

// ============================================================================
// Strategies
// ============================================================================

fn modifiers_strategy() -> impl Strategy<Value = Modifiers> {
    (0u8..8).prop_map(Modifiers::from_bitmask)
}

/// Generate raw keystroke reports biased toward the interesting range:
/// control codes, the escape character, and the tokens of the keypad idiom.
fn raw_key_strategy() -> impl Strategy<Value = KeyEvent> {
    prop_oneof![
        // Control range, including the Esc/Tab/NewLine overlaps
        (0u32..=27).prop_map(|n| KeyEvent::char(char::from_u32(n).unwrap())),
        // Keypad idiom alphabet
        prop::sample::select(vec!['O', '1', '8', 'A', 'H', 'Z', '0', '9'])
            .prop_map(KeyEvent::char),
        // Printable characters
        prop::char::range(' ', '~').prop_map(KeyEvent::char),
        // Named keys
        Just(KeyEvent::key(KeyCode::Esc)),
        (1u8..=12).prop_map(|n| KeyEvent::key(KeyCode::F(n))),
        Just(KeyEvent::key(KeyCode::Delete)),
    ]
}

fn position_strategy() -> impl Strategy<Value = Position> {
    (0u32..6, 0u32..6).prop_map(|(x, y)| Position::new(x, y))
}

fn button_strategy() -> impl Strategy<Value = MouseButton> {
    prop::sample::select(vec![
        MouseButton::Left,
        MouseButton::Middle,
        MouseButton::Right,
    ])
}

fn state_strategy() -> impl Strategy<Value = ButtonState> {
    prop::sample::select(vec![
        ButtonState::Pressed,
        ButtonState::Released,
        ButtonState::Clicked,
        ButtonState::DoubleClicked,
        ButtonState::TripleClicked,
    ])
}

fn raw_mouse_strategy() -> impl Strategy<Value = MouseEvent> {
    prop_oneof![
        position_strategy().prop_map(MouseEvent::Move),
        (
            position_strategy(),
            button_strategy(),
            state_strategy(),
            modifiers_strategy(),
        )
            .prop_map(|(position, button, state, modifiers)| MouseEvent::Action {
                position,
                button,
                state,
                modifiers,
            }),
    ]
}

// ============================================================================
// Resolver chain invariants
// ============================================================================

proptest! {
    /// `consumed` never exceeds the length of the supplied sequence, for
    /// every resolver.
    #[test]
    fn prop_consumed_bounded_by_input_len(
        seq in prop::collection::vec(raw_key_strategy(), 0..6)
    ) {
        for resolver in RESOLVERS {
            let outcome = resolver(&seq);
            prop_assert!(outcome.consumed() <= seq.len());
        }
    }

    /// A full match always claims at least one token.
    #[test]
    fn prop_matched_consumes_at_least_one(
        seq in prop::collection::vec(raw_key_strategy(), 1..6)
    ) {
        for resolver in RESOLVERS {
            if let termflow::Resolution::Matched { consumed, .. } = resolver(&seq) {
                prop_assert!(consumed >= 1);
            }
        }
    }

    /// Resolvers are pure: the same input yields the same outcome.
    #[test]
    fn prop_resolvers_are_pure(
        seq in prop::collection::vec(raw_key_strategy(), 0..6)
    ) {
        for resolver in RESOLVERS {
            prop_assert_eq!(resolver(&seq), resolver(&seq));
        }
    }
}

// ============================================================================
// Driver invariants
// ============================================================================

proptest! {
    /// The driver settles in bounded time and never invents events: every
    /// emitted event explains at least one raw token, so the output count is
    /// bounded by the input count.
    #[test]
    fn prop_driver_settles_and_bounds_output(
        seq in prop::collection::vec(raw_key_strategy(), 0..12)
    ) {
        let mut driver = ResolutionDriver::new();
        let mut out = Vec::new();
        let input_len = seq.len();
        for event in seq {
            out.extend(driver.push(event));
        }
        // Each expire consumes at least one pending token, so a bounded
        // number of windows settles any buffer.
        let mut guard = 0;
        while !driver.is_idle() {
            out.extend(driver.expire());
            guard += 1;
            prop_assert!(guard <= input_len, "expire loop failed to settle");
        }
        prop_assert!(out.len() <= input_len);
        prop_assert!(driver.is_idle());
    }

    /// Plain printable text is never transformed or reordered.
    #[test]
    fn prop_printable_text_passes_through(text in "[ -~]{0,16}") {
        let mut driver = ResolutionDriver::new();
        let mut out = Vec::new();
        for c in text.chars() {
            out.extend(driver.push(KeyEvent::char(c)));
        }
        prop_assert_eq!(
            out,
            text.chars().map(KeyEvent::char).collect::<Vec<_>>()
        );
        prop_assert!(driver.is_idle());
    }
}

// ============================================================================
// Mouse normalizer invariants
// ============================================================================

proptest! {
    /// Normalized action events only ever carry Pressed or Released, and no
    /// single call produces more than three events.
    #[test]
    fn prop_normalized_stream_is_canonical(
        raw in prop::collection::vec(raw_mouse_strategy(), 0..24)
    ) {
        let mut norm = MouseNormalizer::new();
        for event in raw {
            let out = norm.process(event);
            prop_assert!(out.len() <= 3);
            for resolved in out {
                if let MouseEvent::Action { state, .. } = resolved {
                    prop_assert!(matches!(
                        state,
                        ButtonState::Pressed | ButtonState::Released
                    ));
                }
            }
        }
    }

    /// Consecutive emitted moves never repeat a position.
    #[test]
    fn prop_no_duplicate_consecutive_moves(
        raw in prop::collection::vec(raw_mouse_strategy(), 0..24)
    ) {
        let mut norm = MouseNormalizer::new();
        let mut last_move: Option<Position> = None;
        for event in raw {
            for resolved in norm.process(event) {
                if let MouseEvent::Move(position) = resolved {
                    prop_assert_ne!(Some(position), last_move);
                    last_move = Some(position);
                }
            }
        }
    }

    /// Every release in the output is preceded by an unreleased press of the
    /// same button.
    #[test]
    fn prop_releases_pair_with_presses(
        raw in prop::collection::vec(raw_mouse_strategy(), 0..24)
    ) {
        let mut norm = MouseNormalizer::new();
        let mut held: Option<MouseButton> = None;
        for event in raw {
            for resolved in norm.process(event) {
                match resolved {
                    MouseEvent::Action {
                        state: ButtonState::Pressed,
                        button,
                        ..
                    } => held = Some(button),
                    MouseEvent::Action {
                        state: ButtonState::Released,
                        button,
                        ..
                    } => {
                        prop_assert_eq!(held, Some(button));
                        held = None;
                    }
                    _ => {}
                }
            }
        }
    }
}
