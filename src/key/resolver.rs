//! Key sequence resolvers.
//!
//! Each resolver is a pure function over the head of a buffered sequence of
//! raw keystroke reports. It either fully explains a prefix of the sequence
//! ([`Resolution::Matched`]), recognizes a valid-but-incomplete prefix of an
//! idiom it knows ([`Resolution::Partial`]), or disclaims the sequence
//! ([`Resolution::NoMatch`]). Resolvers never look past the tokens they
//! report as consumed and never hold state; buffering and timing live in
//! [`ResolutionDriver`](crate::key::ResolutionDriver).

use crate::key::event::{KeyCode, KeyEvent, KeypadDirection};
use crate::modifiers::Modifiers;

/// Outcome of applying one resolver to a buffered sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// The first `consumed` raw events are fully explained by `event`.
    Matched {
        /// The resolved key event.
        event: KeyEvent,
        /// Number of raw events explained; always at least 1.
        consumed: usize,
    },
    /// The first `consumed` raw events form a valid, incomplete prefix of
    /// some idiom; more input is needed before a decision can be made.
    Partial {
        /// Number of raw events validated so far.
        consumed: usize,
    },
    /// The sequence cannot begin any idiom this resolver knows. `consumed`
    /// reports how many tokens were validated before the deviation, so the
    /// buffer knows the length of the genuine-but-now-dead prefix.
    NoMatch {
        /// Number of raw events validated before the deviation.
        consumed: usize,
    },
}

impl Resolution {
    /// Number of raw events this outcome claims responsibility for.
    #[must_use]
    pub fn consumed(&self) -> usize {
        match self {
            Self::Matched { consumed, .. }
            | Self::Partial { consumed }
            | Self::NoMatch { consumed } => *consumed,
        }
    }

    /// Check if this is a full match.
    #[must_use]
    pub fn is_matched(&self) -> bool {
        matches!(self, Self::Matched { .. })
    }

    /// Check if this is a partial match.
    #[must_use]
    pub fn is_partial(&self) -> bool {
        matches!(self, Self::Partial { .. })
    }
}

/// A stateless matcher over the head of a buffered key sequence.
pub type Resolver = fn(&[KeyEvent]) -> Resolution;

/// The resolver chain, in priority order.
///
/// The order is load-bearing for single-token overlaps: Char(0x09) is both
/// the Tab control code and Ctrl+I, and the earlier entry wins the tie.
pub const RESOLVERS: [Resolver; 4] = [
    resolve_special_char,
    resolve_control_char,
    resolve_alt,
    resolve_keypad_modifier,
];

/// Resolve control codes that are really named keys: Escape (0x1B), Tab,
/// NewLine, and 0x7F → Backspace. Incoming modifiers are preserved and any
/// label is cleared.
#[must_use]
pub fn resolve_special_char(seq: &[KeyEvent]) -> Resolution {
    let Some(head) = seq.first() else {
        return Resolution::NoMatch { consumed: 0 };
    };
    let code = match head.code {
        KeyCode::Char('\u{1b}') => KeyCode::Esc,
        KeyCode::Char('\t') => KeyCode::Tab,
        KeyCode::Char('\n') => KeyCode::Enter,
        KeyCode::Char('\u{7f}') => KeyCode::Backspace,
        _ => return Resolution::NoMatch { consumed: 0 },
    };
    Resolution::Matched {
        event: KeyEvent::new(code, head.modifiers),
        consumed: 1,
    }
}

/// Resolve ASCII control-range codepoints (0..=26) to the corresponding
/// letter with Ctrl added: 0 → Ctrl+Space, n → Ctrl + `'A' + n - 1`.
#[must_use]
pub fn resolve_control_char(seq: &[KeyEvent]) -> Resolution {
    let Some(head) = seq.first() else {
        return Resolution::NoMatch { consumed: 0 };
    };
    let KeyCode::Char(c) = head.code else {
        return Resolution::NoMatch { consumed: 0 };
    };
    let cp = c as u32;
    if cp > 26 {
        return Resolution::NoMatch { consumed: 0 };
    }
    let letter = if cp == 0 {
        ' '
    } else {
        char::from(b'A' + (cp as u8 - 1))
    };
    Resolution::Matched {
        event: KeyEvent::new(KeyCode::Char(letter), head.modifiers | Modifiers::CTRL),
        consumed: 1,
    }
}

/// Resolve the two-token Alt idiom: a literal escape character followed by
/// any other token.
///
/// A second token that is the *named* Esc key stays ambiguous (it could open
/// yet another idiom), so only the escape character is claimed as a partial
/// prefix. On a match the second token's identity is kept: plain characters
/// lose their label (kind plus codepoint capture the identity), named keys
/// keep theirs. Alt is unioned into the second token's own modifiers.
#[must_use]
pub fn resolve_alt(seq: &[KeyEvent]) -> Resolution {
    let Some(head) = seq.first() else {
        return Resolution::NoMatch { consumed: 0 };
    };
    if !head.is_escape_char() {
        return Resolution::NoMatch { consumed: 0 };
    }
    let Some(second) = seq.get(1) else {
        return Resolution::Partial { consumed: 1 };
    };
    if second.code == KeyCode::Esc {
        return Resolution::Partial { consumed: 1 };
    }
    let mut event = second.clone();
    if event.code.is_char() {
        event.label = None;
    }
    event.modifiers |= Modifiers::ALT;
    Resolution::Matched { event, consumed: 2 }
}

/// Resolve the four-token legacy keypad-modifier idiom: escape character,
/// 'O', a modifier digit, and a terminating letter 'A'..='H'.
///
/// The digit encodes `value - 1` over {Shift=1, Alt=2, Ctrl=4}, so '1'..='8'
/// are the meaningful range. Matching is incremental; a deviation at depth k
/// reports `NoMatch` with the k-1 tokens that were validated before it.
#[must_use]
pub fn resolve_keypad_modifier(seq: &[KeyEvent]) -> Resolution {
    let Some(head) = seq.first() else {
        return Resolution::NoMatch { consumed: 0 };
    };
    if !head.is_escape_char() {
        return Resolution::NoMatch { consumed: 0 };
    }
    let Some(second) = seq.get(1) else {
        return Resolution::Partial { consumed: 1 };
    };
    if second.code != KeyCode::Char('O') {
        return Resolution::NoMatch { consumed: 1 };
    }
    let Some(third) = seq.get(2) else {
        return Resolution::Partial { consumed: 2 };
    };
    let mask = match third.code {
        KeyCode::Char(c @ '1'..='8') => c as u8 - b'1',
        _ => return Resolution::NoMatch { consumed: 2 },
    };
    let Some(fourth) = seq.get(3) else {
        return Resolution::Partial { consumed: 3 };
    };
    let direction = match fourth.code {
        KeyCode::Char('A') => KeypadDirection::Up,
        KeyCode::Char('B') => KeypadDirection::Down,
        KeyCode::Char('C') => KeypadDirection::Right,
        KeyCode::Char('D') => KeypadDirection::Left,
        KeyCode::Char('E') => KeypadDirection::PageUp,
        KeyCode::Char('F') => KeypadDirection::End,
        KeyCode::Char('G') => KeypadDirection::PageDown,
        KeyCode::Char('H') => KeypadDirection::Home,
        _ => return Resolution::NoMatch { consumed: 3 },
    };
    Resolution::Matched {
        event: KeyEvent::new(KeyCode::Keypad(direction), Modifiers::from_bitmask(mask)),
        consumed: 4,
    }
}
