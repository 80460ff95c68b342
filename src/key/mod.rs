//! Key input normalization.
//!
//! Terminal keystrokes arrive as short, often-ambiguous multi-token escape
//! idioms: a literal Escape character is a prefix of dozens of other
//! sequences. This module resolves them in two layers: a chain of pure,
//! stateless resolvers ([`resolver`]) and a buffering driver ([`driver`])
//! that owns the pending tokens and the escape-disambiguation window.

mod driver;
mod event;
mod resolver;

pub use driver::ResolutionDriver;
pub use event::{KeyCode, KeyEvent, KeypadDirection};
pub use resolver::{
    RESOLVERS, Resolution, Resolver, resolve_alt, resolve_control_char,
    resolve_keypad_modifier, resolve_special_char,
};
