//! termflow - terminal input normalization
//!
//! Turns a live stream of low-level, already-tokenized terminal input
//! primitives into a clean, application-facing event stream: fully resolved
//! key presses with modifiers correctly attributed, and a coherent sequence
//! of mouse move/press/release events.
//!
//! Two independent pipelines:
//!
//! - Raw key events → [`ResolutionDriver`] (buffering + timeout policy over
//!   the stateless resolver chain in [`key`]) → resolved key events.
//! - Raw mouse events → [`MouseNormalizer`] (per-session state machine) →
//!   move/press/release events, with drags, repeated positions, and
//!   misreported releases repaired.
//!
//! Byte-level transport (reading and tokenizing the terminal device) and
//! everything downstream of the event stream are external collaborators.

// Crate-level lint configuration
#![warn(unsafe_code)]
#![allow(clippy::cast_possible_truncation)] // Intentional codepoint casts
#![allow(clippy::missing_errors_doc)] // Errors documented at the type
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::module_name_repetitions)] // Allow MouseEvent etc.
#![allow(clippy::use_self)] // Allow explicit type names in impl blocks
#![allow(clippy::items_after_statements)] // Common pattern in tests
#![allow(clippy::redundant_clone)] // Clones in tests for clarity are fine

pub mod error;
pub mod key;
pub mod modifiers;
pub mod mouse;

// Re-export core types at crate root
pub use error::{Error, Result};
pub use modifiers::Modifiers;

// Re-export key pipeline types
pub use key::{KeyCode, KeyEvent, KeypadDirection, RESOLVERS, Resolution, ResolutionDriver, Resolver};

// Re-export mouse pipeline types
pub use mouse::{ButtonState, MouseButton, MouseEvent, MouseNormalizer, Position};
