//! Mouse input normalization.
//!
//! Raw mouse reports flow straight into [`MouseNormalizer`]; there is no
//! buffering layer because mouse reports are never ambiguous prefixes of
//! one another, only lossy. The pipeline is independent of the key pipeline
//! and shares no state with it.

mod event;
mod normalizer;

pub use event::{ButtonState, MouseButton, MouseEvent, Position};
pub use normalizer::MouseNormalizer;
