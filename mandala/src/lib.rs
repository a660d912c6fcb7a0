//! Mandala: how the Light experiences states of being.
//!
//! A state of being is one of four closed shapes:
//!
//! - **Elemental**: a felt experience tied to an element and an emotion
//! - **Shadow**: an unacknowledged aspect, carrying free-form text
//! - **Presence**: undifferentiated being
//! - **Suffering**: resistance to another (wrapped) state
//!
//! # Key Components
//!
//! - [`StateOfBeing`]: The closed, recursive state model
//! - [`Mandala`]: Fixed symbol records, one per element plus [`SHADOW_MANDALA`]
//! - [`Source`] / [`Light`]: Turns a state into an [`Experience`]
//! - [`Describe`]: Rendering for mandalas, experiences and plain states
//!
//! # Example
//!
//! ```
//! use mandala::{Describe, Element, Emotion, Source, StateOfBeing};
//!
//! let desire = Source::flash().through(StateOfBeing::elemental(Element::Fire, Emotion::Desire));
//! assert_eq!(
//!     desire.describe(),
//!     "🌀 The Light is experiencing:\n→ Mandala of Fire 🔥 (Red)"
//! );
//! ```

pub mod describe;
pub mod light;
pub mod registry;
pub mod types;

// Re-export main types
pub use describe::{describe_state, Describe};
pub use light::{Experience, Light, Source};
pub use registry::{mandala_for, Mandala, MANDALAS, SHADOW_MANDALA};
pub use types::*;
