//! The Light and the experiences it has.
//!
//! [`Source::flash`] mints a [`Light`]; shining it [`through`](Light::through)
//! a state of being yields an [`Experience`] with the state's mandala resolved.

use serde::Serialize;
use tracing::debug;

use crate::registry::{mandala_for, Mandala, SHADOW_MANDALA};
use crate::types::StateOfBeing;

/// Where every Light comes from.
pub struct Source;

impl Source {
    /// Mint a Light.
    pub fn flash() -> Light {
        Light
    }
}

/// Stateless capability turning states of being into experiences.
///
/// Carries no identity; any two Lights are interchangeable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Light;

impl Light {
    /// Experience a state of being.
    ///
    /// Elemental states resolve their element's mandala, Shadow states the
    /// shadow mandala. Presence and Suffering carry none; a Suffering state
    /// hides whatever mandala its inner state would have.
    pub fn through(&self, state: StateOfBeing) -> Experience {
        let mandala = match &state {
            StateOfBeing::Elemental { element, .. } => Some(mandala_for(*element)),
            StateOfBeing::Shadow { .. } => Some(&SHADOW_MANDALA),
            StateOfBeing::Presence | StateOfBeing::Suffering { .. } => None,
        };

        debug!(
            kind = state.kind(),
            depth = state.depth(),
            mandala = mandala.map_or("none", |m| m.label),
            "Light passing through state"
        );

        Experience {
            light: Source::flash(),
            state,
            mandala,
        }
    }
}

/// A state of being as experienced by the Light.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Experience {
    #[serde(skip)]
    pub(crate) light: Light,
    pub(crate) state: StateOfBeing,
    pub(crate) mandala: Option<&'static Mandala>,
}

impl Experience {
    /// The Light that had this experience
    pub fn light(&self) -> Light {
        self.light
    }

    /// The originating state
    pub fn state(&self) -> &StateOfBeing {
        &self.state
    }

    /// The resolved mandala, if the state has one
    pub fn mandala(&self) -> Option<&'static Mandala> {
        self.mandala
    }

    pub fn into_state(self) -> StateOfBeing {
        self.state
    }
}
