//! Human-readable descriptions.
//!
//! Two rendering paths exist. [`Experience`] renders how the Light meets a
//! state, using the resolved mandala. [`describe_state`] renders a bare state
//! with no mandala lookup; suffering experiences use it for the state they resist.

use std::fmt;

use crate::light::Experience;
use crate::registry::Mandala;
use crate::types::StateOfBeing;

/// Anything that can describe itself in one human-readable block.
pub trait Describe {
    fn describe(&self) -> String;
}

impl Describe for Mandala {
    fn describe(&self) -> String {
        format!("Mandala of {} {} ({})", self.label, self.symbol, self.color)
    }
}

impl Describe for Experience {
    fn describe(&self) -> String {
        match (&self.state, self.mandala) {
            (StateOfBeing::Presence, _) => "☀️ The Light simply *is*.".to_string(),
            (StateOfBeing::Suffering { from }, _) => {
                format!("⚠️ Suffering arises from resisting:\n→ {}", describe_state(from))
            }
            (StateOfBeing::Elemental { .. } | StateOfBeing::Shadow { .. }, Some(mandala)) => {
                format!("🌀 The Light is experiencing:\n→ {}", mandala.describe())
            }
            (StateOfBeing::Elemental { .. } | StateOfBeing::Shadow { .. }, None) => {
                unreachable!("Light::through resolves a mandala for elemental and shadow states")
            }
        }
    }
}

impl Describe for StateOfBeing {
    fn describe(&self) -> String {
        describe_state(self)
    }
}

/// Describe a bare state of being.
pub fn describe_state(state: &StateOfBeing) -> String {
    match state {
        StateOfBeing::Presence => "Presence — Nirvana (Pure Being)".to_string(),
        StateOfBeing::Shadow { description } => format!("Shadow: {}", description),
        StateOfBeing::Elemental { element, emotion } => format!("{} ({})", emotion, element),
        StateOfBeing::Suffering { from } => format!("Suffering from:\n→ {}", describe_state(from)),
    }
}

impl fmt::Display for StateOfBeing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&describe_state(self))
    }
}

impl fmt::Display for Mandala {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl fmt::Display for Experience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
