//! Core types for states of being.
//!
//! With the `typescript` feature enabled, these types can be exported to TypeScript
//! using ts-rs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[cfg(feature = "typescript")]
use ts_rs::TS;

/// Error types for parsing states of being.
#[derive(Debug, thiserror::Error)]
pub enum MandalaError {
    /// Name does not match any element
    #[error("Unknown element: {0}")]
    UnknownElement(String),

    /// Name does not match any emotion
    #[error("Unknown emotion: {0}")]
    UnknownEmotion(String),

    /// JSON did not describe a valid state of being
    #[error("Invalid state of being: {0}")]
    InvalidState(#[from] serde_json::Error),
}

/// The five elements. Ether creates the other four.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub enum Element {
    Fire,
    Water,
    Air,
    Earth,
    Ether,
}

impl Element {
    /// Get the element's name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fire => "Fire",
            Self::Water => "Water",
            Self::Air => "Air",
            Self::Earth => "Earth",
            Self::Ether => "Ether",
        }
    }

    /// All elements in declaration order
    pub fn all() -> [Self; 5] {
        [Self::Fire, Self::Water, Self::Air, Self::Earth, Self::Ether]
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Element {
    type Err = MandalaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|element| element.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| MandalaError::UnknownElement(s.to_string()))
    }
}

/// The four emotions an elemental experience can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
pub enum Emotion {
    Desire,
    Joy,
    Grief,
    Fear,
}

impl Emotion {
    /// Get the emotion's name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Desire => "Desire",
            Self::Joy => "Joy",
            Self::Grief => "Grief",
            Self::Fear => "Fear",
        }
    }

    /// All emotions in declaration order
    pub fn all() -> [Self; 4] {
        [Self::Desire, Self::Joy, Self::Grief, Self::Fear]
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Emotion {
    type Err = MandalaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|emotion| emotion.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| MandalaError::UnknownEmotion(s.to_string()))
    }
}

/// A state of being.
///
/// Serialized with a `type` tag, e.g.
/// `{"type":"Suffering","from":{"type":"Shadow","description":"..."}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typescript", derive(TS))]
#[cfg_attr(feature = "typescript", ts(export))]
#[serde(tag = "type")]
pub enum StateOfBeing {
    /// A felt experience tied to one element and one emotion
    Elemental { element: Element, emotion: Emotion },
    /// An unacknowledged, unintegrated aspect
    Shadow { description: String },
    /// Pure, undifferentiated being
    Presence,
    /// Resistance to the wrapped state
    Suffering { from: Box<StateOfBeing> },
}

impl StateOfBeing {
    pub fn elemental(element: Element, emotion: Emotion) -> Self {
        Self::Elemental { element, emotion }
    }

    pub fn shadow(description: impl Into<String>) -> Self {
        Self::Shadow {
            description: description.into(),
        }
    }

    pub fn presence() -> Self {
        Self::Presence
    }

    /// Wrap a state in suffering.
    pub fn suffering(from: StateOfBeing) -> Self {
        Self::Suffering {
            from: Box::new(from),
        }
    }

    /// Parse a state from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, MandalaError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Variant name, as used in the `type` tag
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Elemental { .. } => "Elemental",
            Self::Shadow { .. } => "Shadow",
            Self::Presence => "Presence",
            Self::Suffering { .. } => "Suffering",
        }
    }

    /// How many layers of suffering wrap the innermost state
    pub fn depth(&self) -> usize {
        match self {
            Self::Suffering { from } => 1 + from.depth(),
            Self::Elemental { .. } | Self::Shadow { .. } | Self::Presence => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_parsing() {
        assert_eq!("fire".parse::<Element>().unwrap(), Element::Fire);
        assert_eq!(" Ether ".parse::<Element>().unwrap(), Element::Ether);
        assert!(matches!(
            "Metal".parse::<Element>(),
            Err(MandalaError::UnknownElement(name)) if name == "Metal"
        ));
    }

    #[test]
    fn test_emotion_parsing() {
        assert_eq!("GRIEF".parse::<Emotion>().unwrap(), Emotion::Grief);
        assert!(matches!(
            "Anger".parse::<Emotion>(),
            Err(MandalaError::UnknownEmotion(_))
        ));
    }

    #[test]
    fn test_all_names_round_trip_through_from_str() {
        for element in Element::all() {
            assert_eq!(element.as_str().parse::<Element>().unwrap(), element);
        }
        for emotion in Emotion::all() {
            assert_eq!(emotion.to_string().parse::<Emotion>().unwrap(), emotion);
        }
    }

    #[test]
    fn test_suffering_depth() {
        assert_eq!(StateOfBeing::presence().depth(), 0);

        let mut state = StateOfBeing::shadow("old wound");
        for expected in 1..=3 {
            state = StateOfBeing::suffering(state);
            assert_eq!(state.depth(), expected);
            assert_eq!(state.kind(), "Suffering");
        }
    }

    #[test]
    fn test_state_json_shape() {
        let json = r#"{"type":"Suffering","from":{"type":"Shadow","description":"Abandoned inner child"}}"#;
        let state = StateOfBeing::from_json(json).unwrap();
        assert_eq!(
            state,
            StateOfBeing::suffering(StateOfBeing::shadow("Abandoned inner child"))
        );
        assert_eq!(serde_json::to_string(&state).unwrap(), json);

        let presence = StateOfBeing::from_json(r#"{"type":"Presence"}"#).unwrap();
        assert_eq!(presence, StateOfBeing::Presence);

        let elemental =
            StateOfBeing::from_json(r#"{"type":"Elemental","element":"Water","emotion":"Joy"}"#)
                .unwrap();
        assert_eq!(elemental, StateOfBeing::elemental(Element::Water, Emotion::Joy));
    }

    #[test]
    fn test_invalid_state_json() {
        let err = StateOfBeing::from_json(r#"{"type":"Elemental","element":"Fire"}"#).unwrap_err();
        assert!(matches!(err, MandalaError::InvalidState(_)));

        assert!(StateOfBeing::from_json(r#"{"type":"Bliss"}"#).is_err());
    }
}
