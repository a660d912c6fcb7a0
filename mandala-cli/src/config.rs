//! CLI configuration

use std::path::Path;

use anyhow::Context;
use mandala::{Element, Emotion, StateOfBeing};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// How experiences are printed
    #[serde(default)]
    pub format: OutputFormat,

    /// States to experience; empty means the reference set
    #[serde(default)]
    pub states: Vec<StateOfBeing>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One description block per experience
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl Config {
    /// Load config from a TOML file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// The configured states, falling back to the reference set.
    pub fn states(&self) -> Vec<StateOfBeing> {
        if self.states.is_empty() {
            reference_states()
        } else {
            self.states.clone()
        }
    }
}

/// The four states printed when nothing else is asked for.
pub fn reference_states() -> Vec<StateOfBeing> {
    vec![
        StateOfBeing::elemental(Element::Fire, Emotion::Desire),
        StateOfBeing::presence(),
        StateOfBeing::shadow("Unacknowledged fear of weakness"),
        StateOfBeing::suffering(StateOfBeing::shadow("Abandoned inner child")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_uses_reference_states() {
        let config = Config::default();
        assert_eq!(config.format, OutputFormat::Text);
        assert_eq!(config.states(), reference_states());
    }

    #[test]
    fn test_load_states_from_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
format = "json"

[[states]]
type = "Elemental"
element = "Water"
emotion = "Grief"

[[states]]
type = "Suffering"

[states.from]
type = "Presence"
"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(
            config.states(),
            vec![
                StateOfBeing::elemental(Element::Water, Emotion::Grief),
                StateOfBeing::suffering(StateOfBeing::Presence),
            ]
        );
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.format, OutputFormat::Text);
        assert!(config.states.is_empty());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_unknown_emotion_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "[[states]]\ntype = \"Elemental\"\nelement = \"Fire\"\nemotion = \"Anger\"\n"
        )
        .unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
