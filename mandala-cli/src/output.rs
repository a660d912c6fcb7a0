//! Rendering experiences and mandalas for the console

use mandala::{Describe, Experience, Mandala};
use serde::Serialize;

use crate::config::OutputFormat;

/// An experience together with its rendered description.
#[derive(Serialize)]
struct RenderedExperience<'a> {
    #[serde(flatten)]
    experience: &'a Experience,
    description: String,
}

pub fn render_experience(experience: &Experience, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(experience.describe()),
        OutputFormat::Json => Ok(serde_json::to_string(&RenderedExperience {
            experience,
            description: experience.describe(),
        })?),
    }
}

pub fn render_mandala(mandala: &Mandala, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(mandala.describe()),
        OutputFormat::Json => Ok(serde_json::to_string(mandala)?),
    }
}
