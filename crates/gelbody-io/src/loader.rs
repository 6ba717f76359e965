//! Configuration and input file loading.
//!
//! The format is chosen by extension: `.toml` or `.json`.

use std::fs;
use std::path::Path;

use gelbody_solver::SimulationConfig;
use gelbody_types::{GelError, GelResult};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::contract::SimulationInput;

/// Supported document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Toml,
    Json,
}

impl Format {
    /// Picks the format from a file extension.
    pub fn from_path(path: &Path) -> GelResult<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Ok(Format::Toml),
            Some("json") => Ok(Format::Json),
            other => Err(GelError::Serialization(format!(
                "unsupported file extension {:?} for {}",
                other,
                path.display()
            ))),
        }
    }
}

/// Decodes a document from text.
pub fn parse_str<T: DeserializeOwned>(text: &str, format: Format) -> GelResult<T> {
    match format {
        Format::Toml => toml::from_str(text).map_err(|e| GelError::Serialization(e.to_string())),
        Format::Json => {
            serde_json::from_str(text).map_err(|e| GelError::Serialization(e.to_string()))
        }
    }
}

fn load<T: DeserializeOwned>(path: &Path) -> GelResult<T> {
    let format = Format::from_path(path)?;
    let text = fs::read_to_string(path)?;
    debug!(path = %path.display(), ?format, "loading document");
    parse_str(&text, format)
}

/// Loads a [`SimulationConfig`] from a TOML or JSON file.
pub fn load_config(path: &Path) -> GelResult<SimulationConfig> {
    load(path)
}

/// Loads a [`SimulationInput`] from a TOML or JSON file.
pub fn load_input(path: &Path) -> GelResult<SimulationInput> {
    load(path)
}
