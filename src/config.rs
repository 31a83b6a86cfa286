use super::render::*;
use super::style::*;

use std::fs;

///
/// The styles and rendering options for a run of the demo, as read from a configuration file
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Styles for the rendered elements
    pub style: StyleSpec,

    /// What the render pass draws
    pub options: RenderOptions
}

impl Default for DemoConfig {
    fn default() -> DemoConfig {
        DemoConfig {
            style:      StyleSpec::default(),
            options:    RenderOptions::default()
        }
    }
}

///
/// Errors that can occur while loading a configuration file
///
#[derive(Clone, PartialEq, Debug)]
pub enum ConfigError {
    /// The file could not be read
    CouldNotReadFile(String),

    /// The file did not contain a valid demo configuration
    InvalidConfig(String)
}

///
/// Loads a demo configuration from a JSON file
///
pub fn load_config(path: &str) -> Result<DemoConfig, ConfigError> {
    let config_text = fs::read_to_string(path)
        .map_err(|err| ConfigError::CouldNotReadFile(err.to_string()))?;

    serde_json::from_str(&config_text)
        .map_err(|err| ConfigError::InvalidConfig(err.to_string()))
}
