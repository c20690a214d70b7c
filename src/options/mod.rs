//! Animation, relaxation and paint options with TOML preset support.
//!
//! Options serialize to/from TOML so a view preset can be kept next to the
//! graphs it is used with.

mod animation;
mod backdrop;
mod colors;
mod relax;

use std::path::Path;

pub use animation::{AnimationOptions, MissingTargetPolicy};
pub use backdrop::BackdropOptions;
pub use colors::VertexColorOptions;
pub use relax::RelaxOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::QuantoViewError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[animation]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Position animator parameters.
    pub animation: AnimationOptions,
    /// Warm-up and background relaxation parameters.
    pub relax: RelaxOptions,
    /// Vertex fill colors.
    #[schemars(skip)]
    pub colors: VertexColorOptions,
    /// Page backdrop colors.
    #[schemars(skip)]
    pub backdrop: BackdropOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, QuantoViewError> {
        let content =
            std::fs::read_to_string(path).map_err(QuantoViewError::Io)?;
        toml::from_str(&content)
            .map_err(|e| QuantoViewError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), QuantoViewError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| QuantoViewError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(QuantoViewError::Io)?;
        }
        std::fs::write(path, content).map_err(QuantoViewError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
