// Unchecked option form input, as JSON

use crate::error::InputError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// The option form before validation: any number of ids, optional
/// auxiliary fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawOptionInput {
    #[serde(default)]
    pub items: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_url: Option<String>,
}

impl RawOptionInput {
    pub fn from_json(json: &str) -> Result<Self, InputError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Expand a leading `~` in a user supplied path
pub fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    PathBuf::from(shellexpand::tilde(raw.as_ref()).as_ref())
}

/// Load a [`RawOptionInput`] document from disk.
pub fn load_raw_input(path: &Path) -> Result<RawOptionInput, InputError> {
    let path = expand_path(path);
    let content = fs::read_to_string(&path).map_err(|source| InputError::Io {
        path: path.clone(),
        source,
    })?;
    RawOptionInput::from_json(&content)
}
