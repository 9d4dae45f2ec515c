use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// A named input on one of the two forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    /// Base URL form
    Url,
    /// Option selection
    Items,
    UrlPath,
    PageUrl,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Url => "url",
            Field::Items => "items",
            Field::UrlPath => "urlPath",
            Field::PageUrl => "pageUrl",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validation failure attached to a single field. Never fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("{0}")]
    SelectionError(String),

    #[error("{0}")]
    PathFormatError(String),

    #[error("{0}")]
    UrlFormatError(String),

    #[error("{0}")]
    RequiredFieldError(String),
}

impl FieldError {
    pub fn selection() -> Self {
        FieldError::SelectionError("Please select exactly one option.".to_string())
    }

    pub fn path_format() -> Self {
        FieldError::PathFormatError("Path must start with /".to_string())
    }

    pub fn url_format() -> Self {
        FieldError::UrlFormatError("Please enter a valid URL".to_string())
    }

    pub fn required(message: &str) -> Self {
        FieldError::RequiredFieldError(message.to_string())
    }

    /// Short name of the error kind, used in reports
    pub fn kind(&self) -> &'static str {
        match self {
            FieldError::SelectionError(_) => "SelectionError",
            FieldError::PathFormatError(_) => "PathFormatError",
            FieldError::UrlFormatError(_) => "UrlFormatError",
            FieldError::RequiredFieldError(_) => "RequiredFieldError",
        }
    }
}

impl Serialize for FieldError {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Field name -> message, at most one error per field, ordered by field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<Field, FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, error: FieldError) {
        self.0.insert(field, error);
    }

    pub fn remove(&mut self, field: Field) -> Option<FieldError> {
        self.0.remove(&field)
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0.get(&field)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldError)> {
        self.0.iter().map(|(field, error)| (*field, error))
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// Merge `other` into self, overwriting errors on the same field
    pub fn extend(&mut self, other: FieldErrors) {
        self.0.extend(other.0);
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, error) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, error)?;
            first = false;
        }
        Ok(())
    }
}

/// Errors from the submission boundary.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SubmitError {
    #[error("form is invalid: {0}")]
    Invalid(FieldErrors),

    #[error("a submission is already in flight")]
    InFlight,
}

/// Errors reading form input from outside the UI.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read form input {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse form input: {0}")]
    Parse(#[from] serde_json::Error),
}
