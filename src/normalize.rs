use serde_json::{Map, Value};
use std::{error::Error, fmt};

#[derive(Debug)]
pub enum NormalizeError {
    Parse(serde_json::Error),
    MissingPalette,
}

impl fmt::Display for NormalizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NormalizeError::Parse(e) => write!(f, "reply is not valid JSON: {}", e),
            NormalizeError::MissingPalette => write!(f, "Response doesn't contain 'palette' key"),
        }
    }
}

impl Error for NormalizeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            NormalizeError::Parse(e) => Some(e),
            NormalizeError::MissingPalette => None,
        }
    }
}

impl From<serde_json::Error> for NormalizeError {
    fn from(e: serde_json::Error) -> Self {
        NormalizeError::Parse(e)
    }
}

/// Removes an optional leading/trailing triple-backtick fence, with or
/// without a `json` language tag.
pub fn strip_code_fence(raw: &str) -> &str {
    let mut text = raw.trim();
    if let Some(rest) = text.strip_prefix("```json") {
        text = rest;
    } else if let Some(rest) = text.strip_prefix("```") {
        text = rest;
    }
    if let Some(rest) = text.strip_suffix("```") {
        text = rest;
    }
    text.trim()
}

/// Turns the model's raw reply into a `{"palette": [...]}` object. A bare
/// JSON array is coerced into the object shape; any other value without a
/// `palette` key is rejected.
pub fn normalize(raw: &str) -> Result<Map<String, Value>, NormalizeError> {
    let cleaned = strip_code_fence(raw);
    let parsed: Value = serde_json::from_str(cleaned)?;
    match parsed {
        Value::Array(colors) => {
            let mut object = Map::new();
            object.insert("palette".to_string(), Value::Array(colors));
            Ok(object)
        }
        Value::Object(object) if object.contains_key("palette") => Ok(object),
        _ => Err(NormalizeError::MissingPalette),
    }
}
