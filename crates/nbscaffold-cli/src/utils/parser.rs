use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid --set format: '{0}'. Expected KEY=VALUE.")]
    InvalidKeyValue(String),

    #[error("Key cannot be empty in '{0}'.")]
    EmptyKey(String),

    #[error("Invalid boolean value for {key}: '{value}'. Expected 'true' or 'false'.")]
    InvalidBool { key: String, value: String },

    #[error("Table of contents reference cannot be empty.")]
    EmptyReference,
}

/// A table of contents named on the command line or in a config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TocReference<'a> {
    Builtin(&'a str),
    File(&'a Path),
}

/// Anything containing a path separator or ending in `.toml` is a file; the rest are
/// built-in catalog names.
pub fn parse_toc_reference(name_or_path: &str) -> Result<TocReference<'_>, ParseError> {
    let trimmed = name_or_path.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyReference);
    }
    if trimmed.contains(['/', '\\']) || trimmed.ends_with(".toml") {
        Ok(TocReference::File(Path::new(trimmed)))
    } else {
        Ok(TocReference::Builtin(trimmed))
    }
}

pub fn parse_key_value(pair: &str) -> Result<(&str, &str), ParseError> {
    let (key, value) = pair
        .split_once('=')
        .ok_or_else(|| ParseError::InvalidKeyValue(pair.to_string()))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(ParseError::EmptyKey(pair.to_string()));
    }
    Ok((key, value.trim()))
}

pub fn parse_bool(key: &str, value: &str) -> Result<bool, ParseError> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Ok(true),
        "false" | "no" | "off" | "0" => Ok(false),
        _ => Err(ParseError::InvalidBool {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}
