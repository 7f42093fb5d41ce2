use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::{Number, Value};

use crate::error::{CodeError, Result};

pub const DEFAULT_LENGTH: usize = 6;

/// Options controlling the character pool and length of a generated code.
///
/// Every field is optional when loaded from JSON; missing fields take the
/// values of [`CodeOptions::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CodeOptions {
    #[serde(deserialize_with = "deserialize_length")]
    pub length: usize,
    pub digits: bool,
    pub lowercase: bool,
    pub uppercase: bool,
    pub symbols: bool,
    pub avoid_ambiguous: bool,

    /// Replaces the toggle-built pool entirely when non-empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charset: Option<String>,
}

impl Default for CodeOptions {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            digits: true,
            lowercase: false,
            uppercase: true,
            symbols: false,
            avoid_ambiguous: true,
            charset: None,
        }
    }
}

impl CodeOptions {
    pub fn with_length(length: usize) -> Self {
        Self {
            length,
            ..Self::default()
        }
    }

    pub fn with_charset(charset: impl Into<String>, length: usize) -> Self {
        Self {
            length,
            charset: Some(charset.into()),
            ..Self::default()
        }
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(raw)?;
        options.validate()?;
        Ok(options)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        let options: Self = serde_json::from_value(value)?;
        options.validate()?;
        Ok(options)
    }

    pub fn validate(&self) -> Result<()> {
        if self.length == 0 {
            tracing::debug!(length = self.length, "Rejected code options");
            return Err(CodeError::invalid_length());
        }

        Ok(())
    }

    /// The charset override, if one was given and is non-empty.
    pub fn custom_charset(&self) -> Option<&str> {
        self.charset.as_deref().filter(|charset| !charset.is_empty())
    }
}

// Accepts any JSON number holding a positive whole value, including `8.0`.
fn deserialize_length<'de, D>(deserializer: D) -> std::result::Result<usize, D::Error>
where
    D: Deserializer<'de>,
{
    let number = Number::deserialize(deserializer)?;

    if let Some(length) = number.as_u64() {
        return usize::try_from(length)
            .map_err(|_| de::Error::custom("length must be a positive integer"));
    }

    match number.as_f64() {
        Some(length) if length.fract() == 0.0 && (0.0..=u32::MAX as f64).contains(&length) => {
            Ok(length as usize)
        }
        _ => Err(de::Error::custom("length must be a positive integer")),
    }
}
