//! Wire types shared by the generate service and its clients.
//!
//! Field names follow the JSON contract of `POST /api/generate`
//! (camelCase on the wire).

use std::fmt;

use clap::ValueEnum;
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// Tone of the drafted reply.
///
/// On the wire `null` reads like a missing value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(from = "Option<String>", into = "String")]
pub enum EmailStyle {
    Formal,
    #[default]
    Business,
    Client,
}

impl EmailStyle {
    /// Value sent over the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Formal => "formal",
            Self::Business => "business",
            Self::Client => "client",
        }
    }

    /// Label shown next to the selector.
    pub fn label(self) -> &'static str {
        match self {
            Self::Formal => "Официальный",
            Self::Business => "Деловой",
            Self::Client => "Клиентский",
        }
    }

    /// Lenient parse: unknown values read as [`EmailStyle::Business`].
    pub fn from_value(value: &str) -> Self {
        match value.trim() {
            "formal" => Self::Formal,
            "client" => Self::Client,
            _ => Self::Business,
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::Formal => Self::Business,
            Self::Business => Self::Client,
            Self::Client => Self::Formal,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Formal => Self::Client,
            Self::Business => Self::Formal,
            Self::Client => Self::Business,
        }
    }
}

impl From<Option<String>> for EmailStyle {
    fn from(value: Option<String>) -> Self {
        value.map(|v| Self::from_value(&v)).unwrap_or_default()
    }
}

impl From<EmailStyle> for String {
    fn from(style: EmailStyle) -> Self {
        style.as_str().to_string()
    }
}

impl fmt::Display for EmailStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Length of the drafted reply.
///
/// An explicit `null` is not `full`, so it reads as [`EmailLength::Short`];
/// only a missing field gets the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(from = "Option<String>", into = "String")]
pub enum EmailLength {
    #[default]
    Full,
    Short,
}

impl EmailLength {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Short => "short",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Full => "Развёрнутый",
            Self::Short => "Краткий",
        }
    }

    /// Lenient parse: anything other than `full` reads as [`EmailLength::Short`].
    pub fn from_value(value: &str) -> Self {
        if value.trim() == "full" {
            Self::Full
        } else {
            Self::Short
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Self::Full => Self::Short,
            Self::Short => Self::Full,
        }
    }
}

impl From<Option<String>> for EmailLength {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(v) => Self::from_value(&v),
            None => Self::Short,
        }
    }
}

impl From<EmailLength> for String {
    fn from(length: EmailLength) -> Self {
        length.as_str().to_string()
    }
}

impl fmt::Display for EmailLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `POST /api/generate`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    #[serde(default)]
    pub incoming_text: String,
    #[serde(default)]
    pub email_style: EmailStyle,
    #[serde(default)]
    pub email_length: EmailLength,
}

/// One extracted label/value pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedFact {
    pub label: String,
    pub value: String,
}

impl ExtractedFact {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Successful body of `POST /api/generate`. Every field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    #[serde(default)]
    pub classification: Option<String>,
    #[serde(default, deserialize_with = "deserialize_facts")]
    pub extracted_info: Option<Vec<ExtractedFact>>,
    #[serde(default)]
    pub answer_text: Option<String>,
}

/// Error body returned with any non-2xx status.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
        }
    }
}

#[derive(Deserialize)]
struct RawFact {
    #[serde(default)]
    label: serde_json::Value,
    #[serde(default)]
    value: serde_json::Value,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawFacts {
    List(Vec<RawFact>),
    Map(serde_json::Map<String, serde_json::Value>),
    Other(IgnoredAny),
}

/// Strings pass through, `null` is empty, anything else is compact JSON.
fn fact_text(value: serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Accepts either a list of `{label, value}` or a key/value object.
///
/// Object entries become facts in sorted key order. Labels and values go
/// through the same text rule in both shapes. Anything else (null, numbers)
/// reads as absent.
pub fn deserialize_facts<'de, D>(deserializer: D) -> Result<Option<Vec<ExtractedFact>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawFacts>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawFacts::List(items)) => Some(
            items
                .into_iter()
                .map(|item| ExtractedFact {
                    label: fact_text(item.label),
                    value: fact_text(item.value),
                })
                .collect(),
        ),
        Some(RawFacts::Map(map)) => Some(
            map.into_iter()
                .map(|(label, value)| ExtractedFact {
                    label,
                    value: fact_text(value),
                })
                .collect(),
        ),
        Some(RawFacts::Other(_)) | None => None,
    })
}
