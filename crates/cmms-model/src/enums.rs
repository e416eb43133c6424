//! Type-safe enumerations for form metadata.
//!
//! Entity forms declare field types and error categories as string tags
//! (`"integer"`, `"json"`, ...). These enums replace the tags with closed
//! sets so validators dispatch on a `match` instead of string comparison.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CmmsError;

/// Declared logical type of a parameter value.
///
/// Values always arrive as raw strings; the data type selects which
/// acceptance rule applies to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    /// Free text. Every value is accepted, including the empty string.
    #[default]
    String,
    /// Optional minus sign followed by ASCII digits.
    Integer,
    /// Decimal number with at most one decimal point, no exponent.
    Float,
    /// `true`, `false`, `1` or `0`, compared case-insensitively.
    Boolean,
    /// Any syntactically valid JSON document.
    Json,
}

impl DataType {
    pub const ALL: [DataType; 5] = [
        DataType::String,
        DataType::Integer,
        DataType::Float,
        DataType::Boolean,
        DataType::Json,
    ];

    /// Returns the tag as it appears in API payloads.
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::String => "string",
            DataType::Integer => "integer",
            DataType::Float => "float",
            DataType::Boolean => "boolean",
            DataType::Json => "json",
        }
    }

    /// Strict, case-insensitive parse. Returns `None` for unknown tags.
    pub fn parse(tag: &str) -> Option<Self> {
        match tag.trim().to_lowercase().as_str() {
            "string" => Some(DataType::String),
            "integer" | "int" => Some(DataType::Integer),
            "float" | "decimal" => Some(DataType::Float),
            "boolean" | "bool" => Some(DataType::Boolean),
            "json" => Some(DataType::Json),
            _ => None,
        }
    }

    /// Lenient parse: unknown tags fall back to [`DataType::String`].
    pub fn from_tag(tag: &str) -> Self {
        Self::parse(tag).unwrap_or_default()
    }

    /// Returns true if values of this type are constrained at all.
    pub fn is_constrained(&self) -> bool {
        !matches!(self, DataType::String)
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DataType {
    type Err = CmmsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| CmmsError::UnknownDataType { tag: s.to_string() })
    }
}

/// Category of a validation failure.
///
/// Client-side rules only ever produce `Required` and `Format`. The other
/// three are inferred from server message text and are heuristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    /// Mandatory input is missing.
    Required,
    /// Input is structurally malformed.
    Format,
    /// Server reported a duplicate value.
    Unique,
    /// Server reported a type mismatch.
    Type,
    /// Server reported an out-of-range value.
    Range,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Required => "required",
            ErrorKind::Format => "format",
            ErrorKind::Unique => "unique",
            ErrorKind::Type => "type",
            ErrorKind::Range => "range",
        }
    }

    /// Returns true for kinds that local validators can produce.
    pub fn is_client_side(&self) -> bool {
        matches!(self, ErrorKind::Required | ErrorKind::Format)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
