//! Chilean RUT (Rol Único Tributario) normalization, formatting and
//! check-digit validation.
//!
//! A RUT is a 7 or 8 digit body followed by a check digit (`0`-`9` or `K`)
//! computed with a modulo-11 checksum. Users type it in many shapes
//! (`12.345.678-5`, `12345678-5`, `123456785`), so every operation starts
//! from the cleaned form: separators and whitespace removed, upper-cased.
//!
//! # Example
//!
//! ```
//! use cmms_validate::rut::{calculate_dv, format_rut, validate_rut};
//!
//! assert_eq!(calculate_dv("12345678"), "5");
//! assert_eq!(format_rut("123456785"), "12.345.678-5");
//! assert!(validate_rut("12.345.678-5"));
//! ```

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;
use tracing::debug;

use cmms_model::RutValidation;

use crate::messages;

/// Cleaned RUT: 7 or 8 ASCII digits, then a digit or `K`.
static RUT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{7,8}[0-9K]$").expect("Invalid RUT regex"));

const MIN_CLEAN_LEN: usize = 8;
const MAX_CLEAN_LEN: usize = 9;

/// Remove dots, hyphens and whitespace, then upper-case.
///
/// No other characters are rejected here; validation does that.
pub fn clean_rut(input: &str) -> String {
    input
        .chars()
        .filter(|c| *c != '.' && *c != '-' && !c.is_whitespace())
        .collect::<String>()
        .to_uppercase()
}

/// Format for display as `12.345.678-5`. Does not validate.
pub fn format_rut(input: &str) -> String {
    let clean = clean_rut(input);
    let chars: Vec<char> = clean.chars().collect();
    if chars.len() < 2 {
        return clean;
    }
    let (body, dv) = chars.split_at(chars.len() - 1);
    let mut formatted = String::with_capacity(clean.len() + body.len() / 3 + 1);
    for (idx, ch) in body.iter().enumerate() {
        if idx > 0 && (body.len() - idx) % 3 == 0 {
            formatted.push('.');
        }
        formatted.push(*ch);
    }
    formatted.push('-');
    formatted.push(dv[0]);
    formatted
}

/// Compute the modulo-11 check digit for a RUT body.
///
/// Digits are weighted right to left with the cycle 2..=7. Callers pass
/// digits only; any other character is weighted as zero.
pub fn calculate_dv(body: &str) -> String {
    let mut sum = 0u32;
    let mut multiplier = 2u32;
    for ch in body.chars().rev() {
        sum = (sum + ch.to_digit(10).unwrap_or(0) * multiplier) % 11;
        multiplier = if multiplier == 7 { 2 } else { multiplier + 1 };
    }
    match 11 - sum {
        11 => "0".to_string(),
        10 => "K".to_string(),
        dv => dv.to_string(),
    }
}

/// Returns true if the cleaned input has RUT shape (no checksum test).
pub fn has_rut_shape(clean: &str) -> bool {
    RUT_PATTERN.is_match(clean)
}

/// Validate structure and check digit.
pub fn validate_rut(input: &str) -> bool {
    let clean = clean_rut(input);
    if !has_rut_shape(&clean) {
        return false;
    }
    // The pattern guarantees ASCII, so byte slicing is safe.
    let (body, dv) = clean.split_at(clean.len() - 1);
    let expected = calculate_dv(body);
    let valid = dv == expected;
    debug!(valid, "rut check digit compared");
    valid
}

/// Validate and explain the first failure in user-facing terms.
pub fn validate_rut_with_message(input: &str) -> RutValidation {
    match check(input) {
        Ok(_) => RutValidation::valid(),
        Err(error) => RutValidation::invalid(error.to_string()),
    }
}

/// Why a RUT was rejected, in check order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RutError {
    #[error("{}", messages::RUT_REQUIRED)]
    Empty,
    #[error("{}", messages::RUT_LENGTH)]
    Length { found: usize },
    #[error("{}", messages::RUT_FORMAT)]
    Format,
    #[error("{}", messages::RUT_INVALID)]
    CheckDigit,
}

/// Run the user-facing checks, returning the cleaned RUT on success.
fn check(input: &str) -> Result<String, RutError> {
    if input.trim().is_empty() {
        return Err(RutError::Empty);
    }
    let clean = clean_rut(input);
    let len = clean.chars().count();
    if !(MIN_CLEAN_LEN..=MAX_CLEAN_LEN).contains(&len) {
        return Err(RutError::Length { found: len });
    }
    if !has_rut_shape(&clean) {
        return Err(RutError::Format);
    }
    if !validate_rut(&clean) {
        return Err(RutError::CheckDigit);
    }
    Ok(clean)
}

/// A RUT that passed every check, stored in cleaned form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rut(String);

impl Rut {
    pub fn parse(input: &str) -> Result<Self, RutError> {
        check(input).map(Rut)
    }

    /// Digits before the check digit.
    pub fn body(&self) -> &str {
        &self.0[..self.0.len() - 1]
    }

    pub fn check_digit(&self) -> char {
        self.0.chars().last().unwrap_or('0')
    }

    /// Cleaned form, e.g. `123456785`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Display form, e.g. `12.345.678-5`.
    pub fn formatted(&self) -> String {
        format_rut(&self.0)
    }
}

impl fmt::Display for Rut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl FromStr for Rut {
    type Err = RutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rut::parse(s)
    }
}

impl Serialize for Rut {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Rut {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Rut::parse(&raw).map_err(serde::de::Error::custom)
    }
}
