//! Validated region (postal) codes.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{GardenError, Result};

/// Message shown when a region code fails validation.
pub const INVALID_REGION_MESSAGE: &str = "Please enter a valid 5-digit ZIP code";

/// A 5-digit postal code, the key for both planting and weather lookups.
///
/// Construction validates the code, so a `RegionCode` in hand is always safe
/// to put into a request path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RegionCode(String);

impl RegionCode {
    /// Validate `input` as exactly five ASCII digits. No trimming is applied.
    ///
    /// # Errors
    ///
    /// Returns `GardenError::InvalidInput` for anything else.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use garden_core::models::RegionCode;
    ///
    /// assert!(RegionCode::parse("90210").is_ok());
    /// assert!(RegionCode::parse("9021").is_err());
    /// assert!(RegionCode::parse("9021a").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        if input.len() == 5 && input.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(input.to_string()))
        } else {
            Err(GardenError::invalid_input("region").with_reason(INVALID_REGION_MESSAGE))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for RegionCode {
    type Err = GardenError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for RegionCode {
    type Error = GardenError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<RegionCode> for String {
    fn from(code: RegionCode) -> Self {
        code.0
    }
}

impl fmt::Display for RegionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
