use std::fmt::{Debug, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// Validated Tibber house identifier.
///
/// The id is spliced into the query text verbatim, so anything that could
/// break out of the GraphQL string literal is rejected. Tibber ids are
/// UUIDs in practice; ASCII alphanumerics and dashes cover them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HouseId(String);

impl HouseId {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyHouseId);
        }

        for (index, ch) in trimmed.chars().enumerate() {
            let valid = ch.is_ascii_alphanumeric() || ch == '-';
            if !valid {
                return Err(ValidationError::HouseIdInvalidChar { ch, index });
            }
        }

        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for HouseId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for HouseId {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HouseId> for String {
    fn from(value: HouseId) -> Self {
        value.0
    }
}

/// Opaque bearer token for the Tibber API.
///
/// Deliberately has no `Display` impl and a redacting `Debug` impl so the
/// token never ends up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyToken);
        }
        if trimmed.chars().any(char::is_whitespace) {
            return Err(ValidationError::TokenContainsWhitespace);
        }

        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Debug for AccessToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccessToken(***)")
    }
}
