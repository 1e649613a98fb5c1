//! GraphQL query template handling.
//!
//! The template is opaque text with two positional `%s` slots (house id,
//! then pagination cursor), kept format-compatible with the upstream
//! resource file so the same template can be dropped in from either side.

use crate::HouseId;

/// Bundled hourly price history query.
pub const PRICE_HISTORY_QUERY: &str = include_str!("../queries/tibber_price_info.graphql");

const SLOT: &str = "%s";

/// A parameterized GraphQL query with positional substitution slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTemplate {
    template: String,
}

impl QueryTemplate {
    /// The bundled price history template.
    pub fn price_history() -> Self {
        Self::custom(PRICE_HISTORY_QUERY)
    }

    pub fn custom(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// Render with the house id and cursor substituted positionally: the
    /// first slot takes the house id, the second the cursor. An empty
    /// cursor means "start from the most recent page".
    pub fn render(&self, house: &HouseId, cursor: &str) -> String {
        self.template
            .replacen(SLOT, house.as_str(), 1)
            .replacen(SLOT, cursor, 1)
    }
}
