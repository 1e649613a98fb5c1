use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::format_description::well_known::Rfc3339;
use time::{Date, OffsetDateTime, Weekday};

use crate::ValidationError;

/// RFC3339 timestamp that keeps the offset the provider reported.
///
/// Tibber stamps every price with the home's local offset, and the report
/// buckets by that local calendar, so the offset is preserved instead of
/// being normalized to UTC. Ordering and equality compare instants.
#[derive(Debug, Clone, Copy)]
pub struct PriceTimestamp(OffsetDateTime);

impl PriceTimestamp {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        OffsetDateTime::parse(input, &Rfc3339)
            .map(Self)
            .map_err(|_| ValidationError::InvalidTimestamp {
                value: input.to_owned(),
            })
    }

    pub fn from_offset_datetime(value: OffsetDateTime) -> Self {
        Self(value)
    }

    pub fn into_inner(self) -> OffsetDateTime {
        self.0
    }

    pub fn format_rfc3339(self) -> String {
        self.0
            .format(&Rfc3339)
            .expect("PriceTimestamp must be RFC3339 formattable")
    }

    /// Calendar date in the timestamp's own offset.
    pub fn date(self) -> Date {
        self.0.date()
    }

    /// Hour of day (0..=23) in the timestamp's own offset.
    pub fn hour(self) -> u8 {
        self.0.hour()
    }

    pub fn weekday(self) -> Weekday {
        self.0.weekday()
    }

    /// ISO year and week number, e.g. `(2024, 5)` for 2024-W05.
    pub fn iso_week(self) -> (i32, u8) {
        let (year, week, _) = self.0.to_iso_week_date();
        (year, week)
    }
}

impl PartialEq for PriceTimestamp {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for PriceTimestamp {}

impl PartialOrd for PriceTimestamp {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PriceTimestamp {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl Display for PriceTimestamp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.format_rfc3339())
    }
}

impl Serialize for PriceTimestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.format_rfc3339())
    }
}

impl<'de> Deserialize<'de> for PriceTimestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(D::Error::custom)
    }
}
