use std::fmt::{Display, Formatter};

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::Date;

use crate::ValidationError;

/// Strict `dd.MM.yyyy`: two-digit day and month, four-digit year, dots only.
const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[day].[month].[year]");

/// Calendar date in the order service's `dd.MM.yyyy` wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ValidityDate(Date);

impl ValidityDate {
    /// Parse the exact `dd.MM.yyyy` pattern; anything else is a format error,
    /// including wrong separators, reordered fields, two-digit years, and
    /// calendar-invalid day/month combinations.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        Date::parse(input, DATE_FORMAT)
            .map(Self)
            .map_err(|_| ValidationError::InvalidDateFormat {
                value: input.to_owned(),
            })
    }

    /// Parse and additionally reject dates strictly before `today`.
    pub fn parse_not_past(input: &str, today: Date) -> Result<Self, ValidationError> {
        let validity = Self::parse(input)?;
        if validity.0 < today {
            return Err(ValidationError::PastValidityDate);
        }
        Ok(validity)
    }

    pub const fn from_date(date: Date) -> Self {
        Self(date)
    }

    pub const fn date(self) -> Date {
        self.0
    }
}

impl Display for ValidityDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:02}.{:02}.{:04}",
            self.0.day(),
            u8::from(self.0.month()),
            self.0.year()
        )
    }
}

impl Serialize for ValidityDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ValidityDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(D::Error::custom)
    }
}
