use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// The committed selection, every element a string. `month` and `day` are
/// zero-padded to two digits, `year` is unpadded, and the time fields carry
/// the two-digit form the selectors display. The singular `hour` next to
/// plural `minutes`/`seconds` is part of the contract.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateTimeRecord {
    pub year: String,
    pub month: String,
    pub day: String,
    pub hour: String,
    pub minutes: String,
    pub seconds: String,
}

impl DateTimeRecord {
    #[must_use]
    pub fn compose(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Self {
        Self {
            year: year.to_string(),
            month: format!("{month:02}"),
            day: format!("{day:02}"),
            hour: format!("{hour:02}"),
            minutes: format!("{minute:02}"),
            seconds: format!("{second:02}"),
        }
    }

    /// Default record before any confirmation.
    #[must_use]
    pub fn from_datetime(now: NaiveDateTime) -> Self {
        Self::compose(
            now.year(),
            now.month(),
            now.day(),
            now.hour(),
            now.minute(),
            now.second(),
        )
    }
}

/// Invoked synchronously with the record when the picker confirms.
pub type RecordCallback = Box<dyn FnMut(&DateTimeRecord)>;
