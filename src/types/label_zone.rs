//! Time zone selection for hour labels.

use chrono::{DateTime, FixedOffset, Local, Offset, Utc};
use clap::ValueEnum;

/// Which clock the hourly chart labels are read on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LabelZone {
    /// The clock of the machine running the search.
    #[default]
    Local,
    Utc,
    /// The searched city's own offset, as reported by the forecast document.
    City,
}

impl LabelZone {
    /// Resolves the zone against the forecast's reported UTC offset.
    ///
    /// `City` falls back to UTC when the offset is missing or out of range.
    pub fn resolve(self, utc_offset_secs: Option<i32>) -> LabelClock {
        match self {
            LabelZone::Local => LabelClock::Local,
            LabelZone::Utc => LabelClock::Fixed(Utc.fix()),
            LabelZone::City => LabelClock::Fixed(
                utc_offset_secs
                    .and_then(FixedOffset::east_opt)
                    .unwrap_or_else(|| Utc.fix()),
            ),
        }
    }
}

/// A resolved [`LabelZone`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelClock {
    Local,
    Fixed(FixedOffset),
}

impl LabelClock {
    /// Formats `timestamp` as a 12-hour clock label such as "03 PM".
    pub fn hour_label(&self, timestamp: DateTime<Utc>) -> String {
        match self {
            LabelClock::Local => timestamp.with_timezone(&Local).format("%I %p").to_string(),
            LabelClock::Fixed(offset) => timestamp.with_timezone(offset).format("%I %p").to_string(),
        }
    }
}
