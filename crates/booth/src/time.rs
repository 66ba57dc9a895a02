use chrono::{DateTime, Utc};
use core::fmt::{self, Display};

const MS_PER_HOUR: i64 = 3_600_000;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// How much of a voting window remains, as shown on a poll card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeLeft {
    Ended,
    /// Whole days and the whole hours beyond them.
    Remaining { days: i64, hours: i64 },
}

impl TimeLeft {
    pub fn until(end: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        if end <= now {
            return Self::Ended;
        }

        let diff = (end - now).num_milliseconds();

        Self::Remaining { days: diff / MS_PER_DAY, hours: diff % MS_PER_DAY / MS_PER_HOUR }
    }
}

impl Display for TimeLeft {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ended => f.write_str("Ended"),
            Self::Remaining { days, hours } => write!(f, "{days}d {hours}h left"),
        }
    }
}

pub fn format_time_left(end: DateTime<Utc>, now: DateTime<Utc>) -> String {
    TimeLeft::until(end, now).to_string()
}
