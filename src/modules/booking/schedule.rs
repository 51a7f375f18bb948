//! Calendar dates and times of day used by bookings.
//!
//! Both types parse from and render to fixed-width strings (`YYYY-MM-DD`,
//! `HH:MM`) but compare on their numeric value.

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use time::{format_description::BorrowedFormatItem, macros::format_description, Date, Time};

const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
const TIME_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[hour]:[minute]");
const END_OF_DAY: &str = "24:00";
const MINUTES_PER_DAY: u16 = 24 * 60;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ScheduleParseError {
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    Date(String),
    #[error("invalid time '{0}', expected HH:MM")]
    Time(String),
}

/// Calendar day a booking takes place on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BookingDate(Date);

impl FromStr for BookingDate {
    type Err = ScheduleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Date::parse(s, DATE_FORMAT)
            .map(BookingDate)
            .map_err(|_| ScheduleParseError::Date(s.to_string()))
    }
}

impl fmt::Display for BookingDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            u8::from(self.0.month()),
            self.0.day()
        )
    }
}

/// Time of day with minute precision, stored as minutes since midnight.
/// `24:00` is accepted as the end of the day so a slot can run to midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(u16);

impl ClockTime {
    pub fn from_hm(hour: u8, minute: u8) -> Option<Self> {
        Time::from_hms(hour, minute, 0)
            .ok()
            .map(|t| ClockTime(u16::from(t.hour()) * 60 + u16::from(t.minute())))
    }

    pub fn minutes_since_midnight(self) -> u16 {
        self.0
    }
}

impl FromStr for ClockTime {
    type Err = ScheduleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == END_OF_DAY {
            return Ok(ClockTime(MINUTES_PER_DAY));
        }
        let parsed =
            Time::parse(s, TIME_FORMAT).map_err(|_| ScheduleParseError::Time(s.to_string()))?;
        Ok(ClockTime(
            u16::from(parsed.hour()) * 60 + u16::from(parsed.minute()),
        ))
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

macro_rules! string_serde {
    ($ty:ty, $expecting:literal) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                struct Visitor;

                impl de::Visitor<'_> for Visitor {
                    type Value = $ty;

                    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                        f.write_str($expecting)
                    }

                    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                        v.parse().map_err(E::custom)
                    }
                }

                deserializer.deserialize_str(Visitor)
            }
        }
    };
}

string_serde!(BookingDate, "a date formatted as YYYY-MM-DD");
string_serde!(ClockTime, "a time formatted as HH:MM");

/// Half-open `[start, end)` interval within a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSlot {
    pub start: ClockTime,
    pub end: ClockTime,
}

impl TimeSlot {
    /// Returns `None` unless `start < end`.
    pub fn new(start: ClockTime, end: ClockTime) -> Option<Self> {
        (start < end).then_some(Self { start, end })
    }

    /// True when the two slots share at least one minute. Touching
    /// endpoints (`09:00-10:00` and `10:00-11:00`) do not overlap.
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        self.start < other.end && other.start < self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> ClockTime {
        s.parse().unwrap()
    }

    fn slot(start: &str, end: &str) -> TimeSlot {
        TimeSlot::new(t(start), t(end)).unwrap()
    }

    #[test]
    fn parses_and_renders_dates() {
        let date: BookingDate = "2024-01-01".parse().unwrap();
        assert_eq!(date.to_string(), "2024-01-01");
        assert!(date < "2024-01-02".parse().unwrap());
        assert_eq!(
            "2024-1-1".parse::<BookingDate>(),
            Err(ScheduleParseError::Date("2024-1-1".into()))
        );
        assert!("2024-02-30".parse::<BookingDate>().is_err());
    }

    #[test]
    fn parses_and_renders_times() {
        assert_eq!(t("09:05").minutes_since_midnight(), 545);
        assert_eq!(t("23:59").to_string(), "23:59");
        assert_eq!(ClockTime::from_hm(9, 0), Some(t("09:00")));
        assert!(ClockTime::from_hm(24, 0).is_none());
        assert!("9:00".parse::<ClockTime>().is_err());
        assert!("24:01".parse::<ClockTime>().is_err());
        assert!("25:00".parse::<ClockTime>().is_err());
        assert!("noon".parse::<ClockTime>().is_err());
    }

    #[test]
    fn orders_numerically() {
        assert!(t("09:00") < t("10:00"));
        assert!(t("09:59") < t("10:00"));
    }

    #[test]
    fn serde_uses_wire_strings() {
        let date: BookingDate = "2024-03-09".parse().unwrap();
        let json = serde_json::to_string(&(t("07:30"), date)).unwrap();
        assert_eq!(json, r#"["07:30","2024-03-09"]"#);

        let back: ClockTime = serde_json::from_str(r#""18:45""#).unwrap();
        assert_eq!(back, t("18:45"));
        assert!(serde_json::from_str::<ClockTime>("945").is_err());
    }

    #[test]
    fn end_of_day_closes_the_last_slot() {
        let midnight = t("24:00");
        assert_eq!(midnight.minutes_since_midnight(), 1440);
        assert_eq!(midnight.to_string(), "24:00");
        assert!(t("23:59") < midnight);

        let late = slot("23:00", "24:00");
        assert!(!late.overlaps(&slot("22:00", "23:00")));
        assert!(late.overlaps(&slot("23:30", "24:00")));
        assert!(TimeSlot::new(midnight, midnight).is_none());
    }

    #[test]
    fn empty_or_reversed_slots_are_rejected() {
        assert!(TimeSlot::new(t("10:00"), t("10:00")).is_none());
        assert!(TimeSlot::new(t("11:00"), t("10:00")).is_none());
    }

    #[test]
    fn adjacent_slots_do_not_overlap() {
        assert!(!slot("09:00", "10:00").overlaps(&slot("10:00", "11:00")));
        assert!(!slot("10:00", "11:00").overlaps(&slot("09:00", "10:00")));
    }

    #[test]
    fn overlap_cases() {
        let existing = slot("09:00", "11:00");
        assert!(slot("09:00", "11:00").overlaps(&existing));
        assert!(slot("10:00", "12:00").overlaps(&existing));
        assert!(slot("08:00", "09:30").overlaps(&existing));
        assert!(slot("09:30", "10:30").overlaps(&existing));
        assert!(slot("08:00", "12:00").overlaps(&existing));
        assert!(!slot("11:00", "12:00").overlaps(&existing));
    }
}
