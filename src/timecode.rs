//! Human time input parsing: `"45"`, `"45s"`, `"2m"`, `"1h 5m"`, `"1:30"`,
//! `"00:01:30"`.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

static CLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{2}):(\d{2}):(\d{2})$").expect("valid regex"));
static SHORT_CLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2}):(\d{2})$").expect("valid regex"));
static HOURS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*(h|hour|hours)").expect("valid regex"));
static MINUTES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*(m|min|minute|minutes)").expect("valid regex"));
static SECONDS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s*(s|sec|second|seconds)").expect("valid regex"));
static BARE_SECONDS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+$").expect("valid regex"));

/// Hours, minutes and seconds as written. Unit forms are not normalised,
/// so `"90s"` stays `(0, 0, 90)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeParts {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl TimeParts {
    pub fn total_seconds(&self) -> Option<u64> {
        self.hours
            .checked_mul(3600)?
            .checked_add(self.minutes.checked_mul(60)?)?
            .checked_add(self.seconds)
    }

    fn from_total(total: u64) -> Self {
        Self {
            hours: total / 3600,
            minutes: (total % 3600) / 60,
            seconds: total % 60,
        }
    }

    fn format(&self) -> String {
        format!("{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

/// Parse time input into its parts.
pub fn parse_parts(input: &str) -> Result<TimeParts> {
    let trimmed = input.trim().to_lowercase();
    let invalid = || Error::invalid_time_format(input);
    let number = |text: &str| text.parse::<u64>().map_err(|_| invalid());

    if let Some(caps) = CLOCK_RE.captures(&trimmed) {
        return Ok(TimeParts {
            hours: number(&caps[1])?,
            minutes: number(&caps[2])?,
            seconds: number(&caps[3])?,
        });
    }

    if let Some(caps) = SHORT_CLOCK_RE.captures(&trimmed) {
        return Ok(TimeParts {
            hours: 0,
            minutes: number(&caps[1])?,
            seconds: number(&caps[2])?,
        });
    }

    let unit = |re: &Regex| -> Result<Option<u64>> {
        re.captures(&trimmed).map(|caps| number(&caps[1])).transpose()
    };
    let hours = unit(&*HOURS_RE)?;
    let minutes = unit(&*MINUTES_RE)?;
    let seconds = unit(&*SECONDS_RE)?;
    if hours.is_some() || minutes.is_some() || seconds.is_some() {
        return Ok(TimeParts {
            hours: hours.unwrap_or(0),
            minutes: minutes.unwrap_or(0),
            seconds: seconds.unwrap_or(0),
        });
    }

    if BARE_SECONDS_RE.is_match(&trimmed) {
        return Ok(TimeParts::from_total(number(&trimmed)?));
    }

    Err(invalid())
}

/// Parse time input and render it as `HH:MM:SS`.
pub fn parse_to_hhmmss(input: &str) -> Result<String> {
    parse_parts(input).map(|parts| parts.format())
}

/// Parse time input into a total number of seconds.
pub fn parse_seconds(input: &str) -> Result<u32> {
    parse_parts(input)?
        .total_seconds()
        .and_then(|total| u32::try_from(total).ok())
        .ok_or_else(|| Error::invalid_time_format(input))
}

/// Format a second count as zero-padded `HH:MM:SS`.
pub fn format_hhmmss(total_seconds: u32) -> String {
    TimeParts::from_total(u64::from(total_seconds)).format()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn test_clock_forms() {
        assert_eq!(parse_to_hhmmss("00:01:30").unwrap(), "00:01:30");
        assert_eq!(parse_to_hhmmss("1:30").unwrap(), "00:01:30");
        assert_eq!(parse_to_hhmmss(" 12:05 ").unwrap(), "00:12:05");
        assert_eq!(parse_seconds("1:30").unwrap(), 90);
        assert_eq!(parse_seconds("01:00:00").unwrap(), 3600);
    }

    #[test]
    fn test_unit_forms() {
        assert_eq!(parse_to_hhmmss("5s").unwrap(), "00:00:05");
        assert_eq!(parse_to_hhmmss("2m").unwrap(), "00:02:00");
        assert_eq!(parse_to_hhmmss("1h 5m 3s").unwrap(), "01:05:03");
        assert_eq!(parse_to_hhmmss("2 Hours").unwrap(), "02:00:00");
        assert_eq!(parse_seconds("1 min 15 sec").unwrap(), 75);
    }

    #[test]
    fn test_unit_forms_not_normalised() {
        assert_eq!(parse_to_hhmmss("90s").unwrap(), "00:00:90");
        assert_eq!(parse_seconds("90s").unwrap(), 90);
    }

    #[test]
    fn test_bare_seconds() {
        assert_eq!(parse_to_hhmmss("45").unwrap(), "00:00:45");
        assert_eq!(parse_to_hhmmss("3725").unwrap(), "01:02:05");
        assert_eq!(parse_seconds("60").unwrap(), 60);
    }

    #[test]
    fn test_invalid() {
        for input in ["", "soon", "1:2:3:4", "-5", "1.5"] {
            let err = parse_to_hhmmss(input).unwrap_err();
            assert_eq!(err.code(), ErrorCode::InvalidTimeFormat, "input {:?}", input);
        }
        assert!(parse_seconds("99999999999999999999").is_err());
        assert!(parse_seconds("9999999h").is_err());
    }

    #[test]
    fn test_format_hhmmss() {
        assert_eq!(format_hhmmss(0), "00:00:00");
        assert_eq!(format_hhmmss(45), "00:00:45");
        assert_eq!(format_hhmmss(3661), "01:01:01");
    }
}
