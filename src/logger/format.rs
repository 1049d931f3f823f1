//! Record rendering.
//!
//! Layout of one record:
//!
//! ```text
//! [COLOR][TIMESTAMP|]LEVEL|[NAME|]payload\n[RESET]
//! ```

use std::fmt::{self, Display, Write};

use chrono::{DateTime, Utc};

use crate::config::LoggerConfig;
use crate::level::{Verbosity, RESET};

/// ISO-8601 with millisecond precision, always UTC.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Separator between prefix fields.
pub const SEPARATOR: char = '|';

/// Values rendered with a single space between each.
pub struct Joined<'a>(pub &'a [&'a dyn Display]);

impl Display for Joined<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, value) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_char(' ')?;
            }
            value.fmt(f)?;
        }
        Ok(())
    }
}

/// Render a complete record.
///
/// `trailer` is written on the lines after the payload (used for trace
/// backtraces).
pub fn render(
    config: &LoggerConfig,
    level: Verbosity,
    payload: &dyn Display,
    now: DateTime<Utc>,
    trailer: Option<&dyn Display>,
) -> String {
    let descriptor = config.descriptor(level);
    let mut record = String::with_capacity(64);

    // Writing into a String cannot fail
    let _ = write_record(
        &mut record,
        config,
        descriptor.name,
        descriptor.color,
        payload,
        now,
        trailer,
    );
    record
}

fn write_record(
    out: &mut String,
    config: &LoggerConfig,
    name: &str,
    color: &str,
    payload: &dyn Display,
    now: DateTime<Utc>,
    trailer: Option<&dyn Display>,
) -> fmt::Result {
    if config.colored_console {
        out.push_str(color);
    }

    if config.include_timestamp {
        write!(out, "{}{}", now.format(TIMESTAMP_FORMAT), SEPARATOR)?;
    }

    write!(out, "{}{}", name, SEPARATOR)?;

    if !config.name.is_empty() {
        write!(out, "{}{}", config.name, SEPARATOR)?;
    }

    writeln!(out, "{}", payload)?;

    if let Some(trailer) = trailer {
        let start = out.len();
        write!(out, "{}", trailer)?;
        if out.len() > start && !out.ends_with('\n') {
            out.push('\n');
        }
    }

    if config.colored_console {
        out.push_str(RESET);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap() + chrono::Duration::milliseconds(42)
    }

    #[test]
    fn test_joined() {
        let values: [&dyn Display; 3] = [&"disk", &42, &'!'];
        assert_eq!(Joined(&values).to_string(), "disk 42 !");
        assert_eq!(Joined(&[]).to_string(), "");
    }

    #[test]
    fn test_full_record() {
        let config = LoggerConfig::new("svc", Verbosity::Info);
        let record = render(&config, Verbosity::Warn, &"disk low", fixed_time(), None);
        assert_eq!(
            record,
            "\u{1b}[33m2024-03-09T14:05:07.042Z|WARN|svc|disk low\n\u{1b}[0m"
        );
    }

    #[test]
    fn test_plain_record() {
        let config = LoggerConfig::new("", Verbosity::Trace)
            .with_colors(false)
            .with_timestamp(false);
        let record = render(&config, Verbosity::Fatal, &"boom", fixed_time(), None);
        assert_eq!(record, "FATAL|boom\n");
    }

    #[test]
    fn test_uncolored_level_still_resets() {
        let config = LoggerConfig::new("x", Verbosity::Debug).with_timestamp(false);
        let record = render(&config, Verbosity::Debug, &"msg", fixed_time(), None);
        assert_eq!(record, "DEBUG|x|msg\n\u{1b}[0m");
    }

    #[test]
    fn test_trailer() {
        let config = LoggerConfig::new("t", Verbosity::Trace)
            .with_colors(false)
            .with_timestamp(false);
        let record = render(&config, Verbosity::Trace, &"here", fixed_time(), Some(&"frame 0"));
        assert_eq!(record, "TRACE|t|here\nframe 0\n");
    }
}
