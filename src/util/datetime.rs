use std::fmt::Write;

use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime};

use crate::BeanError;

/// `yyyyMMdd`, e.g. `20140116`.
pub const BASIC_ISO_DATE: &str = "yyyyMMdd";

/// `yyyy-MM-dd`, e.g. `2018-12-11`.
pub const ISO_DATE: &str = "yyyy-MM-dd";

/// Pattern used by the default value converter.
pub const DEFAULT_DATETIME: &str = "yyyy-MM-dd HH:mm:ss";

/// A compiled `DateTimeFormatter`-style pattern.
///
/// Patterns use the familiar letter syntax (`yyyy-MM-dd HH:mm:ss`) and are
/// translated once into a chrono format string.
///
/// | Letters      | Meaning                    |
/// |--------------|----------------------------|
/// | `yyyy`, `yy` | year, two-digit year       |
/// | `M`..`MMMM`  | month, number or name      |
/// | `d`, `dd`    | day of month               |
/// | `H`, `HH`    | hour of day (0-23)         |
/// | `h`, `hh`    | clock hour (1-12)          |
/// | `m`, `mm`    | minute                     |
/// | `s`, `ss`    | second                     |
/// | `SSS`        | fraction, 3, 6 or 9 digits |
/// | `a`          | AM/PM marker               |
/// | `EEE`, `EEEE`| day of week name           |
///
/// Text between single quotes is copied literally, `''` is a quote.
///
/// ```
/// use bean_copier_rs::util::datetime::DateTimePattern;
/// use chrono::NaiveDate;
///
/// let pattern = DateTimePattern::of_pattern("yyyy-MM-dd HH:mm:ss").unwrap();
/// let dt = NaiveDate::from_ymd_opt(2019, 3, 1)
///     .unwrap()
///     .and_hms_opt(6, 6, 49)
///     .unwrap();
/// assert_eq!(pattern.format_datetime(&dt), "2019-03-01 06:06:49");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTimePattern {
    pattern: String,
    chrono_format: String,
}

impl DateTimePattern {
    pub fn of_pattern(pattern: &str) -> Result<Self, BeanError> {
        Ok(Self {
            pattern: pattern.to_string(),
            chrono_format: compile(pattern)?,
        })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn format_datetime(&self, datetime: &NaiveDateTime) -> String {
        datetime.format(&self.chrono_format).to_string()
    }

    /// Formats a date, failing when the pattern asks for time of day fields.
    pub fn format_date(&self, date: &NaiveDate) -> Result<String, BeanError> {
        let mut formatted = String::new();
        write!(formatted, "{}", date.format(&self.chrono_format)).map_err(|_| {
            BeanError::Pattern(format!(
                "{} can't be formatted with {}",
                date, self.pattern
            ))
        })?;
        Ok(formatted)
    }

    pub fn parse_date(&self, text: &str) -> Result<NaiveDate, BeanError> {
        NaiveDate::parse_from_str(text, &self.chrono_format)
            .map_err(|error| self.parse_error(text, error))
    }

    pub fn parse_datetime(&self, text: &str) -> Result<NaiveDateTime, BeanError> {
        NaiveDateTime::parse_from_str(text, &self.chrono_format)
            .map_err(|error| self.parse_error(text, error))
    }

    fn parse_error(&self, text: &str, error: chrono::ParseError) -> BeanError {
        BeanError::Pattern(format!(
            "{} is not parsable with {}: {}",
            text, self.pattern, error
        ))
    }
}

impl Default for DateTimePattern {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_DATETIME.to_string(),
            chrono_format: "%Y-%m-%d %H:%M:%S".to_string(),
        }
    }
}

fn compile(pattern: &str) -> Result<String, BeanError> {
    let chars: Vec<char> = pattern.chars().collect();
    let mut format = String::with_capacity(pattern.len() * 2);
    let mut index = 0;

    while index < chars.len() {
        let current = chars[index];

        if current == '\'' {
            if chars.get(index + 1) == Some(&'\'') {
                format.push('\'');
                index += 2;
                continue;
            }
            index += 1;
            loop {
                match (chars.get(index), chars.get(index + 1)) {
                    (Some('\''), Some('\'')) => {
                        format.push('\'');
                        index += 2;
                    }
                    (Some('\''), _) => {
                        index += 1;
                        break;
                    }
                    (Some(literal), _) => {
                        push_literal(&mut format, *literal);
                        index += 1;
                    }
                    (None, _) => {
                        return Err(BeanError::Pattern(format!(
                            "unterminated quote in pattern {}",
                            pattern
                        )));
                    }
                }
            }
            continue;
        }

        if !current.is_ascii_alphabetic() {
            push_literal(&mut format, current);
            index += 1;
            continue;
        }

        let count = chars[index..]
            .iter()
            .take_while(|c| **c == current)
            .count();
        format.push_str(specifier(current, count).ok_or_else(|| {
            BeanError::Pattern(format!(
                "unsupported pattern letters {} in {}",
                current.to_string().repeat(count),
                pattern
            ))
        })?);
        index += count;
    }

    Ok(format)
}

fn push_literal(format: &mut String, literal: char) {
    if literal == '%' {
        format.push_str("%%");
    } else {
        format.push(literal);
    }
}

fn specifier(letter: char, count: usize) -> Option<&'static str> {
    let spec = match (letter, count) {
        ('y', 2) => "%y",
        ('y', _) => "%Y",
        ('M', 1) => "%-m",
        ('M', 2) => "%m",
        ('M', 3) => "%b",
        ('M', _) => "%B",
        ('d', 1) => "%-d",
        ('d', 2) => "%d",
        ('H', 1) => "%-H",
        ('H', 2) => "%H",
        ('h', 1) => "%-I",
        ('h', 2) => "%I",
        ('m', 1) => "%-M",
        ('m', 2) => "%M",
        ('s', 1) => "%-S",
        ('s', 2) => "%S",
        ('S', 3) => "%3f",
        ('S', 6) => "%6f",
        ('S', 9) => "%9f",
        ('a', 1) => "%p",
        ('E', 1..=3) => "%a",
        ('E', _) => "%A",
        _ => return None,
    };
    Some(spec)
}

pub fn is_leap_year(date: &NaiveDate) -> bool {
    NaiveDate::from_ymd_opt(date.year(), 2, 29).is_some()
}

pub fn plus_weeks(date: &NaiveDate, weeks: i64) -> Option<NaiveDate> {
    date.checked_add_signed(Duration::try_weeks(weeks)?)
}

pub fn minus_years(date: &NaiveDate, years: u32) -> Option<NaiveDate> {
    date.checked_sub_months(Months::new(years.checked_mul(12)?))
}
