use log::trace;

use crate::{BeanError, util::datetime::DateTimePattern};

use super::value::{FieldKind, Value};

/// Adapts a field value to the kind of its target field.
///
/// A converter is a strategy object handed to the copier at construction time or
/// per call; the copier calls it once per shared field and assigns the result to
/// the target, including fields whose kinds already match. Implementations must be
/// pure. A converter that cannot produce a value returns [`BeanError::Conversion`]
/// instead of guessing.
pub trait Converter: Send + Sync {
    fn convert(&self, value: &Value, target: FieldKind) -> Result<Value, BeanError>;
}

/// Renders temporal and decimal values to text, passes everything else through.
///
/// Values that already have the target kind are returned unchanged.
///
/// | Source value          | Result                                  |
/// |-----------------------|-----------------------------------------|
/// | `Int`, `Long`         | unchanged                               |
/// | `DateTime`, `Date`    | text in the configured pattern          |
/// | `Decimal`             | plain text, never scientific notation   |
/// | anything else         | unchanged                               |
///
/// Since text is passed through, converting an already converted value is a no-op.
#[derive(Debug, Clone, Default)]
pub struct DefaultConverter {
    pattern: DateTimePattern,
}

impl DefaultConverter {
    pub fn new(pattern: DateTimePattern) -> Self {
        Self { pattern }
    }

    pub fn pattern(&self) -> &DateTimePattern {
        &self.pattern
    }
}

impl Converter for DefaultConverter {
    fn convert(&self, value: &Value, target: FieldKind) -> Result<Value, BeanError> {
        trace!("Converting {:?} to {:?}", value, target);
        if value.kind() == Some(target) {
            return Ok(value.clone());
        }
        let converted = match value {
            Value::Int(_) | Value::Long(_) => value.clone(),
            Value::DateTime(datetime) => Value::Text(self.pattern.format_datetime(datetime)),
            Value::Date(date) => Value::Text(
                self.pattern
                    .format_date(date)
                    .map_err(|error| BeanError::Conversion(error.to_string()))?,
            ),
            Value::Decimal(decimal) => Value::Text(decimal.to_plain_string()),
            other => other.clone(),
        };
        Ok(converted)
    }
}

/// Returns every value unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityConverter;

impl Converter for IdentityConverter {
    fn convert(&self, value: &Value, _target: FieldKind) -> Result<Value, BeanError> {
        Ok(value.clone())
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use bigdecimal::BigDecimal;
    use chrono::NaiveDate;

    use super::*;

    fn converter() -> DefaultConverter {
        DefaultConverter::default()
    }

    #[test]
    fn values_of_target_kind_are_untouched() {
        let datetime = NaiveDate::from_ymd_opt(2019, 3, 1)
            .unwrap()
            .and_hms_opt(6, 6, 49)
            .unwrap();
        assert_eq!(
            converter().convert(&Value::DateTime(datetime), FieldKind::DateTime),
            Ok(Value::DateTime(datetime))
        );
        let decimal = Value::Decimal(BigDecimal::from_str("1E+3").unwrap());
        assert_eq!(
            converter().convert(&decimal, FieldKind::Decimal),
            Ok(decimal.clone())
        );
    }

    #[test]
    fn integers_are_untouched() {
        assert_eq!(
            converter().convert(&Value::Int(11), FieldKind::Text),
            Ok(Value::Int(11))
        );
        assert_eq!(
            converter().convert(&Value::Long(11), FieldKind::Text),
            Ok(Value::Long(11))
        );
    }

    #[test]
    fn datetime_is_rendered_with_pattern() {
        let datetime = NaiveDate::from_ymd_opt(2019, 3, 1)
            .unwrap()
            .and_hms_opt(6, 6, 49)
            .unwrap();
        assert_eq!(
            converter().convert(&Value::DateTime(datetime), FieldKind::Text),
            Ok(Value::from("2019-03-01 06:06:49"))
        );
    }

    #[test]
    fn date_needs_a_date_only_pattern() {
        let date = Value::Date(NaiveDate::from_ymd_opt(2019, 3, 1).unwrap());
        assert!(matches!(
            converter().convert(&date, FieldKind::Text),
            Err(BeanError::Conversion(_))
        ));

        let iso = DefaultConverter::new(DateTimePattern::of_pattern("yyyy/MM/dd").unwrap());
        assert_eq!(iso.convert(&date, FieldKind::Text), Ok(Value::from("2019/03/01")));
    }

    #[test]
    fn decimal_is_rendered_plain() {
        let decimal = BigDecimal::from_str("1E+3").unwrap();
        assert_eq!(
            converter().convert(&Value::Decimal(decimal), FieldKind::Text),
            Ok(Value::from("1000"))
        );
        let hundred = BigDecimal::from(100);
        assert_eq!(
            converter().convert(&Value::Decimal(hundred), FieldKind::Text),
            Ok(Value::from("100"))
        );
    }

    #[test]
    fn converted_text_is_stable() {
        let decimal = Value::Decimal(BigDecimal::from_str("12.50").unwrap());
        let once = converter().convert(&decimal, FieldKind::Text).unwrap();
        let twice = converter().convert(&once, FieldKind::Text).unwrap();
        assert_eq!(once, Value::from("12.50"));
        assert_eq!(once, twice);
    }

    #[test]
    fn unknown_kinds_pass_through() {
        let list = Value::List(vec![Value::Bool(true)]);
        assert_eq!(converter().convert(&list, FieldKind::Text), Ok(list.clone()));
        assert_eq!(IdentityConverter.convert(&list, FieldKind::Int), Ok(list));
    }
}
