use bigdecimal::BigDecimal;
use chrono::{NaiveDate, NaiveDateTime};

/// Declared kind of a bean field.
///
/// Two fields are considered compatible by the copier when their kinds are equal,
/// regardless of nullability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Bool,
    Int,
    Long,
    Double,
    Text,
    DateTime,
    Date,
    Decimal,
    List,
}

/// A field value extracted from, or assigned to, a bean.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i32),
    Long(i64),
    Double(f64),
    Text(String),
    DateTime(NaiveDateTime),
    Date(NaiveDate),
    Decimal(BigDecimal),
    List(Vec<Value>),
}

impl Value {
    /// Returns the kind of this value, or `None` for [`Value::Null`].
    pub fn kind(&self) -> Option<FieldKind> {
        match self {
            Value::Null => None,
            Value::Bool(_) => Some(FieldKind::Bool),
            Value::Int(_) => Some(FieldKind::Int),
            Value::Long(_) => Some(FieldKind::Long),
            Value::Double(_) => Some(FieldKind::Double),
            Value::Text(_) => Some(FieldKind::Text),
            Value::DateTime(_) => Some(FieldKind::DateTime),
            Value::Date(_) => Some(FieldKind::Date),
            Value::Decimal(_) => Some(FieldKind::Decimal),
            Value::List(_) => Some(FieldKind::List),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

/// Mapping between a Rust field type and its [`Value`] representation.
///
/// Implemented for the scalar types the copier understands, for `Vec<T>` and for
/// `Option<T>`. The [`bean!`](crate::bean) macro relies on this trait to build the
/// static field table of a bean and its getters / setters.
pub trait FieldValue: Sized {
    /// Kind reported in the bean's field table.
    const KIND: FieldKind;

    /// Whether the field accepts [`Value::Null`].
    const NULLABLE: bool = false;

    fn to_value(&self) -> Value;

    /// Converts a value back into the field type, handing the value back when it
    /// does not fit.
    fn from_value(value: Value) -> Result<Self, Value>;
}

macro_rules! scalar_field {
    ($ty:ty, $kind:ident) => {
        impl FieldValue for $ty {
            const KIND: FieldKind = FieldKind::$kind;

            fn to_value(&self) -> Value {
                Value::$kind(self.clone())
            }

            fn from_value(value: Value) -> Result<Self, Value> {
                match value {
                    Value::$kind(inner) => Ok(inner),
                    other => Err(other),
                }
            }
        }
    };
}

scalar_field!(bool, Bool);
scalar_field!(i32, Int);
scalar_field!(f64, Double);
scalar_field!(String, Text);
scalar_field!(NaiveDateTime, DateTime);
scalar_field!(NaiveDate, Date);
scalar_field!(BigDecimal, Decimal);

impl FieldValue for i64 {
    const KIND: FieldKind = FieldKind::Long;

    fn to_value(&self) -> Value {
        Value::Long(*self)
    }

    // `Int` widens.
    fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::Long(inner) => Ok(inner),
            Value::Int(inner) => Ok(i64::from(inner)),
            other => Err(other),
        }
    }
}

impl<T: FieldValue> FieldValue for Option<T> {
    const KIND: FieldKind = T::KIND;
    const NULLABLE: bool = true;

    fn to_value(&self) -> Value {
        match self {
            Some(inner) => inner.to_value(),
            None => Value::Null,
        }
    }

    fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::Null => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}

impl<T: FieldValue> FieldValue for Vec<T> {
    const KIND: FieldKind = FieldKind::List;

    fn to_value(&self) -> Value {
        Value::List(self.iter().map(FieldValue::to_value).collect())
    }

    fn from_value(value: Value) -> Result<Self, Value> {
        match value {
            Value::List(items) => {
                let converted: Result<Vec<T>, Value> =
                    items.iter().cloned().map(T::from_value).collect();
                converted.map_err(|_| Value::List(items))
            }
            other => Err(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn option_round_trips_null() {
        let none: Option<String> = None;
        assert_eq!(none.to_value(), Value::Null);
        assert_eq!(Option::<String>::from_value(Value::Null), Ok(None));
        assert!(<Option<String> as FieldValue>::NULLABLE);
        assert!(!<String as FieldValue>::NULLABLE);
    }

    #[test]
    fn long_accepts_int() {
        assert_eq!(i64::from_value(Value::Int(7)), Ok(7));
        assert_eq!(i32::from_value(Value::Long(7)), Err(Value::Long(7)));
    }

    #[test]
    fn mismatched_value_is_handed_back() {
        let decimal = BigDecimal::from_str("1.50").unwrap();
        let rejected = String::from_value(Value::Decimal(decimal.clone()));
        assert_eq!(rejected, Err(Value::Decimal(decimal)));
    }

    #[test]
    fn list_of_ints() {
        let ids = vec![1, 2, 3];
        let value = ids.to_value();
        assert_eq!(value.kind(), Some(FieldKind::List));
        assert_eq!(Vec::<i32>::from_value(value), Ok(ids));
        assert!(Vec::<i32>::from_value(Value::List(vec![Value::from("x")])).is_err());
    }
}
