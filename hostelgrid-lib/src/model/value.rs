//! Value enum for dynamic field values

use std::cmp::Ordering;
use std::fmt;

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::NaiveTime;
use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;
use uuid::Uuid;

/// A dynamic value read from one field of a row.
///
/// Rows expose their fields through [`Row::field`](super::Row::field), which
/// returns this enum. The query pipeline compares, matches and searches rows
/// exclusively through it.
///
/// # Type Mapping
///
/// | JSON / source type | Rust Variant |
/// |--------------------|--------------|
/// | null | `Null` |
/// | boolean | `Bool` |
/// | integer (32-bit) | `Int` |
/// | integer (64-bit) | `Long` |
/// | floating point | `Float` |
/// | money, exact decimals | `Decimal` |
/// | string | `String` |
/// | `YYYY-MM-DD` string | `Date` |
/// | RFC 3339 string | `DateTime` |
/// | uuid | `Guid` |
/// | array, object | `Json` |
///
/// # Example
///
/// ```
/// use hostelgrid_lib::model::Value;
///
/// let name = Value::from("Arun Kumar");
/// let age = Value::from(21);
/// let resident = Value::from(true);
/// let empty = Value::Null;
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Null/empty value.
    #[default]
    Null,
    /// Boolean value.
    Bool(bool),
    /// 32-bit integer.
    Int(i32),
    /// 64-bit integer.
    Long(i64),
    /// 64-bit floating point.
    Float(f64),
    /// Arbitrary precision decimal.
    Decimal(Decimal),
    /// String value.
    String(String),
    /// Calendar date without time.
    Date(NaiveDate),
    /// Date and time with timezone.
    DateTime(DateTime<Utc>),
    /// GUID/UUID value.
    Guid(Uuid),
    /// Fallback for nested JSON values.
    Json(serde_json::Value),
}

/// Numeric view used to compare across integer, float and decimal variants.
#[derive(Debug, Clone, Copy)]
enum Number {
    Integer(i64),
    Float(f64),
    Decimal(Decimal),
}

impl Number {
    fn as_f64(self) -> Option<f64> {
        match self {
            Number::Integer(n) => Some(n as f64),
            Number::Float(f) => Some(f),
            Number::Decimal(d) => d.to_f64(),
        }
    }

    fn cmp(self, other: Number) -> Option<Ordering> {
        match (self, other) {
            (Number::Integer(a), Number::Integer(b)) => Some(a.cmp(&b)),
            (Number::Decimal(a), Number::Decimal(b)) => Some(a.cmp(&b)),
            (Number::Integer(a), Number::Decimal(b)) => Some(Decimal::from(a).cmp(&b)),
            (Number::Decimal(a), Number::Integer(b)) => Some(a.cmp(&Decimal::from(b))),
            _ => self.as_f64()?.partial_cmp(&other.as_f64()?),
        }
    }
}

fn midnight_utc(date: &NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

impl Value {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns `true` for values a filter treats as "not set": null and the
    /// empty string.
    pub fn is_blank(&self) -> bool {
        match self {
            Value::Null => true,
            Value::String(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Long(_) => "long",
            Value::Float(_) => "float",
            Value::Decimal(_) => "decimal",
            Value::String(_) => "string",
            Value::Date(_) => "date",
            Value::DateTime(_) => "datetime",
            Value::Guid(_) => "guid",
            Value::Json(_) => "json",
        }
    }

    /// Returns the string slice if this is a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    fn as_number(&self) -> Option<Number> {
        match self {
            Value::Int(n) => Some(Number::Integer(i64::from(*n))),
            Value::Long(n) => Some(Number::Integer(*n)),
            Value::Float(f) => Some(Number::Float(*f)),
            Value::Decimal(d) => Some(Number::Decimal(*d)),
            _ => None,
        }
    }

    /// Compares two values by their natural order.
    ///
    /// Numbers compare numerically across `Int`, `Long`, `Float` and
    /// `Decimal`, strings lexicographically, dates chronologically (a `Date`
    /// is midnight UTC when compared with a `DateTime`) and `false < true`.
    ///
    /// Returns `None` when the two values have no common order, including
    /// NaN and any comparison involving `Null` or `Json`.
    pub fn natural_cmp(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
            (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
            (Value::Date(a), Value::Date(b)) => Some(a.cmp(b)),
            (Value::DateTime(a), Value::DateTime(b)) => Some(a.cmp(b)),
            (Value::Date(a), Value::DateTime(b)) => Some(midnight_utc(a).cmp(b)),
            (Value::DateTime(a), Value::Date(b)) => Some(a.cmp(&midnight_utc(b))),
            (Value::Guid(a), Value::Guid(b)) => Some(a.cmp(b)),
            _ => self.as_number()?.cmp(other.as_number()?),
        }
    }

    /// Compares two values, falling back to a fixed order between types.
    ///
    /// Unlike [`natural_cmp`](Self::natural_cmp) this is a total order, so
    /// a column mixing dates, text and numbers can always be sorted. Types
    /// rank `Null < Bool < numbers < dates < String < Guid < Json`; within a
    /// rank the natural order applies, NaN sorts above every other number
    /// and `Json` values compare by their text.
    pub fn total_cmp(&self, other: &Value) -> Ordering {
        self.rank()
            .cmp(&other.rank())
            .then_with(|| match self.natural_cmp(other) {
                Some(ord) => ord,
                None => match (self.is_nan(), other.is_nan()) {
                    (true, true) => Ordering::Equal,
                    (true, false) => Ordering::Greater,
                    (false, true) => Ordering::Less,
                    (false, false) => self.to_string().cmp(&other.to_string()),
                },
            })
    }

    fn rank(&self) -> u8 {
        match self {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Int(_) | Value::Long(_) | Value::Float(_) | Value::Decimal(_) => 2,
            Value::Date(_) | Value::DateTime(_) => 3,
            Value::String(_) => 4,
            Value::Guid(_) => 5,
            Value::Json(_) => 6,
        }
    }

    fn is_nan(&self) -> bool {
        matches!(self, Value::Float(f) if f.is_nan())
    }

    /// Exact equality as used by categorical filters.
    ///
    /// Numeric variants are equal when their values are equal (`Int(3)`
    /// matches `Long(3)`); every other variant must match in type and
    /// payload. Text is never compared as a substring here.
    pub fn matches_exact(&self, other: &Value) -> bool {
        match (self.as_number(), other.as_number()) {
            (Some(a), Some(b)) => a.cmp(b) == Some(Ordering::Equal),
            _ => self == other,
        }
    }

    /// Returns the text a free-text search looks at, or `None` for null.
    pub fn search_text(&self) -> Option<String> {
        match self {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(n) => write!(f, "{}", n),
            Value::Long(n) => write!(f, "{}", n),
            Value::Float(n) => write!(f, "{}", n),
            Value::Decimal(d) => write!(f, "{}", d),
            Value::String(s) => f.write_str(s),
            Value::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Value::DateTime(dt) => f.write_str(&dt.to_rfc3339()),
            Value::Guid(g) => write!(f, "{}", g),
            Value::Json(j) => write!(f, "{}", j),
        }
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Long(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Long(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<Decimal> for Value {
    fn from(v: Decimal) -> Self {
        Value::Decimal(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::String(v.clone())
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::Date(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::DateTime(v)
    }
}

impl From<Uuid> for Value {
    fn from(v: Uuid) -> Self {
        Value::Guid(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_cmp_across_variants() {
        assert_eq!(
            Value::Int(3).natural_cmp(&Value::Long(4)),
            Some(Ordering::Less)
        );
        assert_eq!(
            Value::Float(2.5).natural_cmp(&Value::Int(2)),
            Some(Ordering::Greater)
        );
        assert_eq!(
            Value::Decimal(Decimal::new(1500, 2)).natural_cmp(&Value::Long(15)),
            Some(Ordering::Equal)
        );
    }

    #[test]
    fn test_nan_is_not_comparable() {
        assert_eq!(Value::Float(f64::NAN).natural_cmp(&Value::Float(1.0)), None);
    }

    #[test]
    fn test_mixed_types_not_comparable() {
        assert_eq!(Value::from("10").natural_cmp(&Value::Int(10)), None);
        assert_eq!(Value::Null.natural_cmp(&Value::Null), None);
    }

    #[test]
    fn test_total_cmp_ranks_types() {
        let date = Value::Date(NaiveDate::from_ymd_opt(2023, 1, 15).unwrap());
        assert_eq!(Value::Int(99).total_cmp(&date), Ordering::Less);
        assert_eq!(date.total_cmp(&Value::from("2022")), Ordering::Less);
        assert_eq!(Value::from("a").total_cmp(&Value::Int(0)), Ordering::Greater);
        assert_eq!(Value::Int(1).total_cmp(&Value::Int(0)), Ordering::Greater);
    }

    #[test]
    fn test_total_cmp_nan_and_json() {
        let nan = Value::Float(f64::NAN);
        assert_eq!(nan.total_cmp(&Value::Float(f64::INFINITY)), Ordering::Greater);
        assert_eq!(Value::Int(i32::MAX).total_cmp(&nan), Ordering::Less);
        assert_eq!(nan.total_cmp(&Value::Float(f64::NAN)), Ordering::Equal);

        let a = Value::Json(serde_json::json!([1]));
        let b = Value::Json(serde_json::json!([2]));
        assert_eq!(a.total_cmp(&b), Ordering::Less);
        assert_eq!(a.total_cmp(&a.clone()), Ordering::Equal);
    }

    #[test]
    fn test_date_orders_against_datetime() {
        let date = NaiveDate::from_ymd_opt(2023, 1, 15).unwrap();
        let later = DateTime::parse_from_rfc3339("2023-01-15T08:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(
            Value::Date(date).natural_cmp(&Value::DateTime(later)),
            Some(Ordering::Less)
        );
    }

    #[test]
    fn test_matches_exact_is_not_substring() {
        assert!(Value::from("paid").matches_exact(&Value::from("paid")));
        assert!(!Value::from("unpaid").matches_exact(&Value::from("paid")));
        assert!(Value::Int(3).matches_exact(&Value::Long(3)));
    }

    #[test]
    fn test_search_text() {
        assert_eq!(Value::Null.search_text(), None);
        assert_eq!(Value::from("A101").search_text().as_deref(), Some("A101"));
        let date = NaiveDate::from_ymd_opt(2023, 2, 20).unwrap();
        assert_eq!(
            Value::Date(date).search_text().as_deref(),
            Some("2023-02-20")
        );
    }

    #[test]
    fn test_default_is_null() {
        assert_eq!(Value::default(), Value::Null);
        assert!(Value::default().is_blank());
    }

    #[test]
    fn test_blank() {
        assert!(Value::Null.is_blank());
        assert!(Value::from("").is_blank());
        assert!(!Value::from(" ").is_blank());
        assert!(!Value::Int(0).is_blank());
    }
}
