//! JSON (de)serialization for Record and Value.
//!
//! ## Read Format
//!
//! A record is a flat JSON object. Each member becomes one field:
//! - integers that fit in 32 bits become `Int`, larger ones `Long`
//! - other numbers become `Float`
//! - strings shaped exactly like `YYYY-MM-DD` become `Date`
//! - RFC 3339 timestamps become `DateTime`
//! - arrays and objects are kept as `Json`
//!
//! ## Write Format
//!
//! Fields serialize as their natural JSON form; dates are written back as
//! `YYYY-MM-DD` strings so a record survives a round trip.

use std::fmt;

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde::de::MapAccess;
use serde::de::Visitor;
use serde::ser::SerializeMap;

use super::Record;
use super::Value;

// =============================================================================
// Value
// =============================================================================

impl Value {
    /// Converts a parsed JSON value into a field value.
    pub fn from_json(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    match i32::try_from(i) {
                        Ok(small) => Value::Int(small),
                        Err(_) => Value::Long(i),
                    }
                } else {
                    n.as_f64().map(Value::Float).unwrap_or(Value::Null)
                }
            }
            serde_json::Value::String(s) => parse_temporal(&s).unwrap_or(Value::String(s)),
            other => Value::Json(other),
        }
    }
}

/// Recognizes ISO dates and RFC 3339 timestamps.
fn parse_temporal(s: &str) -> Option<Value> {
    if s.len() == 10
        && let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d")
    {
        return Some(Value::Date(date));
    }
    if s.len() > 10
        && s.as_bytes().get(10) == Some(&b'T')
        && let Ok(dt) = DateTime::parse_from_rfc3339(s)
    {
        return Some(Value::DateTime(dt.with_timezone(&Utc)));
    }
    None
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        serde_json::Value::deserialize(deserializer).map(Value::from_json)
    }
}

// =============================================================================
// Record
// =============================================================================

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(RecordVisitor)
    }
}

struct RecordVisitor;

impl<'de> Visitor<'de> for RecordVisitor {
    type Value = Record;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a JSON object")
    }

    fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut record = Record::new();
        while let Some((key, value)) = access.next_entry::<String, Value>()? {
            record.fields.insert(key, value);
        }
        Ok(record)
    }
}
