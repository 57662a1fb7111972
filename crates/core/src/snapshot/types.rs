//! Snapshot data types.

use std::collections::BTreeMap;

use dre_shared::{Field, Metric, serialize_number};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::error::SnapshotError;
use super::parse::parse_float;

/// Value held by one snapshot field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// A number.
    Number(Decimal),
    /// Text, read leniently as a number when a formula needs it.
    Text(String),
    /// Any other JSON value. Never numeric.
    Other(Value),
}

impl FieldValue {
    /// Reads this value as a number.
    #[must_use]
    pub fn as_number(&self) -> Option<Decimal> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(text) => parse_float(text),
            Self::Other(_) => None,
        }
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Number(number) => match parse_float(&number.to_string()) {
                Some(decimal) => Self::Number(decimal),
                None => Self::Other(Value::Number(number)),
            },
            Value::String(text) => Self::Text(text),
            other => Self::Other(other),
        }
    }
}

impl From<Decimal> for FieldValue {
    fn from(value: Decimal) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Number(Decimal::from(value))
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Number(Decimal::from(value))
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Computed figures and sentinels merge as numbers, the placeholder as `""`.
impl From<Metric> for FieldValue {
    fn from(metric: Metric) -> Self {
        metric
            .number()
            .map_or_else(|| Self::Text(String::new()), Self::Number)
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Number(value) => serialize_number(value, serializer),
            Self::Text(text) => serializer.serialize_str(text),
            Self::Other(value) => value.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from)
    }
}

/// How a field reads before defaults are applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    /// The field is not in the snapshot.
    Absent,
    /// The field reads as a number.
    Number(Decimal),
    /// The field is present but does not read as a number.
    NotNumeric,
}

/// One reporting period's figures, keyed by field name.
///
/// Keys the calculators do not know about are kept and passed through.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FinancialSnapshot {
    fields: BTreeMap<String, FieldValue>,
}

impl FinancialSnapshot {
    /// Creates an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a snapshot from a JSON object.
    pub fn from_json_str(json: &str) -> Result<Self, SnapshotError> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Builds a snapshot from a JSON value, which must be an object.
    pub fn from_value(value: Value) -> Result<Self, SnapshotError> {
        match value {
            Value::Object(map) => Ok(map.into_iter().collect()),
            other => Err(SnapshotError::NotAnObject(json_type(&other))),
        }
    }

    /// Returns the snapshot with `key` set to `value`.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets `key` to `value`, returning the previous value.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<FieldValue>,
    ) -> Option<FieldValue> {
        self.fields.insert(key.into(), value.into())
    }

    /// Returns the raw value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    /// Returns the value of `field`, trying its key and then its aliases.
    #[must_use]
    pub fn lookup(&self, field: Field) -> Option<&FieldValue> {
        self.get(field.key()).or_else(|| {
            field
                .aliases()
                .iter()
                .find_map(|alias| self.fields.get(*alias))
        })
    }

    /// Reads `field` without applying defaults.
    #[must_use]
    pub fn operand(&self, field: Field) -> Operand {
        match self.lookup(field).map(FieldValue::as_number) {
            None => Operand::Absent,
            Some(Some(value)) => Operand::Number(value),
            Some(None) => Operand::NotNumeric,
        }
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the snapshot has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over the fields in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for FinancialSnapshot {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

/// Snapshots read from one JSON document.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedSnapshots {
    /// The document was a single object.
    Single(FinancialSnapshot),
    /// The document was an array of objects.
    Batch(Vec<FinancialSnapshot>),
}

impl ParsedSnapshots {
    /// Returns true if the document was an array.
    #[must_use]
    pub const fn is_batch(&self) -> bool {
        matches!(self, Self::Batch(_))
    }

    /// Number of snapshots.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Batch(snapshots) => snapshots.len(),
        }
    }

    /// Returns true for an empty array.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The snapshots in document order.
    #[must_use]
    pub fn into_vec(self) -> Vec<FinancialSnapshot> {
        match self {
            Self::Single(snapshot) => vec![snapshot],
            Self::Batch(snapshots) => snapshots,
        }
    }
}

/// Parses either one snapshot object or an array of snapshot objects.
pub fn parse_snapshots(json: &str) -> Result<ParsedSnapshots, SnapshotError> {
    match serde_json::from_str::<Value>(json)? {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                FinancialSnapshot::from_value(item).map_err(|err| match err {
                    SnapshotError::NotAnObject(found) => {
                        SnapshotError::ItemNotAnObject { index, found }
                    }
                    other => other,
                })
            })
            .collect::<Result<_, _>>()
            .map(ParsedSnapshots::Batch),
        other => FinancialSnapshot::from_value(other).map(ParsedSnapshots::Single),
    }
}

const fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
