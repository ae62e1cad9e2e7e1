use std::collections::BTreeMap;

use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// New value of a single column in a partial update.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    NullableText(Option<String>),
    Integer(i32),
    Timestamp(DateTime<Utc>),
    Decimal(BigDecimal),
}

/// Column name to new value. Only columns whose value changes are present.
pub type FieldDiff = BTreeMap<&'static str, FieldValue>;

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<Option<String>> for FieldValue {
    fn from(value: Option<String>) -> Self {
        FieldValue::NullableText(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        FieldValue::Timestamp(value)
    }
}

impl From<BigDecimal> for FieldValue {
    fn from(value: BigDecimal) -> Self {
        FieldValue::Decimal(value)
    }
}

/// Records `column` in `diff` when a requested value differs from the stored one.
pub fn record_change<T>(diff: &mut FieldDiff, column: &'static str, current: &T, requested: Option<&T>)
where
    T: PartialEq + Clone + Into<FieldValue>,
{
    if let Some(requested) = requested
        && requested != current
    {
        diff.insert(column, requested.clone().into());
    }
}
