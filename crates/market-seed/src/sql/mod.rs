//! Rendering of generated records into insert statements.
//!
//! Records describe themselves as an ordered list of [`SqlValue`]s matching
//! their table's column order ([`SqlRecord`]); [`SqlRenderer`] turns those
//! into literal text. Escaping and column ordering can therefore be tested
//! without looking at statement text.

mod records;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::errors::SeedError;
use crate::generators::{DerivedTimestamps, Price};

/// Doubles every single quote so `text` can sit inside a quoted literal.
pub fn escape_literal(text: &str) -> String {
    text.replace('\'', "''")
}

/// Inverse of [`escape_literal`].
pub fn unescape_literal(text: &str) -> String {
    text.replace("''", "'")
}

/// A timestamp column value. Keeps the day/hour offsets it was derived from
/// so it can be rendered relative to the execution time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SqlTimestamp {
    pub at: OffsetDateTime,
    pub days_ago: i64,
    pub hours_ago: i64,
}

impl SqlTimestamp {
    /// Splits derived timestamps into `(created_at, updated_at)` values.
    pub fn pair(timestamps: &DerivedTimestamps) -> (Self, Self) {
        let created = Self {
            at: timestamps.created_at,
            days_ago: timestamps.age.days_ago,
            hours_ago: timestamps.age.hours_ago,
        };
        let updated = Self {
            at: timestamps.updated_at,
            days_ago: timestamps.age.days_ago - 1,
            hours_ago: 0,
        };
        (created, updated)
    }
}

/// A single column value.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    Integer(i64),
    Decimal(Price),
    Text(String),
    TextArray(Vec<String>),
    Timestamp(SqlTimestamp),
}

impl SqlValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }
}

/// A record that maps onto one row of a table.
pub trait SqlRecord {
    const TABLE: &'static str;
    const COLUMNS: &'static [&'static str];

    /// Values in [`Self::COLUMNS`] order.
    fn values(&self) -> Vec<SqlValue>;
}

/// How timestamp values are written out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampStyle {
    /// RFC 3339 literal computed at generation time.
    #[default]
    Absolute,
    /// `now() - INTERVAL ...`, evaluated when the statement runs.
    RelativeToNow,
}

/// Renders values, rows and insert statements.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqlRenderer {
    timestamp_style: TimestampStyle,
}

impl SqlRenderer {
    pub fn new(timestamp_style: TimestampStyle) -> Self {
        Self { timestamp_style }
    }

    pub fn render_value(&self, value: &SqlValue) -> Result<String, SeedError> {
        Ok(match value {
            SqlValue::Integer(n) => n.to_string(),
            SqlValue::Decimal(price) => price.to_string(),
            SqlValue::Text(text) => quote(text),
            SqlValue::TextArray(items) => {
                let items: Vec<String> = items.iter().map(|item| quote(item)).collect();
                format!("ARRAY[{}]", items.join(", "))
            }
            SqlValue::Timestamp(ts) => self.render_timestamp(ts)?,
        })
    }

    fn render_timestamp(&self, ts: &SqlTimestamp) -> Result<String, SeedError> {
        match self.timestamp_style {
            TimestampStyle::Absolute => {
                let formatted = ts.at.format(&Rfc3339)?;
                Ok(format!("TIMESTAMP WITH TIME ZONE '{formatted}'"))
            }
            TimestampStyle::RelativeToNow => {
                let mut expr = format!("now() - INTERVAL '{}' DAY", ts.days_ago);
                if ts.hours_ago > 0 {
                    expr.push_str(&format!(" - INTERVAL '{}' HOUR", ts.hours_ago));
                }
                Ok(expr)
            }
        }
    }

    /// Renders a parenthesized, comma-separated literal list.
    pub fn render_row(&self, values: &[SqlValue]) -> Result<String, SeedError> {
        let rendered = values
            .iter()
            .map(|value| self.render_value(value))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(format!("({})", rendered.join(", ")))
    }

    /// Renders a multi-row insert for `records`, or `None` when there are no
    /// rows to insert.
    pub fn render_insert<R: SqlRecord>(&self, records: &[R]) -> Result<Option<String>, SeedError> {
        if records.is_empty() {
            return Ok(None);
        }

        let rows = records
            .iter()
            .map(|record| {
                let values = record.values();
                debug_assert_eq!(values.len(), R::COLUMNS.len());
                self.render_row(&values)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Some(format!(
            "INSERT INTO {} ({}) VALUES\n{};",
            R::TABLE,
            R::COLUMNS.join(", "),
            rows.join(",\n")
        )))
    }
}

fn quote(text: &str) -> String {
    format!("'{}'", escape_literal(text))
}
