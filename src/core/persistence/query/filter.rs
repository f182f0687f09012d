//! Filter predicates applied to list queries.

use chrono::NaiveDate;
use rusqlite::types::ToSqlOutput;
use rusqlite::ToSql;

/// A value bound into a filter predicate.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Int(i64),
    Real(f64),
    Text(String),
}

impl ToSql for FilterValue {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self {
            FilterValue::Int(v) => v.to_sql(),
            FilterValue::Real(v) => v.to_sql(),
            FilterValue::Text(v) => v.to_sql(),
        }
    }
}

impl From<i64> for FilterValue {
    fn from(v: i64) -> Self {
        FilterValue::Int(v)
    }
}

impl From<f64> for FilterValue {
    fn from(v: f64) -> Self {
        FilterValue::Real(v)
    }
}

impl From<String> for FilterValue {
    fn from(v: String) -> Self {
        FilterValue::Text(v)
    }
}

impl From<&str> for FilterValue {
    fn from(v: &str) -> Self {
        FilterValue::Text(v.to_string())
    }
}

impl From<NaiveDate> for FilterValue {
    fn from(v: NaiveDate) -> Self {
        // Dates are stored as ISO-8601 text, which compares correctly
        // under SQLite's text ordering.
        FilterValue::Text(v.to_string())
    }
}

/// One per-column condition. Multiple filters on a request AND together.
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// Exact match, used for identifiers and foreign keys.
    Equals {
        column: &'static str,
        value: FilterValue,
    },
    /// Case-sensitive substring match for free-text columns.
    Contains {
        column: &'static str,
        needle: String,
    },
    /// Inclusive lower/upper bound for date or numeric columns. Both
    /// bounds may be present; they AND together.
    Range {
        column: &'static str,
        min: Option<FilterValue>,
        max: Option<FilterValue>,
    },
}

impl Filter {
    pub fn equals(column: &'static str, value: impl Into<FilterValue>) -> Self {
        Filter::Equals {
            column,
            value: value.into(),
        }
    }

    pub fn contains(column: &'static str, needle: impl Into<String>) -> Self {
        Filter::Contains {
            column,
            needle: needle.into(),
        }
    }

    pub fn range(
        column: &'static str,
        min: Option<FilterValue>,
        max: Option<FilterValue>,
    ) -> Self {
        Filter::Range { column, min, max }
    }

    /// Append this predicate's SQL to `sql` and its bound values to `params`.
    pub(crate) fn push_predicate(&self, sql: &mut String, params: &mut Vec<FilterValue>) {
        match self {
            Filter::Equals { column, value } => {
                sql.push_str(&format!("({column} = ?)"));
                params.push(value.clone());
            }
            Filter::Contains { column, needle } => {
                sql.push_str(&format!("({column} LIKE ? ESCAPE '\\')"));
                params.push(FilterValue::Text(format!("%{}%", escape_like(needle))));
            }
            Filter::Range { column, min, max } => match (min, max) {
                (Some(lo), Some(hi)) => {
                    sql.push_str(&format!("({column} >= ? AND {column} <= ?)"));
                    params.push(lo.clone());
                    params.push(hi.clone());
                }
                (Some(lo), None) => {
                    sql.push_str(&format!("({column} >= ?)"));
                    params.push(lo.clone());
                }
                (None, Some(hi)) => {
                    sql.push_str(&format!("({column} <= ?)"));
                    params.push(hi.clone());
                }
                (None, None) => sql.push_str("(1 = 1)"),
            },
        }
    }
}

/// `%` and `_` are wildcards inside LIKE patterns; a literal occurrence
/// in the user's needle must not widen the match.
fn escape_like(needle: &str) -> String {
    needle
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}
