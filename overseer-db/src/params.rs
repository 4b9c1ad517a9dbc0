//! Positional SQL parameter values.
//!
//! The fire-and-forget helpers take their parameters as owned values so the
//! spawned task can outlive the caller. `SqlParam` covers the types plugins
//! actually store; binding happens in declaration order.

use sqlx::mysql::MySqlArguments;
use sqlx::query::Query;
use sqlx::MySql;

/// An owned value bound to a `?` placeholder
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    Null,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
}

impl From<bool> for SqlParam {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for SqlParam {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<i64> for SqlParam {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for SqlParam {
    fn from(value: u32) -> Self {
        Self::Uint(value.into())
    }
}

impl From<u64> for SqlParam {
    fn from(value: u64) -> Self {
        Self::Uint(value)
    }
}

impl From<f64> for SqlParam {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for SqlParam {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for SqlParam {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<u8>> for SqlParam {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

impl<T: Into<SqlParam>> From<Option<T>> for SqlParam {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Self::Null)
    }
}

/// Bind a slice of values to a query, in order.
pub fn bind_params<'q>(
    mut query: Query<'q, MySql, MySqlArguments>,
    params: &'q [SqlParam],
) -> Query<'q, MySql, MySqlArguments> {
    for param in params {
        query = match param {
            SqlParam::Null => query.bind(Option::<String>::None),
            SqlParam::Bool(value) => query.bind(*value),
            SqlParam::Int(value) => query.bind(*value),
            SqlParam::Uint(value) => query.bind(*value),
            SqlParam::Float(value) => query.bind(*value),
            SqlParam::Text(value) => query.bind(value.as_str()),
            SqlParam::Bytes(value) => query.bind(value.as_slice()),
        };
    }
    query
}
