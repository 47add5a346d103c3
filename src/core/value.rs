use chrono::NaiveDate;

/// A literal spliced into a hand-built SQL statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Null,
    Integer(i64),
    Text(String),
    Date(NaiveDate),
}

impl Value {
    #[must_use]
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    /// Renders the value as a SQL literal (strings quoted and escaped)
    #[must_use]
    pub fn to_sql(&self) -> String {
        match self {
            Self::Null => "NULL".to_string(),
            Self::Integer(i) => i.to_string(),
            Self::Text(s) => format!("'{}'", escape_sql_string(s)),
            Self::Date(d) => format!("'{}'", d.format("%Y-%m-%d")),
        }
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Integer(i64::from(v))
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Self::Date(v)
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Text(s) => write!(f, "{s}"),
            Self::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
        }
    }
}

/// Escape single quotes in SQL strings
#[must_use]
pub fn escape_sql_string(s: &str) -> String {
    s.replace('\'', "''")
}

/// Joins values into the parenthesised list of an `INSERT ... VALUES` clause
#[must_use]
pub fn values_list(values: &[Value]) -> String {
    let rendered = values
        .iter()
        .map(Value::to_sql)
        .collect::<Vec<_>>()
        .join(", ");
    format!("({rendered})")
}
