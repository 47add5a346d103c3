use super::row::Row;

/// Column names plus rows returned by a query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl ResultSet {
    #[must_use]
    pub const fn new(columns: Vec<String>, rows: Vec<Row>) -> Self {
        Self { columns, rows }
    }

    /// Convenience constructor for result sets without NULLs
    #[must_use]
    pub fn from_texts(columns: &[&str], rows: Vec<Vec<&str>>) -> Self {
        Self {
            columns: columns.iter().map(|c| (*c).to_string()).collect(),
            rows: rows.iter().map(|r| Row::from_texts(r.as_slice())).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<&Row> {
        self.rows.first()
    }

    /// Trimmed text of column `idx` across all rows
    pub fn column_texts(&self, idx: usize) -> impl Iterator<Item = &str> {
        self.rows.iter().map(move |row| row.text(idx))
    }
}
