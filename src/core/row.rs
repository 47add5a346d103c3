use super::error::ShopError;

/// One row of a result set, every value as the server rendered it
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    pub values: Vec<Option<String>>,
}

impl Row {
    #[must_use]
    pub const fn new(values: Vec<Option<String>>) -> Self {
        Self { values }
    }

    /// Builds a row where every value is present
    #[must_use]
    pub fn from_texts<S: AsRef<str>>(values: &[S]) -> Self {
        Self {
            values: values.iter().map(|v| Some(v.as_ref().to_string())).collect(),
        }
    }

    /// Text value at `idx` with CHAR padding removed; NULL and missing read as ""
    #[must_use]
    pub fn text(&self, idx: usize) -> &str {
        self.values
            .get(idx)
            .and_then(Option::as_deref)
            .map_or("", str::trim_end)
    }

    #[must_use]
    pub fn is_null(&self, idx: usize) -> bool {
        self.values.get(idx).is_none_or(Option::is_none)
    }

    pub fn int(&self, idx: usize) -> Result<i32, ShopError> {
        let raw = self.text(idx).trim();
        raw.parse()
            .map_err(|_| ShopError::InvalidNumber(raw.to_string()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
