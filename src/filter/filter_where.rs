use super::error::FilterError;
use super::types::{FilterOp, FilterWhereInfo};

pub struct FilterWhere;

impl FilterWhere {
    pub fn eq(column: &str, value: &str) -> Result<FilterWhereInfo, FilterError> {
        Self::validate_column(column)?;
        Ok(FilterWhereInfo { column: column.to_string(), operator: FilterOp::Eq, data: value.to_string() })
    }

    /// Case-insensitive substring match. Returns `None` for a blank term so
    /// callers can treat an empty search as no filter at all.
    pub fn ilike(column: &str, term: &str) -> Result<Option<FilterWhereInfo>, FilterError> {
        Self::validate_column(column)?;
        let term = term.trim();
        if term.is_empty() { return Ok(None); }
        Ok(Some(FilterWhereInfo { column: column.to_string(), operator: FilterOp::ILike, data: term.to_string() }))
    }

    /// Render one condition as a `(column, "op.value")` query pair
    pub fn generate(info: &FilterWhereInfo) -> (String, String) {
        let value = match info.operator {
            FilterOp::Eq => format!("{}.{}", info.operator.to_postgrest(), info.data),
            FilterOp::ILike => format!("{}.*{}*", info.operator.to_postgrest(), info.data),
        };
        (info.column.clone(), value)
    }

    pub fn validate_column(column: &str) -> Result<(), FilterError> {
        let mut chars = column.chars();
        let first = match chars.next() {
            Some(c) => c,
            None => return Err(FilterError::InvalidColumn("Column name cannot be empty".to_string())),
        };
        if !(first.is_ascii_alphabetic() || first == '_') || !column.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(FilterError::InvalidColumn(format!("Invalid column name format: {}", column)));
        }
        Ok(())
    }
}
