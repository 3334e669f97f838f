use super::error::FilterError;
use super::filter_where::FilterWhere;
use super::types::{FilterOrderInfo, SortDirection};

pub struct FilterOrder;

impl FilterOrder {
    /// Accepts `created_at.desc`, `created_at desc` or a comma separated list of either
    pub fn validate_and_parse(order: &str) -> Result<Vec<FilterOrderInfo>, FilterError> {
        let mut out = Vec::new();
        for part in order.split(',') {
            let trimmed = part.trim();
            if trimmed.is_empty() { continue; }
            let (col, dir) = match trimmed.split_once(|c: char| c == '.' || c.is_whitespace()) {
                Some((col, dir)) => (col.trim(), dir.trim()),
                None => (trimmed, "asc"),
            };
            FilterWhere::validate_column(col)?;
            let sort = if dir.eq_ignore_ascii_case("desc") {
                SortDirection::Desc
            } else if dir.eq_ignore_ascii_case("asc") {
                SortDirection::Asc
            } else {
                return Err(FilterError::InvalidOrder(format!("Unknown sort direction '{}' for {}", dir, col)));
            };
            out.push(FilterOrderInfo { column: col.to_string(), sort });
        }
        Ok(out)
    }

    pub fn generate(infos: &[FilterOrderInfo]) -> Option<String> {
        if infos.is_empty() { return None; }
        let parts: Vec<String> = infos
            .iter()
            .map(|i| format!("{}.{}", i.column, i.sort.to_postgrest()))
            .collect();
        Some(parts.join(","))
    }
}
