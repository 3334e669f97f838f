use url::form_urlencoded;

use super::error::FilterError;
use super::filter_order::FilterOrder;
use super::filter_where::FilterWhere;
use super::types::{FilterOrderInfo, FilterWhereInfo, Pagination};

/// Base path of every table exposed by PostgREST
pub const REST_PREFIX: &str = "/rest/v1";

/// Builder for a PostgREST table request path (`/rest/v1/<table>?<filters>`)
#[derive(Debug, Clone)]
pub struct Filter {
    table_name: String,
    where_data: Vec<FilterWhereInfo>,
    order_data: Vec<FilterOrderInfo>,
    limit: Option<u32>,
    offset: Option<u64>,
}

impl Filter {
    pub fn new(table_name: impl Into<String>) -> Result<Self, FilterError> {
        let table_name = table_name.into();
        Self::validate_table_name(&table_name)?;
        Ok(Self {
            table_name,
            where_data: vec![],
            order_data: vec![],
            limit: None,
            offset: None,
        })
    }

    pub fn where_eq(&mut self, column: &str, value: &str) -> Result<&mut Self, FilterError> {
        self.where_data.push(FilterWhere::eq(column, value)?);
        Ok(self)
    }

    /// Adds a substring filter; a blank term leaves the filter unchanged
    pub fn where_ilike(&mut self, column: &str, term: &str) -> Result<&mut Self, FilterError> {
        if let Some(info) = FilterWhere::ilike(column, term)? { self.where_data.push(info); }
        Ok(self)
    }

    pub fn order(&mut self, order_spec: &str) -> Result<&mut Self, FilterError> {
        self.order_data = FilterOrder::validate_and_parse(order_spec)?;
        Ok(self)
    }

    pub fn limit(&mut self, limit: u32, offset: Option<u64>) -> Result<&mut Self, FilterError> {
        if limit == 0 { return Err(FilterError::InvalidLimit("Limit must be positive".to_string())); }
        self.limit = Some(limit);
        self.offset = offset;
        Ok(self)
    }

    /// Newest first, one page of `PAGE_SIZE` rows
    pub fn paginate(&mut self, pagination: Pagination) -> Result<&mut Self, FilterError> {
        self.order("created_at.desc")?;
        self.limit(pagination.limit(), Some(pagination.offset()))
    }

    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = self.where_data.iter().map(FilterWhere::generate).collect();
        if let Some(order) = FilterOrder::generate(&self.order_data) { pairs.push(("order".to_string(), order)); }
        if let Some(limit) = self.limit { pairs.push(("limit".to_string(), limit.to_string())); }
        if let Some(offset) = self.offset { pairs.push(("offset".to_string(), offset.to_string())); }
        pairs
    }

    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (k, v) in self.to_query_pairs() { serializer.append_pair(&k, &v); }
        serializer.finish()
    }

    /// Relative path plus query, ready to be joined onto the upstream base URL
    pub fn to_path(&self) -> String {
        let query = self.to_query_string();
        if query.is_empty() {
            format!("{}/{}", REST_PREFIX, self.table_name)
        } else {
            format!("{}/{}?{}", REST_PREFIX, self.table_name, query)
        }
    }

    fn validate_table_name(name: &str) -> Result<(), FilterError> {
        if name.is_empty() { return Err(FilterError::InvalidTableName("Table name cannot be empty".to_string())); }
        if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') || name.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(FilterError::InvalidTableName(format!("Invalid table name format: {}", name)));
        }
        Ok(())
    }
}
