use serde::{Deserialize, Serialize};

/// Fixed page size for paginated list endpoints
pub const PAGE_SIZE: u32 = 5;

/// PostgREST operators the proxy emits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterOp {
    Eq,
    ILike,
}

impl FilterOp {
    pub fn to_postgrest(&self) -> &'static str {
        match self {
            FilterOp::Eq => "eq",
            FilterOp::ILike => "ilike",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterWhereInfo {
    pub column: String,
    pub operator: FilterOp,
    pub data: String,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn to_postgrest(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterOrderInfo {
    pub column: String,
    pub sort: SortDirection,
}

/// 1-indexed page request. Pages below 1 are clamped to the first page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    pub page: u32,
    pub page_size: u32,
}

impl Pagination {
    pub fn new(page: i64) -> Self {
        let page = page.clamp(1, u32::MAX as i64) as u32;
        Self { page, page_size: PAGE_SIZE }
    }

    pub fn limit(&self) -> u32 {
        self.page_size
    }

    pub fn offset(&self) -> u64 {
        (self.page as u64 - 1) * self.page_size as u64
    }
}

/// Query parameters accepted by list endpoints
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    pub page: Option<i64>,
    pub search: Option<String>,
}

impl ListParams {
    pub fn pagination(&self) -> Option<Pagination> {
        self.page.map(Pagination::new)
    }

    /// Search term, if present and not blank
    pub fn search_term(&self) -> Option<&str> {
        self.search.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }
}
