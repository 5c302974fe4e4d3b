//! Pagination and sorting types

use serde::Serialize;

use crate::domain::DomainError;

/// A zero-based page request with a positive page size.
///
/// Callers must reject non-positive sizes before reaching the query layer;
/// the constructor enforces that contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    size: u32,
}

impl PageRequest {
    /// Create a page request; fails if `size` is zero.
    pub fn new(page: u32, size: u32) -> Result<Self, DomainError> {
        if size == 0 {
            return Err(DomainError::validation("page size must be at least 1"));
        }

        Ok(Self { page, size })
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Row offset of the first element of this page.
    pub fn offset(&self) -> i64 {
        i64::from(self.page) * i64::from(self.size)
    }

    /// Maximum number of rows in this page.
    pub fn limit(&self) -> i64 {
        i64::from(self.size)
    }
}

/// A content slice plus pagination metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u32,
}

impl<T> Page<T> {
    /// Build a page from a content slice and the total matching row count.
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: u64) -> Self {
        let total_pages = total_elements.div_ceil(u64::from(request.size())) as u32;

        Self {
            content,
            page: request.page(),
            size: request.size(),
            total_elements,
            total_pages,
        }
    }

    /// Map the content, preserving the pagination metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            page: self.page,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
        }
    }
}

/// Sortable projection fields (whitelist; raw client input never reaches SQL)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    MemberId,
    Username,
    Age,
    TeamName,
}

impl SortField {
    fn parse(text: &str) -> Option<Self> {
        match text {
            "memberId" => Some(Self::MemberId),
            "username" => Some(Self::Username),
            "age" => Some(Self::Age),
            "teamName" => Some(Self::TeamName),
            _ => None,
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

/// A sort order over the projection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sort {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for Sort {
    /// Insertion order: ascending surrogate id.
    fn default() -> Self {
        Self {
            field: SortField::MemberId,
            direction: SortDirection::Asc,
        }
    }
}

impl Sort {
    /// Parse `field` or `field,direction` query text (e.g. `age,desc`).
    pub fn parse(text: &str) -> Result<Self, DomainError> {
        let mut parts = text.splitn(2, ',');
        let field_text = parts.next().unwrap_or_default().trim();

        let field = SortField::parse(field_text).ok_or_else(|| {
            DomainError::validation(format!("unknown sort field '{}'", field_text))
        })?;

        let direction = match parts.next().map(str::trim) {
            None | Some("") => SortDirection::Asc,
            Some(d) if d.eq_ignore_ascii_case("asc") => SortDirection::Asc,
            Some(d) if d.eq_ignore_ascii_case("desc") => SortDirection::Desc,
            Some(d) => {
                return Err(DomainError::validation(format!(
                    "unknown sort direction '{}'",
                    d
                )));
            }
        };

        Ok(Self { field, direction })
    }
}
