use serde::Serialize;

use crate::core::persistence::query::Page;

/// JSON body for list endpoints: `{ data: [...], pagination: {...} }`.
#[derive(Serialize)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: Pagination,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
}

impl<T: Serialize> From<Page<T>> for PaginatedResponse<T> {
    fn from(page: Page<T>) -> Self {
        Self {
            data: page.items,
            pagination: Pagination {
                total: page.total,
                page: page.page,
                page_size: page.page_size,
            },
        }
    }
}
