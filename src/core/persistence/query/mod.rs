//! Translation of raw list-query parameters into bounded, validated
//! reads against the store.
//!
//! Every list endpoint goes through the same two steps: parse the raw
//! page/sort parameters against the resource's whitelist, then run one
//! bounded fetch plus one unbounded count with the same predicate.

mod filter;

pub use filter::{Filter, FilterValue};

use rusqlite::{Connection, Row, ToSql};
use serde::Deserialize;

use crate::errors::AppError;

const DEFAULT_PAGE: u32 = 1;
const DEFAULT_PAGE_SIZE: u32 = 10;

/// Raw paging and sorting parameters as they arrive on the query
/// string, still unvalidated. Kept as strings so a non-numeric `page`
/// is our 400, not a framework rejection.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub page: Option<String>,
    pub page_size: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    fn as_sql(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// A validated list query: bounded page window, whitelisted sort
/// column, and zero or more filter predicates.
#[derive(Debug)]
pub struct ListRequest {
    page: u32,
    page_size: u32,
    sort_column: &'static str,
    sort_order: SortOrder,
    filters: Vec<Filter>,
}

/// One page of results plus the unbounded match count.
#[derive(Debug)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
}

impl ListRequest {
    /// Validate raw parameters against a resource's sortable columns,
    /// given as `(api name, db column)` pairs.
    pub fn parse(
        params: &ListParams,
        sortable: &'static [(&'static str, &'static str)],
    ) -> Result<Self, AppError> {
        let page = positive_int(params.page.as_deref(), "page", DEFAULT_PAGE)?;
        let page_size = positive_int(params.page_size.as_deref(), "pageSize", DEFAULT_PAGE_SIZE)?;

        let sort_column = match params.sort_by.as_deref() {
            None | Some("") => "id",
            Some(name) => sortable
                .iter()
                .find(|(api, _)| *api == name)
                .map(|(_, db)| *db)
                .ok_or_else(|| {
                    AppError::InvalidQueryParameter(format!("Cannot sort by '{name}'"))
                })?,
        };

        let sort_order = match params.sort_order.as_deref() {
            None | Some("") | Some("asc") => SortOrder::Asc,
            Some("desc") => SortOrder::Desc,
            Some(other) => {
                return Err(AppError::InvalidQueryParameter(format!(
                    "sortOrder must be 'asc' or 'desc', got '{other}'"
                )))
            }
        };

        Ok(Self {
            page,
            page_size,
            sort_column,
            sort_order,
            filters: Vec::new(),
        })
    }

    pub fn filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Add an equality predicate when the parameter was supplied.
    pub fn filter_equals<V: Into<FilterValue>>(
        self,
        column: &'static str,
        value: Option<V>,
    ) -> Self {
        match value {
            Some(v) => self.filter(Filter::equals(column, v)),
            None => self,
        }
    }

    /// Add a substring predicate when the parameter was supplied.
    pub fn filter_contains(self, column: &'static str, needle: Option<String>) -> Self {
        match needle {
            Some(n) => self.filter(Filter::contains(column, n)),
            None => self,
        }
    }

    /// Add an inclusive range predicate when at least one bound was
    /// supplied.
    pub fn filter_range(
        self,
        column: &'static str,
        min: Option<FilterValue>,
        max: Option<FilterValue>,
    ) -> Self {
        if min.is_none() && max.is_none() {
            return self;
        }
        self.filter(Filter::range(column, min, max))
    }

    fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.page_size)
    }

    fn where_clause(&self) -> (String, Vec<FilterValue>) {
        if self.filters.is_empty() {
            return (String::new(), Vec::new());
        }

        let mut sql = String::from(" WHERE ");
        let mut params = Vec::new();
        for (i, filter) in self.filters.iter().enumerate() {
            if i > 0 {
                sql.push_str(" AND ");
            }
            filter.push_predicate(&mut sql, &mut params);
        }
        (sql, params)
    }

    fn order_clause(&self) -> String {
        let dir = self.sort_order.as_sql();
        if self.sort_column == "id" {
            format!(" ORDER BY id {dir}")
        } else {
            // Secondary id key makes the ordering total, so rows never
            // migrate between pages on equal sort values.
            format!(" ORDER BY {} {dir}, id ASC", self.sort_column)
        }
    }

    /// Run the bounded fetch and the unbounded count with the same
    /// predicate. A row inserted between the two statements can skew
    /// `total` against `items`; that window is accepted rather than
    /// fenced with a transaction.
    pub fn fetch_page<T, F>(
        &self,
        conn: &Connection,
        table: &str,
        columns: &str,
        map_row: F,
    ) -> Result<Page<T>, AppError>
    where
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        let (where_sql, params) = self.where_clause();

        let count_sql = format!("SELECT COUNT(*) FROM {table}{where_sql}");
        // COUNT(*) comes back as SQLite's native signed integer.
        let total: i64 = conn.query_row(
            &count_sql,
            rusqlite::params_from_iter(params.iter()),
            |row| row.get(0),
        )?;
        let total = total as u64;

        let select_sql = format!(
            "SELECT {columns} FROM {table}{where_sql}{} LIMIT ? OFFSET ?",
            self.order_clause()
        );

        let limit = i64::from(self.page_size);
        // The window can exceed i64 when both page and pageSize sit near
        // u32::MAX; a wrapped negative OFFSET would read as 0 in SQLite.
        let offset = self.offset().min(i64::MAX as u64) as i64;
        let mut bound: Vec<&dyn ToSql> = params.iter().map(|p| p as &dyn ToSql).collect();
        bound.push(&limit);
        bound.push(&offset);

        let mut stmt = conn.prepare(&select_sql)?;
        let items = stmt
            .query_map(&bound[..], map_row)?
            .collect::<rusqlite::Result<Vec<T>>>()?;

        Ok(Page {
            items,
            total,
            page: self.page,
            page_size: self.page_size,
        })
    }
}

/// Parse an optional typed filter parameter from its query-string
/// form. Garbage input is the caller's mistake, reported uniformly as
/// `InvalidQueryParameter`.
pub fn parse_param<T: std::str::FromStr>(
    name: &str,
    raw: Option<&str>,
) -> Result<Option<T>, AppError> {
    match raw {
        None | Some("") => Ok(None),
        Some(s) => s.parse::<T>().map(Some).map_err(|_| {
            AppError::InvalidQueryParameter(format!("Invalid value '{s}' for '{name}'"))
        }),
    }
}

fn positive_int(raw: Option<&str>, name: &str, default: u32) -> Result<u32, AppError> {
    match raw {
        None | Some("") => Ok(default),
        Some(s) => match s.parse::<u32>() {
            Ok(n) if n >= 1 => Ok(n),
            _ => Err(AppError::InvalidQueryParameter(format!(
                "{name} must be a positive integer, got '{s}'"
            ))),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SORTABLE: &[(&str, &str)] = &[("id", "id"), ("name", "name"), ("hours", "hours_worked")];

    fn params(page: &str, page_size: &str, sort_by: &str, sort_order: &str) -> ListParams {
        let opt = |s: &str| (!s.is_empty()).then(|| s.to_string());
        ListParams {
            page: opt(page),
            page_size: opt(page_size),
            sort_by: opt(sort_by),
            sort_order: opt(sort_order),
        }
    }

    #[test]
    fn defaults_apply_when_nothing_is_supplied() {
        let req = ListRequest::parse(&ListParams::default(), SORTABLE).unwrap();
        assert_eq!(req.page, 1);
        assert_eq!(req.page_size, 10);
        assert_eq!(req.sort_column, "id");
        assert_eq!(req.sort_order, SortOrder::Asc);
    }

    #[test]
    fn non_numeric_page_is_rejected() {
        let err = ListRequest::parse(&params("invalid", "", "", ""), SORTABLE).unwrap_err();
        assert!(matches!(err, AppError::InvalidQueryParameter(_)));
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let err = ListRequest::parse(&params("1", "0", "", ""), SORTABLE).unwrap_err();
        assert!(matches!(err, AppError::InvalidQueryParameter(_)));
    }

    #[test]
    fn unknown_sort_column_is_rejected() {
        let err = ListRequest::parse(&params("", "", "unknown", ""), SORTABLE).unwrap_err();
        assert!(matches!(err, AppError::InvalidQueryParameter(_)));
    }

    #[test]
    fn sort_order_has_no_silent_fallback() {
        let err = ListRequest::parse(&params("", "", "", "ascending"), SORTABLE).unwrap_err();
        assert!(matches!(err, AppError::InvalidQueryParameter(_)));
    }

    #[test]
    fn sort_column_maps_api_name_to_db_column() {
        let req = ListRequest::parse(&params("", "", "hours", "desc"), SORTABLE).unwrap();
        assert_eq!(req.sort_column, "hours_worked");
        assert_eq!(req.order_clause(), " ORDER BY hours_worked DESC, id ASC");
    }

    #[test]
    fn filters_compose_with_and() {
        let req = ListRequest::parse(&ListParams::default(), SORTABLE)
            .unwrap()
            .filter_equals("department_id", Some(3i64))
            .filter_contains("name", Some("dev".to_string()));
        let (sql, params) = req.where_clause();
        assert_eq!(
            sql,
            " WHERE (department_id = ?) AND (name LIKE ? ESCAPE '\\')"
        );
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn absent_optional_filters_add_no_predicate() {
        let req = ListRequest::parse(&ListParams::default(), SORTABLE)
            .unwrap()
            .filter_equals::<i64>("department_id", None)
            .filter_contains("name", None)
            .filter_range("hours_worked", None, None);
        let (sql, _) = req.where_clause();
        assert_eq!(sql, "");
    }

    mod execution {
        use super::*;
        use crate::core::persistence::db::test_pool;
        use pretty_assertions::assert_eq;

        fn seed(conn: &rusqlite::Connection, n: i64) {
            conn.execute(
                "INSERT INTO departments (name, description, location) VALUES ('Eng', NULL, 'HQ')",
                [],
            )
            .unwrap();
            for i in 1..=n {
                conn.execute(
                    "INSERT INTO employees (first_name, last_name, email, phone_number,
                         date_of_joining, position, salary, department_id)
                     VALUES (?1, 'Doe', ?2, NULL, '2024-07-01', 'Developer', ?3, 1)",
                    rusqlite::params![
                        format!("emp{i:02}"),
                        format!("emp{i:02}@example.com"),
                        1000.0 + i as f64
                    ],
                )
                .unwrap();
            }
        }

        fn page_of_names(
            conn: &rusqlite::Connection,
            page: &str,
            page_size: &str,
        ) -> Page<String> {
            let req = ListRequest::parse(
                &params(page, page_size, "", ""),
                &[("id", "id"), ("firstName", "first_name")],
            )
            .unwrap();
            req.fetch_page(conn, "employees", "first_name", |row| row.get(0))
                .unwrap()
        }

        #[test]
        fn twenty_five_records_paginate_as_ten_ten_five() {
            let pool = test_pool();
            let conn = pool.get().unwrap();
            seed(&conn, 25);

            let p1 = page_of_names(&conn, "1", "10");
            let p2 = page_of_names(&conn, "2", "10");
            let p3 = page_of_names(&conn, "3", "10");

            assert_eq!(p1.items.len(), 10);
            assert_eq!(p2.items.len(), 10);
            assert_eq!(p3.items.len(), 5);
            assert_eq!(p1.total, 25);
            assert_eq!(p2.total, 25);
            assert_eq!(p3.total, 25);
        }

        #[test]
        fn page_past_the_end_is_empty_with_unchanged_total() {
            let pool = test_pool();
            let conn = pool.get().unwrap();
            seed(&conn, 3);

            let page = page_of_names(&conn, "5", "10");
            assert_eq!(page.items.len(), 0);
            assert_eq!(page.total, 3);
        }

        #[test]
        fn huge_page_and_page_size_stay_past_the_end() {
            let pool = test_pool();
            let conn = pool.get().unwrap();
            seed(&conn, 3);

            // page * pageSize overflows i64 here; the window must still
            // land past the end instead of wrapping back to row one.
            let page = page_of_names(&conn, "4294967295", "4294967295");
            assert_eq!(page.items.len(), 0);
            assert_eq!(page.total, 3);
        }

        #[test]
        fn ordering_is_stable_across_repeated_reads() {
            let pool = test_pool();
            let conn = pool.get().unwrap();
            seed(&conn, 12);

            // Every row shares the same position, so ordering relies
            // entirely on the secondary id key.
            let req = || {
                ListRequest::parse(
                    &params("1", "12", "position", "asc"),
                    &[("id", "id"), ("position", "position")],
                )
                .unwrap()
            };
            let first: Page<String> = req()
                .fetch_page(&conn, "employees", "first_name", |row| row.get(0))
                .unwrap();
            let second: Page<String> = req()
                .fetch_page(&conn, "employees", "first_name", |row| row.get(0))
                .unwrap();
            assert_eq!(first.items, second.items);
        }

        #[test]
        fn range_filter_bounds_are_inclusive() {
            let pool = test_pool();
            let conn = pool.get().unwrap();
            seed(&conn, 10);

            // Salaries run 1001..=1010; [1003, 1007] keeps exactly five.
            let req = ListRequest::parse(&ListParams::default(), &[("id", "id")])
                .unwrap()
                .filter_range(
                    "salary",
                    Some(FilterValue::Real(1003.0)),
                    Some(FilterValue::Real(1007.0)),
                );
            let page: Page<f64> = req
                .fetch_page(&conn, "employees", "salary", |row| row.get(0))
                .unwrap();
            assert_eq!(page.total, 5);
            assert!(page.items.iter().all(|s| (1003.0..=1007.0).contains(s)));
        }

        #[test]
        fn total_ignores_the_page_window() {
            let pool = test_pool();
            let conn = pool.get().unwrap();
            seed(&conn, 25);

            for (page, size) in [("1", "10"), ("2", "5"), ("1", "100")] {
                assert_eq!(page_of_names(&conn, page, size).total, 25);
            }
        }
    }
}
