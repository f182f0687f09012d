//! Project list-query DTO

use serde::Deserialize;

use crate::core::persistence::query::ListParams;

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProjectListQuery {
    #[serde(flatten)]
    pub list: ListParams,
    pub name: Option<String>,
    pub department_id: Option<String>,
    /// Inclusive lower bound on the project start date.
    pub start_date: Option<String>,
    /// Inclusive upper bound on the project end date.
    pub end_date: Option<String>,
}
