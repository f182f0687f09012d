//! Employee list-query DTO

use serde::Deserialize;

use crate::core::persistence::query::ListParams;

/// Filter values stay in string form here; the service parses them so
/// garbage input maps to the uniform 400 taxonomy.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeListQuery {
    #[serde(flatten)]
    pub list: ListParams,
    pub position: Option<String>,
    pub department_id: Option<String>,
    pub date_of_joining: Option<String>,
}
