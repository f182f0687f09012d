//! Department list-query DTO

use serde::Deserialize;

use crate::core::persistence::query::ListParams;

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentListQuery {
    #[serde(flatten)]
    pub list: ListParams,
    pub name: Option<String>,
    pub location: Option<String>,
}
