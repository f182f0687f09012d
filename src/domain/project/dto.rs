//! Project request bodies

use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

#[derive(Deserialize, Validate, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ProjectUpsertRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub department_id: i64,
    #[serde(default)]
    pub employee_ids: Vec<i64>,
}
