//! Department request bodies

use serde::Deserialize;
use validator::Validate;

#[derive(Deserialize, Validate, Debug)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentUpsertRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    pub description: Option<String>,
    pub location: Option<String>,
}
