//! Employee request bodies

use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

#[derive(Deserialize, Validate, Debug)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpsertRequest {
    #[validate(length(min = 1, message = "firstName must not be empty"))]
    pub first_name: String,
    #[validate(length(min = 1, message = "lastName must not be empty"))]
    pub last_name: String,
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    pub phone_number: Option<String>,
    pub date_of_joining: NaiveDate,
    #[validate(length(min = 1, message = "position must not be empty"))]
    pub position: String,
    #[validate(range(min = 0.0, message = "salary must not be negative"))]
    pub salary: f64,
    pub department_id: i64,
}
