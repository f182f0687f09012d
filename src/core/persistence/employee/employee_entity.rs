use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeEntity {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub date_of_joining: NaiveDate,
    pub position: String,
    pub salary: f64,
    pub department_id: i64,
}

/// Column values for an insert or full-row update.
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub date_of_joining: NaiveDate,
    pub position: String,
    pub salary: f64,
    pub department_id: i64,
}
