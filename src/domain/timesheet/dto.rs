//! Timesheet request bodies

use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

#[derive(Deserialize, Validate, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TimesheetUpsertRequest {
    pub employee_id: i64,
    pub project_id: i64,
    pub date: NaiveDate,
    #[validate(range(min = 0.0, max = 24.0, message = "hoursWorked must be between 0 and 24"))]
    pub hours_worked: f64,
    pub description: Option<String>,
}
