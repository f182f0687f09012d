use chrono::NaiveDate;
use serde::Serialize;

use crate::core::persistence::employee::employee_entity::EmployeeEntity;
use crate::core::persistence::project::project_entity::ProjectEntity;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimesheetEntity {
    pub id: i64,
    pub employee_id: i64,
    pub project_id: i64,
    pub date: NaiveDate,
    pub hours_worked: f64,
    pub description: Option<String>,
}

/// A timesheet with its employee and project embedded, as returned by
/// the read endpoints.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimesheetDetails {
    #[serde(flatten)]
    pub timesheet: TimesheetEntity,
    pub employee: EmployeeEntity,
    pub project: ProjectEntity,
}

/// Column values for an insert or full-row update.
#[derive(Debug, Clone)]
pub struct NewTimesheet {
    pub employee_id: i64,
    pub project_id: i64,
    pub date: NaiveDate,
    pub hours_worked: f64,
    pub description: Option<String>,
}
