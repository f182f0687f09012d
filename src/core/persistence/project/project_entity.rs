use chrono::NaiveDate;
use serde::Serialize;

use crate::core::persistence::department::department_entity::DepartmentEntity;
use crate::core::persistence::employee::employee_entity::EmployeeEntity;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntity {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub department_id: i64,
}

/// A project with its department and assigned employees embedded, as
/// returned by the read endpoints.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetails {
    #[serde(flatten)]
    pub project: ProjectEntity,
    pub department: DepartmentEntity,
    pub employees: Vec<EmployeeEntity>,
}

/// Column values for an insert or full-row update.
#[derive(Debug, Clone)]
pub struct NewProject {
    pub name: String,
    pub description: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub department_id: i64,
}
