//! Timesheet list-query DTO

use serde::Deserialize;

use crate::core::persistence::query::ListParams;

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct TimesheetListQuery {
    #[serde(flatten)]
    pub list: ListParams,
    pub employee_id: Option<String>,
    pub project_id: Option<String>,
    /// Inclusive bounds on the worked date.
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    /// Inclusive bounds on hours worked.
    pub min_hours: Option<String>,
    pub max_hours: Option<String>,
}
