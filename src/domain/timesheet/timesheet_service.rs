use chrono::NaiveDate;

use crate::api::dto::timesheet_dto::TimesheetListQuery;
use crate::core::persistence::query::{parse_param, FilterValue, ListRequest, Page};
use crate::core::persistence::timesheet::timesheet_entity::{
    NewTimesheet, TimesheetDetails, TimesheetEntity,
};
use crate::core::persistence::timesheet::timesheet_repository::TimesheetRepository;
use crate::domain::validate_body;
use crate::errors::AppError;

use super::dto::TimesheetUpsertRequest;

/// Sortable columns as `(api name, db column)`.
const SORTABLE: &[(&str, &str)] = &[
    ("id", "id"),
    ("date", "date"),
    ("hoursWorked", "hours_worked"),
    ("employeeId", "employee_id"),
    ("projectId", "project_id"),
];

pub struct TimesheetService {
    repo: TimesheetRepository,
}

impl TimesheetService {
    pub fn new(repo: TimesheetRepository) -> Self {
        Self { repo }
    }

    pub fn create(&self, req: TimesheetUpsertRequest) -> Result<TimesheetEntity, AppError> {
        validate_body(&req)?;
        self.repo.create(&new_timesheet(req))
    }

    pub fn list(&self, query: TimesheetListQuery) -> Result<Page<TimesheetDetails>, AppError> {
        let employee_id: Option<i64> = parse_param("employeeId", query.employee_id.as_deref())?;
        let project_id: Option<i64> = parse_param("projectId", query.project_id.as_deref())?;
        let start_date: Option<NaiveDate> = parse_param("startDate", query.start_date.as_deref())?;
        let end_date: Option<NaiveDate> = parse_param("endDate", query.end_date.as_deref())?;
        let min_hours: Option<f64> = parse_param("minHours", query.min_hours.as_deref())?;
        let max_hours: Option<f64> = parse_param("maxHours", query.max_hours.as_deref())?;

        let req = ListRequest::parse(&query.list, SORTABLE)?
            .filter_equals("employee_id", employee_id)
            .filter_equals("project_id", project_id)
            .filter_range(
                "date",
                start_date.map(FilterValue::from),
                end_date.map(FilterValue::from),
            )
            .filter_range(
                "hours_worked",
                min_hours.map(FilterValue::from),
                max_hours.map(FilterValue::from),
            );
        self.repo.list(&req)
    }

    pub fn get(&self, id: i64) -> Result<TimesheetDetails, AppError> {
        self.repo.find(id)?.ok_or(AppError::NotFound("Timesheet"))
    }

    pub fn update(
        &self,
        id: i64,
        req: TimesheetUpsertRequest,
    ) -> Result<TimesheetEntity, AppError> {
        validate_body(&req)?;
        let data = new_timesheet(req);
        if !self.repo.update(id, &data)? {
            return Err(AppError::NotFound("Timesheet"));
        }

        Ok(TimesheetEntity {
            id,
            employee_id: data.employee_id,
            project_id: data.project_id,
            date: data.date,
            hours_worked: data.hours_worked,
            description: data.description,
        })
    }

    pub fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.repo.delete(id)? {
            return Err(AppError::NotFound("Timesheet"));
        }
        Ok(())
    }
}

fn new_timesheet(req: TimesheetUpsertRequest) -> NewTimesheet {
    NewTimesheet {
        employee_id: req.employee_id,
        project_id: req.project_id,
        date: req.date,
        hours_worked: req.hours_worked,
        description: req.description,
    }
}
