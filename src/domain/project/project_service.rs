use chrono::NaiveDate;

use crate::api::dto::project_dto::ProjectListQuery;
use crate::core::persistence::project::project_entity::{
    NewProject, ProjectDetails, ProjectEntity,
};
use crate::core::persistence::project::project_repository::ProjectRepository;
use crate::core::persistence::query::{parse_param, FilterValue, ListRequest, Page};
use crate::domain::validate_body;
use crate::errors::AppError;

use super::dto::ProjectUpsertRequest;

/// Sortable columns as `(api name, db column)`.
const SORTABLE: &[(&str, &str)] = &[
    ("id", "id"),
    ("name", "name"),
    ("startDate", "start_date"),
    ("endDate", "end_date"),
    ("departmentId", "department_id"),
];

pub struct ProjectService {
    repo: ProjectRepository,
}

impl ProjectService {
    pub fn new(repo: ProjectRepository) -> Self {
        Self { repo }
    }

    pub fn create(&self, req: ProjectUpsertRequest) -> Result<ProjectEntity, AppError> {
        validate_body(&req)?;
        let (data, employee_ids) = split_request(req);
        self.repo.create(&data, &employee_ids)
    }

    pub fn list(&self, query: ProjectListQuery) -> Result<Page<ProjectDetails>, AppError> {
        let department_id: Option<i64> =
            parse_param("departmentId", query.department_id.as_deref())?;
        let start_date: Option<NaiveDate> = parse_param("startDate", query.start_date.as_deref())?;
        let end_date: Option<NaiveDate> = parse_param("endDate", query.end_date.as_deref())?;

        let req = ListRequest::parse(&query.list, SORTABLE)?
            .filter_contains("name", query.name)
            .filter_equals("department_id", department_id)
            .filter_range("start_date", start_date.map(FilterValue::from), None)
            .filter_range("end_date", None, end_date.map(FilterValue::from));
        self.repo.list(&req)
    }

    pub fn get(&self, id: i64) -> Result<ProjectDetails, AppError> {
        self.repo.find(id)?.ok_or(AppError::NotFound("Project"))
    }

    pub fn update(&self, id: i64, req: ProjectUpsertRequest) -> Result<ProjectDetails, AppError> {
        validate_body(&req)?;
        let (data, employee_ids) = split_request(req);
        if !self.repo.update(id, &data, &employee_ids)? {
            return Err(AppError::NotFound("Project"));
        }

        // Read back so the response carries the fresh associations.
        self.get(id)
    }

    pub fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.repo.delete(id)? {
            return Err(AppError::NotFound("Project"));
        }
        Ok(())
    }
}

fn split_request(req: ProjectUpsertRequest) -> (NewProject, Vec<i64>) {
    (
        NewProject {
            name: req.name,
            description: req.description,
            start_date: req.start_date,
            end_date: req.end_date,
            department_id: req.department_id,
        },
        req.employee_ids,
    )
}
