use crate::api::dto::department_dto::DepartmentListQuery;
use crate::core::persistence::department::department_entity::{DepartmentEntity, NewDepartment};
use crate::core::persistence::department::department_repository::DepartmentRepository;
use crate::core::persistence::query::{ListRequest, Page};
use crate::domain::validate_body;
use crate::errors::AppError;

use super::dto::DepartmentUpsertRequest;

/// Sortable columns as `(api name, db column)`.
const SORTABLE: &[(&str, &str)] = &[("id", "id"), ("name", "name"), ("location", "location")];

pub struct DepartmentService {
    repo: DepartmentRepository,
}

impl DepartmentService {
    pub fn new(repo: DepartmentRepository) -> Self {
        Self { repo }
    }

    pub fn create(&self, req: DepartmentUpsertRequest) -> Result<DepartmentEntity, AppError> {
        validate_body(&req)?;
        self.repo.create(&new_department(req))
    }

    pub fn list(&self, query: DepartmentListQuery) -> Result<Page<DepartmentEntity>, AppError> {
        let req = ListRequest::parse(&query.list, SORTABLE)?
            .filter_contains("name", query.name)
            .filter_contains("location", query.location);
        self.repo.list(&req)
    }

    pub fn get(&self, id: i64) -> Result<DepartmentEntity, AppError> {
        self.repo.find(id)?.ok_or(AppError::NotFound("Department"))
    }

    pub fn update(
        &self,
        id: i64,
        req: DepartmentUpsertRequest,
    ) -> Result<DepartmentEntity, AppError> {
        validate_body(&req)?;
        let data = new_department(req);
        if !self.repo.update(id, &data)? {
            return Err(AppError::NotFound("Department"));
        }

        Ok(DepartmentEntity {
            id,
            name: data.name,
            description: data.description,
            location: data.location,
        })
    }

    pub fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.repo.delete(id)? {
            return Err(AppError::NotFound("Department"));
        }
        Ok(())
    }
}

fn new_department(req: DepartmentUpsertRequest) -> NewDepartment {
    NewDepartment {
        name: req.name,
        description: req.description,
        location: req.location,
    }
}
