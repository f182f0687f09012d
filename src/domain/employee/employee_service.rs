use chrono::NaiveDate;

use crate::api::dto::employee_dto::EmployeeListQuery;
use crate::core::persistence::employee::employee_entity::{EmployeeEntity, NewEmployee};
use crate::core::persistence::employee::employee_repository::EmployeeRepository;
use crate::core::persistence::query::{parse_param, ListRequest, Page};
use crate::domain::validate_body;
use crate::errors::AppError;

use super::dto::EmployeeUpsertRequest;

/// Sortable columns as `(api name, db column)`.
const SORTABLE: &[(&str, &str)] = &[
    ("id", "id"),
    ("firstName", "first_name"),
    ("lastName", "last_name"),
    ("email", "email"),
    ("position", "position"),
    ("salary", "salary"),
    ("dateOfJoining", "date_of_joining"),
    ("departmentId", "department_id"),
];

pub struct EmployeeService {
    repo: EmployeeRepository,
}

impl EmployeeService {
    pub fn new(repo: EmployeeRepository) -> Self {
        Self { repo }
    }

    pub fn create(&self, req: EmployeeUpsertRequest) -> Result<EmployeeEntity, AppError> {
        validate_body(&req)?;
        self.repo.create(&new_employee(req))
    }

    pub fn list(&self, query: EmployeeListQuery) -> Result<Page<EmployeeEntity>, AppError> {
        let department_id: Option<i64> =
            parse_param("departmentId", query.department_id.as_deref())?;
        let date_of_joining: Option<NaiveDate> =
            parse_param("dateOfJoining", query.date_of_joining.as_deref())?;

        let req = ListRequest::parse(&query.list, SORTABLE)?
            .filter_contains("position", query.position)
            .filter_equals("department_id", department_id)
            .filter_equals("date_of_joining", date_of_joining);
        self.repo.list(&req)
    }

    pub fn get(&self, id: i64) -> Result<EmployeeEntity, AppError> {
        self.repo.find(id)?.ok_or(AppError::NotFound("Employee"))
    }

    pub fn update(&self, id: i64, req: EmployeeUpsertRequest) -> Result<EmployeeEntity, AppError> {
        validate_body(&req)?;
        let data = new_employee(req);
        if !self.repo.update(id, &data)? {
            return Err(AppError::NotFound("Employee"));
        }

        Ok(EmployeeEntity {
            id,
            first_name: data.first_name,
            last_name: data.last_name,
            email: data.email,
            phone_number: data.phone_number,
            date_of_joining: data.date_of_joining,
            position: data.position,
            salary: data.salary,
            department_id: data.department_id,
        })
    }

    pub fn delete(&self, id: i64) -> Result<(), AppError> {
        if !self.repo.delete(id)? {
            return Err(AppError::NotFound("Employee"));
        }
        Ok(())
    }
}

fn new_employee(req: EmployeeUpsertRequest) -> NewEmployee {
    NewEmployee {
        first_name: req.first_name,
        last_name: req.last_name,
        email: req.email,
        phone_number: req.phone_number,
        date_of_joining: req.date_of_joining,
        position: req.position,
        salary: req.salary,
        department_id: req.department_id,
    }
}
