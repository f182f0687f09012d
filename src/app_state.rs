use std::sync::Arc;

use crate::core::persistence::db::DbPool;
use crate::core::persistence::department::department_repository::DepartmentRepository;
use crate::core::persistence::employee::employee_repository::EmployeeRepository;
use crate::core::persistence::project::project_repository::ProjectRepository;
use crate::core::persistence::timesheet::timesheet_repository::TimesheetRepository;
use crate::core::persistence::user::user_repository::UserRepository;
use crate::domain::auth::auth_service::AuthService;
use crate::domain::department::department_service::DepartmentService;
use crate::domain::employee::employee_service::EmployeeService;
use crate::domain::project::project_service::ProjectService;
use crate::domain::timesheet::timesheet_service::TimesheetService;

#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub department_service: Arc<DepartmentService>,
    pub employee_service: Arc<EmployeeService>,
    pub project_service: Arc<ProjectService>,
    pub timesheet_service: Arc<TimesheetService>,
}

/// Wire every service to the single injected pool handle.
pub fn build_app_state(pool: DbPool, secret_key: &str) -> AppState {
    AppState {
        auth_service: Arc::new(AuthService::new(
            UserRepository::new(pool.clone()),
            secret_key,
        )),
        department_service: Arc::new(DepartmentService::new(DepartmentRepository::new(
            pool.clone(),
        ))),
        employee_service: Arc::new(EmployeeService::new(EmployeeRepository::new(pool.clone()))),
        project_service: Arc::new(ProjectService::new(ProjectRepository::new(pool.clone()))),
        timesheet_service: Arc::new(TimesheetService::new(TimesheetRepository::new(pool))),
    }
}
