pub mod auth_routes;
pub mod department_routes;
pub mod employee_routes;
pub mod project_routes;
pub mod timesheet_routes;
