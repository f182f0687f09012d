pub mod auth_controller;
pub mod department_controller;
pub mod employee_controller;
pub mod project_controller;
pub mod timesheet_controller;
