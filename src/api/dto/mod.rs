pub mod department_dto;
pub mod employee_dto;
pub mod paginated_response;
pub mod project_dto;
pub mod timesheet_dto;
