pub mod timesheet_entity;
pub mod timesheet_repository;
