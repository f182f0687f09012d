pub mod dto;
pub mod timesheet_service;
