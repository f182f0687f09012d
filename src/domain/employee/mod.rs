pub mod dto;
pub mod employee_service;
