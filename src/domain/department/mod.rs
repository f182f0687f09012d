pub mod dto;
pub mod department_service;
