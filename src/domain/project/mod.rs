pub mod dto;
pub mod project_service;
