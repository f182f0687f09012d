pub mod dto;
pub mod auth_service;
