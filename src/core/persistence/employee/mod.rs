pub mod employee_entity;
pub mod employee_repository;
