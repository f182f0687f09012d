pub mod department_entity;
pub mod department_repository;
