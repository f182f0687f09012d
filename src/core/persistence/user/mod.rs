pub mod user_entity;
pub mod user_repository;
