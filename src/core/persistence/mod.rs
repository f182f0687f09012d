pub mod db;
pub mod query;

pub mod department;
pub mod employee;
pub mod project;
pub mod timesheet;
pub mod user;
