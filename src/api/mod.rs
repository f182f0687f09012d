pub mod controller;
pub mod dto;
pub mod middleware;
pub mod routes;
