pub mod controllers;
pub mod dto;
pub mod error;
pub mod extract;
pub mod routes;
pub mod state;
