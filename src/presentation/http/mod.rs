pub mod controllers;
pub mod envelope;
pub mod error;
pub mod routes;
pub mod state;
