pub mod config;
pub mod converter;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod otel;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;
pub mod telemetry;
pub mod validation;
