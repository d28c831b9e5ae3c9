pub mod config;
pub mod data;
pub mod health;
pub mod openapi;
pub mod pages;
pub mod rest;
pub mod router;
pub mod telemetry;

pub use data::{AppState, DataStore};
pub use router::app_router;
