pub mod configuration;
pub mod db;
pub mod error;
pub mod server;
pub mod service;
pub mod telemetry;
