//! Work24 job listings for the mock-interview coach
//!
//! This library proxies the Korean government's Work24 job-posting API,
//! resolves each posting's work region with bounded concurrent detail
//! lookups backed by a TTL cache, and filters listings by free-text
//! Korean administrative regions.

pub mod app_state;
pub mod config;
pub mod models;
pub mod routes;
pub mod services;
