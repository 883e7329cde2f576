//! Personnel administration core: employees, employers, passports, and visas.
//!
//! Requests flow through the `use_cases` layer, which validates input, enforces
//! uniqueness against the repository ports, derives computed fields, and then
//! delegates persistence. The `http` module exposes the same use cases over axum.

pub mod config;
pub mod domain;
pub mod dto;
pub mod error;
pub mod http;
pub mod repository;
pub mod telemetry;
pub mod use_cases;
