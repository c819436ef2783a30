//! # IO Module
//!
//! Adapter layer between HTTP clients and the domain services.
//!
//! - **rest**: JSON endpoints under `/api`, plus the health check
//! - **views**: server-rendered HTML pages for the landing, login and
//!   dashboard screens
//!
//! Handlers translate requests into service calls and domain errors into
//! status codes. They hold no business logic of their own.

pub mod rest;
pub mod views;
