//! Meeting room booking server.
//!
//! Serves the landing, login and dashboard pages plus the JSON API they are
//! built on. See [`backend`] for the layering and [`config`] for settings.

pub mod backend;
pub mod config;
