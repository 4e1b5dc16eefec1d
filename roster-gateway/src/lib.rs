//! HTTP API for the student roster.
//!
//! Serves a health check, the full student list, and single-student lookup
//! from an injected read-only [`repository::StudentRepository`].

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod config;
pub mod doc;
pub mod error;
pub mod repository;
pub mod routes;
