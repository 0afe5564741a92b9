//! Core library exports for the Tablebook service.
//!
//! This crate exposes the domain model, persistence layer, forms, routes and
//! service layers used by the Tablebook restaurant booking application.

pub mod db;
pub mod domain;
pub mod dto;
pub mod forms;
pub mod models;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;
