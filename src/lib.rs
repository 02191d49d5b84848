//! Server-rendered pages for UISyllabi, a course syllabus sharing site.

pub mod catalog;
pub mod components;
pub mod config;
pub mod error;
pub mod listing;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;
