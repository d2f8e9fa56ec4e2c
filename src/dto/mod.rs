//! Data transfer objects passed from services to routes and templates.

pub mod shops;
