//! Console-side data layer for the Glowcast live-streaming platform's
//! admin console.
//!
//! All business logic lives behind the platform REST API; this crate
//! provides the typed resources, the HTTP repository, and the paginated
//! [`pagination::Feed`] accumulator every list screen shares.

pub mod domain;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod services;
