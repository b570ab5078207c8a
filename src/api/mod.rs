//! Endpoint methods on [`NeuDevClient`](crate::NeuDevClient), grouped by
//! resource.
//!
//! Every authenticated method checks the session's credentials first and
//! returns [`ApiError::Unauthorized`](crate::ApiError::Unauthorized) without
//! touching the network when one is missing.

pub mod activities;
pub mod auth;
pub mod bulletins;
pub mod classes;
pub mod items;
pub mod profile;
