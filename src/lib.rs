//! Typed async client for the NEUDev coding-assessment backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! NEUDev is a classroom platform: teachers run classes, post bulletins, and
//! publish programming activities built from items with test cases; students
//! enroll, work activities, and see leaderboards. This crate is the client
//! side of that HTTP API. [`NeuDevClient`] issues the calls, [`Session`]
//! carries the caller's credentials, and every call resolves to a typed value
//! or an [`ApiError`] that flattens into the `{error, details}` shape.
//!
//! ```no_run
//! # async fn run() -> Result<(), neudev::ApiError> {
//! let client = neudev::NeuDevClient::from_env()?;
//! let (_, session) = client.login("ada@neu.edu.ph", "hunter22!").await?;
//! for class in client.classes(&session).await? {
//!     println!("{} {}", class.class_id, class.class_name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod session;
pub mod types;

#[cfg(test)]
mod test_support;

pub use config::{ClientConfig, Timeouts};
pub use error::{ApiError, Failure, MissingCredential};
pub use http::{NeuDevClient, normalize_response};
pub use session::{FileStore, MemoryStore, Session, SessionStore, StoreError};
pub use types::{Id, Role};
