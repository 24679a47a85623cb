//! Client side of the zoning backend REST API.
//!
//! The backend is an external collaborator; this crate only knows its two
//! endpoints and how to fail cleanly when it misbehaves.

pub mod backend;
pub mod config;
pub mod error;
pub mod http;
pub mod wire;

pub use backend::*;
pub use config::*;
pub use error::*;
pub use http::*;
pub use wire::*;
