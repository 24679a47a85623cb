//! Application controller for the parcel zoning map.
//!
//! All UI state lives in one [`Session`], mutated only by [`Event`]s handled
//! one at a time. Network work is described as [`Effect`]s; the
//! [`EventLoop`] runs them against a backend and feeds completions back in as
//! events.

pub mod error;
pub mod event;
pub mod event_loop;
pub mod panel;
pub mod session;
pub mod submit;

pub use error::*;
pub use event::*;
pub use event_loop::*;
pub use panel::*;
pub use session::*;
pub use submit::*;
