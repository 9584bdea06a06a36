//! Centralized user-facing message system.
//!
//! Message text lives in [`types::Message`] and its `Display`
//! implementation; the macros in [`macros`] handle output routing.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
