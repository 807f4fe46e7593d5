//! Input/output helpers.
//!
//! - chart spec JSON write/read (`export`)
//! - classified sample CSV export (`export`)
//!
//! Files are only written to caller-supplied paths; nothing is persisted
//! implicitly.

pub mod export;

pub use export::*;
