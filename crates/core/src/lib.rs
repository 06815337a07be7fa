//! Domain layer for the taskhub service.
//!
//! Holds the shared type aliases, the error taxonomy, and the task input
//! validation rules. This crate has no database or HTTP dependencies so the
//! rules can be unit-tested in isolation.

pub mod error;
pub mod task;
pub mod types;
