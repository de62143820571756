//! Background Tasks Module
//!
//! Contains background tasks a host application may opt into.
//!
//! # Tasks
//! - TTL Cleanup: Removes expired cache entries at a fixed interval

mod cleanup;

pub use cleanup::{spawn_cleanup_task, spawn_configured_cleanup};
