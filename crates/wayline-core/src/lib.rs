//! # wayline-core
//!
//! Foundation types for the wayline navigation resolver. This crate knows
//! nothing about routes or rendering; it provides the pieces every other
//! crate builds on.
//!
//! ## Modules
//!
//! - [`error`] - Error types and result alias
//! - [`logging`] - Tracing-based logging integration
//! - [`schedule`] - Deferred one-shot task scheduling on a virtual clock

pub mod error;
pub mod logging;
pub mod schedule;

// Re-export the most commonly used types at the crate root.
pub use error::{WaylineError, WaylineResult};
pub use schedule::{Scheduler, TaskHandle};
