//! Commonly used imports
//!
//! Use `use siphon::prelude::*;` for quick access to the most common types
//! and functions.

// Core types
pub use crate::{Routine, Signal, Step, Terminated};

// Producers and consumers
pub use crate::{ClosePolicy, LineFilter, countdown, countdown_with, grep, grep_with};

// Builders
pub use crate::from_fn;

// Execution
pub use crate::{feed, feed_close, feed_close_async};
