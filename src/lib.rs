//! # Siphon: lazy value pipelines with explicit shutdown
//!
//! Build single-producer/single-consumer pipelines out of suspendable
//! routines: pull-based lazy sequences on one side, push-based consumers
//! with a well-defined close signal on the other.
//!
//! ## Core pieces
//!
//! - **[`Step<Y, F>`](Step)**: the outcome of resuming a routine: it either
//!   yielded a value and parked again, or finished with a final value
//! - **[`Routine<I>`](Routine)**: a suspended consumer that accepts pushed
//!   input via [`Signal::Push`] and a terminate signal via [`Signal::Close`]
//! - **[`countdown(n)`](countdown)**: a finite, lazy, descending sequence
//!   with boundary announcements
//! - **[`grep(pattern, policy)`](grep)**: a primed line filter that forwards
//!   lines containing a substring, with a pluggable [`ClosePolicy`]
//!
//! ## Example
//!
//! ```
//! use siphon::prelude::*;
//!
//! // Pull side: a lazy descending sequence.
//! let values: Vec<u64> = countdown_with(3, |_| {}).collect();
//! assert_eq!(values, vec![3, 2, 1]);
//!
//! // Push side: a primed filter with an explicit close.
//! let mut filter = grep_with("rust", ClosePolicy::Announce, |_| {});
//! let step = filter.push("rust rocks".to_string()).unwrap();
//! assert_eq!(step.unwrap_yielded(), Some("rust rocks".to_string()));
//! assert_eq!(filter.close().unwrap(), None);
//! ```
//!
//! ## Execution
//!
//! - [`feed(routine, lines)`](feed) - push a batch of values, leave the routine open
//! - [`feed_close(routine, lines)`](feed_close) - push a batch, then close
//! - [`feed_close_async(routine, source)`](feed_close_async) - drive from an async source

mod countdown;
mod filter;
mod routine;
mod run;
mod step;

pub mod prelude;

pub use countdown::*;
pub use filter::*;
pub use routine::*;
pub use run::*;
pub use step::*;

pub(crate) fn stdout_line(line: &str) {
    println!("{line}");
}
