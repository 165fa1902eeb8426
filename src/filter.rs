//! Push-based line filter with a pluggable close policy.
//!
//! [`grep(pattern, policy)`](grep) builds a primed [`LineFilter`]: the
//! factory drives the routine to its first intake point before returning,
//! emitting `Looking for {pattern}` on the way, so the first pushed line is
//! received rather than missed.
//!
//! Every pushed line is tested with an exact, case-sensitive substring
//! match. Matches are forwarded through the sink and reported back to the
//! caller; misses are a no-op. The close signal runs exactly one of three
//! cleanup policies, selected at construction: one state machine with a
//! pluggable strategy, not three copies of the routine.
//!
//! # Examples
//!
//! ```rust
//! use siphon::prelude::*;
//!
//! let mut filter = grep_with("python", ClosePolicy::Announce, |_| {});
//! assert_eq!(filter.push("a series of tubes".to_string()).unwrap(), Step::Yielded(None));
//! assert_eq!(
//!     filter.push("python rocks".to_string()).unwrap(),
//!     Step::Yielded(Some("python rocks".to_string())),
//! );
//! assert_eq!(filter.close().unwrap(), None);
//! assert_eq!(filter.push("too late".to_string()), Err(Terminated));
//! ```

use crate::routine::{Routine, Signal, Terminated};
use crate::step::Step;

/// Cleanup behavior run when a [`LineFilter`] receives the close signal.
///
/// The policies are mutually exclusive and selected at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClosePolicy {
    /// Emit `Going away. Goodbye` through the sink, then stop.
    /// `close()` returns `Ok(None)`.
    Announce,
    /// Produce one final value from the cleanup path; `close()` returns it
    /// as `Ok(Some(value))`.
    FinalYield(String),
    /// Emit `clean up!` through the sink on every exit path: explicit close
    /// or drop without close, exactly once either way.
    Guard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Driven to the first intake point inside the factory; no line pushed yet.
    Primed,
    /// Parked at the intake point between pushes.
    AwaitingInput,
    /// The cleanup branch has run. Terminal.
    Closed,
}

/// A primed, suspended line consumer.
///
/// Created via [`grep`] or [`grep_with`]. Holds the pattern captured at
/// creation (immutable for the routine's lifetime) and the suspension
/// position; each [`push`](Routine::push) runs one resume cycle.
pub struct LineFilter<S>
where
    S: FnMut(&str),
{
    pattern: String,
    policy: ClosePolicy,
    sink: S,
    state: State,
}

/// Create a primed line filter that forwards matches to stdout.
pub fn grep(pattern: impl Into<String>, policy: ClosePolicy) -> LineFilter<fn(&str)> {
    grep_with(pattern, policy, crate::stdout_line as fn(&str))
}

/// Create a primed line filter that forwards matches and announcements
/// through `sink`.
///
/// Priming happens here: the `Looking for {pattern}` announcement runs
/// before the handle is returned.
pub fn grep_with<S>(pattern: impl Into<String>, policy: ClosePolicy, mut sink: S) -> LineFilter<S>
where
    S: FnMut(&str),
{
    let pattern = pattern.into();
    sink(&format!("Looking for {pattern}"));
    tracing::debug!(pattern = %pattern, ?policy, "filter primed");
    LineFilter {
        pattern,
        policy,
        sink,
        state: State::Primed,
    }
}

impl<S> LineFilter<S>
where
    S: FnMut(&str),
{
    /// The substring this filter is looking for.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Returns `true` once the cleanup branch has run.
    pub fn is_closed(&self) -> bool {
        self.state == State::Closed
    }
}

impl<S> Routine<String> for LineFilter<S>
where
    S: FnMut(&str),
{
    /// `Some(line)` when the line was forwarded, `None` on a miss.
    type Yield = Option<String>;
    /// The final value configured by [`ClosePolicy::FinalYield`], if any.
    type Finish = Option<String>;

    fn resume(
        &mut self,
        signal: Signal<String>,
    ) -> Result<Step<Option<String>, Option<String>>, Terminated> {
        if self.state == State::Closed {
            return Err(Terminated);
        }
        match signal {
            Signal::Push(line) => {
                self.state = State::AwaitingInput;
                if line.contains(&self.pattern) {
                    (self.sink)(&line);
                    tracing::trace!(line = %line, "forwarded");
                    Ok(Step::Yielded(Some(line)))
                } else {
                    tracing::trace!("no match");
                    Ok(Step::Yielded(None))
                }
            }
            Signal::Close => {
                self.state = State::Closed;
                let finish = match &self.policy {
                    ClosePolicy::Announce => {
                        (self.sink)("Going away. Goodbye");
                        None
                    }
                    ClosePolicy::FinalYield(value) => Some(value.clone()),
                    ClosePolicy::Guard => {
                        (self.sink)("clean up!");
                        None
                    }
                };
                tracing::debug!(pattern = %self.pattern, "filter closed");
                Ok(Step::Finished(finish))
            }
        }
    }
}

impl<S> Drop for LineFilter<S>
where
    S: FnMut(&str),
{
    /// The guard policy's cleanup must run even when the caller discards the
    /// filter without closing it.
    fn drop(&mut self) {
        if self.policy == ClosePolicy::Guard && self.state != State::Closed {
            (self.sink)("clean up!");
            self.state = State::Closed;
        }
    }
}
