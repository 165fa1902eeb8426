//! Finite, lazy, descending sequences with boundary announcements.
//!
//! [`countdown(n)`](countdown) produces `n, n-1, …, 1` one value per pull,
//! announcing `Counting down from {n}` before the first value and
//! `Done counting down` after the last. The sequence is single-pass: once
//! exhausted it stays exhausted, and a fresh invocation is the only way to
//! count again.
//!
//! The pull side of the pipeline is the standard [`Iterator`] seam, so a
//! countdown composes with everything that consumes iterators.
//!
//! # Examples
//!
//! ```rust
//! use siphon::countdown_with;
//!
//! let values: Vec<u64> = countdown_with(5, |_| {}).collect();
//! assert_eq!(values, vec![5, 4, 3, 2, 1]);
//! ```

use std::iter::FusedIterator;

/// Lazy descending sequence from `n` down to `1`.
///
/// Created via [`countdown`] or [`countdown_with`]. Modeled as an explicit
/// state machine holding the resume position: the opening announcement has
/// not run yet, some values remain, or the sequence is exhausted.
pub struct Countdown<S>
where
    S: FnMut(&str),
{
    state: State,
    sink: S,
}

#[derive(Debug, Clone, Copy)]
enum State {
    /// First pull has not happened; the opening announcement is pending.
    Fresh(u64),
    /// Counting; the value is the next one to yield, `0` meaning the
    /// closing announcement is pending.
    Running(u64),
    /// Terminal. Every further pull is `None` with no announcements.
    Exhausted,
}

/// Create a countdown from `n` that announces on stdout.
///
/// `countdown(0)` yields nothing but still runs both announcements on the
/// first pull.
pub fn countdown(n: u64) -> Countdown<fn(&str)> {
    countdown_with(n, crate::stdout_line as fn(&str))
}

/// Create a countdown from `n` that announces through `sink`.
///
/// The announcement sequence is part of the observable behavior; tests
/// capture it by injecting a recording sink.
///
/// ```rust
/// use siphon::countdown_with;
///
/// let mut announcements = Vec::new();
/// let values: Vec<u64> = countdown_with(2, |line| announcements.push(line.to_string())).collect();
/// assert_eq!(values, vec![2, 1]);
/// assert_eq!(announcements, vec!["Counting down from 2", "Done counting down"]);
/// ```
pub fn countdown_with<S>(n: u64, sink: S) -> Countdown<S>
where
    S: FnMut(&str),
{
    Countdown {
        state: State::Fresh(n),
        sink,
    }
}

impl<S> Countdown<S>
where
    S: FnMut(&str),
{
    /// Returns `true` once the sequence has produced its last value and run
    /// the closing announcement.
    pub fn is_exhausted(&self) -> bool {
        matches!(self.state, State::Exhausted)
    }
}

impl<S> Iterator for Countdown<S>
where
    S: FnMut(&str),
{
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        loop {
            match self.state {
                State::Fresh(n) => {
                    (self.sink)(&format!("Counting down from {n}"));
                    tracing::debug!(n, "countdown started");
                    self.state = State::Running(n);
                }
                State::Running(0) => {
                    (self.sink)("Done counting down");
                    tracing::debug!("countdown exhausted");
                    self.state = State::Exhausted;
                    return None;
                }
                State::Running(value) => {
                    self.state = State::Running(value - 1);
                    return Some(value);
                }
                State::Exhausted => return None,
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = match self.state {
            State::Fresh(n) | State::Running(n) => n as usize,
            State::Exhausted => 0,
        };
        (remaining, Some(remaining))
    }
}

impl<S> FusedIterator for Countdown<S> where S: FnMut(&str) {}

impl<S> ExactSizeIterator for Countdown<S> where S: FnMut(&str) {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording() -> (Rc<RefCell<Vec<String>>>, impl FnMut(&str)) {
        let out = Rc::new(RefCell::new(Vec::new()));
        let sink = {
            let out = Rc::clone(&out);
            move |line: &str| out.borrow_mut().push(line.to_string())
        };
        (out, sink)
    }

    #[test]
    fn test_descending_sequence() {
        let values: Vec<u64> = countdown_with(4, |_| {}).collect();
        assert_eq!(values, vec![4, 3, 2, 1]);
    }

    #[test]
    fn test_announcements_bracket_the_values() {
        let (out, sink) = recording();
        let mut seq = countdown_with(3, sink);

        assert!(out.borrow().is_empty()); // lazy: nothing before the first pull
        assert_eq!(seq.next(), Some(3));
        assert_eq!(&*out.borrow(), &["Counting down from 3"]);

        assert_eq!(seq.next(), Some(2));
        assert_eq!(seq.next(), Some(1));
        assert_eq!(out.borrow().len(), 1);

        assert_eq!(seq.next(), None);
        assert_eq!(
            &*out.borrow(),
            &["Counting down from 3", "Done counting down"]
        );
    }

    #[test]
    fn test_zero_yields_nothing_but_announces_both() {
        let (out, sink) = recording();
        let mut seq = countdown_with(0, sink);

        assert_eq!(seq.next(), None);
        assert_eq!(
            &*out.borrow(),
            &["Counting down from 0", "Done counting down"]
        );
        assert!(seq.is_exhausted());
    }

    #[test]
    fn test_exhaustion_is_terminal_and_silent() {
        let (out, sink) = recording();
        let mut seq = countdown_with(1, sink);

        assert_eq!(seq.next(), Some(1));
        assert_eq!(seq.next(), None);
        let announced = out.borrow().len();

        assert_eq!(seq.next(), None);
        assert_eq!(seq.next(), None);
        assert_eq!(out.borrow().len(), announced); // no re-announcement
        assert!(seq.is_exhausted());
    }

    #[test]
    fn test_size_hint_tracks_remaining() {
        let mut seq = countdown_with(3, |_| {});
        assert_eq!(seq.len(), 3);
        seq.next();
        assert_eq!(seq.len(), 2);
        seq.by_ref().for_each(drop);
        assert_eq!(seq.len(), 0);
    }

    #[test]
    fn test_end_to_end_consumer_reads_in_order() {
        let mut seq = countdown_with(3, |_| {});
        let mut seen = Vec::new();
        for value in seq.by_ref() {
            seen.push(value);
        }
        assert_eq!(seen, vec![3, 2, 1]);
        assert_eq!(seq.next(), None);
    }
}
