//! Core trait for push-based suspended routines.
//!
//! A [`Routine`] is a consumer parked at an intake point: an explicit state
//! machine holding its resume position and captured locals, advanced one
//! resume cycle at a time. Each resume runs the routine to its next
//! suspension point before control returns to the caller, so ordering is
//! strictly sequential and caller-driven.
//!
//! Cancellation is modeled as an out-of-band resume value: [`Signal::Close`]
//! routes execution to the routine's cleanup branch instead of its intake
//! branch. A routine is terminal once its cleanup branch has run; every
//! later resume is rejected with [`Terminated`].

use either::Either;

use crate::step::Step;

/// Resume payload for a suspended routine.
///
/// `Push` carries a normal input value to the intake point. `Close` is the
/// terminate signal: no more input will arrive, and the routine must run its
/// cleanup branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal<I> {
    /// Resume with a normal input value.
    Push(I),
    /// Resume on the cleanup path; no further input will be pushed.
    Close,
}

/// Error returned when resuming a routine whose cleanup path has already run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("routine already terminated")]
pub struct Terminated;

/// A consumer parked at an intake point, advanced one resume cycle at a time.
///
/// ```rust
/// use siphon::prelude::*;
///
/// let mut total = 0_i64;
/// let mut sum = from_fn(move |signal: Signal<i64>| match signal {
///     Signal::Push(n) => {
///         total += n;
///         Step::Yielded(total)
///     }
///     Signal::Close => Step::Finished(total),
/// });
///
/// assert_eq!(sum.push(3).unwrap(), Step::Yielded(3));
/// assert_eq!(sum.push(4).unwrap(), Step::Yielded(7));
/// assert_eq!(sum.close().unwrap(), 7);
/// assert_eq!(sum.push(1), Err(Terminated));
/// ```
pub trait Routine<I> {
    /// Value reported when the routine parks again after a push.
    type Yield;

    /// Final value produced by the cleanup path.
    type Finish;

    /// Resume the routine with `signal`, running it to its next suspension
    /// point, or through its cleanup branch for [`Signal::Close`].
    fn resume(&mut self, signal: Signal<I>)
        -> Result<Step<Self::Yield, Self::Finish>, Terminated>;

    /// Resume with a normal input value.
    ///
    /// Shorthand for `resume(Signal::Push(input))`.
    fn push(&mut self, input: I) -> Result<Step<Self::Yield, Self::Finish>, Terminated> {
        self.resume(Signal::Push(input))
    }

    /// Signal that no more input will arrive, running the cleanup branch.
    ///
    /// A conforming routine finishes in response to `Close`; a yield here is
    /// a contract violation and reported as [`Terminated`].
    fn close(&mut self) -> Result<Self::Finish, Terminated> {
        match self.resume(Signal::Close)? {
            Step::Finished(finish) => Ok(finish),
            Step::Yielded(_) => Err(Terminated),
        }
    }

    fn boxed(self) -> Box<dyn Routine<I, Yield = Self::Yield, Finish = Self::Finish>>
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

impl<I, R> Routine<I> for &mut R
where
    R: Routine<I> + ?Sized,
{
    type Yield = R::Yield;
    type Finish = R::Finish;

    fn resume(
        &mut self,
        signal: Signal<I>,
    ) -> Result<Step<Self::Yield, Self::Finish>, Terminated> {
        (**self).resume(signal)
    }
}

impl<I, R> Routine<I> for Box<R>
where
    R: Routine<I> + ?Sized,
{
    type Yield = R::Yield;
    type Finish = R::Finish;

    fn resume(
        &mut self,
        signal: Signal<I>,
    ) -> Result<Step<Self::Yield, Self::Finish>, Terminated> {
        (**self).resume(signal)
    }
}

impl<I, L, R> Routine<I> for Either<L, R>
where
    L: Routine<I>,
    R: Routine<I, Yield = L::Yield, Finish = L::Finish>,
{
    type Yield = L::Yield;
    type Finish = L::Finish;

    fn resume(
        &mut self,
        signal: Signal<I>,
    ) -> Result<Step<Self::Yield, Self::Finish>, Terminated> {
        match self {
            Either::Left(l) => l.resume(signal),
            Either::Right(r) => r.resume(signal),
        }
    }
}

/// Routine built from a closure over the raw [`Signal`].
///
/// Created via [`from_fn`]. The wrapper owns the terminal-state bookkeeping:
/// once the closure finishes, every later resume is `Err(Terminated)`.
pub struct FromFn<G> {
    step: G,
    live: bool,
}

/// Create a routine from a closure over the raw [`Signal`].
///
/// ```rust
/// use siphon::prelude::*;
///
/// let mut seen = 0_u32;
/// let mut counter = from_fn(move |signal: Signal<&str>| match signal {
///     Signal::Push(_) => {
///         seen += 1;
///         Step::Yielded(seen)
///     }
///     Signal::Close => Step::Finished(seen),
/// });
///
/// assert_eq!(counter.push("a").unwrap(), Step::Yielded(1));
/// assert_eq!(counter.close().unwrap(), 1);
/// ```
pub fn from_fn<I, Y, F, G>(resume: G) -> FromFn<G>
where
    G: FnMut(Signal<I>) -> Step<Y, F>,
{
    FromFn { step: resume, live: true }
}

impl<I, Y, F, G> Routine<I> for FromFn<G>
where
    G: FnMut(Signal<I>) -> Step<Y, F>,
{
    type Yield = Y;
    type Finish = F;

    fn resume(&mut self, signal: Signal<I>) -> Result<Step<Y, F>, Terminated> {
        if !self.live {
            return Err(Terminated);
        }
        let step = (self.step)(signal);
        if step.is_finished() {
            self.live = false;
        }
        Ok(step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally() -> impl Routine<u32, Yield = u32, Finish = u32> {
        let mut total = 0_u32;
        from_fn(move |signal: Signal<u32>| match signal {
            Signal::Push(n) => {
                total += n;
                Step::Yielded(total)
            }
            Signal::Close => Step::Finished(total),
        })
    }

    #[test]
    fn test_push_runs_one_resume_cycle() {
        let mut routine = tally();
        assert_eq!(routine.push(2).unwrap(), Step::Yielded(2));
        assert_eq!(routine.push(5).unwrap(), Step::Yielded(7));
    }

    #[test]
    fn test_close_finishes_with_final_value() {
        let mut routine = tally();
        routine.push(10).unwrap();
        assert_eq!(routine.close().unwrap(), 10);
    }

    #[test]
    fn test_resume_after_close_is_rejected() {
        let mut routine = tally();
        routine.close().unwrap();
        assert_eq!(routine.push(1), Err(Terminated));
        assert_eq!(routine.close(), Err(Terminated));
    }

    #[test]
    fn test_finish_from_push_is_also_terminal() {
        let mut routine = from_fn(|signal: Signal<u32>| match signal {
            Signal::Push(n) if n == 0 => Step::Finished("zero"),
            Signal::Push(_) => Step::Yielded(()),
            Signal::Close => Step::Finished("closed"),
        });

        assert_eq!(routine.push(3).unwrap(), Step::Yielded(()));
        assert_eq!(routine.push(0).unwrap(), Step::Finished("zero"));
        assert_eq!(routine.push(3), Err(Terminated));
    }

    #[test]
    fn test_yield_on_close_is_a_contract_violation() {
        let mut routine = from_fn(|_: Signal<u32>| -> Step<i32, ()> { Step::Yielded(1) });
        assert_eq!(routine.close(), Err(Terminated));
    }

    #[test]
    fn test_either_dispatches_to_active_branch() {
        let mut left: Either<_, FromFn<fn(Signal<u32>) -> Step<u32, u32>>> =
            Either::Left(tally());
        assert_eq!(left.push(4).unwrap(), Step::Yielded(4));
        assert_eq!(left.close().unwrap(), 4);
    }

    #[test]
    fn test_boxed_routine_is_still_drivable() {
        let mut routine = tally().boxed();
        assert_eq!(routine.push(1).unwrap(), Step::Yielded(1));
        assert_eq!(routine.close().unwrap(), 1);
    }
}
