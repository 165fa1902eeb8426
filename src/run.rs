//! Caller-side drive loops for push routines.
//!
//! These helpers run the resume cycle for you: each pushed value fully
//! completes (runs the routine to its next suspension point) before the next
//! one is taken from the source, so ordering stays strictly sequential.

use std::future::Future;

use crate::routine::{Routine, Terminated};
use crate::step::Step;

/// Push every value from `lines` into `routine`, collecting the yields.
///
/// The routine is left open; call [`Routine::close`] when done, or use
/// [`feed_close`]. If the routine finishes mid-batch, the remaining values
/// are discarded and the collected yields are returned.
///
/// ```rust
/// use siphon::prelude::*;
///
/// let mut filter = grep_with("python", ClosePolicy::Announce, |_| {});
/// let yields = feed(&mut filter, ["no match".to_string(), "python rocks".to_string()]).unwrap();
/// let forwarded: Vec<String> = yields.into_iter().flatten().collect();
/// assert_eq!(forwarded, vec!["python rocks"]);
/// assert!(!filter.is_closed());
/// ```
pub fn feed<R, I, L>(routine: &mut R, lines: L) -> Result<Vec<R::Yield>, Terminated>
where
    R: Routine<I>,
    L: IntoIterator<Item = I>,
{
    let mut yields = Vec::new();
    for line in lines {
        match routine.push(line)? {
            Step::Yielded(y) => yields.push(y),
            Step::Finished(_) => break,
        }
    }
    Ok(yields)
}

/// Push every value from `lines` into `routine`, then close it.
///
/// Consumes the routine, since it is terminal afterwards. Returns the
/// collected yields and the finish value. A routine that finishes mid-batch
/// short-circuits with that finish value.
pub fn feed_close<R, I, L>(mut routine: R, lines: L) -> Result<(Vec<R::Yield>, R::Finish), Terminated>
where
    R: Routine<I>,
    L: IntoIterator<Item = I>,
{
    let mut yields = Vec::new();
    for line in lines {
        match routine.push(line)? {
            Step::Yielded(y) => yields.push(y),
            Step::Finished(finish) => return Ok((yields, finish)),
        }
    }
    let finish = routine.close()?;
    Ok((yields, finish))
}

/// Async version of [`feed_close`].
///
/// `source` produces each successive value as a future; `None` signals the
/// end of input, at which point the routine is closed.
pub async fn feed_close_async<R, I, S, Fut>(
    mut routine: R,
    mut source: S,
) -> Result<(Vec<R::Yield>, R::Finish), Terminated>
where
    R: Routine<I>,
    S: FnMut() -> Fut,
    Fut: Future<Output = Option<I>>,
{
    let mut yields = Vec::new();
    while let Some(line) = source().await {
        match routine.push(line)? {
            Step::Yielded(y) => yields.push(y),
            Step::Finished(finish) => return Ok((yields, finish)),
        }
    }
    let finish = routine.close()?;
    Ok((yields, finish))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{ClosePolicy, grep_with};
    use crate::routine::{Signal, from_fn};
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::future::{Future, ready};
    use std::rc::Rc;
    use std::sync::Arc;
    use std::task::{Context, Poll, Wake, Waker};

    fn block_on<F: Future>(future: F) -> F::Output {
        struct Noop;
        impl Wake for Noop {
            fn wake(self: Arc<Self>) {}
        }

        let waker = Waker::from(Arc::new(Noop));
        let mut context = Context::from_waker(&waker);
        let mut future = Box::pin(future);

        loop {
            match Future::poll(future.as_mut(), &mut context) {
                Poll::Ready(value) => return value,
                Poll::Pending => std::thread::yield_now(),
            }
        }
    }

    #[test]
    fn test_feed_collects_yields_and_leaves_routine_open() {
        let mut total = 0_i64;
        let mut sum = from_fn(move |signal: Signal<i64>| match signal {
            Signal::Push(n) => {
                total += n;
                Step::Yielded(total)
            }
            Signal::Close => Step::Finished(total),
        });

        let yields = feed(&mut sum, [1, 2, 3]).unwrap();
        assert_eq!(yields, vec![1, 3, 6]);
        assert_eq!(sum.close().unwrap(), 6);
    }

    #[test]
    fn test_feed_on_closed_routine_is_rejected() {
        let mut routine = from_fn(|signal: Signal<u32>| match signal {
            Signal::Push(n) => Step::Yielded(n),
            Signal::Close => Step::Finished(()),
        });
        routine.close().unwrap();
        assert_eq!(feed(&mut routine, [1]), Err(Terminated));
    }

    #[test]
    fn test_feed_close_short_circuits_on_early_finish() {
        let routine = from_fn(|signal: Signal<u32>| match signal {
            Signal::Push(0) => Step::Finished("hit zero"),
            Signal::Push(n) => Step::Yielded(n),
            Signal::Close => Step::Finished("closed"),
        });

        let (yields, finish) = feed_close(routine, [3, 2, 0, 9]).unwrap();
        assert_eq!(yields, vec![3, 2]);
        assert_eq!(finish, "hit zero");
    }

    #[test]
    fn test_feed_close_drives_filter_end_to_end() {
        let out = Rc::new(RefCell::new(Vec::new()));
        let sink = {
            let out = Rc::clone(&out);
            move |line: &str| out.borrow_mut().push(line.to_string())
        };
        let filter = grep_with("python", ClosePolicy::Guard, sink);

        let lines = [
            "Yeah, but no, but yeah, but no".to_string(),
            "A series of tubes".to_string(),
            "python generators rock!".to_string(),
        ];
        let (yields, finish) = feed_close(filter, lines).unwrap();

        let forwarded: Vec<String> = yields.into_iter().flatten().collect();
        assert_eq!(forwarded, vec!["python generators rock!"]);
        assert_eq!(finish, None);
        assert_eq!(
            &*out.borrow(),
            &[
                "Looking for python",
                "python generators rock!",
                "clean up!",
            ]
        );
    }

    #[test]
    fn test_feed_close_async_from_queue() {
        let filter = grep_with("python", ClosePolicy::FinalYield("???".to_string()), |_| {});
        let queue = Rc::new(RefCell::new(VecDeque::from(vec![
            "no match".to_string(),
            "python rocks".to_string(),
        ])));

        let (yields, finish) = block_on(feed_close_async(filter, {
            let queue = Rc::clone(&queue);
            move || ready(queue.borrow_mut().pop_front())
        }))
        .unwrap();

        let forwarded: Vec<String> = yields.into_iter().flatten().collect();
        assert_eq!(forwarded, vec!["python rocks"]);
        assert_eq!(finish, Some("???".to_string()));
    }
}
