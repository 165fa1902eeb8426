/// Outcome of resuming a suspended routine: a yielded value to continue with,
/// or a final value marking termination.
///
/// `Step` plays the same role for suspendable routines that `Option` plays for
/// optional values and `Result` for fallible ones: a small vocabulary type the
/// rest of the crate speaks.
///
/// # Examples
///
/// ```rust
/// use siphon::Step;
///
/// let parked: Step<i32, String> = Step::Yielded(42);
/// let done: Step<i32, String> = Step::Finished("all lines seen".to_string());
///
/// assert_eq!(parked.map_yielded(|x| x * 2), Step::Yielded(84));
/// assert!(done.is_finished());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step<Y, F> {
    /// The routine produced a value and parked again at its suspension point.
    Yielded(Y),
    /// The routine ran its cleanup path and terminated with a final value.
    Finished(F),
}

impl<Y, F> Step<Y, F> {
    /// Returns `true` if the step is `Yielded`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use siphon::Step;
    ///
    /// let x: Step<i32, &str> = Step::Yielded(42);
    /// assert!(x.is_yielded());
    /// ```
    #[inline]
    pub const fn is_yielded(&self) -> bool {
        matches!(self, Step::Yielded(_))
    }

    /// Returns `true` if the step is `Finished`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use siphon::Step;
    ///
    /// let x: Step<i32, &str> = Step::Finished("done");
    /// assert!(x.is_finished());
    /// ```
    #[inline]
    pub const fn is_finished(&self) -> bool {
        matches!(self, Step::Finished(_))
    }

    /// Converts from `Step<Y, F>` to `Option<Y>`, discarding a final value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use siphon::Step;
    ///
    /// let x: Step<i32, &str> = Step::Yielded(42);
    /// assert_eq!(x.yielded(), Some(42));
    ///
    /// let y: Step<i32, &str> = Step::Finished("done");
    /// assert_eq!(y.yielded(), None);
    /// ```
    #[inline]
    pub fn yielded(self) -> Option<Y> {
        match self {
            Step::Yielded(y) => Some(y),
            Step::Finished(_) => None,
        }
    }

    /// Converts from `Step<Y, F>` to `Option<F>`, discarding a yielded value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use siphon::Step;
    ///
    /// let x: Step<i32, &str> = Step::Finished("done");
    /// assert_eq!(x.finished(), Some("done"));
    /// ```
    #[inline]
    pub fn finished(self) -> Option<F> {
        match self {
            Step::Yielded(_) => None,
            Step::Finished(f) => Some(f),
        }
    }

    /// Maps a `Step<Y, F>` to `Step<Y2, F>` by applying a function to a
    /// yielded value, leaving a final value untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use siphon::Step;
    ///
    /// let x: Step<i32, &str> = Step::Yielded(42);
    /// assert_eq!(x.map_yielded(|v| v * 2), Step::Yielded(84));
    /// ```
    #[inline]
    pub fn map_yielded<Y2, G>(self, g: G) -> Step<Y2, F>
    where
        G: FnOnce(Y) -> Y2,
    {
        match self {
            Step::Yielded(y) => Step::Yielded(g(y)),
            Step::Finished(f) => Step::Finished(f),
        }
    }

    /// Maps a `Step<Y, F>` to `Step<Y, F2>` by applying a function to a
    /// final value, leaving a yielded value untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use siphon::Step;
    ///
    /// let x: Step<i32, i32> = Step::Finished(5);
    /// assert_eq!(x.map_finished(|v| v * 2), Step::Finished(10));
    ///
    /// let y: Step<i32, i32> = Step::Yielded(3);
    /// assert_eq!(y.map_finished(|v| v * 2), Step::Yielded(3));
    /// ```
    #[inline]
    pub fn map_finished<F2, G>(self, g: G) -> Step<Y, F2>
    where
        G: FnOnce(F) -> F2,
    {
        match self {
            Step::Yielded(y) => Step::Yielded(y),
            Step::Finished(f) => Step::Finished(g(f)),
        }
    }

    /// Maps both sides at once.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use siphon::Step;
    ///
    /// let x: Step<i32, i32> = Step::Yielded(42);
    /// assert_eq!(x.map(|y| y * 2, |f| f + 1), Step::Yielded(84));
    /// ```
    #[inline]
    pub fn map<Y2, F2, GY, GF>(self, gy: GY, gf: GF) -> Step<Y2, F2>
    where
        GY: FnOnce(Y) -> Y2,
        GF: FnOnce(F) -> F2,
    {
        match self {
            Step::Yielded(y) => Step::Yielded(gy(y)),
            Step::Finished(f) => Step::Finished(gf(f)),
        }
    }

    /// Converts from `&Step<Y, F>` to `Step<&Y, &F>`.
    #[inline]
    pub const fn as_ref(&self) -> Step<&Y, &F> {
        match self {
            Step::Yielded(y) => Step::Yielded(y),
            Step::Finished(f) => Step::Finished(f),
        }
    }

    /// Returns the contained `Yielded` value, consuming `self`.
    ///
    /// # Panics
    ///
    /// Panics if the value is a `Finished` with a message provided by `msg`.
    #[inline]
    pub fn expect_yielded(self, msg: &str) -> Y {
        match self {
            Step::Yielded(y) => y,
            Step::Finished(_) => panic!("{}", msg),
        }
    }

    /// Returns the contained `Finished` value, consuming `self`.
    ///
    /// # Panics
    ///
    /// Panics if the value is a `Yielded` with a message provided by `msg`.
    #[inline]
    pub fn expect_finished(self, msg: &str) -> F {
        match self {
            Step::Yielded(_) => panic!("{}", msg),
            Step::Finished(f) => f,
        }
    }

    /// Returns the contained `Yielded` value, consuming `self`.
    ///
    /// # Panics
    ///
    /// Panics if the value is a `Finished`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use siphon::Step;
    ///
    /// let x: Step<i32, &str> = Step::Yielded(42);
    /// assert_eq!(x.unwrap_yielded(), 42);
    /// ```
    ///
    /// ```should_panic
    /// use siphon::Step;
    ///
    /// let x: Step<i32, &str> = Step::Finished("done");
    /// x.unwrap_yielded(); // panics
    /// ```
    #[inline]
    pub fn unwrap_yielded(self) -> Y {
        match self {
            Step::Yielded(y) => y,
            Step::Finished(_) => panic!("called `Step::unwrap_yielded()` on a `Finished` value"),
        }
    }

    /// Returns the contained `Finished` value, consuming `self`.
    ///
    /// # Panics
    ///
    /// Panics if the value is a `Yielded`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use siphon::Step;
    ///
    /// let x: Step<i32, &str> = Step::Finished("done");
    /// assert_eq!(x.unwrap_finished(), "done");
    /// ```
    #[inline]
    pub fn unwrap_finished(self) -> F {
        match self {
            Step::Yielded(_) => panic!("called `Step::unwrap_finished()` on a `Yielded` value"),
            Step::Finished(f) => f,
        }
    }
}
