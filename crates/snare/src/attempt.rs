// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};

use crate::{Caught, Unsatisfied};

/// The outcome of a synchronous operation: a value, or a captured failure.
///
/// `Attempt` is a closed two-variant sum type. Exactly one variant is inhabited,
/// nothing mutates in place, and every chaining operation consumes its input and
/// produces a fresh `Attempt`. A failure entering a chain skips every transform
/// downstream of it; only recovery operations and terminal extraction touch it.
///
/// Operations are supplied as plain closures. A closure that unwinds never
/// unwinds past the chaining call: the payload is captured at that exact
/// boundary and carried forward as a [`Caught`] value. The one place a captured
/// failure is converted back into an unwind is terminal extraction
/// ([`get`][Self::get] and [`value`][Self::value]).
///
/// # Examples
///
/// ```rust
/// use snare::Attempt;
///
/// let value = Attempt::run(|| "21".parse::<i32>().expect("literal is numeric"))
///     .map(|n| n * 2)
///     .filter(|n| *n > 0)
///     .get();
///
/// assert_eq!(value, 42);
/// ```
#[must_use = "an `Attempt` carries failure as a value; dropping it discards the outcome"]
#[derive(Debug)]
pub enum Attempt<T> {
    /// The operation produced a value.
    Success(T),
    /// The operation failed; the payload it unwound with was captured.
    Failure(Caught),
}

impl<T> Attempt<T> {
    /// Runs an operation and captures its outcome.
    ///
    /// Executes `op` synchronously. A normal return becomes [`Attempt::Success`];
    /// an unwind is caught at this boundary and becomes [`Attempt::Failure`].
    /// This function itself never panics.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use snare::Attempt;
    ///
    /// let ok = Attempt::run(|| 42);
    /// assert_eq!(ok.get(), 42);
    ///
    /// let failed = Attempt::run(|| -> u32 { panic!("boom") });
    /// assert!(failed.is_failure());
    /// ```
    pub fn run<F>(op: F) -> Self
    where
        F: FnOnce() -> T,
    {
        // The closure is consumed by this call, so state it may have left
        // half-updated when the unwind started can never be observed again.
        match catch_unwind(AssertUnwindSafe(op)) {
            Ok(value) => Self::Success(value),
            Err(payload) => Self::Failure(Caught::from_unwind(payload)),
        }
    }

    /// Runs a fallible operation, capturing both `Err` returns and unwinds.
    ///
    /// The `Err` value becomes the failure's payload, classified by its own type
    /// exactly as an unwind payload would be, so
    /// [`recover_for`][Self::recover_for] dispatches on it the same way.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::num::ParseIntError;
    ///
    /// use snare::Attempt;
    ///
    /// let attempt = Attempt::run_fallible(|| "not a number".parse::<i32>());
    /// let recovered = attempt.recover_for::<ParseIntError, _>(|_| -1);
    /// assert_eq!(recovered.get(), -1);
    /// ```
    pub fn run_fallible<F, E>(op: F) -> Self
    where
        F: FnOnce() -> Result<T, E>,
        E: Any + Send,
    {
        match Attempt::run(op) {
            Attempt::Success(Ok(value)) => Self::Success(value),
            Attempt::Success(Err(error)) => Self::Failure(Caught::new(error)),
            Attempt::Failure(caught) => Self::Failure(caught),
        }
    }

    /// Lifts an already-computed [`Result`] into an `Attempt`.
    pub fn from_result<E>(result: Result<T, E>) -> Self
    where
        E: Any + Send,
    {
        match result {
            Ok(value) => Self::Success(value),
            Err(error) => Self::Failure(Caught::new(error)),
        }
    }

    /// Transforms the success value, capturing any unwind from the transform.
    ///
    /// On success, invokes `f` under the same capture discipline as
    /// [`run`][Self::run]. On failure, `f` is not invoked and the failure is
    /// carried through unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use snare::Attempt;
    ///
    /// let attempt = Attempt::run(|| 42).map(|n| n + 1);
    /// assert_eq!(attempt.get(), 43);
    /// ```
    pub fn map<U, F>(self, f: F) -> Attempt<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Attempt::run(move || f(value)),
            Self::Failure(caught) => Attempt::Failure(caught),
        }
    }

    /// Transforms the success value with an operation that itself produces an
    /// `Attempt`, without nesting.
    ///
    /// This is the monadic bind: where [`map`][Self::map] would produce
    /// `Attempt<Attempt<U>>` for an `Attempt`-returning closure, `and_then`
    /// flattens the result. A `Failure` *returned* by `f` and an unwind *raised*
    /// by `f` both surface as the resulting failure. On failure, `f` is not
    /// invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use snare::Attempt;
    ///
    /// fn half(n: i32) -> snare::Attempt<i32> {
    ///     Attempt::run(move || {
    ///         assert!(n % 2 == 0, "odd value");
    ///         n / 2
    ///     })
    /// }
    ///
    /// assert_eq!(Attempt::run(|| 42).and_then(half).get(), 21);
    /// assert!(Attempt::run(|| 43).and_then(half).is_failure());
    /// ```
    pub fn and_then<U, F>(self, f: F) -> Attempt<U>
    where
        F: FnOnce(T) -> Attempt<U>,
    {
        match self {
            Self::Success(value) => match Attempt::run(move || f(value)) {
                Attempt::Success(next) => next,
                Attempt::Failure(caught) => Attempt::Failure(caught),
            },
            Self::Failure(caught) => Attempt::Failure(caught),
        }
    }

    /// Keeps the success value only if it satisfies the predicate.
    ///
    /// A rejected value becomes a failure carrying [`Unsatisfied`], a dedicated
    /// type so that filter rejections remain distinguishable from genuinely
    /// unwinding operations (`recover_for::<Unsatisfied, _>` intercepts exactly
    /// the former). A predicate that unwinds is captured like any other
    /// operation. On failure, the predicate is not invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use snare::{Attempt, Unsatisfied};
    ///
    /// let rejected = Attempt::run(|| 43).filter(|n| n % 2 == 0);
    /// assert!(rejected.failure().is_some_and(|caught| caught.is::<Unsatisfied>()));
    /// ```
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        match self {
            Self::Success(value) => {
                let verdict = catch_unwind(AssertUnwindSafe(|| predicate(&value)));
                match verdict {
                    Ok(true) => Self::Success(value),
                    Ok(false) => Self::Failure(Caught::new(Unsatisfied)),
                    Err(payload) => Self::Failure(Caught::from_unwind(payload)),
                }
            }
            failure @ Self::Failure(_) => failure,
        }
    }

    /// Converts any failure back into a success value.
    ///
    /// On failure, `f` receives the captured failure and its return value becomes
    /// the new success. An unwind inside `f` is captured as a fresh failure. On
    /// success, `f` is not invoked.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use snare::Attempt;
    ///
    /// let value = Attempt::run(|| -> u32 { panic!("boom") })
    ///     .recover(|_| 0)
    ///     .get();
    /// assert_eq!(value, 0);
    /// ```
    pub fn recover<F>(self, f: F) -> Self
    where
        F: FnOnce(Caught) -> T,
    {
        match self {
            success @ Self::Success(_) => success,
            Self::Failure(caught) => Attempt::run(move || f(caught)),
        }
    }

    /// Converts a failure back into a success value, but only when the payload is
    /// a value of type `E`.
    ///
    /// A non-matching failure passes through untouched, still available to a
    /// later `recover_for` with a different type or to an untyped
    /// [`recover`][Self::recover]. Chained calls therefore form a
    /// dispatch-by-type cascade in declaration order: the first matching stage
    /// consumes the failure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::panic::panic_any;
    ///
    /// use snare::Attempt;
    ///
    /// #[derive(Debug)]
    /// struct Stale;
    /// #[derive(Debug)]
    /// struct Gone;
    ///
    /// let value = Attempt::run(|| -> u32 { panic_any(Gone) })
    ///     .recover_for::<Stale, _>(|_| 1)
    ///     .recover_for::<Gone, _>(|_| 2)
    ///     .get();
    /// assert_eq!(value, 2);
    /// ```
    pub fn recover_for<E, F>(self, f: F) -> Self
    where
        E: Any,
        F: FnOnce(E) -> T,
    {
        match self {
            success @ Self::Success(_) => success,
            Self::Failure(caught) => match caught.downcast::<E>() {
                Ok(error) => Attempt::run(move || f(error)),
                Err(caught) => Self::Failure(caught),
            },
        }
    }

    /// Extracts the success value, resuming the captured unwind on failure.
    ///
    /// This is the deliberate boundary where captured failure is converted back
    /// into unwinding, so callers who opt out of handling `Attempt` explicitly
    /// still observe the original failure.
    ///
    /// # Panics
    ///
    /// On [`Attempt::Failure`], resumes unwinding with the original payload.
    #[must_use]
    pub fn get(self) -> T {
        match self {
            Self::Success(value) => value,
            Self::Failure(caught) => caught.rethrow(),
        }
    }

    /// Borrows the success value, panicking on failure.
    ///
    /// The read-only counterpart of [`get`][Self::get] for callers who need the
    /// value without consuming the attempt.
    ///
    /// # Panics
    ///
    /// On [`Attempt::Failure`], panics with the failure's description.
    #[must_use]
    #[expect(clippy::panic, reason = "surfacing the captured failure is this accessor's contract")]
    pub fn value(&self) -> &T {
        match self {
            Self::Success(value) => value,
            Self::Failure(caught) => panic!("value() called on a failed attempt: {caught}"),
        }
    }

    /// Returns `true` if the attempt holds a value.
    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if the attempt holds a captured failure.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns the success value, if any. Never panics.
    #[must_use]
    pub fn success(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns the captured failure, if any. Never panics.
    #[must_use]
    pub fn failure(&self) -> Option<&Caught> {
        match self {
            Self::Success(_) => None,
            Self::Failure(caught) => Some(caught),
        }
    }

    /// Extracts the success value or computes one from the failure.
    ///
    /// Unlike [`recover`][Self::recover], this is terminal: `fallback` runs
    /// outside the capture discipline, so an unwind inside it propagates to the
    /// caller.
    pub fn get_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce(Caught) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Failure(caught) => fallback(caught),
        }
    }

    /// Converts into a standard [`Result`], for `?`-based callers.
    ///
    /// # Errors
    ///
    /// Returns the captured failure as the `Err` variant.
    pub fn into_result(self) -> Result<T, Caught> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(caught) => Err(caught),
        }
    }
}

impl<T> From<Attempt<T>> for Result<T, Caught> {
    fn from(attempt: Attempt<T>) -> Self {
        attempt.into_result()
    }
}

impl<T, E> From<Result<T, E>> for Attempt<T>
where
    E: Any + Send,
{
    fn from(result: Result<T, E>) -> Self {
        Self::from_result(result)
    }
}
