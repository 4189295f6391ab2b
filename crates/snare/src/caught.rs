// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::any::Any;
use std::fmt::{Debug, Display, Formatter};
use std::panic::resume_unwind;

/// A failure captured from an unwinding operation.
///
/// `Caught` owns the payload an unwinding operation was aborted with - the value
/// handed to [`panic!`] or [`panic_any`][std::panic::panic_any] - without interpreting
/// it. The payload's runtime type is the failure's classification: typed recovery
/// (see [`Attempt::recover_for`][crate::Attempt::recover_for]) dispatches on it via
/// the queries below.
///
/// # Examples
///
/// ```rust
/// use snare::{Attempt, Caught};
///
/// let attempt = Attempt::run(|| -> u32 { panic!("backing store unreachable") });
///
/// let caught: &Caught = attempt.failure().expect("the operation failed");
/// assert_eq!(caught.message(), Some("backing store unreachable"));
/// assert!(caught.is::<&str>());
/// ```
pub struct Caught {
    payload: Box<dyn Any + Send + 'static>,
}

impl Caught {
    /// Creates a captured failure from an arbitrary payload value.
    ///
    /// This is the explicit entry point for code that wants to fabricate a failure
    /// without unwinding, such as lifting an `Err` out of a [`Result`] or rejecting
    /// a value from a filter.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use snare::{Attempt, Caught};
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct Missing(&'static str);
    ///
    /// let attempt: Attempt<u32> = Attempt::Failure(Caught::new(Missing("user_id")));
    /// let caught = attempt.failure().expect("constructed as a failure");
    /// assert_eq!(caught.downcast_ref(), Some(&Missing("user_id")));
    /// ```
    pub fn new(payload: impl Any + Send) -> Self {
        Self {
            payload: Box::new(payload),
        }
    }

    /// Wraps a payload as produced by `catch_unwind`, without re-boxing it.
    pub(crate) fn from_unwind(payload: Box<dyn Any + Send>) -> Self {
        Self { payload }
    }

    /// Returns `true` if the payload is a value of type `E`.
    #[must_use]
    pub fn is<E: Any>(&self) -> bool {
        self.payload.is::<E>()
    }

    /// Returns a reference to the payload if it is a value of type `E`.
    #[must_use]
    pub fn downcast_ref<E: Any>(&self) -> Option<&E> {
        self.payload.downcast_ref::<E>()
    }

    /// Consumes the failure and extracts the payload if it is a value of type `E`.
    ///
    /// # Errors
    ///
    /// Returns the failure unchanged when the payload is not an `E`, so it remains
    /// available for a later recovery stage.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use snare::Caught;
    ///
    /// let caught = Caught::new(42_u32);
    /// let caught = caught.downcast::<String>().expect_err("payload is a u32");
    /// assert_eq!(caught.downcast::<u32>().ok(), Some(42));
    /// ```
    pub fn downcast<E: Any>(self) -> Result<E, Self> {
        match self.payload.downcast::<E>() {
            Ok(payload) => Ok(*payload),
            Err(payload) => Err(Self { payload }),
        }
    }

    /// Returns the panic message when the payload carries one.
    ///
    /// The [`panic!`] macro produces `&'static str` payloads for literal messages and
    /// `String` payloads for formatted ones; both are recognized here. Payloads of any
    /// other type yield `None`.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        if let Some(message) = self.payload.downcast_ref::<&'static str>() {
            Some(message)
        } else {
            self.payload.downcast_ref::<String>().map(String::as_str)
        }
    }

    /// Consumes the failure and returns the raw boxed payload.
    #[must_use]
    pub fn into_payload(self) -> Box<dyn Any + Send> {
        self.payload
    }

    /// Resumes unwinding with the original payload.
    ///
    /// The unwind continues exactly as if it had never been captured. Unlike a fresh
    /// [`panic!`], this does not run the panic hook again, so the failure is not
    /// reported twice.
    pub fn rethrow(self) -> ! {
        resume_unwind(self.payload)
    }
}

impl Display for Caught {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.message() {
            Some(message) => f.write_str(message),
            None => f.write_str("captured failure with a non-string payload"),
        }
    }
}

impl Debug for Caught {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Caught").field("message", &self.message()).finish_non_exhaustive()
    }
}

impl std::error::Error for Caught {}
