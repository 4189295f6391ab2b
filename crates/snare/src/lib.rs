// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! Failure capture and recovery chaining for synchronous operations.
//!
//! # Why
//!
//! Unwinding is Rust's exception: it rips through every caller until something
//! catches it, and code that wants to continue past a possible panic ends up
//! wrapping each call site in its own `catch_unwind` scaffolding. This crate
//! replaces that scaffolding with a value. An operation runs once under a
//! capture boundary, its outcome - value or captured failure - travels through
//! an ordinary data type, and the rest of the pipeline is written as if nothing
//! can go wrong. Failure skips ahead on its own; no branching at each step.
//!
//! # Core Types
//!
//! - [`Attempt`]: the two-variant outcome container and its chaining operations
//!   (transform, dependent transform, filter, recovery, extraction).
//! - [`Caught`]: a captured failure - the payload the operation unwound with,
//!   classified by its runtime type.
//! - [`Unsatisfied`]: the payload a filter rejection fails with.
//!
//! # Quick Start
//!
//! ```rust
//! use snare::Attempt;
//!
//! let value = Attempt::run(|| 42)
//!     .map(|n| n + 1)
//!     .get();
//!
//! assert_eq!(value, 43);
//! ```
//!
//! A failure anywhere in the chain short-circuits the operations after it, and
//! surfaces only when (and if) the caller extracts:
//!
//! ```rust
//! use snare::Attempt;
//!
//! let attempt = Attempt::run(|| 1)
//!     .and_then(|_| Attempt::run(|| -> i32 { panic!("downstream failed") }))
//!     .map(|n| n * 10); // not invoked
//!
//! assert!(attempt.is_failure());
//! assert_eq!(attempt.recover(|_| 99).get(), 99);
//! ```
//!
//! # Recovery by Failure Type
//!
//! Failures are classified by the runtime type of their payload. Raise typed
//! failures with [`panic_any`][std::panic::panic_any] and intercept them
//! selectively; chained typed recoveries form a dispatch cascade where the
//! first matching stage wins:
//!
//! ```rust
//! use std::panic::panic_any;
//!
//! use snare::Attempt;
//!
//! #[derive(Debug)]
//! struct CacheMiss;
//!
//! #[derive(Debug)]
//! struct Unreachable;
//!
//! let value = Attempt::run(|| -> &str { panic_any(CacheMiss) })
//!     .recover_for::<Unreachable, _>(|_| "fallback origin")
//!     .recover_for::<CacheMiss, _>(|_| "recomputed")
//!     .get();
//!
//! assert_eq!(value, "recomputed");
//! ```
//!
//! # Thread Safety
//!
//! An `Attempt` is immutable once constructed and moves freely across threads
//! (`Send` when its value is), but the captured payload is `Send`-only, so a
//! chain is walked forward by a single logical owner rather than shared between
//! concurrent readers. All operations are synchronous: a closure that never
//! returns blocks its caller exactly as the direct call would.

mod attempt;
mod caught;
mod unsatisfied;

pub use attempt::Attempt;
pub use caught::Caught;
pub use unsatisfied::Unsatisfied;
