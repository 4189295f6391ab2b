// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Example demonstrating a linear processing pipeline over `Attempt`.
//!
//! This example parses and validates request payloads without a single
//! conditional at the call sites: each stage is declared once, and a failing
//! payload simply skips the stages after the point of failure.

use snare::{Attempt, Unsatisfied};

fn main() {
    // The unwinds below are expected; keep the default hook from reporting them.
    std::panic::set_hook(Box::new(|_| {}));

    for raw in ["21", "-3", "seven"] {
        let summary = process(raw);
        println!("{raw:>7} -> {summary}");
    }
}

/// Parses, validates, and renders one payload.
fn process(raw: &str) -> String {
    Attempt::run(|| raw.trim().parse::<i32>().expect("payload must be numeric"))
        .filter(|n| *n > 0)
        .map(|n| format!("doubled to {}", n * 2))
        .recover_for::<Unsatisfied, _>(|_| "rejected: must be positive".to_string())
        .get_or_else(|caught| format!("rejected: {caught}"))
}
