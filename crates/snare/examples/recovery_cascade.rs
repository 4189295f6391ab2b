// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Example demonstrating typed recovery as a dispatch-by-failure-type cascade.
//!
//! This example raises failures of different types with `panic_any` and shows
//! how chained `recover_for` stages intercept each type selectively, in
//! declaration order, while unmatched failures pass through to the untyped
//! fallback.

use std::fmt::Display;
use std::panic::panic_any;

use snare::Attempt;

fn main() {
    // The unwinds below are expected; keep the default hook from reporting them.
    std::panic::set_hook(Box::new(|_| {}));

    lookup("alpha");
    lookup("beta");
    lookup("gamma");
}

/// A lookup failure that a fresh read can fix.
#[derive(Debug)]
struct StaleEntry {
    key: &'static str,
}

/// A lookup failure that no retry will fix.
#[derive(Debug)]
struct Corrupted {
    key: &'static str,
}

impl Display for Corrupted {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "entry for {:?} is corrupted", self.key)
    }
}

impl std::error::Error for Corrupted {}

/// Resolves a key, repairing stale entries and reporting everything else.
fn lookup(key: &'static str) {
    let value = Attempt::run(move || read_cache(key))
        .recover_for::<StaleEntry, _>(|stale| {
            println!("  (re-reading {:?} after stale hit)", stale.key);
            format!("fresh value for {}", stale.key)
        })
        .recover_for::<Corrupted, _>(|corrupted| format!("placeholder ({corrupted})"))
        .get();

    println!("{key} -> {value}");
}

/// A cache read that fails differently depending on the key.
fn read_cache(key: &'static str) -> String {
    match key {
        "alpha" => format!("cached value for {key}"),
        "beta" => panic_any(StaleEntry { key }),
        _ => panic_any(Corrupted { key }),
    }
}
