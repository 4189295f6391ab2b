// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt::{Display, Formatter};

/// The failure payload produced when a filter predicate rejects a value.
///
/// This is its own type, rather than a plain message, so that filter rejections
/// stay distinguishable from failures raised inside operations:
/// `recover_for::<Unsatisfied, _>` intercepts exactly the former.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Unsatisfied;

impl Display for Unsatisfied {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("value did not satisfy the filter predicate")
    }
}

impl std::error::Error for Unsatisfied {}
