// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// A list was asked to compute rows before it was attached to a host.
///
/// This is a caller-contract violation: hosts must defer rendering until the
/// scrollable element exists. It is reported, not retried.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct NotAttached;

impl fmt::Debug for NotAttached {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NotAttached")
    }
}

impl fmt::Display for NotAttached {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("viewport is not attached to a host element")
    }
}

impl core::error::Error for NotAttached {}
