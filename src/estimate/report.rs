/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use core::fmt;

/// The outcome of an estimation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Estimate {
    /// The estimated size in bytes.
    pub bytes: usize,
    /// Distinct objects and containers counted.
    pub objects: usize,
    /// References skipped because their target had already been counted.
    pub revisits: usize,
    /// Values sized by the serialization oracle.
    pub serialized: usize,
    /// Values that fell through to the native size query.
    pub fallbacks: usize,
    /// Whether a depth or object ceiling cut the pass short, in which case
    /// [`bytes`](Estimate::bytes) is an underestimate.
    pub truncated: bool,
}

impl fmt::Display for Estimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} B ({} objects, {} revisits, {} serialized, {} fallbacks{})",
            self.bytes,
            self.objects,
            self.revisits,
            self.serialized,
            self.fallbacks,
            if self.truncated { ", truncated" } else { "" }
        )
    }
}
