/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::dispatch::Pass;
use crate::traits::{Field, Inspect};
use log::debug;

/// Sum, over the instance fields of `value`, a fixed per-field overhead plus
/// the estimate of the field.
///
/// The caller must have already registered `value` with the identity
/// tracker.
pub(super) fn recurse(pass: &mut Pass<'_>, value: &dyn Inspect) -> usize {
    let overhead = pass.estimator.field_overhead;
    let mut size = 0;
    if let Err(err) = value.for_each_field(&mut |field: Field<'_>| {
        size += overhead + pass.estimate(field.declared(), field.value());
    }) {
        debug!(
            "Cannot read the fields of {}: {}",
            value.runtime_desc().name(),
            err
        );
    }
    size
}
