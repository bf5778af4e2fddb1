/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

The estimation driver.

A [`Pass`] owns the identity tracker of one top-level call and routes
each (declared type, value) pair to a sizing tier, in this order:

1. no declared type and no value: one pointer-width unit;
2. fixed-width and nullable value types;
3. strings;
4. arrays of fixed-width elements;
5. enumerable values;
6. byte streams;
7. closed types, through the serialization oracle;
8. objects, through structural recursion;
9. the native size query of the value.

A closed object that cannot be encoded is sized by structural recursion. A
zero result from tiers 2–8 falls through to tier 9. References that were
already counted contribute nothing, and do not fall through.

*/

use super::{container, primitive, serial, structural, Estimate, IdentityTracker, SizeEstimator};
use crate::desc::{TypeDesc, TypeKind};
use crate::traits::Inspect;
use crate::utils::ensure_sufficient_stack;
use log::{debug, trace};

pub(crate) struct Pass<'a> {
    pub(super) estimator: &'a SizeEstimator,
    tracker: IdentityTracker,
    depth: usize,
    pub(super) report: Estimate,
}

impl<'a> Pass<'a> {
    pub fn new(estimator: &'a SizeEstimator) -> Self {
        Self {
            estimator,
            tracker: IdentityTracker::default(),
            depth: 0,
            report: Estimate::default(),
        }
    }

    /// Estimate a top-level value, consuming the pass.
    pub fn run(mut self, declared: Option<TypeDesc>, value: Option<&dyn Inspect>) -> Estimate {
        self.report.bytes = self.estimate(declared, value);
        self.report.objects = self.tracker.len();
        self.report
    }

    /// Estimate `value`, whose declared type is `declared`.
    ///
    /// If `declared` is `None` the type of the value is used instead.
    pub fn estimate(&mut self, declared: Option<TypeDesc>, value: Option<&dyn Inspect>) -> usize {
        let desc = match (declared, value) {
            (Some(desc), _) => desc,
            (None, None) => return self.estimator.pointer_width,
            (None, Some(value)) => value.runtime_desc(),
        };

        if self.estimator.max_depth.is_some_and(|max| self.depth >= max) {
            self.report.truncated = true;
            return 0;
        }

        self.depth += 1;
        let size = ensure_sufficient_stack(|| self.dispatch(desc, value));
        self.depth -= 1;
        size
    }

    fn dispatch(&mut self, desc: TypeDesc, value: Option<&dyn Inspect>) -> usize {
        let size = match self.value_type_size(desc, value) {
            Some(size) => size,
            None => {
                let Some(value) = value else {
                    return self.estimator.pointer_width;
                };
                match self.classify(desc, value) {
                    Some(size) => size,
                    None => return 0,
                }
            }
        };

        match (size, value) {
            (0, Some(value)) => self.fallback(value),
            _ => size,
        }
    }

    /// Tiers 2–4, which depend on the declared type only.
    fn value_type_size(&self, desc: TypeDesc, value: Option<&dyn Inspect>) -> Option<usize> {
        let pointer_width = self.estimator.pointer_width;
        match desc.kind() {
            kind @ (TypeKind::Fixed { .. } | TypeKind::Nullable { .. }) => {
                Some(primitive::fixed_size(kind, self.estimator.nullable_flag))
            }
            TypeKind::Str => {
                Some(pointer_width + value.and_then(|value| value.text_len()).unwrap_or(0))
            }
            TypeKind::Array { element } => element().fixed_width().map(|width| {
                let len = value.and_then(|value| value.element_count()).unwrap_or(0);
                primitive::array_size(pointer_width, width, len)
            }),
            _ => None,
        }
    }

    /// Tiers 5–8; `None` means the value must not be counted at all.
    fn classify(&mut self, desc: TypeDesc, value: &dyn Inspect) -> Option<usize> {
        if value.is_enumerable() {
            trace!("Walking {}", desc.name());
            if !self.enter(&desc, value) {
                return None;
            }
            return Some(container::walk(self, desc, value));
        }

        if let Some(len) = value.stream_len() {
            return Some(match len {
                Ok(len) => self.estimator.pointer_width + usize::try_from(len).unwrap_or(usize::MAX),
                Err(err) => {
                    debug!("Cannot get the length of stream {}: {}", desc.name(), err);
                    0
                }
            });
        }

        let encodable = desc.is_closed() && self.estimator.serialization;
        let object = matches!(desc.kind(), TypeKind::Object);
        if !(encodable || object) {
            return Some(0);
        }
        if !self.enter(&desc, value) {
            return None;
        }

        if encodable {
            trace!("Encoding {}", desc.name());
            let size = self.serialized(value);
            if size != 0 {
                return Some(size);
            }
        }

        if object {
            trace!("Recursing into {}", desc.name());
            return Some(structural::recurse(self, value));
        }

        Some(0)
    }

    /// Register a reference value, returning false if it must be skipped
    /// because it was already counted or because the object ceiling was
    /// reached. Value types are always entered.
    fn enter(&mut self, desc: &TypeDesc, value: &dyn Inspect) -> bool {
        if desc.is_value_type() {
            return true;
        }
        if !self.tracker.first_visit(value.identity()) {
            self.report.revisits += 1;
            return false;
        }
        if self
            .estimator
            .max_objects
            .is_some_and(|max| self.tracker.len() > max)
        {
            self.report.truncated = true;
            return false;
        }
        true
    }

    /// The size of `value` according to the serialization oracle. Shared
    /// values already counted cost a back reference, and shared values met
    /// by a successful encoding are counted.
    pub(super) fn serialized(&mut self, value: &dyn Inspect) -> usize {
        let size = serial::encoded_size(value, &mut self.tracker);
        if size != 0 {
            self.report.serialized += 1;
        }
        size
    }

    fn fallback(&mut self, value: &dyn Inspect) -> usize {
        self.report.fallbacks += 1;
        value.native_size().unwrap_or_else(|| {
            trace!("No native size for {}", value.runtime_desc().name());
            0
        })
    }
}
