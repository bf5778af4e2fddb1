/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Size estimation.

The entry point is [`estimate_size`], which uses a default
[`SizeEstimator`]. An estimator can be configured with its setters and
reused any number of times, also from multiple threads: every call creates
its own identity tracker, which is dropped when the call returns.

```rust
use objsize::prelude::*;

assert_eq!(estimate_size(&1_i32), 4);
assert_eq!(estimate_size(&Some(1_i32)), 8);
assert_eq!(estimate_size(&String::from("0123456789")), 8 + 10);

let estimator = SizeEstimator::default().pointer_width(4).field_overhead(0);
assert_eq!(estimator.estimate(&vec![0_u16; 10]), 4 + 20);
```

*/

mod container;
mod dispatch;
mod identity;
mod primitive;
mod report;
mod serial;
mod structural;

pub use container::element_type;
pub use identity::Identity;
pub use report::Estimate;
pub use serial::Encoder;

use crate::desc::TypeDesc;
use crate::traits::Inspect;
use derivative::Derivative;
use derive_setters::*;
use dispatch::Pass;
use identity::IdentityTracker;
use log::debug;

/// A configurable size estimator.
#[derive(Setters, Debug, Clone, Derivative)]
#[derivative(Default)]
pub struct SizeEstimator {
    /// The size of a reference. The default is the width of a pointer on
    /// the target platform.
    #[derivative(Default(value = "core::mem::size_of::<usize>()"))]
    pointer_width: usize,

    /// The overhead added to the size of each field of an object. The
    /// default is 4.
    #[derivative(Default(value = "4"))]
    field_overhead: usize,

    /// The size of the presence flag of nullable value types. The default
    /// is 4.
    #[derivative(Default(value = "4"))]
    nullable_flag: usize,

    /// Whether closed values are sized by encoding them. The default is
    /// true; if false, closed values are sized like any other value.
    #[derivative(Default(value = "true"))]
    serialization: bool,

    /// The maximum nesting depth to explore. Deeper values are not counted
    /// and the resulting estimate is [truncated](Estimate::truncated).
    #[setters(strip_option)]
    max_depth: Option<usize>,

    /// The maximum number of distinct objects to count. Further objects are
    /// not counted and the resulting estimate is
    /// [truncated](Estimate::truncated).
    #[setters(strip_option)]
    max_objects: Option<usize>,
}

impl SizeEstimator {
    /// Estimate the size of `value`.
    pub fn estimate<T: Inspect>(&self, value: &T) -> usize {
        self.report(value).bytes
    }

    /// Estimate the size of a type-erased `value`.
    pub fn estimate_dyn(&self, value: &dyn Inspect) -> usize {
        self.report_dyn(value).bytes
    }

    /// Estimate the size of `value`, returning also statistics about the
    /// pass.
    pub fn report<T: Inspect>(&self, value: &T) -> Estimate {
        self.run(T::declared().known(), value.present())
    }

    /// Like [`report`](SizeEstimator::report), but for a type-erased
    /// `value`.
    pub fn report_dyn(&self, value: &dyn Inspect) -> Estimate {
        self.run(value.runtime_desc().known(), value.present())
    }

    fn run(&self, declared: Option<TypeDesc>, value: Option<&dyn Inspect>) -> Estimate {
        let estimate = Pass::new(self).run(declared, value);
        debug!(
            "Estimated {}: {}",
            declared.map_or("<erased>", |desc| desc.name()),
            estimate
        );
        estimate
    }
}

/// Estimate the size of `value` using a default [`SizeEstimator`].
pub fn estimate_size<T: Inspect>(value: &T) -> usize {
    SizeEstimator::default().estimate(value)
}
