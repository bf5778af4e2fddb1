/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Recursive estimation of the in-memory footprint of object graphs.
//!
//! Values implement [`Inspect`](traits::Inspect), which describes their
//! declared type and exposes their elements, fields and binary encoding.
//! A [`SizeEstimator`](estimate::SizeEstimator) walks a value, counting
//! shared values once and cutting cycles, and sizes every reached value
//! using the cheapest applicable rule: fixed widths for value types,
//! lengths for strings, arrays and streams, the length of an encoding for
//! closed types, and structural recursion for everything else.
//!
//! ```rust
//! use objsize::prelude::*;
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! struct Node {
//!     value: u64,
//!     next: Option<Rc<RefCell<Node>>>,
//! }
//! inspect_object!(Node { value, next });
//!
//! let a = Rc::new(RefCell::new(Node { value: 1, next: None }));
//! let b = Rc::new(RefCell::new(Node { value: 2, next: Some(a.clone()) }));
//! a.borrow_mut().next = Some(b.clone());
//!
//! // Each node is counted once, even if the list is cyclic.
//! assert_eq!(estimate_size(&a), 2 * ((4 + 8) + 4));
//! # a.borrow_mut().next = None;
//! ```
#![deny(unconditional_recursion)]

pub mod desc;
pub mod error;
pub mod estimate;
pub mod impls;
mod macros;
pub mod traits;
pub mod utils;

#[cfg(feature = "fuzz")]
pub mod fuzz;

pub use estimate::estimate_size;
pub use utils::init_env_logger;

pub mod prelude {
    pub use crate::desc::*;
    pub use crate::error::*;
    pub use crate::estimate::*;
    pub use crate::impls::{MapEntry, Measured};
    pub use crate::traits::*;
    pub use crate::{inspect_fixed, inspect_object, inspect_opaque};
}
