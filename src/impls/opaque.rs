/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Opaque types, and a bridge to [`mem_dbg`].

use crate::desc::TypeDesc;
use crate::error::EncodeError;
use crate::estimate::Encoder;
use crate::traits::Inspect;
use core::marker::PhantomData;
use core::mem::size_of;
use mem_dbg::{MemSize, SizeFlags};
use std::time::{Duration, Instant, SystemTime};
use std::{rc, sync};

crate::inspect_opaque!(Duration, Instant, SystemTime);

// Weak pointers do not keep their pointee alive, so they only count for
// themselves.
impl<T: ?Sized> Inspect for rc::Weak<T> {
    fn declared() -> TypeDesc {
        TypeDesc::opaque::<Self>()
    }
    fn native_size(&self) -> Option<usize> {
        Some(size_of::<Self>())
    }
}

impl<T: ?Sized> Inspect for sync::Weak<T> {
    fn declared() -> TypeDesc {
        TypeDesc::opaque::<Self>()
    }
    fn native_size(&self) -> Option<usize> {
        Some(size_of::<Self>())
    }
}

impl<T: ?Sized> Inspect for PhantomData<T> {
    fn declared() -> TypeDesc {
        TypeDesc::fixed::<Self>()
    }
    fn encode(&self, _encoder: &mut Encoder) -> Result<(), EncodeError> {
        Ok(())
    }
}

/// A value sized by [`MemSize`].
///
/// Wrapping a field of a type that implements [`MemSize`] but not
/// [`Inspect`] makes it opaque to the estimator, which then uses
/// [`MemSize::mem_size`] as its native size.
///
/// ```rust
/// use objsize::prelude::*;
///
/// let measured = Measured(vec![0_u64; 100]);
/// assert!(estimate_size(&measured) >= 800);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Measured<T>(pub T);

impl<T: MemSize> Inspect for Measured<T> {
    fn declared() -> TypeDesc {
        TypeDesc::opaque::<T>()
    }
    fn native_size(&self) -> Option<usize> {
        Some(self.0.mem_size(SizeFlags::default()))
    }
}
