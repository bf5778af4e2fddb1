/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Fixed-width value types and options.

use crate::desc::{TypeDesc, TypeKind};
use crate::error::{EncodeError, InspectError};
use crate::estimate::{Encoder, Identity};
use crate::traits::{Field, Inspect};
use std::io;

macro_rules! impl_fixed {
    ($($ty:ty),*) => {$(
impl Inspect for $ty {
    #[inline(always)]
    fn declared() -> TypeDesc {
        TypeDesc::fixed::<Self>()
    }
    fn encode(&self, encoder: &mut Encoder) -> Result<(), EncodeError> {
        encoder.put(self)
    }
    #[inline(always)]
    fn native_size(&self) -> Option<usize> {
        Some(core::mem::size_of::<Self>())
    }
}
    )*};
}

impl_fixed! {
    u8, u16, u32, u64, u128, usize,
    i8, i16, i32, i64, i128, isize,
    f32, f64, bool, char, ()
}

/// Options over fixed-width types are nullable value types; other options
/// are references that may be absent.
impl<T: Inspect> Inspect for Option<T> {
    fn declared() -> TypeDesc {
        let inner = T::declared();
        match inner.kind() {
            TypeKind::Fixed { .. } => TypeDesc::nullable::<Self>(inner),
            _ => inner,
        }
    }

    fn present(&self) -> Option<&dyn Inspect> {
        self.as_ref().and_then(|value| value.present())
    }

    fn identity(&self) -> Identity {
        match self {
            Some(value) => value.identity(),
            None => Identity::of(self),
        }
    }

    fn text_len(&self) -> Option<usize> {
        self.as_ref().and_then(|value| value.text_len())
    }

    fn element_count(&self) -> Option<usize> {
        self.as_ref().and_then(|value| value.element_count())
    }

    fn is_enumerable(&self) -> bool {
        self.as_ref().is_some_and(|value| value.is_enumerable())
    }

    fn for_each_element(&self, visit: &mut dyn FnMut(&dyn Inspect)) -> Result<(), InspectError> {
        match self {
            Some(value) => value.for_each_element(visit),
            None => Err(InspectError::NotEnumerable(core::any::type_name::<Self>())),
        }
    }

    fn stream_len(&self) -> Option<io::Result<u64>> {
        self.as_ref().and_then(|value| value.stream_len())
    }

    fn encode(&self, encoder: &mut Encoder) -> Result<(), EncodeError> {
        match self {
            Some(value) => {
                encoder.put(&1_u8)?;
                value.encode(encoder)
            }
            None => encoder.put(&0_u8),
        }
    }

    fn for_each_field(&self, visit: &mut dyn FnMut(Field<'_>)) -> Result<(), InspectError> {
        match self {
            Some(value) => value.for_each_field(visit),
            None => Ok(()),
        }
    }

    fn native_size(&self) -> Option<usize> {
        self.as_ref().and_then(|value| value.native_size())
    }
}
