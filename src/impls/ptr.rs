/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Pointers.
//!
//! Boxes, shared pointers and references are transparent: their declared
//! type is that of the pointee, and every capability is forwarded to it. In
//! particular, the [identity](Inspect::identity) of a pointer is that of its
//! pointee, so values shared through several pointers are counted once.
//!
//! Pointers to `dyn Inspect` have an [erased](crate::desc::TypeKind::Erased)
//! declared type: they are sized after the runtime type of the pointee.

use crate::desc::TypeDesc;
use crate::error::{EncodeError, InspectError};
use crate::estimate::{Encoder, Identity};
use crate::traits::{Field, Inspect};
use std::io;
use std::rc::Rc;
use std::sync::Arc;

macro_rules! forward_inspect {
    () => {
        #[inline(always)]
        fn present(&self) -> Option<&dyn Inspect> {
            (**self).present()
        }
        #[inline(always)]
        fn identity(&self) -> Identity {
            (**self).identity()
        }
        fn text_len(&self) -> Option<usize> {
            (**self).text_len()
        }
        fn element_count(&self) -> Option<usize> {
            (**self).element_count()
        }
        fn is_enumerable(&self) -> bool {
            (**self).is_enumerable()
        }
        fn for_each_element(
            &self,
            visit: &mut dyn FnMut(&dyn Inspect),
        ) -> Result<(), InspectError> {
            (**self).for_each_element(visit)
        }
        fn stream_len(&self) -> Option<io::Result<u64>> {
            (**self).stream_len()
        }
        fn encode(&self, encoder: &mut Encoder) -> Result<(), EncodeError> {
            let inner = &**self;
            encoder.nested(inner.identity(), |encoder| inner.encode(encoder))
        }
        fn for_each_field(&self, visit: &mut dyn FnMut(Field<'_>)) -> Result<(), InspectError> {
            (**self).for_each_field(visit)
        }
        fn native_size(&self) -> Option<usize> {
            (**self).native_size()
        }
    };
}

macro_rules! impl_pointer {
    ($($ty:ty),*) => {$(
impl<T: Inspect> Inspect for $ty {
    #[inline(always)]
    fn declared() -> TypeDesc {
        T::declared()
    }
    forward_inspect!();
}
    )*};
}

impl_pointer! {
    Box<T>, Rc<T>, Arc<T>, &T
}

macro_rules! impl_erased {
    ($($ty:ty),*) => {$(
impl Inspect for $ty {
    #[inline(always)]
    fn declared() -> TypeDesc {
        TypeDesc::erased()
    }
    forward_inspect!();
}
    )*};
}

impl_erased! {
    Box<dyn Inspect>, Rc<dyn Inspect>, Arc<dyn Inspect>, &dyn Inspect
}
