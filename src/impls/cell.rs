/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Interior mutability.
//!
//! Cells, mutexes and read-write locks are transparent like pointers, except
//! that they keep their own identity (the address of the cell). A value that
//! cannot be borrowed while it is being inspected (e.g., a locked mutex) has
//! no elements or fields, and cannot be encoded.

use crate::desc::{TypeDesc, TypeKind};
use crate::error::{EncodeError, InspectError};
use crate::estimate::Encoder;
use crate::traits::{Field, Inspect};
use core::any::type_name;
use core::mem::size_of;
use std::cell::{Cell, RefCell};
use std::io;
use std::sync::{Mutex, RwLock};

macro_rules! impl_guarded {
    ($($ty:ident => $acquire:ident, $err:ident);* $(;)?) => {$(
impl<T: Inspect> Inspect for $ty<T> {
    #[inline(always)]
    fn declared() -> TypeDesc {
        T::declared()
    }
    fn present(&self) -> Option<&dyn Inspect> {
        match self.$acquire() {
            Ok(inner) if inner.present().is_none() => None,
            _ => Some(self),
        }
    }
    fn text_len(&self) -> Option<usize> {
        self.$acquire().ok().and_then(|inner| inner.text_len())
    }
    fn element_count(&self) -> Option<usize> {
        self.$acquire().ok().and_then(|inner| inner.element_count())
    }
    fn is_enumerable(&self) -> bool {
        self.$acquire().ok().is_some_and(|inner| inner.is_enumerable())
    }
    fn for_each_element(&self, visit: &mut dyn FnMut(&dyn Inspect)) -> Result<(), InspectError> {
        let inner = self
            .$acquire()
            .map_err(|_| InspectError::$err(type_name::<Self>()))?;
        inner.for_each_element(visit)
    }
    fn stream_len(&self) -> Option<io::Result<u64>> {
        self.$acquire().ok().and_then(|inner| inner.stream_len())
    }
    fn encode(&self, encoder: &mut Encoder) -> Result<(), EncodeError> {
        let inner = self
            .$acquire()
            .map_err(|_| InspectError::$err(type_name::<Self>()))?;
        inner.encode(encoder)
    }
    fn for_each_field(&self, visit: &mut dyn FnMut(Field<'_>)) -> Result<(), InspectError> {
        let inner = self
            .$acquire()
            .map_err(|_| InspectError::$err(type_name::<Self>()))?;
        inner.for_each_field(visit)
    }
    fn native_size(&self) -> Option<usize> {
        self.$acquire().ok().and_then(|inner| inner.native_size())
    }
}
    )*};
}

impl_guarded! {
    RefCell => try_borrow, Borrowed;
    Mutex => try_lock, Locked;
    RwLock => try_read, Locked;
}

/// Cells are read by copying their content, so their content has no
/// stable address: fixed-width content is sized by its width, anything else
/// is opaque and sized by `size_of::<T>()`.
impl<T: Inspect + Copy> Inspect for Cell<T> {
    fn declared() -> TypeDesc {
        let inner = T::declared();
        match inner.kind() {
            TypeKind::Fixed { .. } | TypeKind::Nullable { .. } => inner,
            _ => TypeDesc::opaque::<Self>(),
        }
    }
    fn present(&self) -> Option<&dyn Inspect> {
        self.get().present().is_some().then_some(self as &dyn Inspect)
    }
    fn encode(&self, encoder: &mut Encoder) -> Result<(), EncodeError> {
        self.get().encode(encoder)
    }
    #[inline(always)]
    fn native_size(&self) -> Option<usize> {
        Some(size_of::<T>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_borrowed() {
        let cell = RefCell::new(vec![1_u8, 2, 3]);
        assert_eq!(cell.element_count(), Some(3));
        let _guard = cell.borrow_mut();
        assert_eq!(cell.element_count(), None);
        assert!(matches!(
            cell.for_each_element(&mut |_| {}),
            Err(InspectError::Borrowed(_))
        ));
        assert!(cell.present().is_some());
    }

    #[test]
    fn test_locked() {
        let mutex = Mutex::new(String::from("abc"));
        assert_eq!(mutex.text_len(), Some(3));
        let _guard = mutex.lock().unwrap();
        assert_eq!(mutex.text_len(), None);
    }

    #[test]
    fn test_absent_content() {
        assert!(RefCell::new(None::<String>).present().is_none());
        assert!(Cell::new(None::<u8>).present().is_none());
        assert!(Cell::new(Some(1_u8)).present().is_some());
    }

    #[test]
    fn test_cell_content_is_never_walked() {
        #[derive(Clone, Copy)]
        struct Point {
            x: u32,
        }
        crate::inspect_object!(Point { x });

        assert!(matches!(
            Cell::<u16>::declared().kind(),
            TypeKind::Fixed { width: 2 }
        ));
        assert!(matches!(Cell::<Point>::declared().kind(), TypeKind::Opaque));
        let mut count = 0;
        Cell::new(Point { x: 1 })
            .for_each_field(&mut |_| count += 1)
            .unwrap();
        assert_eq!(count, 0);
        assert_eq!(Cell::new(Point { x: 1 }).native_size(), Some(4));
    }
}
