/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Arrays and collections.
//!
//! Contiguous sequences ([`Vec`], boxed slices, slices, arrays) are arrays;
//! other collections are objects implementing a sequence capability.

use crate::desc::TypeDesc;
use crate::error::{EncodeError, InspectError};
use crate::estimate::Encoder;
use crate::traits::Inspect;
use std::collections::{BTreeSet, BinaryHeap, HashSet, LinkedList, VecDeque};

macro_rules! impl_slice_like {
    ($($ty:ty),*) => {$(
impl<T: Inspect> Inspect for $ty {
    #[inline(always)]
    fn declared() -> TypeDesc {
        TypeDesc::array::<Self, T>()
    }
    #[inline(always)]
    fn element_count(&self) -> Option<usize> {
        Some(self.len())
    }
    #[inline(always)]
    fn is_enumerable(&self) -> bool {
        true
    }
    fn for_each_element(&self, visit: &mut dyn FnMut(&dyn Inspect)) -> Result<(), InspectError> {
        self.iter().for_each(|item| visit(item));
        Ok(())
    }
    fn encode(&self, encoder: &mut Encoder) -> Result<(), EncodeError> {
        encoder.put_len(self.len())?;
        encoder.put_all(self.iter())
    }
}
    )*};
}

impl_slice_like! {
    Vec<T>, Box<[T]>, &[T]
}

/// Arrays are encoded as tuples, without a length.
impl<T: Inspect, const N: usize> Inspect for [T; N] {
    #[inline(always)]
    fn declared() -> TypeDesc {
        TypeDesc::array::<Self, T>()
    }
    #[inline(always)]
    fn element_count(&self) -> Option<usize> {
        Some(N)
    }
    #[inline(always)]
    fn is_enumerable(&self) -> bool {
        true
    }
    fn for_each_element(&self, visit: &mut dyn FnMut(&dyn Inspect)) -> Result<(), InspectError> {
        self.iter().for_each(|item| visit(item));
        Ok(())
    }
    fn encode(&self, encoder: &mut Encoder) -> Result<(), EncodeError> {
        encoder.put_all(self.iter())
    }
}

macro_rules! impl_collection {
    ($($ty:ident<T $(, $extra:ident)*>),*) => {$(
impl<T: Inspect $(, $extra)*> Inspect for $ty<T $(, $extra)*> {
    #[inline(always)]
    fn declared() -> TypeDesc {
        TypeDesc::collection::<Self, T>()
    }
    #[inline(always)]
    fn is_enumerable(&self) -> bool {
        true
    }
    fn for_each_element(&self, visit: &mut dyn FnMut(&dyn Inspect)) -> Result<(), InspectError> {
        self.iter().for_each(|item| visit(item));
        Ok(())
    }
    fn encode(&self, encoder: &mut Encoder) -> Result<(), EncodeError> {
        encoder.put_len(self.len())?;
        encoder.put_all(self.iter())
    }
}
    )*};
}

impl_collection! {
    VecDeque<T>, LinkedList<T>, BinaryHeap<T>, BTreeSet<T>, HashSet<T, S>
}
