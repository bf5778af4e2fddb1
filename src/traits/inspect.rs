/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

The introspection trait.

[`Inspect`] gathers, in a single object-safe trait, the three facilities
the estimator needs from the values it looks at: a description of their
declared type, a way to walk their elements or fields, and an optional
binary encoding. Every capability has a default saying "not supported",
so implementations only override what makes sense for their type.

*/

use crate::desc::TypeDesc;
use crate::error::{EncodeError, InspectError};
use crate::estimate::{Encoder, Identity};
use std::io;

/// Conversion to a trait object, implemented for every sized [`Inspect`].
pub trait AsInspect {
    fn as_inspect(&self) -> &dyn Inspect;
    /// The descriptor of the runtime type of the value.
    fn runtime_desc(&self) -> TypeDesc;
}

impl<T: Inspect> AsInspect for T {
    #[inline(always)]
    fn as_inspect(&self) -> &dyn Inspect {
        self
    }

    #[inline(always)]
    fn runtime_desc(&self) -> TypeDesc {
        T::declared()
    }
}

/// A value whose in-memory footprint can be estimated.
///
/// Implementations for user types are usually generated by
/// [`inspect_object!`](crate::inspect_object),
/// [`inspect_fixed!`](crate::inspect_fixed), or
/// [`inspect_opaque!`](crate::inspect_opaque).
pub trait Inspect: AsInspect {
    /// The descriptor of `Self` when used as a declared type.
    fn declared() -> TypeDesc
    where
        Self: Sized;

    /// The value held by this slot, or `None` if the slot is absent.
    ///
    /// Transparent wrappers (boxes, shared pointers, options) return the
    /// value they point to.
    fn present(&self) -> Option<&dyn Inspect> {
        Some(self.as_inspect())
    }

    /// The identity of this value, used to detect shared and cyclic
    /// references.
    fn identity(&self) -> Identity {
        Identity::of(self)
    }

    /// The length in bytes of the UTF-8 representation of a string.
    fn text_len(&self) -> Option<usize> {
        None
    }

    /// The number of elements of an array.
    fn element_count(&self) -> Option<usize> {
        None
    }

    /// Whether [`for_each_element`](Inspect::for_each_element) is supported.
    fn is_enumerable(&self) -> bool {
        false
    }

    /// Call `visit` on each element.
    fn for_each_element(&self, visit: &mut dyn FnMut(&dyn Inspect)) -> Result<(), InspectError> {
        let _ = visit;
        Err(InspectError::NotEnumerable(self.runtime_desc().name()))
    }

    /// The current length of a byte stream, or `None` if the value is not a
    /// stream.
    fn stream_len(&self) -> Option<io::Result<u64>> {
        None
    }

    /// Append the binary encoding of the value to `encoder`.
    fn encode(&self, encoder: &mut Encoder) -> Result<(), EncodeError> {
        let _ = encoder;
        Err(EncodeError::Unsupported(self.runtime_desc().name()))
    }

    /// Call `visit` on each instance field, fields of embedded bases first.
    fn for_each_field(&self, visit: &mut dyn FnMut(Field<'_>)) -> Result<(), InspectError> {
        let _ = visit;
        Ok(())
    }

    /// The raw native size of the value, if the type can report one.
    fn native_size(&self) -> Option<usize> {
        None
    }
}

/// A declared instance field.
#[derive(Clone, Copy)]
pub struct Field<'a> {
    name: &'static str,
    declared: Option<TypeDesc>,
    value: Option<&'a dyn Inspect>,
}

impl<'a> Field<'a> {
    /// A field whose declared type is `T`.
    pub fn new<T: Inspect>(name: &'static str, value: &'a T) -> Self {
        Self {
            name,
            declared: T::declared().known(),
            value: value.present(),
        }
    }

    /// A field whose declared type is unknown.
    pub fn erased(name: &'static str, value: Option<&'a dyn Inspect>) -> Self {
        Self {
            name,
            declared: None,
            value: value.and_then(|value| value.present()),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn declared(&self) -> Option<TypeDesc> {
        self.declared
    }

    pub fn value(&self) -> Option<&'a dyn Inspect> {
        self.value
    }
}

impl core::fmt::Debug for Field<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("declared", &self.declared.map(|desc| desc.name()))
            .field("present", &self.value.is_some())
            .finish()
    }
}
