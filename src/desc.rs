/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

Type descriptors.

A [`TypeDesc`] is what the estimator knows about a *declared* type: its
[kind](TypeKind), whether it is [closed](TypeFlags::CLOSED) (safe to
encode as a whole), whether it is a [value type](TypeFlags::VALUE), and
possibly the element type of a sequence capability it implements.

Element types are stored as [`DescFn`] function pointers rather than
descriptors, so that describing a recursive type never recurses.

*/

use crate::traits::Inspect;
use bitflags::bitflags;
use core::any::type_name;
use core::mem::size_of;

/// A lazily evaluated type descriptor.
pub type DescFn = fn() -> TypeDesc;

bitflags! {
    /// Flags of a [`TypeDesc`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TypeFlags: u8 {
        /// Instances can be fully encoded into a flat byte sequence.
        const CLOSED = 1 << 0;
        /// Instances have no shared identity and are never tracked.
        const VALUE = 1 << 1;
    }
}

/// The shape of a declared type.
#[derive(Debug, Clone, Copy)]
pub enum TypeKind {
    /// A value type whose size is fully determined by the type.
    Fixed {
        /// The declared width in bytes.
        width: usize,
    },
    /// An optional fixed-width value type carrying a presence flag.
    Nullable {
        /// The declared width in bytes of the underlying type.
        width: usize,
    },
    /// A string type.
    Str,
    /// An array; arrays of fixed-width elements are sized without iteration.
    Array {
        /// The element type.
        element: DescFn,
    },
    /// A type that is itself a sequence abstraction over `element`.
    Sequence {
        /// The element type.
        element: DescFn,
    },
    /// A class-like type, sized by structural recursion on its fields.
    Object,
    /// A type that can only answer the native size query.
    Opaque,
    /// The declared type is not known (e.g., a trait object).
    Erased,
}

/// The description of a declared type.
#[derive(Debug, Clone, Copy)]
pub struct TypeDesc {
    name: &'static str,
    kind: TypeKind,
    flags: TypeFlags,
    sequence_of: Option<DescFn>,
}

impl TypeDesc {
    const fn new(name: &'static str, kind: TypeKind, flags: TypeFlags) -> Self {
        Self {
            name,
            kind,
            flags,
            sequence_of: None,
        }
    }

    /// A closed fixed-width value type as wide as `T`.
    pub fn fixed<T>() -> Self {
        Self::new(
            type_name::<T>(),
            TypeKind::Fixed {
                width: size_of::<T>(),
            },
            TypeFlags::CLOSED | TypeFlags::VALUE,
        )
    }

    /// A nullable wrapper named after `T` over the fixed-width type `inner`.
    ///
    /// If `inner` is not fixed-width the result has width zero.
    pub fn nullable<T: ?Sized>(inner: TypeDesc) -> Self {
        Self::new(
            type_name::<T>(),
            TypeKind::Nullable {
                width: inner.fixed_width().unwrap_or(0),
            },
            inner.flags | TypeFlags::VALUE,
        )
    }

    /// A closed string type.
    pub fn string<T: ?Sized>() -> Self {
        Self::new(type_name::<T>(), TypeKind::Str, TypeFlags::CLOSED)
    }

    /// An array of `E`, closed if `E` is.
    pub fn array<T: ?Sized, E: Inspect>() -> Self {
        Self::new(
            type_name::<T>(),
            TypeKind::Array {
                element: E::declared,
            },
            TypeFlags::empty(),
        )
        .closed(E::declared().is_closed())
    }

    /// A sequence abstraction over `E`, closed if `E` is.
    pub fn sequence<T: ?Sized, E: Inspect>() -> Self {
        Self::new(
            type_name::<T>(),
            TypeKind::Sequence {
                element: E::declared,
            },
            TypeFlags::empty(),
        )
        .closed(E::declared().is_closed())
    }

    /// An object implementing a sequence capability over `E`, closed if `E`
    /// is.
    pub fn collection<T: ?Sized, E: Inspect>() -> Self {
        Self::object::<T>()
            .with_sequence_of(E::declared)
            .closed(E::declared().is_closed())
    }

    /// A class-like object type.
    pub fn object<T: ?Sized>() -> Self {
        Self::new(type_name::<T>(), TypeKind::Object, TypeFlags::empty())
    }

    /// An object type whose instances are values (no identity).
    pub fn record<T: ?Sized>() -> Self {
        Self::new(type_name::<T>(), TypeKind::Object, TypeFlags::VALUE)
    }

    /// An opaque type.
    pub fn opaque<T: ?Sized>() -> Self {
        Self::new(type_name::<T>(), TypeKind::Opaque, TypeFlags::empty())
    }

    /// The descriptor of an unknown declared type.
    pub const fn erased() -> Self {
        Self::new("<erased>", TypeKind::Erased, TypeFlags::empty())
    }

    /// Set or clear the [closed](TypeFlags::CLOSED) flag.
    pub fn closed(mut self, closed: bool) -> Self {
        self.flags.set(TypeFlags::CLOSED, closed);
        self
    }

    /// Record that the type implements a sequence capability over the
    /// element type produced by `element`.
    pub fn with_sequence_of(mut self, element: DescFn) -> Self {
        self.sequence_of = Some(element);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    pub fn flags(&self) -> TypeFlags {
        self.flags
    }

    pub fn sequence_of(&self) -> Option<DescFn> {
        self.sequence_of
    }

    pub fn is_closed(&self) -> bool {
        self.flags.contains(TypeFlags::CLOSED)
    }

    pub fn is_value_type(&self) -> bool {
        self.flags.contains(TypeFlags::VALUE)
    }

    pub fn is_erased(&self) -> bool {
        matches!(self.kind, TypeKind::Erased)
    }

    /// The width of a [fixed-width](TypeKind::Fixed) type.
    pub fn fixed_width(&self) -> Option<usize> {
        match self.kind {
            TypeKind::Fixed { width } => Some(width),
            _ => None,
        }
    }

    /// `None` if this descriptor is [erased](TypeKind::Erased).
    pub fn known(self) -> Option<Self> {
        (!self.is_erased()).then_some(self)
    }
}
