/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Macros implementing [`Inspect`](crate::traits::Inspect) for user types.

/// Implements [`Inspect`](crate::traits::Inspect) for a struct, which will be
/// sized by structural recursion on the listed fields.
///
/// - `inspect_object!(Type { f1, f2 })` lists the instance fields of `Type`;
///   every field type must implement [`Inspect`](crate::traits::Inspect).
/// - `inspect_object!(Type: base { f1, f2 })` embeds the field `base`, whose
///   fields are visited before those of `Type`, as if they were inherited.
/// - A trailing `, closed` marks the type as closed: its instances will be
///   sized by encoding the listed fields, in order.
///
/// Fields that are not listed are not counted.
///
/// # Examples
///
/// ```rust
/// use objsize::prelude::*;
/// use std::rc::Rc;
///
/// struct Animal {
///     legs: u32,
/// }
/// inspect_object!(Animal { legs });
///
/// struct Dog {
///     animal: Animal,
///     name: String,
///     friend: Option<Rc<Dog>>,
/// }
/// inspect_object!(Dog: animal { name, friend });
///
/// let dog = Dog {
///     animal: Animal { legs: 4 },
///     name: "Fido".into(),
///     friend: None,
/// };
/// // legs, name and friend, each with its field overhead.
/// assert_eq!(estimate_size(&dog), (4 + 4) + (4 + 8 + 4) + (4 + 8));
/// ```
#[macro_export]
macro_rules! inspect_object {
    (@impl $ty:ty, [$($base:ident)?], [$($field:ident),*], $($closed:ident)?) => {
        impl $crate::traits::Inspect for $ty {
            fn declared() -> $crate::desc::TypeDesc {
                $crate::desc::TypeDesc::object::<Self>()
                    .closed($crate::inspect_object!(@is_closed $($closed)?))
            }

            #[allow(unused_variables)]
            fn for_each_field(
                &self,
                visit: &mut dyn FnMut($crate::traits::Field<'_>),
            ) -> ::core::result::Result<(), $crate::error::InspectError> {
                $($crate::traits::Inspect::for_each_field(&self.$base, visit)?;)?
                $(visit($crate::traits::Field::new(stringify!($field), &self.$field));)*
                Ok(())
            }

            $crate::inspect_object!(@encode [$($base)?], [$($field),*], $($closed)?);
        }
    };
    (@is_closed closed) => { true };
    (@is_closed) => { false };
    (@encode [$($base:ident)?], [$($field:ident),*], closed) => {
        fn encode(
            &self,
            encoder: &mut $crate::estimate::Encoder,
        ) -> ::core::result::Result<(), $crate::error::EncodeError> {
            $($crate::traits::Inspect::encode(&self.$base, encoder)?;)?
            $($crate::traits::Inspect::encode(&self.$field, encoder)?;)*
            Ok(())
        }
    };
    (@encode [$($base:ident)?], [$($field:ident),*], ) => {};
    ($ty:ty $(: $base:ident)? { $($field:ident),* $(,)? } $(, $closed:ident)?) => {
        $crate::inspect_object!(@impl $ty, [$($base)?], [$($field),*], $($closed)?);
    };
}

/// Implements [`Inspect`](crate::traits::Inspect) for a fixed-width value
/// type, that is, a `Copy` type without indirections whose size is
/// `size_of::<Self>()`.
///
/// With a trailing `, closed` the type is also closed, and it is encoded
/// using its [`serde::Serialize`] implementation.
///
/// # Examples
///
/// ```rust
/// use objsize::prelude::*;
///
/// #[derive(Clone, Copy)]
/// struct Point {
///     x: f64,
///     y: f64,
/// }
/// inspect_fixed!(Point);
///
/// assert_eq!(estimate_size(&Point { x: 0.0, y: 1.0 }), 16);
/// assert_eq!(estimate_size(&Some(Point { x: 0.0, y: 1.0 })), 16 + 4);
/// ```
#[macro_export]
macro_rules! inspect_fixed {
    ($ty:ty, closed) => {
        impl $crate::traits::Inspect for $ty {
            #[inline(always)]
            fn declared() -> $crate::desc::TypeDesc {
                $crate::desc::TypeDesc::fixed::<Self>()
            }

            fn encode(
                &self,
                encoder: &mut $crate::estimate::Encoder,
            ) -> ::core::result::Result<(), $crate::error::EncodeError> {
                encoder.put(self)
            }

            #[inline(always)]
            fn native_size(&self) -> Option<usize> {
                Some(::core::mem::size_of::<Self>())
            }
        }
    };
    ($ty:ty) => {
        impl $crate::traits::Inspect for $ty {
            #[inline(always)]
            fn declared() -> $crate::desc::TypeDesc {
                $crate::desc::TypeDesc::fixed::<Self>().closed(false)
            }

            #[inline(always)]
            fn native_size(&self) -> Option<usize> {
                Some(::core::mem::size_of::<Self>())
            }
        }
    };
}

/// Implements [`Inspect`](crate::traits::Inspect) for opaque types, which
/// are sized by `size_of::<Self>()` only.
#[macro_export]
macro_rules! inspect_opaque {
    ($($ty:ty),+ $(,)?) => {$(
        impl $crate::traits::Inspect for $ty {
            #[inline(always)]
            fn declared() -> $crate::desc::TypeDesc {
                $crate::desc::TypeDesc::opaque::<Self>()
            }

            #[inline(always)]
            fn native_size(&self) -> Option<usize> {
                Some(::core::mem::size_of::<Self>())
            }
        }
    )+};
}
