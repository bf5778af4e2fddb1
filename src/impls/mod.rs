/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Implementations of [`Inspect`](crate::traits::Inspect) for standard
//! types.

mod cell;
mod io;
mod map;
mod opaque;
mod prim;
mod ptr;
mod seq;
mod text;
mod tuple;

pub use map::MapEntry;
pub use opaque::Measured;
