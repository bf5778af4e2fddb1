/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use crate::desc::TypeKind;

/// The size of a fixed-width or nullable value type.
///
/// Nullable types pay `nullable_flag` bytes for their presence flag, whether
/// or not they hold a value: an absent `Option<u64>` costs 4 + 8, not a
/// pointer-width unit.
pub(crate) fn fixed_size(kind: TypeKind, nullable_flag: usize) -> usize {
    match kind {
        TypeKind::Fixed { width } => width,
        TypeKind::Nullable { width } => nullable_flag + width,
        _ => 0,
    }
}

/// The size of an array of `len` fixed-width elements.
pub(crate) fn array_size(pointer_width: usize, width: usize, len: usize) -> usize {
    pointer_width + len * width
}
