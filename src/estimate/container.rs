/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::dispatch::Pass;
use crate::desc::{TypeDesc, TypeKind};
use crate::traits::Inspect;
use log::debug;

/// The element type of a container whose declared type is `desc`.
///
/// In order: the element type of an array; the element type of a type that
/// is itself a sequence; the element type of the sequence capability the
/// type implements; the container type itself.
pub fn element_type(desc: &TypeDesc) -> TypeDesc {
    match desc.kind() {
        TypeKind::Array { element } | TypeKind::Sequence { element } => element(),
        _ => desc.sequence_of().map_or(*desc, |element| element()),
    }
}

/// Size an enumerable value.
///
/// Containers of closed elements are first sized by the serialization
/// oracle; if that fails, the container costs one pointer-width unit plus
/// the estimate of each of its elements.
pub(super) fn walk(pass: &mut Pass<'_>, desc: TypeDesc, value: &dyn Inspect) -> usize {
    let element = element_type(&desc);

    if element.is_closed() && pass.estimator.serialization {
        let size = pass.serialized(value);
        if size != 0 {
            return size;
        }
    }

    let declared = element.known();
    let mut size = pass.estimator.pointer_width;
    if let Err(err) = value.for_each_element(&mut |item: &dyn Inspect| {
        size += pass.estimate(declared, item.present());
    }) {
        debug!("Cannot enumerate {}: {}", desc.name(), err);
    }
    size
}
