/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Maps.
//!
//! Maps are objects implementing a sequence capability over their
//! key-value pairs, which are exposed as [`MapEntry`] records.

use crate::desc::TypeDesc;
use crate::error::{EncodeError, InspectError};
use crate::estimate::Encoder;
use crate::traits::{Field, Inspect};
use std::collections::{BTreeMap, HashMap};

/// A key-value pair of a map.
///
/// Entries are records: they have no identity of their own, and their size
/// is the size of their two fields.
#[derive(Debug, Clone, Copy)]
pub struct MapEntry<'a, K, V> {
    pub key: &'a K,
    pub value: &'a V,
}

fn entry_desc<K: Inspect, V: Inspect>() -> TypeDesc {
    TypeDesc::record::<(K, V)>().closed(K::declared().is_closed() && V::declared().is_closed())
}

impl<K: Inspect, V: Inspect> Inspect for MapEntry<'_, K, V> {
    fn declared() -> TypeDesc {
        entry_desc::<K, V>()
    }

    fn encode(&self, encoder: &mut Encoder) -> Result<(), EncodeError> {
        self.key.encode(encoder)?;
        self.value.encode(encoder)
    }

    fn for_each_field(&self, visit: &mut dyn FnMut(Field<'_>)) -> Result<(), InspectError> {
        visit(Field::new("key", self.key));
        visit(Field::new("value", self.value));
        Ok(())
    }
}

macro_rules! impl_map {
    ($($ty:ident<K, V $(, $extra:ident)*>),*) => {$(
impl<K: Inspect, V: Inspect $(, $extra)*> Inspect for $ty<K, V $(, $extra)*> {
    fn declared() -> TypeDesc {
        TypeDesc::object::<Self>()
            .with_sequence_of(entry_desc::<K, V>)
            .closed(entry_desc::<K, V>().is_closed())
    }
    #[inline(always)]
    fn is_enumerable(&self) -> bool {
        true
    }
    fn for_each_element(&self, visit: &mut dyn FnMut(&dyn Inspect)) -> Result<(), InspectError> {
        for (key, value) in self {
            visit(&MapEntry { key, value });
        }
        Ok(())
    }
    fn encode(&self, encoder: &mut Encoder) -> Result<(), EncodeError> {
        encoder.put_len(self.len())?;
        self.iter().try_for_each(|(key, value)| {
            key.encode(encoder)?;
            value.encode(encoder)
        })
    }
}
    )*};
}

impl_map! {
    HashMap<K, V, S>, BTreeMap<K, V>
}
