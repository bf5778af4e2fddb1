/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

/*!

The serialization oracle.

Closed values are encoded into an in-memory buffer, and the length of the
buffer is used as their size. Leaves are encoded by [`bincode`]; composite
standard types write the same layout [`serde`] would (a `u64` length
before sequences and maps, a one-byte tag before options), so that a
closed value costs what its bincode encoding costs. A shared value is
encoded once: further references to it, and references to values already
counted by the estimation pass, cost a `u32` back reference.

*/

use super::{Identity, IdentityTracker};
use crate::error::EncodeError;
use crate::traits::Inspect;
use crate::utils::ensure_sufficient_stack;
use log::debug;
use std::collections::HashMap;

/// A buffer accumulating the binary encoding of a closed value.
#[derive(Debug, Default)]
pub struct Encoder {
    buf: Vec<u8>,
    /// Shared values encoded so far, with their reference ids.
    seen: HashMap<Identity, u32>,
    /// Values already counted by the enclosing estimation pass.
    counted: IdentityTracker,
}

impl Encoder {
    /// Append the bincode encoding of `value`.
    pub fn put<T: serde::Serialize + ?Sized>(&mut self, value: &T) -> Result<(), EncodeError> {
        bincode::serialize_into(&mut self.buf, value)?;
        Ok(())
    }

    /// Append the length prefix of a sequence or map.
    pub fn put_len(&mut self, len: usize) -> Result<(), EncodeError> {
        self.put(&(len as u64))
    }

    /// Append the encoding of each item, in order.
    pub fn put_all<'a, T: Inspect + 'a>(
        &mut self,
        items: impl IntoIterator<Item = &'a T>,
    ) -> Result<(), EncodeError> {
        items.into_iter().try_for_each(|item| item.encode(self))
    }

    /// Run `encode` on a shared value, unless the value has already been
    /// encoded or counted, in which case only a `u32` back reference is
    /// written. Cycles are thus encoded as back references, too.
    pub fn nested(
        &mut self,
        identity: Identity,
        encode: impl FnOnce(&mut Self) -> Result<(), EncodeError>,
    ) -> Result<(), EncodeError> {
        let known = self
            .seen
            .get(&identity)
            .copied()
            .or_else(|| self.counted.get(identity).map(|token| token as u32));
        if let Some(reference) = known {
            return self.put(&reference);
        }
        let reference = self.seen.len() as u32;
        self.seen.insert(identity, reference);
        ensure_sufficient_stack(|| encode(self))
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn into_inner(self) -> Vec<u8> {
        self.buf
    }
}

/// The length of the encoding of `value`, or zero if it cannot be encoded.
///
/// Shared values registered in `tracker` are encoded as back references; if
/// the encoding succeeds, the shared values it met are registered, too.
pub(crate) fn encoded_size(value: &dyn Inspect, tracker: &mut IdentityTracker) -> usize {
    let mut encoder = Encoder {
        counted: core::mem::take(tracker),
        ..Encoder::default()
    };
    let result = value.encode(&mut encoder);
    let Encoder {
        buf, seen, counted, ..
    } = encoder;
    *tracker = counted;
    match result {
        Ok(()) => {
            seen.into_keys().for_each(|identity| {
                tracker.first_visit(identity);
            });
            buf.len()
        }
        Err(err) => {
            debug!("Cannot encode {}: {}", value.runtime_desc().name(), err);
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn size(value: &dyn Inspect) -> usize {
        encoded_size(value, &mut IdentityTracker::default())
    }

    #[test]
    fn test_leaf_layout() {
        let mut encoder = Encoder::default();
        encoder.put(&7_u32).unwrap();
        assert_eq!(encoder.len(), 4);
        encoder.put("abc").unwrap();
        assert_eq!(encoder.len(), 4 + 8 + 3);
        encoder.put_len(2).unwrap();
        assert_eq!(encoder.into_inner().len(), 4 + 8 + 3 + 8);
    }

    #[test]
    fn test_matches_bincode() {
        let value = vec![Some(1_u16), None, Some(3)];
        assert_eq!(
            size(&value),
            bincode::serialized_size(&value).unwrap() as usize
        );
        let value = (String::from("key"), [1_i64, 2, 3]);
        assert_eq!(
            size(&value),
            bincode::serialized_size(&value).unwrap() as usize
        );
    }

    #[test]
    fn test_cycles_are_back_references() {
        struct Link {
            next: Option<Rc<RefCell<Link>>>,
        }
        crate::inspect_object!(Link { next }, closed);

        let a = Rc::new(RefCell::new(Link { next: None }));
        let b = Rc::new(RefCell::new(Link {
            next: Some(a.clone()),
        }));
        // Two option tags.
        assert_eq!(size(&b), 2);
        a.borrow_mut().next = Some(b.clone());
        // Two option tags, then a reference back to b.
        assert_eq!(size(&b), 2 + 4);
        a.borrow_mut().next = None;
    }

    #[test]
    fn test_shared_values_are_encoded_once() {
        let shared = Rc::new(String::from("once"));
        let pair = (shared.clone(), shared);
        assert_eq!(size(&pair), (8 + 4) + 4);
    }

    #[test]
    fn test_counted_values_are_references() {
        let shared = Rc::new(String::from("counted"));
        let mut tracker = IdentityTracker::default();
        assert_eq!(encoded_size(&vec![shared.clone()], &mut tracker), 8 + (8 + 7));
        assert_eq!(tracker.len(), 1);
        // The tracker now knows the string.
        assert_eq!(encoded_size(&vec![shared], &mut tracker), 8 + 4);
    }

    #[test]
    fn test_failures_register_nothing() {
        let values: Vec<Rc<(String, std::time::Duration)>> =
            vec![Rc::new((String::new(), std::time::Duration::ZERO))];
        let mut tracker = IdentityTracker::default();
        assert_eq!(encoded_size(&values, &mut tracker), 0);
        assert_eq!(tracker.len(), 0);
    }
}
