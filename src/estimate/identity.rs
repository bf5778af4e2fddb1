/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use core::any::type_name;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// The identity of a value: its address together with the name of its type.
///
/// The type name disambiguates a value from its first field, which lives at
/// the same address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Identity {
    addr: usize,
    ty: &'static str,
}

impl Identity {
    pub fn of<T: ?Sized>(value: &T) -> Self {
        Self {
            addr: (value as *const T).cast::<()>() as usize,
            ty: type_name::<T>(),
        }
    }

    pub fn addr(&self) -> usize {
        self.addr
    }

    pub fn type_name(&self) -> &'static str {
        self.ty
    }
}

/// Assigns tokens to identities in order of first encounter.
///
/// A tracker lives exactly as long as one estimation pass: addresses are
/// only meaningful while the graph being measured is borrowed.
#[derive(Debug, Default)]
pub(crate) struct IdentityTracker {
    tokens: HashMap<Identity, usize>,
}

impl IdentityTracker {
    /// Return the token of `identity`, and whether this is its first visit.
    pub fn token(&mut self, identity: Identity) -> (usize, bool) {
        let next = self.tokens.len();
        match self.tokens.entry(identity) {
            Entry::Occupied(entry) => (*entry.get(), false),
            Entry::Vacant(entry) => (*entry.insert(next), true),
        }
    }

    /// Register `identity`, returning true exactly once per distinct identity.
    pub fn first_visit(&mut self, identity: Identity) -> bool {
        self.token(identity).1
    }

    /// The token of `identity`, if it has been registered.
    pub fn get(&self, identity: Identity) -> Option<usize> {
        self.tokens.get(&identity).copied()
    }

    /// The number of distinct identities registered so far.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }
}
