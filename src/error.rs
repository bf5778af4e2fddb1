/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Internal failure modes.
//!
//! None of these errors reaches the caller of an estimate: each one is
//! logged and turned into a zero-byte contribution, which makes the
//! estimator move on to its next tier.

/// A capability of a value could not be exercised.
#[derive(thiserror::Error, Debug)]
pub enum InspectError {
    #[error("Value of type {0} is mutably borrowed")]
    /// A [`RefCell`](core::cell::RefCell) is mutably borrowed.
    Borrowed(&'static str),
    #[error("Value of type {0} is locked or poisoned")]
    /// A lock could not be acquired without blocking.
    Locked(&'static str),
    #[error("Value of type {0} is not enumerable")]
    /// Elements were requested from a non-enumerable value.
    NotEnumerable(&'static str),
}

/// A value could not be encoded by the serialization oracle.
#[derive(thiserror::Error, Debug)]
pub enum EncodeError {
    #[error("Type {0} has no binary encoding")]
    /// The type is not closed.
    Unsupported(&'static str),
    #[error(transparent)]
    /// A part of the value could not be inspected.
    Inspect(#[from] InspectError),
    #[error(transparent)]
    /// The binary encoder failed.
    Bincode(#[from] bincode::Error),
}
