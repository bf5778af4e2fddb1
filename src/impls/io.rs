/*
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Byte streams, which are sized by their current length.

use crate::desc::TypeDesc;
use crate::traits::Inspect;
use std::fs::File;
use std::io::{self, Cursor};

impl<T: AsRef<[u8]>> Inspect for Cursor<T> {
    #[inline(always)]
    fn declared() -> TypeDesc {
        TypeDesc::object::<Self>()
    }

    fn stream_len(&self) -> Option<io::Result<u64>> {
        Some(Ok(self.get_ref().as_ref().len() as u64))
    }
}

impl Inspect for File {
    #[inline(always)]
    fn declared() -> TypeDesc {
        TypeDesc::object::<Self>()
    }

    fn stream_len(&self) -> Option<io::Result<u64>> {
        Some(self.metadata().map(|metadata| metadata.len()))
    }
}
